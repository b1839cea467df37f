use super::config::ScoringConfig;
use super::domain::{CustomerRecord, DerivedFeatures};

/// Derive engagement features for every record, positionally aligned with the input.
pub(crate) fn derive_batch(
    records: &[CustomerRecord],
    config: &ScoringConfig,
) -> Vec<DerivedFeatures> {
    records
        .iter()
        .map(|record| derive_features(record, config))
        .collect()
}

fn derive_features(record: &CustomerRecord, config: &ScoringConfig) -> DerivedFeatures {
    DerivedFeatures {
        login_frequency_score: record.monthly_logins.map(f64::ln_1p).and_then(finite),
        feature_adoption_rate: ratio(record.features_used, record.features_available),
        support_sentiment_score: ratio(
            record.support_tickets_resolved,
            record.support_tickets_total.map(|total| total + 1.0),
        ),
        contract_stability_score: record
            .months_as_customer
            .map(|months| months / 12.0)
            .and_then(finite),
        expansion_indicator: ratio(record.current_arr, record.initial_arr)
            .map(|growth| growth - 1.0),
        title_influence_score: config.title_influence(&record.contact_title),
        company_size_score: record
            .company_employee_count
            .map(|employees| employees.ln_1p() / 10.0)
            .and_then(finite),
        competitive_value: record
            .replaced_competitor
            .as_deref()
            .and_then(|competitor| config.competitor_value(competitor)),
    }
}

/// Division that reports undefined results (zero denominators, NaN) as missing.
fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(numerator), Some(denominator)) => finite(numerator / denominator),
        _ => None,
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
