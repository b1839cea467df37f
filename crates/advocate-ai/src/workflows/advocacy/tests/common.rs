use std::collections::{BTreeMap, HashMap};

use crate::workflows::advocacy::domain::{CustomerRecord, ScoredRecord, ScoringFeature};
use crate::workflows::advocacy::{AdvocacyPipeline, ScoringConfig};

pub(super) fn scoring_config() -> ScoringConfig {
    let title_influence_mapping = HashMap::from([
        ("CTO".to_string(), 1.0),
        ("VP Customer Success".to_string(), 0.8),
        ("Analyst".to_string(), 0.3),
    ]);
    let competitor_value_mapping = HashMap::from([
        ("LegacyCRM".to_string(), 0.7),
        ("SpreadsheetSuite".to_string(), 0.4),
    ]);
    let industry_referral_multipliers = HashMap::from([("Tech".to_string(), 1.2)]);
    let feature_weights = BTreeMap::from([
        (ScoringFeature::LoginFrequencyScore, 0.10),
        (ScoringFeature::FeatureAdoptionRate, 0.15),
        (ScoringFeature::SupportSentimentScore, 0.10),
        (ScoringFeature::ContractStabilityScore, 0.05),
        (ScoringFeature::ExpansionIndicator, 0.15),
        (ScoringFeature::TitleInfluenceScore, 0.10),
        (ScoringFeature::CompanySizeScore, 0.05),
        (ScoringFeature::CompetitiveValue, 0.05),
        (ScoringFeature::NpsScore, 0.15),
        (ScoringFeature::ReferenceWillingness, 0.10),
    ]);

    ScoringConfig {
        title_influence_mapping,
        competitor_value_mapping,
        industry_referral_multipliers,
        feature_weights,
    }
}

pub(super) fn pipeline() -> AdvocacyPipeline {
    AdvocacyPipeline::new(scoring_config())
}

/// A customer that passes every eligibility gate.
pub(super) fn customer(id: &str) -> CustomerRecord {
    CustomerRecord {
        customer_id: id.to_string(),
        company_name: format!("{id} Holdings"),
        contact_name: format!("Contact {id}"),
        contact_title: "VP Customer Success".to_string(),
        industry: "Tech".to_string(),
        monthly_logins: Some(20.0),
        features_used: Some(6.0),
        features_available: Some(10.0),
        support_tickets_resolved: Some(9.0),
        support_tickets_total: Some(10.0),
        months_as_customer: Some(24.0),
        current_arr: Some(60_000.0),
        initial_arr: Some(50_000.0),
        company_employee_count: Some(500.0),
        replaced_competitor: Some("LegacyCRM".to_string()),
        nps_score: Some(9.0),
        reference_willingness: Some(0.8),
    }
}

/// Score a single record, then pin its advocacy score for downstream stages.
pub(super) fn scored_with_score(record: CustomerRecord, advocacy_score: f64) -> ScoredRecord {
    let mut scored = pipeline()
        .score(&[record])
        .pop()
        .expect("one scored record");
    scored.advocacy_score = advocacy_score;
    scored
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
