use tracing::{debug, warn};

use super::config::ScoringConfig;
use super::domain::{CustomerRecord, DerivedFeatures, FeatureVector, ScoredRecord, ScoringFeature};

/// Score a derived batch: impute missing features with batch medians, apply the
/// configured weights, then rescale raw scores onto 0..=100 relative to the batch.
pub(crate) fn score_batch(
    records: &[CustomerRecord],
    derived: &[DerivedFeatures],
    config: &ScoringConfig,
) -> Vec<ScoredRecord> {
    let observed: Vec<[Option<f64>; 10]> = records
        .iter()
        .zip(derived)
        .map(|(record, features)| observed_features(record, features))
        .collect();

    let medians = batch_medians(&observed);
    let vectors: Vec<FeatureVector> = observed
        .iter()
        .map(|values| impute(values, &medians))
        .collect();

    let raw_scores = fill_overflowed_scores(
        vectors
            .iter()
            .map(|vector| weighted_sum(vector, config))
            .collect(),
    );
    let advocacy_scores = normalize(&raw_scores);

    records
        .iter()
        .zip(derived)
        .zip(vectors)
        .zip(raw_scores.into_iter().zip(advocacy_scores))
        .map(
            |(((customer, derived), features), (raw_score, advocacy_score))| ScoredRecord {
                customer: customer.clone(),
                derived: *derived,
                features,
                raw_score,
                advocacy_score,
            },
        )
        .collect()
}

/// Feature values in `ScoringFeature::ALL` order, before imputation.
fn observed_features(record: &CustomerRecord, derived: &DerivedFeatures) -> [Option<f64>; 10] {
    ScoringFeature::ALL.map(|feature| {
        let value = match feature {
            ScoringFeature::LoginFrequencyScore => derived.login_frequency_score,
            ScoringFeature::FeatureAdoptionRate => derived.feature_adoption_rate,
            ScoringFeature::SupportSentimentScore => derived.support_sentiment_score,
            ScoringFeature::ContractStabilityScore => derived.contract_stability_score,
            ScoringFeature::ExpansionIndicator => derived.expansion_indicator,
            ScoringFeature::TitleInfluenceScore => derived.title_influence_score,
            ScoringFeature::CompanySizeScore => derived.company_size_score,
            ScoringFeature::CompetitiveValue => derived.competitive_value,
            ScoringFeature::NpsScore => record.nps_score,
            ScoringFeature::ReferenceWillingness => record.reference_willingness,
        };
        value.filter(|value| value.is_finite())
    })
}

/// Per-feature batch medians; `None` when the whole batch lacks the feature.
fn batch_medians(observed: &[[Option<f64>; 10]]) -> [Option<f64>; 10] {
    let mut medians = [None; 10];
    for (index, feature) in ScoringFeature::ALL.into_iter().enumerate() {
        let mut values: Vec<f64> = observed.iter().filter_map(|row| row[index]).collect();
        let missing = observed.len() - values.len();
        medians[index] = median(&mut values);

        if missing > 0 {
            match medians[index] {
                Some(median) => {
                    debug!(%feature, missing, median, "imputed missing feature values")
                }
                None => warn!(
                    %feature,
                    missing, "feature has no observed values in batch; filled with 0"
                ),
            }
        }
    }
    medians
}

pub(crate) fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// A feature absent from the entire batch is constant across it, so it is filled
/// with zero; a constant offset cannot change normalized scores or ranking.
fn impute(values: &[Option<f64>; 10], medians: &[Option<f64>; 10]) -> FeatureVector {
    let mut vector = FeatureVector::default();
    for (index, feature) in ScoringFeature::ALL.into_iter().enumerate() {
        let value = values[index].or(medians[index]).unwrap_or(0.0);
        vector.set(feature, value);
    }
    vector
}

/// Only weighted features contribute; unweighted ones add nothing.
fn weighted_sum(vector: &FeatureVector, config: &ScoringConfig) -> f64 {
    config
        .feature_weights
        .iter()
        .map(|(feature, weight)| vector.get(*feature) * weight)
        .sum()
}

/// A weighted sum can overflow even when every input is finite. Such scores are
/// treated like missing values and take the median of the finite raw scores.
fn fill_overflowed_scores(raw_scores: Vec<f64>) -> Vec<f64> {
    let mut finite: Vec<f64> = raw_scores
        .iter()
        .copied()
        .filter(|raw| raw.is_finite())
        .collect();
    let overflowed = raw_scores.len() - finite.len();
    if overflowed == 0 {
        return raw_scores;
    }

    let fill = median(&mut finite).unwrap_or(0.0);
    warn!(
        overflowed,
        fill, "raw scores overflowed; replaced with the batch median"
    );
    raw_scores
        .into_iter()
        .map(|raw| if raw.is_finite() { raw } else { fill })
        .collect()
}

/// Min-max rescale onto 0..=100. A zero-variance batch scores 0 throughout.
pub(crate) fn normalize(raw_scores: &[f64]) -> Vec<f64> {
    let Some(min) = raw_scores.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max = raw_scores.iter().copied().fold(min, f64::max);
    let spread = max - min;

    // Extremes far apart can overflow the spread; halving both sides keeps the ratio.
    if spread.is_infinite() {
        let half_spread = max / 2.0 - min / 2.0;
        return raw_scores
            .iter()
            .map(|raw| (raw / 2.0 - min / 2.0) / half_spread * 100.0)
            .collect();
    }

    if spread == 0.0 {
        if raw_scores.len() > 1 {
            warn!(
                records = raw_scores.len(),
                raw_score = min,
                "zero-variance batch; every advocacy score set to 0"
            );
        }
        return vec![0.0; raw_scores.len()];
    }

    raw_scores
        .iter()
        .map(|raw| (raw - min) / spread * 100.0)
        .collect()
}
