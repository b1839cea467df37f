use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::ScoringFeature;

/// Weighting and lookup parameters for one scoring run.
///
/// `feature_weights` keys must name known scoring features; industries missing
/// from `industry_referral_multipliers` fall back to a multiplier of 1.0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub title_influence_mapping: HashMap<String, f64>,
    pub competitor_value_mapping: HashMap<String, f64>,
    #[serde(default)]
    pub industry_referral_multipliers: HashMap<String, f64>,
    pub feature_weights: BTreeMap<ScoringFeature, f64>,
}

impl ScoringConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScoringConfigError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ScoringConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ScoringConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn title_influence(&self, title: &str) -> Option<f64> {
        self.title_influence_mapping.get(title).copied()
    }

    pub fn competitor_value(&self, competitor: &str) -> Option<f64> {
        self.competitor_value_mapping.get(competitor).copied()
    }

    /// Referral multiplier for an industry; industries without an entry count as 1.0.
    pub fn industry_multiplier(&self, industry: &str) -> f64 {
        self.industry_referral_multipliers
            .get(industry)
            .copied()
            .unwrap_or(1.0)
    }

    pub fn weight(&self, feature: ScoringFeature) -> Option<f64> {
        self.feature_weights.get(&feature).copied()
    }

    /// Scoring features that have no weight and therefore never move the score.
    pub fn unweighted_features(&self) -> Vec<ScoringFeature> {
        ScoringFeature::ALL
            .into_iter()
            .filter(|feature| !self.feature_weights.contains_key(feature))
            .collect()
    }
}

/// Fatal problems with the scoring parameters; a run never starts with a bad config.
#[derive(Debug, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("failed to read scoring configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scoring configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
