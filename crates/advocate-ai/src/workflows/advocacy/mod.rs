//! Advocacy scoring: derive engagement features, score and normalize them across
//! the batch, shortlist eligible customers, and draft outreach recommendations.
//!
//! Scores are batch-relative. Missing features are imputed with the median of the
//! current batch and raw scores are min-max scaled against the same batch, so the
//! same customer can score differently when run alongside different peers.

mod config;
pub mod domain;
mod features;
mod ingest;
mod recommendation;
mod report;
mod scoring;
mod selection;

#[cfg(test)]
mod tests;

pub use config::{ScoringConfig, ScoringConfigError};
pub use domain::{
    CustomerRecord, DerivedFeatures, FeatureVector, OutreachApproach, OutreachPriority,
    Recommendation, ScoredRecord, ScoringFeature,
};
pub use ingest::{CustomerDataError, CustomerDataLoader, REQUIRED_COLUMNS};
pub use recommendation::{
    priority_for_score, BETA_ACCESS_POINT, ENTERPRISE_INSIGHTS_POINT, ROADMAP_INFLUENCE_POINT,
    SUCCESS_STORY_POINT,
};
pub use report::{
    render_batch_summary, render_top_candidates, write_recommendations_csv,
    write_recommendations_to_path, BatchSummary, ReportError, CONSOLE_CANDIDATE_LIMIT,
    RECOMMENDATION_COLUMNS,
};
pub use selection::{EligibilityCriteria, DEFAULT_TOP_N};

use serde::Serialize;
use tracing::{debug, info};

/// Stateless pipeline that applies one immutable scoring configuration to batches.
pub struct AdvocacyPipeline {
    config: ScoringConfig,
    criteria: EligibilityCriteria,
}

impl AdvocacyPipeline {
    pub fn new(config: ScoringConfig) -> Self {
        let unweighted = config.unweighted_features();
        if !unweighted.is_empty() {
            let names: Vec<&str> = unweighted.iter().map(|feature| feature.name()).collect();
            debug!(features = ?names, "features without a weight do not contribute to scores");
        }

        Self {
            config,
            criteria: EligibilityCriteria::STANDARD,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn criteria(&self) -> &EligibilityCriteria {
        &self.criteria
    }

    /// Derived features for each record, in input order.
    pub fn derive(&self, records: &[CustomerRecord]) -> Vec<DerivedFeatures> {
        features::derive_batch(records, &self.config)
    }

    /// Derive, impute, weight, and normalize a batch. Output order matches input order.
    pub fn score(&self, records: &[CustomerRecord]) -> Vec<ScoredRecord> {
        let derived = self.derive(records);
        scoring::score_batch(records, &derived, &self.config)
    }

    /// Eligible records ranked by descending advocacy score, at most `top_n` long.
    pub fn shortlist(&self, scored: &[ScoredRecord], top_n: usize) -> Vec<ScoredRecord> {
        selection::select_candidates(scored, &self.criteria, top_n)
    }

    pub fn recommend(&self, shortlist: &[ScoredRecord]) -> Vec<Recommendation> {
        shortlist
            .iter()
            .map(|record| recommendation::recommend(record, &self.config))
            .collect()
    }

    pub fn run(&self, records: &[CustomerRecord], top_n: usize) -> AdvocacyRun {
        let scored = self.score(records);
        let shortlist = self.shortlist(&scored, top_n);
        let recommendations = self.recommend(&shortlist);

        let summary = BatchSummary::new(
            &scored,
            selection::eligible_count(&scored, &self.criteria),
            recommendations.len(),
        );
        info!(
            processed = summary.processed,
            eligible = summary.eligible,
            shortlisted = summary.shortlisted,
            average_score = summary.average_score,
            "advocacy scoring run complete"
        );

        AdvocacyRun {
            scored,
            recommendations,
            summary,
        }
    }
}

/// Everything one batch run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvocacyRun {
    pub scored: Vec<ScoredRecord>,
    pub recommendations: Vec<Recommendation>,
    pub summary: BatchSummary,
}
