use std::cmp::Ordering;

use tracing::debug;

use super::domain::ScoredRecord;

pub const DEFAULT_TOP_N: usize = 50;

/// Hard gates a customer must pass before being ranked as an advocate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EligibilityCriteria {
    pub minimum_nps: f64,
    pub minimum_tenure_months: f64,
    pub minimum_expansion: f64,
    pub minimum_support_sentiment: f64,
}

impl EligibilityCriteria {
    pub const STANDARD: EligibilityCriteria = EligibilityCriteria {
        minimum_nps: 8.0,
        minimum_tenure_months: 6.0,
        minimum_expansion: 0.0,
        minimum_support_sentiment: 0.7,
    };

    /// Tenure is read from the raw record and fails when missing; the other
    /// gates read the imputed values the score was computed from.
    pub fn admits(&self, record: &ScoredRecord) -> bool {
        let tenure_ok = record
            .customer
            .months_as_customer
            .is_some_and(|months| months >= self.minimum_tenure_months);

        tenure_ok
            && record.features.nps_score >= self.minimum_nps
            && record.features.expansion_indicator >= self.minimum_expansion
            && record.features.support_sentiment_score >= self.minimum_support_sentiment
    }
}

impl Default for EligibilityCriteria {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Filter to eligible records and keep the `top_n` highest scores.
///
/// Ties on advocacy score fall back to ascending `customer_id`, then input order.
pub(crate) fn select_candidates(
    scored: &[ScoredRecord],
    criteria: &EligibilityCriteria,
    top_n: usize,
) -> Vec<ScoredRecord> {
    let mut eligible: Vec<&ScoredRecord> = scored
        .iter()
        .filter(|record| criteria.admits(record))
        .collect();
    let eligible_count = eligible.len();

    eligible.sort_by(|left, right| rank_order(left, right));
    let shortlist: Vec<ScoredRecord> = eligible.into_iter().take(top_n).cloned().collect();

    debug!(
        batch = scored.len(),
        eligible = eligible_count,
        shortlisted = shortlist.len(),
        top_n,
        "advocate candidates selected"
    );
    shortlist
}

fn rank_order(left: &ScoredRecord, right: &ScoredRecord) -> Ordering {
    right
        .advocacy_score
        .total_cmp(&left.advocacy_score)
        .then_with(|| left.customer.customer_id.cmp(&right.customer.customer_id))
}

pub(crate) fn eligible_count(scored: &[ScoredRecord], criteria: &EligibilityCriteria) -> usize {
    scored.iter().filter(|record| criteria.admits(record)).count()
}
