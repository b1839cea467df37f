use super::config::ScoringConfig;
use super::domain::{OutreachApproach, OutreachPriority, Recommendation, ScoredRecord};

/// Referrals are assumed to be worth half of the advocate's current ARR.
const REFERRAL_SHARE_OF_ARR: f64 = 0.5;
const EXECUTIVE_ARR_THRESHOLD: f64 = 100_000.0;
const ENTERPRISE_ARR_THRESHOLD: f64 = 50_000.0;
const ADVISORY_BOARD_MIN_NPS: f64 = 9.0;
const SUCCESS_STORY_MIN_SCORE: f64 = 85.0;

pub const SUCCESS_STORY_POINT: &str = "Recognition as top 10% customer success story";
pub const ENTERPRISE_INSIGHTS_POINT: &str =
    "Enterprise-level implementation insights valuable to peers";
pub const ROADMAP_INFLUENCE_POINT: &str =
    "Opportunity to influence product roadmap through advisory participation";
pub const BETA_ACCESS_POINT: &str = "Exclusive access to beta features and industry research";

pub(crate) fn recommend(record: &ScoredRecord, config: &ScoringConfig) -> Recommendation {
    let customer = &record.customer;
    Recommendation {
        customer_id: customer.customer_id.clone(),
        company_name: customer.company_name.clone(),
        contact_name: customer.contact_name.clone(),
        advocacy_score: round_one_decimal(record.advocacy_score),
        outreach_priority: priority_for_score(record.advocacy_score),
        recommended_approach: approach_for(record),
        expected_value: expected_referral_value(record, config),
        talking_points: talking_points(record),
    }
}

/// Tier lower bounds are inclusive and evaluated from the top down.
pub fn priority_for_score(score: f64) -> OutreachPriority {
    if score >= 90.0 {
        OutreachPriority::Immediate
    } else if score >= 80.0 {
        OutreachPriority::High
    } else if score >= 70.0 {
        OutreachPriority::Medium
    } else {
        OutreachPriority::Low
    }
}

fn approach_for(record: &ScoredRecord) -> OutreachApproach {
    if arr_exceeds(record, EXECUTIVE_ARR_THRESHOLD) {
        OutreachApproach::ExecutiveSession
    } else if record.features.nps_score >= ADVISORY_BOARD_MIN_NPS {
        OutreachApproach::AdvisoryBoard
    } else {
        OutreachApproach::SuccessStoryInterview
    }
}

/// A missing current ARR is worth nothing.
fn expected_referral_value(record: &ScoredRecord, config: &ScoringConfig) -> f64 {
    let current_arr = record.customer.current_arr.unwrap_or(0.0);
    current_arr * REFERRAL_SHARE_OF_ARR * config.industry_multiplier(&record.customer.industry)
}

fn talking_points(record: &ScoredRecord) -> Vec<String> {
    let mut points = Vec::with_capacity(4);

    if record.advocacy_score >= SUCCESS_STORY_MIN_SCORE {
        points.push(SUCCESS_STORY_POINT.to_string());
    }
    if arr_exceeds(record, ENTERPRISE_ARR_THRESHOLD) {
        points.push(ENTERPRISE_INSIGHTS_POINT.to_string());
    }
    points.push(ROADMAP_INFLUENCE_POINT.to_string());
    points.push(BETA_ACCESS_POINT.to_string());

    points
}

fn arr_exceeds(record: &ScoredRecord, threshold: f64) -> bool {
    record
        .customer
        .current_arr
        .is_some_and(|arr| arr > threshold)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
