use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::domain::{Recommendation, ScoredRecord};

/// Console listing length used by the CLI when no output file is requested.
pub const CONSOLE_CANDIDATE_LIMIT: usize = 10;

/// Headline numbers for a scored batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub average_score: f64,
    pub eligible: usize,
    pub shortlisted: usize,
}

impl BatchSummary {
    pub fn new(scored: &[ScoredRecord], eligible: usize, shortlisted: usize) -> Self {
        let average_score = if scored.is_empty() {
            0.0
        } else {
            scored.iter().map(|record| record.advocacy_score).sum::<f64>() / scored.len() as f64
        };

        Self {
            processed: scored.len(),
            average_score,
            eligible,
            shortlisted,
        }
    }
}

pub fn render_batch_summary(summary: &BatchSummary) -> String {
    format!(
        "Processed {} customer records\nAverage advocacy score: {:.1}",
        summary.processed, summary.average_score
    )
}

pub fn render_top_candidates(recommendations: &[Recommendation], limit: usize) -> String {
    let mut output = String::from("Top Advocacy Candidates:");
    for recommendation in recommendations.iter().take(limit) {
        let _ = write!(
            output,
            "\n- {}: Score {:.1} ({})",
            recommendation.company_name,
            recommendation.advocacy_score,
            recommendation.outreach_priority
        );
    }
    output
}

/// Header of the recommendations CSV; matches the field order of `RecommendationRow`.
pub const RECOMMENDATION_COLUMNS: [&str; 8] = [
    "customer_id",
    "company_name",
    "contact_name",
    "advocacy_score",
    "outreach_priority",
    "recommended_approach",
    "expected_value",
    "talking_points",
];

#[derive(Debug, Serialize)]
struct RecommendationRow<'a> {
    customer_id: &'a str,
    company_name: &'a str,
    contact_name: &'a str,
    advocacy_score: f64,
    outreach_priority: &'static str,
    recommended_approach: &'static str,
    expected_value: f64,
    talking_points: String,
}

impl<'a> From<&'a Recommendation> for RecommendationRow<'a> {
    fn from(recommendation: &'a Recommendation) -> Self {
        Self {
            customer_id: &recommendation.customer_id,
            company_name: &recommendation.company_name,
            contact_name: &recommendation.contact_name,
            advocacy_score: recommendation.advocacy_score,
            outreach_priority: recommendation.outreach_priority.label(),
            recommended_approach: recommendation.recommended_approach.label(),
            expected_value: recommendation.expected_value,
            talking_points: recommendation.talking_points.join("; "),
        }
    }
}

/// Write recommendations as CSV with a header row, one row per recommendation.
/// An empty list still produces the header.
pub fn write_recommendations_csv<W: Write>(
    writer: W,
    recommendations: &[Recommendation],
) -> Result<(), ReportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(RECOMMENDATION_COLUMNS)?;
    for recommendation in recommendations {
        csv_writer.serialize(RecommendationRow::from(recommendation))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_recommendations_to_path<P: AsRef<Path>>(
    path: P,
    recommendations: &[Recommendation],
) -> Result<(), ReportError> {
    let file = std::fs::File::create(path)?;
    write_recommendations_csv(file, recommendations)
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write recommendations: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode recommendations as CSV: {0}")]
    Csv(#[from] csv::Error),
}
