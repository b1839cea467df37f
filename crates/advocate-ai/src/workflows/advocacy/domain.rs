use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of the customer table as supplied by the data loader.
///
/// Numeric fields are optional because the source table may leave cells blank;
/// blanks surface as missing features and are imputed during scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRecord {
    pub customer_id: String,
    pub company_name: String,
    pub contact_name: String,
    pub contact_title: String,
    pub industry: String,
    pub monthly_logins: Option<f64>,
    pub features_used: Option<f64>,
    pub features_available: Option<f64>,
    pub support_tickets_resolved: Option<f64>,
    pub support_tickets_total: Option<f64>,
    pub months_as_customer: Option<f64>,
    pub current_arr: Option<f64>,
    pub initial_arr: Option<f64>,
    pub company_employee_count: Option<f64>,
    pub replaced_competitor: Option<String>,
    pub nps_score: Option<f64>,
    pub reference_willingness: Option<f64>,
}

/// Per-record engagement and value signals computed from raw fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedFeatures {
    pub login_frequency_score: Option<f64>,
    pub feature_adoption_rate: Option<f64>,
    pub support_sentiment_score: Option<f64>,
    pub contract_stability_score: Option<f64>,
    pub expansion_indicator: Option<f64>,
    pub title_influence_score: Option<f64>,
    pub company_size_score: Option<f64>,
    pub competitive_value: Option<f64>,
}

/// The ten inputs of the weighted advocacy sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFeature {
    LoginFrequencyScore,
    FeatureAdoptionRate,
    SupportSentimentScore,
    ContractStabilityScore,
    ExpansionIndicator,
    TitleInfluenceScore,
    CompanySizeScore,
    CompetitiveValue,
    NpsScore,
    ReferenceWillingness,
}

impl ScoringFeature {
    pub const ALL: [ScoringFeature; 10] = [
        ScoringFeature::LoginFrequencyScore,
        ScoringFeature::FeatureAdoptionRate,
        ScoringFeature::SupportSentimentScore,
        ScoringFeature::ContractStabilityScore,
        ScoringFeature::ExpansionIndicator,
        ScoringFeature::TitleInfluenceScore,
        ScoringFeature::CompanySizeScore,
        ScoringFeature::CompetitiveValue,
        ScoringFeature::NpsScore,
        ScoringFeature::ReferenceWillingness,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScoringFeature::LoginFrequencyScore => "login_frequency_score",
            ScoringFeature::FeatureAdoptionRate => "feature_adoption_rate",
            ScoringFeature::SupportSentimentScore => "support_sentiment_score",
            ScoringFeature::ContractStabilityScore => "contract_stability_score",
            ScoringFeature::ExpansionIndicator => "expansion_indicator",
            ScoringFeature::TitleInfluenceScore => "title_influence_score",
            ScoringFeature::CompanySizeScore => "company_size_score",
            ScoringFeature::CompetitiveValue => "competitive_value",
            ScoringFeature::NpsScore => "nps_score",
            ScoringFeature::ReferenceWillingness => "reference_willingness",
        }
    }
}

impl fmt::Display for ScoringFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fully populated feature vector after batch-median imputation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FeatureVector {
    pub login_frequency_score: f64,
    pub feature_adoption_rate: f64,
    pub support_sentiment_score: f64,
    pub contract_stability_score: f64,
    pub expansion_indicator: f64,
    pub title_influence_score: f64,
    pub company_size_score: f64,
    pub competitive_value: f64,
    pub nps_score: f64,
    pub reference_willingness: f64,
}

impl FeatureVector {
    pub fn get(&self, feature: ScoringFeature) -> f64 {
        match feature {
            ScoringFeature::LoginFrequencyScore => self.login_frequency_score,
            ScoringFeature::FeatureAdoptionRate => self.feature_adoption_rate,
            ScoringFeature::SupportSentimentScore => self.support_sentiment_score,
            ScoringFeature::ContractStabilityScore => self.contract_stability_score,
            ScoringFeature::ExpansionIndicator => self.expansion_indicator,
            ScoringFeature::TitleInfluenceScore => self.title_influence_score,
            ScoringFeature::CompanySizeScore => self.company_size_score,
            ScoringFeature::CompetitiveValue => self.competitive_value,
            ScoringFeature::NpsScore => self.nps_score,
            ScoringFeature::ReferenceWillingness => self.reference_willingness,
        }
    }

    pub(crate) fn set(&mut self, feature: ScoringFeature, value: f64) {
        let slot = match feature {
            ScoringFeature::LoginFrequencyScore => &mut self.login_frequency_score,
            ScoringFeature::FeatureAdoptionRate => &mut self.feature_adoption_rate,
            ScoringFeature::SupportSentimentScore => &mut self.support_sentiment_score,
            ScoringFeature::ContractStabilityScore => &mut self.contract_stability_score,
            ScoringFeature::ExpansionIndicator => &mut self.expansion_indicator,
            ScoringFeature::TitleInfluenceScore => &mut self.title_influence_score,
            ScoringFeature::CompanySizeScore => &mut self.company_size_score,
            ScoringFeature::CompetitiveValue => &mut self.competitive_value,
            ScoringFeature::NpsScore => &mut self.nps_score,
            ScoringFeature::ReferenceWillingness => &mut self.reference_willingness,
        };
        *slot = value;
    }
}

/// Customer row carrying its imputed features and batch-relative advocacy score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    pub customer: CustomerRecord,
    pub derived: DerivedFeatures,
    pub features: FeatureVector,
    pub raw_score: f64,
    pub advocacy_score: f64,
}

/// Ordinal outreach tier; declaration order runs from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutreachPriority {
    Immediate,
    High,
    Medium,
    Low,
}

impl OutreachPriority {
    pub fn label(self) -> &'static str {
        match self {
            OutreachPriority::Immediate => "Immediate – Executive Outreach",
            OutreachPriority::High => "High – Account Manager Outreach",
            OutreachPriority::Medium => "Medium – Customer Success Outreach",
            OutreachPriority::Low => "Low – Automated Outreach",
        }
    }
}

impl fmt::Display for OutreachPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for OutreachPriority {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Suggested engagement format for a shortlisted advocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutreachApproach {
    ExecutiveSession,
    AdvisoryBoard,
    SuccessStoryInterview,
}

impl OutreachApproach {
    pub fn label(self) -> &'static str {
        match self {
            OutreachApproach::ExecutiveSession => "Executive dinner or strategic session",
            OutreachApproach::AdvisoryBoard => "Customer advisory board invitation",
            OutreachApproach::SuccessStoryInterview => "Structured success story interview",
        }
    }
}

impl fmt::Display for OutreachApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for OutreachApproach {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Outreach plan for one shortlisted customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub customer_id: String,
    pub company_name: String,
    pub contact_name: String,
    pub advocacy_score: f64,
    pub outreach_priority: OutreachPriority,
    pub recommended_approach: OutreachApproach,
    pub expected_value: f64,
    pub talking_points: Vec<String>,
}
