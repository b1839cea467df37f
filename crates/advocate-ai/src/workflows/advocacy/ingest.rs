use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::domain::CustomerRecord;

/// Columns every customer table must provide, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 17] = [
    "customer_id",
    "company_name",
    "contact_name",
    "contact_title",
    "industry",
    "monthly_logins",
    "features_used",
    "features_available",
    "support_tickets_resolved",
    "support_tickets_total",
    "months_as_customer",
    "current_arr",
    "initial_arr",
    "company_employee_count",
    "replaced_competitor",
    "nps_score",
    "reference_willingness",
];

/// Reads customer tables into in-memory records.
pub struct CustomerDataLoader;

impl CustomerDataLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CustomerRecord>, CustomerDataError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CustomerRecord>, CustomerDataError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if let Some(column) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|header| header == **column))
        {
            return Err(CustomerDataError::MissingColumn {
                column: (*column).to_string(),
            });
        }

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<CustomerRow>() {
            records.push(row?.into_record());
        }

        debug!(records = records.len(), "customer table loaded");
        Ok(records)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CustomerDataError {
    #[error("failed to read customer data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid customer CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("customer data is missing required column '{column}'")]
    MissingColumn { column: String },
}

#[derive(Debug, Deserialize)]
struct CustomerRow {
    customer_id: String,
    company_name: String,
    contact_name: String,
    contact_title: String,
    industry: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    monthly_logins: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    features_used: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    features_available: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    support_tickets_resolved: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    support_tickets_total: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    months_as_customer: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    current_arr: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    initial_arr: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    company_employee_count: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    replaced_competitor: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    nps_score: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    reference_willingness: Option<f64>,
}

impl CustomerRow {
    fn into_record(self) -> CustomerRecord {
        CustomerRecord {
            customer_id: self.customer_id,
            company_name: self.company_name,
            contact_name: self.contact_name,
            contact_title: self.contact_title,
            industry: self.industry,
            monthly_logins: self.monthly_logins,
            features_used: self.features_used,
            features_available: self.features_available,
            support_tickets_resolved: self.support_tickets_resolved,
            support_tickets_total: self.support_tickets_total,
            months_as_customer: self.months_as_customer,
            current_arr: self.current_arr,
            initial_arr: self.initial_arr,
            company_employee_count: self.company_employee_count,
            replaced_competitor: self.replaced_competitor,
            nps_score: self.nps_score,
            reference_willingness: self.reference_willingness,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Blank, `NaN` and infinite cells are missing values; anything else must parse as a number.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = empty_string_as_none(deserializer)? else {
        return Ok(None);
    };

    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| serde::de::Error::custom(format!("'{raw}' is not a number")))?;
    Ok(Some(value).filter(|value| value.is_finite()))
}
