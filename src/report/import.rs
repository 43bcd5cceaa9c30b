use chrono::NaiveDate;
use serde::Deserialize;
use std::io;
use thiserror::Error;

use crate::cert::CertificateDraft;

/// Columns a bulk-import file must carry. Presence is checked before any row
/// is parsed; per-row date ordering is left to the store's add validation.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "title",
    "organization",
    "issueDate",
    "expiryDate",
    "category",
    "credentialId",
];

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Missing columns: {0}")]
    MissingColumns(String),
    #[error("CSV file is empty.")]
    Empty,
    #[error("Parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid date '{value}' in column {column}")]
    InvalidDate { column: &'static str, value: String },
}

#[derive(Debug, Deserialize)]
struct DraftRow {
    title: String,
    organization: String,
    #[serde(rename = "issueDate")]
    issue_date: String,
    #[serde(rename = "expiryDate")]
    expiry_date: String,
    category: String,
    #[serde(rename = "credentialId")]
    credential_id: String,
}

fn parse_date(column: &'static str, value: &str) -> Result<NaiveDate, ImportError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ImportError::InvalidDate {
        column,
        value: value.to_string(),
    })
}

/// Parse an uploaded CSV into drafts for `owner_id`. An empty `expiryDate`
/// cell yields an open-ended certificate.
pub fn read_drafts_csv<R: io::Read>(
    reader: R,
    owner_id: &str,
) -> Result<Vec<CertificateDraft>, ImportError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns(missing.join(", ")));
    }

    let mut drafts = Vec::new();
    for result in rdr.deserialize::<DraftRow>() {
        let row = result?;
        let issue_date = parse_date("issueDate", &row.issue_date)?;
        let expiry_date = if row.expiry_date.trim().is_empty() {
            None
        } else {
            Some(parse_date("expiryDate", &row.expiry_date)?)
        };
        let credential_id = {
            let trimmed = row.credential_id.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        drafts.push(CertificateDraft {
            owner_id: owner_id.to_string(),
            title: row.title,
            organization: row.organization,
            category: row.category,
            issue_date,
            expiry_date,
            credential_id,
            certificate_url: None,
            badge_url: None,
            description: None,
        });
    }

    if drafts.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(drafts)
}
