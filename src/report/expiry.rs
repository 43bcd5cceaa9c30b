use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

use crate::cert::Certificate;
use crate::status::Status;
use crate::store::UserDirectory;

/// The report tabs: everything, or certificates due within a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryWindow {
    All,
    Days30,
    Days60,
    Days90,
}

impl ExpiryWindow {
    pub fn days(self) -> Option<i64> {
        match self {
            ExpiryWindow::All => None,
            ExpiryWindow::Days30 => Some(30),
            ExpiryWindow::Days60 => Some(60),
            ExpiryWindow::Days90 => Some(90),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExpiryWindow::All => "All",
            ExpiryWindow::Days30 => "Next 30 Days",
            ExpiryWindow::Days60 => "Next 60 Days",
            ExpiryWindow::Days90 => "Next 90 Days",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpiryRow {
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Certificate")]
    pub certificate: String,
    #[serde(rename = "Organization")]
    pub organization: String,
    #[serde(rename = "Expiry Date")]
    pub expiry_date: String,
    #[serde(rename = "Days Left")]
    pub days_left: Option<i64>,
    #[serde(rename = "Status")]
    pub status: Status,
}

/// `dd MMM yyyy`, or an em-dash placeholder when the date is absent.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d %b %Y").to_string(),
        None => "—".to_string(),
    }
}

/// Rows for the expiry report. `All` covers every certificate; a windowed
/// report keeps only those due within the window (already-expired records
/// drop out). Always ascending by expiry date, undated records last.
pub fn build_expiry_report(
    certs: &[Certificate],
    users: &UserDirectory,
    window: ExpiryWindow,
    now: NaiveDate,
) -> Vec<ExpiryRow> {
    let mut selected: Vec<Certificate> = match window.days() {
        None => certs.to_vec(),
        Some(limit) => certs
            .iter()
            .filter(|c| matches!(c.days_remaining(now), Some(d) if d >= 0 && d <= limit))
            .cloned()
            .collect(),
    };
    selected.sort_by_key(|c| (c.expiry_date.is_none(), c.expiry_date));

    selected
        .iter()
        .map(|c| ExpiryRow {
            user: users
                .get_by_id(&c.owner_id)
                .map(|u| u.name.clone())
                .unwrap_or_else(|| "—".to_string()),
            certificate: c.title.clone(),
            organization: c.organization.clone(),
            expiry_date: format_date(c.expiry_date),
            days_left: c.days_remaining(now),
            status: c.status(now),
        })
        .collect()
}

pub fn save_report_csv<P: AsRef<Path>>(rows: &[ExpiryRow], path: P) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct InventoryRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Organization")]
    organization: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Status")]
    status: Status,
    #[serde(rename = "Issue Date")]
    issue_date: String,
    #[serde(rename = "Expiry Date")]
    expiry_date: String,
    #[serde(rename = "Credential ID")]
    credential_id: String,
    #[serde(rename = "Owner")]
    owner: String,
}

/// Full inventory export, one row per certificate in collection order.
pub fn export_inventory_csv<P: AsRef<Path>>(
    certs: &[Certificate],
    users: &UserDirectory,
    now: NaiveDate,
    path: P,
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for c in certs {
        wtr.serialize(InventoryRow {
            title: c.title.clone(),
            organization: c.organization.clone(),
            category: c.category.clone(),
            status: c.status(now),
            issue_date: c.issue_date.format("%Y-%m-%d").to_string(),
            expiry_date: c
                .expiry_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            credential_id: c.credential_id.clone().unwrap_or_default(),
            owner: users
                .get_by_id(&c.owner_id)
                .map(|u| u.name.clone())
                .unwrap_or_default(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
