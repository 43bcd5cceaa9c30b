use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::{Status, classify, days_remaining};

/// A tracked professional credential owned by a single user.
///
/// Status is never stored: it is recomputed from `expiry_date` on every read,
/// so a record can never carry a stale lifecycle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub organization: String,
    pub category: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub certificate_url: Option<String>,
    pub badge_url: Option<String>,
    pub description: Option<String>,
}

impl Certificate {
    pub fn days_remaining(&self, now: NaiveDate) -> Option<i64> {
        days_remaining(self.expiry_date, now)
    }

    pub fn status(&self, now: NaiveDate) -> Status {
        classify(self.expiry_date, now)
    }
}

/// Addable fields of a certificate; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateDraft {
    pub owner_id: String,
    pub title: String,
    pub organization: String,
    pub category: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub certificate_url: Option<String>,
    pub badge_url: Option<String>,
    pub description: Option<String>,
}

/// Partial update over the mutable fields. `id` and `owner_id` have no
/// counterpart here and cannot be changed through an edit.
#[derive(Debug, Clone, Default)]
pub struct CertificatePatch {
    pub title: Option<String>,
    pub organization: Option<String>,
    pub category: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub certificate_url: Option<String>,
    pub badge_url: Option<String>,
    pub description: Option<String>,
}
