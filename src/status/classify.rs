use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Window driving the canonical status: certs expiring within 90 days are `ExpiringSoon`.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 90;

/// Window driving the display urgency banding only, never the status itself.
pub const CRITICAL_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Active,
    ExpiringSoon,
    Expired,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Active => "active",
            Status::ExpiringSoon => "expiring_soon",
            Status::Expired => "expired",
        };
        f.write_str(s)
    }
}

/// Urgency color band for report surfaces: red under 30 days, amber under 90,
/// green otherwise. Distinct policy from the status window above.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Critical,
    Warning,
    Ok,
}

impl Urgency {
    pub fn from_days(days: Option<i64>) -> Self {
        match days {
            Some(d) if d < CRITICAL_WINDOW_DAYS => Urgency::Critical,
            Some(d) if d < EXPIRING_SOON_WINDOW_DAYS => Urgency::Warning,
            _ => Urgency::Ok,
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Urgency::Critical => "critical",
            Urgency::Warning => "warning",
            Urgency::Ok => "ok",
        };
        f.write_str(s)
    }
}

/// Signed calendar days from `now` until `expiry`, negative once past.
/// `None` when there is no expiry date.
pub fn days_remaining(expiry: Option<NaiveDate>, now: NaiveDate) -> Option<i64> {
    expiry.map(|date| date.signed_duration_since(now).num_days())
}

/// Derive status from the expiry date. A certificate without an expiry date
/// never expires and counts as active.
pub fn classify(expiry: Option<NaiveDate>, now: NaiveDate) -> Status {
    classify_with_threshold(expiry, now, EXPIRING_SOON_WINDOW_DAYS)
}

pub fn classify_with_threshold(expiry: Option<NaiveDate>, now: NaiveDate, threshold: i64) -> Status {
    match days_remaining(expiry, now) {
        None => Status::Active,
        Some(d) if d < 0 => Status::Expired,
        Some(d) if d <= threshold => Status::ExpiringSoon,
        Some(_) => Status::Active,
    }
}
