pub mod classify;

pub use classify::{
    CRITICAL_WINDOW_DAYS, EXPIRING_SOON_WINDOW_DAYS, Status, Urgency, classify,
    classify_with_threshold, days_remaining,
};
