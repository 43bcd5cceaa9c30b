pub mod expiry;
pub mod import;

pub use expiry::{
    ExpiryRow, ExpiryWindow, build_expiry_report, export_inventory_csv, format_date,
    save_report_csv,
};
pub use import::{ImportError, read_drafts_csv};
