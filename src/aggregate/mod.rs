pub mod stats;
pub mod views;

pub use stats::{CertStats, OwnerGroup, group_by_owner, stats_for, stats_for_owner};
pub use views::{
    DepartmentCount, MonthBucket, TitleCount, by_department, monthly_expiry_buckets, top_titles,
    upcoming_sorted,
};
