use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::cert::{Certificate, User};
use crate::status::{Status, Urgency, days_remaining};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TitleCount {
    pub title: String,
    pub count: usize,
}

/// Frequency of exact titles, most common first, truncated to `n`.
/// Ties keep first-encountered order (the sort is stable).
pub fn top_titles(certs: &[Certificate], n: usize) -> Vec<TitleCount> {
    let mut counts: Vec<TitleCount> = Vec::new();
    for cert in certs {
        match counts.iter_mut().find(|t| t.title == cert.title) {
            Some(entry) => entry.count += 1,
            None => counts.push(TitleCount {
                title: cert.title.clone(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DepartmentCount {
    pub department: String,
    pub count: usize,
}

/// Certificate counts summed over the users of each named department.
/// Departments not in the list simply do not appear.
pub fn by_department(
    certs: &[Certificate],
    users: &[User],
    departments: &[&str],
) -> Vec<DepartmentCount> {
    departments
        .iter()
        .map(|dept| {
            let count = users
                .iter()
                .filter(|u| u.department == *dept)
                .map(|u| certs.iter().filter(|c| c.owner_id == u.id).count())
                .sum();
            DepartmentCount {
                department: dept.to_string(),
                count,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthBucket {
    pub month: String,
    pub month_start: NaiveDate,
    pub count: usize,
    pub urgency: Urgency,
    pub titles: Vec<String>,
}

/// Buckets certificates by expiry month for `months` consecutive months
/// starting at `now`'s month. The urgency band is derived from the bucket's
/// month start, a reporting convenience rather than per-record status.
pub fn monthly_expiry_buckets(certs: &[Certificate], now: NaiveDate, months: u32) -> Vec<MonthBucket> {
    let first = now.with_day(1).unwrap();
    (0..months)
        .map(|i| {
            let month_start = first + Months::new(i);
            let matching: Vec<&Certificate> = certs
                .iter()
                .filter(|c| {
                    c.expiry_date.is_some_and(|d| {
                        d.year() == month_start.year() && d.month() == month_start.month()
                    })
                })
                .collect();
            MonthBucket {
                month: month_start.format("%b %y").to_string(),
                month_start,
                count: matching.len(),
                urgency: Urgency::from_days(days_remaining(Some(month_start), now)),
                titles: matching.iter().map(|c| c.title.clone()).collect(),
            }
        })
        .collect()
}

/// Certificates still ahead of their expiry, soonest first. Expired and
/// undated records are excluded; ties keep input order.
pub fn upcoming_sorted(certs: &[Certificate], now: NaiveDate) -> Vec<Certificate> {
    let mut upcoming: Vec<Certificate> = certs
        .iter()
        .filter(|c| c.expiry_date.is_some() && c.status(now) != Status::Expired)
        .cloned()
        .collect();
    upcoming.sort_by_key(|c| c.expiry_date);
    upcoming
}
