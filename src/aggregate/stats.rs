use chrono::NaiveDate;
use serde::Serialize;

use crate::cert::{Certificate, User};
use crate::status::Status;

/// Counts by derived status over a snapshot of certificates.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct CertStats {
    pub total: usize,
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

/// Single pass over the snapshot; status is recomputed per record so the
/// counts always agree with classification at `now`.
pub fn stats_for(certs: &[Certificate], now: NaiveDate) -> CertStats {
    let mut stats = CertStats::default();
    for cert in certs {
        stats.total += 1;
        match cert.status(now) {
            Status::Active => stats.active += 1,
            Status::ExpiringSoon => stats.expiring_soon += 1,
            Status::Expired => stats.expired += 1,
        }
    }
    stats
}

pub fn stats_for_owner(certs: &[Certificate], owner_id: &str, now: NaiveDate) -> CertStats {
    let owned: Vec<Certificate> = certs
        .iter()
        .filter(|c| c.owner_id == owner_id)
        .cloned()
        .collect();
    stats_for(&owned, now)
}

#[derive(Debug, Clone, Serialize)]
pub struct OwnerGroup {
    pub user: User,
    pub certs: Vec<Certificate>,
    pub stats: CertStats,
}

/// One group per user, in the order the users were given.
pub fn group_by_owner(certs: &[Certificate], users: &[User], now: NaiveDate) -> Vec<OwnerGroup> {
    users
        .iter()
        .map(|user| {
            let owned: Vec<Certificate> = certs
                .iter()
                .filter(|c| c.owner_id == user.id)
                .cloned()
                .collect();
            let stats = stats_for(&owned, now);
            OwnerGroup {
                user: user.clone(),
                certs: owned,
                stats,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{seed_certificates, seed_users};

    fn now() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 24).unwrap()
    }

    #[test]
    fn org_wide_stats_match_the_fixture() {
        let certs = seed_certificates();
        let stats = stats_for(&certs, now());
        assert_eq!(
            stats,
            CertStats {
                total: 9,
                active: 3,
                expiring_soon: 3,
                expired: 3,
            }
        );
    }

    #[test]
    fn counts_partition_the_collection() {
        let certs = seed_certificates();
        let stats = stats_for(&certs, now());
        assert_eq!(stats.total, certs.len());
        assert_eq!(stats.active + stats.expiring_soon + stats.expired, stats.total);
    }

    #[test]
    fn per_owner_stats_only_see_that_owner() {
        let certs = seed_certificates();
        let stats = stats_for_owner(&certs, "u2", now());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.expiring_soon, 1);
        assert_eq!(stats.expired, 1);

        assert_eq!(stats_for_owner(&certs, "nobody", now()).total, 0);
    }

    #[test]
    fn groups_follow_user_ordering_and_carry_matching_stats() {
        let certs = seed_certificates();
        let users = seed_users();

        let groups = group_by_owner(&certs, &users[..3], now());
        assert_eq!(groups.len(), 3);
        for group in &groups {
            assert_eq!(group.certs.len(), 3);
            assert_eq!(group.stats.total, 3);
            assert_eq!(group.stats.active, 1);
            assert_eq!(group.stats.expiring_soon, 1);
            assert_eq!(group.stats.expired, 1);
            assert!(group.certs.iter().all(|c| c.owner_id == group.user.id));
        }
        assert_eq!(groups[0].user.id, "u1");
        assert_eq!(groups[2].user.id, "u3");

        // the admin owns nothing but still gets a group
        let all = group_by_owner(&certs, &users, now());
        assert_eq!(all.len(), 4);
        assert_eq!(all[3].stats.total, 0);
    }
}
