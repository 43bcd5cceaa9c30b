use chrono::{NaiveDate, Utc};
use log::debug;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{CertFilter, StoreError, UserDirectory};
use crate::cert::{Certificate, CertificateDraft, CertificatePatch};

const MAX_DESCRIPTION_LEN: usize = 300;

/// The single mutable collection of certificate records, insertion-ordered.
/// Every operation takes the lock once and either applies in full or leaves
/// the collection untouched.
pub struct CertificateStore {
    certs: Arc<RwLock<Vec<Certificate>>>,
}

impl CertificateStore {
    pub fn new() -> Self {
        Self {
            certs: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn seeded(records: Vec<Certificate>) -> Self {
        Self {
            certs: Arc::new(RwLock::new(records)),
        }
    }

    pub async fn len(&self) -> usize {
        self.certs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.certs.read().await.is_empty()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Certificate> {
        self.certs.read().await.iter().find(|c| c.id == id).cloned()
    }

    pub async fn list(&self) -> Vec<Certificate> {
        self.certs.read().await.clone()
    }

    pub async fn list_by_owner(&self, owner_id: &str) -> Vec<Certificate> {
        self.certs
            .read()
            .await
            .iter()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect()
    }

    pub async fn add(&self, draft: CertificateDraft) -> Result<Certificate, StoreError> {
        if draft.owner_id.trim().is_empty() {
            return Err(StoreError::Validation("owner is required".to_string()));
        }
        validate_fields(
            &draft.title,
            &draft.organization,
            &draft.category,
            draft.issue_date,
            draft.expiry_date,
            draft.description.as_deref(),
        )?;

        let mut certs = self.certs.write().await;
        let cert = Certificate {
            id: next_id(&certs),
            owner_id: draft.owner_id,
            title: draft.title,
            organization: draft.organization,
            category: draft.category,
            issue_date: draft.issue_date,
            expiry_date: draft.expiry_date,
            credential_id: draft.credential_id,
            certificate_url: draft.certificate_url,
            badge_url: draft.badge_url,
            description: draft.description,
        };
        certs.push(cert.clone());
        debug!("certificate added: {} ({})", cert.id, cert.title);
        Ok(cert)
    }

    /// Merge `patch` over the record. `id` and `owner_id` stay as they are;
    /// the merged record is re-validated before anything is written back.
    pub async fn update(&self, id: &str, patch: CertificatePatch) -> Result<Certificate, StoreError> {
        let mut certs = self.certs.write().await;
        let Some(pos) = certs.iter().position(|c| c.id == id) else {
            return Err(StoreError::NotFound { id: id.to_string() });
        };

        let mut merged = certs[pos].clone();
        if let Some(title) = patch.title {
            merged.title = title;
        }
        if let Some(organization) = patch.organization {
            merged.organization = organization;
        }
        if let Some(category) = patch.category {
            merged.category = category;
        }
        if let Some(issue_date) = patch.issue_date {
            merged.issue_date = issue_date;
        }
        if let Some(expiry_date) = patch.expiry_date {
            merged.expiry_date = Some(expiry_date);
        }
        if let Some(credential_id) = patch.credential_id {
            merged.credential_id = Some(credential_id);
        }
        if let Some(certificate_url) = patch.certificate_url {
            merged.certificate_url = Some(certificate_url);
        }
        if let Some(badge_url) = patch.badge_url {
            merged.badge_url = Some(badge_url);
        }
        if let Some(description) = patch.description {
            merged.description = Some(description);
        }

        validate_fields(
            &merged.title,
            &merged.organization,
            &merged.category,
            merged.issue_date,
            merged.expiry_date,
            merged.description.as_deref(),
        )?;

        certs[pos] = merged.clone();
        debug!("certificate updated: {}", merged.id);
        Ok(merged)
    }

    /// Delete is not idempotent: removing an id that is already gone is
    /// `NotFound`, the same as it never existing.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut certs = self.certs.write().await;
        let Some(pos) = certs.iter().position(|c| c.id == id) else {
            return Err(StoreError::NotFound { id: id.to_string() });
        };
        let removed = certs.remove(pos);
        debug!("certificate removed: {} ({})", removed.id, removed.title);
        Ok(())
    }

    pub async fn filter(
        &self,
        filter: &CertFilter,
        users: &UserDirectory,
        now: NaiveDate,
    ) -> Vec<Certificate> {
        self.certs
            .read()
            .await
            .iter()
            .filter(|c| filter.matches(c, users, now))
            .cloned()
            .collect()
    }
}

impl Default for CertificateStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_fields(
    title: &str,
    organization: &str,
    category: &str,
    issue_date: NaiveDate,
    expiry_date: Option<NaiveDate>,
    description: Option<&str>,
) -> Result<(), StoreError> {
    if title.trim().chars().count() < 3 {
        return Err(StoreError::Validation(
            "title must be at least 3 characters".to_string(),
        ));
    }
    if organization.trim().chars().count() < 2 {
        return Err(StoreError::Validation(
            "organization must be at least 2 characters".to_string(),
        ));
    }
    if category.trim().is_empty() {
        return Err(StoreError::Validation("category is required".to_string()));
    }
    if let Some(expiry) = expiry_date {
        if expiry <= issue_date {
            return Err(StoreError::Validation(
                "expiry date must be after issue date".to_string(),
            ));
        }
    }
    if let Some(desc) = description {
        if desc.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(StoreError::Validation(
                "description must be 300 characters or fewer".to_string(),
            ));
        }
    }
    Ok(())
}

fn next_id(existing: &[Certificate]) -> String {
    loop {
        let candidate = format!(
            "c{}{:04x}",
            Utc::now().timestamp_millis(),
            rand::random::<u16>()
        );
        if !existing.iter().any(|c| c.id == candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{seed_certificates, seed_users};
    use crate::status::Status;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDate {
        date(2026, 2, 24)
    }

    fn draft(owner: &str, title: &str) -> CertificateDraft {
        CertificateDraft {
            owner_id: owner.to_string(),
            title: title.to_string(),
            organization: "Some Org".to_string(),
            category: "Cloud".to_string(),
            issue_date: date(2025, 1, 1),
            expiry_date: Some(date(2027, 1, 1)),
            credential_id: None,
            certificate_url: None,
            badge_url: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn add_assigns_unique_ids_and_appends() {
        let store = CertificateStore::new();
        let a = store.add(draft("u1", "Cert A")).await.unwrap();
        let b = store.add(draft("u1", "Cert B")).await.unwrap();
        let c = store.add(draft("u2", "Cert C")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
        assert_eq!(store.len().await, 3);

        let mine = store.list_by_owner("u1").await;
        let titles: Vec<&str> = mine.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Cert A", "Cert B"]);
    }

    #[tokio::test]
    async fn add_rejects_inverted_dates_without_mutating() {
        let store = CertificateStore::seeded(seed_certificates());
        let mut bad = draft("u1", "Backdated");
        bad.issue_date = date(2026, 1, 1);
        bad.expiry_date = Some(date(2025, 12, 31));

        let err = store.add(bad).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.len().await, 9);
    }

    #[tokio::test]
    async fn add_rejects_missing_or_short_fields() {
        let store = CertificateStore::new();

        let short_title = draft("u1", "ab");
        assert!(matches!(
            store.add(short_title).await,
            Err(StoreError::Validation(_))
        ));

        let no_owner = draft("", "Valid Title");
        assert!(matches!(
            store.add(no_owner).await,
            Err(StoreError::Validation(_))
        ));

        let mut long_desc = draft("u1", "Valid Title");
        long_desc.description = Some("x".repeat(301));
        assert!(matches!(
            store.add(long_desc).await,
            Err(StoreError::Validation(_))
        ));

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn absent_expiry_is_accepted_and_classifies_active() {
        let store = CertificateStore::new();
        let mut open_ended = draft("u1", "Lifetime Cert");
        open_ended.expiry_date = None;

        let cert = store.add(open_ended).await.unwrap();
        assert_eq!(cert.days_remaining(now()), None);
        assert_eq!(cert.status(now()), Status::Active);
    }

    #[tokio::test]
    async fn update_patches_mutable_fields_only() {
        let store = CertificateStore::seeded(seed_certificates());
        let patch = CertificatePatch {
            title: Some("Renamed Certification".to_string()),
            ..Default::default()
        };

        let updated = store.update("c2", patch).await.unwrap();
        assert_eq!(updated.id, "c2");
        assert_eq!(updated.owner_id, "u1");
        assert_eq!(updated.title, "Renamed Certification");
        // untouched fields survive the merge
        assert_eq!(updated.organization, "Meta");
        assert_eq!(updated.expiry_date, Some(date(2026, 3, 10)));

        let stored = store.get_by_id("c2").await.unwrap();
        assert_eq!(stored.title, "Renamed Certification");
    }

    #[tokio::test]
    async fn update_revalidates_the_merged_record() {
        let store = CertificateStore::seeded(seed_certificates());
        // c1 was issued 2024-08-10; pulling expiry before that must fail
        let patch = CertificatePatch {
            expiry_date: Some(date(2024, 1, 1)),
            ..Default::default()
        };

        let err = store.update("c1", patch).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        // the failed update left the record alone
        let stored = store.get_by_id("c1").await.unwrap();
        assert_eq!(stored.expiry_date, Some(date(2027, 8, 10)));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = CertificateStore::new();
        let err = store
            .update("missing", CertificatePatch::default())
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: "missing".to_string() });
    }

    #[tokio::test]
    async fn remove_is_not_idempotent() {
        let store = CertificateStore::seeded(seed_certificates());
        store.remove("c5").await.unwrap();
        assert_eq!(store.len().await, 8);
        assert!(store.get_by_id("c5").await.is_none());

        let err = store.remove("c5").await.unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: "c5".to_string() });
        assert_eq!(store.len().await, 8);
    }

    #[tokio::test]
    async fn get_by_id_absence_is_a_normal_outcome() {
        let store = CertificateStore::seeded(seed_certificates());
        assert!(store.get_by_id("c7").await.is_some());
        assert!(store.get_by_id("c999").await.is_none());
    }

    #[tokio::test]
    async fn filter_combines_criteria_with_and() {
        let store = CertificateStore::seeded(seed_certificates());
        let users = UserDirectory::new(seed_users());

        // owner-name substring, case-insensitive
        let by_owner = CertFilter {
            query: Some("deepak".to_string()),
            ..Default::default()
        };
        let hits = store.filter(&by_owner, &users, now()).await;
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|c| c.owner_id == "u3"));

        // status alone
        let expiring = CertFilter {
            status: Some(Status::ExpiringSoon),
            ..Default::default()
        };
        assert_eq!(store.filter(&expiring, &users, now()).await.len(), 3);

        // text AND status AND category
        let narrow = CertFilter {
            query: Some("docker".to_string()),
            status: Some(Status::ExpiringSoon),
            category: Some("DevOps".to_string()),
        };
        let hits = store.filter(&narrow, &users, now()).await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c8");

        // empty filter matches everything
        assert_eq!(store.filter(&CertFilter::default(), &users, now()).await.len(), 9);
    }
}
