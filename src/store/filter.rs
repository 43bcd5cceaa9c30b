use chrono::NaiveDate;

use super::UserDirectory;
use crate::cert::Certificate;
use crate::status::Status;

/// Combinable query over the collection. Criteria AND together; a criterion
/// left unset matches everything on that axis.
#[derive(Debug, Clone, Default)]
pub struct CertFilter {
    /// Case-insensitive substring over title, organization and owner name.
    pub query: Option<String>,
    pub status: Option<Status>,
    pub category: Option<String>,
}

impl CertFilter {
    pub fn matches(&self, cert: &Certificate, users: &UserDirectory, now: NaiveDate) -> bool {
        let match_text = match self.query.as_deref() {
            None | Some("") => true,
            Some(q) => {
                let q = q.to_lowercase();
                let owner_name = users
                    .get_by_id(&cert.owner_id)
                    .map(|u| u.name.as_str())
                    .unwrap_or("");
                [cert.title.as_str(), cert.organization.as_str(), owner_name]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&q))
            }
        };
        let match_status = self.status.is_none_or(|s| cert.status(now) == s);
        let match_category = self
            .category
            .as_deref()
            .is_none_or(|cat| cert.category == cat);

        match_text && match_status && match_category
    }
}
