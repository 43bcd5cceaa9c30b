pub mod certs;
pub mod filter;
pub mod users;

pub use certs::CertificateStore;
pub use filter::CertFilter;
pub use users::UserDirectory;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("certificate not found: {id}")]
    NotFound { id: String },
    #[error("invalid certificate: {0}")]
    Validation(String),
}
