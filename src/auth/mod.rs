//! Credential lookup against the user directory. This is a plaintext
//! comparison kept faithful to the dashboard it serves; it is not a secure
//! authentication scheme and is not meant to be one.

use thiserror::Error;

use crate::cert::User;
use crate::store::UserDirectory;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email and password are required.")]
    MissingCredentials,
    #[error("No account found with that email.")]
    UnknownEmail,
    #[error("Incorrect password. Please try again.")]
    WrongPassword,
}

/// Validate credentials against the directory. The returned record has the
/// password stripped so it can be handed to the presentation layer as-is.
pub fn login(users: &UserDirectory, email: &str, password: &str) -> Result<User, AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    let Some(found) = users.get_by_email(email) else {
        return Err(AuthError::UnknownEmail);
    };

    if found.password != password {
        return Err(AuthError::WrongPassword);
    }

    let mut user = found.clone();
    user.password = String::new();
    Ok(user)
}
