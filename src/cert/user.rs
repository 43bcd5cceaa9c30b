use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Admin => "Administrator",
            Role::User => "User",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    // only the login comparison reads this; it never serializes out
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub designation: String,
    pub department: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Up to two initials from the full name, for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_the_first_two_words() {
        let user = User {
            id: "u1".to_string(),
            name: "Sohan Kumar Sahu".to_string(),
            email: "sohan@gmail.com".to_string(),
            password: String::new(),
            role: Role::User,
            avatar: None,
            designation: "Data Analyst".to_string(),
            department: "Analytics".to_string(),
        };
        assert_eq!(user.initials(), "SK");
    }

    #[test]
    fn role_formats_for_display() {
        assert_eq!(Role::Admin.to_string(), "Administrator");
        assert_eq!(Role::User.to_string(), "User");
    }
}
