//! User models

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::from_unix_millis;

/// Role of a household member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Parent,
    Child,
    Guest,
    /// Any role the client does not know about
    #[serde(other)]
    Unknown,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Parent => "PARENT",
            UserRole::Child => "CHILD",
            UserRole::Guest => "GUEST",
            UserRole::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Ok(UserRole::Admin),
            "PARENT" => Ok(UserRole::Parent),
            "CHILD" => Ok(UserRole::Child),
            "GUEST" => Ok(UserRole::Guest),
            "UNKNOWN" => Ok(UserRole::Unknown),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

/// A user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    pub role: UserRole,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,

    /// Unix timestamp in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<i64>,
}

fn default_true() -> bool {
    true
}

impl User {
    /// Full name when known, otherwise the username
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => self.username.clone(),
        }
    }

    pub fn last_login_at(&self) -> Option<DateTime<Utc>> {
        self.last_login.and_then(from_unix_millis)
    }
}
