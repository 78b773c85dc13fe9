//! Persisted login session
//!
//! A flat key/value store, kept in `session.json` under the data directory.

use std::collections::BTreeMap;

use openapi_client::{User, UserRole};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{PREF_AUTH_TOKEN, PREF_USERNAME, PREF_USER_ID, PREF_USER_ROLE};
use crate::errors::ClientError;
use crate::filesys::file::File;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    values: BTreeMap<String, String>,
}

impl Session {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn auth_token(&self) -> Option<SecretString> {
        self.get(PREF_AUTH_TOKEN)
            .filter(|t| !t.trim().is_empty())
            .map(|t| SecretString::from(t.to_string()))
    }

    pub fn set_auth_token(&mut self, token: &str) {
        self.set(PREF_AUTH_TOKEN, token.trim());
    }

    pub fn user_id(&self) -> Option<&str> {
        self.get(PREF_USER_ID)
    }

    pub fn username(&self) -> Option<&str> {
        self.get(PREF_USERNAME)
    }

    pub fn user_role(&self) -> Option<UserRole> {
        self.get(PREF_USER_ROLE).and_then(|r| r.parse().ok())
    }

    /// Remember who is logged in
    pub fn set_user(&mut self, user: &User) {
        self.set(PREF_USER_ID, user.id.as_str());
        self.set(PREF_USERNAME, user.username.as_str());
        self.set(PREF_USER_ROLE, user.role.as_str());
    }
}

/// Load the session, empty when none was saved yet
pub async fn load_session(session_file: &File) -> Result<Session, ClientError> {
    session_file.read_json_or_default().await
}

/// Save the session, readable by the owner only
pub async fn save_session(session_file: &File, session: &Session) -> Result<(), ClientError> {
    session_file.write_json(session).await?;
    session_file.set_permissions_600().await?;
    debug!("Session saved to {}", session_file.path().display());
    Ok(())
}

/// Remove the session file
pub async fn clear_session(session_file: &File) -> Result<(), ClientError> {
    session_file.delete().await
}
