//! User credentials

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use crate::constants::ERROR_MISSING_CREDENTIALS;
use crate::errors::ClientError;

/// Username and password as typed by the user
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    /// Validate the raw input. Both fields must be non-blank.
    pub fn new(username: &str, password: SecretString) -> Result<Self, ClientError> {
        let username = username.trim();
        if username.is_empty() || password.expose_secret().is_empty() {
            return Err(ClientError::ValidationError(
                ERROR_MISSING_CREDENTIALS.to_string(),
            ));
        }

        Ok(Self {
            username: username.to_string(),
            password,
        })
    }

    /// The value sent in the `password_hash` field
    pub fn password_hash(&self, hash_passwords: bool) -> String {
        if hash_passwords {
            sha256_hex(self.password.expose_secret().as_bytes())
        } else {
            self.password.expose_secret().to_string()
        }
    }
}

/// Calculate SHA256 hash of data as lowercase hex
pub fn sha256_hex(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
