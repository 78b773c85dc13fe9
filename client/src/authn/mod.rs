//! Credentials and bearer tokens

pub mod bearer;
pub mod credentials;
