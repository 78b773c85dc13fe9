//! River Song backend API models
//!
//! Plain records mirroring the backend's JSON contract.

pub mod models;

pub use models::*;
