//! Backend HTTP access

pub mod ai;
pub mod client;
pub mod devices;
pub mod service;
pub mod users;

pub use client::{ApiResponse, HttpClient};
pub use service::ApiService;
