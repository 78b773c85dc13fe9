//! River Song client library
//!
//! Typed access to the River Song smart-home backend: repositories over an
//! HTTP API service, plus the local session and settings used by the CLI.

pub mod app;
pub mod authn;
pub mod constants;
pub mod errors;
pub mod filesys;
pub mod home;
pub mod http;
pub mod logs;
pub mod repository;
pub mod storage;
pub mod utils;
