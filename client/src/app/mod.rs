//! Command-line front end

pub mod cli;
pub mod commands;
pub mod context;
pub mod options;
pub mod render;
