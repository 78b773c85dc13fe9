//! Local client state

pub mod layout;
pub mod session;
pub mod settings;
