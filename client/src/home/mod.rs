//! Smart-home helpers shared by the front end

pub mod control;
pub mod summary;

pub use control::DeviceCommand;
pub use summary::DeviceSummary;
