//! Device summary shown on the dashboard

use std::collections::BTreeMap;

use openapi_client::Device;
use serde::Serialize;

const ONLINE_STATUSES: [&str; 3] = ["online", "on", "active"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceSummary {
    pub total: usize,

    /// Devices reporting `isOn == true`
    pub active: usize,

    pub online: usize,

    /// Device count per location
    pub by_location: BTreeMap<String, usize>,
}

impl DeviceSummary {
    pub fn from_devices(devices: &[Device]) -> Self {
        let mut summary = DeviceSummary {
            total: devices.len(),
            ..Default::default()
        };

        for device in devices {
            if device.is_on == Some(true) {
                summary.active += 1;
            }
            if is_online(&device.status) {
                summary.online += 1;
            }
            *summary
                .by_location
                .entry(device.location.clone())
                .or_insert(0) += 1;
        }

        summary
    }

    pub fn offline(&self) -> usize {
        self.total - self.online
    }
}

fn is_online(status: &str) -> bool {
    let status = status.trim();
    ONLINE_STATUSES
        .iter()
        .any(|s| s.eq_ignore_ascii_case(status))
}
