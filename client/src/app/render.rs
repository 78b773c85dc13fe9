//! Terminal output for command results

use colored::Colorize;
use openapi_client::{AudioProcessResponse, Device, ImageAnalyzeResponse, User};
use serde::Serialize;

use crate::errors::ClientError;
use crate::home::summary::DeviceSummary;
use crate::utils::format_timestamp;

/// Pretty JSON for `--json` output
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ClientError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn user(user: &User) -> String {
    let mut lines = vec![
        format!("{} (@{})", user.display_name().bold(), user.username),
        format!("  Email:      {}", user.email),
        format!("  Role:       {}", user.role),
        format!(
            "  Active:     {}",
            if user.is_active { "yes".green() } else { "no".red() }
        ),
    ];
    if let Some(url) = &user.profile_picture_url {
        lines.push(format!("  Picture:    {}", url));
    }
    lines.push(format!("  Last login: {}", format_timestamp(user.last_login_at())));
    lines.join("\n")
}

fn status(status: &str) -> colored::ColoredString {
    match status.to_lowercase().as_str() {
        "online" | "on" | "active" => status.green(),
        "offline" | "off" => status.red(),
        _ => status.yellow(),
    }
}

/// Optional readings as a compact suffix, e.g. "on, 80%, 21.5°C"
fn readings(device: &Device) -> String {
    let mut parts = Vec::new();
    if let Some(is_on) = device.is_on {
        parts.push(if is_on { "on" } else { "off" }.to_string());
    }
    if let Some(brightness) = device.brightness {
        parts.push(format!("{}%", brightness));
    }
    if let Some(temperature) = device.temperature {
        parts.push(format!("{:.1}°C", temperature));
    }
    if let Some(battery) = device.battery_level {
        parts.push(format!("battery {}%", battery));
    }
    parts.join(", ")
}

pub fn device_line(device: &Device) -> String {
    format!(
        "{:<16} {:<20} {:<12} {:<10} {:<16} {}",
        device.id,
        device.name,
        device.device_type,
        status(&device.status),
        device.location,
        readings(device)
    )
    .trim_end()
    .to_string()
}

pub fn devices(devices: &[Device]) -> String {
    if devices.is_empty() {
        return "No devices found.".to_string();
    }

    let mut out = format!(
        "{:<16} {:<20} {:<12} {:<10} {:<16} {}",
        "ID", "NAME", "TYPE", "STATUS", "LOCATION", "READINGS"
    )
    .bold()
    .to_string();
    for device in devices {
        out.push('\n');
        out.push_str(&device_line(device));
    }
    out
}

pub fn device(device: &Device) -> String {
    let mut lines = vec![
        format!("{} ({})", device.name.bold(), device.id),
        format!("  Type:         {}", device.device_type),
        format!("  Status:       {}", status(&device.status)),
        format!("  Location:     {}", device.location),
    ];
    let readings = readings(device);
    if !readings.is_empty() {
        lines.push(format!("  Readings:     {}", readings));
    }
    if let Some(url) = &device.stream_url {
        lines.push(format!("  Stream:       {}", url));
    }
    lines.push(format!(
        "  Last updated: {}",
        format_timestamp(device.last_updated_at())
    ));
    lines.join("\n")
}

pub fn summary(summary: &DeviceSummary) -> String {
    let mut lines = vec![
        "Smart home".bold().to_string(),
        format!(
            "  {} devices, {} active, {} online, {} offline",
            summary.total,
            summary.active,
            summary.online,
            summary.offline()
        ),
    ];
    for (location, count) in &summary.by_location {
        lines.push(format!("  {:<16} {}", location, count));
    }
    lines.join("\n")
}

pub fn audio(response: &AudioProcessResponse) -> String {
    let mut lines = vec![outcome(response.success, &response.message)];
    if let Some(text) = &response.recognized_text {
        lines.push(format!("  Recognized:     {}", text));
    }
    if let Some(classification) = &response.classification {
        lines.push(format!("  Classification: {}", classification));
    }
    lines.join("\n")
}

pub fn image(response: &ImageAnalyzeResponse) -> Result<String, ClientError> {
    let mut lines = vec![outcome(response.success, &response.message)];
    if let Some(result) = &response.analysis_result {
        for (key, value) in result {
            lines.push(format!("  {}: {}", key, serde_json::to_string(value)?));
        }
    }
    Ok(lines.join("\n"))
}

fn outcome(success: bool, message: &str) -> String {
    if success {
        format!("{} {}", "ok".green(), message)
    } else {
        format!("{} {}", "failed".red(), message)
    }
}
