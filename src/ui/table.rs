//! Fixed-width tabular output
//!
//! Columns: ID (12), Name (20), IP (16), Status (free). Cells are
//! padded by display width so wide characters keep the columns
//! aligned; overlong cells are not truncated, they just push the row.

use unicode_width::UnicodeWidthStr;

use crate::domain::entities::{Device, StatusCounts};

const ID_WIDTH: usize = 12;
const NAME_WIDTH: usize = 20;
const IP_WIDTH: usize = 16;

fn pad(cell: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(cell);
    let mut out = cell.to_string();
    for _ in current..width {
        out.push(' ');
    }
    out
}

fn row(id: &str, name: &str, ip: &str, status: &str) -> String {
    format!(
        "{} {} {} {}",
        pad(id, ID_WIDTH),
        pad(name, NAME_WIDTH),
        pad(ip, IP_WIDTH),
        status
    )
}

pub fn device_row(device: &Device) -> String {
    row(
        &device.id,
        &device.name,
        &device.ip_address,
        device.status.as_str(),
    )
}

/// Render header, separator and one row per device. Empty input
/// renders a "No devices found." placeholder instead.
pub fn render(devices: &[Device]) -> String {
    if devices.is_empty() {
        return "No devices found.".to_string();
    }

    let mut lines = vec![
        row("ID", "Name", "IP", "Status"),
        "-".repeat(ID_WIDTH + NAME_WIDTH + IP_WIDTH + 9),
    ];
    lines.extend(devices.iter().map(device_row));
    lines.join("\n")
}

/// Borrowed-device variant for search results.
pub fn render_refs(devices: &[&Device]) -> String {
    let owned: Vec<Device> = devices.iter().map(|d| (*d).clone()).collect();
    render(&owned)
}

pub fn render_report(counts: &StatusCounts) -> String {
    [
        "Device Report".to_string(),
        "-------------".to_string(),
        format!("Total Devices: {}", counts.total),
        format!("Online: {}", counts.online),
        format!("Offline: {}", counts.offline),
        format!("Maintenance: {}", counts.maintenance),
    ]
    .join("\n")
}
