//! Pure formatting helpers: human-readable sizes and dates, plus the
//! unique on-disk filename generator used by ingest.

use chrono::{DateTime, Utc};
use uuid::Uuid;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Render a byte count using the largest unit in which the scaled value is
/// still >= 1, rounded to two decimal places with trailing zeros dropped.
/// Zero is special-cased as `"0 Bytes"`.
pub fn format_file_size(bytes: i64) -> String {
    if bytes <= 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", trim_decimal(rounded), SIZE_UNITS[exponent])
}

/// English medium-style date and time, e.g. `Jan 5, 2026, 03:04 PM`.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Lowercased suffix after the last dot, or `None` for extensionless names.
pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// Build a unique storage filename from a user-supplied name.
///
/// The stem is sanitized to `[A-Za-z0-9_]`, then a millisecond timestamp and
/// a short random token are appended before the original extension. Practically
/// collision-free, not cryptographically guaranteed.
pub fn generate_file_name(original_name: &str) -> String {
    let timestamp = Utc::now().timestamp_millis();
    let token = &Uuid::new_v4().simple().to_string()[..6];
    match original_name.rsplit_once('.') {
        Some((stem, ext)) => format!("{}_{}_{}.{}", sanitize_stem(stem), timestamp, token, ext),
        None => format!("{}_{}_{}", sanitize_stem(original_name), timestamp, token),
    }
}

fn sanitize_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn trim_decimal(value: f64) -> String {
    let mut text = format!("{:.2}", value);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
