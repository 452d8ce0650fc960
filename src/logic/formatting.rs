//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{Local, TimeZone};

/// Format a unix timestamp as "<Month> <Year>" in local time
///
/// Returns an empty string for timestamps chrono cannot represent.
pub fn format_month_year(unix_secs: i64) -> String {
    match Local.timestamp_opt(unix_secs, 0).single() {
        Some(time) => time.format("%B %Y").to_string(),
        None => String::new(),
    }
}

/// Format a unix timestamp as "YYYY-MM-DD HH:MM" in local time
pub fn format_timestamp(unix_secs: i64) -> String {
    match Local.timestamp_opt(unix_secs, 0).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}

/// 1-based position of an image in its listing, e.g. "3/12"
///
/// # Examples
/// ```
/// use albumtui::logic::formatting::format_position;
///
/// assert_eq!(format_position(0, 12), "1/12");
/// assert_eq!(format_position(11, 12), "12/12");
/// ```
pub fn format_position(index: usize, total: usize) -> String {
    format!("{}/{}", index + 1, total)
}

/// Summary of a listing for the status bar, e.g. "3 folders, 1 image"
///
/// # Examples
/// ```
/// use albumtui::logic::formatting::format_listing_summary;
///
/// assert_eq!(format_listing_summary(0, 0), "empty");
/// assert_eq!(format_listing_summary(1, 0), "1 folder");
/// assert_eq!(format_listing_summary(3, 1), "3 folders, 1 image");
/// assert_eq!(format_listing_summary(0, 5), "5 images");
/// ```
pub fn format_listing_summary(folders: usize, images: usize) -> String {
    let plural = |count: usize, noun: &str| {
        if count == 1 {
            format!("1 {}", noun)
        } else {
            format!("{} {}s", count, noun)
        }
    };

    match (folders, images) {
        (0, 0) => "empty".to_string(),
        (f, 0) => plural(f, "folder"),
        (0, i) => plural(i, "image"),
        (f, i) => format!("{}, {}", plural(f, "folder"), plural(i, "image")),
    }
}

/// Format bytes into human-readable string (e.g., "1.20 KB", "5.30 MB")
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_month_year_mid_month() {
        // 2020-06-15 12:00 UTC is June 2020 in every time zone
        assert_eq!(format_month_year(1_592_222_400), "June 2020");
    }

    #[test]
    fn test_format_timestamp_shape() {
        let formatted = format_timestamp(1_592_222_400);
        assert_eq!(formatted.len(), 16);
        assert!(formatted.starts_with("2020-06-1"));
    }

    #[test]
    fn test_format_out_of_range_timestamp() {
        assert_eq!(format_month_year(i64::MAX), "");
        assert_eq!(format_timestamp(i64::MAX), "");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
    }
}
