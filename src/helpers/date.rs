//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY/MM/DD") // -> "2024/01/15"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Generate a <time> HTML element
///
/// The datetime attribute carries the raw RFC 3339 timestamp; the display
/// text uses the given format pattern.
pub fn time_tag<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let datetime = date.to_rfc3339();
    let display = format_date(date, format);
    format!(r#"<time datetime="{}">{}</time>"#, datetime, display)
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Process from longest to shortest patterns within each category
    let replacements = [
        // Year
        ("YYYY", "%Y"),
        ("YY", "%y"),
        // Month (uppercase M)
        ("MMMM", "%B"), // Full month name
        ("MMM", "%b"),  // Abbreviated month name
        ("MM", "%m"),   // Two-digit month
        // Day of month
        ("DD", "%d"),
        // Hour 24h / 12h
        ("HH", "%H"),
        ("hh", "%I"),
        // Minute (lowercase m after MM is handled)
        ("mm", "%M"),
        // Second
        ("ss", "%S"),
        // Day of week
        ("dddd", "%A"),
        ("ddd", "%a"),
        // Timezone
        ("ZZ", "%z"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn sample_date() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-01-15T10:30:00+09:00").unwrap()
    }

    #[test]
    fn test_format_date() {
        let date = sample_date();
        assert_eq!(format_date(&date, "YYYY/MM/DD"), "2024/01/15");
        assert_eq!(format_date(&date, "YYYY-MM-DD"), "2024-01-15");
    }

    #[test]
    fn test_time_tag() {
        let date = sample_date();
        assert_eq!(
            time_tag(&date, "YYYY/MM/DD"),
            r#"<time datetime="2024-01-15T10:30:00+09:00">2024/01/15</time>"#
        );
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
    }
}
