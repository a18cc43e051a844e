//! Display helpers shared by the web app and the CLI.

use chrono::{DateTime, NaiveDate};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size with up to two decimals: `"1.5 MB"`, `"512 Bytes"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exp = 0;
    while exp + 1 < SIZE_UNITS.len() && bytes >= 1024u64.pow(exp as u32 + 1) {
        exp += 1;
    }
    let value = bytes as f64 / 1024u64.pow(exp as u32) as f64;
    let rounded = (value * 100.0).round() / 100.0;

    // Trailing zeros dropped, so 2.00 prints as "2".
    let number = format!("{rounded:.2}");
    let number = number.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", number, SIZE_UNITS[exp])
}

/// Size in megabytes with two decimals, as shown next to the attached file.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// `"Jan 5, 2024"` from an RFC 3339 timestamp or a `YYYY-MM-DD` date.
///
/// Unparseable input is returned unchanged.
pub fn format_date(date: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(date)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d"));

    match parsed {
        Ok(day) => day.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Coarse band of an analysis score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Review,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            ScoreTier::Excellent
        } else if score >= 70.0 {
            ScoreTier::Good
        } else {
            ScoreTier::Review
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "⭐ Excellent",
            ScoreTier::Good => "👍 Good",
            ScoreTier::Review => "📝 Review",
        }
    }

    /// CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "score-excellent",
            ScoreTier::Good => "score-good",
            ScoreTier::Review => "score-review",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(1_000_000), "976.56 KB");
    }

    #[test]
    fn test_megabytes() {
        assert_eq!(format_megabytes(1024 * 1024), "1.00 MB");
        assert_eq!(format_megabytes(1_000_000), "0.95 MB");
    }

    #[test]
    fn test_date() {
        assert_eq!(format_date("2024-01-05T10:00:00Z"), "Jan 5, 2024");
        assert_eq!(format_date("2024-12-25"), "Dec 25, 2024");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_score_tiers() {
        assert_eq!(ScoreTier::from_score(85.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(84.9), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(70.0), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(12.0), ScoreTier::Review);
        assert_eq!(ScoreTier::Review.label(), "📝 Review");
    }
}
