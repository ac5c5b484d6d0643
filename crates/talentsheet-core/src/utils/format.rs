use chrono::{DateTime, Utc};

/// Timestamp format shown in page headers
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a UTC time for display, e.g. `2024-05-01 12:00:00`
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let time = Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 3).unwrap();
        assert_eq!(format_timestamp(time), "2024-05-01 09:05:03");
    }
}
