use std::fmt;

/// Display components of an elapsed duration, each zero-padded to at least
/// two digits. Minutes are not wrapped into hours.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TimeParts {
    pub minutes: String,
    pub seconds: String,
    pub centiseconds: String,
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}.{}", self.minutes, self.seconds, self.centiseconds)
    }
}

/// Split milliseconds into minutes, seconds and centiseconds.
pub fn format_parts(ms: u64) -> TimeParts {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let centiseconds = (ms % 1000) / 10;
    TimeParts {
        minutes: format!("{:02}", minutes),
        seconds: format!("{:02}", seconds),
        centiseconds: format!("{:02}", centiseconds),
    }
}

/// Format milliseconds as "MM:SS.CC"
pub fn format_full(ms: u64) -> String {
    format_parts(ms).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parts_zero() {
        let parts = format_parts(0);
        assert_eq!(parts.minutes, "00");
        assert_eq!(parts.seconds, "00");
        assert_eq!(parts.centiseconds, "00");
    }

    #[test]
    fn test_format_parts_truncates() {
        // 1 min 1.234 s
        let parts = format_parts(61_234);
        assert_eq!(parts.minutes, "01");
        assert_eq!(parts.seconds, "01");
        assert_eq!(parts.centiseconds, "23");

        assert_eq!(format_parts(9).centiseconds, "00");
        assert_eq!(format_parts(999).centiseconds, "99");
        assert_eq!(format_parts(59_999).seconds, "59");
    }

    #[test]
    fn test_format_full() {
        assert_eq!(format_full(0), "00:00.00");
        assert_eq!(format_full(12_340), "00:12.34");
        assert_eq!(format_full(3_661_000), "61:01.00");
        assert_eq!(format_full(6_000_000), "100:00.00");
    }

    #[test]
    fn test_display_matches_full() {
        for ms in [0, 1, 10, 999, 1000, 60_000, 61_234, 5_999_999] {
            assert_eq!(format_parts(ms).to_string(), format_full(ms));
        }
    }

    #[test]
    fn test_fields_follow_floor_division() {
        let samples = (0..200_000u64)
            .step_by(7)
            .chain([u32::MAX as u64, u64::MAX / 3]);
        for ms in samples {
            let parts = format_parts(ms);
            for field in [&parts.minutes, &parts.seconds, &parts.centiseconds] {
                assert!(field.len() >= 2);
                assert!(field.bytes().all(|b| b.is_ascii_digit()));
            }
            assert_eq!(parts.minutes.parse::<u64>().unwrap(), ms / 60_000);
            assert_eq!(parts.seconds.parse::<u64>().unwrap(), (ms % 60_000) / 1000);
            assert_eq!(parts.centiseconds.parse::<u64>().unwrap(), (ms % 1000) / 10);
        }
    }
}
