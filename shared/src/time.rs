//! Presentation-time formatting for countdowns, contest lengths, and
//! start stamps. The backend computes every duration; these helpers only
//! turn seconds into display strings.

use chrono::{DateTime, FixedOffset};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

/// Formats a remaining duration as `HH:MM:SS`, prefixed with the number
/// of whole days when at least one remains.
///
/// `format_countdown(93_784)` renders `"1 day 02:03:04"`.
pub fn format_countdown(total_secs: u64) -> String {
    let days = total_secs / SECS_PER_DAY;
    let hours = (total_secs % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total_secs % SECS_PER_MINUTE;

    match days {
        0 => format!("{:02}:{:02}:{:02}", hours, minutes, seconds),
        1 => format!("1 day {:02}:{:02}:{:02}", hours, minutes, seconds),
        n => format!("{} days {:02}:{:02}:{:02}", n, hours, minutes, seconds),
    }
}

/// Formats a contest length or per-participant window as `H:MM`, with a
/// day prefix for multi-day contests. Seconds are truncated; the list
/// page never shows sub-minute lengths.
pub fn format_window(total_secs: u64) -> String {
    let days = total_secs / SECS_PER_DAY;
    let hours = (total_secs % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE;

    match days {
        0 => format!("{}:{:02}", hours, minutes),
        1 => format!("1 day {}:{:02}", hours, minutes),
        n => format!("{} days {}:{:02}", n, hours, minutes),
    }
}

/// Start-time stamp shown on contest rows.
pub fn format_start(start: &DateTime<FixedOffset>) -> String {
    start.format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0, "00:00:00" ; "zero")]
    #[test_case(59, "00:00:59" ; "under a minute")]
    #[test_case(61, "00:01:01" ; "over a minute")]
    #[test_case(3_600, "01:00:00" ; "exactly one hour")]
    #[test_case(86_399, "23:59:59" ; "just under a day")]
    #[test_case(86_400, "1 day 00:00:00" ; "exactly one day")]
    #[test_case(93_784, "1 day 02:03:04" ; "one day and change")]
    #[test_case(2 * 86_400 + 30, "2 days 00:00:30" ; "two days")]
    fn test_format_countdown(secs: u64, expected: &str) {
        assert_eq!(format_countdown(secs), expected);
    }

    #[test_case(0, "0:00" ; "zero window")]
    #[test_case(1_800, "0:30" ; "half hour")]
    #[test_case(3 * 3_600, "3:00" ; "three hours")]
    #[test_case(10_800 + 59, "3:00" ; "seconds truncated")]
    #[test_case(86_400, "1 day 0:00" ; "one day window")]
    #[test_case(7 * 86_400 + 1_800, "7 days 0:30" ; "week long window")]
    fn test_format_window(secs: u64, expected: &str) {
        assert_eq!(format_window(secs), expected);
    }

    #[test]
    fn test_format_start() {
        let start = chrono::DateTime::parse_from_rfc3339("2024-03-09T17:30:00Z").unwrap();
        assert_eq!(format_start(&start), "09/03/2024 17:30");
    }

    #[test]
    fn test_format_start_keeps_offset() {
        // The backend sends viewer-local offsets; the stamp must not
        // re-normalize them to UTC.
        let start = chrono::DateTime::parse_from_rfc3339("2024-03-09T17:30:00-05:00").unwrap();
        assert_eq!(format_start(&start), "09/03/2024 17:30");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn countdown_day_prefix_iff_a_day_remains(secs in 0u64..(30 * 86_400)) {
                let rendered = format_countdown(secs);
                prop_assert_eq!(rendered.contains("day"), secs >= 86_400);
            }

            #[test]
            fn countdown_clock_part_is_well_formed(secs in 0u64..(30 * 86_400)) {
                let rendered = format_countdown(secs);
                let clock = rendered.rsplit(' ').next().unwrap();
                let parts: Vec<&str> = clock.split(':').collect();
                prop_assert_eq!(parts.len(), 3);
                prop_assert!(parts[0].parse::<u64>().unwrap() < 24);
                prop_assert!(parts[1].parse::<u64>().unwrap() < 60);
                prop_assert!(parts[2].parse::<u64>().unwrap() < 60);
            }

            #[test]
            fn window_never_shows_seconds(secs in 0u64..(30 * 86_400)) {
                let rendered = format_window(secs);
                let clock = rendered.rsplit(' ').next().unwrap();
                prop_assert_eq!(clock.split(':').count(), 2);
            }
        }
    }
}
