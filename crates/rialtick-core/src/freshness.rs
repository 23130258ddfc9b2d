//! Relative-age presentation for timestamps.

use crate::domain::UtcDateTime;

/// Render how long ago `past` was, bucketed the way the bot presents it:
/// under a minute, whole minutes under an hour, whole hours otherwise.
///
/// This is a presentation utility with no failure mode. A timestamp in the
/// future clamps into the first bucket instead of erroring.
pub fn format_age(past: UtcDateTime, now: UtcDateTime) -> String {
    let minutes = now.since(past).whole_minutes().max(0);
    if minutes < 1 {
        String::from("لحظاتی پیش")
    } else if minutes < 60 {
        format!("{minutes} دقیقه پیش")
    } else {
        format!("{} ساعت پیش", minutes / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(seconds: i64) -> UtcDateTime {
        UtcDateTime::from_unix(1_700_000_000 + seconds)
    }

    #[test]
    fn under_a_minute_is_moments_ago() {
        assert_eq!(format_age(at(0), at(30)), "لحظاتی پیش");
    }

    #[test]
    fn under_an_hour_counts_minutes() {
        assert_eq!(format_age(at(0), at(45 * 60)), "45 دقیقه پیش");
    }

    #[test]
    fn an_hour_or_more_counts_whole_hours() {
        assert_eq!(format_age(at(0), at(3 * 3600)), "3 ساعت پیش");
        assert_eq!(format_age(at(0), at(3 * 3600 + 59 * 60)), "3 ساعت پیش");
    }

    #[test]
    fn future_timestamps_clamp_to_moments_ago() {
        assert_eq!(format_age(at(120), at(0)), "لحظاتی پیش");
    }
}
