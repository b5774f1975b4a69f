//! Display helpers shared by the screens

use chrono::{DateTime, Duration, TimeZone};

/// Running call timer, `MM:SS`.
pub fn format_call_timer(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Call length as shown in the history list.
pub fn format_call_duration(duration: Option<u32>) -> String {
    match duration {
        None | Some(0) => "Not connected".to_string(),
        Some(secs) if secs >= 60 => format!("{}:{:02}", secs / 60, secs % 60),
        Some(secs) => format!("{}s", secs),
    }
}

/// 12-hour clock time, e.g. `3:07 PM`.
pub fn format_clock_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%-I:%M %p").to_string()
}

/// Section title for a call: `Today`, `Yesterday`, or e.g. `Monday, Oct 13`.
pub fn day_label<Tz: TimeZone>(time: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let day = time.date_naive();
    let today = now.date_naive();

    if day == today {
        "Today".to_string()
    } else if Some(day) == today.checked_sub_signed(Duration::days(1)) {
        "Yesterday".to_string()
    } else {
        time.format("%A, %b %-d").to_string()
    }
}

/// Upper-case first letters of each word, `"Sophia Bennett"` -> `"SB"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_call_timer() {
        assert_eq!(format_call_timer(0), "00:00");
        assert_eq!(format_call_timer(65), "01:05");
        assert_eq!(format_call_timer(6000), "100:00");
    }

    #[test]
    fn test_call_duration() {
        assert_eq!(format_call_duration(None), "Not connected");
        assert_eq!(format_call_duration(Some(42)), "42s");
        assert_eq!(format_call_duration(Some(625)), "10:25");
    }

    #[test]
    fn test_day_label() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2026, 10, 19, 1, 0, 0).unwrap();
        let yesterday = Utc.with_ymd_and_hms(2026, 10, 18, 23, 0, 0).unwrap();
        let older = Utc.with_ymd_and_hms(2026, 10, 13, 9, 0, 0).unwrap();

        assert_eq!(day_label(&earlier, &now), "Today");
        assert_eq!(day_label(&yesterday, &now), "Yesterday");
        assert_eq!(day_label(&older, &now), "Tuesday, Oct 13");
    }

    #[test]
    fn test_clock_time() {
        let t = Utc.with_ymd_and_hms(2026, 10, 19, 15, 7, 0).unwrap();
        assert_eq!(format_clock_time(&t), "3:07 PM");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sophia Bennett"), "SB");
        assert_eq!(initials("  alex "), "A");
        assert_eq!(initials(""), "");
    }
}
