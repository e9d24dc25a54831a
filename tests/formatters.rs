#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pomo::libs::formatter::{format_countdown, format_duration};

    #[test]
    fn test_format_duration_zero() {
        let duration = Duration::zero();
        assert_eq!(format_duration(&duration), "00:00");
    }

    #[test]
    fn test_format_duration_minutes_only() {
        assert_eq!(format_duration(&Duration::minutes(30)), "00:30");
        assert_eq!(format_duration(&Duration::minutes(59)), "00:59");
        assert_eq!(format_duration(&Duration::minutes(1)), "00:01");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(&Duration::hours(1)), "01:00");
        assert_eq!(format_duration(&(Duration::hours(1) + Duration::minutes(30))), "01:30");
        assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
    }

    #[test]
    fn test_format_duration_negative_clamped_to_zero() {
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
        assert_eq!(format_duration(&Duration::hours(-5)), "00:00");
    }

    #[test]
    fn test_format_countdown_full_cycle() {
        // A classic 25-minute cycle just started.
        assert_eq!(format_countdown(25 * 60), "25:00");
    }

    #[test]
    fn test_format_countdown_seconds() {
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(5), "00:05");
        assert_eq!(format_countdown(59), "00:59");
        assert_eq!(format_countdown(61), "01:01");
        assert_eq!(format_countdown(600), "10:00");
    }

    #[test]
    fn test_format_countdown_negative_clamped_to_zero() {
        // The watch loop may compute a slightly negative remainder on its
        // final tick.
        assert_eq!(format_countdown(-1), "00:00");
        assert_eq!(format_countdown(-600), "00:00");
    }

    #[test]
    fn test_format_countdown_long_cycle() {
        // Minutes grow past two digits instead of rolling into hours.
        assert_eq!(format_countdown(60 * 60), "60:00");
        assert_eq!(format_countdown(60 * 60 + 30), "60:30");
    }
}
