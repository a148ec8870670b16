#[cfg(test)]
mod tests {
    use lil_timesheet::libs::calc::{day_total, minutes_to_time, time_to_minutes, weekly_total};

    #[test]
    fn test_time_to_minutes_valid() {
        assert_eq!(time_to_minutes("00:00"), 0);
        assert_eq!(time_to_minutes("08:30"), 510);
        assert_eq!(time_to_minutes("17:00"), 1020);
        assert_eq!(time_to_minutes("23:59"), 1439);
    }

    #[test]
    fn test_time_to_minutes_lenient() {
        // Empty or malformed clock times count as zero, never an error
        assert_eq!(time_to_minutes(""), 0);
        assert_eq!(time_to_minutes("eight"), 0);
        assert_eq!(time_to_minutes("8"), 0);
        assert_eq!(time_to_minutes("8:xx"), 0);
        assert_eq!(time_to_minutes(":30"), 0);
    }

    #[test]
    fn test_minutes_to_time_formatting() {
        assert_eq!(minutes_to_time(0), "0:00");
        assert_eq!(minutes_to_time(5), "0:05");
        assert_eq!(minutes_to_time(125), "2:05");
        assert_eq!(minutes_to_time(480), "8:00");
        // Hour component is never zero-padded
        assert_eq!(minutes_to_time(2400), "40:00");
    }

    #[test]
    fn test_minutes_to_time_negative_clamps() {
        assert_eq!(minutes_to_time(-5), "0:00");
        assert_eq!(minutes_to_time(-1000), "0:00");
    }

    #[test]
    fn test_day_total_standard_day() {
        // 08:30 to 17:00 with a 30 minute break
        assert_eq!(day_total("08:30", "17:00", 0, 30), "8:00");
        // No break at all
        assert_eq!(day_total("09:00", "17:30", 0, 0), "8:30");
        // Break given in hours and minutes
        assert_eq!(day_total("08:00", "18:00", 1, 15), "8:45");
    }

    #[test]
    fn test_day_total_negative_clamps() {
        // Inverted start/finish
        assert_eq!(day_total("17:00", "08:30", 0, 0), "0:00");
        // Break longer than the day
        assert_eq!(day_total("09:00", "10:00", 2, 0), "0:00");
    }

    #[test]
    fn test_day_total_missing_clock_times() {
        assert_eq!(day_total("", "17:00", 0, 30), "0:00");
        assert_eq!(day_total("08:30", "", 0, 30), "0:00");
        assert_eq!(day_total("", "", 1, 45), "0:00");
    }

    #[test]
    fn test_weekly_total_sums_days() {
        let empty = vec!["0:00"; 7];
        assert_eq!(weekly_total(&empty), "0:00");

        let week = ["8:00", "8:00", "8:00", "8:00", "8:00", "0:00", "0:00"];
        assert_eq!(weekly_total(&week), "40:00");

        let uneven = ["7:30", "8:15", "0:00"];
        assert_eq!(weekly_total(&uneven), "15:45");
    }
}
