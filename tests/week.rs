#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use lil_timesheet::libs::week::{
        day_date, format_wire_date, monday_of, parse_week_start, DAY_NAMES,
    };

    #[test]
    fn test_day_names_order() {
        assert_eq!(
            DAY_NAMES,
            ["mon", "tue", "wed", "thu", "fri", "sat", "sun"]
        );
    }

    #[test]
    fn test_monday_of_normalizes_any_weekday() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        // Monday maps to itself
        assert_eq!(monday_of(monday), monday);
        // Wednesday and Sunday of the same week map back to that Monday
        let wednesday = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
        assert_eq!(monday_of(wednesday), monday);
        assert_eq!(monday_of(sunday), monday);
    }

    #[test]
    fn test_parse_week_start_wire_format() {
        let parsed = parse_week_start("08/01/2024").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
    }

    #[test]
    fn test_parse_week_start_normalizes_to_monday() {
        // 10/01/2024 is a Wednesday
        let parsed = parse_week_start("10/01/2024").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
    }

    #[test]
    fn test_parse_week_start_rejects_garbage() {
        assert!(parse_week_start("").is_none());
        assert!(parse_week_start("2024-01-08").is_none());
        assert!(parse_week_start("32/01/2024").is_none());
        assert!(parse_week_start("next monday").is_none());
    }

    #[test]
    fn test_format_wire_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let wire = format_wire_date(date);
        assert_eq!(wire, "08/01/2024");
        assert_eq!(parse_week_start(&wire).unwrap(), date);
    }

    #[test]
    fn test_day_date_offsets() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(format_wire_date(day_date(monday, 0)), "08/01/2024");
        assert_eq!(format_wire_date(day_date(monday, 4)), "12/01/2024");
        assert_eq!(format_wire_date(day_date(monday, 6)), "14/01/2024");
    }

    #[test]
    fn test_day_date_crosses_month_boundary() {
        // Week starting Monday 29/01/2024 spills into February
        let monday = NaiveDate::from_ymd_opt(2024, 1, 29).unwrap();
        assert_eq!(format_wire_date(day_date(monday, 2)), "31/01/2024");
        assert_eq!(format_wire_date(day_date(monday, 3)), "01/02/2024");
    }
}
