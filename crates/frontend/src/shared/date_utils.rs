/// Date formatting for tables and cards
use chrono::NaiveDate;

/// Display format, e.g. "Mar 15, 2024"
pub const DISPLAY_FORMAT: &str = "%b %d, %Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "Mar 05, 2024");
    }
}
