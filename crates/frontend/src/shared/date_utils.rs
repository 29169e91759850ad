/// Utilities for date formatting
///
/// Dates travel as `YYYY-MM-DD` and are shown as `DD/MM/YYYY`
use chrono::NaiveDate;

/// Current local calendar date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Format date to DD/MM/YYYY
/// Example: 2025-03-15 -> "15/03/2025"
pub fn format_fecha(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Optional date, "-" when absent
pub fn format_fecha_opt(date: Option<NaiveDate>) -> String {
    date.map(format_fecha).unwrap_or_else(|| "-".to_string())
}

/// Value for `<input type="date">`
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_fecha() {
        assert_eq!(format_fecha(d(2025, 3, 15)), "15/03/2025");
        assert_eq!(format_fecha(d(2024, 12, 1)), "01/12/2024");
    }

    #[test]
    fn test_format_fecha_opt() {
        assert_eq!(format_fecha_opt(None), "-");
        assert_eq!(format_fecha_opt(Some(d(2025, 1, 31))), "31/01/2025");
    }

    #[test]
    fn test_to_input_value() {
        assert_eq!(to_input_value(Some(d(2025, 6, 5))), "2025-06-05");
        assert_eq!(to_input_value(None), "");
    }
}
