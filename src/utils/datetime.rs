use chrono::NaiveDate;

/// Long human-readable form used in reminder listings, e.g. "Thursday, January 1, 2099".
pub fn format_human_date(date: &NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
