use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` reminder date and checks it lies strictly after `today`.
///
/// Components are plain integers, so `2099-1-5` is accepted. Dates that do not
/// exist on the calendar (`2099-02-30`) are rejected rather than rolled over.
pub fn parse_reminder_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    let parts: Vec<&str> = input.split('-').collect();
    if parts.len() != 3 {
        return Err(anyhow!("Date must have the form yyyy-mm-dd"));
    }

    let year: i32 = parts[0]
        .parse()
        .map_err(|_| anyhow!("Year '{}' is not a number", parts[0]))?;
    let month: u32 = parts[1]
        .parse()
        .map_err(|_| anyhow!("Month '{}' is not a number", parts[1]))?;
    let day: u32 = parts[2]
        .parse()
        .map_err(|_| anyhow!("Day '{}' is not a number", parts[2]))?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("{} is not a calendar date", input))?;

    if date <= today {
        return Err(anyhow!("Date must be in the future"));
    }

    Ok(date)
}

/// Converts a 1-based reminder index into a position within a list of `len` entries.
pub fn parse_reminder_index(input: &str, len: usize) -> Result<usize> {
    let index: usize = input
        .trim()
        .parse()
        .map_err(|_| anyhow!("Index '{}' is not a number", input))?;

    if index == 0 || index > len {
        return Err(anyhow!("Index {} is out of range (1-{})", index, len));
    }

    Ok(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_parse_reminder_date_valid() {
        let date = parse_reminder_date("2099-01-01", today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2099, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_reminder_date_unpadded() {
        let date = parse_reminder_date("2099-1-5", today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2099, 1, 5).unwrap());
    }

    #[test]
    fn test_parse_reminder_date_not_on_calendar() {
        assert!(parse_reminder_date("2099-02-30", today()).is_err());
        assert!(parse_reminder_date("2099-13-01", today()).is_err());
        assert!(parse_reminder_date("2099-00-10", today()).is_err());
        assert!(parse_reminder_date("2100-02-29", today()).is_err());
        assert!(parse_reminder_date("2096-02-29", today()).is_ok());
    }

    #[test]
    fn test_parse_reminder_date_must_be_future() {
        assert!(parse_reminder_date("2020-01-01", today()).is_err());
        assert!(parse_reminder_date("2024-06-15", today()).is_err());
        assert!(parse_reminder_date("2024-06-16", today()).is_ok());
    }

    #[test]
    fn test_parse_reminder_date_malformed() {
        assert!(parse_reminder_date("", today()).is_err());
        assert!(parse_reminder_date("tomorrow", today()).is_err());
        assert!(parse_reminder_date("2099/01/01", today()).is_err());
        assert!(parse_reminder_date("2099-01", today()).is_err());
        assert!(parse_reminder_date("2099-01-01-01", today()).is_err());
        assert!(parse_reminder_date("2099-aa-01", today()).is_err());
    }

    #[test]
    fn test_parse_reminder_index_valid() {
        assert_eq!(parse_reminder_index("1", 3).unwrap(), 0);
        assert_eq!(parse_reminder_index("3", 3).unwrap(), 2);
    }

    #[test]
    fn test_parse_reminder_index_invalid() {
        assert!(parse_reminder_index("0", 3).is_err());
        assert!(parse_reminder_index("4", 3).is_err());
        assert!(parse_reminder_index("-1", 3).is_err());
        assert!(parse_reminder_index("two", 3).is_err());
        assert!(parse_reminder_index("1", 0).is_err());
    }
}
