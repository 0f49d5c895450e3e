use chrono::NaiveDate;

/// Number of calendar days in the given month, `None` for an invalid
/// year/month pair.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}

/// All dates of the month in calendar order; empty for an invalid pair.
pub fn month_dates(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(days) = days_in_month(year, month) else {
        return Vec::new();
    };
    (1..=days)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths_account_for_leap_years() {
        assert_eq!(days_in_month(2025, 6), Some(30));
        assert_eq!(days_in_month(2025, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2025, 12), Some(31));
        assert_eq!(days_in_month(2025, 13), None);
    }

    #[test]
    fn month_dates_span_the_whole_month() {
        let dates = month_dates(2025, 6);
        assert_eq!(dates.len(), 30);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(dates[29], NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
    }
}
