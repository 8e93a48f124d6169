// Property-based tests for the month-grid generator

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use month_calendar::grid::month_grid;
use month_calendar::utils::date::days_in_month;
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900..2200i32, 1..=12u32, 1..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    /// Property: the grid always consists of complete weeks
    #[test]
    fn prop_grid_length_is_multiple_of_seven(reference in any_date(), today in any_date()) {
        let cells = month_grid(reference, today, None);
        prop_assert!(!cells.is_empty());
        prop_assert_eq!(cells.len() % 7, 0);
    }

    /// Property: the grid starts on a Monday and ends on a Sunday
    #[test]
    fn prop_grid_spans_monday_to_sunday(reference in any_date(), today in any_date()) {
        let cells = month_grid(reference, today, None);
        prop_assert_eq!(cells.first().unwrap().date.weekday(), Weekday::Mon);
        prop_assert_eq!(cells.last().unwrap().date.weekday(), Weekday::Sun);
    }

    /// Property: dates are consecutive with no gaps or repeats
    #[test]
    fn prop_grid_dates_are_consecutive(reference in any_date(), today in any_date()) {
        let cells = month_grid(reference, today, None);
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    /// Property: every day of the reference month appears exactly once and
    /// is flagged current-month; everything else is padding
    #[test]
    fn prop_reference_month_days_appear_exactly_once(reference in any_date(), today in any_date()) {
        let cells = month_grid(reference, today, None);
        let expected = days_in_month(reference.year(), reference.month()) as usize;

        let current: Vec<_> = cells.iter().filter(|c| c.is_current_month).collect();
        prop_assert_eq!(current.len(), expected);
        for (i, cell) in current.iter().enumerate() {
            prop_assert_eq!(cell.date.day() as usize, i + 1);
            prop_assert_eq!(cell.date.month(), reference.month());
            prop_assert_eq!(cell.date.year(), reference.year());
        }

        // Padding sits strictly before the 1st or after the last of the month
        let first = NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1).unwrap();
        let last = current.last().unwrap().date;
        for cell in cells.iter().filter(|c| !c.is_current_month) {
            prop_assert!(cell.date < first || cell.date > last);
        }
    }

    /// Property: is_future marks today and everything after it
    #[test]
    fn prop_future_flag_matches_today(reference in any_date(), today in any_date()) {
        let cells = month_grid(reference, today, None);
        for cell in &cells {
            prop_assert_eq!(cell.is_future, cell.date >= today);
            prop_assert_eq!(cell.is_today, cell.date == today);
        }
    }

    /// Property: the selected flag marks exactly the selected date when it
    /// falls inside the grid, and nothing otherwise
    #[test]
    fn prop_selected_flag_matches_selection(reference in any_date(), today in any_date(), selected in any_date()) {
        let cells = month_grid(reference, today, Some(selected));
        for cell in &cells {
            prop_assert_eq!(cell.is_selected, cell.date == selected);
        }
    }
}
