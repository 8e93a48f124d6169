//! Month-grid generation.
//!
//! Pure date arithmetic that expands a reference month into the ordered day
//! cells shown by the widget, padded with adjacent-month days to complete
//! Monday-to-Sunday weeks.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::day::DayCell;
use crate::utils::date::{first_of_month, last_of_month};

/// Generate the day cells covering the calendar view of the month containing
/// `reference`.
///
/// The sequence starts on the Monday on or before the first of the month and
/// ends on the Sunday on or after the last, so its length is always a
/// multiple of 7. `today` drives the `is_today` and `is_future` flags,
/// `selected` the `is_selected` flag. Today itself counts as future so it
/// stays selectable.
pub fn month_grid(
    reference: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<DayCell> {
    let first = first_of_month(reference);
    let last = last_of_month(reference);

    let start = first - Duration::days(first.weekday().num_days_from_monday() as i64);
    let end = last + Duration::days((6 - last.weekday().num_days_from_monday()) as i64);

    // At most 6 weeks for any month
    let mut cells = Vec::with_capacity(42);
    let mut date = start;
    while date <= end {
        cells.push(DayCell {
            date,
            is_current_month: date.year() == reference.year()
                && date.month() == reference.month(),
            is_today: date == today,
            is_selected: selected == Some(date),
            is_future: date >= today,
        });
        date += Duration::days(1);
    }
    cells
}
