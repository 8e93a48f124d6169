// Day cell model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One square in the calendar grid: a single date plus its display flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// The date falls within the displayed month, as opposed to the
    /// leading/trailing padding from adjacent months
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    /// Today or later; only these days are selectable in the date-picking
    /// variant
    pub is_future: bool,
}
