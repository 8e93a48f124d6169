//! Widget state: the displayed month and the optional selected date.

use chrono::NaiveDate;

use crate::grid::month_grid;
use crate::models::day::DayCell;
use crate::utils::date::{first_of_month, shift_month};

/// Transient calendar state. `viewing` is always held as the first day of
/// the displayed month; only its year and month matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    viewing: NaiveDate,
    selected: Option<NaiveDate>,
    /// Date-picking variant: day cells are selectable (today or later only).
    /// Plain variant: day cells are inert.
    date_selection: bool,
}

impl CalendarState {
    pub fn new(today: NaiveDate, date_selection: bool) -> Self {
        Self {
            viewing: first_of_month(today),
            selected: None,
            date_selection,
        }
    }

    pub fn viewing(&self) -> NaiveDate {
        self.viewing
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn date_selection(&self) -> bool {
        self.date_selection
    }

    pub fn previous_month(&mut self) {
        self.viewing = shift_month(self.viewing, -1);
    }

    pub fn next_month(&mut self) {
        self.viewing = shift_month(self.viewing, 1);
    }

    pub fn jump_to_today(&mut self, today: NaiveDate) {
        self.viewing = first_of_month(today);
    }

    /// Day cells for the displayed month, padded to complete weeks.
    pub fn day_cells(&self, today: NaiveDate) -> Vec<DayCell> {
        month_grid(self.viewing, today, self.selected)
    }

    /// Handle a click on a day cell. Returns true when the selection changed.
    /// Past days never change the selection, and the plain variant ignores
    /// day clicks entirely.
    pub fn click_day(&mut self, cell: &DayCell) -> bool {
        if self.date_selection && cell.is_future {
            self.selected = Some(cell.date);
            true
        } else {
            false
        }
    }

    /// Whether "Add event" is currently actionable: always in the plain
    /// variant, only once a date is selected in the date-picking variant.
    pub fn can_add_event(&self) -> bool {
        !self.date_selection || self.selected.is_some()
    }
}
