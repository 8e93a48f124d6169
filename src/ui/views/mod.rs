mod day_cell;
mod month_view;
mod palette;

pub use month_view::{MonthView, MonthViewAction};
