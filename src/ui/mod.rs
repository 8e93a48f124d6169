mod app;
pub mod state;
pub mod theme;
pub mod views;

pub use app::CalendarApp;
