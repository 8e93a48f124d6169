//! Theme module for the calendar widget
//!
//! Defines the CalendarTheme structure with built-in light and dark presets
//! and resolution of the configured theme name.

use egui::Color32;

/// A calendar theme defining all colors used by the widget
#[derive(Debug, Clone)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Regular day background color
    pub day_background: Color32,

    /// Background for padding days from adjacent months
    pub padding_background: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Today's date border color
    pub today_border: Color32,

    /// Selected date background color
    pub selected_background: Color32,

    /// Selected date border color
    pub selected_border: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Primary text color (day numbers, header)
    pub text_primary: Color32,

    /// Secondary text color (day-name strip, padding days)
    pub text_secondary: Color32,

    /// Text color for past, non-selectable days
    pub text_disabled: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            day_background: Color32::from_rgb(255, 255, 255),
            padding_background: Color32::from_rgb(248, 248, 250),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            selected_background: Color32::from_rgb(215, 230, 255),
            selected_border: Color32::from_rgb(70, 120, 230),
            day_border: Color32::from_rgb(220, 220, 220),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            text_disabled: Color32::from_rgb(170, 170, 170),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            day_background: Color32::from_rgb(40, 40, 40),
            padding_background: Color32::from_rgb(34, 34, 36),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            selected_background: Color32::from_rgb(45, 65, 100),
            selected_border: Color32::from_rgb(120, 160, 255),
            day_border: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(220, 220, 220),
            text_secondary: Color32::from_rgb(150, 150, 150),
            text_disabled: Color32::from_rgb(100, 100, 100),
        }
    }

    /// Resolve a configured theme name. "system" (and anything
    /// unrecognized) follows the OS preference.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            _ => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_themes_resolve() {
        assert!(!CalendarTheme::from_name("light").is_dark);
        assert!(CalendarTheme::from_name("dark").is_dark);
    }
}
