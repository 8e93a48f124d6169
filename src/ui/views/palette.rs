use egui::Color32;

use crate::ui::theme::CalendarTheme;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Colors for the day cells, derived from the active theme
#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub current_bg: Color32,
    pub padding_bg: Color32,
    pub today_bg: Color32,
    pub selected_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub selected_border: Color32,
    pub hover_border: Color32,
    pub text: Color32,
    pub text_dimmed: Color32,
    pub text_disabled: Color32,
    pub header_text: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            current_bg: theme.day_background,
            padding_bg: theme.padding_background,
            today_bg: theme.today_background,
            selected_bg: theme.selected_background,
            border: theme.day_border,
            today_border: theme.today_border,
            selected_border: theme.selected_border,
            hover_border: with_alpha(theme.today_border, if theme.is_dark { 160 } else { 120 }),
            text: theme.text_primary,
            text_dimmed: theme.text_secondary,
            text_disabled: theme.text_disabled,
            header_text: theme.text_secondary,
        }
    }
}
