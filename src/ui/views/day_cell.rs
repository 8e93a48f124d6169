//! Day cell rendering for the month view.

use chrono::Datelike;
use egui::{Align2, FontId, Sense, Stroke, Vec2};

use super::month_view::MonthView;
use super::palette::CalendarCellPalette;
use crate::models::day::DayCell;

const CELL_HEIGHT: f32 = 30.0;

impl MonthView {
    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        cell: &DayCell,
        selectable_days: bool,
        palette: CalendarCellPalette,
        col_width: f32,
    ) -> egui::Response {
        let clickable = selectable_days && cell.is_future;
        let sense = if clickable {
            Sense::click().union(Sense::hover())
        } else {
            Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(Vec2::new(col_width, CELL_HEIGHT), sense);

        // Background
        let bg_color = if cell.is_selected {
            palette.selected_bg
        } else if cell.is_today {
            palette.today_bg
        } else if cell.is_current_month {
            palette.current_bg
        } else {
            palette.padding_bg
        };
        ui.painter().rect_filled(rect, 2.0, bg_color);

        // Border
        let stroke = if cell.is_selected {
            Stroke::new(2.0, palette.selected_border)
        } else if cell.is_today {
            Stroke::new(1.5, palette.today_border)
        } else {
            Stroke::new(1.0, palette.border)
        };
        ui.painter().rect_stroke(rect, 2.0, stroke);

        // Hover emphasis, only on days that react to clicks
        if clickable && response.hovered() {
            ui.painter()
                .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        let text_color = if cell.is_today {
            palette.text
        } else if selectable_days && !cell.is_future {
            palette.text_disabled
        } else if !cell.is_current_month {
            palette.text_dimmed
        } else {
            palette.text
        };

        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            cell.date.day().to_string(),
            FontId::proportional(13.0),
            text_color,
        );

        if !clickable && selectable_days && response.hovered() {
            response.clone().on_hover_text("Past days can't be picked");
        }

        response
    }
}
