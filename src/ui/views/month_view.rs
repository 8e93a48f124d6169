//! The month view: navigation header, day-name strip, day-cell grid and the
//! "Add event" footer.

use chrono::{Local, NaiveDate};

use super::palette::CalendarCellPalette;
use crate::ui::state::CalendarState;
use crate::ui::theme::CalendarTheme;

/// Action returned from the month view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthViewAction {
    /// No action
    None,
    /// The user asked to add an event. Carries the selected date in the
    /// date-picking variant, nothing in the plain variant.
    AddEventRequested(Option<NaiveDate>),
}

pub struct MonthView;

impl MonthView {
    pub fn show(
        ui: &mut egui::Ui,
        state: &mut CalendarState,
        theme: &CalendarTheme,
    ) -> MonthViewAction {
        let today = Local::now().date_naive();
        let palette = CalendarCellPalette::from_theme(theme);
        let mut action = MonthViewAction::None;

        Self::render_header(ui, state, today);

        ui.add_space(4.0);
        Self::render_day_names(ui, palette);
        ui.add_space(2.0);

        Self::render_grid(ui, state, today, palette);

        ui.add_space(6.0);
        ui.separator();

        ui.horizontal(|ui| {
            let add_button = ui.add_enabled(
                state.can_add_event(),
                egui::Button::new("Add event"),
            );
            if add_button.clicked() {
                let date = if state.date_selection() {
                    state.selected()
                } else {
                    None
                };
                action = MonthViewAction::AddEventRequested(date);
            }

            if state.date_selection() {
                match state.selected() {
                    Some(date) => {
                        ui.label(
                            egui::RichText::new(format!("{}", date.format("%a, %-d %B %Y")))
                                .small(),
                        );
                    }
                    None => {
                        ui.label(egui::RichText::new("Pick an upcoming day").small().weak());
                    }
                }
            }
        });

        action
    }

    /// Month/Year header with month navigation arrows.
    fn render_header(ui: &mut egui::Ui, state: &mut CalendarState, today: NaiveDate) {
        ui.horizontal(|ui| {
            if ui
                .small_button("◀")
                .on_hover_text("Previous month")
                .clicked()
            {
                state.previous_month();
            }

            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    let header = format!("{}", state.viewing().format("%B %Y"));
                    if ui
                        .selectable_label(false, egui::RichText::new(header).strong())
                        .on_hover_text("Click to go to today")
                        .clicked()
                    {
                        state.jump_to_today(today);
                    }
                },
            );

            if ui.small_button("▶").on_hover_text("Next month").clicked() {
                state.next_month();
            }
        });
    }

    /// Day-of-week strip. Monday first, matching the grid padding.
    fn render_day_names(ui: &mut egui::Ui, palette: CalendarCellPalette) {
        let day_names = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
        let spacing = 2.0;
        let col_width = Self::column_width(ui, spacing);

        egui::Grid::new("day_name_strip")
            .num_columns(7)
            .spacing([spacing, spacing])
            .min_col_width(col_width)
            .show(ui, |ui| {
                for name in &day_names {
                    ui.with_layout(
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            ui.label(
                                egui::RichText::new(*name)
                                    .small()
                                    .strong()
                                    .color(palette.header_text),
                            );
                        },
                    );
                }
                ui.end_row();
            });
    }

    fn render_grid(
        ui: &mut egui::Ui,
        state: &mut CalendarState,
        today: NaiveDate,
        palette: CalendarCellPalette,
    ) {
        let spacing = 2.0;
        let col_width = Self::column_width(ui, spacing);
        let selectable = state.date_selection();
        let cells = state.day_cells(today);

        egui::Grid::new("month_grid")
            .num_columns(7)
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for week in cells.chunks(7) {
                    for cell in week {
                        let response =
                            Self::render_day_cell(ui, cell, selectable, palette, col_width);
                        if response.clicked() && state.click_day(cell) {
                            log::debug!("Selected {}", cell.date);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn column_width(ui: &egui::Ui, spacing: f32) -> f32 {
        // 6 gaps between 7 columns
        let total_spacing = spacing * 6.0;
        ((ui.available_width() - total_spacing) / 7.0).max(24.0)
    }
}
