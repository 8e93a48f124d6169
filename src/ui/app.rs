//! The eframe application shell around the month view.

use chrono::Local;

use crate::settings::CalendarSettings;
use crate::ui::state::CalendarState;
use crate::ui::theme::CalendarTheme;
use crate::ui::views::{MonthView, MonthViewAction};

pub struct CalendarApp {
    state: CalendarState,
    /// Currently applied theme colors
    theme: CalendarTheme,
    /// Most recent add-event request, shown in the status line
    last_request: Option<String>,
}

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = CalendarSettings::load_or_default();
        log::info!(
            "Loaded settings: theme={}, date_selection={}",
            settings.theme,
            settings.date_selection
        );

        let theme = CalendarTheme::from_name(&settings.theme);
        cc.egui_ctx.set_visuals(if theme.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let today = Local::now().date_naive();
        Self {
            state: CalendarState::new(today, settings.date_selection),
            theme,
            last_request: None,
        }
    }
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = egui::Frame::default()
            .fill(self.theme.app_background)
            .inner_margin(egui::Margin::same(12.0));

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            match MonthView::show(ui, &mut self.state, &self.theme) {
                MonthViewAction::AddEventRequested(date) => {
                    let message = match date {
                        Some(date) => format!("Add event on {}", date.format("%Y-%m-%d")),
                        None => "Add event".to_string(),
                    };
                    log::info!("{message}");
                    self.last_request = Some(message);
                }
                MonthViewAction::None => {}
            }

            if let Some(message) = &self.last_request {
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("Requested: {message}")).small().weak());
            }
        });
    }
}
