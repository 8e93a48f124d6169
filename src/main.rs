// Month Calendar Application
// Main entry point

use anyhow::Context;
use month_calendar::ui::CalendarApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Calendar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 470.0])
            .with_min_inner_size([320.0, 380.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Month Calendar",
        options,
        Box::new(|cc| Ok(Box::new(CalendarApp::new(cc)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("failed to run the calendar window")
}
