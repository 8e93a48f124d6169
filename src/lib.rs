// Month Calendar Library
// Exports all modules for testing and reuse

pub mod grid;
pub mod models;
pub mod settings;
pub mod ui;
pub mod utils;
