// Module exports for models

pub mod day;
