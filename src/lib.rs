pub mod config;
pub mod models;
pub mod naming_processor;
pub mod utils;

pub use utils::{generate_unique_filename, sanitize_filename, split_extension};
