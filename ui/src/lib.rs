//! Desktop admin client for the employees backend.

pub mod app;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::StaffdeskApp;
