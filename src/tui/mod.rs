//! Terminal User Interface for Purrfect Saver
//!
//! A single small window built with ratatui: one amount field, a
//! "Save Money" button, the XP gained by the last submission and the
//! running level/points/streak counters.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
