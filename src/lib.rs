//! Saving Money Cat - a tiny savings companion
//!
//! This library backs two small programs:
//!
//! - `saving-cat`: a console expense tracker. A month is configured with an
//!   income, a saving target and a number of days; daily expenses are
//!   logged per category, days and weeks are checked against their budgets,
//!   and the cat's mood and rewards follow the results.
//! - `purrfect-saver`: a one-window terminal app that turns saved amounts
//!   into XP, levels and a streak.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records, big purchases, totals and the mood
//! - `tracker`: The budget tracker and its operation outcomes
//! - `rewards`: Purrfect Saver counters
//! - `input`: Prompting and number validation
//! - `display`: Console formatting
//! - `charts`: Monthly chart renderers (terminal text or SVG)
//! - `activity`: Optional JSON-lines activity log
//! - `cli`: The interactive console session
//! - `tui`: The Purrfect Saver window
//!
//! # Example
//!
//! ```rust
//! use saving_cat::tracker::BudgetTracker;
//!
//! let mut tracker = BudgetTracker::new(1000.0, 200.0, 30).unwrap();
//! tracker.log_expense(1, "Food", 20.0);
//! let day = tracker.end_of_day(1);
//! assert!(day.under_budget());
//! ```

pub mod activity;
pub mod charts;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod models;
pub mod rewards;
pub mod tracker;
pub mod tui;

pub use error::{CatError, CatResult};
