//! Display formatting for terminal output
//!
//! This module provides formatting utilities for the console tracker.

pub mod report;
pub mod summary;

pub use report::{format_bar, format_money, format_percentage};
pub use summary::{format_big_purchase, format_day, format_monthly, format_week};
