//! Core data models for Saving Money Cat
//!
//! Expense records, big purchases, aggregated totals and the cat's mood.

pub mod expense;
pub mod mood;

pub use expense::{BigPurchase, CategoryTotal, ExpenseRecord, WeeklyTotal};
pub use mood::Mood;
