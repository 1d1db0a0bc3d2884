//! Expense and big-purchase records
//!
//! Amounts are plain `f64`; there is no currency rounding beyond what the
//! reports apply when printing.

use serde::{Deserialize, Serialize};

/// A single expense logged against a day and a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Day of the month the expense belongs to (not range-checked)
    pub day: i64,
    /// Spending category, e.g. "Food"
    pub category: String,
    /// Amount spent
    pub amount: f64,
}

impl ExpenseRecord {
    pub fn new(day: i64, category: impl Into<String>, amount: f64) -> Self {
        Self {
            day,
            category: category.into(),
            amount,
        }
    }

    /// Whether this expense falls in the inclusive day range `[start, end]`
    pub fn in_days(&self, start: i64, end: i64) -> bool {
        start <= self.day && self.day <= end
    }
}

/// A large one-off purchase that permanently shrinks the allowable expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigPurchase {
    pub day: i64,
    pub item: String,
    pub amount: f64,
}

impl BigPurchase {
    pub fn new(day: i64, item: impl Into<String>, amount: f64) -> Self {
        Self {
            day,
            item: item.into(),
            amount,
        }
    }
}

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Total spent in one calendar-aligned week of the month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyTotal {
    /// 1-based week number
    pub week: u32,
    pub total: f64,
}
