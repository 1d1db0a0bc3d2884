//! Budget tracking for the Saving Money Cat
//!
//! `BudgetTracker` owns all month state. Operations return plain outcome
//! values so the model can be exercised without any terminal.

pub mod budget;
pub mod outcome;

pub use budget::{BudgetTracker, WEEKS_PER_MONTH};
pub use outcome::{
    weekly_reward, BigPurchaseOutcome, DayOutcome, MonthlyReport, WeekOutcome, MONTHLY_REWARD,
};
