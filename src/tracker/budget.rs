//! The budget tracker
//!
//! Holds the month's configuration, the append-only expense and big-purchase
//! logs, the savings balance, the cat's mood and the unlocked rewards.

use std::collections::HashMap;

use crate::error::{CatError, CatResult};
use crate::models::{BigPurchase, CategoryTotal, ExpenseRecord, Mood, WeeklyTotal};

use super::outcome::{
    weekly_reward, BigPurchaseOutcome, DayOutcome, MonthlyReport, WeekOutcome, MONTHLY_REWARD,
};

/// A month is always budgeted as four weeks, whatever its length
pub const WEEKS_PER_MONTH: f64 = 4.0;

const DAYS_PER_WEEK: i64 = 7;

/// Tracks one month of spending against an income and a saving target
#[derive(Debug, Clone)]
pub struct BudgetTracker {
    income: f64,
    target_saving: f64,
    total_days: u32,

    allowable_expenses: f64,
    daily_budget: f64,
    weekly_budget: f64,

    balance: f64,
    mood: Mood,
    expenses: Vec<ExpenseRecord>,
    big_purchases: Vec<BigPurchase>,
    rewards: Vec<String>,
}

impl BudgetTracker {
    /// Create a tracker for a month of `total_days` days
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `total_days` is zero.
    pub fn new(income: f64, target_saving: f64, total_days: u32) -> CatResult<Self> {
        if total_days == 0 {
            return Err(CatError::Config("a month needs at least one day".into()));
        }

        let allowable_expenses = income - target_saving;

        Ok(Self {
            income,
            target_saving,
            total_days,
            allowable_expenses,
            daily_budget: allowable_expenses / f64::from(total_days),
            weekly_budget: allowable_expenses / WEEKS_PER_MONTH,
            balance: 0.0,
            mood: Mood::default(),
            expenses: Vec::new(),
            big_purchases: Vec::new(),
            rewards: Vec::new(),
        })
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn target_saving(&self) -> f64 {
        self.target_saving
    }

    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    pub fn allowable_expenses(&self) -> f64 {
        self.allowable_expenses
    }

    pub fn daily_budget(&self) -> f64 {
        self.daily_budget
    }

    pub fn weekly_budget(&self) -> f64 {
        self.weekly_budget
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn big_purchases(&self) -> &[BigPurchase] {
        &self.big_purchases
    }

    pub fn rewards(&self) -> &[String] {
        &self.rewards
    }

    /// Record an expense. Neither the day nor the amount is checked.
    pub fn log_expense(&mut self, day: i64, category: impl Into<String>, amount: f64) {
        self.expenses.push(ExpenseRecord::new(day, category, amount));
    }

    /// Record a big purchase and shrink the remaining budgets
    ///
    /// The allowable expenses always drop by `amount`. Budgets are spread
    /// over the days left after `day`; when no days are left they stay as
    /// they were.
    pub fn log_big_purchase(
        &mut self,
        day: i64,
        item: impl Into<String>,
        amount: f64,
    ) -> BigPurchaseOutcome {
        let purchase = BigPurchase::new(day, item, amount);
        self.big_purchases.push(purchase.clone());
        self.allowable_expenses -= amount;

        let remaining_days = i64::from(self.total_days).saturating_sub(day);
        let recomputed = remaining_days > 0;
        if recomputed {
            self.daily_budget = self.allowable_expenses / remaining_days as f64;
            self.weekly_budget = self.allowable_expenses / WEEKS_PER_MONTH;
        }

        BigPurchaseOutcome {
            purchase,
            allowable_expenses: self.allowable_expenses,
            daily_budget: self.daily_budget,
            weekly_budget: self.weekly_budget,
            recomputed,
        }
    }

    /// Total logged for exactly `day`
    pub fn spent_on(&self, day: i64) -> f64 {
        self.expenses
            .iter()
            .filter(|e| e.day == day)
            .map(|e| e.amount)
            .sum()
    }

    /// Total logged in the inclusive range `[start, end]`
    pub fn spent_between(&self, start: i64, end: i64) -> f64 {
        self.expenses
            .iter()
            .filter(|e| e.in_days(start, end))
            .map(|e| e.amount)
            .sum()
    }

    /// Close a day: bank the surplus if under budget and update the mood
    ///
    /// Days that are a multiple of seven also run the weekly summary.
    pub fn end_of_day(&mut self, day: i64) -> DayOutcome {
        let spent = self.spent_on(day);
        let daily_budget = self.daily_budget;

        let saved = if spent <= daily_budget {
            let surplus = daily_budget - spent;
            self.balance += surplus;
            self.mood = Mood::Happy;
            Some(surplus)
        } else {
            self.mood = Mood::Neutral;
            None
        };

        let week = if day.rem_euclid(DAYS_PER_WEEK) == 0 {
            Some(self.weekly_summary(day))
        } else {
            None
        };

        DayOutcome {
            day,
            spent,
            daily_budget,
            saved,
            mood: self.mood,
            week,
        }
    }

    /// Summarize the trailing seven days ending on `day`
    ///
    /// Unlocks a toy when the window stays within the weekly budget. Calling
    /// this again for the same week unlocks the toy again.
    pub fn weekly_summary(&mut self, day: i64) -> WeekOutcome {
        let spent = self.spent_between(day.saturating_sub(DAYS_PER_WEEK - 1), day);
        let week = day.div_euclid(DAYS_PER_WEEK);

        let reward = if spent <= self.weekly_budget {
            let reward = weekly_reward(week);
            self.rewards.push(reward.clone());
            Some(reward)
        } else {
            None
        };

        WeekOutcome {
            day,
            week,
            spent,
            weekly_budget: self.weekly_budget,
            reward,
        }
    }

    /// Totals per category, in the order each category was first logged
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<CategoryTotal> = Vec::new();

        for expense in &self.expenses {
            match index.get(expense.category.as_str()) {
                Some(&i) => totals[i].total += expense.amount,
                None => {
                    index.insert(expense.category.as_str(), totals.len());
                    totals.push(CategoryTotal {
                        category: expense.category.clone(),
                        total: expense.amount,
                    });
                }
            }
        }

        totals
    }

    /// Totals for each full calendar week (days 1-7, 8-14, ...)
    ///
    /// Trailing days that do not fill a week are left out.
    pub fn weekly_totals(&self) -> Vec<WeeklyTotal> {
        let weeks = self.total_days / DAYS_PER_WEEK as u32;

        (0..weeks)
            .map(|w| {
                let start = i64::from(w) * DAYS_PER_WEEK + 1;
                WeeklyTotal {
                    week: w + 1,
                    total: self.spent_between(start, start + DAYS_PER_WEEK - 1),
                }
            })
            .collect()
    }

    /// Wrap up the month: spa mode if the savings reached the target
    pub fn monthly_summary(&mut self) -> MonthlyReport {
        let reward = if self.balance >= self.target_saving {
            self.rewards.push(MONTHLY_REWARD.to_string());
            self.mood = Mood::Spa;
            Some(MONTHLY_REWARD.to_string())
        } else {
            self.mood = Mood::Neutral;
            None
        };

        MonthlyReport {
            income: self.income,
            target_saving: self.target_saving,
            balance: self.balance,
            categories: self.category_totals(),
            big_purchases: self.big_purchases.clone(),
            reward,
            mood: self.mood,
            rewards: self.rewards.clone(),
            weekly_totals: self.weekly_totals(),
            weekly_budget: self.weekly_budget,
        }
    }
}
