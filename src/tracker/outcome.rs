//! Results of tracker operations
//!
//! The tracker never prints. Each operation hands back one of these values
//! and the console layer decides how to show it.

use serde::Serialize;

use crate::charts::ChartRenderer;
use crate::error::CatResult;
use crate::models::{BigPurchase, CategoryTotal, Mood, WeeklyTotal};

/// Reward unlocked when the month's savings reach the target
pub const MONTHLY_REWARD: &str = "Spa Mode";

/// Reward text for a successful week
pub fn weekly_reward(week: i64) -> String {
    format!("Week {} Toy", week)
}

/// Budgets after a big purchase
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BigPurchaseOutcome {
    pub purchase: BigPurchase,
    pub allowable_expenses: f64,
    pub daily_budget: f64,
    pub weekly_budget: f64,
    /// False when the purchase fell on or after the last day
    pub recomputed: bool,
}

/// Result of closing a day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOutcome {
    pub day: i64,
    pub spent: f64,
    pub daily_budget: f64,
    /// Surplus added to the balance, `None` when over budget
    pub saved: Option<f64>,
    pub mood: Mood,
    /// Present when the day closes a week (multiple of 7)
    pub week: Option<WeekOutcome>,
}

impl DayOutcome {
    pub fn under_budget(&self) -> bool {
        self.saved.is_some()
    }
}

/// Result of summarizing the 7-day window ending on `day`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekOutcome {
    pub day: i64,
    /// `day / 7`, floored
    pub week: i64,
    pub spent: f64,
    pub weekly_budget: f64,
    pub reward: Option<String>,
}

/// Month-end report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    pub income: f64,
    pub target_saving: f64,
    pub balance: f64,
    /// Category totals in first-logged order
    pub categories: Vec<CategoryTotal>,
    pub big_purchases: Vec<BigPurchase>,
    /// The reward unlocked by this summary, if the target was met
    pub reward: Option<String>,
    pub mood: Mood,
    /// Every reward unlocked so far, including `reward`
    pub rewards: Vec<String>,
    pub weekly_totals: Vec<WeeklyTotal>,
    pub weekly_budget: f64,
}

impl MonthlyReport {
    pub fn target_met(&self) -> bool {
        self.reward.is_some()
    }

    /// Draw the weekly bar chart, then the category pie chart.
    ///
    /// The pie chart is still attempted if the bar chart fails; the first
    /// error is returned.
    pub fn render_charts(&self, charts: &mut dyn ChartRenderer) -> CatResult<()> {
        let bar = charts.render_bar_chart(&self.weekly_totals, self.weekly_budget);
        let pie = charts.render_pie_chart(&self.categories);
        bar.and(pie)
    }
}
