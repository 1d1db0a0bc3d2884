//! Summary formatting
//!
//! Turns tracker outcomes into the console text shown after each menu action.

use crate::tracker::{BigPurchaseOutcome, DayOutcome, MonthlyReport, WeekOutcome};

use super::report::{format_header, format_money};

/// Format the budgets after a big purchase
pub fn format_big_purchase(symbol: &str, outcome: &BigPurchaseOutcome) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n⚡ Big Purchase: {} for {} on Day {}.\n",
        outcome.purchase.item,
        format_money(symbol, outcome.purchase.amount),
        outcome.purchase.day
    ));
    if !outcome.recomputed {
        output.push_str("No days left after this purchase, budgets unchanged.\n");
    }
    output.push_str(&format!(
        "New daily budget: {}, New weekly budget: {}\n",
        format_money(symbol, outcome.daily_budget),
        format_money(symbol, outcome.weekly_budget)
    ));
    output
}

/// Format the end-of-day line, followed by the weekly summary if one ran
pub fn format_day(symbol: &str, outcome: &DayOutcome) -> String {
    let mut output = match outcome.saved {
        Some(saved) => format!(
            "Day {}: Spent {}, under budget! Saved {}. Cat is {}. {}\n",
            outcome.day,
            format_money(symbol, outcome.spent),
            format_money(symbol, saved),
            outcome.mood,
            outcome.mood.face()
        ),
        None => format!(
            "Day {}: Spent {}, over budget. No savings today. Cat is {}. {}\n",
            outcome.day,
            format_money(symbol, outcome.spent),
            outcome.mood,
            outcome.mood.face()
        ),
    };

    if let Some(week) = &outcome.week {
        output.push_str(&format_week(symbol, week));
    }

    output
}

/// Format a weekly summary
pub fn format_week(symbol: &str, outcome: &WeekOutcome) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header(&format!("Week {} Summary", outcome.week)));
    output.push('\n');
    output.push_str(&format!(
        "Total spent: {} vs Weekly budget: {}\n",
        format_money(symbol, outcome.spent),
        format_money(symbol, outcome.weekly_budget)
    ));

    match &outcome.reward {
        Some(reward) => output.push_str(&format!("🎉 Weekly success! Cat unlocks {}.\n", reward)),
        None => output.push_str("⚠️ Overspent this week. Try to recover next week.\n"),
    }

    output
}

/// Format the month-end report (charts are drawn separately)
pub fn format_monthly(symbol: &str, report: &MonthlyReport) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(&format_header("Monthly Summary"));
    output.push('\n');
    output.push_str(&format!("Income: {}\n", format_money(symbol, report.income)));
    output.push_str(&format!(
        "Target Saving: {}\n",
        format_money(symbol, report.target_saving)
    ));
    output.push_str(&format!(
        "Actual Saved: {}\n",
        format_money(symbol, report.balance)
    ));

    output.push_str("\nExpense Breakdown by Category:\n");
    if report.categories.is_empty() {
        output.push_str(" (no expenses logged)\n");
    }
    for category in &report.categories {
        output.push_str(&format!(
            " - {}: {}\n",
            category.category,
            format_money(symbol, category.total)
        ));
    }

    if !report.big_purchases.is_empty() {
        output.push_str("\nBig Purchases:\n");
        for purchase in &report.big_purchases {
            output.push_str(&format!(
                " - Day {}: {} ({})\n",
                purchase.day,
                purchase.item,
                format_money(symbol, purchase.amount)
            ));
        }
    }

    match &report.reward {
        Some(reward) => output.push_str(&format!(
            "🎉 Monthly target achieved! Cat unlocks {}! {}\n",
            reward,
            report.mood.face()
        )),
        None => output.push_str("Target not met. Cat stays cozy but neutral.\n"),
    }

    output.push_str("\nUnlocked Rewards:\n");
    for reward in &report.rewards {
        output.push_str(&format!(" - {}\n", reward));
    }

    output
}
