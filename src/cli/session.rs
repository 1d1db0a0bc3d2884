//! Interactive console session
//!
//! Collects the month's configuration, then loops over the menu until the
//! user exits or the input runs out. Bad numbers are re-asked; nothing the
//! user types ends the session except choosing Exit.

use std::io::{BufRead, Write};

use crate::activity::{ActivityEntry, ActivityKind, ActivityLogger};
use crate::charts::ChartRenderer;
use crate::config::Settings;
use crate::display::{format_big_purchase, format_day, format_monthly, format_week};
use crate::error::{CatError, CatResult};
use crate::input::Prompter;
use crate::tracker::BudgetTracker;

use super::menu::{format_menu, MenuChoice};

/// What the loop should do after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A running tracker session
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    tracker: BudgetTracker,
    settings: Settings,
    charts: Box<dyn ChartRenderer>,
    activity: Option<ActivityLogger>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Ask for income, target and month length, then build the session
    ///
    /// # Errors
    ///
    /// Returns [`CatError::InputClosed`] if the input ends before the
    /// questions are answered.
    pub fn start(
        mut prompter: Prompter<R, W>,
        settings: Settings,
        charts: Box<dyn ChartRenderer>,
        activity: Option<ActivityLogger>,
    ) -> CatResult<Self> {
        let income = prompter.prompt_float("Enter your monthly income: ", None)?;
        let target = prompter.prompt_float("Enter your monthly saving target: ", None)?;

        let days_prompt = format!(
            "How many days in this month? (default {}): ",
            settings.default_days
        );
        let total_days = loop {
            let days = prompter.prompt_int(&days_prompt, Some(i64::from(settings.default_days)))?;
            match u32::try_from(days) {
                Ok(days) if days >= 1 => break days,
                _ => writeln!(prompter.output(), "❌ A month needs at least 1 day.")?,
            }
        };

        let tracker = BudgetTracker::new(income, target, total_days)?;

        let session = Self {
            prompter,
            tracker,
            settings,
            charts,
            activity,
        };
        session.record(ActivityEntry::with_detail(
            ActivityKind::SessionStarted,
            None,
            &serde_json::json!({
                "income": income,
                "target_saving": target,
                "total_days": total_days,
            }),
        ));

        Ok(session)
    }

    pub fn tracker(&self) -> &BudgetTracker {
        &self.tracker
    }

    /// Give back the prompter (used by tests to inspect the output)
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Run the menu loop until Exit or end of input
    pub fn run(&mut self) -> CatResult<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) | Err(CatError::InputClosed) => break,
                Err(e) => return Err(e),
            }
        }

        writeln!(self.prompter.output(), "Goodbye! Cat waves 🐱👋")?;
        self.prompter.output().flush()?;
        self.record(ActivityEntry::new(ActivityKind::SessionEnded, None));
        Ok(())
    }

    fn step(&mut self) -> CatResult<Flow> {
        write!(self.prompter.output(), "{}", format_menu())?;
        let answer = self.prompter.prompt_line("Choose an option: ")?;

        match MenuChoice::parse(&answer) {
            Some(MenuChoice::LogDailyExpenses) => self.log_daily_expenses()?,
            Some(MenuChoice::WeeklySummary) => self.weekly_summary()?,
            Some(MenuChoice::MonthlySummary) => self.monthly_summary()?,
            Some(MenuChoice::BigPurchase) => self.big_purchase()?,
            Some(MenuChoice::Exit) => return Ok(Flow::Quit),
            None => writeln!(self.prompter.output(), "❌ Invalid choice. Try again.")?,
        }

        Ok(Flow::Continue)
    }

    fn log_daily_expenses(&mut self) -> CatResult<()> {
        let day = self.prompter.prompt_int("Enter day number: ", None)?;

        for category in self.settings.categories.clone() {
            let amount = self.prompter.prompt_float(&format!("  {}: ", category), None)?;
            self.tracker.log_expense(day, category.as_str(), amount);
            if let Some(expense) = self.tracker.expenses().last() {
                self.record(ActivityEntry::with_detail(
                    ActivityKind::ExpenseLogged,
                    Some(day),
                    expense,
                ));
            }
        }

        let outcome = self.tracker.end_of_day(day);
        write!(
            self.prompter.output(),
            "{}",
            format_day(&self.settings.currency_symbol, &outcome)
        )?;
        self.record(ActivityEntry::with_detail(
            ActivityKind::DayClosed,
            Some(day),
            &outcome,
        ));
        Ok(())
    }

    fn weekly_summary(&mut self) -> CatResult<()> {
        let day = self.prompter.prompt_int("Enter last day of week: ", None)?;

        let outcome = self.tracker.weekly_summary(day);
        write!(
            self.prompter.output(),
            "{}",
            format_week(&self.settings.currency_symbol, &outcome)
        )?;
        self.record(ActivityEntry::with_detail(
            ActivityKind::WeekSummarized,
            Some(day),
            &outcome,
        ));
        Ok(())
    }

    fn monthly_summary(&mut self) -> CatResult<()> {
        let report = self.tracker.monthly_summary();
        write!(
            self.prompter.output(),
            "{}",
            format_monthly(&self.settings.currency_symbol, &report)
        )?;
        // Terminal charts write through their own handle
        self.prompter.output().flush()?;

        if let Err(e) = report.render_charts(self.charts.as_mut()) {
            eprintln!("Warning: could not draw charts: {}", e);
        }

        self.record(ActivityEntry::with_detail(
            ActivityKind::MonthSummarized,
            None,
            &report,
        ));
        Ok(())
    }

    fn big_purchase(&mut self) -> CatResult<()> {
        let day = self.prompter.prompt_int("Enter day number: ", None)?;
        let item = self.prompter.prompt_line("Item name: ")?;
        let amount = self.prompter.prompt_float("Cost: ", None)?;

        let outcome = self.tracker.log_big_purchase(day, item, amount);
        write!(
            self.prompter.output(),
            "{}",
            format_big_purchase(&self.settings.currency_symbol, &outcome)
        )?;
        self.record(ActivityEntry::with_detail(
            ActivityKind::BigPurchase,
            Some(day),
            &outcome,
        ));
        Ok(())
    }

    /// Write to the activity log if one is configured
    ///
    /// A failing log never interrupts the session.
    fn record(&self, entry: ActivityEntry) {
        if let Some(logger) = &self.activity {
            if let Err(e) = logger.log(&entry) {
                eprintln!("Warning: could not write activity log: {}", e);
            }
        }
    }
}

/// Start a session and run it to completion
///
/// Running out of input during the opening questions ends quietly.
pub fn run_session<R: BufRead, W: Write>(
    prompter: Prompter<R, W>,
    settings: Settings,
    charts: Box<dyn ChartRenderer>,
    activity: Option<ActivityLogger>,
) -> CatResult<()> {
    match Session::start(prompter, settings, charts, activity) {
        Ok(mut session) => session.run(),
        Err(CatError::InputClosed) => Ok(()),
        Err(e) => Err(e),
    }
}
