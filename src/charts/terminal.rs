//! Text charts drawn straight into the terminal

use std::io::Write;

use crate::display::report::{format_bar, format_header, format_money, format_percentage, left_align};
use crate::error::CatResult;
use crate::models::{CategoryTotal, WeeklyTotal};

use super::ChartRenderer;

const BAR_WIDTH: usize = 30;

/// Draws both charts as block-character bars
pub struct TerminalCharts<W: Write> {
    out: W,
    currency_symbol: String,
}

impl<W: Write> TerminalCharts<W> {
    pub fn new(out: W, currency_symbol: String) -> Self {
        Self {
            out,
            currency_symbol,
        }
    }

    /// Give back the writer (used by tests to inspect the output)
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartRenderer for TerminalCharts<W> {
    fn render_bar_chart(&mut self, series: &[WeeklyTotal], threshold: f64) -> CatResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", format_header("Weekly Spending vs Budget"))?;

        if series.is_empty() {
            writeln!(self.out, "No full weeks in this month.")?;
            return Ok(self.out.flush()?);
        }

        let max = series
            .iter()
            .map(|w| w.total)
            .fold(threshold, f64::max);

        for week in series {
            let marker = if week.total > threshold { " over" } else { "" };
            writeln!(
                self.out,
                "Week {:<2} {} {}{}",
                week.week,
                format_bar(week.total, max, BAR_WIDTH),
                format_money(&self.currency_symbol, week.total),
                marker
            )?;
        }

        writeln!(
            self.out,
            "Budget  {} {}",
            format_bar(threshold, max, BAR_WIDTH),
            format_money(&self.currency_symbol, threshold)
        )?;

        Ok(self.out.flush()?)
    }

    fn render_pie_chart(&mut self, totals: &[CategoryTotal]) -> CatResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", format_header("Expense Breakdown by Category"))?;

        let sum: f64 = totals.iter().map(|c| c.total.max(0.0)).sum();
        if sum <= 0.0 {
            writeln!(self.out, "No expenses to chart.")?;
            return Ok(self.out.flush()?);
        }

        let name_width = totals
            .iter()
            .map(|c| c.category.len())
            .max()
            .unwrap_or(8);

        for category in totals {
            let share = category.total.max(0.0) / sum * 100.0;
            writeln!(
                self.out,
                "{} {} {}",
                left_align(&category.category, name_width),
                format_bar(share, 100.0, BAR_WIDTH),
                format_percentage(share)
            )?;
        }

        Ok(self.out.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_bars(series: &[WeeklyTotal], threshold: f64) -> String {
        let mut charts = TerminalCharts::new(Vec::new(), "$".to_string());
        charts.render_bar_chart(series, threshold).unwrap();
        String::from_utf8(charts.into_inner()).unwrap()
    }

    #[test]
    fn test_bar_chart_marks_weeks_over_budget() {
        let text = render_bars(
            &[
                WeeklyTotal { week: 1, total: 50.0 },
                WeeklyTotal { week: 2, total: 250.0 },
            ],
            200.0,
        );

        assert!(text.contains("Weekly Spending vs Budget"));
        assert!(text.contains("Week 1  "));
        assert!(text.contains("$250.00 over"));
        assert!(!text.contains("$50.00 over"));
        assert!(text.contains("Budget"));
    }

    #[test]
    fn test_bar_chart_without_weeks() {
        let text = render_bars(&[], 100.0);
        assert!(text.contains("No full weeks"));
    }

    #[test]
    fn test_pie_chart_shares() {
        let mut charts = TerminalCharts::new(Vec::new(), "$".to_string());
        charts
            .render_pie_chart(&[
                CategoryTotal {
                    category: "Food".into(),
                    total: 30.0,
                },
                CategoryTotal {
                    category: "Transport".into(),
                    total: 10.0,
                },
            ])
            .unwrap();
        let text = String::from_utf8(charts.into_inner()).unwrap();

        assert!(text.contains("75.0%"));
        assert!(text.contains("25.0%"));
    }

    #[test]
    fn test_pie_chart_with_nothing_spent() {
        let mut charts = TerminalCharts::new(Vec::new(), "$".to_string());
        charts.render_pie_chart(&[]).unwrap();
        let text = String::from_utf8(charts.into_inner()).unwrap();
        assert!(text.contains("No expenses to chart."));
    }
}
