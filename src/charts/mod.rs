//! Chart rendering for the monthly summary
//!
//! Two charts are drawn: weekly spending as bars against the weekly budget
//! line, and the category breakdown as a pie. Renderers implement
//! [`ChartRenderer`] so the summary does not care where the charts end up.

pub mod svg_file;
pub mod terminal;

use crate::config::ChartOutput;
use crate::error::CatResult;
use crate::models::{CategoryTotal, WeeklyTotal};

pub use self::svg_file::SvgCharts;
pub use self::terminal::TerminalCharts;

/// Something that can draw the two monthly charts
pub trait ChartRenderer {
    /// Bar per week, with a horizontal line at `threshold`
    fn render_bar_chart(&mut self, series: &[WeeklyTotal], threshold: f64) -> CatResult<()>;

    /// Share of spending per category
    fn render_pie_chart(&mut self, totals: &[CategoryTotal]) -> CatResult<()>;
}

/// Renderer that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCharts;

impl ChartRenderer for NoCharts {
    fn render_bar_chart(&mut self, _series: &[WeeklyTotal], _threshold: f64) -> CatResult<()> {
        Ok(())
    }

    fn render_pie_chart(&mut self, _totals: &[CategoryTotal]) -> CatResult<()> {
        Ok(())
    }
}

/// Build the renderer selected by the settings
pub fn renderer_for(
    output: ChartOutput,
    currency_symbol: &str,
    chart_dir: std::path::PathBuf,
) -> Box<dyn ChartRenderer> {
    match output {
        ChartOutput::Terminal => Box::new(TerminalCharts::new(
            std::io::stdout(),
            currency_symbol.to_string(),
        )),
        ChartOutput::Svg => Box::new(SvgCharts::new(chart_dir, currency_symbol.to_string())),
        ChartOutput::None => Box::new(NoCharts),
    }
}

/// Renderer that remembers what it was asked to draw
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingCharts {
    pub bar_charts: Vec<(Vec<WeeklyTotal>, f64)>,
    pub pie_charts: Vec<Vec<CategoryTotal>>,
}

#[cfg(test)]
impl ChartRenderer for RecordingCharts {
    fn render_bar_chart(&mut self, series: &[WeeklyTotal], threshold: f64) -> CatResult<()> {
        self.bar_charts.push((series.to_vec(), threshold));
        Ok(())
    }

    fn render_pie_chart(&mut self, totals: &[CategoryTotal]) -> CatResult<()> {
        self.pie_charts.push(totals.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_charts_accepts_anything() {
        let mut charts = NoCharts;
        assert!(charts.render_bar_chart(&[], 0.0).is_ok());
        assert!(charts.render_pie_chart(&[]).is_ok());
    }
}
