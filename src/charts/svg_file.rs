//! SVG charts written to disk

use std::f32::consts::PI;
use std::path::{Path, PathBuf};

use svg::node::element::path::Data;
use svg::node::element::{Circle, Line, Path as SvgPath, Rectangle, Text};
use svg::Document;

use crate::error::{CatError, CatResult};
use crate::models::{CategoryTotal, WeeklyTotal};

use super::ChartRenderer;

/// File name of the weekly bar chart
pub const BAR_CHART_FILE: &str = "weekly_spending.svg";
/// File name of the category pie chart
pub const PIE_CHART_FILE: &str = "category_breakdown.svg";

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 400.0;
const MARGIN: f32 = 50.0;
const PIE_RADIUS: f32 = 150.0;

const COLORS: &[&str] = &[
    "skyblue", "orange", "green", "purple", "gold", "brown", "pink",
];

/// Writes the charts as SVG documents into a directory
#[derive(Debug, Clone)]
pub struct SvgCharts {
    dir: PathBuf,
    currency_symbol: String,
}

impl SvgCharts {
    pub fn new(dir: PathBuf, currency_symbol: String) -> Self {
        Self {
            dir,
            currency_symbol,
        }
    }

    pub fn bar_chart_path(&self) -> PathBuf {
        self.dir.join(BAR_CHART_FILE)
    }

    pub fn pie_chart_path(&self) -> PathBuf {
        self.dir.join(PIE_CHART_FILE)
    }

    fn save(&self, path: &Path, document: &Document) -> CatResult<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| CatError::Chart(format!("Failed to create chart directory: {}", e)))?;
        svg::save(path, document)
            .map_err(|e| CatError::Chart(format!("Failed to write {}: {}", path.display(), e)))
    }
}

fn label(x: f32, y: f32, content: impl Into<String>) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("font-size", 14)
        .set("text-anchor", "middle")
        .add(svg::node::Text::new(content))
}

/// Key for the bar and the budget line, in the top right corner
fn bar_chart_legend(document: Document) -> Document {
    let x = WIDTH - MARGIN - 170.0;
    let y = MARGIN / 2.0 + 12.0;

    document
        .add(
            Rectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", 18)
                .set("height", 10)
                .set("fill", "skyblue"),
        )
        .add(label(x + 26.0, y + 10.0, "Weekly Spending").set("text-anchor", "start"))
        .add(
            Line::new()
                .set("x1", x)
                .set("x2", x + 18.0)
                .set("y1", y + 25.0)
                .set("y2", y + 25.0)
                .set("stroke", "red")
                .set("stroke-dasharray", "4,2")
                .set("stroke-width", 2),
        )
        .add(label(x + 26.0, y + 30.0, "Weekly Budget").set("text-anchor", "start"))
}

impl ChartRenderer for SvgCharts {
    fn render_bar_chart(&mut self, series: &[WeeklyTotal], threshold: f64) -> CatResult<()> {
        let max = series
            .iter()
            .map(|w| w.total)
            .fold(threshold, f64::max)
            .max(1.0) as f32;
        let plot_height = HEIGHT - 2.0 * MARGIN;
        let slot = (WIDTH - 2.0 * MARGIN) / series.len().max(1) as f32;
        let scale_y = |value: f64| HEIGHT - MARGIN - (value.max(0.0) as f32 / max) * plot_height;

        let mut document = Document::new()
            .set("viewBox", (0, 0, WIDTH as i32, HEIGHT as i32))
            .add(label(WIDTH / 2.0, MARGIN / 2.0, "Weekly Spending vs Budget"));

        for (i, week) in series.iter().enumerate() {
            let top = scale_y(week.total);
            let x = MARGIN + i as f32 * slot;
            document = document
                .add(
                    Rectangle::new()
                        .set("x", x + slot * 0.1)
                        .set("y", top)
                        .set("width", slot * 0.8)
                        .set("height", HEIGHT - MARGIN - top)
                        .set("fill", "skyblue"),
                )
                .add(label(x + slot / 2.0, HEIGHT - MARGIN + 18.0, format!("Week {}", week.week)));
        }

        let budget_y = scale_y(threshold);
        document = document
            .add(
                Line::new()
                    .set("x1", MARGIN)
                    .set("x2", WIDTH - MARGIN)
                    .set("y1", budget_y)
                    .set("y2", budget_y)
                    .set("stroke", "red")
                    .set("stroke-dasharray", "8,4")
                    .set("stroke-width", 2),
            )
            .add(
                Line::new()
                    .set("x1", MARGIN)
                    .set("x2", WIDTH - MARGIN)
                    .set("y1", HEIGHT - MARGIN)
                    .set("y2", HEIGHT - MARGIN)
                    .set("stroke", "black")
                    .set("stroke-width", 2),
            )
            .add(label(WIDTH / 2.0, HEIGHT - 8.0, "Week"))
            .add(
                label(
                    16.0,
                    HEIGHT / 2.0,
                    format!("Amount Spent ({})", self.currency_symbol),
                )
                .set("transform", format!("rotate(-90 16 {})", HEIGHT / 2.0)),
            );
        let document = bar_chart_legend(document);

        self.save(&self.bar_chart_path(), &document)
    }

    fn render_pie_chart(&mut self, totals: &[CategoryTotal]) -> CatResult<()> {
        let (cx, cy) = (WIDTH / 2.0, HEIGHT / 2.0 + MARGIN / 2.0);
        let sum: f64 = totals.iter().map(|c| c.total.max(0.0)).sum();

        let mut document = Document::new()
            .set("viewBox", (0, 0, WIDTH as i32, HEIGHT as i32))
            .add(label(WIDTH / 2.0, MARGIN / 2.0, "Expense Breakdown by Category"));

        if sum <= 0.0 {
            document = document.add(label(cx, cy, "No expenses"));
            return self.save(&self.pie_chart_path(), &document);
        }

        let mut start = -PI / 2.0;
        for (i, category) in totals.iter().enumerate() {
            let share = (category.total.max(0.0) / sum) as f32;
            if share <= 0.0 {
                continue;
            }
            let color = COLORS[i % COLORS.len()];
            let sweep = share * 2.0 * PI;
            let end = start + sweep;

            if share >= 1.0 {
                document = document.add(
                    Circle::new()
                        .set("cx", cx)
                        .set("cy", cy)
                        .set("r", PIE_RADIUS)
                        .set("fill", color),
                );
            } else {
                let large_arc = if sweep > PI { 1.0 } else { 0.0 };
                let data = Data::new()
                    .move_to(vec![cx, cy])
                    .line_to(vec![cx + PIE_RADIUS * start.cos(), cy + PIE_RADIUS * start.sin()])
                    .elliptical_arc_to(vec![
                        PIE_RADIUS,
                        PIE_RADIUS,
                        0.0,
                        large_arc,
                        1.0,
                        cx + PIE_RADIUS * end.cos(),
                        cy + PIE_RADIUS * end.sin(),
                    ])
                    .close();
                document = document.add(SvgPath::new().set("fill", color).set("d", data));
            }

            let middle = start + sweep / 2.0;
            let text = format!("{} {:.1}%", category.category, share * 100.0);
            document = document.add(label(
                cx + (PIE_RADIUS + 30.0) * middle.cos(),
                cy + (PIE_RADIUS + 30.0) * middle.sin(),
                text,
            ));
            start = end;
        }

        self.save(&self.pie_chart_path(), &document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_both_files() {
        let temp_dir = TempDir::new().unwrap();
        let mut charts = SvgCharts::new(temp_dir.path().join("charts"), "$".to_string());

        charts
            .render_bar_chart(
                &[
                    WeeklyTotal { week: 1, total: 120.0 },
                    WeeklyTotal { week: 2, total: 80.0 },
                ],
                100.0,
            )
            .unwrap();
        charts
            .render_pie_chart(&[
                CategoryTotal {
                    category: "Food".into(),
                    total: 60.0,
                },
                CategoryTotal {
                    category: "Misc".into(),
                    total: 40.0,
                },
            ])
            .unwrap();

        let bar = std::fs::read_to_string(charts.bar_chart_path()).unwrap();
        assert!(bar.contains("Weekly Spending vs Budget"));
        assert!(bar.contains("Week 2"));
        assert!(bar.contains("Weekly Spending"));
        assert!(bar.contains("Weekly Budget"));
        assert!(bar.contains("Amount Spent ($)"));
        assert!(bar.contains("rotate(-90"));

        let pie = std::fs::read_to_string(charts.pie_chart_path()).unwrap();
        assert!(pie.contains("Food 60.0%"));
        assert!(pie.contains("Misc 40.0%"));
    }

    #[test]
    fn test_single_category_is_full_circle() {
        let temp_dir = TempDir::new().unwrap();
        let mut charts = SvgCharts::new(temp_dir.path().to_path_buf(), "$".to_string());

        charts
            .render_pie_chart(&[CategoryTotal {
                category: "Food".into(),
                total: 5.0,
            }])
            .unwrap();

        let pie = std::fs::read_to_string(charts.pie_chart_path()).unwrap();
        assert!(pie.contains("<circle"));
    }

    #[test]
    fn test_empty_pie_still_written() {
        let temp_dir = TempDir::new().unwrap();
        let mut charts = SvgCharts::new(temp_dir.path().to_path_buf(), "$".to_string());

        charts.render_pie_chart(&[]).unwrap();

        let pie = std::fs::read_to_string(charts.pie_chart_path()).unwrap();
        assert!(pie.contains("No expenses"));
    }
}
