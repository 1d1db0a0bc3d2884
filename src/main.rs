use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use saving_cat::activity::ActivityLogger;
use saving_cat::charts::renderer_for;
use saving_cat::cli::run_session;
use saving_cat::config::{paths::CatPaths, settings::Settings, ChartOutput};
use saving_cat::input::Prompter;

#[derive(Parser)]
#[command(
    name = "saving-cat",
    version,
    about = "Saving Money Cat - track daily spending and keep your cat happy",
    long_about = "Saving Money Cat tracks a month of spending against your income \
                  and saving target. Stay under the daily budget and the cat is \
                  happy; stay under the weekly budget and it unlocks toys; hit \
                  the monthly target and it goes to the spa."
)]
struct Cli {
    /// Where the monthly summary charts go
    #[arg(long, value_enum)]
    charts: Option<ChartOutput>,

    /// Directory for SVG charts
    #[arg(long, env = "SAVING_CAT_CHART_DIR")]
    chart_dir: Option<PathBuf>,

    /// Append tracker operations to the activity log
    #[arg(long)]
    activity_log: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive tracker (default)
    Run,

    /// Show current configuration and paths
    Config,

    /// Write a settings file with the current values
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CatPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config) => show_config(&paths, &settings)?,
        Some(Commands::Init) => init_settings(&paths, &settings)?,
        Some(Commands::Run) | None => {
            let chart_output = cli.charts.unwrap_or(settings.chart_output);
            let chart_dir = cli.chart_dir.unwrap_or_else(|| paths.chart_dir());
            let charts = renderer_for(chart_output, &settings.currency_symbol, chart_dir);

            let activity = (cli.activity_log || settings.activity_log)
                .then(|| ActivityLogger::new(paths.activity_log()));

            let prompter = Prompter::new(io::stdin().lock(), io::stdout());
            run_session(prompter, settings, charts, activity)?;
        }
    }

    Ok(())
}

fn init_settings(paths: &CatPaths, settings: &Settings) -> Result<()> {
    let file = paths.settings_file();
    if file.exists() {
        println!("Settings already exist at: {}", file.display());
        return Ok(());
    }

    settings.save(paths)?;
    println!("Wrote settings to: {}", file.display());
    Ok(())
}

fn show_config(paths: &CatPaths, settings: &Settings) -> Result<()> {
    println!("Saving Money Cat Configuration");
    println!("==============================");
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Activity log:   {}", paths.activity_log().display());
    println!("Chart dir:      {}", paths.chart_dir().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Default days:    {}", settings.default_days);
    println!("  Categories:      {}", settings.categories.join(", "));
    println!("  Chart output:    {:?}", settings.chart_output);
    println!("  Activity log:    {}", settings.activity_log);

    let logged = ActivityLogger::new(paths.activity_log()).read_recent(5)?;
    if !logged.is_empty() {
        println!();
        println!("Recent activity:");
        for entry in logged {
            println!("  {}", entry.format_human_readable());
        }
    }

    Ok(())
}
