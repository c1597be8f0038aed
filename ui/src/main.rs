use anyhow::{Context, Result};
use clap::Parser;
use coinfolio::app::application_lifecycle::ApplicationLifecycle;
use coinfolio::config;
use coinfolio::logger::setup_logger;
use coinfolio::pages::Page;
use coinfolio::theme::ThemeMode;
use portfolio::datasets;
use portfolio::model::Timeframe;
use std::path::PathBuf;

/// Terminal crypto-portfolio dashboard
#[derive(Parser, Debug)]
#[command(name = "coinfolio", version, about)]
struct Cli {
    /// Configuration file (default: ./config.toml, then the user config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start theme: light or dark
    #[arg(short, long, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Start page: dashboard, portfolio or positions
    #[arg(short, long, value_name = "PAGE")]
    page: Option<Page>,

    /// Log level, overrides [logging].level
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Print the portfolio value chart for TIMEFRAME as JSON and exit
    #[arg(long, value_name = "TIMEFRAME")]
    export_chart: Option<Timeframe>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    config::init_config(cli.config.as_deref());
    let app_config = config::get_config_or_default();

    if let Some(timeframe) = cli.export_chart {
        let chart = datasets::portfolio_value_chart(timeframe, app_config.currency())
            .context("Failed to build the portfolio value chart")?;
        println!("{}", chart.to_json()?);
        return Ok(());
    }

    setup_logger(app_config.logging(), cli.log_level.as_deref())
        .context("Failed to initialize logger")?;

    let mut model = ApplicationLifecycle::initialize(cli.page, cli.theme)?;
    ApplicationLifecycle::setup_terminal(&mut model)?;

    let result = ApplicationLifecycle::run_application_loop(&mut model);
    ApplicationLifecycle::shutdown_application(model)?;
    result
}
