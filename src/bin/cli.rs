//! Weekly Visits CLI
//!
//! Command-line companion to the dashboard:
//! - Render the chart for the current endpoint data
//! - Watch a theme marker file and re-render on every change
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use weekly_visits::{
    logging, ChartConfig, ChartSeries, Config, HttpVisitsSource, Panel, PanelHooks,
    PollingThemeWatcher, VisitsSource,
};

#[derive(Parser)]
#[command(name = "weekly-visits")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Weekly visit-count chart from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch once and print the chart
    Chart {
        /// Render with the dark palette
        #[arg(long)]
        dark: bool,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Follow a theme marker file and print the chart on every render
    Watch {
        /// File holding the root element's class attribute
        #[arg(long)]
        marker_file: PathBuf,
        /// Polling interval in milliseconds (default: from config)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval_ms: Option<u64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    logging::init(&config.logging);

    match cli.command {
        Commands::Chart { dark, format } => {
            let source = HttpVisitsSource::new(&config.api)?;
            let response = source
                .fetch()
                .await
                .with_context(|| format!("fetching {}", source.url()))?;
            let series = ChartSeries::try_from(&response)?;

            match format {
                OutputFormat::Table => print_table(&series),
                OutputFormat::Json => print_json(&ChartConfig::line(&series, dark))?,
            }
        }

        Commands::Watch {
            marker_file,
            interval_ms,
        } => {
            let interval = interval_ms.unwrap_or(config.theme.poll_interval_ms);
            let watcher = PollingThemeWatcher::from_file(&marker_file)
                .marker_class(config.theme.marker_class.clone())
                .interval(Duration::from_millis(interval));
            let source = Rc::new(HttpVisitsSource::new(&config.api)?);

            tracing::info!(
                "Watching {:?} for class {:?}, data from {}",
                marker_file,
                config.theme.marker_class,
                source.url()
            );

            let ordering = config.panel.response_ordering;
            tokio::task::LocalSet::new()
                .run_until(async move {
                    let hooks = PanelHooks::new(
                        |fut| drop(tokio::task::spawn_local(fut)),
                        |snapshot| {
                            if let Err(e) = print_json(&snapshot.chart()) {
                                tracing::error!("Failed to print chart: {}", e);
                            }
                        },
                    );
                    let panel = Panel::mount(&watcher, source, hooks, ordering);

                    tokio::signal::ctrl_c().await?;
                    panel.unmount();
                    tracing::info!("Stopped watching");
                    Ok::<_, anyhow::Error>(())
                })
                .await?;
        }

        Commands::Config { output } => {
            let content = weekly_visits::config::generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_json(chart: &ChartConfig) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(chart)?);
    Ok(())
}

fn print_table(series: &ChartSeries) {
    let width = label_column_width(series);

    println!("{:<width$}  {:>8}", "date", "visits", width = width);
    println!("{}", "-".repeat(width + 10));
    for (label, value) in series.points() {
        println!("{:<width$}  {:>8}", label, value, width = width);
    }
}

/// Widest label in characters, since `{:<width$}` pads by char count
fn label_column_width(series: &ChartSeries) -> usize {
    series
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max("date".len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use weekly_visits::VisitSample;

    #[test]
    fn test_unknown_format_rejected() {
        let result = Cli::try_parse_from(["weekly-visits", "chart", "--format", "xml"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["weekly-visits", "chart", "--format", "table"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Chart { format: OutputFormat::Table, .. }
        ));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = Cli::try_parse_from([
            "weekly-visits",
            "watch",
            "--marker-file",
            "/tmp/classes",
            "--interval-ms",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_label_width_counts_chars() {
        let series = ChartSeries::from_visits(&[
            VisitSample::new("Käsetag", 5),
            VisitSample::new("週末週末", 1),
        ])
        .unwrap();

        assert_eq!(label_column_width(&series), 7);
    }
}
