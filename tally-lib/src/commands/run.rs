//! Command-line entry point for tally

use super::config::Config;
use super::tracker::{ChartOutcome, RunSummary, Tracker, TrackerSettings};
use crate::source::PageSource;
use crate::{Host, Result};
use camino::Utf8PathBuf;
use chrono::Local;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, ValueEnum};
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

#[derive(Parser, Debug)]
#[command(name = "tally", version, author, long_about = None)]
#[command(about = "Record a daily web counter and chart its history")]
#[command(styles = CLAP_STYLES)]
struct Args {
    /// Path to the observation log
    #[arg(short = 'p', long = "path", default_value = "record.json", value_name = "PATH")]
    log_path: Utf8PathBuf,

    /// Path where the chart image is written
    #[arg(long = "chart", default_value = "chart.png", value_name = "PATH")]
    chart_path: Utf8PathBuf,

    /// Path to configuration file (default is `tally.toml` if it exists)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

/// Parse command-line arguments and perform one recording run
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if argument parsing fails or if any step of the run fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let args = Args::parse_from(args);
    init_logging(args.log_level);

    match record(args).await {
        Ok((settings, summary)) => {
            report(host, &settings, &summary);
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "Run failed: {e:#}");
            Err(e)
        }
    }
}

async fn record(args: Args) -> Result<(TrackerSettings, RunSummary)> {
    let config = Config::load(args.config.as_deref())?;
    let source = PageSource::new(
        config.page_url()?,
        config.selector.as_str(),
        config.element_index,
        &config.user_agent,
        config.request_timeout,
    )?;

    let tracker = Tracker::new(
        source,
        TrackerSettings {
            log_path: args.log_path,
            chart_path: args.chart_path,
            chart: config.chart,
        },
    );

    let summary = tracker.run(Local::now().fixed_offset()).await?;
    Ok((tracker.settings().clone(), summary))
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // a second run in the same process keeps the first logger
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

fn report<H: Host>(host: &mut H, settings: &TrackerSettings, summary: &RunSummary) {
    let _ = writeln!(
        host.output(),
        "Recorded {} ({} observation(s) in '{}')",
        summary.value,
        summary.observations,
        settings.log_path
    );

    let _ = match summary.chart {
        ChartOutcome::Rendered => writeln!(host.output(), "Chart written to '{}'", settings.chart_path),
        ChartOutcome::SkippedTooFew => writeln!(host.output(), "Chart skipped: at least two observations are needed"),
        ChartOutcome::SkippedFlat => writeln!(host.output(), "Chart skipped: the value has not changed"),
    };
}
