//! Command-line interface and orchestration for tally
//!
//! This module parses the command line, loads the configuration, and drives one
//! recording run.
//!
//! # Execution Flow
//!
//! The `run` function parses command-line arguments using clap, sets up logging, and
//! builds a [`Tracker`] around a [`PageSource`](crate::source::PageSource). The tracker
//! then walks through a fixed sequence of steps:
//!
//! 1. Load the observation log (empty if the file does not exist yet)
//! 2. Fetch the counter
//! 3. Append the new observation and save the log
//! 4. Render the chart if there are at least two observations and the values vary
//!
//! Every failure is fatal. The two chart skips are not failures; they are logged as
//! warnings and reported in the run summary.
//!
//! Configuration is read from a TOML file; see `default_config.toml` for the settings
//! and their defaults.

mod config;
mod host;
mod run;
mod tracker;

pub use config::{Config, DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_TOML};
pub use host::Host;
pub use run::{LogLevel, run};
pub use tracker::{ChartOutcome, RunSummary, Tracker, TrackerSettings};
