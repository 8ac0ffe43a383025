//! One recording run: load, fetch, append, persist, chart.

use crate::Result;
use crate::chart::{ChartOptions, has_variation, render};
use crate::source::CounterSource;
use crate::store::{Observation, ObservationLog};
use camino::Utf8PathBuf;
use chrono::{DateTime, FixedOffset};
use ohno::IntoAppError;
use std::fs;

const LOG_TARGET: &str = "   tracker";

/// Where a run reads and writes its files, and how it draws the chart.
#[derive(Debug, Clone)]
pub struct TrackerSettings {
    pub log_path: Utf8PathBuf,
    pub chart_path: Utf8PathBuf,
    pub chart: ChartOptions,
}

/// What happened to the chart at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartOutcome {
    /// The chart was drawn and written to the chart path
    Rendered,

    /// Fewer than two observations, nothing to draw
    SkippedTooFew,

    /// Every observation has the same value
    SkippedFlat,
}

/// The result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// The value that was fetched and recorded
    pub value: i64,

    /// Number of observations in the log after the run
    pub observations: usize,

    pub chart: ChartOutcome,
}

/// Records one observation per run and keeps the chart up to date.
#[derive(Debug)]
pub struct Tracker<S> {
    source: S,
    settings: TrackerSettings,
}

impl<S: CounterSource> Tracker<S> {
    pub const fn new(source: S, settings: TrackerSettings) -> Self {
        Self { source, settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    /// Perform one run, stamping the new observation with `now`.
    ///
    /// The log is saved before the chart is considered, so a chart failure leaves the
    /// new observation persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be loaded or saved, the counter cannot be
    /// fetched, or the chart cannot be rendered or written
    pub async fn run(&self, now: DateTime<FixedOffset>) -> Result<RunSummary> {
        let log_path = &self.settings.log_path;

        let mut log = ObservationLog::load(log_path).into_app_err_with(|| format!("loading observations from '{log_path}'"))?;

        let value = self.source.fetch().await.into_app_err("fetching the counter")?;

        log.append(Observation::new(now, value));
        log::info!(target: LOG_TARGET, "Recorded {value} at {now}, {} observation(s) in total", log.len());

        log.save(log_path).into_app_err_with(|| format!("saving observations to '{log_path}'"))?;

        let chart = self.update_chart(&log)?;

        Ok(RunSummary {
            value,
            observations: log.len(),
            chart,
        })
    }

    fn update_chart(&self, log: &ObservationLog) -> Result<ChartOutcome> {
        if log.len() <= 1 {
            log::warn!(target: LOG_TARGET, "At least two observations are needed, skipped drawing");
            return Ok(ChartOutcome::SkippedTooFew);
        }

        if !has_variation(log.observations()) {
            log::warn!(target: LOG_TARGET, "Zero y-range delta, skipped drawing");
            return Ok(ChartOutcome::SkippedFlat);
        }

        let chart_path = &self.settings.chart_path;
        let png = render(log.observations(), &self.settings.chart).into_app_err("rendering the chart")?;
        fs::write(chart_path, png).into_app_err_with(|| format!("writing chart to '{chart_path}'"))?;

        log::info!(target: LOG_TARGET, "Chart written to '{chart_path}'");
        Ok(ChartOutcome::Rendered)
    }
}
