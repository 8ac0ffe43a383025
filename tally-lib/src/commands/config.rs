use crate::Result;
use crate::chart::{ChartOptions, MAX_DIMENSION};
use camino::Utf8Path;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File looked up in the working directory when no configuration file is given
pub const DEFAULT_CONFIG_FILE: &str = "tally.toml";

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Page that shows the counter
    #[serde(default = "default_url")]
    pub url: String,

    /// CSS selector for the elements holding the counter
    #[serde(default = "default_selector")]
    pub selector: String,

    /// Zero-based index of the matching element that holds the counter
    #[serde(default = "default_element_index")]
    pub element_index: usize,

    /// User-Agent header sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// How long to wait for the page
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    #[serde(default)]
    pub chart: ChartOptions,
}

fn default_url() -> String {
    crate::source::DEFAULT_PAGE_URL.to_string()
}

fn default_selector() -> String {
    crate::source::DEFAULT_COUNTER_SELECTOR.to_string()
}

const fn default_element_index() -> usize {
    1
}

fn default_user_agent() -> String {
    "tally".to_string()
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(60)
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// An explicit `config_path` must exist. Without one, `tally.toml` in the working
    /// directory is used if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading tally configuration file '{path}'"))?;
            (path, text)
        } else {
            let path = Utf8Path::new(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading tally configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::debug!("Using configuration from '{final_path}'");
        Ok(config)
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this configuration or fails validation
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).into_app_err("parsing configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// The page URL as a parsed [`Url`]
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not an absolute http or https URL
    pub fn page_url(&self) -> Result<Url> {
        let url = Url::parse(&self.url).into_app_err_with(|| format!("parsing url '{}'", self.url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(app_err!("url must use http or https, got '{}'", self.url));
        }

        Ok(url)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any setting is out of range or malformed
    fn validate(&self) -> Result<()> {
        let _ = self.page_url()?;

        if let Err(e) = Selector::parse(&self.selector) {
            return Err(app_err!("selector '{}' is not a valid CSS selector: {e}", self.selector));
        }

        if self.request_timeout.is_zero() {
            return Err(app_err!("request_timeout must be greater than zero"));
        }

        if !(1..=MAX_DIMENSION).contains(&self.chart.width) {
            return Err(app_err!("chart.width must be between 1 and {MAX_DIMENSION}, got {}", self.chart.width));
        }

        if !(1..=MAX_DIMENSION).contains(&self.chart.height) {
            return Err(app_err!("chart.height must be between 1 and {MAX_DIMENSION}, got {}", self.chart.height));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
