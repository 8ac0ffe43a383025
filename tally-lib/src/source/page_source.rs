use super::{CounterSource, FetchError};
use core::time::Duration;
use ohno::IntoAppError;
use reqwest::StatusCode;
use scraper::{Html, Selector};
use url::Url;

const LOG_TARGET: &str = "    source";

/// The forum index page that shows yesterday's post count.
pub const DEFAULT_PAGE_URL: &str = "http://www.keyfc.net/bbs/index.aspx";

/// Where the post count sits in the forum index markup.
pub const DEFAULT_COUNTER_SELECTOR: &str = "#wrap > div > div.announcement.s_clear > span > em";

/// Reads the counter out of an HTML page.
#[derive(Debug, Clone)]
pub struct PageSource {
    client: reqwest::Client,
    url: Url,
    selector: String,
    element_index: usize,
}

impl PageSource {
    /// Create a source reading the element at `element_index` among those matching `selector` on the page at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new(url: Url, selector: impl Into<String>, element_index: usize, user_agent: &str, timeout: Duration) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .into_app_err("creating the HTTP client")?;

        Ok(Self {
            client,
            url,
            selector: selector.into(),
            element_index,
        })
    }
}

impl CounterSource for PageSource {
    async fn fetch(&self) -> Result<i64, FetchError> {
        log::info!(target: LOG_TARGET, "Querying '{}' for the counter", self.url);

        let transport = |source| FetchError::Transport {
            url: self.url.to_string(),
            source,
        };

        let response = self.client.get(self.url.clone()).send().await.map_err(transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: self.url.to_string(),
                code: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        log::debug!(target: LOG_TARGET, "Page length: {} bytes", body.len());

        let value = parse_counter(&body, &self.selector, self.element_index)?;
        log::info!(target: LOG_TARGET, "Counter reads {value}");
        Ok(value)
    }
}

/// Extract the counter from `html`.
///
/// Selects the elements matching `selector`, takes the one at `element_index`, and parses
/// the text of its first child node as an integer. Whitespace around the number is ignored.
pub fn parse_counter(html: &str, selector: &str, element_index: usize) -> Result<i64, FetchError> {
    let parsed_selector = Selector::parse(selector).map_err(|e| FetchError::parse(format!("invalid selector '{selector}': {e}")))?;

    let document = Html::parse_document(html);
    let matches: Vec<_> = document.select(&parsed_selector).collect();
    if matches.is_empty() {
        return Err(FetchError::parse(format!("nothing on the page matches '{selector}'")));
    }

    let element = matches.get(element_index).ok_or_else(|| {
        FetchError::parse(format!(
            "'{selector}' matched {} element(s) but element #{element_index} was requested",
            matches.len()
        ))
    })?;

    let text = element
        .first_child()
        .and_then(|node| node.value().as_text())
        .ok_or_else(|| FetchError::parse(format!("element #{element_index} matching '{selector}' does not start with text")))?;

    let text = text.trim();
    text.parse::<i64>()
        .map_err(|e| FetchError::parse(format!("'{text}' is not an integer: {e}")))
}
