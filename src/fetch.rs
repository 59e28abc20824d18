use std::error::Error as _;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info};

use crate::query::{Query, DEFAULT_BASE_URL};
use crate::report::Report;

/// Why a lookup produced no report.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, TLS, timeout or body read failure.
    #[error("{}", chain(.0))]
    Transport(#[from] reqwest::Error),

    /// The body arrived but was not JSON. The raw body is kept for echoing.
    #[error("{source}")]
    Parse {
        source: serde_json::Error,
        body: String,
    },
}

/// Flattens an error and its sources into one line, since reqwest keeps the
/// useful reason (connection refused, dns failure) in the source chain.
fn chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

pub struct Fetcher {
    client: reqwest::Client,
    base_url: String,
}

impl Fetcher {
    /// Without a timeout a stalled connection keeps the request pending indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn url_for(&self, query: &Query) -> String {
        query.url(&self.base_url)
    }

    /// Issues one GET and classifies the complete body. The HTTP status is not
    /// inspected: the endpoint reports unknown packages as JSON with a 404.
    pub async fn fetch(&self, query: &Query) -> Result<Report, FetchError> {
        let start_time = Instant::now();
        let url = self.url_for(query);
        info!(action = "start", component = "fetch", url = %url, "Requesting download count");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(
            action = "received",
            component = "fetch",
            status = status.as_u16(),
            body_len = body.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Response body received"
        );

        let report = Report::from_body(&body).map_err(|source| FetchError::Parse { source, body })?;

        info!(
            action = "complete",
            component = "fetch",
            structured = matches!(report, Report::Downloads(_)),
            duration_ms = start_time.elapsed().as_millis(),
            "Response classified"
        );
        Ok(report)
    }
}
