use anyhow::{Context, Result};
use chrono::NaiveDate;

pub const DEFAULT_BASE_URL: &str = "https://api.npmjs.org";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One package and date range to look up. Values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub package: String,
    pub start: String,
    pub end: String,
}

impl Query {
    pub fn new(
        package: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// The `start:end` path segment understood by the downloads endpoint.
    pub fn period(&self) -> String {
        format!("{}:{}", self.start, self.end)
    }

    /// Point-downloads URL under `base`. Segments are not percent-encoded.
    pub fn url(&self, base: &str) -> String {
        format!(
            "{}/downloads/point/{}/{}",
            base.trim_end_matches('/'),
            self.period(),
            self.package
        )
    }

    pub fn validate(&self) -> Result<()> {
        let start = parse_date(&self.start)?;
        let end = parse_date(&self.end)?;
        if end < start {
            anyhow::bail!(
                "End date {} is before start date {}",
                self.end,
                self.start
            );
        }
        Ok(())
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .with_context(|| format!("invalid date '{value}'"))
        .context("Dates must be in YYYY-MM-DD format")
}
