use serde::Deserialize;
use serde_json::Value;

/// Point-downloads payload. Fields are kept as the endpoint sent them; only
/// `downloads` is required for a body to count as a download report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DownloadPoint {
    pub downloads: Value,
    #[serde(default)]
    pub package: Option<Value>,
    #[serde(default)]
    pub start: Option<Value>,
    #[serde(default)]
    pub end: Option<Value>,
}

impl DownloadPoint {
    /// The count, when the endpoint sent a non-negative integer.
    pub fn total(&self) -> Option<u64> {
        self.downloads.as_u64()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Downloads(DownloadPoint),
    /// Any JSON the endpoint returned that is not a download count,
    /// e.g. `{"error":"package not found"}`.
    Passthrough(Value),
}

impl Report {
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(value))
    }

    pub fn from_value(value: Value) -> Self {
        if value.get("downloads").is_none() {
            return Report::Passthrough(value);
        }
        match DownloadPoint::deserialize(&value) {
            Ok(point) => Report::Downloads(point),
            Err(_) => Report::Passthrough(value),
        }
    }
}
