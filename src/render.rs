use std::io::{self, Write};

use serde_json::Value;

use crate::fetch::FetchError;
use crate::query::Query;
use crate::report::Report;
use crate::utils::format_number;

pub fn render_intro<W: Write>(out: &mut W, query: &Query, url: &str) -> io::Result<()> {
    writeln!(
        out,
        "Fetching downloads for {} from {} to {}...",
        query.package, query.start, query.end
    )?;
    writeln!(out, "URL: {url}")?;
    writeln!(out)
}

pub fn render_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    match report {
        Report::Downloads(point) => {
            let total = match point.total() {
                Some(count) => format_number(count),
                None => field_text(Some(&point.downloads)),
            };
            writeln!(out, "✓ Success!")?;
            writeln!(out, "Package: {}", field_text(point.package.as_ref()))?;
            writeln!(
                out,
                "Period: {} to {}",
                field_text(point.start.as_ref()),
                field_text(point.end.as_ref())
            )?;
            writeln!(out, "Total Downloads: {total}")
        }
        Report::Passthrough(value) => writeln!(out, "Response: {value}"),
    }
}

/// Strings print bare, other JSON compact, absent members as `unknown`.
fn field_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => "unknown".to_string(),
    }
}

/// Error lines go to `err`; the raw body of an unparseable response goes to `out`.
pub fn render_error<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    error: &FetchError,
) -> io::Result<()> {
    match error {
        FetchError::Parse { source, body } => {
            writeln!(err, "Error parsing response: {source}")?;
            writeln!(out, "Raw response: {body}")
        }
        FetchError::Transport(_) => writeln!(err, "Error fetching data: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DownloadPoint;
    use serde_json::json;

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn intro_names_query_and_url() {
        let query = Query::new("left-pad", "2025-01-01", "2025-01-07");
        let mut out = Vec::new();
        render_intro(&mut out, &query, &query.url("https://api.npmjs.org")).unwrap();
        assert_eq!(
            text(out),
            "Fetching downloads for left-pad from 2025-01-01 to 2025-01-07...\n\
             URL: https://api.npmjs.org/downloads/point/2025-01-01:2025-01-07/left-pad\n\n"
        );
    }

    #[test]
    fn success_report_groups_thousands() {
        let report = Report::Downloads(DownloadPoint {
            downloads: json!(1_234_567),
            package: Some(json!("left-pad")),
            start: Some(json!("2025-01-01")),
            end: Some(json!("2025-01-07")),
        });
        let mut out = Vec::new();
        render_report(&mut out, &report).unwrap();
        assert_eq!(
            text(out),
            "✓ Success!\nPackage: left-pad\nPeriod: 2025-01-01 to 2025-01-07\nTotal Downloads: 1,234,567\n"
        );
    }

    #[test]
    fn bare_downloads_member_prints_success() {
        let report = Report::from_body(r#"{"downloads":5}"#).unwrap();
        let mut out = Vec::new();
        render_report(&mut out, &report).unwrap();
        assert_eq!(
            text(out),
            "✓ Success!\nPackage: unknown\nPeriod: unknown to unknown\nTotal Downloads: 5\n"
        );
    }

    #[test]
    fn non_integer_downloads_prints_raw_value() {
        let report = Report::from_body(
            r#"{"downloads":12.5,"package":"left-pad","start":"2025-01-01","end":"2025-01-07"}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        render_report(&mut out, &report).unwrap();
        let printed = text(out);
        assert!(printed.starts_with("✓ Success!\nPackage: left-pad\n"));
        assert!(printed.ends_with("Total Downloads: 12.5\n"));
    }

    #[test]
    fn passthrough_prints_json_without_success_marker() {
        let report = Report::Passthrough(json!({"error": "package not found"}));
        let mut out = Vec::new();
        render_report(&mut out, &report).unwrap();
        let printed = text(out);
        assert_eq!(printed, "Response: {\"error\":\"package not found\"}\n");
        assert!(!printed.contains("Success"));
    }

    #[test]
    fn parse_error_splits_message_and_raw_body() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = FetchError::Parse {
            source,
            body: "not json".into(),
        };
        let (mut out, mut err) = (Vec::new(), Vec::new());
        render_error(&mut out, &mut err, &error).unwrap();

        let err = text(err);
        assert!(err.starts_with("Error parsing response: expected"));
        assert_eq!(text(out), "Raw response: not json\n");
    }
}
