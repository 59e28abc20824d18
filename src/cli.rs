use std::io::{self, Write};

use tracing::warn;

use crate::fetch::Fetcher;
use crate::query::Query;
use crate::render::{render_error, render_intro, render_report};

/// Looks up one query and writes whichever outcome it produced. Request and
/// parse failures are rendered here, never returned.
pub async fn run_query<O: Write, E: Write>(
    fetcher: &Fetcher,
    query: &Query,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    render_intro(out, query, &fetcher.url_for(query))?;

    match fetcher.fetch(query).await {
        Ok(report) => render_report(out, &report),
        Err(error) => {
            warn!(action = "failed", component = "fetch", error = %error, "Lookup failed");
            render_error(out, err, &error)
        }
    }
}
