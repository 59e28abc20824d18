use std::io;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::{info, warn};

use npm_downloads::args::print_usage;
use npm_downloads::render::render_error;
use npm_downloads::utils::setup_logging;
use npm_downloads::{run_query, Args, Fetcher};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let Some(query) = args.query() else {
        let program = Args::command().get_name().to_string();
        print_usage(&mut io::stdout(), &program)?;
        return Ok(ExitCode::from(1));
    };

    if args.strict {
        if let Err(e) = query.validate() {
            warn!(action = "validate", component = "query", error = %format!("{e:#}"), "Rejected query");
            eprintln!("Error: {e}");
            return Ok(ExitCode::from(1));
        }
    }

    info!(
        action = "start",
        component = "main",
        package = %query.package,
        period = %query.period(),
        "Looking up downloads"
    );

    let (mut out, mut err) = (io::stdout(), io::stderr());
    match Fetcher::new(args.timeout.map(Duration::from_secs)) {
        Ok(fetcher) => run_query(&fetcher, &query, &mut out, &mut err).await?,
        Err(e) => render_error(&mut out, &mut err, &e)?,
    }

    Ok(ExitCode::SUCCESS)
}
