use clap::Parser;
use std::io::{self, Write};

use crate::query::Query;

pub const EXAMPLE_ARGS: &str = "mcp-server-kubernetes 2025-11-27 2025-12-03";

#[derive(Parser, Debug)]
#[command(
    name = "npm-downloads",
    about = "Fetch the total npm download count for a package over a date range",
    version,
    long_about = None
)]
pub struct Args {
    /// Package name as published on npm
    pub package: Option<String>,

    /// First day of the period (YYYY-MM-DD)
    pub start: Option<String>,

    /// Last day of the period (YYYY-MM-DD)
    pub end: Option<String>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Reject malformed or out-of-order dates before sending the request
    #[arg(long)]
    pub strict: bool,

    /// Abort the request after this many seconds (no limit by default)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl Args {
    /// The query, if all three positionals were supplied.
    pub fn query(&self) -> Option<Query> {
        match (&self.package, &self.start, &self.end) {
            (Some(package), Some(start), Some(end)) => {
                Some(Query::new(package.clone(), start.clone(), end.clone()))
            }
            _ => None,
        }
    }
}

pub fn print_usage<W: Write>(out: &mut W, program: &str) -> io::Result<()> {
    writeln!(out, "Usage: {program} <package-name> <start-date> <end-date>")?;
    writeln!(out, "Date format: YYYY-MM-DD")?;
    writeln!(out)?;
    writeln!(out, "Example:")?;
    writeln!(out, "  {program} {EXAMPLE_ARGS}")
}
