pub mod args;
pub mod cli;
pub mod fetch;
pub mod query;
pub mod render;
pub mod report;
pub mod utils;

pub use args::Args;
pub use cli::run_query;
pub use fetch::{FetchError, Fetcher};
pub use query::Query;
pub use report::{DownloadPoint, Report};
