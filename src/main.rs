mod app;
mod args;
mod charts;
mod config;
mod entry;
mod error;
mod logger;
mod results;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
