mod args;
mod config;
mod entry;
mod error;
mod formats;
mod logger;
mod runner;
mod targets;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
