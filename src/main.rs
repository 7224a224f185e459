mod entry;
mod logger;
mod shutdown_handlers;

use botsim::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
