//! Console hangman entry point.

use hangman::{ConsoleHandler, Game};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // The handler owns the locked streams; dropping the game releases and
    // flushes them whatever way the round ended. Round failures are logged
    // inside `run`, never propagated.
    let handler = ConsoleHandler::new(
        io::stdin().lock(),
        io::stdout().lock(),
        StdRng::from_entropy(),
    );
    Game::new(handler).run();
    Ok(())
}
