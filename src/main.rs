use std::io;

use anyhow::{Context, Result};
use guess_round::GuessRound;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let round = GuessRound::new(&mut rand::rng());
    let stdin = io::stdin();
    let stdout = io::stdout();
    match round.play(stdin.lock(), stdout.lock()) {
        Ok(_) => Ok(()),
        // already reported to the player, not a failure of the run
        Err(e) if e.is_input_error() => Ok(()),
        Err(e) => Err(e).context("Guessing round failed"),
    }
}
