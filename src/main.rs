//! Interactive Game of 21 on the terminal.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Game, SessionOptions, Terminal};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    log::debug!("seed {seed}");

    let mut game = Game::new(SessionOptions::default(), seed, Terminal);
    match game.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
