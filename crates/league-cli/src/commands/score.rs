//! Score lookup for a single player.

use std::path::Path;

use anyhow::Result;
use league_core::ScoreResponse;

/// Print a player's score. Returns `false` when the player was not found.
pub fn run(database: &Path, name: &str) -> Result<bool> {
    let store = super::open_store(database)?;
    let response = ScoreResponse::lookup(&store, name);

    match response {
        ScoreResponse::Found(_) => println!("{}", response.body()),
        ScoreResponse::NotFound => eprintln!("No wins recorded for {}", name),
    }

    Ok(response.is_found())
}
