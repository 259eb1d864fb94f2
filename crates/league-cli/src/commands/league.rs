//! Leaderboard display.

use std::path::Path;

use anyhow::Result;
use league_core::{League, PlayerStore};
use owo_colors::OwoColorize;

pub fn run(database: &Path) -> Result<()> {
    let store = super::open_store(database)?;
    let league = store.league().ranked();

    if league.is_empty() {
        println!("No games recorded yet");
        return Ok(());
    }

    print!("{}", format_leaderboard(&league));
    Ok(())
}

fn format_leaderboard(league: &League) -> String {
    let width = league
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);

    league
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{:>3}. {:<width$}  {}\n",
                i + 1,
                p.name,
                p.wins.bold(),
                width = width
            )
        })
        .collect()
}
