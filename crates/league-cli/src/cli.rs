//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "league")]
#[command(about = "Poker league win tracker")]
#[command(version)]
pub struct Cli {
    /// League record file
    #[arg(short, long, global = true, env = "LEAGUE_DB", default_value = "game.db.json")]
    pub database: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play one round: announce blinds, then record "<name> wins"
    Play,
    /// Show a player's win count
    Score {
        /// Player name (case-insensitive)
        name: String,
    },
    /// Show the leaderboard, most wins first
    League,
}
