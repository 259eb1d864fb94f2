//! # league-core
//!
//! Core library for the poker league tracker.
//!
//! This crate provides:
//! - The league snapshot and its JSON record format
//! - A flat-file player store with atomic win recording
//! - The blind level schedule and timer abstraction
//! - A single interactive game round
//! - Score query responses for front ends

pub mod blinds;
pub mod error;
pub mod game;
pub mod league;
pub mod query;
pub mod store;

pub use blinds::{BLIND_INTERVAL, BLIND_SCHEDULE, BlindAlerter, BlindLevel, schedule_blind_alerts};
pub use error::{Error, Result};
pub use game::{Game, PLAYER_PROMPT, extract_winner};
pub use league::{League, Player};
pub use query::ScoreResponse;
pub use store::{Database, FileSystemPlayerStore, PlayerStore};
