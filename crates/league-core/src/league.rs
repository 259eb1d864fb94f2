//! League snapshot and its persisted record format.
//!
//! A [`League`] is an ordered list of players as read from the backing
//! record. The record is a JSON array of `{"Name": .., "Wins": ..}` objects:
//!
//! ```text
//! [{"Name":"storm","Wins":10},{"Name":"rogue","Wins":30}]
//! ```
//!
//! Ordering is whatever the record encodes; nothing is re-sorted on read or
//! write. [`League::ranked`] builds a separate leaderboard view.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single player and their win count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Wins")]
    pub wins: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, wins: u32) -> Self {
        Self {
            name: name.into(),
            wins,
        }
    }

    /// Case-insensitive name comparison used for every lookup
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Point-in-time snapshot of all players
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct League {
    players: Vec<Player>,
}

impl League {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Decode a league from a JSON record.
    ///
    /// Fails with [`Error::Decode`](crate::Error::Decode) when the bytes are
    /// not JSON or do not match the `Name`/`Wins` schema. Failures of the
    /// underlying reader surface as [`Error::Io`](crate::Error::Io).
    pub fn parse<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                Error::Io(e.into())
            } else {
                Error::Decode(e)
            }
        })
    }

    /// Encode the league as a JSON record followed by a newline.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(buf)
    }

    pub fn find(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.is_named(name))
    }

    /// Build the next snapshot after `name` wins a round.
    ///
    /// An existing player (matched case-insensitively) keeps their stored
    /// name and gains one win; an unknown name is appended with one win.
    pub fn with_win(mut self, name: &str) -> Self {
        match self.players.iter_mut().find(|p| p.is_named(name)) {
            Some(player) => player.wins = player.wins.saturating_add(1),
            None => self.players.push(Player::new(name, 1)),
        }
        self
    }

    /// Leaderboard view sorted by descending wins. Tie order is unspecified.
    pub fn ranked(&self) -> Self {
        let mut players = self.players.clone();
        players.sort_unstable_by(|a, b| b.wins.cmp(&a.wins));
        players.into_iter().collect()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl FromIterator<Player> for League {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}
