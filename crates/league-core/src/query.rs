//! Mapping from a stored score to a query response.
//!
//! A score of `0` means either "unknown player" or "no wins yet"; both are
//! reported as not found.

use std::fmt;

use crate::store::PlayerStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreResponse {
    Found(u32),
    NotFound,
}

impl ScoreResponse {
    pub fn from_score(score: u32) -> Self {
        match score {
            0 => ScoreResponse::NotFound,
            wins => ScoreResponse::Found(wins),
        }
    }

    /// Look up `name` in `store`
    pub fn lookup(store: &dyn PlayerStore, name: &str) -> Self {
        Self::from_score(store.player_score(name))
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ScoreResponse::Found(_) => 200,
            ScoreResponse::NotFound => 404,
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            ScoreResponse::Found(wins) => *wins,
            ScoreResponse::NotFound => 0,
        }
    }

    /// Response body: the score as text, `0` when not found.
    pub fn body(&self) -> String {
        self.score().to_string()
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ScoreResponse::Found(_))
    }
}

impl fmt::Display for ScoreResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status_code(), self.body())
    }
}
