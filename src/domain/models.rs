use serde::{Deserialize, Serialize};

/// One competitor's record within a table.
///
/// Field order matches the on-disk document layout; a table file is a JSON
/// array of exactly these documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Player {
    pub name: String,
    pub n_played: u32,
    pub n_won: u32,
    pub n_lost: u32,
    pub rating: f64,
}

impl Player {
    /// A fresh record for a name seen for the first time.
    pub fn new(name: &str, initial_rating: f64) -> Self {
        Self {
            name: name.to_string(),
            n_played: 0,
            n_won: 0,
            n_lost: 0,
            rating: initial_rating,
        }
    }
}

/// A single reported game outcome. Consumed once to produce one rating
/// update, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub winner: String,
    pub loser: String,
}
