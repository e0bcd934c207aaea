use crate::errors::TableError;

use super::models::GameResult;

const SEPARATOR: char = '-';

impl GameResult {
    /// Parse a raw game string of the form `winner-loser`.
    ///
    /// Exactly one separator, two non-empty names, and the names must differ.
    pub fn parse(raw: &str) -> Result<Self, TableError> {
        let parts: Vec<&str> = raw.split(SEPARATOR).collect();

        match parts.as_slice() {
            [winner, loser] if is_valid_pair(winner, loser) => Ok(Self {
                winner: winner.to_string(),
                loser: loser.to_string(),
            }),
            _ => Err(TableError::MalformedGameResult(raw.to_string())),
        }
    }
}

fn is_valid_pair(winner: &str, loser: &str) -> bool {
    !winner.is_empty() && !loser.is_empty() && winner != loser
}
