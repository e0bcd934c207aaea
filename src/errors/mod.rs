use thiserror::Error;

/// Domain errors surfaced to the user as distinguishable messages.
///
/// Store I/O failures are not part of this taxonomy; they propagate as
/// `anyhow` errors with file-level context attached.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("table called {0} not found")]
    TableNotFound(String),

    #[error("table with name {0} already exists, either choose a new name or delete current table")]
    TableAlreadyExists(String),

    #[error("game result {0:?} has an incorrect format, it must be in the form winner-loser")]
    MalformedGameResult(String),

    #[error("table file {0} does not hold a valid player table")]
    CorruptTable(String),
}
