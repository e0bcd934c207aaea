use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Player;
use crate::errors::TableError;

use super::paths::table_path;

/// One open player table, keyed by player name.
///
/// Records are held in memory while the table is open; every persisting
/// operation rewrites the backing file as a whole (temp file, then atomic
/// rename). Single-writer, single-process.
#[derive(Debug)]
pub struct Table {
    path: PathBuf,
    players: Vec<Player>,
}

impl Table {
    /// Create an empty table named `name` under `dir`.
    ///
    /// A backing file with zero records counts as not yet created, so
    /// creating over one succeeds.
    pub fn create(dir: &Path, name: &str) -> Result<Self> {
        let path = table_path(dir, name);
        if path.exists() && !read_players(&path)?.is_empty() {
            return Err(TableError::TableAlreadyExists(name.to_string()).into());
        }

        let table = Self {
            path,
            players: Vec::new(),
        };
        table.flush()?;

        info!("Created table {} at {}", name, table.path.display());
        Ok(table)
    }

    /// Open an existing table named `name` under `dir`.
    pub fn open(dir: &Path, name: &str) -> Result<Self> {
        let path = table_path(dir, name);
        if !path.exists() {
            return Err(TableError::TableNotFound(name.to_string()).into());
        }

        let players = read_players(&path)?;
        info!("Loaded {} players from {}", players.len(), path.display());

        Ok(Self { path, players })
    }

    /// Look up a player, creating the record at `initial_rating` on first
    /// appearance. Never touches an existing record.
    pub fn ensure(&mut self, name: &str, initial_rating: f64) -> Result<&Player> {
        if self.find(name).is_none() {
            self.players.push(Player::new(name, initial_rating));
            self.flush()?;
            info!("Added new player {} with rating {}", name, initial_rating);
        }
        self.get(name)
    }

    /// Current record for a name already present in the table.
    pub fn get(&self, name: &str) -> Result<&Player> {
        self.find(name)
            .ok_or_else(|| anyhow::anyhow!("player {} is not in the table", name))
    }

    /// Replace the named player's record and persist the table.
    pub fn save(&mut self, player: Player) -> Result<()> {
        let slot = self
            .players
            .iter_mut()
            .find(|p| p.name == player.name)
            .ok_or_else(|| anyhow::anyhow!("player {} is not in the table", player.name))?;
        *slot = player;
        self.flush()
    }

    /// All records in storage order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    fn find(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.players)
            .context("Failed to serialize player table")?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write table file {}", temp_path.display()))?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to swap in table file {}", self.path.display()))?;

        Ok(())
    }
}

fn read_players(path: &Path) -> Result<Vec<Player>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read table file {}", path.display()))?;

    serde_json::from_str(&json)
        .map_err(|_| TableError::CorruptTable(path.display().to_string()).into())
}
