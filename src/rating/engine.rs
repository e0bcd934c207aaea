use anyhow::Result;
use log::debug;

use crate::config::EloSettings;
use crate::database::Table;
use crate::domain::GameResult;

use super::elo::rate_game;

/// Apply one game outcome to a table.
///
/// The sole mutator of player state: both participants are created at the
/// configured initial rating if new, then the winner's and loser's ratings
/// and counters are updated and persisted in that order.
pub fn apply_result(table: &mut Table, game: &GameResult, settings: &EloSettings) -> Result<()> {
    settings.validate()?;

    table.ensure(&game.winner, settings.initial_rating)?;
    table.ensure(&game.loser, settings.initial_rating)?;

    let mut winner = table.get(&game.winner)?.clone();
    let mut loser = table.get(&game.loser)?.clone();

    let (new_ra, new_rb) = rate_game(
        winner.rating,
        loser.rating,
        settings.scale,
        settings.k_factor,
    );
    debug!(
        "{}: {:.2} -> {:.2}, {}: {:.2} -> {:.2}",
        winner.name, winner.rating, new_ra, loser.name, loser.rating, new_rb
    );

    winner.rating = new_ra;
    winner.n_played += 1;
    winner.n_won += 1;

    loser.rating = new_rb;
    loser.n_played += 1;
    loser.n_lost += 1;

    table.save(winner)?;
    table.save(loser)?;

    Ok(())
}
