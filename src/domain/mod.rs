pub mod game_format;
pub mod models;

pub use models::{GameResult, Player};
