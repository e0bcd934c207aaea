pub mod elo;
pub mod engine;

pub use elo::{expected_score, rate_game};
pub use engine::apply_result;
