//! Closed-form Elo update math.

/// Expected score for a player rated `ra` against one rated `rb`.
///
/// Logistic in the rating difference with a base-10 exponent; always in
/// (0, 1), and the two players' expected scores sum to 1.
pub fn expected_score(ra: f64, rb: f64, scale: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rb - ra) / scale))
}

/// New ratings for the winner and loser of one game.
///
/// The winner's actual score is 1, the loser's 0. Results are neither
/// clamped nor rounded; a rating may go negative or grow without bound.
pub fn rate_game(ra: f64, rb: f64, scale: f64, k_factor: f64) -> (f64, f64) {
    let ea = expected_score(ra, rb, scale);
    let eb = expected_score(rb, ra, scale);

    let new_ra = ra + k_factor * (1.0 - ea);
    let new_rb = rb + k_factor * (0.0 - eb);

    (new_ra, new_rb)
}
