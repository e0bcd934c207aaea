use colored::Colorize;

use crate::domain::Player;

const HEADERS: [&str; 5] = ["name", "n_played", "n_won", "n_lost", "rating"];

/// Print the standings for a table, best rating first.
///
/// Ratings are shown to two decimals; stored values stay exact.
pub fn print_standings(players: &[Player]) {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    let name_width = name_column_width(&sorted);

    print_header(name_width);
    for player in sorted {
        print_row(player, name_width);
    }
}

fn name_column_width(players: &[&Player]) -> usize {
    players
        .iter()
        .map(|p| p.name.len())
        .chain(std::iter::once(HEADERS[0].len()))
        .max()
        .unwrap_or(HEADERS[0].len())
}

fn print_header(name_width: usize) {
    let line = format!(
        "{:>name_width$}  {:>8}  {:>5}  {:>6}  {:>8}",
        HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3], HEADERS[4],
    );
    println!("{}", line.bold());
}

fn print_row(player: &Player, name_width: usize) {
    println!(
        "{:>name_width$}  {:>8}  {:>5}  {:>6}  {:>8.2}",
        player.name, player.n_played, player.n_won, player.n_lost, player.rating,
    );
}
