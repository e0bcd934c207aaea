use anyhow::Result;

use elo_table::cli::Command;
use elo_table::config::EloSettings;
use elo_table::{handle_completions, handle_create, handle_log, handle_show, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Create { name, path } => handle_create(name, path.as_deref()),
        Command::Show { table, path } => handle_show(table, path.as_deref()),
        Command::Log {
            table,
            game,
            scale,
            k_factor,
            initial,
            path,
        } => {
            let settings = EloSettings::new(*scale, *k_factor, *initial);
            handle_log(table, game, &settings, path.as_deref())
        }
        Command::Completions { shell } => handle_completions(*shell),
    }
}
