pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod rating;
pub mod render;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::cli::{Cli, Command};
use crate::config::EloSettings;
use crate::database::Table;
use crate::domain::GameResult;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_create(name: &str, dir: Option<&Path>) -> Result<()> {
    let dir = resolve_dir(dir)?;
    Table::create(&dir, name)?;
    println!("New table created called {name}");
    Ok(())
}

pub fn handle_show(name: &str, dir: Option<&Path>) -> Result<()> {
    let dir = resolve_dir(dir)?;
    let table = Table::open(&dir, name)?;
    render::print_standings(table.players());
    Ok(())
}

pub fn handle_log(name: &str, game: &str, settings: &EloSettings, dir: Option<&Path>) -> Result<()> {
    let dir = resolve_dir(dir)?;
    let mut table = Table::open(&dir, name)?;
    let game = GameResult::parse(game)?;
    rating::apply_result(&mut table, &game, settings)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}

fn resolve_dir(dir: Option<&Path>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir().map_err(Into::into),
    }
}
