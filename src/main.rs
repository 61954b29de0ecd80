//! Strictly Rounds - terminal front end
//!
//! Interactive two-player play and scripted replays.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, Write};
use strictly_rounds::{
    Screen, Shell, ShellConfig, ShellEvent, TerminalPresenter, parse_command, replay,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            player_a,
            player_b,
        } => {
            let config = ShellConfig::load(config.as_deref())
                .context("Failed to load config")?
                .with_names(player_a, player_b);
            run_play(config)
        }
        Command::Replay {
            moves,
            player_a,
            player_b,
            json,
        } => run_replay(&moves, &player_a, &player_b, json),
    }
}

/// Run the interactive terminal game
#[instrument(skip(config))]
fn run_play(config: ShellConfig) -> Result<()> {
    info!("Starting interactive game");

    let presenter = TerminalPresenter::new(std::io::stdout(), *config.show_hints());
    let mut shell = Shell::new(presenter);
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if shell.screen() == Screen::Menu {
            let Some(name_a) = prompt(&mut lines, "Player X name", config.player_a())? else {
                break;
            };
            let Some(name_b) = prompt(&mut lines, "Player O name", config.player_b())? else {
                break;
            };
            shell.dispatch(ShellEvent::Start { name_a, name_b });
            continue;
        }

        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match parse_command(&line) {
            Some(strictly_rounds::Command::Quit) => break,
            Some(strictly_rounds::Command::Event(event)) => shell.dispatch(event),
            None => println!("Type a cell number 1-9, r, m or q."),
        }
    }

    info!("Leaving interactive game");
    Ok(())
}

/// Reads one line after showing `label`; an empty answer takes `default`.
///
/// Returns `None` at end of input.
fn prompt(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    label: &str,
    default: &str,
) -> Result<Option<String>> {
    print!("{} [{}]: ", label, default);
    std::io::stdout().flush()?;
    let Some(line) = lines.next().transpose()? else {
        return Ok(None);
    };
    let name = match line.trim() {
        "" => default,
        name => name,
    };
    Ok(Some(name.to_string()))
}

/// Play `moves` in order and print the final board
#[instrument]
fn run_replay(moves: &[usize], player_a: &str, player_b: &str, json: bool) -> Result<()> {
    let report = replay(player_a, player_b, moves).context("Failed to start replay")?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}
