//! Terminal presentation and menu helpers. Nothing here mutates game state.

use std::io::{self, BufRead, Write};

use crate::common::GameResult;
use crate::game::{Game, GameMode};

pub fn print_banner(mode: GameMode) {
    println!("\n{}", "=".repeat(50));
    println!("  Starting Connect 4 - Mode: {}", mode);
    println!("{}\n", "=".repeat(50));
}

pub fn print_board(game: &Game) {
    println!();
    print!("{}", game.board().render());
    println!();
}

/// Announce the final result of a finished game.
pub fn announce_result(game: &Game) {
    match game.result() {
        GameResult::Win(token) if token.is_ai() => println!("AI {} wins!", token),
        GameResult::Win(token) => println!("Player {} wins!", token),
        GameResult::Draw => println!("It's a draw!"),
        GameResult::InProgress => {}
    }
    println!("\nThanks for playing!");
}

/// Interactive mode menu, shown when no mode was given on the command line.
pub fn prompt_mode() -> anyhow::Result<GameMode> {
    println!("\n{}", "=".repeat(50));
    println!("  Welcome to Connect 4!");
    println!("{}", "=".repeat(50));
    println!("\nChoose game mode:");
    println!("  1. PvP - Player vs Player");
    println!("  2. AvA - AI vs AI");
    println!("  3. PvA - Player vs AI");
    println!();

    let stdin = io::stdin();
    loop {
        print!("Enter your choice (1-3): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("input stream closed");
        }
        match line.trim() {
            "1" => return Ok(GameMode::Pvp),
            "2" => return Ok(GameMode::Ava),
            "3" => return Ok(GameMode::Pva),
            _ => println!("Invalid choice. Please enter 1, 2, or 3."),
        }
    }
}
