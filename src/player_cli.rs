use std::io::{self, BufRead, Write};

use crate::config::COLS;
use crate::game::Game;
use crate::player::Player;
use rand::rngs::SmallRng;

/// Human player reading 0-based column indices from stdin.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn choose_column(&mut self, _rng: &mut SmallRng, game: &Game) -> anyhow::Result<usize> {
        let stdin = io::stdin();
        loop {
            print!(
                "Player {}, enter column (0-{}): ",
                game.current_token(),
                COLS - 1
            );
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                anyhow::bail!("input stream closed");
            }
            match line.trim().parse::<usize>() {
                Ok(col) if col < COLS => return Ok(col),
                _ => println!("Please enter a number between 0 and {}.", COLS - 1),
            }
        }
    }
}
