use connect4::{
    init_logging, ui, CliPlayer, Game, GameError, GameMode, OraclePlayer, Player,
};

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Consecutive illegal oracle moves tolerated before the game is abandoned.
const MAX_ORACLE_RETRIES: usize = 3;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Game mode; omit to choose interactively.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    #[arg(long, help = "Fix RNG seed for reproducible AI games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    /// Player vs player.
    Pvp,
    /// AI vs AI.
    Ava,
    /// Player vs AI.
    Pva,
}

impl From<ModeArg> for GameMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Pvp => GameMode::Pvp,
            ModeArg::Ava => GameMode::Ava,
            ModeArg::Pva => GameMode::Pva,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mode = match cli.mode {
        Some(m) => m.into(),
        None => ui::prompt_mode()?,
    };
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(mode);
    let mut players: Vec<Box<dyn Player>> = game
        .roster()
        .iter()
        .map(|token| -> Box<dyn Player> {
            if token.is_ai() {
                Box::new(OraclePlayer::random())
            } else {
                Box::new(CliPlayer::new())
            }
        })
        .collect();

    ui::print_banner(mode);
    run_game(&mut game, &mut players, &mut rng)?;
    ui::announce_result(&game);
    Ok(())
}

/// Turn loop: render, solicit a column from the current player, apply it.
/// A rejected move re-solicits without advancing the turn; oracle-driven
/// players get a bounded number of retries.
fn run_game(
    game: &mut Game,
    players: &mut [Box<dyn Player>],
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    while !game.is_over() {
        ui::print_board(game);
        let token = game.current_token();
        if token.is_ai() {
            println!("AI {} is thinking...", token);
        }
        let mut attempts = 0;
        loop {
            let col = players[game.current_index()].choose_column(rng, game)?;
            match game.play(col) {
                Ok(_) => {
                    if token.is_ai() {
                        println!("AI {} chooses column {}", token, col);
                    }
                    log::debug!("{} played column {}", token, col);
                    break;
                }
                Err(GameError::Move(e)) => {
                    attempts += 1;
                    println!("Invalid move: {}. Try again.", e);
                    if token.is_ai() && attempts >= MAX_ORACLE_RETRIES {
                        anyhow::bail!(
                            "oracle produced {} illegal moves in a row",
                            attempts
                        );
                    }
                }
                Err(e @ GameError::Finished) => return Err(e.into()),
            }
        }
    }
    ui::print_board(game);
    Ok(())
}
