use crate::game::Game;
use crate::oracle::{MoveOracle, RandomOracle};
use crate::player::Player;
use anyhow::anyhow;
use rand::rngs::SmallRng;

/// AI player delegating each turn to a [`MoveOracle`].
///
/// The oracle's suggestion is validated against the live board; an illegal
/// or failed suggestion falls back to the first legal column rather than
/// aborting the game.
pub struct OraclePlayer {
    oracle: Box<dyn MoveOracle>,
}

impl OraclePlayer {
    pub fn new(oracle: Box<dyn MoveOracle>) -> Self {
        Self { oracle }
    }

    /// An oracle player backed by the uniform-random default oracle.
    pub fn random() -> Self {
        Self::new(Box::new(RandomOracle::new()))
    }

    fn fallback(game: &Game) -> anyhow::Result<usize> {
        game.board()
            .legal_columns()
            .first()
            .copied()
            .ok_or_else(|| anyhow!("no legal columns left"))
    }
}

impl Player for OraclePlayer {
    fn choose_column(&mut self, rng: &mut SmallRng, game: &Game) -> anyhow::Result<usize> {
        match self.oracle.choose_column(rng, game) {
            Ok(col) if game.board().is_legal(col) => Ok(col),
            Ok(col) => {
                log::warn!("oracle suggested illegal column {}, falling back", col);
                Self::fallback(game)
            }
            Err(e) => {
                log::warn!("oracle failed ({}), falling back", e);
                Self::fallback(game)
            }
        }
    }
}
