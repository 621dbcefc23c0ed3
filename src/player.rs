use crate::game::Game;
use rand::rngs::SmallRng;

/// Interface implemented by the different move sources.
pub trait Player {
    /// Choose a column for the current turn. Implementations should only
    /// return indices they believe legal, but the board revalidates every
    /// move and the caller re-solicits on failure.
    fn choose_column(&mut self, rng: &mut SmallRng, game: &Game) -> anyhow::Result<usize>;
}
