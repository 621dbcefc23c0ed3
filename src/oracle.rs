//! Move oracle boundary.
//!
//! The oracle is the external collaborator that picks a column for an
//! AI-controlled turn. Production deployments wire in an LLM-backed
//! implementation from outside this crate; the implementations here are a
//! uniform-random default and a deterministic stub for tests.

use crate::game::Game;
use anyhow::anyhow;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::collections::VecDeque;

/// External decision-maker supplying a column choice for an AI turn.
///
/// The returned index is a suggestion: callers validate it against the live
/// board and treat an illegal or failed suggestion as retryable.
pub trait MoveOracle {
    fn choose_column(&mut self, rng: &mut SmallRng, game: &Game) -> anyhow::Result<usize>;
}

/// Uniform choice over the currently legal columns.
pub struct RandomOracle;

impl RandomOracle {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveOracle for RandomOracle {
    fn choose_column(&mut self, rng: &mut SmallRng, game: &Game) -> anyhow::Result<usize> {
        let legal = game.board().legal_columns();
        legal
            .choose(rng)
            .copied()
            .ok_or_else(|| anyhow!("no legal columns left"))
    }
}

/// Plays a fixed sequence of columns, then fails. Deterministic stand-in for
/// the external oracle.
pub struct ScriptedOracle {
    moves: VecDeque<usize>,
}

impl ScriptedOracle {
    pub fn new<I: IntoIterator<Item = usize>>(moves: I) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }
}

impl MoveOracle for ScriptedOracle {
    fn choose_column(&mut self, _rng: &mut SmallRng, _game: &Game) -> anyhow::Result<usize> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow!("scripted oracle ran out of moves"))
    }
}
