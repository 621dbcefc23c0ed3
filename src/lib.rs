mod board;
mod common;
mod config;
mod game;
mod logging;
mod oracle;
mod player;
mod player_ai;
mod player_cli;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use oracle::*;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
