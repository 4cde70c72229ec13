//! A depth-limited game tree agent for the board game 'Connect 4'
//!
//! The agent looks a fixed number of plies ahead with minimax search and
//! alpha-beta pruning, scoring the positions at the search horizon with a
//! run-length heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{arrayboard::ArrayBoard, board::Player, engine::Engine};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one has three in a row along the bottom and is to move
//! let board = ArrayBoard::from_str("15263")?;
//! let mut engine = Engine::new(Player::One);
//!
//! assert_eq!(engine.choose_move(&board), Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod config;

pub mod evaluation;

pub mod engine;

pub mod arrayboard;


/// The default width of the game board in tiles
pub const WIDTH: usize = 7;

/// The default height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The default number of aligned tiles needed to win
pub const CONNECT: usize = 4;

/// The default number of plies searched before a position is scored statically
pub const DEPTH_LIMIT: usize = 5;

// the default game must be winnable in every direction
const_assert!(CONNECT <= WIDTH && CONNECT <= HEIGHT);
// move strings address columns with a single digit
const_assert!(WIDTH <= 9);
