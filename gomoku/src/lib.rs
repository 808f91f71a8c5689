mod board;
mod direction;
mod error;
mod game;
mod game_result;
mod player;
mod pos;
pub mod score;
pub mod tactics;
mod wins;

pub use board::{Board, FIVE};
pub use direction::Direction;
pub use error::*;
pub use game::Game;
pub use game_result::GameResult;
pub use player::Player;
pub use pos::Pos;
pub use tactics::Shortcut;
pub use wins::Run;
