mod board;
pub mod config;
mod fen;
mod legality;
pub mod render;

pub use board::{Board, OffBoard};
pub use config::{ConfigError, RuleConfig};
pub use fen::{PlacementError, STARTING_PLACEMENT};
pub use render::RenderTarget;
