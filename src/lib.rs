pub mod random_requests;
pub mod session;
pub mod terminal;

pub use board::{Board, ConfigError, PlacementError, RenderTarget, RuleConfig};
pub use session::{GameSession, InputError, MoveRequest, Outcome, SessionError};
pub use types::{Cell, MoveResult, PieceKind, Side};
