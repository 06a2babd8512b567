//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the simulation of the falling-block game: the grid,
//! the pieces, the collision rule, locking, line clearing with score and level
//! progression, and the gravity clock. It has **no dependencies** on terminals,
//! input devices or wall-clock time:
//!
//! - **Deterministic**: a seeded [`RandomSource`] or a [`ScriptedSource`]
//!   reproduces the same game
//! - **Testable**: every rule is a plain function or method call
//! - **Portable**: the shell only feeds elapsed milliseconds and actions
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of colored cells, locking and line clearing
//! - [`collision`]: the single placement rule used by every movement
//! - [`shapes`]: the seven shape templates and clockwise rotation
//! - [`piece`]: the active falling piece
//! - [`scoring`]: line-clear rewards, level and fall interval
//! - [`rng`]: shape selection for new pieces
//! - [`session`]: the game loop state machine
//! - [`snapshot`]: read-only render view
//!
//! # Example
//!
//! ```
//! use blockfall_core::{ScriptedSource, Session, TickOutcome};
//! use blockfall_core::types::{GameAction, PieceKind, Rules};
//!
//! let mut session = Session::new(Rules::default(), ScriptedSource::new([PieceKind::O]));
//!
//! assert!(session.apply_action(GameAction::MoveLeft));
//! assert_eq!(session.tick(500), TickOutcome::Fell);
//! assert_eq!(session.active().unwrap().y, 1);
//! ```
//!
//! # Timing
//!
//! Call [`Session::tick`] every frame with the milliseconds elapsed since the
//! previous call. The piece descends one row each time the accumulated time
//! reaches the fall interval (500ms at level 1, 50ms faster per level, never
//! below 100ms).

pub mod board;
pub mod collision;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use piece::Piece;
pub use rng::{RandomSource, ScriptedSource, ShapeSource};
pub use scoring::{Progress, ScoreResult};
pub use session::{Phase, Session, TickOutcome};
pub use shapes::ShapeMatrix;
pub use snapshot::GameSnapshot;
