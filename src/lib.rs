//! Rules engine and turn state machine for two-player checkers on an 8x8 board.
//!
//! - [`core`]: coordinates, pieces and the dark-square board.
//! - [`rules`]: move generation with forced captures, the mandatory-capture set and the
//!   material-count winner.
//! - [`game`]: one match and its single entry point, [`Match::handle_cell_activation`].
//! - [`events`] / [`view`]: what a transition reports and what clients may see.
//! - [`record`]: versioned JSON records for storage.
//! - [`registry`]: many matches behind per-match locks.
//!
//! ```
//! use checkers_core::{Coord, Match, Phase, Side};
//!
//! let mut m = Match::new();
//! let act = m.handle_cell_activation(Coord::new(2, 6), Side::White).unwrap();
//! assert!(act.changed());
//! assert_eq!(m.phase(), Phase::Selected);
//! assert_eq!(m.destinations(), vec![Coord::new(1, 5), Coord::new(3, 5)]);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod events;
pub mod game;
pub mod record;
pub mod registry;
pub mod rules;
pub mod view;

pub use self::config::RegistryConfig;
pub use self::core::board::{Board, Change, ChangeSet};
pub use self::core::coord::Coord;
pub use self::core::piece::{Piece, Rank, Side};
pub use self::error::{BoardError, EngineError};
pub use self::events::{Activation, MatchEvent};
pub use self::game::{Match, Phase};
pub use self::registry::{MatchId, MatchRegistry};
pub use self::rules::Move;
pub use self::view::PublicView;
