//! holdem-core: heads-up Texas Hold'em
//!
//! Goals:
//! - Deterministic, auditable rounds for exactly two seats
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: drive a round
//! ```
//! use holdem_core::game::{Action, GameState, TableConfig};
//!
//! let mut game = GameState::new_round_seeded(TableConfig::default(), 7).unwrap();
//! assert_eq!(game.pot(), 30);
//!
//! // The small blind acts first before the flop; matching the big blind
//! // closes the street.
//! let caller = game.players()[game.current()].id().to_string();
//! game.apply_action(&caller, Action::Call).unwrap();
//! assert!(game.is_street_complete());
//!
//! game.advance_street().unwrap();
//! assert_eq!(game.community().len(), 3);
//! ```
//!
//! ## Evaluate a hand
//! ```
//! use holdem_core::cards::Card;
//! use holdem_core::evaluator::{best_five, Category};
//!
//! let seven: Vec<Card> = "Ah Kh Qh Jh Th 2c 3d"
//!     .split_whitespace()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let result = best_five(&seven).unwrap();
//! assert_eq!(result.category, Category::RoyalFlush);
//! ```

pub mod agents;
pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod view;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
