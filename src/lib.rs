//! showdown: five-card poker hand classifier and winner resolver
//!
//! Goals:
//! - Deterministic classification of five fixed cards into the nine
//!   standard categories, wheel included
//! - Rank-specific tie-breaking across any number of hands, with ties as
//!   a first-class outcome
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate two hands and pick the winner
//! ```
//! use showdown::evaluator::{evaluate, Category};
//! use showdown::resolver::{resolve, Outcome};
//!
//! let a = evaluate(&"2H 3D 5S 9C KD".parse().unwrap());
//! let b = evaluate(&"2C 3H 4S 8C AH".parse().unwrap());
//! assert_eq!(a.category, Category::HighCard);
//! assert_eq!(resolve(&[a, b]).unwrap(), Outcome::Winner(1));
//! ```
//!
//! ## CLI
//! Deal a round from the command line:
//! ```sh
//! cargo run --bin showdown -- --deal 3
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod resolver;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
