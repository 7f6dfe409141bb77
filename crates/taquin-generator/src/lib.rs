//! Randomized board generation for the taquin sliding-tile puzzle.
//!
//! This crate builds shuffled [`Board`](taquin_core::Board)s for a game
//! session to play. Generation is seeded: every board comes back with the
//! [`BoardSeed`] that produced it, and feeding the same seed back in
//! reproduces the board exactly, across platforms.
//!
//! The shuffle is a backward Fisher–Yates pass over every slot except the
//! last one, which keeps the empty cell. See [`BoardGenerator`] for the two
//! properties callers rely on (fixed empty slot, no solvability guarantee).
//!
//! # Examples
//!
//! ```
//! use taquin_core::Dimensions;
//! use taquin_generator::{BoardGenerator, BoardSeed};
//!
//! let generator = BoardGenerator::new(Dimensions::new(3, 3)?);
//!
//! // Random board; keep the seed if the board is worth reproducing.
//! let generated = generator.generate();
//! println!("{}\n{}", generated.seed, generated.board);
//!
//! // Deterministic board from a fixed seed.
//! let seed: BoardSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
//!     .parse()
//!     .unwrap();
//! assert_eq!(
//!     generator.generate_with_seed(seed),
//!     generator.generate_with_seed(seed),
//! );
//! # Ok::<(), taquin_core::DimensionsError>(())
//! ```

pub mod generator;
pub mod seed;

pub use self::{
    generator::{BoardGenerator, GeneratedBoard},
    seed::{BoardSeed, ParseBoardSeedError},
};
