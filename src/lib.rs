//! # kmap-rs: Karnaugh-map minimization in Rust
//!
//! **`kmap-rs`** minimizes Boolean functions of 2, 3 or 4 variables, given as lists of
//! minterms, into sum-of-products expressions by grouping cells on a Karnaugh map.
//!
//! ## How it works
//!
//! 1. Minterms are laid out on a 2×2, 2×4 or 4×4 grid in Gray-code order, so that cells
//!    sharing an edge (including across the wrapped borders) differ in exactly one variable.
//! 2. A greedy, largest-first search collects rectangular groups of 8, 4, 2 and 1 cells
//!    from fixed template tables, skipping groups that are already covered.
//! 3. Each group becomes a product term: variables constant across the group are kept,
//!    the rest are dropped.
//!
//! The result is an irredundant cover. It is not guaranteed to be a minimum cover: use a
//! Quine-McCluskey style solver when exact minimality matters.
//!
//! ## Basic Usage
//!
//! ```rust
//! use kmap_rs::kmap::KMap;
//!
//! // f(A, B, C) = Σm(1, 3, 4, 5)
//! let kmap = KMap::new(&[1, 3, 4, 5], &["A", "B", "C"]).unwrap();
//! let expr = kmap.minimize();
//! assert_eq!(expr.minterms(3), vec![1, 3, 4, 5]);
//! println!("f = {}", expr);
//! ```
//!
//! Or in one step:
//!
//! ```rust
//! assert_eq!(kmap_rs::minimize(&[0, 2], &["A", "B"]).unwrap(), "B'");
//! ```
//!
//! ## Core Components
//!
//! - **[`kmap`]**: input validation and the [`KMap`][crate::kmap::KMap] entry point.
//! - **[`cover`]**: the group search.
//! - **[`synth`]**: product-term synthesis and formatting.
//! - **[`gray`]**: the Gray-code cell layout.

pub mod cellset;
pub mod cover;
pub mod error;
pub mod eval;
pub mod gray;
pub mod grid;
pub mod kmap;
pub mod region;
pub mod synth;
pub mod types;

pub use crate::error::{KMapError, Result};
pub use crate::kmap::minimize;
