//! Invariants of the Drinfeld double of a finite group.
//!
//! The simple objects of the double `D(G)` are pairs `(g, χ)` of a conjugacy class representative
//! `g` and an irreducible character `χ` of the centralizer of `g`. This crate computes the exact
//! S-matrix of `D(G)`, its fusion coefficients by the Verlinde formula, duals and twists, and
//! decides whether the fusion rules are multiplicity free.
//!
//! All arithmetic is exact, in the cyclotomic field `Q(ζ_e)` for the exponent `e` of `G`, so a
//! fusion coefficient that fails to be a non-negative integer is detected rather than rounded
//! away.
//!
//! The `double` binary runs [`report::analyse`] over [`catalog::default_catalog`].

pub mod catalog;
mod double;
mod error;
pub mod fusion;
pub mod report;
pub mod s_matrix;
pub mod simple;
pub mod utils;

pub use double::Double;
pub use error::DoubleError;
pub use fusion::Multiplicity;
pub use simple::{simple_objects, SimpleObject};
