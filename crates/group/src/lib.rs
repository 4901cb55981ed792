//! Finite groups as explicit lists of permutations, with the representation theory needed to build
//! Drinfeld doubles: conjugacy classes, centralizers and exact irreducible characters.
//!
//! ```
//! use group::{Group, PermutationGroup};
//!
//! let s3 = PermutationGroup::symmetric(3).unwrap();
//! assert_eq!(s3.order(), 6);
//! let degrees: Vec<u32> = s3
//!     .irreducible_characters()
//!     .unwrap()
//!     .iter()
//!     .map(|chi| chi.degree())
//!     .collect();
//! assert_eq!(degrees, [1, 1, 2]);
//! ```

mod character;
mod classes;
mod error;
#[allow(clippy::module_inception)]
mod group;
pub mod matrix;
mod permutation;
mod permutation_group;

pub use character::{Character, CharacterTable};
pub use classes::{ConjugacyClass, ConjugacyClasses};
pub use error::GroupError;
pub use group::Group;
pub use permutation::Permutation;
pub use permutation_group::{PermutationGroup, MAX_ORDER};
