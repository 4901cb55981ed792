use cyclotomic::CyclotomicError;
use group::GroupError;
use itertools::Itertools;

/// Everything that can go wrong while building or querying a [`Double`](crate::Double).
///
/// Apart from `Input`, these indicate an internal defect rather than bad input: a correct S-matrix
/// always yields non-negative integer fusion coefficients and exactly one dual per object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DoubleError {
    #[error("invalid group: {0}")]
    Input(#[from] GroupError),

    #[error(
        "N({}) = {value} is not a non-negative integer in the double of {group}",
        .triple.iter().join(", ")
    )]
    Integrality {
        group: String,
        triple: [String; 3],
        value: String,
    },

    #[error(
        "{object} has {} duals in the double of {group}: [{}]",
        .candidates.len(),
        .candidates.iter().join(", ")
    )]
    Duality {
        group: String,
        object: String,
        candidates: Vec<String>,
    },

    #[error("exact arithmetic failed: {0}")]
    Arithmetic(#[from] CyclotomicError),
}
