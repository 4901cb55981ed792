use cyclotomic::CyclotomicError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
    #[error("invalid parameter for {family}: {reason}")]
    InvalidParameter { family: &'static str, reason: String },
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),
    #[error("group has more than {limit} elements")]
    TooLarge { limit: usize },
    #[error("{0} is not an element of the group")]
    NotAnElement(String),
    #[error("failed to compute the character table of {group}: {reason}")]
    CharacterTable { group: String, reason: String },
    #[error(transparent)]
    Arithmetic(#[from] CyclotomicError),
}
