//! Exact arithmetic in cyclotomic fields.
//!
//! Character values of finite groups are sums of roots of unity, so they live in `Q(ζ_n)` where
//! `n` is the exponent of the group. This crate provides the fields ([`CyclotomicField`]) and their
//! elements ([`Cyclotomic`]), with rational coefficients of arbitrary size. Deciding whether an
//! element is an integer is exact, which is the whole point: no tolerance is ever involved.
//!
//! The [`prime`] module holds the word-sized modular arithmetic used to compute character tables
//! before they are lifted into a cyclotomic field.

mod element;
mod field;
pub mod prime;

pub use element::Cyclotomic;
pub use field::{cyclotomic_polynomial, CyclotomicField};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CyclotomicError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("cannot combine elements of Q(ζ_{left}) and Q(ζ_{right})")]
    FieldMismatch { left: u32, right: u32 },
    #[error("Q(ζ_{from}) is not a subfield of Q(ζ_{to})")]
    NotASubfield { from: u32, to: u32 },
}
