//! Fusion coefficients by the Verlinde formula
//!
//! ```text
//! N(i, j, k) = Σ_r S(i, r) S(j, r) S(k, r) / S(0, r).
//! ```
//!
//! Each coefficient is checked to be a non-negative integer. Anything else means the S-matrix is
//! wrong, and is reported as [`DoubleError::Integrality`].

use cyclotomic::Cyclotomic;
use group::Group;
use maybe_rayon::prelude::*;
use num_traits::{Signed, ToPrimitive};

use crate::{Double, DoubleError};

/// Whether every fusion coefficient of a double is at most 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    Free,
    /// Some coefficient exceeds 1. `witness` is the least triple `i <= j <= k`, in lexicographic
    /// order, with `N(i, j, k) = value > 1`.
    NotFree {
        witness: (usize, usize, usize),
        value: u32,
    },
}

impl Multiplicity {
    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }
}

impl<G: Group> Double<G> {
    /// The fusion coefficient `N(i, j, k)`, the multiplicity of `k` in `i ⊗ j` up to duality.
    ///
    /// # Panics
    ///
    /// Panics if any index is at least [`Double::len`].
    pub fn n_ijk(&self, i: usize, j: usize, k: usize) -> Result<u32, DoubleError> {
        self.contract(&self.pair_row(i, j), (i, j, k))
    }

    /// The nonzero terms `S(i, r) S(j, r) / S(0, r)`, shared by every `N(i, j, _)`.
    fn pair_row(&self, i: usize, j: usize) -> Vec<(usize, Cyclotomic)> {
        (0..self.len())
            .filter_map(|r| {
                let (a, b) = (self.s(i, r), self.s(j, r));
                if a.is_zero() || b.is_zero() {
                    return None;
                }
                Some((r, &(a * b) * self.unit_row_inverse(r)))
            })
            .collect()
    }

    fn contract(
        &self,
        row: &[(usize, Cyclotomic)],
        (i, j, k): (usize, usize, usize),
    ) -> Result<u32, DoubleError> {
        let mut sum = self.field().zero();
        for (r, w) in row {
            let c = self.s(k, *r);
            if !c.is_zero() {
                sum += w * c;
            }
        }
        sum.to_integer()
            .filter(|n| !n.is_negative())
            .and_then(|n| n.to_u32())
            .ok_or_else(|| DoubleError::Integrality {
                group: self.group().description().to_string(),
                triple: [i, j, k].map(|x| self.basis()[x].label().to_string()),
                value: sum.to_string(),
            })
    }

    pub(crate) fn compute_duals(&self) -> Result<Vec<usize>, DoubleError> {
        (0..self.len())
            .map(|i| {
                let mut candidates = Vec::new();
                for j in 0..self.len() {
                    if self.n_ijk(i, j, 0)? == 1 {
                        candidates.push(j);
                    }
                }
                match candidates[..] {
                    [j] => Ok(j),
                    _ => Err(DoubleError::Duality {
                        group: self.group().description().to_string(),
                        object: self.basis()[i].label().to_string(),
                        candidates: candidates
                            .iter()
                            .map(|&j| self.basis()[j].label().to_string())
                            .collect(),
                    }),
                }
            })
            .collect()
    }

    /// Evaluates every fusion coefficient and decides whether all of them are 0 or 1.
    ///
    /// `N` is symmetric in its three arguments, so only triples `i <= j <= k` are evaluated. Every
    /// one of them is checked for integrality, even after a coefficient above 1 has been found.
    #[tracing::instrument(
        skip(self),
        fields(group = self.group().description(), objects = self.len())
    )]
    pub fn multiplicity_free(&self) -> Result<Multiplicity, DoubleError> {
        let n = self.len();
        let witnesses = (0..n)
            .into_maybe_par_iter()
            .map(|i| {
                let mut witness = None;
                for j in i..n {
                    let row = self.pair_row(i, j);
                    for k in j..n {
                        let value = self.contract(&row, (i, j, k))?;
                        if value > 1 && witness.is_none() {
                            witness = Some(((i, j, k), value));
                        }
                    }
                }
                Ok::<_, DoubleError>(witness)
            })
            .collect::<Result<Vec<_>, DoubleError>>()?;

        Ok(match witnesses.into_iter().flatten().next() {
            None => Multiplicity::Free,
            Some((witness, value)) => {
                tracing::debug!(?witness, value, "found a multiplicity");
                Multiplicity::NotFree { witness, value }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use group::PermutationGroup;

    #[test]
    fn unit_is_neutral() {
        let d = Double::new(PermutationGroup::symmetric(3).unwrap()).unwrap();
        for i in 0..d.len() {
            for k in 0..d.len() {
                // N(0, i, k) = 1 exactly when k is dual to i.
                let expected = u32::from(k == d.dual(i));
                assert_eq!(d.n_ijk(0, i, k).unwrap(), expected);
            }
        }
    }

    #[test]
    fn verdicts() {
        let s3 = Double::new(PermutationGroup::symmetric(3).unwrap()).unwrap();
        assert_eq!(s3.multiplicity_free().unwrap(), Multiplicity::Free);
        let a4 = Double::new(PermutationGroup::alternating(4).unwrap()).unwrap();
        let verdict = a4.multiplicity_free().unwrap();
        assert!(!verdict.is_free());
        let Multiplicity::NotFree { witness: (i, j, k), value } = verdict else {
            unreachable!()
        };
        assert!(i <= j && j <= k);
        assert_eq!(a4.n_ijk(k, i, j).unwrap(), value);
    }

    #[test]
    fn shared_rows_match_verlinde() {
        let d = Double::new(PermutationGroup::dihedral(4).unwrap()).unwrap();
        let n = d.len();
        for (i, j) in [(1, 2), (5, 5), (n - 1, 7), (0, n - 1)] {
            let row = d.pair_row(i, j);
            for k in 0..n {
                let direct = (0..n)
                    .map(|r| &(&(d.s(i, r) * d.s(j, r)) * d.s(k, r)) * d.unit_row_inverse(r))
                    .fold(d.field().zero(), |acc, x| acc + x);
                let expected = direct.to_integer().and_then(|x| x.to_u32());
                assert_eq!(d.contract(&row, (i, j, k)).ok(), expected, "N({i}, {j}, {k})");
            }
        }
    }
}
