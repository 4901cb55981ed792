//! The S-matrix of the double of a finite group.
//!
//! For simple objects `(a, χ₁)` and `(b, χ₂)` the entry is
//!
//! ```text
//! S = 1 / (|C(a)| |C(b)|) Σ_g χ₁(g b g⁻¹) χ₂(g⁻¹ a g)
//! ```
//!
//! where `g` runs over the [`summands`], the elements for which `g b g⁻¹` commutes with `a`. The
//! free functions here evaluate this formula literally. [`Double`](crate::Double) uses
//! [`SMatrixBuilder`], which computes the same numbers by first counting how often each pair of
//! centralizer classes occurs in the sum. That count only depends on the two class representatives,
//! so it is shared by every pair of characters.

use std::sync::Arc;

use cyclotomic::{Cyclotomic, CyclotomicField};
use group::{Character, ConjugacyClasses, Group, GroupError};
use maybe_rayon::prelude::*;
use num_bigint::BigInt;
use num_rational::BigRational;
use rustc_hash::FxHashMap;

use crate::simple::{simple_objects, SimpleObject};
use crate::DoubleError;

/// The elements `g` of `group` such that `a` commutes with `g b g⁻¹`.
pub fn summands<G: Group>(group: &G, a: &G::Element, b: &G::Element) -> Vec<G::Element> {
    group
        .elements()
        .iter()
        .filter(|&g| group.commute(a, &group.conjugate(b, g)))
        .cloned()
        .collect()
}

/// A single S-matrix entry, evaluated straight from the definition. The result lies in
/// `Q(ζ_e)` for the exponent `e` of `group`.
pub fn s_matrix_entry<G: Group>(
    group: &G,
    (a, chi_1): (&G::Element, &Character<G::Element>),
    (b, chi_2): (&G::Element, &Character<G::Element>),
) -> Result<Cyclotomic, DoubleError> {
    let field = CyclotomicField::new(group.exponent());
    let classes = group.conjugacy_classes();
    let centralizer_order = |x: &G::Element| {
        classes
            .class_of(x)
            .map(|c| classes.centralizer_order(c))
            .ok_or_else(|| GroupError::NotAnElement(x.to_string()))
    };
    let evaluate = |chi: &Character<G::Element>, x: &G::Element| {
        chi.value(x)
            .cloned()
            .ok_or_else(|| GroupError::NotAnElement(x.to_string()))
    };

    let mut sum = field.zero();
    for g in summands(group, a, b) {
        let x = group.conjugate(b, &g);
        let y = group.conjugate(a, &group.invert(&g));
        let term = evaluate(chi_1, &x)?.embed(&field)? * evaluate(chi_2, &y)?.embed(&field)?;
        sum += term;
    }
    let denominator = centralizer_order(a)? * centralizer_order(b)?;
    Ok(sum.scale(&BigRational::new(BigInt::from(1), BigInt::from(denominator))))
}

/// The full S-matrix, indexed like [`simple_objects`].
pub fn s_matrix<G: Group>(group: &G) -> Result<Vec<Vec<Cyclotomic>>, DoubleError> {
    let simples = simple_objects(group)?;
    simples
        .iter()
        .map(|(a, chi_1)| {
            simples
                .iter()
                .map(|(b, chi_2)| s_matrix_entry(group, (a, chi_1), (b, chi_2)))
                .collect()
        })
        .collect()
}

/// The objects sharing one class representative.
struct Block<'a, G: Group> {
    rep: &'a G::Element,
    centralizer_classes: Arc<ConjugacyClasses<G::Element>>,
    centralizer_order: usize,
    objects: std::ops::Range<usize>,
}

/// Builds the S-matrix of a basis of simple objects.
pub(crate) struct SMatrixBuilder<'a, G: Group> {
    group: &'a G,
    blocks: Vec<Block<'a, G>>,
    /// Character values of each object, per class of its centralizer, embedded in `field`.
    values: Vec<Vec<Cyclotomic>>,
    field: &'a Arc<CyclotomicField>,
}

impl<'a, G: Group> SMatrixBuilder<'a, G> {
    pub(crate) fn new(
        group: &'a G,
        objects: &'a [SimpleObject<G>],
        field: &'a Arc<CyclotomicField>,
    ) -> Result<Self, DoubleError> {
        let mut blocks: Vec<Block<G>> = Vec::new();
        for (i, object) in objects.iter().enumerate() {
            match blocks.last_mut() {
                Some(block) if block.rep == object.rep() => block.objects.end = i + 1,
                _ => blocks.push(Block {
                    rep: object.rep(),
                    centralizer_classes: object.centralizer().conjugacy_classes(),
                    centralizer_order: object.centralizer().order(),
                    objects: i..i + 1,
                }),
            }
        }

        let values = objects
            .iter()
            .map(|object| {
                object
                    .character()
                    .values()
                    .iter()
                    .map(|x| x.embed(field))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            group,
            blocks,
            values,
            field,
        })
    }

    /// For representatives `a` and `b`, counts the `g` with `g b g⁻¹ ∈ C(a)` by the pair of
    /// classes of `g b g⁻¹` in `C(a)` and of `g⁻¹ a g` in `C(b)`.
    fn class_pairs(&self, left: &Block<G>, right: &Block<G>) -> Vec<((usize, usize), u64)> {
        let group = self.group;
        let (a, b) = (left.rep, right.rep);
        let mut counts: FxHashMap<(usize, usize), u64> = FxHashMap::default();
        for g in group.elements() {
            let x = group.conjugate(b, g);
            if !group.commute(a, &x) {
                continue;
            }
            let y = group.conjugate(a, &group.invert(g));
            let (Some(cx), Some(cy)) = (
                left.centralizer_classes.class_of(&x),
                right.centralizer_classes.class_of(&y),
            ) else {
                unreachable!("{x} and {y} lie in the centralizers of {a} and {b}")
            };
            *counts.entry((cx, cy)).or_default() += 1;
        }
        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_unstable();
        counts
    }

    fn entry(
        &self,
        pairs: &[((usize, usize), u64)],
        i: usize,
        j: usize,
        scale: &BigRational,
    ) -> Cyclotomic {
        let mut sum = self.field.zero();
        for &((cx, cy), count) in pairs {
            let (u, v) = (&self.values[i][cx], &self.values[j][cy]);
            if u.is_zero() || v.is_zero() {
                continue;
            }
            sum += (u * v).scale(&BigRational::from_integer(count.into()));
        }
        sum.scale(scale)
    }

    #[tracing::instrument(skip_all, fields(group = self.group.description()))]
    pub(crate) fn build(&self) -> Vec<Vec<Cyclotomic>> {
        let rows: Vec<Vec<Vec<Cyclotomic>>> = self
            .blocks
            .maybe_par_iter()
            .map(|left| {
                let mut rows = vec![Vec::with_capacity(self.values.len()); left.objects.len()];
                for right in &self.blocks {
                    let pairs = self.class_pairs(left, right);
                    let scale = BigRational::new(
                        1.into(),
                        BigInt::from(left.centralizer_order * right.centralizer_order),
                    );
                    for (row, i) in rows.iter_mut().zip(left.objects.clone()) {
                        row.extend(right.objects.clone().map(|j| self.entry(&pairs, i, j, &scale)));
                    }
                }
                tracing::debug!(rep = %left.rep, "finished S-matrix rows");
                rows
            })
            .collect();
        rows.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use group::PermutationGroup;

    #[test]
    fn summands_of_identity() {
        let g = PermutationGroup::symmetric(3).unwrap();
        let e = g.identity();
        assert_eq!(summands(&g, &e, &e).len(), 6);
        let reps = g.conjugacy_class_representatives();
        // (2,3) commutes with a conjugate of (2,3) only when they are equal.
        assert_eq!(summands(&g, &reps[1], &reps[1]).len(), 2);
        // A transposition never commutes with a 3-cycle.
        assert!(summands(&g, &reps[1], &reps[2]).is_empty());
    }

    #[test]
    fn unit_entry() {
        let g = PermutationGroup::symmetric(3).unwrap();
        let simples = simple_objects(&g).unwrap();
        let (e, trivial) = &simples[0];
        let s00 = s_matrix_entry(&g, (e, trivial), (e, trivial)).unwrap();
        assert_eq!(s00.to_rational(), Some(BigRational::new(1.into(), 6.into())));
    }

    #[test]
    fn characters_of_the_wrong_centralizer() {
        let g = PermutationGroup::symmetric(3).unwrap();
        let simples = simple_objects(&g).unwrap();
        // The last object has a 3-cycle as representative and a character of C_3.
        let (_, chi) = simples.last().unwrap();
        let transposition = &g.conjugacy_class_representatives()[1];
        assert!(matches!(
            s_matrix_entry(&g, (transposition, chi), (transposition, chi)),
            Err(DoubleError::Input(GroupError::NotAnElement(_)))
        ));
    }
}
