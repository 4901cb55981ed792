//! Exact character tables by the Burnside–Dixon–Schneider algorithm.
//!
//! Let `K_1, ..., K_r` be the class sums of `G`. They span the centre of the group algebra and
//! satisfy `K_i K_j = Σ_k a_{ijk} K_k`, where `a_{ijk}` counts the pairs `(x, y) ∈ C_i × C_j`
//! whose product is a fixed element of `C_k`. Every irreducible character `χ` of degree `d` gives
//! a central character `ω_i = |C_i| χ(x_i) / d`, and the vectors `ω` are precisely the common
//! eigenvectors of the matrices `(M_i)_{jk} = a_{ijk}` with `M_i ω = ω_i ω`.
//!
//! Working over `F_p` with `p ≡ 1 (mod e)` for the exponent `e` of `G`, all of this can be done
//! with exact modular linear algebra. Once the degrees are known the character values mod `p` are
//! recovered, and since `p > 2√|G|` each value `χ(g) = Σ m_k ζ_e^k` can be lifted by recovering
//! the eigenvalue multiplicities `m_k` of `g`, which are integers in `0..=d`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use cyclotomic::{prime, Cyclotomic, CyclotomicField};
use itertools::Itertools;
use maybe_rayon::prelude::*;

use crate::classes::ConjugacyClasses;
use crate::matrix::Matrix;
use crate::{Group, GroupError};

/// The irreducible characters of a finite group, with values in `Q(ζ_e)`.
///
/// Rows are ordered with the trivial character first, then by increasing degree, then by
/// [`Cyclotomic::canonical_cmp`] on the list of values. Columns are the conjugacy classes in the
/// order of [`ConjugacyClasses`].
pub struct CharacterTable<E> {
    group: String,
    classes: Arc<ConjugacyClasses<E>>,
    field: Arc<CyclotomicField>,
    degrees: Vec<u32>,
    values: Vec<Vec<Cyclotomic>>,
}

impl<E: Clone + Eq + Hash + Ord + Send + Sync> CharacterTable<E> {
    #[tracing::instrument(skip_all, fields(group = group.description(), order = group.order()))]
    pub fn compute<G: Group<Element = E>>(group: &G) -> Result<Self, GroupError> {
        let classes = group.conjugacy_classes();
        let exponent = group.exponent();
        let n = group.order();
        let error = |reason: String| GroupError::CharacterTable {
            group: group.description().to_string(),
            reason,
        };

        let p = prime::prime_congruent_to_one(exponent, 4 * n as u64)
            .ok_or_else(|| error(format!("no suitable prime for exponent {exponent}")))?;
        let z = prime::root_of_unity(p, exponent)
            .ok_or_else(|| error(format!("F_{p} has no root of unity of order {exponent}")))?;
        tracing::debug!(p, z, exponent, classes = classes.len());

        let class_matrices = structure_constants(group, &classes, p);
        let central_characters = split_eigenspaces(&class_matrices, p)
            .ok_or_else(|| error("class matrices do not separate the characters".to_string()))?;

        // Powers of every class representative, as classes, for lifting.
        let power_classes: Vec<Vec<usize>> = classes
            .iter()
            .map(|class| {
                let g = class.representative();
                let mut x = group.identity();
                (0..exponent)
                    .map(|_| {
                        let c = classes.class_of(&x).unwrap_or_default();
                        x = group.multiply(&x, g);
                        c
                    })
                    .collect()
            })
            .collect();

        let field = CyclotomicField::new(exponent);
        let lifter = Lifter {
            p,
            z,
            exponent,
            group_order: n as u32,
            classes: &classes,
            power_classes: &power_classes,
            field: &field,
        };
        let mut rows: Vec<(u32, Vec<Cyclotomic>)> = central_characters
            .into_maybe_par_iter()
            .map(|omega| lifter.lift(&omega))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| error("character values failed to lift".to_string()))?;

        rows.sort_by(|(d1, v1), (d2, v2)| {
            let trivial1 = v1.iter().all(Cyclotomic::is_one);
            let trivial2 = v2.iter().all(Cyclotomic::is_one);
            trivial2
                .cmp(&trivial1)
                .then(d1.cmp(d2))
                .then_with(|| compare_values(v1, v2))
        });

        let sum_of_squares: u64 = rows.iter().map(|(d, _)| (*d as u64).pow(2)).sum();
        if rows.len() != classes.len() || sum_of_squares != n as u64 {
            return Err(error(format!(
                "found {} characters with Σd² = {sum_of_squares}",
                rows.len()
            )));
        }

        let (degrees, values) = rows.into_iter().unzip();
        Ok(Self {
            group: group.description().to_string(),
            classes,
            field,
            degrees,
            values,
        })
    }

    /// The value of character `row` at `e`, or `None` if `e` is not in the group.
    pub fn value(&self, row: usize, e: &E) -> Option<&Cyclotomic> {
        self.classes.class_of(e).map(|c| &self.values[row][c])
    }
}

impl<E> CharacterTable<E> {
    /// The number of irreducible characters, which is the number of classes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn field(&self) -> &Arc<CyclotomicField> {
        &self.field
    }

    pub fn classes(&self) -> &Arc<ConjugacyClasses<E>> {
        &self.classes
    }

    pub fn degree(&self, row: usize) -> u32 {
        self.degrees[row]
    }

    pub fn value_at_class(&self, row: usize, class: usize) -> &Cyclotomic {
        &self.values[row][class]
    }

    pub fn row(&self, row: usize) -> &[Cyclotomic] {
        &self.values[row]
    }

    pub fn characters(self: &Arc<Self>) -> Vec<Character<E>> {
        (0..self.len())
            .map(|index| Character {
                table: Arc::clone(self),
                index,
            })
            .collect()
    }
}

impl<E> fmt::Display for CharacterTable<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Character table of {}", self.group)?;
        for row in &self.values {
            writeln!(f, "[{}]", row.iter().join(", "))?;
        }
        Ok(())
    }
}

fn compare_values(a: &[Cyclotomic], b: &[Cyclotomic]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.canonical_cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// An irreducible character of a finite group. This is a cheap handle into a shared
/// [`CharacterTable`].
#[derive(Clone)]
pub struct Character<E> {
    table: Arc<CharacterTable<E>>,
    index: usize,
}

impl<E: Clone + Eq + Hash + Ord + Send + Sync> Character<E> {
    /// `χ(e)`, or `None` if `e` is not an element of the group the character belongs to.
    pub fn value(&self, e: &E) -> Option<&Cyclotomic> {
        self.table.value(self.index, e)
    }
}

impl<E> Character<E> {
    pub fn table(&self) -> &Arc<CharacterTable<E>> {
        &self.table
    }

    /// The position of this character in its table.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value_at_class(&self, class: usize) -> &Cyclotomic {
        self.table.value_at_class(self.index, class)
    }

    pub fn values(&self) -> &[Cyclotomic] {
        self.table.row(self.index)
    }

    /// `χ(1)`.
    pub fn degree(&self) -> u32 {
        self.table.degree(self.index)
    }

    pub fn is_trivial(&self) -> bool {
        self.values().iter().all(Cyclotomic::is_one)
    }
}

impl<E> PartialEq for Character<E> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.table, &other.table) && self.index == other.index
    }
}

impl<E> Eq for Character<E> {}

impl<E> fmt::Debug for Character<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Character([{}])", self.values().iter().join(", "))
    }
}

impl<E> fmt::Display for Character<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Character of {}", self.table.group)
    }
}

/// The class matrices `M_i`, with `(M_i)_{jk} = a_{ijk}` reduced mod `p`.
fn structure_constants<G: Group>(
    group: &G,
    classes: &ConjugacyClasses<G::Element>,
    p: u32,
) -> Vec<Matrix> {
    let r = classes.len();
    let mut counts = vec![vec![vec![0u32; r]; r]; r];
    for (k, target) in classes.iter().enumerate() {
        let z = target.representative();
        for x in group.elements() {
            let i = classes.class_of(x).unwrap_or_default();
            let y = group.multiply(&group.invert(x), z);
            let j = classes.class_of(&y).unwrap_or_default();
            counts[i][j][k] += 1;
        }
    }
    counts
        .into_iter()
        .map(|m| {
            let rows = m
                .into_iter()
                .map(|row| row.into_iter().map(|a| a % p).collect())
                .collect();
            Matrix::from_rows(p, r, rows)
        })
        .collect()
}

/// Splits `F_p^r` into the common eigenspaces of the class matrices and returns the central
/// characters, normalized so that the entry at the identity class is 1. Returns `None` if some
/// eigenspace fails to become one dimensional.
fn split_eigenspaces(class_matrices: &[Matrix], p: u32) -> Option<Vec<Vec<u32>>> {
    let r = class_matrices.len();
    // Each space is a list of basis vectors.
    let mut spaces: Vec<Vec<Vec<u32>>> = vec![Matrix::identity(p, r).into_rows()];

    // M_0 is the identity matrix, which splits nothing.
    for m in class_matrices.iter().skip(1) {
        if spaces.iter().all(|s| s.len() == 1) {
            break;
        }
        let mut next = Vec::with_capacity(r);
        for space in spaces {
            if space.len() == 1 {
                next.push(space);
                continue;
            }
            let images: Vec<Vec<u32>> = space.iter().map(|b| m.apply_right(b)).collect();
            let mut found = 0;
            for lambda in 0..p {
                // (M - λ) b_t, as the rows of a matrix whose left kernel we want.
                let shifted = images
                    .iter()
                    .zip(&space)
                    .map(|(mb, b)| {
                        mb.iter()
                            .zip(b)
                            .map(|(&x, &y)| prime::sum(p, x, prime::product(p, p - lambda, y)))
                            .collect()
                    })
                    .collect();
                let kernel = Matrix::from_rows(p, r, shifted).left_kernel();
                if kernel.is_empty() {
                    continue;
                }
                found += kernel.len();
                let basis = Matrix::from_rows(p, r, space.clone());
                next.push(kernel.iter().map(|c| basis.apply_left(c)).collect());
                if found == space.len() {
                    break;
                }
            }
            if found != space.len() {
                return None;
            }
        }
        spaces = next;
    }

    spaces
        .into_iter()
        .map(|space| {
            let [v] = <[Vec<u32>; 1]>::try_from(space).ok()?;
            if v[0] == 0 {
                return None;
            }
            let c = prime::inverse(p, v[0]);
            Some(v.into_iter().map(|x| prime::product(p, x, c)).collect())
        })
        .collect()
}

struct Lifter<'a, E> {
    p: u32,
    z: u32,
    exponent: u32,
    group_order: u32,
    classes: &'a ConjugacyClasses<E>,
    power_classes: &'a [Vec<usize>],
    field: &'a Arc<CyclotomicField>,
}

impl<E> Lifter<'_, E> {
    /// Turns a central character into a degree and a row of exact character values.
    fn lift(&self, omega: &[u32]) -> Option<(u32, Vec<Cyclotomic>)> {
        let p = self.p;
        let r = omega.len();
        let class_size = |i: usize| prime::reduce(p, self.classes.get(i).len() as i64);

        // d^2 = |G| / Σ_i ω_i ω_{i*} / |C_i|
        let norm = (0..r).fold(0, |acc, i| {
            let term = prime::product(
                p,
                prime::product(p, omega[i], omega[self.classes.inverse_class(i)]),
                prime::inverse(p, class_size(i)),
            );
            prime::sum(p, acc, term)
        });
        if norm == 0 {
            return None;
        }
        let d_squared = prime::product(p, self.group_order % p, prime::inverse(p, norm));
        let degree = (1..=self.group_order)
            .take_while(|d| d * d <= self.group_order)
            .find(|&d| prime::product(p, d, d) == d_squared)?;

        let modular: Vec<u32> = (0..r)
            .map(|i| {
                prime::product(
                    p,
                    prime::product(p, omega[i], degree),
                    prime::inverse(p, class_size(i)),
                )
            })
            .collect();

        let e = self.exponent;
        let e_inverse = prime::inverse(p, e % p);
        let z_inverse = prime::inverse(p, self.z);
        let values = (0..r)
            .map(|i| {
                let powers = &self.power_classes[i];
                let mut multiplicities = Vec::with_capacity(e as usize);
                for k in 0..e {
                    // m_k = (1/e) Σ_l χ(g^l) z^{-kl}
                    let step = prime::power_mod(p, z_inverse, k);
                    let mut twiddle = 1;
                    let mut m = 0;
                    for &c in powers {
                        m = prime::sum(p, m, prime::product(p, modular[c], twiddle));
                        twiddle = prime::product(p, twiddle, step);
                    }
                    let m = prime::product(p, m, e_inverse);
                    if m > degree {
                        return None;
                    }
                    multiplicities.push((k, m as i64));
                }
                let total: i64 = multiplicities.iter().map(|&(_, m)| m).sum();
                if total != degree as i64 {
                    return None;
                }
                Some(self.field.from_exponents(multiplicities))
            })
            .collect::<Option<Vec<_>>>()?;
        Some((degree, values))
    }
}
