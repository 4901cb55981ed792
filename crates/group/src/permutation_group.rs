use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, OnceLock};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::character::CharacterTable;
use crate::classes::ConjugacyClasses;
use crate::{Group, GroupError, Permutation};

/// Groups larger than this are refused. The double of a group of order `n` has on the order of
/// `n` simple objects and its S-matrix needs `n^3` group operations, so this is already far past
/// anything that finishes in reasonable time.
pub const MAX_ORDER: usize = 40_320;

/// A group of permutations of `{1, ..., degree}`, stored as the sorted list of its elements.
pub struct PermutationGroup {
    name: String,
    degree: usize,
    elements: Vec<Permutation>,
    index: FxHashMap<Permutation, usize>,
    classes: OnceLock<Arc<ConjugacyClasses<Permutation>>>,
    table: OnceLock<Result<Arc<CharacterTable<Permutation>>, GroupError>>,
}

impl PermutationGroup {
    /// The closure of `generators` under composition.
    #[tracing::instrument(skip(generators))]
    pub fn generated_by(
        degree: usize,
        generators: &[Permutation],
        name: String,
    ) -> Result<Self, GroupError> {
        if let Some(g) = generators.iter().find(|g| g.degree() > degree) {
            return Err(GroupError::InvalidPermutation(format!(
                "{g} does not act on {{1, ..., {degree}}}"
            )));
        }
        let identity = Permutation::identity(degree);
        let mut seen = FxHashSet::default();
        seen.insert(identity.clone());
        let mut queue = VecDeque::from([identity]);
        while let Some(x) = queue.pop_front() {
            for g in generators {
                let y = pad(x.compose(g), degree);
                if seen.insert(y.clone()) {
                    if seen.len() > MAX_ORDER {
                        return Err(GroupError::TooLarge { limit: MAX_ORDER });
                    }
                    queue.push_back(y);
                }
            }
        }
        Ok(Self::from_sorted(name, degree, seen.into_iter().collect()))
    }

    fn from_sorted(name: String, degree: usize, mut elements: Vec<Permutation>) -> Self {
        elements.sort();
        let index = elements
            .iter()
            .enumerate()
            .map(|(i, g)| (g.clone(), i))
            .collect();
        tracing::debug!(name = %name, order = elements.len(), "built permutation group");
        Self {
            name,
            degree,
            elements,
            index,
            classes: OnceLock::new(),
            table: OnceLock::new(),
        }
    }

    pub fn cyclic(n: usize) -> Result<Self, GroupError> {
        check("cyclic group", n, 1)?;
        let cycle: Vec<u16> = (1..=n as u16).collect();
        Self::generated_by(
            n,
            &[Permutation::from_cycles(n, &[&cycle])?],
            format!("Cyclic group of order {n} as a permutation group"),
        )
    }

    /// The symmetries of a regular `n`-gon, of order `2n`.
    pub fn dihedral(n: usize) -> Result<Self, GroupError> {
        check("dihedral group", n, 3)?;
        let rotation: Vec<u16> = (1..=n as u16).collect();
        let pairs: Vec<[u16; 2]> = (1..=(n / 2) as u16)
            .map(|i| [i, n as u16 + 1 - i])
            .collect();
        let reflection: Vec<&[u16]> = pairs.iter().map(|pair| &pair[..]).collect();
        Self::generated_by(
            n,
            &[
                Permutation::from_cycles(n, &[&rotation])?,
                Permutation::from_cycles(n, &reflection)?,
            ],
            format!("Dihedral group of order {} as a permutation group", 2 * n),
        )
    }

    pub fn alternating(n: usize) -> Result<Self, GroupError> {
        check("alternating group", n, 3)?;
        let generators = (3..=n as u16)
            .map(|k| Permutation::from_cycles(n, &[&[1, 2, k]]))
            .collect::<Result<Vec<_>, _>>()?;
        Self::generated_by(
            n,
            &generators,
            format!("Alternating group of order {n}!/2 as a permutation group"),
        )
    }

    pub fn symmetric(n: usize) -> Result<Self, GroupError> {
        check("symmetric group", n, 2)?;
        let cycle: Vec<u16> = (1..=n as u16).collect();
        Self::generated_by(
            n,
            &[
                Permutation::from_cycles(n, &[&[1, 2]])?,
                Permutation::from_cycles(n, &[&cycle])?,
            ],
            format!("Symmetric group of order {n}! as a permutation group"),
        )
    }

    pub fn klein_four() -> Result<Self, GroupError> {
        Self::generated_by(
            4,
            &[
                Permutation::from_cycles(4, &[&[1, 2], &[3, 4]])?,
                Permutation::from_cycles(4, &[&[1, 3], &[2, 4]])?,
            ],
            "The Klein 4 group of order 4, as a permutation group".to_string(),
        )
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The position of `g` in [`Group::elements`].
    pub fn index_of(&self, g: &Permutation) -> Option<usize> {
        self.index.get(g).copied()
    }
}

fn check(family: &'static str, n: usize, least: usize) -> Result<(), GroupError> {
    if n < least {
        return Err(GroupError::InvalidParameter {
            family,
            reason: format!("expected n >= {least}, got {n}"),
        });
    }
    if n > u16::MAX as usize {
        return Err(GroupError::InvalidParameter {
            family,
            reason: format!("degree {n} is too large"),
        });
    }
    Ok(())
}

/// Brings a product back to the degree of the group, so elements compare cheaply.
fn pad(g: Permutation, degree: usize) -> Permutation {
    if g.degree() == degree {
        g
    } else {
        Permutation::identity(degree).compose(&g)
    }
}

impl Group for PermutationGroup {
    type Element = Permutation;

    fn description(&self) -> &str {
        &self.name
    }

    fn elements(&self) -> &[Permutation] {
        &self.elements
    }

    fn identity(&self) -> Permutation {
        Permutation::identity(self.degree)
    }

    fn multiply(&self, a: &Permutation, b: &Permutation) -> Permutation {
        a.compose(b)
    }

    fn invert(&self, a: &Permutation) -> Permutation {
        a.inverse()
    }

    fn contains(&self, a: &Permutation) -> bool {
        self.index.contains_key(a)
    }

    fn element_order(&self, a: &Permutation) -> u32 {
        a.order()
    }

    fn conjugacy_classes(&self) -> Arc<ConjugacyClasses<Permutation>> {
        Arc::clone(
            self.classes
                .get_or_init(|| Arc::new(ConjugacyClasses::compute(self))),
        )
    }

    fn centralizer(&self, g: &Permutation) -> Result<Self, GroupError> {
        if !self.contains(g) {
            return Err(GroupError::NotAnElement(g.to_string()));
        }
        let elements = self
            .elements
            .iter()
            .filter(|&x| self.commute(x, g))
            .cloned()
            .collect();
        Ok(Self::from_sorted(
            format!("Centralizer of {g} in {}", self.name),
            self.degree,
            elements,
        ))
    }

    fn character_table(&self) -> Result<Arc<CharacterTable<Permutation>>, GroupError> {
        self.table
            .get_or_init(|| CharacterTable::compute(self).map(Arc::new))
            .clone()
    }
}

impl fmt::Display for PermutationGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for PermutationGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PermutationGroup")
            .field("name", &self.name)
            .field("degree", &self.degree)
            .field("order", &self.elements.len())
            .finish()
    }
}
