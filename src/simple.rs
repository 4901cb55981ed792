use std::fmt;
use std::sync::Arc;

use group::{Character, Group, GroupError};

/// A simple object of the double of `G`: a conjugacy class representative `g` together with an
/// irreducible character of the centralizer of `g`.
///
/// Objects are created in bulk by [`Double::new`](crate::Double::new) and refer back to it only
/// through their position in the basis.
pub struct SimpleObject<G: Group> {
    rep: G::Element,
    /// Index of the class of `rep` among the conjugacy classes of `G`.
    class: usize,
    centralizer: Arc<G>,
    character: Character<G::Element>,
    label: String,
    index: usize,
}

impl<G: Group> SimpleObject<G> {
    pub(crate) fn new(
        rep: G::Element,
        class: usize,
        centralizer: Arc<G>,
        character: Character<G::Element>,
        label: String,
        index: usize,
    ) -> Self {
        Self {
            rep,
            class,
            centralizer,
            character,
            label,
            index,
        }
    }

    /// The conjugacy class representative, sometimes called the flux.
    pub fn rep(&self) -> &G::Element {
        &self.rep
    }

    pub fn class(&self) -> usize {
        self.class
    }

    pub fn centralizer(&self) -> &Arc<G> {
        &self.centralizer
    }

    /// The irreducible character of the centralizer, sometimes called the charge.
    pub fn character(&self) -> &Character<G::Element> {
        &self.character
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The position of the object in the basis of the double it belongs to.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<G: Group> fmt::Display for SimpleObject<G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl<G: Group> fmt::Debug for SimpleObject<G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SimpleObject")
            .field("label", &self.label)
            .field("rep", &self.rep)
            .field("character", &self.character)
            .finish()
    }
}

/// The simple objects of the double of `group`, as `(representative, character)` pairs.
///
/// Class representatives come in the order of [`Group::conjugacy_class_representatives`], which
/// starts with the identity, and the characters of each centralizer in the order of
/// [`Group::irreducible_characters`], which starts with the trivial character. Hence the first
/// pair is always the unit object.
pub fn simple_objects<G: Group>(
    group: &G,
) -> Result<Vec<(G::Element, Character<G::Element>)>, GroupError> {
    let mut simples = Vec::new();
    for g in group.conjugacy_class_representatives() {
        for chi in group.centralizer(&g)?.irreducible_characters()? {
            simples.push((g.clone(), chi));
        }
    }
    Ok(simples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use group::PermutationGroup;

    #[test]
    fn unit_comes_first() {
        let g = PermutationGroup::dihedral(4).unwrap();
        let simples = simple_objects(&g).unwrap();
        assert_eq!(simples.len(), 22);
        let (rep, chi) = &simples[0];
        assert_eq!(rep, &g.identity());
        assert!(chi.is_trivial());
    }

    #[test]
    fn abelian_groups_have_square_many() {
        for n in 1..=6 {
            let g = PermutationGroup::cyclic(n).unwrap();
            assert_eq!(simple_objects(&g).unwrap().len(), n * n);
        }
    }
}
