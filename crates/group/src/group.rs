use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::sync::Arc;

use crate::character::{Character, CharacterTable};
use crate::classes::ConjugacyClasses;
use crate::GroupError;

/// A finite group, given by the explicit list of its elements.
///
/// Everything the rest of the workspace knows about a group goes through this trait: element
/// arithmetic, conjugacy classes, centralizers and irreducible characters. Implementations are
/// expected to cache the conjugacy classes and the character table, since both are queried many
/// times while building a double.
///
/// # Ordering
///
/// [`Group::elements`] must be sorted with respect to `Ord` on the element type, and the identity
/// must be the least element. Conjugacy classes are then enumerated by their least element, which
/// makes the class of the identity come first and every derived ordering reproducible.
pub trait Group: Send + Sync + Sized {
    type Element: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync;

    /// A human readable description, e.g. `Symmetric group of order 3! as a permutation group`.
    fn description(&self) -> &str;

    /// All elements, in increasing order.
    fn elements(&self) -> &[Self::Element];

    fn identity(&self) -> Self::Element;

    /// The product `a * b`. For permutation groups this applies `a` first.
    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn invert(&self, a: &Self::Element) -> Self::Element;

    fn contains(&self, a: &Self::Element) -> bool;

    fn order(&self) -> usize {
        self.elements().len()
    }

    /// The least `n > 0` with `a^n = 1`.
    fn element_order(&self, a: &Self::Element) -> u32 {
        let identity = self.identity();
        let mut power = a.clone();
        let mut n = 1;
        while power != identity {
            power = self.multiply(&power, a);
            n += 1;
        }
        n
    }

    /// The least common multiple of the element orders.
    fn exponent(&self) -> u32 {
        self.elements()
            .iter()
            .map(|a| self.element_order(a))
            .fold(1, crate::permutation::lcm)
    }

    /// `g * a * g^{-1}`.
    fn conjugate(&self, a: &Self::Element, g: &Self::Element) -> Self::Element {
        self.multiply(&self.multiply(g, a), &self.invert(g))
    }

    fn commute(&self, a: &Self::Element, b: &Self::Element) -> bool {
        self.multiply(a, b) == self.multiply(b, a)
    }

    fn conjugacy_classes(&self) -> Arc<ConjugacyClasses<Self::Element>>;

    /// One element of each conjugacy class, the least one, in increasing order. The first
    /// representative is the identity.
    fn conjugacy_class_representatives(&self) -> Vec<Self::Element> {
        self.conjugacy_classes()
            .iter()
            .map(|class| class.representative().clone())
            .collect()
    }

    /// The subgroup of elements commuting with `g`.
    fn centralizer(&self, g: &Self::Element) -> Result<Self, GroupError>;

    fn character_table(&self) -> Result<Arc<CharacterTable<Self::Element>>, GroupError>;

    /// The irreducible characters, trivial character first. See [`CharacterTable`] for the
    /// ordering of the rest.
    fn irreducible_characters(&self) -> Result<Vec<Character<Self::Element>>, GroupError> {
        Ok(self.character_table()?.characters())
    }
}
