use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::Group;

#[derive(Debug, Clone)]
pub struct ConjugacyClass<E> {
    /// Sorted, so the representative is `elements[0]`.
    elements: Vec<E>,
}

impl<E> ConjugacyClass<E> {
    /// The least element of the class.
    pub fn representative(&self) -> &E {
        &self.elements[0]
    }

    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// The conjugacy classes of a finite group, ordered by representative.
#[derive(Debug, Clone)]
pub struct ConjugacyClasses<E> {
    group_order: usize,
    classes: Vec<ConjugacyClass<E>>,
    class_of: FxHashMap<E, usize>,
    /// `inverse[i]` is the class of the inverses of the elements of class `i`.
    inverse: Vec<usize>,
}

impl<E: Clone + Eq + Hash + Ord> ConjugacyClasses<E> {
    #[tracing::instrument(skip_all, fields(group = group.description()))]
    pub fn compute<G: Group<Element = E>>(group: &G) -> Self {
        let mut elements = group.elements().to_vec();
        elements.sort();

        let mut class_of = FxHashMap::default();
        let mut classes = Vec::new();
        for x in &elements {
            if class_of.contains_key(x) {
                continue;
            }
            let mut class: Vec<E> = elements.iter().map(|g| group.conjugate(x, g)).collect();
            class.sort();
            class.dedup();
            debug_assert!(&class[0] == x);
            for y in &class {
                class_of.insert(y.clone(), classes.len());
            }
            classes.push(ConjugacyClass { elements: class });
        }

        let inverse = classes
            .iter()
            .map(|c| class_of[&group.invert(c.representative())])
            .collect();

        tracing::debug!(classes = classes.len());
        Self {
            group_order: elements.len(),
            classes,
            class_of,
            inverse,
        }
    }

    /// The index of the class containing `e`, or `None` if `e` is not in the group.
    pub fn class_of(&self, e: &E) -> Option<usize> {
        self.class_of.get(e).copied()
    }
}

impl<E> ConjugacyClasses<E> {
    /// The number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<ConjugacyClass<E>> {
        self.classes.iter()
    }

    pub fn get(&self, i: usize) -> &ConjugacyClass<E> {
        &self.classes[i]
    }

    pub fn inverse_class(&self, i: usize) -> usize {
        self.inverse[i]
    }

    pub fn group_order(&self) -> usize {
        self.group_order
    }

    /// The order of the centralizer of any element of class `i`.
    pub fn centralizer_order(&self, i: usize) -> usize {
        self.group_order / self.classes[i].len()
    }
}

impl<'a, E> IntoIterator for &'a ConjugacyClasses<E> {
    type Item = &'a ConjugacyClass<E>;
    type IntoIter = std::slice::Iter<'a, ConjugacyClass<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}
