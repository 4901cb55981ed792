use std::fmt;

use crate::GroupError;

/// A permutation of `{1, ..., n}`, stored zero-based as the list of images.
///
/// Products follow the convention of acting on the right: `p.compose(q)` first applies `p` and then
/// `q`, so `(p * q)(x) = q(p(x))`. Permutations of different degrees are compared after padding the
/// smaller one with fixed points, which is what makes the ordering of group elements independent of
/// the degree a group happens to be written in.
#[derive(Clone)]
pub struct Permutation {
    images: Box<[u16]>,
}

impl Permutation {
    pub fn identity(degree: usize) -> Self {
        Self {
            images: (0..degree as u16).collect(),
        }
    }

    /// Builds a permutation from zero-based images, checking that they form a bijection.
    pub fn from_images(images: Vec<u16>) -> Result<Self, GroupError> {
        let mut seen = vec![false; images.len()];
        for &i in &images {
            match seen.get_mut(i as usize) {
                Some(s) if !*s => *s = true,
                _ => {
                    return Err(GroupError::InvalidPermutation(format!(
                        "{images:?} is not a bijection"
                    )))
                }
            }
        }
        Ok(Self {
            images: images.into_boxed_slice(),
        })
    }

    /// Builds a permutation of `{1, ..., degree}` from disjoint cycles written one-based, as in
    /// `(1,2,3)(4,5)`.
    pub fn from_cycles(degree: usize, cycles: &[&[u16]]) -> Result<Self, GroupError> {
        let mut images: Vec<u16> = (0..degree as u16).collect();
        let mut moved = vec![false; degree];
        for cycle in cycles {
            for (k, &x) in cycle.iter().enumerate() {
                if x == 0 || x as usize > degree {
                    return Err(GroupError::InvalidPermutation(format!(
                        "point {x} is outside 1..={degree}"
                    )));
                }
                if std::mem::replace(&mut moved[x as usize - 1], true) {
                    return Err(GroupError::InvalidPermutation(format!(
                        "point {x} appears twice in {cycles:?}"
                    )));
                }
                let next = cycle[(k + 1) % cycle.len()];
                images[x as usize - 1] = next - 1;
            }
        }
        Ok(Self {
            images: images.into_boxed_slice(),
        })
    }

    pub fn degree(&self) -> usize {
        self.images.len()
    }

    /// The image of the zero-based point `x`.
    pub fn apply(&self, x: usize) -> usize {
        self.images.get(x).map_or(x, |&y| y as usize)
    }

    pub fn is_identity(&self) -> bool {
        self.images.iter().enumerate().all(|(i, &x)| i == x as usize)
    }

    /// First `self`, then `other`.
    pub fn compose(&self, other: &Self) -> Self {
        let degree = self.degree().max(other.degree());
        Self {
            images: (0..degree)
                .map(|x| other.apply(self.apply(x)) as u16)
                .collect(),
        }
    }

    pub fn inverse(&self) -> Self {
        let mut images = vec![0; self.degree()];
        for (i, &x) in self.images.iter().enumerate() {
            images[x as usize] = i as u16;
        }
        Self {
            images: images.into_boxed_slice(),
        }
    }

    pub fn pow(&self, e: u32) -> Self {
        let mut result = Self::identity(self.degree());
        for _ in 0..e {
            result = result.compose(self);
        }
        result
    }

    /// The disjoint cycles of length at least two, each starting at its least point.
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.degree()];
        let mut cycles = Vec::new();
        for start in 0..self.degree() {
            if seen[start] || self.apply(start) == start {
                continue;
            }
            let mut cycle = vec![start];
            seen[start] = true;
            let mut x = self.apply(start);
            while x != start {
                seen[x] = true;
                cycle.push(x);
                x = self.apply(x);
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// The least common multiple of the cycle lengths.
    pub fn order(&self) -> u32 {
        self.cycles()
            .iter()
            .fold(1, |acc, c| lcm(acc, c.len() as u32))
    }

    pub fn is_even(&self) -> bool {
        self.cycles().iter().map(|c| c.len() - 1).sum::<usize>() % 2 == 0
    }

    /// The images with trailing fixed points removed.
    fn trimmed(&self) -> &[u16] {
        let mut end = self.images.len();
        while end > 0 && self.images[end - 1] as usize == end - 1 {
            end -= 1;
        }
        &self.images[..end]
    }
}

pub(crate) fn lcm(a: u32, b: u32) -> u32 {
    let (mut x, mut y) = (a, b);
    while y != 0 {
        (x, y) = (y, x % y);
    }
    a / x * b
}

impl PartialOrd for Permutation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Permutation {
    /// Lexicographic on the list of images, so the identity is the least permutation of any
    /// degree.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let degree = self.degree().max(other.degree());
        (0..degree)
            .map(|x| self.apply(x))
            .cmp((0..degree).map(|x| other.apply(x)))
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cycles = self.cycles();
        if cycles.is_empty() {
            return write!(f, "()");
        }
        for cycle in cycles {
            write!(f, "(")?;
            for (k, x) in cycle.iter().enumerate() {
                if k > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", x + 1)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl PartialEq for Permutation {
    fn eq(&self, other: &Self) -> bool {
        self.trimmed() == other.trimmed()
    }
}

impl Eq for Permutation {}

impl std::hash::Hash for Permutation {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.trimmed().hash(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(degree: usize, cycles: &[&[u16]]) -> Permutation {
        Permutation::from_cycles(degree, cycles).unwrap()
    }

    #[test]
    fn composition_acts_on_the_right() {
        let a = perm(3, &[&[1, 2]]);
        let b = perm(3, &[&[2, 3]]);
        // 1 -> 2 -> 3, 3 -> 3 -> 2, 2 -> 1 -> 1
        assert_eq!(a.compose(&b), perm(3, &[&[1, 3, 2]]));
        assert_eq!(b.compose(&a), perm(3, &[&[1, 2, 3]]));
    }

    #[test]
    fn inverse_and_order() {
        let p = perm(6, &[&[1, 2, 3], &[4, 5]]);
        assert_eq!(p.order(), 6);
        assert!(p.compose(&p.inverse()).is_identity());
        assert!(p.pow(6).is_identity());
        assert!(!p.pow(3).is_identity());
        assert!(!p.is_even());
        assert!(p.pow(2).is_even());
    }

    #[test]
    fn display() {
        assert_eq!(perm(4, &[]).to_string(), "()");
        assert_eq!(perm(5, &[&[4, 5], &[1, 3]]).to_string(), "(1,3)(4,5)");
        assert_eq!(perm(4, &[&[2, 4, 3]]).to_string(), "(2,4,3)");
    }

    #[test]
    fn invalid_input() {
        assert!(Permutation::from_cycles(3, &[&[1, 4]]).is_err());
        assert!(Permutation::from_cycles(3, &[&[1, 2], &[2, 3]]).is_err());
        assert!(Permutation::from_images(vec![0, 0, 1]).is_err());
        assert!(Permutation::from_images(vec![2, 0, 1]).is_ok());
    }

    #[test]
    fn padding_with_fixed_points() {
        assert_eq!(perm(3, &[&[1, 2]]), perm(5, &[&[1, 2]]));
        assert_eq!(Permutation::identity(0), Permutation::identity(7));
    }

    #[test]
    fn identity_is_least() {
        let id = Permutation::identity(4);
        for p in [perm(4, &[&[1, 2]]), perm(4, &[&[3, 4]]), perm(4, &[&[1, 4, 2]])] {
            assert!(id < p);
        }
        assert!(perm(4, &[&[3, 4]]) < perm(4, &[&[1, 2]]));
    }
}
