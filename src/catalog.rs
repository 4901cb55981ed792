use std::fmt;
use std::str::FromStr;

use group::{GroupError, PermutationGroup};

/// A group from one of the families the driver knows how to build, written `C4`, `D5`, `A4`, `S3`
/// or `K4`. The parameter is the number of points acted on, so `D5` is the dihedral group of order
/// 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupSpec {
    Cyclic(usize),
    Dihedral(usize),
    Alternating(usize),
    Symmetric(usize),
    KleinFour,
}

impl GroupSpec {
    pub fn build(&self) -> Result<PermutationGroup, GroupError> {
        match *self {
            Self::Cyclic(n) => PermutationGroup::cyclic(n),
            Self::Dihedral(n) => PermutationGroup::dihedral(n),
            Self::Alternating(n) => PermutationGroup::alternating(n),
            Self::Symmetric(n) => PermutationGroup::symmetric(n),
            Self::KleinFour => PermutationGroup::klein_four(),
        }
    }
}

/// The groups the driver runs by default: cyclic groups of order 2 to 6, dihedral groups on 4 to 8
/// points, the alternating groups `A4` and `A5`, the symmetric groups `S3` to `S5` and the Klein
/// four group.
pub fn default_catalog() -> Vec<GroupSpec> {
    (2..=6)
        .map(GroupSpec::Cyclic)
        .chain((4..=8).map(GroupSpec::Dihedral))
        .chain((4..=5).map(GroupSpec::Alternating))
        .chain((3..=5).map(GroupSpec::Symmetric))
        .chain(std::iter::once(GroupSpec::KleinFour))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid group {0:?}; expected one of C<n>, D<n>, A<n>, S<n> or K4")]
pub struct ParseGroupSpecError(String);

impl FromStr for GroupSpec {
    type Err = ParseGroupSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("K4") {
            return Ok(Self::KleinFour);
        }
        let err = || ParseGroupSpecError(s.to_string());
        let mut chars = s.chars();
        let family = chars.next().ok_or_else(err)?;
        let n: usize = chars.as_str().parse().map_err(|_| err())?;
        match family.to_ascii_uppercase() {
            'C' => Ok(Self::Cyclic(n)),
            'D' => Ok(Self::Dihedral(n)),
            'A' => Ok(Self::Alternating(n)),
            'S' => Ok(Self::Symmetric(n)),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for GroupSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Cyclic(n) => write!(f, "C{n}"),
            Self::Dihedral(n) => write!(f, "D{n}"),
            Self::Alternating(n) => write!(f, "A{n}"),
            Self::Symmetric(n) => write!(f, "S{n}"),
            Self::KleinFour => write!(f, "K4"),
        }
    }
}
