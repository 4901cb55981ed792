use std::fmt;
use std::time::Instant;

use group::Group;
use serde::Serialize;

use crate::catalog::GroupSpec;
use crate::{Double, DoubleError, Multiplicity};

/// The outcome of checking one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupReport {
    pub spec: String,
    pub group: String,
    pub order: usize,
    pub simple_objects: usize,
    pub multiplicity_free: bool,
    /// A triple of basis indices with a fusion coefficient above 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness: Option<[usize; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplicity: Option<u32>,
    pub seconds: f64,
}

/// Builds the double of `spec` and checks whether it is multiplicity free. The reported time
/// covers both steps.
#[tracing::instrument]
pub fn analyse(spec: GroupSpec) -> Result<GroupReport, DoubleError> {
    let start = Instant::now();
    let group = spec.build()?;
    let description = group.description().to_string();
    let order = group.order();
    let double = Double::new(group)?;
    let verdict = double.multiplicity_free()?;
    let seconds = start.elapsed().as_secs_f64();
    tracing::info!(seconds, ?verdict, "checked {description}");

    let (witness, multiplicity) = match verdict {
        Multiplicity::Free => (None, None),
        Multiplicity::NotFree {
            witness: (i, j, k),
            value,
        } => (Some([i, j, k]), Some(value)),
    };
    Ok(GroupReport {
        spec: spec.to_string(),
        group: description,
        order,
        simple_objects: double.len(),
        multiplicity_free: verdict.is_free(),
        witness,
        multiplicity,
        seconds,
    })
}

impl fmt::Display for GroupReport {
    /// The two lines the driver prints for each group.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.multiplicity_free {
            writeln!(f, "{} is multiplicity free.", self.group)?;
        } else {
            writeln!(f, "{} is NOT multiplicity free.", self.group)?;
        }
        write!(
            f,
            "{} seconds is used for the above group. It has {} simple objects.",
            self.seconds, self.simple_objects
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn klein_four() {
        let mut report = analyse(GroupSpec::KleinFour).unwrap();
        report.seconds = 0.5;
        expect![[r#"
            The Klein 4 group of order 4, as a permutation group is multiplicity free.
            0.5 seconds is used for the above group. It has 16 simple objects."#]]
        .assert_eq(&report.to_string());
        expect![[r#"{"spec":"K4","group":"The Klein 4 group of order 4, as a permutation group","order":4,"simple_objects":16,"multiplicity_free":true,"seconds":0.5}"#]]
        .assert_eq(&serde_json::to_string(&report).unwrap());
    }

    #[test]
    fn invalid_group() {
        assert!(matches!(
            analyse(GroupSpec::Dihedral(2)),
            Err(DoubleError::Input(_))
        ));
    }
}
