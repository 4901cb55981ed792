use double::catalog::GroupSpec;
use double::{Double, Multiplicity};
use expect_test::expect;
use itertools::Itertools;

fn verdict(spec: &str) -> String {
    let spec: GroupSpec = spec.parse().unwrap();
    let d = Double::new(spec.build().unwrap()).unwrap();
    let verdict = match d.multiplicity_free().unwrap() {
        Multiplicity::Free => "multiplicity free",
        Multiplicity::NotFree { .. } => "NOT multiplicity free",
    };
    format!("{spec}: {} simple objects, {verdict}", d.len())
}

#[test]
fn verdicts() {
    expect![[r#"
        C3: 9 simple objects, multiplicity free
        K4: 16 simple objects, multiplicity free
        S3: 8 simple objects, multiplicity free
        A4: 14 simple objects, NOT multiplicity free
        A5: 22 simple objects, NOT multiplicity free"#]]
    .assert_eq(&["C3", "K4", "S3", "A4", "A5"].map(verdict).iter().join("\n"));
}

/// In `D(A4)` the three dimensional representation of `A4` contains itself twice in its square.
#[test]
fn a4_witness() {
    let d = Double::new(GroupSpec::Alternating(4).build().unwrap()).unwrap();
    let three = d
        .basis()
        .iter()
        .position(|o| o.index() < 4 && o.character().degree() == 3)
        .unwrap();
    assert_eq!(d.dual(three), three);
    assert_eq!(d.n_ijk(three, three, 0).unwrap(), 1);
    assert_eq!(d.n_ijk(three, three, three).unwrap(), 2);
}
