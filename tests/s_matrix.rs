use double::catalog::GroupSpec;
use double::s_matrix::s_matrix;
use double::Double;
use group::PermutationGroup;
use rstest::rstest;

fn double(spec: &str) -> Double<PermutationGroup> {
    let spec: GroupSpec = spec.parse().unwrap();
    Double::new(spec.build().unwrap()).unwrap()
}

#[rstest]
fn symmetric(#[values("C2", "C5", "K4", "S3", "D4", "D5", "A4")] spec: &str) {
    let d = double(spec);
    for i in 0..d.len() {
        for j in 0..i {
            assert_eq!(d.s(i, j), d.s(j, i), "{spec}: S({i}, {j})");
        }
    }
}

#[rstest]
fn unit_row_is_nonzero(#[values("C2", "C6", "K4", "S3", "D4", "A4")] spec: &str) {
    let d = double(spec);
    for r in 0..d.len() {
        assert!(!d.s(0, r).is_zero(), "{spec}: S(0, {r})");
        assert!(d.s(0, r).to_rational().is_some());
    }
}

#[rstest]
fn unitary(#[values("C3", "K4", "S3", "D4")] spec: &str) {
    let d = double(spec);
    let field = d.field();
    for i in 0..d.len() {
        for j in 0..d.len() {
            let inner = (0..d.len())
                .map(|r| d.s(i, r) * &d.s(j, r).conj())
                .fold(field.zero(), |acc, x| acc + x);
            let expected = field.from_integer(i64::from(i == j));
            assert_eq!(inner, expected, "{spec}: row {i} against row {j}");
        }
    }
}

/// The class-pair counting used by `Double` agrees with the definition.
#[rstest]
fn agrees_with_definition(#[values("C4", "K4", "S3", "D4")] spec: &str) {
    let group_spec: GroupSpec = spec.parse().unwrap();
    let direct = s_matrix(&group_spec.build().unwrap()).unwrap();
    let d = double(spec);
    assert_eq!(d.s_matrix(), &direct[..]);
}

#[test]
fn deterministic() {
    let first = double("A4");
    let second = double("A4");
    assert_eq!(first.s_matrix(), second.s_matrix());
    let reps = |d: &Double<PermutationGroup>| -> Vec<String> {
        d.basis()
            .iter()
            .map(|o| format!("{} {:?}", o.rep(), o.character()))
            .collect()
    };
    assert_eq!(reps(&first), reps(&second));
}

#[test]
fn c2_entries() {
    let d = double("C2");
    let rendered: Vec<String> = d
        .s_matrix()
        .iter()
        .map(|row| row.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(" "))
        .collect();
    expect_test::expect![[r#"
        [
            "1/2 1/2 1/2 1/2",
            "1/2 1/2 -1/2 -1/2",
            "1/2 -1/2 1/2 -1/2",
            "1/2 -1/2 -1/2 1/2",
        ]
    "#]]
    .assert_debug_eq(&rendered);
}
