use std::process::Command;

fn run(groups: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_double"))
        .env("DOUBLE_GROUPS", groups)
        .env_remove("DOUBLE_JSON")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn prints_verdicts() {
    let output = run("S3,A4");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "Symmetric group of order 3! as a permutation group is multiplicity free."
    );
    assert!(lines[1].ends_with(" seconds is used for the above group. It has 8 simple objects."));
    assert_eq!(lines[2], "");
    assert_eq!(
        lines[3],
        "Alternating group of order 4!/2 as a permutation group is NOT multiplicity free."
    );
    assert!(lines[4].ends_with("It has 14 simple objects."));
    assert_eq!(lines[5], "");
}

#[test]
fn json_summary() {
    let output = Command::new(env!("CARGO_BIN_EXE_double"))
        .env("DOUBLE_GROUPS", "C2")
        .env("DOUBLE_JSON", "1")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(json["spec"], "C2");
    assert_eq!(json["simple_objects"], 4);
    assert_eq!(json["multiplicity_free"], true);
}

#[test]
fn failing_group_sets_exit_status() {
    let output = run("D2,S3");
    assert!(!output.status.success());
    // The remaining groups are still checked.
    let stdout = String::from_utf8(output.stdout).unwrap();
    let s3 = "Symmetric group of order 3! as a permutation group";
    assert!(stdout.contains(&format!("{s3} is multiplicity free.")));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("dihedral group"));
}

#[test]
fn unknown_group() {
    let output = run("Q8");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
