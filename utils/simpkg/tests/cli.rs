use assert_cmd::Command;
use predicates::prelude::*;

fn pkggen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_simh-pkggen"))
}

#[test]
fn test_writes_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("cmake")).unwrap();

    pkggen()
        .arg(dir.path())
        .args(["--sim", "i7090", "--sim", "i704"])
        .assert()
        .success()
        .stdout(predicate::str::contains("simh-packaging.cmake"));

    let text = std::fs::read_to_string(dir.path().join("cmake/simh-packaging.cmake")).unwrap();
    assert!(text.starts_with(simpkg::PREAMBLE));
    assert!(text.contains("DESCRIPTION \"IBM system simulators. Simulators: i704, i7090\""));
}

#[test]
fn test_targets_file() {
    let dir = tempfile::tempdir().unwrap();
    let targets = dir.path().join("targets.txt");
    std::fs::write(&targets, "# enumerated targets\nsel32\n\nb5500\n").unwrap();

    pkggen()
        .arg("--stdout")
        .arg("--targets")
        .arg(&targets)
        .assert()
        .success()
        .stdout(predicate::str::contains("cpack_add_component(gould_family"))
        .stdout(predicate::str::contains("cpack_add_component(b5500_family"))
        .stdout(predicate::str::contains("ibm_family").not());
}

#[test]
fn test_unknown_simulator_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("cmake")).unwrap();

    pkggen()
        .arg(dir.path())
        .args(["--sim", "nonexistent_sim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown simulator: nonexistent_sim"));

    assert!(!dir.path().join("cmake/simh-packaging.cmake").exists());
}

#[test]
fn test_missing_cmake_dir_fails() {
    let dir = tempfile::tempdir().unwrap();

    pkggen()
        .arg(dir.path())
        .args(["--sim", "b5500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write"));
}

#[test]
fn test_custom_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("families.yaml");
    std::fs::write(
        &config,
        "families:\n  - token: altair_family\n    displayName: Altair\n    description: MITS Altair\nsimulators:\n  - name: altair\n    family: altair_family\n",
    )
    .unwrap();

    pkggen()
        .arg("--stdout")
        .arg("--config")
        .arg(&config)
        .args(["--sim", "altair"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DESCRIPTION \"MITS Altair. Simulators: altair\"",
        ));
}

#[test]
fn test_list_families() {
    pkggen()
        .arg("--list-families")
        .assert()
        .success()
        .stdout(predicate::str::contains("ibm_family (IBM)\n  - i701\n"))
        .stdout(predicate::str::contains("default_family ("));
}
