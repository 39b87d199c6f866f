use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("export-versioner").unwrap();
    cmd.env_remove("EXPORT_VERSIONER_PROFILE")
        .env_remove("EXPORT_VERSIONER_PROJECT")
        .env("NO_COLOR", "1");
    cmd
}

fn create_exports(dir: &std::path::Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), "").unwrap();
    }
}

#[test]
fn test_help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("next versioned filename"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_export_dir() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_next_latin_version() {
    let dir = tempdir().unwrap();
    create_exports(
        dir.path(),
        &["Promo_10mbps_V1.mp4", "Promo_10mbps_V3.mp4", "Promo_10mbps_V2.mp4"],
    );

    cmd()
        .args(["--profile", "10mbps", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Previous file:    Promo_10mbps_V3.mp4"))
        .stdout(predicate::str::contains("New filename:     Promo_10mbps_V4.mp4"));
}

#[test]
fn test_name_only_output() {
    let dir = tempdir().unwrap();
    create_exports(dir.path(), &["宣传片_2025-08-19_V2.mp4"]);

    cmd()
        .args(["--name-only", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("宣传片_10mbps_V3.mp4\n");
}

#[test]
fn test_empty_directory_uses_project_label() {
    let dir = tempdir().unwrap();

    cmd()
        .args([
            "--name-only",
            "--profile",
            "prores422",
            "--project",
            "夏日宣传片",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("夏日宣传片_prores422_V1.mov\n");
}

#[test]
fn test_project_file_path_is_cleaned() {
    let dir = tempdir().unwrap();

    cmd()
        .args([
            "--name-only",
            "--project",
            "/work/夏日宣传片_2025-08-19.prproj",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("夏日宣传片_10mbps_V1.mp4\n");
}

#[test]
fn test_default_label_without_project() {
    let dir = tempdir().unwrap();
    create_exports(dir.path(), &["draft_final.mp4"]);

    cmd()
        .args(["--name-only", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("导出_10mbps_V1.mp4\n");
}

#[test]
fn test_name_override_for_first_export() {
    let dir = tempdir().unwrap();

    cmd()
        .args(["--name-only", "--name", "Teaser", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("Teaser_10mbps_V1.mp4\n");
}

#[test]
fn test_profile_from_environment() {
    let dir = tempdir().unwrap();
    create_exports(dir.path(), &["Promo_10mbps_V1.mp4"]);

    cmd()
        .env("EXPORT_VERSIONER_PROFILE", "48mbps")
        .args(["--name-only", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("Promo_48mbps_V2.mp4\n");
}

#[test]
fn test_profile_flag_overrides_environment() {
    let dir = tempdir().unwrap();
    create_exports(dir.path(), &["Promo_10mbps_V1.mp4"]);

    cmd()
        .env("EXPORT_VERSIONER_PROFILE", "48mbps")
        .args(["--name-only", "-p", "prores444", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("Promo_prores444_V2.mov\n");
}

#[test]
fn test_ordinal_versions() {
    let dir = tempdir().unwrap();
    create_exports(dir.path(), &["宣传片_第一版.mp4", "宣传片_第二版.mp4"]);

    cmd()
        .args(["--name-only", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("宣传片_10mbps_第三版.mp4\n");
}

#[test]
fn test_nested_exports_are_scanned() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("archive");
    std::fs::create_dir(&nested).unwrap();
    create_exports(&nested, &["Promo_10mbps_V5.mp4"]);
    create_exports(dir.path(), &["Promo_10mbps_V2.mp4", "Promo_V9.txt"]);

    cmd()
        .args(["--name-only", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("Promo_10mbps_V6.mp4\n");
}

#[test]
fn test_json_output() {
    let dir = tempdir().unwrap();
    create_exports(dir.path(), &["Promo_10mbps_V3.mp4"]);

    cmd()
        .args(["--json", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"next_version_number\": 4"))
        .stdout(predicate::str::contains("\"final_filename\": \"Promo_10mbps_V4.mp4\""));
}

#[test]
fn test_json_conflicts_with_name_only() {
    let dir = tempdir().unwrap();

    cmd()
        .args(["--json", "--name-only", dir.path().to_str().unwrap()])
        .assert()
        .code(2);
}

#[test]
fn test_verbose_flag() {
    let dir = tempdir().unwrap();
    create_exports(dir.path(), &["Promo_V1.mp4"]);

    cmd()
        .args(["-v", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Latest version detected"));
}

#[test]
fn test_does_not_modify_directory() {
    let dir = tempdir().unwrap();
    create_exports(dir.path(), &["Promo_V1.mp4"]);

    cmd().arg(dir.path().to_str().unwrap()).assert().success();

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert!(dir.path().join("Promo_V1.mp4").exists());
}

#[test]
fn test_nonexistent_directory() {
    cmd()
        .arg("/nonexistent/path")
        .assert()
        .code(3) // ExitCode::DirectoryNotFound
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_empty_export_dir() {
    cmd()
        .arg("")
        .assert()
        .code(4) // ExitCode::ResolutionFailed
        .stderr(predicate::str::contains("empty export directory"));
}

#[test]
fn test_file_instead_of_directory() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("Promo_V1.mp4");
    std::fs::write(&file_path, "").unwrap();

    Command::cargo_bin("export-versioner")
        .unwrap()
        .arg(file_path.to_str().unwrap())
        .assert()
        .code(3) // ExitCode::DirectoryNotFound (NotADirectory maps to same code)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_blank_profile_rejected() {
    let dir = tempdir().unwrap();

    cmd()
        .args(["--profile", " ", dir.path().to_str().unwrap()])
        .assert()
        .code(2) // ExitCode::InvalidArguments
        .stderr(predicate::str::contains("Known profiles"));
}
