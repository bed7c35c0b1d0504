use assert_cmd::Command;

mod common;

fn write_fixture(dir: &std::path::Path, index: &str) -> (std::path::PathBuf, std::path::PathBuf) {
    let atlas_path = dir.join("sprite.png");
    let index_path = dir.join("sprite.json");
    common::write_atlas_png(&atlas_path, 16, 16);
    std::fs::write(&index_path, index).expect("write index json");
    (atlas_path, index_path)
}

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("spritepack").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("spritepack").unwrap();
    cmd.arg("-V");
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("spritepack"));
}

// Inspect subcommand tests

#[test]
fn inspect_valid_atlas_succeeds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (atlas, index) = write_fixture(
        dir.path(),
        r#"{"airport": {"x": 0, "y": 0, "width": 8, "height": 8}}"#,
    );

    let mut cmd = Command::cargo_bin("spritepack").unwrap();
    cmd.arg("inspect").arg(&atlas).arg(&index);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("airport"))
        .stdout(predicates::str::contains("no issues found"));
}

#[test]
fn inspect_reports_atlas_dimensions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (atlas, index) = write_fixture(dir.path(), "{}");

    let mut cmd = Command::cargo_bin("spritepack").unwrap();
    cmd.arg("inspect").arg(&atlas).arg(&index);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("16x16 px"));
}

#[test]
fn inspect_fails_on_dropped_sprites() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (atlas, index) = write_fixture(
        dir.path(),
        r#"{"huge": {"x": 0, "y": 0, "width": 2000, "height": 2000}}"#,
    );

    let mut cmd = Command::cargo_bin("spritepack").unwrap();
    cmd.arg("inspect").arg(&atlas).arg(&index);
    cmd.assert()
        .failure()
        .stdout(predicates::str::contains("InvalidSpriteWidth"));
}

#[test]
fn inspect_fails_on_array_root() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (atlas, index) = write_fixture(dir.path(), "[]");

    let mut cmd = Command::cargo_bin("spritepack").unwrap();
    cmd.arg("inspect").arg(&atlas).arg(&index);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("must be a JSON object"));
}

#[test]
fn inspect_strict_escalates_warnings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let index = r#"{"icon": {"x": 0, "y": 0, "width": 4, "height": 4, "sdf": 1}}"#;
    let (atlas, index) = write_fixture(dir.path(), index);

    let mut cmd = Command::cargo_bin("spritepack").unwrap();
    cmd.arg("inspect").arg(&atlas).arg(&index);
    cmd.assert().success();

    let mut strict = Command::cargo_bin("spritepack").unwrap();
    strict.args(["inspect", "--strict"]).arg(&atlas).arg(&index);
    strict
        .assert()
        .failure()
        .stderr(predicates::str::contains("warning(s)"));
}

#[test]
fn inspect_json_output_format() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (atlas, index) = write_fixture(
        dir.path(),
        r#"{"airport": {"x": 0, "y": 0, "width": 8, "height": 8, "pixelRatio": 2}}"#,
    );

    let mut cmd = Command::cargo_bin("spritepack").unwrap();
    cmd.args(["inspect", "--output", "json"]).arg(&atlas).arg(&index);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"sprites\""))
        .stdout(predicates::str::contains("\"error_count\": 0"));
}
