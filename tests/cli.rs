use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pixelspace_cmd() -> Command {
    Command::cargo_bin("pixelspace").expect("binary exists")
}

#[test]
fn pixelspace_help_prints_usage() {
    pixelspace_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Render 2D vector drawing scenes to PNG",
        ));
}

#[test]
fn list_scenes_prints_demo_names() {
    pixelspace_cmd()
        .arg("--list-scenes")
        .assert()
        .success()
        .stdout(predicate::str::contains("drawing").and(predicate::str::contains("grids")));
}

#[test]
fn render_requires_output() {
    pixelspace_cmd()
        .args(["--scene", "grids"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn unknown_scene_is_rejected() {
    let temp = TempDir::new().unwrap();
    pixelspace_cmd()
        .args(["--scene", "teapot", "--output"])
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn renders_grids_with_config_overrides() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "[output]\nwidth = 64\nheight = 48\n").unwrap();
    let output = temp.path().join("grids.png");

    pixelspace_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--scene", "grids", "--frames", "3", "--output"])
        .arg(&output)
        .assert()
        .success();

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn non_positive_size_fails() {
    let temp = TempDir::new().unwrap();
    pixelspace_cmd()
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .args(["--width", "0", "--output"])
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Surface size must be positive"));
}

#[test]
fn init_config_writes_example_into_config_home() {
    let temp = TempDir::new().unwrap();
    pixelspace_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(temp.path().join("pixelspace").join("config.toml").exists());
}
