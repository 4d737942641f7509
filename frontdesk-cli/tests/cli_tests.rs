//! End-to-end tests for the `frontdesk` binary with `HOME` pointed at a
//! throwaway directory.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use image::{ImageFormat, Rgb, RgbImage};
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn frontdesk_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("frontdesk"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn register(home: &Path, name: &str, email: &str) -> Command {
    let mut cmd = frontdesk_cmd(home);
    cmd.args([
        "register",
        "--name",
        name,
        "--gender",
        "female",
        "--email",
        email,
        "--contact",
        "54321",
        "--host",
        "Front Office",
        "--company",
        "Globex",
        "--country",
        "Canada",
    ]);
    cmd
}

fn write_png(dir: &Path, file_name: &str) -> PathBuf {
    let img = RgbImage::from_pixel(64, 32, Rgb([0, 128, 0]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).expect("encode fixture");
    let path = dir.join(file_name);
    fs::write(&path, out.into_inner()).expect("write fixture");
    path
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_config_database_and_images_dir() {
    let home = TempDir::new().expect("home");
    frontdesk_cmd(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Wrote config"));

    let root = home.path().join(".frontdesk");
    assert!(root.join("config.yaml").exists());
    assert!(root.join("visitors.db").exists());
    assert!(root.join("images").is_dir());

    frontdesk_cmd(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Using existing config"));
}

// ---------------------------------------------------------------------------
// register
// ---------------------------------------------------------------------------

#[test]
fn register_then_list_shows_visitor() {
    let home = TempDir::new().expect("home");
    register(home.path(), "Jane Smith", "jane@globex.ca")
        .assert()
        .success()
        .stdout(contains("Visitor registered successfully"));

    frontdesk_cmd(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Jane Smith").and(contains("jane@globex.ca")).and(contains("Female")));
}

#[test]
fn list_json_reports_count_and_omits_missing_image() {
    let home = TempDir::new().expect("home");
    register(home.path(), "A", "a@b").assert().success();
    register(home.path(), "B", "b@c").assert().success();

    let assert = frontdesk_cmd(home.path()).args(["list", "--json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["count"], 2);
    assert_eq!(json["visitors"][0]["email"], "a@b");
    assert!(json["visitors"][0].get("image_name").is_none());
}

#[test]
fn empty_directory_says_so() {
    let home = TempDir::new().expect("home");
    frontdesk_cmd(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No visitors registered."));
}

#[test]
fn duplicate_email_is_rejected() {
    let home = TempDir::new().expect("home");
    register(home.path(), "First", "dup@x.com").assert().success();
    register(home.path(), "Second", "dup@x.com")
        .assert()
        .failure()
        .stderr(contains("Duplicate email."));

    let assert = frontdesk_cmd(home.path()).args(["list", "--json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["count"], 1);
}

#[test]
fn invalid_email_is_reported() {
    let home = TempDir::new().expect("home");
    register(home.path(), "X", "not-an-email")
        .assert()
        .failure()
        .stderr(contains("Invalid Email."));
}

#[test]
fn rejected_form_leaves_a_fresh_home_untouched() {
    let home = TempDir::new().expect("home");
    register(home.path(), "X", "not-an-email").assert().failure();
    frontdesk_cmd(home.path())
        .args(["register", "--email", "a@b", "--contact", "12345"])
        .assert()
        .failure();

    assert!(!home.path().join(".frontdesk").exists());
}

#[test]
fn missing_fields_are_reported() {
    let home = TempDir::new().expect("home");
    frontdesk_cmd(home.path())
        .args(["register", "--email", "a@b", "--contact", "12345"])
        .assert()
        .failure()
        .stderr(contains("One or more fields are empty").and(contains("name")));
}

#[test]
fn unknown_gender_is_a_usage_error() {
    let home = TempDir::new().expect("home");
    frontdesk_cmd(home.path())
        .args(["register", "--gender", "robot"])
        .assert()
        .failure()
        .stderr(contains("unknown gender"));
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

#[test]
fn search_matches_name_or_email() {
    let home = TempDir::new().expect("home");
    register(home.path(), "John Smith", "john@acme.com").assert().success();
    register(home.path(), "Jane Doe", "jane.smith@corp.io").assert().success();
    register(home.path(), "Bob Stone", "bob@stone.dev").assert().success();

    frontdesk_cmd(home.path())
        .args(["search", "smith"])
        .assert()
        .success()
        .stdout(
            contains("John Smith")
                .and(contains("Jane Doe"))
                .and(contains("Bob Stone").not()),
        );

    frontdesk_cmd(home.path())
        .args(["search", "zzz"])
        .assert()
        .success()
        .stdout(contains("No visitors match 'zzz'."));
}

// ---------------------------------------------------------------------------
// photo
// ---------------------------------------------------------------------------

#[test]
fn photo_is_stored_under_email_and_resolvable() {
    let home = TempDir::new().expect("home");
    let uploads = TempDir::new().expect("uploads");
    let photo = write_png(uploads.path(), "portrait.png");

    register(home.path(), "Pic", "a@b.com")
        .arg("--photo")
        .arg(&photo)
        .assert()
        .success()
        .stdout(contains("a@b.com.png"));

    let stored = home.path().join(".frontdesk").join("images").join("a@b.com.png");
    assert!(stored.exists());

    frontdesk_cmd(home.path())
        .args(["photo", "1"])
        .assert()
        .success()
        .stdout(contains("a@b.com.png"));
}

#[test]
fn photo_states_are_distinct() {
    let home = TempDir::new().expect("home");
    let uploads = TempDir::new().expect("uploads");
    let photo = write_png(uploads.path(), "p.png");

    register(home.path(), "Plain", "plain@x").assert().success();
    register(home.path(), "Pic", "pic@x").arg("--photo").arg(&photo).assert().success();
    fs::remove_file(home.path().join(".frontdesk").join("images").join("pic@x.png"))
        .expect("delete photo");

    frontdesk_cmd(home.path())
        .args(["photo", "1"])
        .assert()
        .success()
        .stdout(contains("No image attached."));

    frontdesk_cmd(home.path())
        .args(["photo", "2"])
        .assert()
        .failure()
        .stderr(contains("Either image has been deleted or not found."));

    frontdesk_cmd(home.path())
        .args(["photo", "99"])
        .assert()
        .failure()
        .stderr(contains("no visitor with id 99"));
}

#[test]
fn photo_without_extension_is_rejected_before_registering() {
    let home = TempDir::new().expect("home");
    let uploads = TempDir::new().expect("uploads");
    let photo = write_png(uploads.path(), "noext");

    register(home.path(), "X", "x@y")
        .arg("--photo")
        .arg(&photo)
        .assert()
        .failure()
        .stderr(contains("has no file extension"));

    frontdesk_cmd(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No visitors registered."));
}
