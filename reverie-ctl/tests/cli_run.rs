use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const PAGE: &str = r#"
[viewport]
width = 1122.0

[[items]]
label = "m0"
width = 300.0
[[items]]
label = "m1"
width = 300.0
[[items]]
label = "m2"
width = 300.0
[[items]]
label = "m3"
width = 300.0
[[items]]
label = "m4"
width = 300.0
[[items]]
label = "m5"
width = 300.0
[[items]]
label = "m6"
width = 300.0
[[items]]
label = "m7"
width = 300.0
[[items]]
label = "m8"
width = 300.0
[[items]]
label = "Summer Rain"
width = 300.0

[[tracks]]
id = "abc"

[[tracks]]
id = "gone"
available = false

[surprise]
"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn five_steps_forward_from_mount() {
    let dir = TempDir::new().unwrap();
    let manifest = write(&dir, "page.toml", PAGE);
    let script = write(&dir, "steps.txt", "next\nnext\nnext\nnext\nnext\nstatus\n");

    cargo_bin_cmd!("reverie-ctl")
        .env_remove("RUST_LOG")
        .arg("run")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mounted carousel: 10 items, 4 clones per side, slot 4",
        ))
        .stdout(predicate::str::contains(
            "render translateX(-1320px) transition=none",
        ))
        .stdout(predicate::str::contains(
            "carousel: slot 9 \"m5\", offset 2970px, idle, 0 queued",
        ));
}

#[test]
fn wrapping_backward_rebases_onto_the_last_original() {
    let dir = TempDir::new().unwrap();
    let manifest = write(&dir, "page.toml", PAGE);

    cargo_bin_cmd!("reverie-ctl")
        .env_remove("RUST_LOG")
        .args(["run", "--manifest"])
        .arg(&manifest)
        .write_stdin("prev\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("moving to slot 3"))
        .stdout(predicate::str::contains(
            "render translateX(-4290px) transition=none",
        ))
        .stdout(predicate::str::contains(
            "settled at slot 13 \"Summer Rain\", rebased",
        ));
}

#[test]
fn search_misses_and_hits() {
    let dir = TempDir::new().unwrap();
    let manifest = write(&dir, "page.toml", PAGE);

    cargo_bin_cmd!("reverie-ctl")
        .env_remove("RUST_LOG")
        .args(["run", "--manifest"])
        .arg(&manifest)
        .write_stdin("search   \nsearch nowhere\nsearch  summer RAIN \n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "notice: Please enter a memory or wish to search!",
        ))
        .stdout(predicate::str::contains(
            "notice: Memory not found! Try another one.",
        ))
        .stdout(predicate::str::contains("settled at slot 13 \"Summer Rain\""));
}

#[test]
fn media_and_surprise_commands() {
    let dir = TempDir::new().unwrap();
    let manifest = write(&dir, "page.toml", PAGE);
    let script = "\
# before the API is ready
play abc
api-ready
play abc
player-error gone 150
pause nope
open
click-content
shake 14 -8 9.8
shake 14 -8 9.8
shake 14 -8 9.8
shake 14 -8 9.8
shake 14 -8 9.8
status
";

    cargo_bin_cmd!("reverie-ctl")
        .env_remove("RUST_LOG")
        .args(["run", "--manifest"])
        .arg(&manifest)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "notice: Cannot play video abc. Please try the external link.",
        ))
        .stdout(predicate::str::contains("api ready: 1 players created"))
        .stdout(predicate::str::contains("video abc: playing"))
        .stdout(predicate::str::contains(
            "notice: Video gone is unavailable. Please try the external link.",
        ))
        .stdout(predicate::str::contains("dialog open, message revealed"))
        .stdout(predicate::str::contains(
            "surprise: open, message revealed, hint hidden, shakes 0",
        ))
        .stdout(predicate::str::contains("media: api ready, 1/2 players"));
}

#[test]
fn unparsable_lines_fail_the_run_after_finishing() {
    let dir = TempDir::new().unwrap();
    let manifest = write(&dir, "page.toml", PAGE);

    cargo_bin_cmd!("reverie-ctl")
        .env_remove("RUST_LOG")
        .args(["run", "--manifest"])
        .arg(&manifest)
        .write_stdin("next\njump 4\nstatus\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("! line 2: unknown command `jump`"))
        .stdout(predicate::str::contains("carousel: slot 5"))
        .stderr(predicate::str::contains("could not be parsed"));
}

#[test]
fn page_without_viewport_keeps_other_features() {
    let dir = TempDir::new().unwrap();
    let manifest = write(
        &dir,
        "page.toml",
        "[[items]]\nlabel = \"m0\"\nwidth = 300.0\n\n[surprise]\n",
    );

    cargo_bin_cmd!("reverie-ctl")
        .env_remove("RUST_LOG")
        .args(["run", "--manifest"])
        .arg(&manifest)
        .write_stdin("next\nopen\nclick-message\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("carousel inactive"))
        .stdout(predicate::str::contains("dialog open, message revealed"));
}

#[test]
fn inspect_reads_manifest_from_env() {
    let dir = TempDir::new().unwrap();
    let manifest = write(&dir, "page.toml", PAGE);

    cargo_bin_cmd!("reverie-ctl")
        .env_remove("RUST_LOG")
        .env("REVERIE_MANIFEST", &manifest)
        .arg("inspect")
        .assert()
        .success()
        .stdout(predicate::str::contains("initial: slot 4, offset 1320px"))
        .stdout(predicate::str::contains(
            "layout: 6 7 8 9 | 0 1 2 3 4 5 6 7 8 9 | 0 1 2 3",
        ))
        .stdout(predicate::str::contains("tracks: 2 (1 unavailable)"));
}

#[test]
fn missing_manifest_is_reported() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("reverie-ctl")
        .env_remove("RUST_LOG")
        .env_remove("REVERIE_MANIFEST")
        .arg("inspect")
        .arg("--manifest")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read manifest"));
}

#[test]
fn invalid_busy_policy_is_rejected() {
    let dir = TempDir::new().unwrap();
    let manifest = write(
        &dir,
        "page.toml",
        "[carousel]\nbusy_policy = \"sometimes\"\n",
    );

    cargo_bin_cmd!("reverie-ctl")
        .env_remove("RUST_LOG")
        .args(["run", "--manifest"])
        .arg(&manifest)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("manifest does not describe a valid page"));
}

#[test]
fn oversized_viewport_leaves_the_carousel_inactive() {
    let dir = TempDir::new().unwrap();
    let manifest = write(
        &dir,
        "page.toml",
        "[viewport]\nwidth = 3.0e38\n\n[[items]]\nlabel = \"a\"\nwidth = 300.0\n\n[surprise]\n",
    );

    cargo_bin_cmd!("reverie-ctl")
        .env_remove("RUST_LOG")
        .args(["inspect", "--manifest"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("carousel: inactive (viewport width"))
        .stdout(predicate::str::contains("fits more than 1024 items)"));

    cargo_bin_cmd!("reverie-ctl")
        .env_remove("RUST_LOG")
        .args(["run", "--manifest"])
        .arg(&manifest)
        .write_stdin("next\nopen\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("carousel inactive"))
        .stdout(predicate::str::contains("dialog open, message blurred"));
}

#[test]
fn stalled_player_reports_cannot_play() {
    let dir = TempDir::new().unwrap();
    let manifest = write(
        &dir,
        "page.toml",
        "[[tracks]]\nid = \"stuck\"\nplayable = false\n",
    );

    cargo_bin_cmd!("reverie-ctl")
        .env_remove("RUST_LOG")
        .args(["run", "--manifest"])
        .arg(&manifest)
        .write_stdin("api-ready\nplay stuck\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("api ready: 1 players created"))
        .stdout(predicate::str::contains("video stuck: not playing"))
        .stdout(predicate::str::contains(
            "notice: Cannot play video stuck. Please try the external link.",
        ));
}

#[test]
fn signed_steps_wrap_around() {
    let dir = TempDir::new().unwrap();
    let manifest = write(&dir, "page.toml", PAGE);

    cargo_bin_cmd!("reverie-ctl")
        .env_remove("RUST_LOG")
        .args(["run", "--manifest"])
        .arg(&manifest)
        .write_stdin("step -1\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "settled at slot 13 \"Summer Rain\", rebased",
        ));
}
