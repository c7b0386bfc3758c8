use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn run_help_lists_its_options() {
    let mut cmd = cargo_bin_cmd!("reverie-ctl");
    let output = cmd
        .arg("run")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("--manifest"), "run help missing --manifest");
    assert!(text.contains("--script"), "run help missing --script");
    assert!(
        text.contains("--manual-settle"),
        "run help missing --manual-settle"
    );
    assert!(
        text.contains("REVERIE_MANIFEST"),
        "run help should mention the env fallback"
    );
}

#[test]
fn top_level_help_lists_subcommands() {
    let mut cmd = cargo_bin_cmd!("reverie-ctl");
    let out = cmd.arg("--help").assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("run"), "help missing run");
    assert!(text.contains("inspect"), "help missing inspect");
}
