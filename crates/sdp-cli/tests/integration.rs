use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sdp(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sdp").unwrap();
    cmd.current_dir(dir.path()).env("SDP_ROOT", dir.path());
    cmd
}

// ---------------------------------------------------------------------------
// help / version / unknown command
// ---------------------------------------------------------------------------

#[test]
fn no_arguments_shows_usage() {
    let dir = TempDir::new().unwrap();
    sdp(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    sdp(&dir)
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    sdp(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("spec-driven-planning"));
}

#[test]
fn unknown_command_exits_one() {
    let dir = TempDir::new().unwrap();
    sdp(&dir)
        .arg("bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn version_flag_not_recognized_after_subcommand() {
    let dir = TempDir::new().unwrap();
    sdp(&dir).args(["init", "-v"]).assert().failure();
    assert!(!dir.path().join(".sdp").exists());
}

// ---------------------------------------------------------------------------
// sdp init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_directory_tree() {
    let dir = TempDir::new().unwrap();
    sdp(&dir).arg("init").assert().success();

    assert!(dir.path().join(".claude/commands/sdp/steering.md").exists());
    assert!(dir.path().join(".claude/commands/sdp/requirement.md").exists());
    assert!(dir.path().join(".claude/commands/sdp/export-issues.md").exists());
    assert!(dir.path().join(".sdp/config/export.yml").exists());
    assert!(dir.path().join(".sdp/templates/requirement.md").exists());
    assert!(dir.path().join(".sdp/specs").is_dir());
    assert!(dir.path().join(".sdp/out").is_dir());
    assert!(dir.path().join("CLAUDE.md").exists());

    let lang = std::fs::read_to_string(dir.path().join(".sdp/config/language.yml")).unwrap();
    assert!(lang.contains("language: en"));

    let gitignore = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
    assert!(gitignore.lines().any(|l| l == ".sdp/"));
}

#[test]
fn init_lang_ja() {
    let dir = TempDir::new().unwrap();
    sdp(&dir).args(["init", "--lang", "ja"]).assert().success();

    let lang = std::fs::read_to_string(dir.path().join(".sdp/config/language.yml")).unwrap();
    assert!(lang.contains("language: ja"));
}

#[test]
fn init_lang_without_value_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    sdp(&dir).args(["init", "--lang"]).assert().success();

    let lang = std::fs::read_to_string(dir.path().join(".sdp/config/language.yml")).unwrap();
    assert!(lang.contains("language: en"));
}

#[test]
fn init_invalid_lang_fails_without_writes() {
    let dir = TempDir::new().unwrap();
    sdp(&dir)
        .args(["init", "--lang", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language"));

    assert!(!dir.path().join(".claude").exists());
    assert!(!dir.path().join(".sdp").exists());
    assert!(!dir.path().join("CLAUDE.md").exists());
}

#[test]
fn init_codex_is_exclusive() {
    let dir = TempDir::new().unwrap();
    sdp(&dir).args(["init", "--codex"]).assert().success();

    assert!(dir.path().join(".codex/prompts/sdp-steering.md").exists());
    assert!(!dir.path().join(".claude").exists());
    assert!(dir.path().join(".sdp/config/export.yml").exists());
}

// ---------------------------------------------------------------------------
// overwrite guard
// ---------------------------------------------------------------------------

#[test]
fn init_declined_overwrite_is_a_clean_noop() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".claude")).unwrap();
    std::fs::write(dir.path().join(".claude/foo.txt"), "precious").unwrap();

    sdp(&dir)
        .arg("init")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cancelled"));

    assert_eq!(
        std::fs::read_to_string(dir.path().join(".claude/foo.txt")).unwrap(),
        "precious"
    );
    assert!(!dir.path().join(".sdp/config/language.yml").exists());
    assert!(!dir.path().join("CLAUDE.md").exists());
}

#[test]
fn init_empty_answer_declines() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".claude")).unwrap();

    sdp(&dir)
        .arg("init")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cancelled"));

    assert!(!dir.path().join(".sdp").exists());
}

#[test]
fn init_affirmed_rerun_is_idempotent() {
    let dir = TempDir::new().unwrap();
    sdp(&dir).arg("init").assert().success();
    std::fs::write(dir.path().join(".claude/extra.txt"), "stale").unwrap();

    sdp(&dir).arg("init").write_stdin("y\n").assert().success();

    // The command directory is replaced wholesale, not merged.
    assert!(!dir.path().join(".claude/extra.txt").exists());
    assert!(dir.path().join(".claude/commands/sdp/steering.md").exists());

    let gitignore = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
    assert_eq!(gitignore.lines().filter(|l| *l == ".sdp/").count(), 1);
}

#[test]
fn init_backs_up_existing_guidance() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("CLAUDE.md"), "my own notes").unwrap();

    sdp(&dir).arg("init").assert().success();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("CLAUDE.md.backup")).unwrap(),
        "my own notes"
    );
    let content = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    assert!(content.contains("Spec-Driven Planning"));
}
