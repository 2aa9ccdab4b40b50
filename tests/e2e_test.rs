use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated `$HOME` and project directory for one binary invocation.
struct TestContext {
    root: TempDir,
}

impl TestContext {
    fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir(root.path().join("home")).unwrap();
        fs::create_dir(root.path().join("project")).unwrap();
        Self { root }
    }

    fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    fn project(&self) -> PathBuf {
        self.root.path().join("project")
    }

    fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("new-component").expect("Failed to locate binary");
        cmd.current_dir(self.project()).env("HOME", self.home()).env("NO_COLOR", "1");
        cmd
    }
}

fn count_entries(dir: &Path) -> usize {
    if !dir.exists() {
        return 0;
    }
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn creates_flat_typescript_component() {
    let ctx = TestContext::new();
    fs::create_dir(ctx.project().join("src")).unwrap();

    ctx.cli()
        .arg("Button")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating the Button component"))
        .stdout(predicate::str::contains("Component created!"));

    let component = ctx.project().join("src/components/Button.tsx");
    let content = fs::read_to_string(component).unwrap();
    assert!(content.contains("function Button("));
    assert!(content.contains("ButtonProps"));
    assert!(!content.contains("COMPONENT_NAME"));
    assert_eq!(count_entries(&ctx.project().join("src/components")), 1);
}

#[test]
fn creates_barrel_javascript_component() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--lang", "JS", "--dir", "ui", "--barrel", "Card"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory created."))
        .stdout(predicate::str::contains("Index file built and saved to"));

    let target = ctx.project().join("ui/Card");
    assert_eq!(count_entries(&target), 2);
    let component = fs::read_to_string(target.join("Card.tsx")).unwrap();
    assert!(!component.contains("Props"));
    assert_eq!(
        fs::read_to_string(target.join("index.ts")).unwrap(),
        "export * from './Card';\nexport { default } from './Card';\n"
    );
}

#[test]
fn second_run_fails_with_collision() {
    let ctx = TestContext::new();

    ctx.cli().args(["-d", "components", "Modal"]).assert().success();
    let written = ctx.project().join("components/Modal.tsx");
    let before = fs::read_to_string(&written).unwrap();

    ctx.cli()
        .args(["-d", "components", "Modal"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&written).unwrap(), before);
    assert_eq!(count_entries(&ctx.project().join("components")), 1);
}

#[test]
fn missing_name_exits_with_failure() {
    let ctx = TestContext::new();

    ctx.cli()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("you need to specify a name"));

    assert_eq!(count_entries(&ctx.project()), 0);
}

#[test]
fn override_files_are_layered() {
    let ctx = TestContext::new();
    fs::write(ctx.home().join(".new-component-config.json"), r#"{"dir": "A"}"#).unwrap();
    fs::write(ctx.project().join(".new-component-config.json"), r#"{"dir": "B", "lang": "js"}"#)
        .unwrap();

    ctx.cli().arg("Widget").assert().success().stdout(predicate::str::contains("JavaScript"));

    assert!(ctx.project().join("B/Widget.tsx").is_file());
    assert!(!ctx.project().join("A").exists());
}

#[test]
fn invalid_language_is_a_usage_error() {
    let ctx = TestContext::new();

    ctx.cli().args(["-l", "python", "Widget"]).assert().failure();
    assert_eq!(count_entries(&ctx.project()), 0);
}

#[test]
fn prints_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
