//! Runs the built binary against an isolated workspace and checks exit codes,
//! stdout, and files on disk.

mod support;

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use support::Workspace;

const ISOLATED_ENV: &[&str] = &[
    "BASE16_SWITCHER_CONFIG",
    "BASE16_SWITCHER_THEME_DIR",
    "BASE16_SWITCHER_LOG",
];

fn command(ws: &Workspace) -> Command {
    command_with_config(ws, &ws.settings_path)
}

fn command_with_config(ws: &Workspace, config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_base16-switcher"));
    for name in ISOLATED_ENV {
        cmd.env_remove(name);
    }
    cmd.env("HOME", ws.dir.path())
        .env("XDG_CONFIG_HOME", ws.dir.child("xdg"))
        .arg("--no-color")
        .arg("-c")
        .arg(config)
        .arg("-l")
        .arg(ws.dir.child("logs/latest.log"));
    cmd
}

fn run(ws: &Workspace, args: &[&str]) -> Output {
    command(ws)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("run base16-switcher")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn partial_failure_exits_two_and_records_theme() {
    let ws = Workspace::new("cli-partial");
    let output = run(&ws, &["solarized-light"]);

    assert_eq!(output.status.code(), Some(2), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("bad"));
    assert!(ws.dir.read("out/good.conf").contains("#fdf6e3"));
    assert!(ws
        .settings_text()
        .contains("current_theme = \"solarized-light\""));
    assert!(ws.dir.child("logs/latest.log").exists());
}

#[test]
fn restricted_to_working_app_exits_zero() {
    let ws = Workspace::new("cli-only");
    let output = run(&ws, &["-a", "good", "ocean"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(ws.dir.read("out/good.conf").starts_with("# ocean\n"));
}

#[test]
fn missing_theme_exits_one_without_writing() {
    let ws = Workspace::new("cli-missing");
    let before = ws.settings_text();
    let output = run(&ws, &["does-not-exist"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("theme `does-not-exist` not found"));
    assert_eq!(ws.settings_text(), before);
}

#[test]
fn list_json_marks_current_theme() {
    let ws = Workspace::new("cli-list");
    assert_eq!(run(&ws, &["-a", "good", "ocean"]).status.code(), Some(0));

    let output = run(&ws, &["list", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["current"], "ocean");
    assert_eq!(value["themes"], serde_json::json!(["ocean", "solarized-light"]));

    let plain = stdout(&run(&ws, &["list"]));
    assert_eq!(plain, "* ocean\n  solarized-light\n");
}

#[test]
fn current_and_reload_use_recorded_theme() {
    let ws = Workspace::new("cli-reload");
    let output = run(&ws, &["reload"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no current theme recorded"));

    assert_eq!(run(&ws, &["-a", "good", "ocean"]).status.code(), Some(0));
    std::fs::remove_file(ws.dir.child("out/good.conf")).unwrap();

    let output = run(&ws, &["-a", "good", "reload"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(ws.dir.read("out/good.conf").starts_with("# ocean\n"));

    let output = run(&ws, &["current", "--json"]);
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["current"], "ocean");
    assert!(value["applications"]["good"]["theme"].is_null());
}

#[cfg(unix)]
#[test]
fn outcomes_are_reported_when_saving_settings_fails() {
    let ws = Workspace::new("cli-persist-fail");
    let config = ws.dir.child("clobber.toml");
    // The handler replaces the settings file with a directory, so saving
    // the recorded theme fails after it has run.
    std::fs::write(
        &config,
        format!(
            "theme_dir = \"themes\"\n\n[applications.clobber]\nkind = \"command\"\n\
             command = [\"sh\", \"-c\", 'rm -f \"$0\" && mkdir \"$0\"', {}]\n",
            toml_string(&config)
        ),
    )
    .unwrap();

    let output = command_with_config(&ws, &config)
        .arg("ocean")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    let text = stderr(&output);

    assert_eq!(output.status.code(), Some(1), "stderr: {text}");
    assert!(config.is_dir());
    let ok_line = text.find("✓ clobber").expect("success outcome printed");
    let error_line = text.find("error:").expect("settings error printed");
    assert!(ok_line < error_line, "stderr: {text}");
}

fn toml_string(path: &Path) -> String {
    format!("{:?}", path.display().to_string())
}

#[test]
fn chooser_fallback_reads_numbered_choice_from_stdin() {
    let ws = Workspace::new("cli-chooser");
    let mut child = command(&ws)
        .args(["-a", "good"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn base16-switcher");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"2\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(ws.dir.read("out/good.conf").starts_with("# solarized-light\n"));
}

#[test]
fn chooser_cancel_exits_zero_and_changes_nothing() {
    let ws = Workspace::new("cli-cancel");
    let before = ws.settings_text();
    let output = run(&ws, &[]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(ws.settings_text(), before);
    assert!(!ws.dir.child("out").exists());
}

#[test]
fn init_creates_then_refuses_then_backs_up() {
    let ws = Workspace::new("cli-init");
    let target = ws.dir.child("fresh/config.toml");
    let init = |force: bool| {
        let mut cmd = command_with_config(&ws, &target);
        cmd.arg("init");
        if force {
            cmd.arg("--force");
        }
        cmd.stdin(Stdio::null()).output().unwrap()
    };

    assert_eq!(init(false).status.code(), Some(0));
    let created = std::fs::read_to_string(&target).unwrap();
    assert!(created.contains("[chooser]"));

    std::fs::write(&target, "notify = true\n").unwrap();
    let output = init(false);
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "notify = true\n");

    assert_eq!(init(true).status.code(), Some(0));
    assert_eq!(std::fs::read_to_string(&target).unwrap(), created);
    assert_eq!(backups(target.parent().unwrap()), 1);
}

fn backups(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".bak"))
        .count()
}

#[test]
fn apps_lists_configured_applications() {
    let ws = Workspace::new("cli-apps");
    let output = run(&ws, &["apps"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stderr(&output);
    assert!(text.contains("bad: template"));
    assert!(text.contains("good: template"));
}
