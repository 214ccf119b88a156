//! Integration tests for the clang-format and clang-tidy drivers.
//!
//! Fake tools are small shell scripts that answer `--version` and record
//! the arguments and working directory of every other call.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;
use xtool::config::{FormatConfig, TidyConfig};
use xtool::tools::{run_format, run_tidy, FormatOptions, TidyOptions, ToolContext};
use xtool::ui::OutputMode;
use xtool::version::VersionGate;
use xtool::XtoolError;

// Scripts are written and then executed; serialize so no other test forks
// while one of them is still open for writing.
static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

fn fake_tool(dir: &Path, name: &str, version_line: &str, exit_code: i32) -> PathBuf {
    let path = dir.join(name);
    let script = format!(
        r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "{version_line}"
  exit 0
fi
printf "%s\n" "$*" > "{log}"
pwd > "{cwd}"
exit {exit_code}
"#,
        log = dir.join(format!("{name}.args")).display(),
        cwd = dir.join(format!("{name}.cwd")).display(),
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Switches the process working directory until dropped.
struct CurrentDir(PathBuf);

impl CurrentDir {
    fn enter(dir: &Path) -> Self {
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self(previous)
    }
}

impl Drop for CurrentDir {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

fn recorded_args(dir: &Path, name: &str) -> Option<String> {
    fs::read_to_string(dir.join(format!("{name}.args")))
        .ok()
        .map(|s| s.trim().to_string())
}

fn project_with_sources() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src")).unwrap();
    fs::write(temp.path().join("src/server.cpp"), "int main() {}\n").unwrap();
    fs::write(temp.path().join("src/server.h"), "#pragma once\n").unwrap();
    temp
}

fn ctx<'a>(root: &'a Path, gate: &'a VersionGate) -> ToolContext<'a> {
    ToolContext {
        project_root: root,
        gate,
        output_mode: OutputMode::Quiet,
    }
}

fn format_options(tool: &Path, fix: bool) -> FormatOptions {
    FormatOptions {
        clang_format_path: tool.to_str().unwrap().to_string(),
        fix,
    }
}

#[test]
fn format_check_passes_sources_in_dry_run_mode() {
    let _guard = serial();
    let project = project_with_sources();
    let bin = TempDir::new().unwrap();
    let tool = fake_tool(bin.path(), "clang-format", "clang-format version 14.0.6", 0);
    let gate = VersionGate::new().unwrap();

    let report = run_format(
        &ctx(project.path(), &gate),
        &FormatConfig::default(),
        &format_options(&tool, false),
    )
    .unwrap();

    assert_eq!(report.files, 2);
    assert_eq!(report.version.triple(), (14, 0, 6));
    assert_eq!(
        recorded_args(bin.path(), "clang-format").as_deref(),
        Some("--dry-run --Werror src/server.cpp src/server.h")
    );

    let cwd = fs::read_to_string(bin.path().join("clang-format.cwd")).unwrap();
    assert_eq!(
        fs::canonicalize(cwd.trim()).unwrap(),
        fs::canonicalize(project.path()).unwrap()
    );
}

#[test]
fn format_fix_rewrites_in_place() {
    let _guard = serial();
    let project = project_with_sources();
    let bin = TempDir::new().unwrap();
    let tool = fake_tool(bin.path(), "clang-format", "clang-format version 12.0.0", 0);
    let gate = VersionGate::new().unwrap();

    run_format(
        &ctx(project.path(), &gate),
        &FormatConfig::default(),
        &format_options(&tool, true),
    )
    .unwrap();

    assert_eq!(
        recorded_args(bin.path(), "clang-format").as_deref(),
        Some("-i src/server.cpp src/server.h")
    );
}

#[test]
fn format_check_failure_propagates_process_failure() {
    let _guard = serial();
    let project = project_with_sources();
    let bin = TempDir::new().unwrap();
    let tool = fake_tool(bin.path(), "clang-format", "clang-format version 15.0.0", 1);
    let gate = VersionGate::new().unwrap();

    let err = run_format(
        &ctx(project.path(), &gate),
        &FormatConfig::default(),
        &format_options(&tool, false),
    )
    .unwrap_err();

    match &err {
        XtoolError::ProcessFailure { code, message, .. } => {
            assert_eq!(*code, Some(1));
            assert_eq!(message.as_deref(), Some("clang-format check failed"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("--dry-run --Werror"));
}

#[test]
fn format_rejects_old_tool_before_running() {
    let _guard = serial();
    let project = project_with_sources();
    let bin = TempDir::new().unwrap();
    let tool = fake_tool(bin.path(), "clang-format", "clang-format version 11.1.0", 0);
    let gate = VersionGate::new().unwrap();

    let err = run_format(
        &ctx(project.path(), &gate),
        &FormatConfig::default(),
        &format_options(&tool, false),
    )
    .unwrap_err();

    assert!(matches!(err, XtoolError::VersionTooOld { .. }));
    assert_eq!(
        err.to_string(),
        "clang-format 12.0.0 or higher is required, got: 11.1.0"
    );
    assert!(recorded_args(bin.path(), "clang-format").is_none());
}

#[test]
fn format_rejects_unparseable_version() {
    let _guard = serial();
    let project = project_with_sources();
    let bin = TempDir::new().unwrap();
    let tool = fake_tool(bin.path(), "clang-format", "clang-format version 12", 0);
    let gate = VersionGate::new().unwrap();

    let err = run_format(
        &ctx(project.path(), &gate),
        &FormatConfig::default(),
        &format_options(&tool, false),
    )
    .unwrap_err();

    assert!(matches!(err, XtoolError::VersionFormat { .. }));
}

#[test]
fn format_without_sources_does_not_run_tool() {
    let _guard = serial();
    let project = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    let tool = fake_tool(bin.path(), "clang-format", "clang-format version 14.0.0", 0);
    let gate = VersionGate::new().unwrap();

    let report = run_format(
        &ctx(project.path(), &gate),
        &FormatConfig::default(),
        &format_options(&tool, false),
    )
    .unwrap();

    assert_eq!(report.files, 0);
    assert!(recorded_args(bin.path(), "clang-format").is_none());
}

fn tidy_setup(exit_code: i32, tidy_version: &str) -> (TempDir, TempDir, TidyOptions) {
    let project = project_with_sources();
    let bin = TempDir::new().unwrap();
    let run = fake_tool(bin.path(), "run-clang-tidy", "run-clang-tidy", exit_code);
    let tidy = fake_tool(bin.path(), "clang-tidy", tidy_version, 0);

    let options = TidyOptions {
        build_dir: PathBuf::from("build"),
        jobs: Some(4),
        clang_tidy_path: tidy.to_str().unwrap().to_string(),
        run_clang_tidy_path: run.to_str().unwrap().to_string(),
        fix: false,
    };
    (project, bin, options)
}

#[test]
fn tidy_requires_compile_commands() {
    let _guard = serial();
    let (project, bin, options) = tidy_setup(0, "LLVM version 14.0.0");
    let gate = VersionGate::new().unwrap();

    let err = run_tidy(&ctx(project.path(), &gate), &TidyConfig::default(), &options).unwrap_err();

    assert!(matches!(err, XtoolError::MissingPrecondition { .. }));
    assert!(err.to_string().contains("compile_commands.json"));
    assert!(recorded_args(bin.path(), "run-clang-tidy").is_none());
}

#[test]
fn tidy_runs_with_build_dir_and_header_filter() {
    let _guard = serial();
    let (project, bin, options) = tidy_setup(0, "LLVM (http://llvm.org/):\n  LLVM version 14.0.0");
    fs::create_dir_all(project.path().join("build")).unwrap();
    fs::write(project.path().join("build/compile_commands.json"), "[]").unwrap();
    let gate = VersionGate::new().unwrap();

    let report = run_tidy(&ctx(project.path(), &gate), &TidyConfig::default(), &options).unwrap();
    assert_eq!(report.version.triple(), (14, 0, 0));

    let args = recorded_args(bin.path(), "run-clang-tidy").unwrap();
    let expected = format!(
        "-p {} -clang-tidy-binary {} -j4 -header-filter=kvrocks/src/|utils/kvrocks2redis/|tests/cppunit/ kvrocks/src/ utils/kvrocks2redis/ tests/cppunit/",
        project.path().join("build").display(),
        bin.path().join("clang-tidy").display(),
    );
    assert_eq!(args, expected);
}

#[test]
fn tidy_failure_propagates() {
    let _guard = serial();
    let (project, _bin, options) = tidy_setup(2, "LLVM version 13.0.1");
    fs::create_dir_all(project.path().join("build")).unwrap();
    fs::write(project.path().join("build/compile_commands.json"), "[]").unwrap();
    let gate = VersionGate::new().unwrap();

    let err = run_tidy(&ctx(project.path(), &gate), &TidyConfig::default(), &options).unwrap_err();
    match err {
        XtoolError::ProcessFailure { code, message, .. } => {
            assert_eq!(code, Some(2));
            assert_eq!(message.as_deref(), Some("clang-tidy check failed"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn tidy_rejects_old_clang_tidy() {
    let _guard = serial();
    let (project, _bin, options) = tidy_setup(0, "LLVM version 10.0.0");
    let gate = VersionGate::new().unwrap();

    let err = run_tidy(&ctx(project.path(), &gate), &TidyConfig::default(), &options).unwrap_err();
    assert!(matches!(err, XtoolError::VersionTooOld { .. }));
    assert!(err.to_string().starts_with("clang-tidy 12.0.0 or higher"));
}

#[test]
fn tidy_with_relative_project_root_passes_absolute_paths() {
    let _guard = serial();
    let workspace = TempDir::new().unwrap();
    let repo = workspace.path().join("repo");
    fs::create_dir_all(repo.join("build")).unwrap();
    fs::write(repo.join("build/compile_commands.json"), "[]").unwrap();
    let bin = workspace.path().join("bin");
    fs::create_dir_all(&bin).unwrap();
    fake_tool(&bin, "run-clang-tidy", "run-clang-tidy", 0);
    fake_tool(&bin, "clang-tidy", "LLVM version 14.0.0", 0);
    let gate = VersionGate::new().unwrap();

    let _cwd = CurrentDir::enter(workspace.path());
    let here = std::env::current_dir().unwrap();
    let options = TidyOptions {
        build_dir: PathBuf::from("build"),
        jobs: None,
        clang_tidy_path: "bin/clang-tidy".to_string(),
        run_clang_tidy_path: "bin/run-clang-tidy".to_string(),
        fix: false,
    };

    let report = run_tidy(&ctx(Path::new("repo"), &gate), &TidyConfig::default(), &options).unwrap();
    assert_eq!(report.build_dir, here.join("repo/build"));

    let args = recorded_args(&bin, "run-clang-tidy").unwrap();
    let expected_prefix = format!(
        "-p {} -clang-tidy-binary {} ",
        here.join("repo/build").display(),
        here.join("bin/clang-tidy").display(),
    );
    assert!(args.starts_with(&expected_prefix), "{args}");

    let cwd = fs::read_to_string(bin.join("run-clang-tidy.cwd")).unwrap();
    assert_eq!(
        fs::canonicalize(cwd.trim()).unwrap(),
        fs::canonicalize(&repo).unwrap()
    );
}

#[test]
fn format_with_relative_paths_runs_from_project_root() {
    let _guard = serial();
    let workspace = TempDir::new().unwrap();
    let repo = workspace.path().join("repo");
    fs::create_dir_all(repo.join("src")).unwrap();
    fs::write(repo.join("src/server.cpp"), "int main() {}\n").unwrap();
    let bin = workspace.path().join("bin");
    fs::create_dir_all(&bin).unwrap();
    fake_tool(&bin, "clang-format", "clang-format version 14.0.0", 0);
    let gate = VersionGate::new().unwrap();

    let _cwd = CurrentDir::enter(workspace.path());
    let options = FormatOptions {
        clang_format_path: "bin/clang-format".to_string(),
        fix: false,
    };

    let report = run_format(&ctx(Path::new("repo"), &gate), &FormatConfig::default(), &options).unwrap();
    assert_eq!(report.files, 1);
    assert_eq!(
        recorded_args(&bin, "clang-format").as_deref(),
        Some("--dry-run --Werror src/server.cpp")
    );

    let cwd = fs::read_to_string(bin.join("clang-format.cwd")).unwrap();
    assert_eq!(
        fs::canonicalize(cwd.trim()).unwrap(),
        fs::canonicalize(&repo).unwrap()
    );
}
