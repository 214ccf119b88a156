//! Repeated execution of a flaky test binary.
//!
//! A single failing run of a concurrency test says little; the harness runs
//! the binary a fixed number of times and reports how many runs passed.

use std::path::{Path, PathBuf};

use crate::error::{Result, XtoolError};
use crate::shell::{self, find_command, Invocation};

use super::TrialTally;

/// Run `binary filter` sequentially `trial_count` times and tally the results.
///
/// The binary must resolve to an executable before any trial starts. After
/// that the harness does not fail: a non-zero exit is counted, not raised.
pub fn run_trials(binary: &Path, filter: &str, trial_count: usize) -> Result<TrialTally> {
    let resolved = resolve_binary(binary)?;
    let program = resolved.to_string_lossy().into_owned();

    tracing::info!(
        "Running {} trial(s) of {} with filter {}",
        trial_count,
        program,
        filter
    );

    let mut tally = TrialTally::new();
    for trial in 1..=trial_count {
        let invocation = Invocation::new([program.as_str(), filter]);
        match shell::run(&invocation) {
            Ok(_) => {
                tracing::debug!(trial, "Trial passed");
                tally.record_success();
            }
            Err(e) => {
                tracing::warn!(trial, error = %e, "Trial failed");
                tally.record_failure();
            }
        }
    }

    tracing::info!("Trials finished: {}", tally);
    Ok(tally)
}

/// Resolve the test binary, failing if it is not an executable file.
pub fn resolve_binary(binary: &Path) -> Result<PathBuf> {
    let name = binary.to_string_lossy();
    find_command(&name).ok_or_else(|| XtoolError::MissingPrecondition {
        message: format!("test binary {} is not an executable file", binary.display()),
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sh() -> PathBuf {
        PathBuf::from("sh")
    }

    /// Script that fails on odd-numbered invocations, counting in a file
    /// next to itself.
    fn alternating_script(dir: &Path) -> PathBuf {
        let script = dir.join("alternate.sh");
        fs::write(
            &script,
            r#"f="$(dirname "$0")/count"
n=$(cat "$f" 2>/dev/null || echo 0)
n=$((n + 1))
echo "$n" > "$f"
[ $((n % 2)) -eq 0 ]
"#,
        )
        .unwrap();
        script
    }

    #[test]
    fn always_passing_binary() {
        let tally = run_trials(Path::new("true"), "--gtest_filter=*", 5).unwrap();
        assert_eq!(tally, TrialTally { successes: 5, failures: 0 });
    }

    #[test]
    fn always_failing_binary() {
        let tally = run_trials(Path::new("false"), "--gtest_filter=*", 4).unwrap();
        assert_eq!(tally, TrialTally { successes: 0, failures: 4 });
    }

    #[test]
    fn zero_trials_is_empty_tally() {
        let tally = run_trials(Path::new("false"), "--gtest_filter=*", 0).unwrap();
        assert_eq!(tally, TrialTally::default());
    }

    #[test]
    fn alternating_failures_split_evenly() {
        let temp = TempDir::new().unwrap();
        let script = alternating_script(temp.path());

        let tally = run_trials(&sh(), script.to_str().unwrap(), 100).unwrap();
        assert_eq!(tally, TrialTally { successes: 50, failures: 50 });
        assert_eq!(tally.total(), 100);
    }

    #[test]
    fn filter_is_passed_to_binary() {
        let temp = TempDir::new().unwrap();
        let script = temp.path().join("check.sh");
        fs::write(&script, "exit 0\n").unwrap();

        // `sh <missing file>` fails, so a pass proves the filter argument arrived.
        let tally = run_trials(&sh(), script.to_str().unwrap(), 2).unwrap();
        assert_eq!(tally.successes, 2);

        let missing = temp.path().join("missing.sh");
        let tally = run_trials(&sh(), missing.to_str().unwrap(), 2).unwrap();
        assert_eq!(tally.failures, 2);
    }

    #[test]
    fn unresolvable_binary_fails_before_trials() {
        let err = run_trials(Path::new("/nonexistent/concurrency_test"), "x", 3).unwrap_err();
        assert!(matches!(err, XtoolError::MissingPrecondition { .. }));
        assert!(err.to_string().contains("/nonexistent/concurrency_test"));
    }

    #[test]
    fn non_executable_binary_fails_before_trials() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("not_exec");
        fs::write(&path, "").unwrap();

        let err = run_trials(&path, "x", 3).unwrap_err();
        assert!(matches!(err, XtoolError::MissingPrecondition { .. }));
    }
}
