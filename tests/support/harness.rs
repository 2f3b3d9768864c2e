use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated working directory for running the
/// ci-gate binary. Each harness creates a temporary directory with a
/// `.github/` folder, removed again on drop.
pub struct TestHarness {
    pub dir: TempDir,
    #[allow(dead_code)]
    pub github_dir: PathBuf,
    pub binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let github_dir = temp_dir.path().join(".github");
        fs::create_dir_all(&github_dir).expect("Failed to create .github dir");

        TestHarness {
            dir: temp_dir,
            github_dir,
            binary: PathBuf::from(env!("CARGO_BIN_EXE_ci-gate")),
        }
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to `rel` under the harness directory, creating parents.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes the threshold table at `.github/coverage-thresholds.json`.
    #[allow(dead_code)]
    pub fn write_thresholds(&self, json: &str) -> PathBuf {
        self.write(".github/coverage-thresholds.json", json)
    }

    /// Executes the binary with the given arguments in the harness directory.
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    /// Executes the binary with extra environment variables. Variables the
    /// binary reads are cleared first so the host environment cannot leak in.
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args)
            .current_dir(self.path())
            .env_remove("THRESHOLD")
            .env_remove("CI_GATE_LOG")
            .env("NO_COLOR", "1");
        for (key, value) in env {
            cmd.env(key, value);
        }
        cmd.output().expect("Failed to run ci-gate")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
