//! Runs the external Python scraper.
//!
//! The interpreter is not known up front: a project virtualenv is preferred,
//! then whatever `python3`/`python`/`py` is on PATH. Each candidate gets a
//! `--version` probe before the real run; any failure moves on to the next.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tracing::{info, warn};

/// Script path relative to the data directory.
pub const SCRAPER_SCRIPT: &str = "scraper_tool/ScraperRunner.py";

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Captured result of a successful scraper run.
#[derive(Debug, Clone, Serialize)]
pub struct ScraperRun {
    pub interpreter: String,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("{last_error}")]
    AllCandidatesFailed {
        tried: Vec<String>,
        last_error: String,
    },
}

#[derive(Debug, Clone)]
pub struct ScraperRunner {
    work_dir: PathBuf,
    script: PathBuf,
    candidates: Vec<String>,
    timeout: Duration,
}

impl ScraperRunner {
    pub fn new(data_dir: impl Into<PathBuf>, timeout: Duration) -> Self {
        let work_dir = data_dir.into();
        let candidates = default_candidates(&work_dir);
        Self {
            work_dir,
            script: PathBuf::from(SCRAPER_SCRIPT),
            candidates,
            timeout,
        }
    }

    /// Replace the interpreter candidates (tried in order).
    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Run the scraper with the first interpreter that works.
    pub async fn run(&self) -> Result<ScraperRun, ScraperError> {
        let mut last_error = String::from("No interpreter candidates configured");

        for candidate in &self.candidates {
            info!(interpreter = %candidate, "Trying scraper interpreter");
            match self.try_candidate(candidate).await {
                Ok(run) => {
                    info!(interpreter = %candidate, "Scraper completed successfully");
                    if !run.stderr.trim().is_empty() {
                        warn!(stderr = %run.stderr, "Scraper wrote to stderr");
                    }
                    return Ok(run);
                }
                Err(e) => {
                    warn!(interpreter = %candidate, error = %format!("{:#}", e), "Scraper attempt failed");
                    last_error = format!("{:#}", e);
                }
            }
        }

        Err(ScraperError::AllCandidatesFailed {
            tried: self.candidates.clone(),
            last_error,
        })
    }

    async fn try_candidate(&self, candidate: &str) -> Result<ScraperRun> {
        let program = resolve_interpreter(candidate)
            .await
            .with_context(|| format!("{} not found", candidate))?;

        let probe = run_with_timeout(
            Command::new(&program).arg("--version").current_dir(&self.work_dir),
            PROBE_TIMEOUT,
        )
        .await
        .context("Version check failed")?;
        info!(
            version = %String::from_utf8_lossy(&probe.stdout).trim(),
            "Interpreter available"
        );

        let output = run_with_timeout(
            Command::new(&program)
                .arg(&self.script)
                .current_dir(&self.work_dir)
                .env("PYTHONPATH", &self.work_dir),
            self.timeout,
        )
        .await
        .context("Scraper run failed")?;

        Ok(ScraperRun {
            interpreter: candidate.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Virtualenv interpreters under the data directory, then PATH lookups.
pub fn default_candidates(data_dir: &Path) -> Vec<String> {
    let venv = data_dir.join(".venv");
    [
        venv.join("bin").join("python"),
        venv.join("Scripts").join("python.exe"),
        venv.join("Scripts").join("python"),
    ]
    .into_iter()
    .map(|p| p.to_string_lossy().into_owned())
    .chain(["python3", "python", "py"].map(String::from))
    .collect()
}

/// Paths must exist; bare names are looked up on PATH.
async fn resolve_interpreter(candidate: &str) -> Result<PathBuf> {
    let path = Path::new(candidate);
    if path.components().count() > 1 {
        return tokio::fs::canonicalize(path)
            .await
            .with_context(|| format!("No interpreter at {}", path.display()));
    }
    which::which(candidate).with_context(|| format!("{} is not on PATH", candidate))
}

async fn run_with_timeout(command: &mut Command, timeout: Duration) -> Result<Output> {
    command.kill_on_drop(true);

    let output = match tokio::time::timeout(timeout, command.output()).await {
        Ok(result) => result.context("Failed to spawn process")?,
        Err(_) => bail!("Timed out after {}s", timeout.as_secs()),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("Exited with {}: {}", output.status, stderr.trim());
    }

    Ok(output)
}
