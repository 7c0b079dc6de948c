//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in multi-threaded runtimes
//! and test harnesses.

use crate::constants::{DAILY_TASKS_FILE, DOCS_DIR_NAME, KNOWN_DOCUMENTS};
use crate::{CampaignError, CampaignResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    docs_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(docs_dir: PathBuf) -> CampaignResult<Self> {
        if !docs_dir.is_dir() {
            return Err(CampaignError::InvalidInput(format!(
                "docs directory does not exist: {}",
                docs_dir.display()
            )));
        }

        Ok(Self { docs_dir })
    }

    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    /// Full path of a named document inside the docs directory.
    pub fn document_path(&self, name: &str) -> PathBuf {
        self.docs_dir.join(name)
    }
}

/// Resolve the campaign docs directory without reading environment variables.
///
/// If `override_dir` is provided, it must be a directory containing the daily task document.
/// Otherwise this searches for `docs/` relative to the current working directory and then
/// walks up from `CARGO_MANIFEST_DIR`.
pub fn resolve_docs_dir(override_dir: Option<PathBuf>) -> CampaignResult<PathBuf> {
    fn looks_like_docs_dir(path: &Path) -> bool {
        path.join(DAILY_TASKS_FILE).is_file()
    }

    if let Some(docs_dir) = override_dir {
        if docs_dir.is_dir() && looks_like_docs_dir(&docs_dir) {
            return Ok(docs_dir);
        }
        return Err(CampaignError::InvalidInput(
            "WARROOM_DOCS_DIR override is not a valid docs directory (must contain DAILY-TASK-SYSTEM.md)"
                .into(),
        ));
    }

    let cwd_relative = PathBuf::from(DOCS_DIR_NAME);
    if cwd_relative.is_dir() && looks_like_docs_dir(&cwd_relative) {
        return Ok(cwd_relative);
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(DOCS_DIR_NAME);
        if candidate.is_dir() && looks_like_docs_dir(&candidate) {
            return Ok(candidate);
        }
    }

    Err(CampaignError::InvalidInput(
        "could not locate docs/ directory containing DAILY-TASK-SYSTEM.md".into(),
    ))
}

/// Validate that the resolved docs directory holds the documents the services read.
///
/// This is intended to be run at startup when `CoreConfig` is constructed. The daily task
/// document is required; any other missing document is logged as a warning because its routes
/// will answer with empty sections rather than failing outright.
pub fn validate_docs_dir(docs_dir: &Path) -> CampaignResult<()> {
    if !docs_dir.join(DAILY_TASKS_FILE).is_file() {
        return Err(CampaignError::InvalidInput(format!(
            "docs directory is missing {}",
            DAILY_TASKS_FILE
        )));
    }

    for name in KNOWN_DOCUMENTS {
        if !docs_dir.join(name).is_file() {
            tracing::warn!("docs directory is missing {}", name);
        }
    }

    Ok(())
}
