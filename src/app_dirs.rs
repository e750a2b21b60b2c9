//! Resolves the per-user `.dropout-risk` folder that holds config and logs.
//!
//! The folder lives under the OS config directory unless
//! `DROPOUT_RISK_CONFIG_HOME` points somewhere else (tests, portable installs).

use std::{
    path::{Path, PathBuf},
    sync::{LazyLock, Mutex},
};

use directories::BaseDirs;
use thiserror::Error;

/// Folder name created under the resolved config base.
pub const APP_DIR_NAME: &str = ".dropout-risk";
/// Environment variable that relocates the config base.
pub const CONFIG_HOME_ENV: &str = "DROPOUT_RISK_CONFIG_HOME";

static BASE_OVERRIDE: LazyLock<Mutex<Option<PathBuf>>> = LazyLock::new(|| Mutex::new(None));

/// Failures while locating or creating application folders.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// Neither an override nor an OS config directory is available.
    #[error("No config directory available for application files")]
    NoBaseDir,
    /// The folder could not be created.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Root application folder, created on demand.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = config_base_dir().ok_or(AppDirError::NoBaseDir)?;
    ensure_dir(base.join(APP_DIR_NAME))
}

/// Folder receiving one log file per launch.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    ensure_dir(app_root_dir()?.join("logs"))
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    create_all(&path)?;
    Ok(path)
}

fn create_all(path: &Path) -> Result<(), AppDirError> {
    std::fs::create_dir_all(path).map_err(|source| AppDirError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn config_base_dir() -> Option<PathBuf> {
    let pinned = BASE_OVERRIDE.lock().ok().and_then(|guard| guard.clone());
    if pinned.is_some() {
        return pinned;
    }
    if let Some(path) = std::env::var_os(CONFIG_HOME_ENV) {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
pub(crate) fn pin_base_dir(path: Option<PathBuf>) {
    let mut guard = BASE_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = path;
}
