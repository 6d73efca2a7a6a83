use std::path::PathBuf;

use crate::error::PlatformError;

const APP_NAME: &str = "waymark";

/// Environment variable that overrides the resolved state directory.
pub const STATE_DIR_ENV: &str = "WAYMARK_STATE_DIR";

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> Result<PathBuf, PlatformError> {
  std::env::var("USERPROFILE")
    .map(PathBuf::from)
    .map_err(|_| PlatformError::NoHomeDirectory)
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> Result<PathBuf, PlatformError> {
  std::env::var("HOME")
    .map(PathBuf::from)
    .map_err(|_| PlatformError::NoHomeDirectory)
}

/// Returns the directory where checkpoint files are persisted.
///
/// `WAYMARK_STATE_DIR` overrides the platform default when set.
#[cfg(windows)]
pub fn state_dir() -> Result<PathBuf, PlatformError> {
  if let Ok(path) = std::env::var(STATE_DIR_ENV) {
    return Ok(PathBuf::from(path));
  }

  let local_appdata = std::env::var("LOCALAPPDATA").map_err(|_| PlatformError::MissingEnv("LOCALAPPDATA"))?;
  Ok(PathBuf::from(local_appdata).join(APP_NAME))
}

/// Returns the directory where checkpoint files are persisted.
///
/// `WAYMARK_STATE_DIR` overrides the platform default when set.
#[cfg(not(windows))]
pub fn state_dir() -> Result<PathBuf, PlatformError> {
  if let Ok(path) = std::env::var(STATE_DIR_ENV) {
    return Ok(PathBuf::from(path));
  }

  let state_home = std::env::var("XDG_STATE_HOME")
    .map(PathBuf::from)
    .or_else(|_| home_dir().map(|home| home.join(".local").join("state")))?;
  Ok(state_home.join(APP_NAME))
}
