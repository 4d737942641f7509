//! Frontdesk configuration.
//!
//! # Storage layout
//!
//! ```text
//! ~/.frontdesk/
//!   config.yaml   (optional; defaults apply when absent, mode 0600)
//!   visitors.db   (default database location)
//!   images/       (default photo directory)
//! ```
//!
//! Every key in `config.yaml` is optional. Relative paths are resolved
//! against `~/.frontdesk/`.
//!
//! # API pattern
//!
//! Like the rest of the workspace, each function has two forms:
//! - `fn_at(home: &Path, …)`: explicit home; used in tests with `TempDir`
//! - `fn(…)`: derives home from `dirs::home_dir()`, delegates to `_at`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_DATABASE: &str = "visitors.db";
pub const DEFAULT_IMAGES_DIR: &str = "images";

/// The box a stored photo is scaled to fit in.
///
/// Defaults to the photo panel of the visitor directory (332 × 286).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoEnvelope {
    pub width: u32,
    pub height: u32,
}

impl Default for PhotoEnvelope {
    fn default() -> Self {
        Self {
            width: 332,
            height: 286,
        }
    }
}

/// Resolved configuration; every path is absolute (or relative to the
/// process only when `home` itself was relative).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub database: PathBuf,
    pub images_dir: PathBuf,
    pub photo_envelope: PhotoEnvelope,
}

/// On-disk shape: everything optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    database: Option<PathBuf>,
    images_dir: Option<PathBuf>,
    photo_envelope: Option<PhotoEnvelope>,
}

impl Config {
    /// Defaults rooted at `<home>/.frontdesk/`.
    pub fn defaults_at(home: &Path) -> Self {
        let root = root_at(home);
        Self {
            database: root.join(DEFAULT_DATABASE),
            images_dir: root.join(DEFAULT_IMAGES_DIR),
            photo_envelope: PhotoEnvelope::default(),
        }
    }

    fn resolve(home: &Path, file: ConfigFile) -> Self {
        let root = root_at(home);
        let defaults = Self::defaults_at(home);
        Self {
            database: file
                .database
                .map(|p| root.join(p))
                .unwrap_or(defaults.database),
            images_dir: file
                .images_dir
                .map(|p| root.join(p))
                .unwrap_or(defaults.images_dir),
            photo_envelope: file.photo_envelope.unwrap_or(defaults.photo_envelope),
        }
    }
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// `<home>/.frontdesk/`. Pure, no I/O.
pub fn root_at(home: &Path) -> PathBuf {
    home.join(".frontdesk")
}

/// `<home>/.frontdesk/config.yaml`. Pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    root_at(home).join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load `<home>/.frontdesk/config.yaml`, falling back to defaults for a
/// missing file or missing keys.
///
/// Returns `ConfigError::Parse` (with path) if the YAML is malformed.
pub fn load_at(home: &Path) -> Result<Config, ConfigError> {
    let path = config_path_at(home);
    if !path.exists() {
        return Ok(Config::defaults_at(home));
    }
    let contents = std::fs::read_to_string(&path)?;
    if contents.trim().is_empty() {
        return Ok(Config::defaults_at(home));
    }
    let file: ConfigFile =
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })?;
    Ok(Config::resolve(home, file))
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<Config, ConfigError> {
    load_at(&home()?)
}

// ---------------------------------------------------------------------------
// Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically write `config` to `<home>/.frontdesk/config.yaml`.
///
/// Write flow: serialize → `config.yaml.tmp` sibling → `chmod 0600` → `rename`.
pub fn save_at(home: &Path, config: &Config) -> Result<PathBuf, ConfigError> {
    let root = root_at(home);
    if !root.exists() {
        std::fs::create_dir_all(&root)?;
        set_dir_permissions(&root)?;
    }
    let path = config_path_at(home);
    let tmp = path.with_file_name(format!("{CONFIG_FILE}.tmp"));

    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(&tmp, yaml)?;
    set_file_permissions(&tmp)?;
    std::fs::rename(&tmp, &path)?;
    Ok(path)
}

/// `save_at` convenience wrapper.
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    save_at(&home()?, config)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeNotFound)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
