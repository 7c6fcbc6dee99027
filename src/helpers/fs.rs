//! File System Utilities
//!
//! Configuration directory lookup and output file writing.

use crate::constants::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/typography-tokens/` or `$XDG_CONFIG_HOME/typography-tokens/`
/// - **macOS**: `~/Library/Application Support/com.goldwind.typography-tokens/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\goldwind\typography-tokens\config\`
///
/// The directory is not created; it only needs to exist when a config file is present.
pub fn get_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME) else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    Ok(project_dirs.config_dir().to_path_buf())
}

/// Write a file, creating missing parent directories
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)?;
    Ok(())
}
