// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use eyre::{Result, WrapErr, eyre};

use crate::sinfo;

/// Write the default config to the user config path unless one exists.
/// Returns the path when a file was created.
pub fn ensure_user_config_exists() -> Result<Option<PathBuf>> {
    let path = super::user_config_path().ok_or_else(|| eyre!("no config directory for this user"))?;

    if path.exists() {
        return Ok(None);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, super::parser::BUILTIN_DEFAULT)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;

    sinfo!("Config", "wrote default config to {}", path.display());
    Ok(Some(path))
}
