// Author: Dustin Pilgrim
// License: MIT

pub mod bootstrap;
pub mod parser;

use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::{sdebug, swarn};

pub const SYSTEM_CONFIG_PATH: &str = "/etc/spellwatch/spellwatch.rune";

/// `~/.config/spellwatch/spellwatch.rune`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("spellwatch").join("spellwatch.rune"))
}

/// User config if present, else the system one, else where the user one would go.
pub fn resolve_default_config_path() -> PathBuf {
    let user = user_config_path();

    if let Some(p) = user.as_ref().filter(|p| p.exists()) {
        return p.clone();
    }

    let system = PathBuf::from(SYSTEM_CONFIG_PATH);
    if system.exists() {
        return system;
    }

    user.unwrap_or(system)
}

pub struct LoadedConfig {
    pub cfg: Config,
    /// File the config came from; `None` for built-in defaults.
    pub path: Option<PathBuf>,
}

/// Load `path`, falling back to the system config and then built-in defaults.
///
/// A broken file is reported but never stops the daemon.
pub fn load_from_path(path: &Path) -> LoadedConfig {
    let system = PathBuf::from(SYSTEM_CONFIG_PATH);
    let candidates = std::iter::once(path.to_path_buf()).chain((path != system).then_some(system));

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }

        match parser::parse_file(&candidate) {
            Ok(cfg) => {
                sdebug!("Config", "loaded {}", candidate.display());
                return LoadedConfig {
                    cfg,
                    path: Some(candidate),
                };
            }
            Err(e) => swarn!("Config", "{:#}", e),
        }
    }

    sdebug!("Config", "using built-in defaults");
    let cfg = parser::parse_str(parser::BUILTIN_DEFAULT).unwrap_or_else(|e| {
        swarn!("Config", "built-in defaults unreadable: {:#}", e);
        Config::default()
    });

    LoadedConfig { cfg, path: None }
}
