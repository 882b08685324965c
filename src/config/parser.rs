// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr, eyre};
use rune_cfg::RuneConfig;

use crate::core::config::{CatalogSource, Config, DEFAULT_DDRAGON_VERSION};

pub const BUILTIN_DEFAULT: &str = include_str!("../../assets/spellwatch.rune");

fn get_u64(config: &RuneConfig, key: &str) -> Option<u64> {
    config
        .get::<u64>(&format!("spellwatch.{key}"))
        .or_else(|_| config.get::<u64>(&format!("spellwatch.{}", key.replace('_', "-"))))
        .ok()
}

fn get_string(config: &RuneConfig, key: &str) -> Option<String> {
    config
        .get::<String>(&format!("spellwatch.{key}"))
        .or_else(|_| config.get::<String>(&format!("spellwatch.{}", key.replace('_', "-"))))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_catalog_source(config: &RuneConfig) -> Result<CatalogSource> {
    let kind = get_string(config, "catalog_source").unwrap_or_else(|| "http".to_string());

    match kind.to_ascii_lowercase().as_str() {
        "http" | "ddragon" => {
            let url = get_string(config, "catalog_url");
            let version =
                get_string(config, "ddragon_version").unwrap_or_else(|| DEFAULT_DDRAGON_VERSION.to_string());
            Ok(match url {
                Some(url) => CatalogSource::Http { url },
                None => CatalogSource::ddragon(&version),
            })
        }
        "file" => {
            let path = get_string(config, "catalog_path")
                .ok_or_else(|| eyre!("catalog_source \"file\" needs catalog_path"))?;
            Ok(CatalogSource::File {
                path: PathBuf::from(path),
            })
        }
        "none" | "off" | "disabled" => Ok(CatalogSource::Disabled),
        other => Err(eyre!("unknown catalog_source \"{other}\" (expected http, file or none)")),
    }
}

/// Read the `spellwatch:` block. Missing keys keep their defaults.
pub fn parse_config(config: &RuneConfig) -> Result<Config> {
    let defaults = Config::default();

    let spell_warn_fraction = get_u64(config, "spell_warn_percent")
        .map(|p| p as f64 / 100.0)
        .unwrap_or(defaults.spell_warn_fraction);

    let cfg = Config {
        tick_ms: get_u64(config, "tick_ms").unwrap_or(defaults.tick_ms),
        debounce_ms: get_u64(config, "debounce_ms").unwrap_or(defaults.debounce_ms),
        spell_warn_fraction,
        store_key: get_string(config, "store_key").unwrap_or(defaults.store_key),
        catalog: parse_catalog_source(config)?,
        catalog_timeout_seconds: get_u64(config, "catalog_timeout_seconds")
            .unwrap_or(defaults.catalog_timeout_seconds),
    };

    Ok(cfg.sanitized())
}

pub fn parse_str(text: &str) -> Result<Config> {
    let config = RuneConfig::from_str(text).wrap_err("failed to parse config")?;
    parse_config(&config)
}

pub fn parse_file(path: &Path) -> Result<Config> {
    let config = RuneConfig::from_file(path)
        .wrap_err_with(|| format!("failed to load config from {}", path.display()))?;
    parse_config(&config).wrap_err_with(|| format!("invalid config in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_default_matches_code_defaults() {
        let cfg = parse_str(BUILTIN_DEFAULT).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn kebab_case_keys_and_file_source() {
        let text = r#"
spellwatch:
  debounce-ms 300
  spell-warn-percent 20
  store-key "ranked"
  catalog-source "file"
  catalog-path "/srv/champions.json"
end
"#;
        let cfg = parse_str(text).unwrap();
        assert_eq!(cfg.debounce_ms, 300);
        assert_eq!(cfg.spell_warn_fraction, 0.2);
        assert_eq!(cfg.store_key, "ranked");
        assert_eq!(
            cfg.catalog,
            CatalogSource::File {
                path: PathBuf::from("/srv/champions.json")
            }
        );
        assert_eq!(cfg.tick_ms, 200);
    }

    #[test]
    fn ddragon_version_builds_the_url() {
        let text = r#"
spellwatch:
  ddragon_version "15.1.1"
end
"#;
        let cfg = parse_str(text).unwrap();
        assert_eq!(cfg.catalog, CatalogSource::ddragon("15.1.1"));
    }

    #[test]
    fn bad_catalog_settings_are_errors() {
        let missing_path = "spellwatch:\n  catalog_source \"file\"\nend\n";
        assert!(parse_str(missing_path).is_err());

        let unknown = "spellwatch:\n  catalog_source \"ftp\"\nend\n";
        assert!(parse_str(unknown).is_err());

        let none = "spellwatch:\n  catalog_source \"none\"\nend\n";
        assert_eq!(parse_str(none).unwrap().catalog, CatalogSource::Disabled);
    }
}
