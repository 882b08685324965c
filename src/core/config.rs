// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use crate::core::gesture::DEFAULT_WINDOW_MS;

pub const DEFAULT_TICK_MS: u64 = 200;
pub const DEFAULT_STORE_KEY: &str = "spells-cd-slots-v1";
pub const DEFAULT_DDRAGON_VERSION: &str = "14.23.1";
pub const DEFAULT_SPELL_WARN_FRACTION: f64 = 0.1;
pub const DEFAULT_CATALOG_TIMEOUT_SECONDS: u64 = 15;

/// Where champion data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Data Dragon `championFull.json` over HTTP.
    Http { url: String },
    /// A local file with the same shape.
    File { path: PathBuf },
    /// Run without champion data.
    Disabled,
}

impl CatalogSource {
    pub fn ddragon(version: &str) -> Self {
        CatalogSource::Http {
            url: ddragon_url(version),
        }
    }
}

pub fn ddragon_url(version: &str) -> String {
    format!("https://ddragon.leagueoflegends.com/cdn/{version}/data/en_US/championFull.json")
}

/// Effective runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Clock tick interval.
    pub tick_ms: u64,

    /// Quiet time after the last press before a gesture resolves.
    pub debounce_ms: u64,

    /// Share of a spell's base cooldown below which it shows as "maybe".
    pub spell_warn_fraction: f64,

    /// Key the session is persisted under.
    pub store_key: String,

    pub catalog: CatalogSource,

    /// Give up on the catalog after this long.
    pub catalog_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            debounce_ms: DEFAULT_WINDOW_MS,
            spell_warn_fraction: DEFAULT_SPELL_WARN_FRACTION,
            store_key: DEFAULT_STORE_KEY.to_string(),
            catalog: CatalogSource::ddragon(DEFAULT_DDRAGON_VERSION),
            catalog_timeout_seconds: DEFAULT_CATALOG_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    /// Clamp values that would make the daemon spin or never resolve anything.
    pub fn sanitized(mut self) -> Self {
        self.tick_ms = self.tick_ms.clamp(20, 5_000);
        self.debounce_ms = self.debounce_ms.clamp(50, 2_000);
        if !(0.0..=1.0).contains(&self.spell_warn_fraction) {
            self.spell_warn_fraction = DEFAULT_SPELL_WARN_FRACTION;
        }
        if self.store_key.trim().is_empty() {
            self.store_key = DEFAULT_STORE_KEY.to_string();
        }
        self.catalog_timeout_seconds = self.catalog_timeout_seconds.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tracker_behaviour() {
        let c = Config::default();
        assert_eq!(c.tick_ms, 200);
        assert_eq!(c.debounce_ms, 250);
        assert_eq!(c.store_key, "spells-cd-slots-v1");
        assert_eq!(
            c.catalog,
            CatalogSource::Http {
                url: "https://ddragon.leagueoflegends.com/cdn/14.23.1/data/en_US/championFull.json"
                    .to_string()
            }
        );
    }

    #[test]
    fn sanitize_clamps_out_of_range_values() {
        let c = Config {
            tick_ms: 0,
            debounce_ms: 60_000,
            spell_warn_fraction: 4.0,
            store_key: "  ".to_string(),
            catalog: CatalogSource::Disabled,
            catalog_timeout_seconds: 0,
        }
        .sanitized();

        assert_eq!(c.tick_ms, 20);
        assert_eq!(c.debounce_ms, 2_000);
        assert_eq!(c.spell_warn_fraction, DEFAULT_SPELL_WARN_FRACTION);
        assert_eq!(c.store_key, DEFAULT_STORE_KEY);
        assert_eq!(c.catalog_timeout_seconds, 1);
    }
}
