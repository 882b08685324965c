// Author: Dustin Pilgrim
// License: MIT

use std::{collections::HashMap, future::Future, path::PathBuf, time::Duration};

use eyre::{Result, WrapErr};
use serde::Deserialize;
use tokio::sync::mpsc::Sender;

use crate::core::{champion::Champion, config::CatalogSource, manager_msg::ManagerMsg};
use crate::{sdebug, sinfo, swarn};

/// Position of the ultimate in a champion's spell list.
const ULT_SLOT: usize = 3;

/// Something that can produce the full champion list.
pub trait CatalogProvider {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Champion>>> + Send;
}

pub struct HttpCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .wrap_err("failed to build HTTP client")?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl CatalogProvider for HttpCatalog {
    async fn fetch_all(&self) -> Result<Vec<Champion>> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await
            .wrap_err_with(|| format!("request to {} failed", self.url))?
            .error_for_status()
            .wrap_err("champion data request was rejected")?
            .bytes()
            .await
            .wrap_err("failed to read champion data")?;

        parse_ddragon(&body)
    }
}

pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogProvider for FileCatalog {
    async fn fetch_all(&self) -> Result<Vec<Champion>> {
        let body = tokio::fs::read(&self.path)
            .await
            .wrap_err_with(|| format!("failed to read {}", self.path.display()))?;
        parse_ddragon(&body)
    }
}

// ---------------- Data Dragon ----------------

#[derive(Deserialize)]
struct DdragonFile {
    data: HashMap<String, DdragonChampion>,
}

#[derive(Deserialize)]
struct DdragonChampion {
    id: String,
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    spells: Vec<DdragonSpell>,
}

#[derive(Deserialize)]
struct DdragonSpell {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    cooldown: Vec<f64>,
}

/// Cooldowns stay rank-indexed. A list with no positive entry carries no
/// information and is dropped whole.
fn rank_cooldowns(cooldowns: Vec<f64>) -> Vec<f64> {
    if cooldowns.iter().any(|cd| *cd > 0.0) {
        cooldowns
    } else {
        Vec::new()
    }
}

/// Parse a `championFull.json` document.
///
/// The ultimate is the fourth spell; a champion without one gets the name
/// "Ult" and no cooldown data.
pub fn parse_ddragon(bytes: &[u8]) -> Result<Vec<Champion>> {
    let file: DdragonFile =
        serde_json::from_slice(bytes).wrap_err("champion data is not valid Data Dragon JSON")?;

    let mut out: Vec<Champion> = file
        .data
        .into_values()
        .map(|c| {
            let ult = c.spells.into_iter().nth(ULT_SLOT);
            let (ult_name, ult_cooldowns) = match ult {
                Some(s) => (s.name.unwrap_or_else(|| "Ult".to_string()), s.cooldown),
                None => ("Ult".to_string(), Vec::new()),
            };

            Champion {
                id: c.id,
                name: c.name,
                ult_name,
                ult_cooldowns: rank_cooldowns(ult_cooldowns),
                tags: c.tags,
            }
        })
        .collect();

    out.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(out)
}

// ---------------- startup fetch ----------------

async fn fetch_with_timeout(provider: &impl CatalogProvider, timeout: Duration) -> Result<Vec<Champion>> {
    tokio::time::timeout(timeout, provider.fetch_all())
        .await
        .map_err(|_| eyre::eyre!("timed out after {}s", timeout.as_secs()))?
}

async fn load(source: &CatalogSource, timeout: Duration) -> Option<Result<Vec<Champion>>> {
    match source {
        CatalogSource::Disabled => None,
        CatalogSource::Http { url } => {
            sdebug!("Catalog", "fetching {}", url);
            let provider = match HttpCatalog::new(url.clone(), timeout) {
                Ok(p) => p,
                Err(e) => return Some(Err(e)),
            };
            Some(fetch_with_timeout(&provider, timeout).await)
        }
        CatalogSource::File { path } => {
            sdebug!("Catalog", "reading {}", path.display());
            Some(fetch_with_timeout(&FileCatalog::new(path.clone()), timeout).await)
        }
    }
}

/// Fetch the champion list once and report it to the daemon.
pub fn spawn_catalog_fetch(source: CatalogSource, timeout: Duration, tx: Sender<ManagerMsg>) {
    tokio::spawn(async move {
        let Some(result) = load(&source, timeout).await else {
            sinfo!("Catalog", "champion data disabled");
            return;
        };

        let msg = match result {
            Ok(champions) => {
                sinfo!("Catalog", "loaded {} champions", champions.len());
                ManagerMsg::CatalogLoaded(Ok(champions))
            }
            Err(e) => {
                swarn!("Catalog", "champion data unavailable: {:#}", e);
                ManagerMsg::CatalogLoaded(Err(format!("{e:#}")))
            }
        };

        let _ = tx.send(msg).await;
    });
}
