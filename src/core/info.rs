// Author: Dustin Pilgrim
// License: MIT

use serde::Serialize;

use crate::core::{
    estimator::{RankMode, UltProjection},
    session::{Ability, Role},
    timer::SpellProjection,
};

/// Snapshot returned from the manager for `spellwatch info`.
///
/// - the serialized fields are the stable JSON contract (`info --json`).
/// - `pretty_text` is CLI-facing output for plain `info`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub now_ms: u64,
    pub highlighted: Role,
    pub catalog: CatalogInfo,

    /// Highlighted slot first.
    pub slots: Vec<SlotInfo>,

    #[serde(skip_serializing)]
    pub pretty_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogInfo {
    pub loaded: bool,
    pub disabled: bool,
    pub champions: usize,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotInfo {
    pub role: Role,
    pub label: &'static str,
    pub highlighted: bool,
    pub champion: Option<ChampionInfo>,
    pub spell1: SpellProjection,
    pub spell2: SpellProjection,
    pub ult: UltInfo,

    /// Abilities with an open press window.
    pub pending: Vec<Ability>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChampionInfo {
    pub id: String,

    /// `None` when the id is not (or not yet) in the catalog.
    pub name: Option<String>,
    pub ult_name: Option<String>,
    pub ult_cooldowns: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UltInfo {
    pub mode: RankMode,
    pub projection: Option<UltProjection>,
}

impl SessionSnapshot {
    pub fn slot(&self, role: Role) -> Option<&SlotInfo> {
        self.slots.iter().find(|s| s.role == role)
    }
}
