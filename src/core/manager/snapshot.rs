// Author: Dustin Pilgrim
// License: MIT

use crate::core::{
    estimator,
    info::{CatalogInfo, ChampionInfo, SessionSnapshot, SlotInfo, UltInfo},
    session::{Ability, Role, Session},
};

use super::Manager;

impl Manager {
    pub fn snapshot(&self, session: &Session, now_ms: u64) -> SessionSnapshot {
        let warn = self.cfg.spell_warn_fraction;

        let slots = session
            .display_order()
            .into_iter()
            .map(|role| {
                let slot = session.slot(role);

                let champion = slot.champion_id.as_ref().map(|id| {
                    let known = self.catalog.get(id);
                    ChampionInfo {
                        id: id.clone(),
                        name: known.map(|c| c.name.clone()),
                        ult_name: known.map(|c| c.ult_name.clone()),
                        ult_cooldowns: known.map(|c| c.ult_cooldowns.clone()).unwrap_or_default(),
                    }
                });

                let projection = self
                    .ult_durations(session, role)
                    .and_then(|d| estimator::project(&slot.ult, d, now_ms));

                SlotInfo {
                    role,
                    label: role.label(),
                    highlighted: role == session.highlighted(),
                    champion,
                    spell1: slot.spell1.project(now_ms, warn),
                    spell2: slot.spell2.project(now_ms, warn),
                    ult: UltInfo {
                        mode: slot.ult.rank_mode,
                        projection,
                    },
                    pending: self.pending_for(role),
                }
            })
            .collect();

        let mut snap = SessionSnapshot {
            now_ms,
            highlighted: session.highlighted(),
            catalog: CatalogInfo {
                loaded: self.catalog.is_loaded(),
                disabled: self.catalog.is_disabled(),
                champions: self.catalog.len(),
                error: self.catalog.error().map(str::to_string),
            },
            slots,
            pretty_text: String::new(),
        };

        snap.pretty_text = super::info::render_info(&snap);
        snap
    }

    fn pending_for(&self, role: Role) -> Vec<Ability> {
        self.gestures
            .pending_targets()
            .filter(|t| t.role == role)
            .map(|t| t.ability)
            .collect()
    }
}
