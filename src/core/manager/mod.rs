// Author: Dustin Pilgrim
// License: MIT

mod engine;
pub mod info;
mod snapshot;

use crate::core::{
    action::Action,
    champion::{Catalog, Champion},
    config::{CatalogSource, Config},
    gesture::GestureDisambiguator,
    session::{Role, Session},
};

/// Owns everything that is not persisted: config, champion catalog and open
/// press windows. The session itself is passed in by the caller.
#[derive(Debug)]
pub struct Manager {
    cfg: Config,
    catalog: Catalog,
    gestures: GestureDisambiguator,
}

impl Manager {
    pub fn new(cfg: Config) -> Self {
        let gestures = GestureDisambiguator::new(cfg.debounce_ms);
        let catalog = match cfg.catalog {
            CatalogSource::Disabled => Catalog::disabled(),
            _ => Catalog::default(),
        };
        Self {
            cfg,
            catalog,
            gestures,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    /// Install fetched champion data. Champions typed in before it arrived
    /// are rewritten to their catalog ids; unmatched text is left as is.
    pub fn load_catalog(&mut self, session: &mut Session, catalog: Catalog) -> Vec<Action> {
        self.set_catalog(catalog);

        let mut changed = false;
        for role in Role::ALL {
            let Some(raw) = session.slot(role).champion_id.as_deref() else {
                continue;
            };
            if self.catalog.get(raw).is_some() {
                continue;
            }
            if let Some(c) = self.catalog.find(raw) {
                session.assign_champion(role, Some(c.id.clone()));
                changed = true;
            }
        }

        if changed { vec![Action::Persist] } else { Vec::new() }
    }

    pub fn gestures(&self) -> &GestureDisambiguator {
        &self.gestures
    }

    /// Release open press windows so nothing resolves after teardown.
    pub fn shutdown(&mut self) {
        self.gestures.clear();
    }

    pub fn champion_for(&self, session: &Session, role: Role) -> Option<&Champion> {
        let id = session.slot(role).champion_id.as_deref()?;
        self.catalog.get(id)
    }

    /// Rank cooldowns of the role's champion, if there are any.
    pub fn ult_durations(&self, session: &Session, role: Role) -> Option<&[f64]> {
        self.champion_for(session, role)
            .filter(|c| c.has_ult_ranks())
            .map(|c| c.ult_cooldowns.as_slice())
    }
}
