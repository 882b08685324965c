// Author: Dustin Pilgrim
// License: MIT

mod actions;
mod run;

use crate::core::{
    action::Action, config::Config, error::Error, events::Event, manager::Manager, session::Session,
};
use crate::services::store::{self, Store};
use crate::{sdebug, serror};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub struct Daemon {
    manager: Manager,
    session: Session,
    store: Box<dyn Store + Send>,
}

impl Daemon {
    pub fn new(cfg: Config, store: Box<dyn Store + Send>) -> Self {
        let session = store::restore_session(store.as_ref(), &cfg.store_key);

        sdebug!(
            "Daemon",
            "tick={}ms debounce={}ms store_key={} catalog={:?}",
            cfg.tick_ms,
            cfg.debounce_ms,
            cfg.store_key,
            cfg.catalog
        );

        Self {
            manager: Manager::new(cfg),
            session,
            store,
        }
    }

    /// Ticks fail silently; everything else is logged.
    fn handle_event_logged(&mut self, event: Event) -> Result<Vec<Action>, Error> {
        let is_tick = matches!(event, Event::Tick { .. });
        if !is_tick {
            sdebug!("Daemon", "incoming: {:?}", event);
        }

        let res = self.manager.handle_event(&mut self.session, event);

        match &res {
            Ok(actions) if !actions.is_empty() => sdebug!("Daemon", "actions: {:?}", actions),
            Ok(_) => {}
            Err(e) if is_tick => serror!("Daemon", "tick failed: {}", e),
            Err(e) => sdebug!("Daemon", "rejected: {}", e),
        }

        res
    }
}
