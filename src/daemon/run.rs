// Author: Dustin Pilgrim
// License: MIT

use std::time::Duration;

use crate::core::{
    champion::Catalog,
    events::Event,
    manager::info::render_champions,
    manager_msg::ManagerMsg,
    utils::now_ms,
};
use crate::{sinfo, swarn};

use tokio::sync::{mpsc, watch};

use super::{AnyError, Daemon};

impl Daemon {
    pub async fn run(
        &mut self,
        mut shutdown: watch::Receiver<bool>,
        shutdown_tx: watch::Sender<bool>,
    ) -> Result<(), AnyError> {
        sinfo!("Daemon", "starting");

        let (tx, mut rx) = mpsc::channel::<ManagerMsg>(256);

        if let Err(e) = crate::ipc::server::spawn_ipc_server(tx.clone()).await {
            swarn!("Daemon", "ipc: failed to start: {}", e);
        }

        let cfg = self.manager.config().clone();

        tokio::spawn(crate::services::ticker::run_ticker(tx.clone(), cfg.tick_ms));

        crate::services::catalog::spawn_catalog_fetch(
            cfg.catalog.clone(),
            Duration::from_secs(cfg.catalog_timeout_seconds),
            tx.clone(),
        );

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        sinfo!("Daemon", "stopping (shutdown requested)");
                        break;
                    }
                }

                maybe = rx.recv() => {
                    let Some(msg) = maybe else {
                        sinfo!("Daemon", "stopping (event channel closed)");
                        break;
                    };

                    match msg {
                        ManagerMsg::Event(event) => {
                            if let Ok(actions) = self.handle_event_logged(event) {
                                for action in actions {
                                    self.exec_action(action);
                                }
                            }
                        }

                        ManagerMsg::Command { event, reply } => {
                            let ok = describe(&event);
                            let out = match self.handle_event_logged(event) {
                                Ok(actions) => {
                                    for action in actions {
                                        self.exec_action(action);
                                    }
                                    Ok(ok)
                                }
                                Err(e) => Err(e.to_string()),
                            };
                            let _ = reply.send(out);
                        }

                        ManagerMsg::GetInfo { reply } => {
                            let snap = self.manager.snapshot(&self.session, now_ms());
                            let _ = reply.send(snap);
                        }

                        ManagerMsg::ListChampions { filter, reply } => {
                            let out = render_champions(self.manager.catalog(), filter.as_ref());
                            let _ = reply.send(Ok(out));
                        }

                        ManagerMsg::CatalogLoaded(result) => {
                            let catalog = match result {
                                Ok(champions) => Catalog::loaded(champions),
                                Err(e) => Catalog::failed(e),
                            };
                            let actions = self.manager.load_catalog(&mut self.session, catalog);
                            for action in actions {
                                self.exec_action(action);
                            }
                        }

                        ManagerMsg::StopDaemon { reply } => {
                            sinfo!("Daemon", "stopping (stop requested via IPC)");
                            let _ = reply.send(Ok("Stopping spellwatch daemon".to_string()));
                            let _ = shutdown_tx.send(true);
                            break;
                        }
                    }
                }
            }
        }

        self.manager.shutdown();
        Ok(())
    }
}

/// Reply text for an accepted command.
fn describe(event: &Event) -> String {
    match event {
        Event::Tick { .. } => String::new(),
        Event::Press { target, .. } => format!("{} {} pressed", target.role.label(), target.ability),
        Event::AssignChampion { role, champion: Some(c), .. } => {
            format!("{}: champion set to {}", role.label(), c.trim())
        }
        Event::AssignChampion { role, champion: None, .. } => format!("{}: champion cleared", role.label()),
        Event::SetSpell { role, key, spell, .. } => {
            format!("{}: {} set to {}", role.label(), crate::core::session::Ability::from(*key), spell)
        }
        Event::SetRankMode { role, mode, .. } => format!("{}: ult rank {}", role.label(), mode),
        Event::SetHighlighted { role, .. } => format!("{} highlighted", role.label()),
        Event::ResetAll { .. } => "Session reset".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        gesture::Target,
        session::{Ability, Role, SpellKey},
        spells::SpellId,
    };

    #[test]
    fn command_replies_name_the_change() {
        assert_eq!(
            describe(&Event::Press {
                target: Target::new(Role::Adc, Ability::Ult),
                now_ms: 0
            }),
            "ADC ult pressed"
        );
        assert_eq!(
            describe(&Event::SetSpell {
                role: Role::Top,
                key: SpellKey::Spell2,
                spell: SpellId::Teleport,
                now_ms: 0
            }),
            "Top: spell2 set to Teleport"
        );
        assert_eq!(
            describe(&Event::AssignChampion {
                role: Role::Mid,
                champion: None,
                now_ms: 0
            }),
            "Mid: champion cleared"
        );
    }
}
