// Author: Dustin Pilgrim
// License: MIT

use crate::core::{
    action::Action,
    error::{Error, StateError},
    estimator::RankMode,
    events::Event,
    gesture::{self, Resolution, Resolved, Target},
    session::{Ability, Role, Session},
};
use crate::sdebug;

use super::Manager;

impl Manager {
    pub fn handle_event(&mut self, session: &mut Session, event: Event) -> Result<Vec<Action>, Error> {
        let now_ms = event.now_ms();
        let mut out = Vec::new();

        match event {
            Event::Tick { .. } => {
                out.extend(self.resolve_gestures(session, now_ms));
            }

            Event::Press { target, .. } => {
                // Close anything already due first so an old window is never
                // merged with this press.
                out.extend(self.resolve_gestures(session, now_ms));

                if target.ability == Ability::Ult && self.ult_durations(session, target.role).is_none() {
                    return Err(Error::InvalidState(StateError::NoUltimate(target.role)));
                }

                let count = self.gestures.press(target, now_ms);
                sdebug!("Manager", "press {} {} (count {})", target.role, target.ability, count);
            }

            Event::AssignChampion { role, champion, .. } => {
                let id = match champion {
                    Some(query) => Some(self.resolve_champion_id(&query)?),
                    None => None,
                };

                session.assign_champion(role, id);
                self.gestures.cancel(Target::new(role, Ability::Ult));
                out.push(Action::Persist);
            }

            Event::SetSpell { role, key, spell, .. } => {
                session.set_spell(role, key, spell);
                self.gestures.cancel(Target::new(role, key.into()));
                out.push(Action::Persist);
            }

            Event::SetRankMode { role, mode, .. } => {
                self.check_rank(session, role, mode)?;

                session.set_rank_mode(role, mode);
                self.gestures.cancel(Target::new(role, Ability::Ult));
                out.push(Action::Persist);
            }

            Event::SetHighlighted { role, .. } => {
                session.set_highlighted(role);
                out.push(Action::Persist);
            }

            Event::ResetAll { .. } => {
                self.gestures.clear();
                session.reset_all();
                out.push(Action::ClearStore);
            }
        }

        Ok(out)
    }

    /// Apply every press window that closed by `now_ms`.
    fn resolve_gestures(&mut self, session: &mut Session, now_ms: u64) -> Vec<Action> {
        let mut out = Vec::new();

        for resolved in self.gestures.poll(now_ms) {
            if let Some(action) = self.apply_gesture(session, resolved) {
                out.push(action);
            }
        }

        if !out.is_empty() {
            out.push(Action::Persist);
        }

        out
    }

    fn apply_gesture(&self, session: &mut Session, resolved: Resolved) -> Option<Action> {
        let Resolved { target, gesture, at_ms } = resolved;
        let role = target.role;

        let running = match target.ability.spell_key() {
            Some(key) => session.slot(role).spell(key).is_running(at_ms),
            None => {
                let Some(durations) = self.ult_durations(session, role) else {
                    // Champion went away while the window was open.
                    sdebug!("Manager", "dropping stale ult gesture for {}", role);
                    return None;
                };
                session.slot(role).ult.is_running(durations, at_ms)
            }
        };

        let resolution = gesture::resolve(gesture, running)?;

        match target.ability.spell_key() {
            Some(key) => match resolution {
                Resolution::Start => session.start_spell(role, key, at_ms),
                Resolution::Cancel => session.cancel_spell(role, key),
            },
            None => {
                let champion = self.champion_for(session, role);
                session.toggle_ult(role, champion, at_ms)?;
            }
        }

        Some(match resolution {
            Resolution::Start => Action::Started { target, at_ms },
            Resolution::Cancel => Action::Cancelled { target, at_ms },
        })
    }

    /// With a catalog, champions must exist in it and are stored by id.
    /// Without one, the raw text is kept so it resolves once data arrives.
    fn resolve_champion_id(&self, query: &str) -> Result<String, Error> {
        let query = query.trim();

        if self.catalog.is_empty() {
            return Ok(query.to_string());
        }

        self.catalog
            .find(query)
            .map(|c| c.id.clone())
            .ok_or_else(|| Error::InvalidState(StateError::UnknownChampion(query.to_string())))
    }

    fn check_rank(&self, session: &Session, role: Role, mode: RankMode) -> Result<(), Error> {
        let RankMode::Manual(rank) = mode else {
            return Ok(());
        };

        match self.champion_for(session, role).map(|c| c.rank_count()) {
            Some(max) if max > 0 && usize::from(rank.get()) > max => {
                Err(Error::InvalidState(StateError::RankOutOfRange { rank: rank.get(), max }))
            }
            _ => Ok(()),
        }
    }
}
