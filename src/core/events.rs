// Author: Dustin Pilgrim
// License: MIT

use crate::core::{
    estimator::RankMode,
    gesture::Target,
    session::{Role, SpellKey},
    spells::SpellId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Tick {
        now_ms: u64,
    },

    /// One raw press on a spell or ultimate. Only counted here; the timer
    /// changes once the press window closes on a later tick.
    Press {
        target: Target,
        now_ms: u64,
    },

    /// Champion id or display name, `None` to clear the slot.
    AssignChampion {
        role: Role,
        champion: Option<String>,
        now_ms: u64,
    },

    SetSpell {
        role: Role,
        key: SpellKey,
        spell: SpellId,
        now_ms: u64,
    },

    SetRankMode {
        role: Role,
        mode: RankMode,
        now_ms: u64,
    },

    SetHighlighted {
        role: Role,
        now_ms: u64,
    },

    ResetAll {
        now_ms: u64,
    },
}

impl Event {
    pub fn now_ms(&self) -> u64 {
        match self {
            Event::Tick { now_ms }
            | Event::Press { now_ms, .. }
            | Event::AssignChampion { now_ms, .. }
            | Event::SetSpell { now_ms, .. }
            | Event::SetRankMode { now_ms, .. }
            | Event::SetHighlighted { now_ms, .. }
            | Event::ResetAll { now_ms } => *now_ms,
        }
    }
}
