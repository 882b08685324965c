// Author: Dustin Pilgrim
// License: MIT

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::core::{
    champion::Champion,
    error::{ArgumentError, Error},
    estimator::{RankMode, UltTimer},
    spells::SpellId,
    timer::SpellTimer,
};

/// The five lane positions. Declaration order is the canonical slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Adc, Role::Support];

    pub const DEFAULT_HIGHLIGHT: Role = Role::Mid;

    pub fn label(self) -> &'static str {
        match self {
            Role::Top => "Top",
            Role::Jungle => "Jungle",
            Role::Mid => "Mid",
            Role::Adc => "ADC",
            Role::Support => "Support",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Adc => "adc",
            Role::Support => "support",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn default_spells(self) -> (SpellId, SpellId) {
        match self {
            Role::Top => (SpellId::Flash, SpellId::Teleport),
            Role::Jungle => (SpellId::Flash, SpellId::Smite),
            Role::Mid => (SpellId::Flash, SpellId::Ignite),
            Role::Adc => (SpellId::Flash, SpellId::Heal),
            Role::Support => (SpellId::Flash, SpellId::Exhaust),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Role::Top),
            "jungle" | "jg" | "jgl" => Ok(Role::Jungle),
            "mid" | "middle" => Ok(Role::Mid),
            "adc" | "bot" | "bottom" => Ok(Role::Adc),
            "support" | "sup" | "supp" => Ok(Role::Support),
            _ => Err(Error::InvalidArgument(ArgumentError::UnknownRole(s.trim().to_string()))),
        }
    }
}

/// Which of the two fixed spell slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellKey {
    Spell1,
    Spell2,
}

impl FromStr for SpellKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Ability::from_str(s)? {
            Ability::Spell1 => Ok(SpellKey::Spell1),
            Ability::Spell2 => Ok(SpellKey::Spell2),
            Ability::Ult => Err(Error::InvalidArgument(ArgumentError::UnknownAbility(s.trim().to_string()))),
        }
    }
}

/// Anything on a slot that can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Spell1,
    Spell2,
    Ult,
}

impl Ability {
    pub fn spell_key(self) -> Option<SpellKey> {
        match self {
            Ability::Spell1 => Some(SpellKey::Spell1),
            Ability::Spell2 => Some(SpellKey::Spell2),
            Ability::Ult => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Ability::Spell1 => "spell1",
            Ability::Spell2 => "spell2",
            Ability::Ult => "ult",
        }
    }
}

impl From<SpellKey> for Ability {
    fn from(key: SpellKey) -> Self {
        match key {
            SpellKey::Spell1 => Ability::Spell1,
            SpellKey::Spell2 => Ability::Spell2,
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spell1" | "1" | "d" => Ok(Ability::Spell1),
            "spell2" | "2" | "f" => Ok(Ability::Spell2),
            "ult" | "r" | "ultimate" => Ok(Ability::Ult),
            _ => Err(Error::InvalidArgument(ArgumentError::UnknownAbility(s.trim().to_string()))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentSlot {
    pub role: Role,
    pub spell1: SpellTimer,
    pub spell2: SpellTimer,
    #[serde(default)]
    pub champion_id: Option<String>,
    #[serde(default)]
    pub ult: UltTimer,
}

impl OpponentSlot {
    pub fn new(role: Role) -> Self {
        let (s1, s2) = role.default_spells();
        Self {
            role,
            spell1: SpellTimer::idle(s1),
            spell2: SpellTimer::idle(s2),
            champion_id: None,
            ult: UltTimer::default(),
        }
    }

    pub fn spell(&self, key: SpellKey) -> &SpellTimer {
        match key {
            SpellKey::Spell1 => &self.spell1,
            SpellKey::Spell2 => &self.spell2,
        }
    }

    pub fn spell_mut(&mut self, key: SpellKey) -> &mut SpellTimer {
        match key {
            SpellKey::Spell1 => &mut self.spell1,
            SpellKey::Spell2 => &mut self.spell2,
        }
    }
}

/// Everything the user has reported for the current game.
///
/// Exactly one slot per role, stored in canonical role order, and exactly one
/// highlighted role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    slots: [OpponentSlot; 5],
    highlighted: Role,
}

impl Session {
    pub fn new() -> Self {
        Self {
            slots: Role::ALL.map(OpponentSlot::new),
            highlighted: Role::DEFAULT_HIGHLIGHT,
        }
    }

    // ---------------- getters ----------------

    pub fn slots(&self) -> &[OpponentSlot] {
        &self.slots
    }

    pub fn slot(&self, role: Role) -> &OpponentSlot {
        &self.slots[role.index()]
    }

    pub fn highlighted(&self) -> Role {
        self.highlighted
    }

    /// Highlighted slot first, the others in canonical order.
    pub fn display_order(&self) -> Vec<Role> {
        std::iter::once(self.highlighted)
            .chain(Role::ALL.into_iter().filter(|r| *r != self.highlighted))
            .collect()
    }

    // ---------------- transitions ----------------

    /// Flip one fixed spell timer. Returns whether it is running afterwards.
    pub fn toggle_spell(&mut self, role: Role, key: SpellKey, now_ms: u64) -> bool {
        self.slot_mut(role).spell_mut(key).toggle(now_ms)
    }

    pub fn start_spell(&mut self, role: Role, key: SpellKey, now_ms: u64) {
        self.slot_mut(role).spell_mut(key).start(now_ms);
    }

    pub fn cancel_spell(&mut self, role: Role, key: SpellKey) {
        self.slot_mut(role).spell_mut(key).cancel();
    }

    /// Flip the ultimate timer using the champion's rank cooldowns.
    ///
    /// Returns `None` without touching anything when there is no champion or
    /// it has no rank data, otherwise whether the timer is running afterwards.
    pub fn toggle_ult(&mut self, role: Role, champion: Option<&Champion>, now_ms: u64) -> Option<bool> {
        let durations = champion
            .map(|c| c.ult_cooldowns.as_slice())
            .filter(|d| !d.is_empty())?;

        let ult = &mut self.slot_mut(role).ult;
        if ult.is_running(durations, now_ms) {
            ult.last_activation_ms = None;
            Some(false)
        } else {
            ult.last_activation_ms = Some(now_ms);
            Some(true)
        }
    }

    /// Timers are left alone; a running ult is reinterpreted against the new
    /// champion's cooldowns.
    pub fn assign_champion(&mut self, role: Role, champion_id: Option<String>) {
        self.slot_mut(role).champion_id = champion_id;
    }

    pub fn set_spell(&mut self, role: Role, key: SpellKey, spell: SpellId) {
        self.slot_mut(role).spell_mut(key).replace_spell(spell);
    }

    /// Elapsed time means different things per mode, so the countdown is dropped.
    pub fn set_rank_mode(&mut self, role: Role, mode: RankMode) {
        let ult = &mut self.slot_mut(role).ult;
        ult.rank_mode = mode;
        ult.last_activation_ms = None;
    }

    pub fn set_highlighted(&mut self, role: Role) {
        self.highlighted = role;
    }

    pub fn reset_all(&mut self) {
        *self = Session::new();
    }

    // ---------------- persistence ----------------

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Decode a stored session. Anything malformed, or a slot list that does
    /// not hold each role exactly once in canonical order, yields `None`.
    pub fn from_json(bytes: &[u8]) -> Option<Self> {
        let session: Session = serde_json::from_slice(bytes).ok()?;

        let canonical = session
            .slots
            .iter()
            .zip(Role::ALL)
            .all(|(slot, role)| slot.role == role);

        canonical.then_some(session)
    }

    fn slot_mut(&mut self, role: Role) -> &mut OpponentSlot {
        &mut self.slots[role.index()]
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU8;

    use super::*;

    fn champ(cds: &[f64]) -> Champion {
        Champion {
            id: "Annie".to_string(),
            name: "Annie".to_string(),
            ult_name: "Summon: Tibbers".to_string(),
            ult_cooldowns: cds.to_vec(),
            tags: vec!["Mage".to_string()],
        }
    }

    #[test]
    fn new_session_is_idle_with_default_highlight() {
        let s = Session::new();
        assert_eq!(s.highlighted(), Role::Mid);
        for (slot, role) in s.slots().iter().zip(Role::ALL) {
            assert_eq!(slot.role, role);
            assert!(slot.spell1.started_at_ms.is_none());
            assert!(slot.spell2.started_at_ms.is_none());
            assert!(slot.champion_id.is_none());
            assert_eq!(slot.ult, UltTimer::default());
        }
        assert_eq!(s.slot(Role::Jungle).spell2.spell, SpellId::Smite);
    }

    #[test]
    fn spell_timers_are_independent() {
        let mut s = Session::new();
        assert!(s.toggle_spell(Role::Top, SpellKey::Spell1, 1_000));

        let top = s.slot(Role::Top);
        assert!(top.spell1.is_running(2_000));
        assert!(!top.spell2.is_running(2_000));
        assert!(top.ult.last_activation_ms.is_none());
        assert!(!s.slot(Role::Mid).spell1.is_running(2_000));
    }

    #[test]
    fn second_toggle_while_running_goes_idle() {
        let mut s = Session::new();
        s.toggle_spell(Role::Mid, SpellKey::Spell2, 0);
        assert_eq!(s.slot(Role::Mid).spell2.remaining(0), 180);
        assert!(!s.toggle_spell(Role::Mid, SpellKey::Spell2, 10_000));
        assert_eq!(s.slot(Role::Mid).spell2.remaining(10_000), 0);
    }

    #[test]
    fn ult_toggle_needs_rank_data() {
        let mut s = Session::new();
        assert_eq!(s.toggle_ult(Role::Mid, None, 0), None);
        assert_eq!(s.toggle_ult(Role::Mid, Some(&champ(&[])), 0), None);
        assert!(s.slot(Role::Mid).ult.last_activation_ms.is_none());

        let annie = champ(&[130.0, 115.0, 100.0]);
        assert_eq!(s.toggle_ult(Role::Mid, Some(&annie), 0), Some(true));
        assert_eq!(s.toggle_ult(Role::Mid, Some(&annie), 50_000), Some(false));
        assert!(s.slot(Role::Mid).ult.last_activation_ms.is_none());
    }

    #[test]
    fn ult_toggle_after_longest_rank_restarts() {
        let mut s = Session::new();
        let annie = champ(&[130.0, 115.0, 100.0]);
        s.toggle_ult(Role::Mid, Some(&annie), 0);
        assert_eq!(s.toggle_ult(Role::Mid, Some(&annie), 130_000), Some(true));
        assert_eq!(s.slot(Role::Mid).ult.last_activation_ms, Some(130_000));
    }

    #[test]
    fn assigning_champion_keeps_timers() {
        let mut s = Session::new();
        s.toggle_spell(Role::Adc, SpellKey::Spell1, 0);
        s.assign_champion(Role::Adc, Some("Jinx".to_string()));
        assert!(s.slot(Role::Adc).spell1.is_running(1_000));
        assert_eq!(s.slot(Role::Adc).champion_id.as_deref(), Some("Jinx"));
    }

    #[test]
    fn changing_rank_mode_clears_activation() {
        let mut s = Session::new();
        let annie = champ(&[130.0, 115.0, 100.0]);
        s.toggle_ult(Role::Mid, Some(&annie), 0);

        let r2 = RankMode::Manual(NonZeroU8::new(2).unwrap());
        s.set_rank_mode(Role::Mid, r2);
        assert_eq!(s.slot(Role::Mid).ult.rank_mode, r2);
        assert!(s.slot(Role::Mid).ult.last_activation_ms.is_none());
    }

    #[test]
    fn changing_spell_cancels_its_timer_only() {
        let mut s = Session::new();
        s.toggle_spell(Role::Support, SpellKey::Spell1, 0);
        s.toggle_spell(Role::Support, SpellKey::Spell2, 0);
        s.set_spell(Role::Support, SpellKey::Spell2, SpellId::Ignite);

        let sup = s.slot(Role::Support);
        assert_eq!(sup.spell2, SpellTimer::idle(SpellId::Ignite));
        assert!(sup.spell1.is_running(1_000));
    }

    #[test]
    fn highlight_moves_and_orders_display() {
        let mut s = Session::new();
        s.set_highlighted(Role::Support);
        assert_eq!(s.highlighted(), Role::Support);
        assert_eq!(
            s.display_order(),
            vec![Role::Support, Role::Top, Role::Jungle, Role::Mid, Role::Adc]
        );
    }

    #[test]
    fn reset_restores_initial_session() {
        let mut s = Session::new();
        s.toggle_spell(Role::Top, SpellKey::Spell1, 0);
        s.assign_champion(Role::Top, Some("Garen".to_string()));
        s.set_highlighted(Role::Top);
        s.reset_all();
        assert_eq!(s, Session::new());
    }

    #[test]
    fn json_round_trip() {
        let mut s = Session::new();
        s.toggle_spell(Role::Top, SpellKey::Spell1, 1_234);
        s.assign_champion(Role::Mid, Some("Ahri".to_string()));
        s.set_rank_mode(Role::Mid, RankMode::Manual(NonZeroU8::new(3).unwrap()));
        s.set_highlighted(Role::Jungle);

        let bytes = s.to_json().unwrap();
        assert_eq!(Session::from_json(&bytes), Some(s));
    }

    #[test]
    fn rejects_malformed_or_shuffled_sessions() {
        assert_eq!(Session::from_json(b"not json"), None);
        assert_eq!(Session::from_json(b"[]"), None);

        let mut value = serde_json::to_value(Session::new()).unwrap();
        value["slots"][0]["role"] = serde_json::json!("mid");
        let bytes = serde_json::to_vec(&value).unwrap();
        assert_eq!(Session::from_json(&bytes), None);
    }

    #[test]
    fn parses_roles_and_abilities() {
        assert_eq!("JG".parse::<Role>().unwrap(), Role::Jungle);
        assert_eq!("bot".parse::<Role>().unwrap(), Role::Adc);
        assert!("carry".parse::<Role>().is_err());

        assert_eq!("r".parse::<Ability>().unwrap(), Ability::Ult);
        assert_eq!("spell2".parse::<SpellKey>().unwrap(), SpellKey::Spell2);
        assert!("ult".parse::<SpellKey>().is_err());
    }
}
