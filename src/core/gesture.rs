// Author: Dustin Pilgrim
// License: MIT

//! Press disambiguation.
//!
//! A single press means "they just used it" and a quick double press means
//! "undo that". Presses on one target are collected until the target has been
//! quiet for a full window, then the window resolves to exactly one gesture.
//! Nothing here reads a clock; callers pass `now_ms` and poll on every tick.

use std::collections::BTreeMap;

use crate::core::session::{Ability, Role};

pub const DEFAULT_WINDOW_MS: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Target {
    pub role: Role,
    pub ability: Ability,
}

impl Target {
    pub fn new(role: Role, ability: Ability) -> Self {
        Self { role, ability }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Single,
    Double,
}

/// What a resolved gesture should do to the timer it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Start,
    Cancel,
}

/// Single press starts an idle timer, double press cancels a running one.
/// Every other combination is a no-op.
pub fn resolve(gesture: Gesture, is_running: bool) -> Option<Resolution> {
    match (gesture, is_running) {
        (Gesture::Single, false) => Some(Resolution::Start),
        (Gesture::Double, true) => Some(Resolution::Cancel),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub target: Target,
    pub gesture: Gesture,
    /// Instant the window closed.
    pub at_ms: u64,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    count: u32,
    deadline_ms: u64,
}

#[derive(Debug)]
pub struct GestureDisambiguator {
    window_ms: u64,
    pending: BTreeMap<Target, Pending>,
}

impl GestureDisambiguator {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: BTreeMap::new(),
        }
    }

    /// Register a press. The window slides: it closes `window_ms` after the
    /// latest press, not the first. Returns the presses counted so far.
    pub fn press(&mut self, target: Target, now_ms: u64) -> u32 {
        let deadline_ms = now_ms.saturating_add(self.window_ms);

        let entry = self.pending.entry(target).or_insert(Pending {
            count: 0,
            deadline_ms,
        });
        entry.count = entry.count.saturating_add(1);
        entry.deadline_ms = deadline_ms;

        entry.count
    }

    /// Close every window whose deadline has passed, in canonical target order.
    pub fn poll(&mut self, now_ms: u64) -> Vec<Resolved> {
        let expired: Vec<Target> = self
            .pending
            .iter()
            .filter(|(_, p)| now_ms >= p.deadline_ms)
            .map(|(t, _)| *t)
            .collect();

        expired
            .into_iter()
            .filter_map(|target| {
                let p = self.pending.remove(&target)?;
                let gesture = if p.count >= 2 {
                    Gesture::Double
                } else {
                    Gesture::Single
                };
                Some(Resolved {
                    target,
                    gesture,
                    at_ms: p.deadline_ms,
                })
            })
            .collect()
    }

    /// Earliest open deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.values().map(|p| p.deadline_ms).min()
    }

    pub fn is_pending(&self, target: Target) -> bool {
        self.pending.contains_key(&target)
    }

    pub fn pending_targets(&self) -> impl Iterator<Item = Target> + '_ {
        self.pending.keys().copied()
    }

    pub fn cancel(&mut self, target: Target) {
        self.pending.remove(&target);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl Default for GestureDisambiguator {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flash_mid() -> Target {
        Target::new(Role::Mid, Ability::Spell1)
    }

    #[test]
    fn single_press_resolves_after_window() {
        let mut g = GestureDisambiguator::new(250);
        g.press(flash_mid(), 1_000);

        assert!(g.poll(1_249).is_empty());
        let out = g.poll(1_250);
        assert_eq!(
            out,
            vec![Resolved {
                target: flash_mid(),
                gesture: Gesture::Single,
                at_ms: 1_250
            }]
        );
        assert!(!g.is_pending(flash_mid()));
        assert!(g.poll(5_000).is_empty());
    }

    #[test]
    fn window_slides_with_each_press() {
        let mut g = GestureDisambiguator::new(250);
        g.press(flash_mid(), 0);
        g.press(flash_mid(), 200);

        assert!(g.poll(300).is_empty());
        let out = g.poll(450);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].gesture, Gesture::Double);
        assert_eq!(out[0].at_ms, 450);
    }

    #[test]
    fn many_presses_still_yield_one_gesture() {
        let mut g = GestureDisambiguator::new(250);
        for t in [0, 50, 100, 150] {
            g.press(flash_mid(), t);
        }
        let out = g.poll(1_000);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].gesture, Gesture::Double);
    }

    #[test]
    fn presses_after_window_start_a_new_one() {
        let mut g = GestureDisambiguator::new(250);
        g.press(flash_mid(), 0);
        assert_eq!(g.poll(250).len(), 1);

        assert_eq!(g.press(flash_mid(), 10_000), 1);
        let out = g.poll(10_250);
        assert_eq!(out[0].gesture, Gesture::Single);
    }

    #[test]
    fn targets_are_independent() {
        let mut g = GestureDisambiguator::new(250);
        let ult_top = Target::new(Role::Top, Ability::Ult);
        g.press(flash_mid(), 0);
        g.press(ult_top, 100);
        g.press(ult_top, 150);

        let out = g.poll(260);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].target, flash_mid());

        let out = g.poll(400);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].target, ult_top);
        assert_eq!(out[0].gesture, Gesture::Double);
    }

    #[test]
    fn cleared_windows_never_fire() {
        let mut g = GestureDisambiguator::new(250);
        g.press(flash_mid(), 0);
        g.press(Target::new(Role::Top, Ability::Ult), 0);
        assert_eq!(g.next_deadline(), Some(250));

        g.cancel(Target::new(Role::Top, Ability::Ult));
        assert_eq!(g.pending_targets().collect::<Vec<_>>(), vec![flash_mid()]);
        g.clear();
        assert!(g.poll(1_000).is_empty());
        assert_eq!(g.next_deadline(), None);
    }

    #[test]
    fn resolution_table() {
        assert_eq!(resolve(Gesture::Single, false), Some(Resolution::Start));
        assert_eq!(resolve(Gesture::Single, true), None);
        assert_eq!(resolve(Gesture::Double, true), Some(Resolution::Cancel));
        assert_eq!(resolve(Gesture::Double, false), None);
    }
}
