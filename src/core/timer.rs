// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::core::spells::SpellId;

/// Confidence that an ability is back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CooldownStatus {
    /// Certainly still on cooldown.
    Down,
    /// Could be up, depending on what the opponent has (rank, cooldown reduction).
    Maybe,
    /// Certainly available.
    Up,
}

impl CooldownStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CooldownStatus::Down => "down",
            CooldownStatus::Maybe => "maybe",
            CooldownStatus::Up => "up",
        }
    }
}

/// Whole seconds left on a fixed cooldown.
///
/// Idle timers report `0`. Elapsed time before `started_at_ms` counts as zero,
/// and the result is rounded up so a running timer never shows `0`.
pub fn remaining_seconds(now_ms: u64, started_at_ms: Option<u64>, duration_secs: f64) -> u64 {
    let Some(start) = started_at_ms else {
        return 0;
    };

    let duration_ms = duration_ms(duration_secs);
    let elapsed_ms = now_ms.saturating_sub(start);

    duration_ms.saturating_sub(elapsed_ms).div_ceil(1000)
}

fn duration_ms(duration_secs: f64) -> u64 {
    if duration_secs.is_finite() && duration_secs > 0.0 {
        (duration_secs * 1000.0).round() as u64
    } else {
        0
    }
}

/// One fixed-duration spell slot: which spell it holds and when it was last used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellTimer {
    pub spell: SpellId,
    #[serde(default)]
    pub started_at_ms: Option<u64>,
}

impl SpellTimer {
    pub fn idle(spell: SpellId) -> Self {
        Self {
            spell,
            started_at_ms: None,
        }
    }

    pub fn duration_seconds(&self) -> f64 {
        self.spell.cooldown_seconds()
    }

    pub fn remaining(&self, now_ms: u64) -> u64 {
        remaining_seconds(now_ms, self.started_at_ms, self.duration_seconds())
    }

    pub fn is_running(&self, now_ms: u64) -> bool {
        self.remaining(now_ms) > 0
    }

    /// Always allowed; a previous run is overwritten.
    pub fn start(&mut self, now_ms: u64) {
        self.started_at_ms = Some(now_ms);
    }

    pub fn cancel(&mut self) {
        self.started_at_ms = None;
    }

    /// Cancel when running, start otherwise. Returns whether the timer now runs.
    pub fn toggle(&mut self, now_ms: u64) -> bool {
        if self.is_running(now_ms) {
            self.cancel();
            false
        } else {
            self.start(now_ms);
            true
        }
    }

    /// Swap the spell held by this slot. Any running countdown belonged to the
    /// old spell, so it is dropped. Picking the same spell again is a no-op.
    pub fn replace_spell(&mut self, spell: SpellId) {
        if self.spell != spell {
            self.spell = spell;
            self.started_at_ms = None;
        }
    }

    /// Display values at `now_ms`.
    ///
    /// `warn_fraction` is the share of the base cooldown below which the spell
    /// is reported as `Maybe` instead of `Down`.
    pub fn project(&self, now_ms: u64, warn_fraction: f64) -> SpellProjection {
        let duration = self.duration_seconds();
        let remaining = self.remaining(now_ms);

        let progress = if remaining > 0 && duration > 0.0 {
            (remaining as f64 / duration).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let status = if remaining == 0 {
            CooldownStatus::Up
        } else if progress > warn_fraction {
            CooldownStatus::Down
        } else {
            CooldownStatus::Maybe
        };

        SpellProjection {
            spell: self.spell,
            remaining,
            duration,
            progress,
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellProjection {
    pub spell: SpellId,
    pub remaining: u64,
    pub duration: f64,
    pub progress: f64,
    pub status: CooldownStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cooldown_at_start_and_zero_at_end() {
        for d in [1.0, 90.0, 120.0, 300.0] {
            let start = 5_000;
            assert_eq!(remaining_seconds(start, Some(start), d), d as u64);
            let end = start + (d as u64) * 1000;
            assert_eq!(remaining_seconds(end, Some(start), d), 0);
        }
    }

    #[test]
    fn idle_timer_has_nothing_left() {
        assert_eq!(remaining_seconds(10_000, None, 300.0), 0);
    }

    #[test]
    fn partial_seconds_round_up() {
        // 119.999s elapsed of 120s still shows 1.
        assert_eq!(remaining_seconds(119_999, Some(0), 120.0), 1);
        assert_eq!(remaining_seconds(10_500, Some(0), 120.0), 110);
    }

    #[test]
    fn clock_behind_start_counts_as_no_elapsed_time() {
        assert_eq!(remaining_seconds(1_000, Some(5_000), 60.0), 60);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut t = SpellTimer::idle(SpellId::Flash);
        t.cancel();
        assert_eq!(t, SpellTimer::idle(SpellId::Flash));
        t.cancel();
        assert_eq!(t, SpellTimer::idle(SpellId::Flash));
    }

    #[test]
    fn toggle_starts_then_cancels() {
        let mut t = SpellTimer::idle(SpellId::Smite);
        assert!(t.toggle(0));
        assert_eq!(t.remaining(0), 90);
        assert!(!t.toggle(10_000));
        assert_eq!(t.remaining(10_000), 0);
    }

    #[test]
    fn toggle_after_expiry_restarts() {
        let mut t = SpellTimer::idle(SpellId::Smite);
        t.start(0);
        assert!(t.toggle(90_000));
        assert_eq!(t.started_at_ms, Some(90_000));
    }

    #[test]
    fn replacing_spell_cancels_countdown() {
        let mut t = SpellTimer::idle(SpellId::Flash);
        t.start(0);
        t.replace_spell(SpellId::Ghost);
        assert_eq!(t, SpellTimer::idle(SpellId::Ghost));
    }

    #[test]
    fn projection_turns_maybe_in_last_tenth() {
        let mut t = SpellTimer::idle(SpellId::Flash);
        t.start(0);

        let p = t.project(100_000, 0.1);
        assert_eq!(p.status, CooldownStatus::Down);
        assert_eq!(p.remaining, 200);

        // 30s of 300s left is exactly 10%.
        let p = t.project(270_000, 0.1);
        assert_eq!(p.status, CooldownStatus::Maybe);

        let p = t.project(300_000, 0.1);
        assert_eq!(p.status, CooldownStatus::Up);
        assert_eq!(p.progress, 0.0);
    }
}
