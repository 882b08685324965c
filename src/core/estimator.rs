// Author: Dustin Pilgrim
// License: MIT

//! Cooldown projection for ultimates whose cooldown depends on an unknown rank.
//!
//! The engine never sees the opponent's real rank. In `Auto` mode the headline
//! countdown uses the longest possible cooldown, while the status reports how
//! sure we can be that the ultimate is back:
//!
//! - `Down`  : not even the best-guess rank would be available yet
//! - `Maybe` : available at some rank, but not at every rank
//! - `Up`    : available whatever the rank is
//!
//! Elapsed time is floored to whole seconds and remaining time is rounded up.

use std::{fmt, num::NonZeroU8, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::core::{
    error::{ArgumentError, Error},
    timer::CooldownStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "rank", rename_all = "lowercase")]
pub enum RankMode {
    #[default]
    Auto,
    Manual(NonZeroU8),
}

impl fmt::Display for RankMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankMode::Auto => f.write_str("auto"),
            RankMode::Manual(r) => write!(f, "R{r}"),
        }
    }
}

impl FromStr for RankMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("auto") {
            return Ok(RankMode::Auto);
        }

        let digits = t.strip_prefix(['r', 'R']).unwrap_or(t);
        digits
            .parse::<NonZeroU8>()
            .map(RankMode::Manual)
            .map_err(|_| Error::InvalidArgument(ArgumentError::InvalidRank(t.to_string())))
    }
}

/// Persisted state of one ultimate timer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UltTimer {
    #[serde(default)]
    pub last_activation_ms: Option<u64>,
    #[serde(default)]
    pub rank_mode: RankMode,
}

impl UltTimer {
    pub fn is_running(&self, durations: &[f64], now_ms: u64) -> bool {
        project(self, durations, now_ms).is_some_and(|p| p.is_running())
    }
}

/// Display-ready view of an ultimate timer at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UltProjection {
    /// Headline countdown in whole seconds.
    pub remaining: u64,
    /// Whole seconds since activation.
    pub elapsed: u64,
    pub max_duration: f64,
    /// Cooldown of the rank used for classification.
    pub effective_duration: f64,
    /// 1-based rank used for classification.
    pub rank: usize,
    pub rank_label: String,
    pub status: CooldownStatus,
}

impl UltProjection {
    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    pub fn progress(&self) -> f64 {
        if self.remaining == 0 || self.effective_duration <= 0.0 {
            return 0.0;
        }
        (self.remaining as f64 / self.effective_duration).clamp(0.0, 1.0)
    }
}

/// Project an ultimate timer. `None` when it is idle or there is no rank data.
pub fn project(state: &UltTimer, durations: &[f64], now_ms: u64) -> Option<UltProjection> {
    let last = state.last_activation_ms?;
    if durations.is_empty() {
        return None;
    }

    let elapsed = now_ms.saturating_sub(last) / 1000;
    let elapsed_f = elapsed as f64;
    let max_duration = durations.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let projection = match state.rank_mode {
        RankMode::Manual(pinned) => {
            let pinned = usize::from(pinned.get());
            let idx = (pinned - 1).min(durations.len() - 1);
            let effective = durations[idx];

            let status = if elapsed_f < effective {
                CooldownStatus::Down
            } else {
                CooldownStatus::Up
            };

            UltProjection {
                remaining: seconds_left(effective, elapsed_f),
                elapsed,
                max_duration,
                effective_duration: effective,
                rank: pinned,
                rank_label: format!("R{pinned}"),
                status,
            }
        }

        RankMode::Auto => {
            // Highest rank that would already be available; rank 1 if none is.
            let (idx, effective) = durations
                .iter()
                .copied()
                .enumerate()
                .filter(|(_, cd)| *cd <= elapsed_f)
                .last()
                .unwrap_or((0, durations[0]));

            let status = if elapsed_f < effective {
                CooldownStatus::Down
            } else if elapsed_f >= max_duration {
                CooldownStatus::Up
            } else {
                CooldownStatus::Maybe
            };

            UltProjection {
                remaining: seconds_left(max_duration, elapsed_f),
                elapsed,
                max_duration,
                effective_duration: effective,
                rank: idx + 1,
                rank_label: format!("R{}", idx + 1),
                status,
            }
        }
    };

    Some(projection)
}

fn seconds_left(duration: f64, elapsed: f64) -> u64 {
    let left = (duration - elapsed).ceil();
    if left > 0.0 { left as u64 } else { 0 }
}
