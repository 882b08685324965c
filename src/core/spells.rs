// Author: Dustin Pilgrim
// License: MIT

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::core::error::{ArgumentError, Error};

/// Summoner spells. Every spell has a single fixed cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellId {
    Flash,
    Ignite,
    Teleport,
    Exhaust,
    Heal,
    Ghost,
    Barrier,
    Cleanse,
    Smite,
}

impl SpellId {
    pub const ALL: [SpellId; 9] = [
        SpellId::Flash,
        SpellId::Ignite,
        SpellId::Teleport,
        SpellId::Exhaust,
        SpellId::Heal,
        SpellId::Ghost,
        SpellId::Barrier,
        SpellId::Cleanse,
        SpellId::Smite,
    ];

    /// Base cooldown in seconds.
    pub fn cooldown_seconds(self) -> f64 {
        match self {
            SpellId::Flash => 300.0,
            SpellId::Ignite => 180.0,
            SpellId::Teleport => 360.0,
            SpellId::Exhaust => 240.0,
            SpellId::Heal => 240.0,
            SpellId::Ghost => 240.0,
            SpellId::Barrier => 180.0,
            SpellId::Cleanse => 240.0,
            SpellId::Smite => 90.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpellId::Flash => "Flash",
            SpellId::Ignite => "Ignite",
            SpellId::Teleport => "Teleport",
            SpellId::Exhaust => "Exhaust",
            SpellId::Heal => "Heal",
            SpellId::Ghost => "Ghost",
            SpellId::Barrier => "Barrier",
            SpellId::Cleanse => "Cleanse",
            SpellId::Smite => "Smite",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            SpellId::Flash => "F",
            SpellId::Ignite => "IGN",
            SpellId::Teleport => "TP",
            SpellId::Exhaust => "EXH",
            SpellId::Heal => "H",
            SpellId::Ghost => "GH",
            SpellId::Barrier => "B",
            SpellId::Cleanse => "CLS",
            SpellId::Smite => "SM",
        }
    }
}

impl fmt::Display for SpellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpellId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SpellId::ALL
            .into_iter()
            .find(|spell| {
                spell.name().eq_ignore_ascii_case(needle)
                    || spell.abbreviation().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| Error::InvalidArgument(ArgumentError::UnknownSpell(s.trim().to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_abbreviations() {
        assert_eq!("flash".parse::<SpellId>().unwrap(), SpellId::Flash);
        assert_eq!("TP".parse::<SpellId>().unwrap(), SpellId::Teleport);
        assert_eq!(" Ignite ".parse::<SpellId>().unwrap(), SpellId::Ignite);
        assert!("blink".parse::<SpellId>().is_err());
    }

    #[test]
    fn smite_is_the_shortest_cooldown() {
        let shortest = SpellId::ALL
            .into_iter()
            .min_by(|a, b| a.cooldown_seconds().total_cmp(&b.cooldown_seconds()));
        assert_eq!(shortest, Some(SpellId::Smite));
    }
}
