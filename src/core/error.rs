// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use crate::core::session::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A command argument could not be understood.
    ///
    /// Examples:
    /// - role name that is not one of the five lanes
    /// - spell name that does not exist
    /// - rank that is not `auto` or a positive number
    InvalidArgument(ArgumentError),

    /// The request is well formed but does not fit the current session or catalog.
    ///
    /// Examples:
    /// - champion id not present in the loaded catalog
    /// - pinned rank higher than the champion's known ranks
    /// - ultimate press for a slot without ultimate cooldown data
    InvalidState(StateError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    UnknownRole(String),
    UnknownAbility(String),
    UnknownSpell(String),
    InvalidRank(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    UnknownChampion(String),
    RankOutOfRange { rank: u8, max: usize },
    NoUltimate(Role),
}

// ---------------- Display ----------------

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(e) => write!(f, "{e}"),
            Error::InvalidState(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::UnknownRole(s) =>
                write!(f, "unknown role '{s}' (expected top, jungle, mid, adc or support)"),
            ArgumentError::UnknownAbility(s) =>
                write!(f, "unknown ability '{s}' (expected spell1, spell2 or ult)"),
            ArgumentError::UnknownSpell(s) =>
                write!(f, "unknown spell '{s}'"),
            ArgumentError::InvalidRank(s) =>
                write!(f, "invalid rank '{s}' (expected auto or a number from 1)"),
        }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::UnknownChampion(id) =>
                write!(f, "unknown champion '{id}'"),
            StateError::RankOutOfRange { rank, max } =>
                write!(f, "rank {rank} is out of range (champion has {max} ranks)"),
            StateError::NoUltimate(role) =>
                write!(f, "{} has no ultimate cooldown data", role.label()),
        }
    }
}

impl std::error::Error for Error {}
