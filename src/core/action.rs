// Author: Dustin Pilgrim
// License: MIT

use crate::core::gesture::Target;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The session changed; write it to the store.
    Persist,

    /// The session went back to its initial state; drop the stored copy.
    ClearStore,

    /// A press window resolved into starting a timer.
    Started {
        target: Target,
        at_ms: u64,
    },

    /// A press window resolved into cancelling a timer.
    Cancelled {
        target: Target,
        at_ms: u64,
    },
}
