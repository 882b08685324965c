// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::oneshot;

use crate::core::{
    champion::{Champion, NameFilter},
    events::Event,
    info::SessionSnapshot,
};

#[derive(Debug)]
pub enum ManagerMsg {
    /// Fire-and-forget, used by the ticker.
    Event(Event),

    /// An event from a client that wants to hear whether it was accepted.
    Command {
        event: Event,
        reply: oneshot::Sender<Result<String, String>>,
    },

    GetInfo { reply: oneshot::Sender<SessionSnapshot> },

    ListChampions {
        filter: Option<NameFilter>,
        reply: oneshot::Sender<Result<String, String>>,
    },

    /// Result of the one-shot catalog fetch.
    CatalogLoaded(Result<Vec<Champion>, String>),

    StopDaemon {
        reply: oneshot::Sender<Result<String, String>>,
    },
}
