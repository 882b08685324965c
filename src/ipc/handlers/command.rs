// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::{mpsc, oneshot};

use crate::core::{events::Event, manager_msg::ManagerMsg};

/// Any command that changes the session.
pub async fn handle_event(tx: &mpsc::Sender<ManagerMsg>, event: Event) -> String {
    let (reply_tx, reply_rx) = oneshot::channel();

    if tx
        .send(ManagerMsg::Command {
            event,
            reply: reply_tx,
        })
        .await
        .is_err()
    {
        return "ERROR: daemon is shutting down".to_string();
    }

    super::reply_text(reply_rx.await, "OK")
}
