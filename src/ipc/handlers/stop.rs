// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::{mpsc, oneshot};

use crate::core::manager_msg::ManagerMsg;

/// Handle `spellwatch stop`.
///
/// Asks the daemon to exit cleanly and replies once it has acknowledged.
pub async fn handle_stop(tx: &mpsc::Sender<ManagerMsg>) -> String {
    let (reply_tx, reply_rx) = oneshot::channel();

    if tx
        .send(ManagerMsg::StopDaemon { reply: reply_tx })
        .await
        .is_err()
    {
        return "spellwatch daemon not running".to_string();
    }

    super::reply_text(reply_rx.await, "Stopping spellwatch daemon")
}
