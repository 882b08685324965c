// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::{mpsc, oneshot};

use crate::core::manager_msg::ManagerMsg;

/// Handle `info` / `info --json`.
pub async fn handle_info(tx: &mpsc::Sender<ManagerMsg>, as_json: bool) -> String {
    let (reply_tx, reply_rx) = oneshot::channel();

    if tx.send(ManagerMsg::GetInfo { reply: reply_tx }).await.is_err() {
        return "ERROR: daemon is shutting down".to_string();
    }

    let Ok(snap) = reply_rx.await else {
        return "ERROR: No response from daemon".to_string();
    };

    if as_json {
        serde_json::to_string(&snap).unwrap_or_else(|e| format!("ERROR: {e}"))
    } else {
        snap.pretty_text
    }
}
