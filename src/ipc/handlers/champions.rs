// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::{mpsc, oneshot};

use crate::core::{champion::NameFilter, manager_msg::ManagerMsg};

pub async fn handle_champions(tx: &mpsc::Sender<ManagerMsg>, filter: Option<NameFilter>) -> String {
    let (reply_tx, reply_rx) = oneshot::channel();

    if tx
        .send(ManagerMsg::ListChampions {
            filter,
            reply: reply_tx,
        })
        .await
        .is_err()
    {
        return "ERROR: daemon is shutting down".to_string();
    }

    super::reply_text(reply_rx.await, "No champions")
}
