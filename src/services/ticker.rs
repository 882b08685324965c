// Author: Dustin Pilgrim
// License: MIT

use crate::core::{events::Event, manager_msg::ManagerMsg, utils::now_ms};
use crate::{sdebug, sinfo};

use tokio::sync::mpsc::Sender;
use tokio::time::{Duration, sleep};

pub async fn run_ticker(tx: Sender<ManagerMsg>, interval_ms: u64) {
    sinfo!("Ticker", "started ({}ms)", interval_ms);

    loop {
        sleep(Duration::from_millis(interval_ms)).await;

        // If the daemon is gone, stop.
        if tx
            .send(ManagerMsg::Event(Event::Tick { now_ms: now_ms() }))
            .await
            .is_err()
        {
            sdebug!("Ticker", "stopping (receiver dropped)");
            break;
        }
    }
}
