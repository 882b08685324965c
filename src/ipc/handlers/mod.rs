// Author: Dustin Pilgrim
// License: MIT

pub mod champions;
pub mod command;
pub mod info;
pub mod stop;

use tokio::sync::oneshot;

/// Turn a daemon reply into socket text; errors are prefixed with `ERROR:`.
fn reply_text(res: Result<Result<String, String>, oneshot::error::RecvError>, fallback: &str) -> String {
    match res {
        Ok(Ok(msg)) => {
            let out = msg.trim_end();
            if out.is_empty() {
                fallback.to_string()
            } else {
                out.to_string()
            }
        }
        Ok(Err(e)) => format!("ERROR: {}", e.trim_end()),
        Err(_) => "ERROR: No response from daemon".to_string(),
    }
}
