// Author: Dustin Pilgrim
// License: MIT

use crate::cli::Command;

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run(cmd: Command) -> Result<(), AnyError> {
    let request = cmd.to_request();

    match crate::ipc::client::send_raw(&request).await {
        Ok(resp) => {
            let out = resp.trim_end();

            if let Some(err) = out.strip_prefix("ERROR: ") {
                eprintln!("spellwatch: {err}");
                std::process::exit(1);
            }

            if !out.is_empty() {
                println!("{out}");
            }
            Ok(())
        }
        Err(e) => {
            if matches!(cmd, Command::Info { json: true }) {
                // Status bars want valid JSON even when the daemon is down.
                println!("{}", serde_json::json!({ "running": false, "error": e }));
                return Ok(());
            }
            eprintln!("spellwatch: {e}");
            std::process::exit(1);
        }
    }
}
