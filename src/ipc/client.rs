// Author: Dustin Pilgrim
// License: MIT

use std::future::Future;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::UnixStream,
    time::{Duration, timeout},
};

const STEP_TIMEOUT: Duration = Duration::from_secs(2);

async fn step<T>(what: &str, fut: impl Future<Output = std::io::Result<T>>) -> Result<T, String> {
    timeout(STEP_TIMEOUT, fut)
        .await
        .map_err(|_| format!("timeout {what}"))?
        .map_err(|e| format!("{what} failed: {e}"))
}

/// Send one command line to the daemon and return its reply.
pub async fn send_raw(cmd: &str) -> Result<String, String> {
    let path = crate::ipc::socket_path()?;

    if !path.exists() {
        return Err("daemon not running".to_string());
    }

    let mut stream = step("connecting to daemon", UnixStream::connect(&path)).await?;

    step("writing request", stream.write_all(cmd.as_bytes())).await?;
    step("finalizing request", stream.shutdown()).await?;

    let mut resp = Vec::new();
    step("reading response", stream.read_to_end(&mut resp)).await?;

    Ok(String::from_utf8_lossy(&resp).to_string())
}
