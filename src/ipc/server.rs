// Author: Dustin Pilgrim
// License: MIT

use std::os::unix::net::UnixStream as StdUnixStream;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{UnixListener, UnixStream},
    sync::mpsc,
    time::{Duration, timeout},
};

use crate::core::manager_msg::ManagerMsg;
use crate::{sdebug, serror, sinfo};

use super::router::route_command;

/// Longest command line accepted from a client.
const MAX_REQUEST: u64 = 4096;

/// Bind the control socket and serve it in the background.
pub async fn spawn_ipc_server(tx: mpsc::Sender<ManagerMsg>) -> Result<(), String> {
    let path = super::socket_path()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
    }

    if path.exists() {
        if StdUnixStream::connect(&path).is_ok() {
            return Err(format!("socket {} is already in use", path.display()));
        }
        let _ = std::fs::remove_file(&path);
    }

    let listener =
        UnixListener::bind(&path).map_err(|e| format!("failed to bind {}: {e}", path.display()))?;
    sinfo!("Ipc", "listening on {}", path.display());

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut stream, _addr)) => {
                    let tx = tx.clone();

                    tokio::spawn(async move {
                        let result = timeout(Duration::from_secs(10), handle_connection(&mut stream, &tx)).await;

                        match result {
                            Ok(Err(e)) => serror!("Ipc", "error handling connection: {}", e),
                            Err(_) => serror!("Ipc", "connection timed out after 10 seconds"),
                            Ok(Ok(())) => {}
                        }

                        let _ = stream.shutdown().await;
                    });
                }
                Err(e) => serror!("Ipc", "failed to accept connection: {}", e),
            }
        }
    });

    Ok(())
}

async fn handle_connection(stream: &mut UnixStream, tx: &mpsc::Sender<ManagerMsg>) -> std::io::Result<()> {
    let mut buf = Vec::new();
    (&mut *stream).take(MAX_REQUEST).read_to_end(&mut buf).await?;

    let cmd = String::from_utf8_lossy(&buf).trim().to_string();
    if cmd.is_empty() {
        return Ok(());
    }

    if !cmd.starts_with("info") {
        sdebug!("Ipc", "received: {}", cmd);
    }

    let response = route_command(&cmd, tx).await;

    stream.write_all(response.as_bytes()).await?;
    stream.flush().await?;

    Ok(())
}
