// Author: Dustin Pilgrim
// License: MIT

use std::io;
use std::path::PathBuf;

use crate::cli::Args;
use crate::daemon::Daemon;
use crate::services::store::FileStore;
use crate::{serror, sinfo, swarn};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run(args: Args) -> Result<(), AnyError> {
    let _instance_lock = crate::app::platform::acquire_single_instance_lock().map_err(|e| {
        eprintln!("spellwatch: {e}");
        io::Error::new(io::ErrorKind::AlreadyExists, e)
    })?;

    crate::log::enable_file_output();
    crate::log::set_verbose(args.verbose);

    sinfo!("Spellwatch", "starting (log: {})", crate::log::log_path().display());

    // Only bootstrap when no explicit --config was given.
    let config_path: PathBuf = match args.config.as_deref() {
        Some(p) => p.to_path_buf(),
        None => {
            if let Err(e) = crate::config::bootstrap::ensure_user_config_exists() {
                swarn!("Spellwatch", "failed to bootstrap default config: {:#}", e);
            }
            crate::config::resolve_default_config_path()
        }
    };

    let loaded = crate::config::load_from_path(&config_path);
    match &loaded.path {
        Some(p) if *p != config_path => {
            swarn!("Spellwatch", "{} unusable; fell back to {}", config_path.display(), p.display())
        }
        Some(p) => sinfo!("Spellwatch", "config: {}", p.display()),
        None => sinfo!("Spellwatch", "config: built-in defaults"),
    }

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

    let mut daemon = Daemon::new(loaded.cfg, Box::new(FileStore::default()));

    let mut daemon_task = tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move { daemon.run(shutdown_rx, shutdown_tx).await }
    });

    let res = tokio::select! {
        res = &mut daemon_task => res,

        _ = tokio::signal::ctrl_c() => {
            sinfo!("Spellwatch", "received Ctrl+C, shutting down");
            let _ = shutdown_tx.send(true);
            daemon_task.await
        }
    };

    cleanup_socket();

    match res {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            serror!("Spellwatch", "daemon failed: {}", e);
            Err(e)
        }
        Err(join_err) => Err(Box::new(join_err)),
    }
}

fn cleanup_socket() {
    if let Ok(path) = crate::ipc::socket_path() {
        let _ = std::fs::remove_file(path);
    }
}
