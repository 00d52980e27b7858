// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Process signal handling.

use std::io;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Cancel `token` once the process receives SIGINT or SIGTERM.
///
/// If the handlers cannot be installed the token is left alone and the
/// process keeps running until it is killed.
pub async fn cancel_on_signal(token: CancellationToken) {
    match wait_for_signal().await {
        Ok(signal) => {
            info!("Received {}, shutting down", signal);
            token.cancel();
        }
        Err(e) => error!("Failed to install signal handlers: {}", e),
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::select! {
        _ = sigterm.recv() => Ok("SIGTERM"),
        _ = sigint.recv() => Ok("SIGINT"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl+C")
}
