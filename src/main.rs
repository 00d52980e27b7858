// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use k8s_openapi::api::core::v1::Pod;
use tokio_util::sync::CancellationToken;
use tracing::info;

use pod_labeler::config::Config;
use pod_labeler::kubernetes::{load_ambient_credentials, KubeItemApi};
use pod_labeler::labeler::bootstrap_and_run;
use pod_labeler::shutdown::cancel_on_signal;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting pod labeler");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace={}, interval={:?}, label_key={}, fail_fast={}",
        config.namespace, config.interval, config.label_key, config.fail_fast
    );

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_signal(shutdown.clone()));

    // Credentials come from the pod's service account, so RBAC applies
    let connect = async {
        load_ambient_credentials(&config)
            .await
            .map(KubeItemApi::<Pod>::new)
    };

    bootstrap_and_run(connect, config.clone(), shutdown).await?;

    info!("Pod labeler exited cleanly");
    Ok(())
}
