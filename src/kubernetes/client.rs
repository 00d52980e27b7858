// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from ambient credentials

use crate::config::Config;
use crate::error::{LabelerError, Result};
use kube::{Client, Config as KConfig};
use tracing::{debug, info};

/// Create a Kubernetes client from the credentials the platform provides.
///
/// In-cluster this is the pod's service account token and CA bundle. In
/// testing mode the client is inferred from the local kubeconfig instead.
pub async fn load_ambient_credentials(config: &Config) -> Result<Client> {
    let client_config = if config.testing_mode {
        debug!("Testing mode: inferring client config from the local environment");
        KConfig::infer()
            .await
            .map_err(|e| LabelerError::CredentialError(format!("Failed to infer config: {}", e)))?
    } else {
        KConfig::incluster().map_err(|e| {
            LabelerError::CredentialError(format!("Failed to load in-cluster config: {}", e))
        })?
    };

    info!("Using cluster API at {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| LabelerError::CredentialError(format!("Failed to create client: {}", e)))
}
