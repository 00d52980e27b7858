// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelerError {
    #[error("Failed to load cluster credentials: {0}")]
    CredentialError(String),

    #[error("Kubernetes API request failed: {0}")]
    TransportError(#[source] kube::Error),

    #[error("Kubernetes API denied the request: {0}")]
    AuthError(#[source] kube::Error),

    #[error("Resource not found: {0}")]
    NotFoundError(#[source] kube::Error),
}

impl LabelerError {
    /// Whether the loop may log this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::TransportError(_) | Self::NotFoundError(_))
    }
}

impl From<kube::Error> for LabelerError {
    fn from(err: kube::Error) -> Self {
        match &err {
            kube::Error::Api(resp) if resp.code == 404 => Self::NotFoundError(err),
            kube::Error::Api(resp) if resp.code == 401 || resp.code == 403 => Self::AuthError(err),
            _ => Self::TransportError(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, LabelerError>;
