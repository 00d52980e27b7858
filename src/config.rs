// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{defaults, env as vars};
use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Labeler configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Namespace whose items are labeled every cycle
    pub namespace: String,
    /// Delay between the end of one cycle and the start of the next
    pub interval: Duration,
    /// Label key set to the current timestamp
    pub label_key: String,
    /// Abort on any list or patch error instead of skipping
    pub fail_fast: bool,
    pub testing_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            namespace: defaults::NAMESPACE.to_string(),
            interval: Duration::from_secs(defaults::INTERVAL_SECS),
            label_key: defaults::LABEL_KEY.to_string(),
            fail_fast: false,
            testing_mode: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace =
            lookup(vars::NAMESPACE).unwrap_or_else(|| defaults::NAMESPACE.to_string());
        if namespace.trim().is_empty() {
            bail!("{} must not be empty", vars::NAMESPACE);
        }

        let interval_secs = match lookup(vars::INTERVAL_SECS) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| {
                    format!(
                        "{} must be a whole number of seconds, got '{}'",
                        vars::INTERVAL_SECS,
                        raw
                    )
                })?,
            None => defaults::INTERVAL_SECS,
        };
        if interval_secs == 0 {
            bail!("{} must be at least 1", vars::INTERVAL_SECS);
        }

        let label_key =
            lookup(vars::LABEL_KEY).unwrap_or_else(|| defaults::LABEL_KEY.to_string());
        if label_key.trim().is_empty() {
            bail!("{} must not be empty", vars::LABEL_KEY);
        }

        let fail_fast = parse_flag(lookup(vars::FAIL_FAST), vars::FAIL_FAST)?;
        // For testing, uses the KUBECONFIG env var instead of the pod's service account
        let testing_mode = parse_flag(lookup(vars::TESTING_MODE), vars::TESTING_MODE)?;

        Ok(Config {
            namespace,
            interval: Duration::from_secs(interval_secs),
            label_key,
            fail_fast,
            testing_mode,
        })
    }
}

fn parse_flag(value: Option<String>, name: &str) -> Result<bool> {
    match value {
        Some(raw) => raw
            .trim()
            .to_ascii_lowercase()
            .parse()
            .with_context(|| format!("{} must be 'true' or 'false', got '{}'", name, raw)),
        None => Ok(false),
    }
}
