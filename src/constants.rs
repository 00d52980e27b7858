// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Field manager recorded on every label patch
pub const FIELD_MANAGER: &str = "pod-labeler";

/// Defaults applied when the matching environment variable is unset
pub mod defaults {
    /// Namespace whose items get labeled
    pub const NAMESPACE: &str = "default";
    /// Delay between two labeling cycles, in seconds
    pub const INTERVAL_SECS: u64 = 20;
    /// Label key carrying the refresh timestamp
    pub const LABEL_KEY: &str = "updated";
}

/// Environment variables read by `Config::from_env`
pub mod env {
    pub const NAMESPACE: &str = "LABELER_NAMESPACE";
    pub const INTERVAL_SECS: &str = "LABELER_INTERVAL_SECS";
    pub const LABEL_KEY: &str = "LABELER_LABEL_KEY";
    pub const FAIL_FAST: &str = "LABELER_FAIL_FAST";
    /// Uses the local kubeconfig instead of the in-cluster service account
    pub const TESTING_MODE: &str = "TESTING_MODE";
}
