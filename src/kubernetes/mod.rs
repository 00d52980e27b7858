// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for credential bootstrap and namespaced item access.

pub mod client;
pub mod items;

pub use client::load_ambient_credentials;
pub use items::{ItemApi, KubeItemApi, ResourceItem};
