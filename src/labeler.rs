// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The labeling loop: list items, stamp each with the current time, sleep, repeat.

use crate::config::Config;
use crate::error::{LabelerError, Result};
use crate::kubernetes::ItemApi;
use std::collections::BTreeMap;
use std::future::Future;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Source of wall-clock time for label values
pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Render a point in time as fractional seconds since the Unix epoch, e.g. `1000.5`.
///
/// The value always carries a decimal point so consumers can tell it apart
/// from an integer counter.
pub fn label_timestamp(at: SystemTime) -> String {
    let secs = at.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs_f64();
    let rendered = secs.to_string();
    if rendered.contains('.') {
        rendered
    } else {
        format!("{}.0", rendered)
    }
}

/// A single label to merge into an item's metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPatch {
    pub key: String,
    pub value: String,
}

impl LabelPatch {
    /// Patch setting `key` to the clock's current time
    pub fn now(key: &str, clock: &impl Clock) -> Self {
        Self {
            key: key.to_string(),
            value: label_timestamp(clock.now()),
        }
    }

    pub fn labels(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(self.key.clone(), self.value.clone())])
    }
}

/// Outcome of one labeling cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub listed: usize,
    pub patched: usize,
    pub skipped: usize,
    /// The listing failed with a recoverable error and no item was touched
    pub list_failed: bool,
}

pub struct Labeler<A, C = SystemClock> {
    api: A,
    config: Config,
    clock: C,
}

impl<A: ItemApi> Labeler<A> {
    pub fn new(api: A, config: Config) -> Self {
        Self::with_clock(api, config, SystemClock)
    }
}

impl<A: ItemApi, C: Clock> Labeler<A, C> {
    pub fn with_clock(api: A, config: Config, clock: C) -> Self {
        Self { api, config, clock }
    }

    /// Run labeling cycles until `shutdown` is cancelled or a fatal error occurs.
    pub async fn run(&self, shutdown: CancellationToken) -> Result<()> {
        info!(
            "Labeler started: namespace={}, interval={:?}, label={}",
            self.config.namespace, self.config.interval, self.config.label_key
        );

        while !shutdown.is_cancelled() {
            let report = self.run_cycle().await?;
            debug!("Cycle finished: {:?}", report);

            // Wait before polling the API again
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = sleep(self.config.interval) => {}
            }
        }

        info!("Labeler stopped");
        Ok(())
    }

    /// List the configured namespace once and patch every listed item.
    #[instrument(skip(self), fields(namespace = %self.config.namespace))]
    pub async fn run_cycle(&self) -> Result<CycleReport> {
        info!("Attempting to list items");

        let items = match self.api.list_items(&self.config.namespace).await {
            Ok(items) => items,
            Err(e) if self.tolerates(&e) => {
                warn!("Failed to list items, skipping cycle: {}", e);
                return Ok(CycleReport {
                    list_failed: true,
                    ..Default::default()
                });
            }
            Err(e) => return Err(e),
        };

        let mut report = CycleReport {
            listed: items.len(),
            ..Default::default()
        };

        for item in &items {
            let patch = LabelPatch::now(&self.config.label_key, &self.clock);
            info!("Labeling {}/{}", item.namespace, item.name);

            match self
                .api
                .patch_item_labels(&item.name, &item.namespace, &patch.labels())
                .await
            {
                Ok(()) => report.patched += 1,
                Err(e) if self.tolerates(&e) => {
                    warn!("Skipping {}/{}: {}", item.namespace, item.name, e);
                    report.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Labeled {} of {} items ({} skipped)",
            report.patched, report.listed, report.skipped
        );
        Ok(report)
    }

    fn tolerates(&self, err: &LabelerError) -> bool {
        !self.config.fail_fast && err.is_recoverable()
    }
}

/// Acquire the item API through `connect`, then run the labeler until shutdown.
///
/// A failing `connect` returns immediately; no listing is attempted.
pub async fn bootstrap_and_run<A, F>(
    connect: F,
    config: Config,
    shutdown: CancellationToken,
) -> Result<()>
where
    A: ItemApi,
    F: Future<Output = Result<A>>,
{
    let api = connect.await?;
    info!("Connected to Kubernetes cluster");

    Labeler::new(api, config).run(shutdown).await
}
