// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Listing and label patching of namespaced items

use crate::constants::FIELD_MANAGER;
use crate::error::Result;
use k8s_openapi::NamespaceResourceScope;
use kube::{
    api::{ListParams, Patch, PatchParams},
    Api, Client, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::future::Future;
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// An item observed in a listing, identified by name and namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceItem {
    pub name: String,
    pub namespace: String,
}

/// The two cluster calls the labeler needs
pub trait ItemApi {
    /// List every item currently in `namespace`
    fn list_items(
        &self,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<ResourceItem>>> + Send;

    /// Merge `labels` into the labels of the named item, leaving other labels untouched
    fn patch_item_labels(
        &self,
        name: &str,
        namespace: &str,
        labels: &BTreeMap<String, String>,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// `ItemApi` backed by the Kubernetes API for resources of kind `K`
pub struct KubeItemApi<K> {
    client: Client,
    _kind: PhantomData<fn() -> K>,
}

impl<K> KubeItemApi<K> {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            _kind: PhantomData,
        }
    }
}

#[derive(Debug, Serialize)]
struct MetadataPatch<'a> {
    metadata: LabelsPatch<'a>,
}

#[derive(Debug, Serialize)]
struct LabelsPatch<'a> {
    labels: &'a BTreeMap<String, String>,
}

impl<K> ItemApi for KubeItemApi<K>
where
    K: Resource<Scope = NamespaceResourceScope>
        + Clone
        + DeserializeOwned
        + Debug
        + Send
        + Sync
        + 'static,
    K::DynamicType: Default,
{
    #[instrument(skip(self))]
    async fn list_items(&self, namespace: &str) -> Result<Vec<ResourceItem>> {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        let list = api.list(&ListParams::default()).await?;

        debug!("Listed {} items", list.items.len());

        Ok(list
            .items
            .iter()
            .map(|item| ResourceItem {
                name: item.name_any(),
                namespace: item.namespace().unwrap_or_else(|| namespace.to_string()),
            })
            .collect())
    }

    #[instrument(skip(self, labels))]
    async fn patch_item_labels(
        &self,
        name: &str,
        namespace: &str,
        labels: &BTreeMap<String, String>,
    ) -> Result<()> {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        let body = MetadataPatch {
            metadata: LabelsPatch { labels },
        };
        let pp = PatchParams {
            field_manager: Some(FIELD_MANAGER.to_string()),
            ..Default::default()
        };

        api.patch(name, &pp, &Patch::Merge(&body)).await?;
        Ok(())
    }
}
