//! Read-only reference pages: resource links and logistics providers

use std::collections::BTreeMap;
use std::sync::Arc;

use relocate_types::{LogisticsProvider, ResourceLink};

use super::logged;
use crate::api::RelocateApi;

pub struct ResourcesView {
    api: Arc<dyn RelocateApi>,
    resources: BTreeMap<String, Vec<ResourceLink>>,
}

impl ResourcesView {
    pub fn new(api: Arc<dyn RelocateApi>) -> Self {
        Self {
            api,
            resources: BTreeMap::new(),
        }
    }

    pub async fn load(&mut self) -> bool {
        match logged("load resources", self.api.resources().await) {
            Some(resources) => {
                self.resources = resources;
                true
            }
            None => false,
        }
    }

    pub fn by_category(&self) -> &BTreeMap<String, Vec<ResourceLink>> {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct LogisticsView {
    api: Arc<dyn RelocateApi>,
    providers: BTreeMap<String, Vec<LogisticsProvider>>,
}

impl LogisticsView {
    pub fn new(api: Arc<dyn RelocateApi>) -> Self {
        Self {
            api,
            providers: BTreeMap::new(),
        }
    }

    pub async fn load(&mut self) -> bool {
        match logged("load logistics providers", self.api.logistics_providers().await) {
            Some(providers) => {
                self.providers = providers;
                true
            }
            None => false,
        }
    }

    pub fn by_category(&self) -> &BTreeMap<String, Vec<LogisticsProvider>> {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
