//! Multi-resource data-loading coordinator.
//!
//! One parameterized "named async resource" store replaces the original
//! per-resource effect blocks: every dashboard slice maps to a
//! [`LoadState`], all mutation flows through a reducer keyed by
//! [`ResourceKey`], and each non-SSR resource is loaded by its own task.
//! Failure domains are isolated; one slice erroring never touches the
//! other five.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;
use crate::resource::{DASHBOARD_RESOURCES, ResourceKey};

/// The seam between the coordinator and whatever produces slice data.
/// [`crate::client::ApiClient`] is the production implementation; tests
/// substitute their own.
#[async_trait]
pub trait ResourceLoader: Send + Sync + 'static {
    async fn fetch(&self, key: ResourceKey) -> Result<Value, FetchError>;
}

/// Per-resource {data, loading, error} triple.
///
/// After settlement at most one of `loading`, `error`, `data` describes the
/// terminal condition; mid-flight, consumers see `loading == true` with
/// whatever initial data was seeded.
#[derive(Debug, Clone, Default)]
pub struct LoadState {
    pub data: Option<Value>,
    pub loading: bool,
    pub error: Option<Arc<FetchError>>,
}

impl LoadState {
    /// True iff settled without error and the data is present and truthy.
    pub fn ready(&self) -> bool {
        !self.loading && self.error.is_none() && self.data.as_ref().is_some_and(is_truthy)
    }
}

/// Truthiness as the dashboard's consumers expect it: `null`, `false`, `0`
/// and `""` are falsy; arrays and objects are truthy even when empty.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub type ResourceStore = HashMap<ResourceKey, LoadState>;

/// State transitions for one resource. Every mutation of the store goes
/// through [`reduce`]; nothing writes `LoadState` fields directly.
#[derive(Debug)]
pub enum ResourceAction {
    Started,
    Loaded(Value),
    Failed(FetchError),
}

fn reduce(store: &mut ResourceStore, key: ResourceKey, action: ResourceAction) {
    let state = store.entry(key).or_default();
    match action {
        ResourceAction::Started => {
            state.loading = true;
            state.error = None;
        }
        ResourceAction::Loaded(value) => {
            state.data = Some(value);
            state.loading = false;
        }
        ResourceAction::Failed(err) => {
            log::warn!("load of {} failed: {}", key, err);
            state.error = Some(Arc::new(err));
            state.loading = false;
        }
    }
}

/// Which resources the caller already holds authoritative data for.
/// SSR-enabled resources are never fetched.
#[derive(Debug, Clone, Default)]
pub struct SsrConfig(HashMap<ResourceKey, bool>);

impl SsrConfig {
    /// Nothing prefetched; every resource will be loaded.
    pub fn none() -> Self {
        Self::default()
    }

    /// Everything prefetched; no fetch will be issued.
    pub fn all() -> Self {
        let mut config = Self::default();
        for key in DASHBOARD_RESOURCES {
            config.0.insert(key, true);
        }
        config
    }

    pub fn enable(mut self, key: ResourceKey) -> Self {
        self.0.insert(key, true);
        self
    }

    pub fn enabled(&self, key: ResourceKey) -> bool {
        self.0.get(&key).copied().unwrap_or(false)
    }
}

/// Data the caller supplies up front, typically for SSR-enabled resources.
#[derive(Debug, Clone, Default)]
pub struct InitialData(HashMap<ResourceKey, Value>);

impl InitialData {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: ResourceKey, value: Value) -> Self {
        self.0.insert(key, value);
        self
    }

    pub fn get(&self, key: ResourceKey) -> Option<&Value> {
        self.0.get(&key)
    }
}

pub struct DashboardCoordinator<L: ResourceLoader> {
    loader: Arc<L>,
    ssr: SsrConfig,
    store: Arc<Mutex<ResourceStore>>,
}

impl<L: ResourceLoader> DashboardCoordinator<L> {
    /// Seed the store: each resource starts with its supplied initial data,
    /// `loading` set unless SSR covers it, and no error.
    pub fn new(loader: L, ssr: SsrConfig, initial: InitialData) -> Self {
        let mut store = ResourceStore::new();
        for key in DASHBOARD_RESOURCES {
            store.insert(
                key,
                LoadState {
                    data: initial.get(key).cloned(),
                    loading: !ssr.enabled(key),
                    error: None,
                },
            );
        }
        DashboardCoordinator {
            loader: Arc::new(loader),
            ssr,
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Load every resource SSR does not cover, one task each, all started
    /// together with no ordering between them. Each resource settles exactly
    /// once, the moment its own fetch finishes; the shared store is
    /// observable mid-flight through [`snapshot`](Self::snapshot) and
    /// [`ready`](Self::ready). A loader that panics settles its resource
    /// with the generic `Failed to fetch <resource> data` error.
    ///
    /// Resolves once every pending resource has settled.
    pub async fn load(&self) {
        let mut pending = Vec::new();
        for key in DASHBOARD_RESOURCES {
            if self.ssr.enabled(key) {
                continue;
            }
            reduce(&mut self.store.lock().unwrap(), key, ResourceAction::Started);
            let loader = Arc::clone(&self.loader);
            let store = Arc::clone(&self.store);
            pending.push(tokio::spawn(async move {
                // The fetch runs in its own task so a panic inside the
                // loader reaches us as a JoinError instead of unwinding
                // past the settlement below.
                let fetched = tokio::spawn(async move { loader.fetch(key).await }).await;
                let action = match fetched {
                    Ok(Ok(value)) => ResourceAction::Loaded(value),
                    Ok(Err(err)) => ResourceAction::Failed(err),
                    Err(_) => ResourceAction::Failed(FetchError::coerced(key)),
                };
                reduce(&mut store.lock().unwrap(), key, action);
            }));
        }
        for task in pending {
            // Settlement tasks do not panic; a JoinError here would mean
            // the runtime is shutting down, in which case there is nothing
            // left to settle.
            let _ = task.await;
        }
    }

    /// True iff the resource is settled, error-free and holds truthy data.
    pub fn ready(&self, key: ResourceKey) -> bool {
        self.store
            .lock()
            .unwrap()
            .get(&key)
            .is_some_and(LoadState::ready)
    }

    /// Current state of one resource.
    pub fn state(&self, key: ResourceKey) -> Option<LoadState> {
        self.store.lock().unwrap().get(&key).cloned()
    }

    /// Cloned view of the whole store for consumers.
    pub fn snapshot(&self) -> ResourceStore {
        self.store.lock().unwrap().clone()
    }
}
