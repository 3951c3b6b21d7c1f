//! Store handle with reducer injection.
//!
//! All mutation of the reducer mapping goes through [`InjectableStore`].
//! Mapping changes and the matching root reducer swap happen under one
//! mutex, so concurrent injections never install a stale combination.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use super::outcome::{InjectOutcome, InjectReport};
use super::registry::ReducerRegistry;
use crate::config::{ConflictPolicy, StoreConfig};
use crate::error::StoreError;
use crate::store::{Action, ActionTypes, ListenerId, RootReducer, SliceReducer, Store, StoreEnhancer};

/// Transform applied to each combined reducer before installation.
pub type ReducerWrapper = Arc<dyn Fn(RootReducer) -> RootReducer + Send + Sync>;

/// State container whose reducers can be registered after creation.
///
/// Cloning yields another handle to the same store and registry.
#[derive(Clone)]
pub struct InjectableStore {
    store: Store,
    registry: Arc<Mutex<ReducerRegistry>>,
    wrap: ReducerWrapper,
    policy: ConflictPolicy,
    rebuilds: Arc<AtomicU64>,
}

/// Builder for [`InjectableStore`].
pub struct InjectableStoreBuilder {
    config: StoreConfig,
    preloaded: Value,
    enhancer: Option<StoreEnhancer>,
    wrap: Option<ReducerWrapper>,
}

impl InjectableStoreBuilder {
    fn new() -> Self {
        Self {
            config: StoreConfig::default(),
            preloaded: Value::Null,
            enhancer: None,
            wrap: None,
        }
    }

    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.config.conflict_policy = policy;
        self
    }

    pub fn preloaded_state(mut self, state: Value) -> Self {
        self.preloaded = state;
        self
    }

    pub fn enhancer(mut self, enhancer: StoreEnhancer) -> Self {
        self.enhancer = Some(enhancer);
        self
    }

    /// Transform applied to every combined reducer before it is installed.
    pub fn wrap<F>(mut self, wrap: F) -> Self
    where
        F: Fn(RootReducer) -> RootReducer + Send + Sync + 'static,
    {
        self.wrap = Some(Arc::new(wrap));
        self
    }

    /// Build the store.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<InjectableStore, StoreError> {
        self.config.validate()?;

        let wrap: ReducerWrapper = match self.wrap {
            Some(wrap) => wrap,
            None => Arc::new(|reducer: RootReducer| reducer),
        };
        let registry = ReducerRegistry::new(self.config.placeholder_namespace.clone());
        let root = wrap(registry.combine()?);
        let store = Store::create(root, self.preloaded, self.enhancer);

        tracing::debug!(
            policy = ?self.config.conflict_policy,
            placeholder = %registry.placeholder(),
            "Injectable store created"
        );

        Ok(InjectableStore {
            store,
            registry: Arc::new(Mutex::new(registry)),
            wrap,
            policy: self.config.conflict_policy,
            rebuilds: Arc::new(AtomicU64::new(0)),
        })
    }
}

impl InjectableStore {
    pub fn builder() -> InjectableStoreBuilder {
        InjectableStoreBuilder::new()
    }

    /// Create a store with the strict conflict policy.
    ///
    /// `wrap` defaults to the identity transform.
    pub fn create(
        preloaded: Value,
        enhancer: Option<StoreEnhancer>,
        wrap: Option<ReducerWrapper>,
    ) -> Result<Self, StoreError> {
        let mut builder = Self::builder().preloaded_state(preloaded);
        builder.enhancer = enhancer;
        builder.wrap = wrap;
        builder.build()
    }

    /// Register `reducer` under `namespace`.
    ///
    /// Re-injecting the reducer already registered there is a no-op. A
    /// different reducer is an error under [`ConflictPolicy::Strict`] and is
    /// skipped with a warning under [`ConflictPolicy::Forceable`].
    pub fn inject(
        &self,
        namespace: impl Into<String>,
        reducer: SliceReducer,
    ) -> Result<InjectOutcome, StoreError> {
        self.inject_one(namespace.into(), reducer, false)
    }

    /// Register `reducer` under `namespace`, overwriting a different one.
    pub fn inject_forced(
        &self,
        namespace: impl Into<String>,
        reducer: SliceReducer,
    ) -> Result<InjectOutcome, StoreError> {
        self.inject_one(namespace.into(), reducer, true)
    }

    /// Register a batch of reducers with a single rebuild.
    ///
    /// Under the strict policy the first conflicting entry aborts the whole
    /// batch: nothing from it is applied.
    pub fn inject_all<I, K>(&self, entries: I) -> Result<InjectReport, StoreError>
    where
        I: IntoIterator<Item = (K, SliceReducer)>,
        K: Into<String>,
    {
        self.inject_batch(entries, false)
    }

    /// Register a batch of reducers, overwriting conflicting namespaces.
    pub fn inject_all_forced<I, K>(&self, entries: I) -> Result<InjectReport, StoreError>
    where
        I: IntoIterator<Item = (K, SliceReducer)>,
        K: Into<String>,
    {
        self.inject_batch(entries, true)
    }

    /// Reset the mapping to the placeholder only.
    ///
    /// The installed root reducer and the state are left untouched; the
    /// reset takes effect at the next injection that changes the mapping.
    pub fn clear_reducers(&self) {
        self.registry.lock().reset();
        tracing::info!("Reducer registry cleared");
    }

    fn inject_one(
        &self,
        namespace: String,
        reducer: SliceReducer,
        force: bool,
    ) -> Result<InjectOutcome, StoreError> {
        let outcome = {
            let mut registry = self.registry.lock();
            let mut staged = registry.clone();
            let outcome = staged.insert(namespace.clone(), reducer, self.policy, force)?;
            if outcome.changes_mapping() {
                self.install(&mut registry, staged)?;
            }
            outcome
        };

        tracing::debug!(namespace = %namespace, outcome = ?outcome, "Reducer injection");
        if outcome.changes_mapping() {
            self.announce_replace();
        }
        Ok(outcome)
    }

    fn inject_batch<I, K>(&self, entries: I, force: bool) -> Result<InjectReport, StoreError>
    where
        I: IntoIterator<Item = (K, SliceReducer)>,
        K: Into<String>,
    {
        let report = {
            let mut registry = self.registry.lock();
            let mut staged = registry.clone();
            let mut report = InjectReport::default();

            for (namespace, reducer) in entries {
                let namespace = namespace.into();
                let outcome = staged.insert(namespace.clone(), reducer, self.policy, force)?;
                report.rebuilt |= outcome.changes_mapping();
                report.outcomes.push((namespace, outcome));
            }

            if report.rebuilt {
                self.install(&mut registry, staged)?;
            }
            report
        };

        tracing::debug!(
            applied = report.applied().len(),
            skipped = report.skipped().len(),
            unchanged = report.unchanged().len(),
            "Batch reducer injection"
        );
        if report.rebuilt {
            self.announce_replace();
        }
        Ok(report)
    }

    /// Combine `staged`, then commit it and swap the root reducer.
    ///
    /// Must be called with the registry lock held. Nothing is committed if
    /// combining fails.
    fn install(
        &self,
        registry: &mut ReducerRegistry,
        staged: ReducerRegistry,
    ) -> Result<(), StoreError> {
        let root = (self.wrap)(staged.combine()?);
        *registry = staged;
        self.store.swap_reducer(root);

        let rebuilds = self.rebuilds.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(
            rebuilds = rebuilds,
            namespaces = registry.len(),
            "Root reducer rebuilt and installed"
        );
        Ok(())
    }

    /// Let new slices initialize and listeners observe the swap.
    fn announce_replace(&self) {
        self.store.dispatch(Action::new(ActionTypes::replace()));
    }

    pub fn get_state(&self) -> Value {
        self.store.get_state()
    }

    pub fn dispatch(&self, action: Action) {
        self.store.dispatch(action);
    }

    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Install a root reducer directly, bypassing the registry.
    ///
    /// The next injection that changes the mapping installs the combined
    /// registry reducer again.
    pub fn replace_reducer(&self, reducer: RootReducer) {
        self.store.replace_reducer(reducer);
    }

    /// The underlying base store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Registered namespaces in insertion order, placeholder included.
    pub fn namespaces(&self) -> Vec<String> {
        self.registry.lock().namespaces()
    }

    pub fn has_reducer(&self, namespace: &str) -> bool {
        self.registry.lock().contains(namespace)
    }

    /// Snapshot of the reducer mapping.
    pub fn registry(&self) -> ReducerRegistry {
        self.registry.lock().clone()
    }

    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Number of rebuild-and-install steps since creation.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for InjectableStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectableStore")
            .field("policy", &self.policy)
            .field("namespaces", &self.namespaces())
            .field("rebuilds", &self.rebuild_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn constant(value: i64) -> SliceReducer {
        SliceReducer::from_fn(move |_, _| json!(value))
    }

    #[test]
    fn create_installs_placeholder_state() {
        let store = InjectableStore::create(json!({}), None, None).unwrap();
        assert_eq!(store.get_state(), json!({ "___": null }));
        assert_eq!(store.rebuild_count(), 0);
        assert_eq!(store.conflict_policy(), ConflictPolicy::Strict);
    }

    #[test]
    fn builder_uses_configured_placeholder() {
        let config = StoreConfig {
            conflict_policy: ConflictPolicy::Forceable,
            placeholder_namespace: "@@placeholder".to_string(),
        };
        let store = InjectableStore::builder().config(config).build().unwrap();
        assert_eq!(store.namespaces(), vec!["@@placeholder".to_string()]);
        assert_eq!(store.conflict_policy(), ConflictPolicy::Forceable);
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let config = StoreConfig {
            placeholder_namespace: String::new(),
            ..StoreConfig::default()
        };
        let result = InjectableStore::builder().config(config).build();
        assert!(matches!(result, Err(StoreError::Config(_))));
    }

    #[test]
    fn strict_batch_conflict_applies_nothing() {
        let store = InjectableStore::create(json!({}), None, None).unwrap();
        store.inject("a", constant(1)).unwrap();
        let registry_before = store.namespaces();

        let result = store.inject_all(vec![("b", constant(2)), ("a", constant(3)), ("c", constant(4))]);

        assert!(matches!(result, Err(StoreError::DuplicateNamespace { ref namespace }) if namespace == "a"));
        assert_eq!(store.namespaces(), registry_before);
        assert_eq!(store.rebuild_count(), 1);
    }

    #[test]
    fn duplicate_key_within_batch_still_rebuilds_once() {
        let store = InjectableStore::create(json!({}), None, None).unwrap();
        let reducer = constant(7);

        let report = store
            .inject_all(vec![("a", reducer.clone()), ("a", reducer.clone())])
            .unwrap();

        assert_eq!(report.outcomes[0].1, InjectOutcome::Inserted);
        assert_eq!(report.outcomes[1].1, InjectOutcome::Unchanged);
        assert!(report.rebuilt);
        assert_eq!(store.rebuild_count(), 1);
        assert_eq!(store.get_state()["a"], json!(7));
    }
}
