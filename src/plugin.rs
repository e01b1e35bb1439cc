//! Removal plugin abstraction and the process-wide registry.
//!
//! Plugins extend the removal flow ahead of the generic resolver fallback.
//! Each plugin carries a static descriptor; the removal capability is a
//! static accessor rather than runtime attribute probing. Loading and
//! configuration of plugins happen elsewhere - this module only holds the
//! loaded set and hands out ordered snapshots.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::Error;
use crate::port::{ResponseSink, RuntimeClient};

/// Static plugin metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Unique plugin name for logging and diagnostics.
    pub name: &'static str,
    /// An exclusive plugin halts the chain after it runs, including the
    /// generic fallback, even when it matched nothing internally.
    pub exclusive: bool,
}

/// Everything a removal handler gets to work with.
pub struct RemovalContext<'a> {
    /// Authenticated caller identity.
    pub owner: &'a str,
    /// Opaque target identifier.
    pub target: &'a str,
    /// Handle to the workload runtime.
    pub runtime: &'a dyn RuntimeClient,
    /// Response boundary; handlers may respond directly.
    pub sink: &'a dyn ResponseSink,
}

/// Removal capability of a plugin.
#[async_trait]
pub trait RemovalHandler: Send + Sync {
    /// Offer this plugin the chance to claim and remove the target.
    ///
    /// Handlers may perform arbitrary removal side effects and respond
    /// directly through `ctx.sink`.
    async fn remove(&self, ctx: &RemovalContext<'_>) -> Result<(), Error>;
}

/// A loaded platform extension.
pub trait Plugin: Send + Sync {
    /// Static descriptor for this plugin.
    fn descriptor(&self) -> PluginDescriptor;

    /// Removal capability, if this plugin participates in removal.
    ///
    /// Plugins without the capability are skipped by the chain without
    /// being invoked.
    fn removal(&self) -> Option<&dyn RemovalHandler> {
        None
    }
}

/// Ordered set of loaded plugins.
///
/// Registration order is authoritative for chain execution. Mutation only
/// happens during startup; iteration always goes through an immutable
/// snapshot so a late registration cannot race a running chain.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: RwLock<Vec<Arc<dyn Plugin>>>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin. Plugins run in registration order.
    pub fn register(&self, plugin: Arc<dyn Plugin>) {
        self.plugins.write().push(plugin);
    }

    /// Immutable ordered snapshot of the loaded plugins.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<dyn Plugin>> {
        self.plugins.read().clone()
    }

    /// Number of loaded plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.read().len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.read().is_empty()
    }
}

/// Process-wide registry, initialized once at startup.
pub fn registry() -> Arc<PluginRegistry> {
    static REGISTRY: OnceLock<Arc<PluginRegistry>> = OnceLock::new();
    REGISTRY.get_or_init(|| Arc::new(PluginRegistry::new())).clone()
}
