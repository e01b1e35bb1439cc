//! Removal orchestration: function remover, plugin chain, generic fallback.
//!
//! Specialized and pluggable removal mechanisms get first refusal; only
//! truly generic label-based teardown runs last. This keeps the flow
//! extensible without requiring every removal path to understand the full
//! label schema.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{MatchStrategy, Resolution};
use crate::error::Result;
use crate::plugin::{PluginRegistry, RemovalContext};
use crate::port::{FunctionRemover, RemovalResponse, ResponseSink, RuntimeClient};
use crate::service::chain::run_chain;
use crate::service::resolver::resolve;
use crate::service::teardown::teardown_all;

/// A single "remove `target` for `owner`" request.
#[derive(Debug, Clone)]
pub struct RemovalRequest {
    /// Authenticated caller identity, trusted as already verified by the
    /// transport layer.
    pub owner: String,
    /// Opaque target identifier: instance name, routed hostname, or
    /// project.
    pub target: String,
}

/// Terminal outcome of a removal request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The function gateway confirmed removal.
    FunctionRemoved,
    /// An exclusive plugin claimed the request; it owns the response.
    PluginHandled { plugin: &'static str },
    /// Generic fallback resolved and tore down `count` instances.
    Removed {
        count: usize,
        strategy: MatchStrategy,
    },
    /// No removal mechanism matched the target for this owner.
    NotFound,
}

/// Entry point for removal requests.
pub struct RemovalService {
    runtime: Arc<dyn RuntimeClient>,
    functions: Arc<dyn FunctionRemover>,
    plugins: Arc<PluginRegistry>,
}

impl RemovalService {
    pub fn new(
        runtime: Arc<dyn RuntimeClient>,
        functions: Arc<dyn FunctionRemover>,
        plugins: Arc<PluginRegistry>,
    ) -> Self {
        Self {
            runtime,
            functions,
            plugins,
        }
    }

    /// Handle one removal request end to end.
    ///
    /// Terminal responses go through `sink`; upstream and teardown errors
    /// propagate for the transport boundary to map. Not-found is an
    /// outcome, not an error.
    pub async fn remove(
        &self,
        request: &RemovalRequest,
        sink: &dyn ResponseSink,
    ) -> Result<RemovalOutcome> {
        let RemovalRequest { owner, target } = request;

        // Function workloads first: a single pass/fail check.
        if self.functions.try_remove(owner, target).await? {
            info!(owner = %owner, target = %target, "removed function workload");
            sink.send(RemovalResponse::Removed);
            return Ok(RemovalOutcome::FunctionRemoved);
        }

        // Plugins next. An exclusive claim ends the request outright and
        // the claiming plugin owns whatever it sent to the sink.
        let ctx = RemovalContext {
            owner,
            target,
            runtime: self.runtime.as_ref(),
            sink,
        };
        let chain = run_chain(&self.plugins.snapshot(), &ctx).await;
        if let Some(plugin) = chain.exclusive_claim {
            info!(owner = %owner, target = %target, plugin, "removal claimed by exclusive plugin");
            return Ok(RemovalOutcome::PluginHandled { plugin });
        }

        // Generic fallback: fresh directory snapshot, cascading
        // resolution, concurrent teardown.
        let instances = self.runtime.list_instances(true).await?;
        match resolve(owner, target, &instances) {
            Resolution::Matched {
                strategy,
                instances,
            } => {
                debug!(
                    owner = %owner,
                    target = %target,
                    strategy = %strategy,
                    count = instances.len(),
                    "target resolved"
                );
                let count = teardown_all(self.runtime.as_ref(), &instances).await?;
                info!(owner = %owner, target = %target, count, "instances removed");
                sink.send(RemovalResponse::Removed);
                Ok(RemovalOutcome::Removed { count, strategy })
            }
            Resolution::NoMatch => {
                debug!(owner = %owner, target = %target, "no removal mechanism matched");
                sink.send(RemovalResponse::not_found(format!(
                    "no instance, deployment, or project named '{target}' found"
                )));
                Ok(RemovalOutcome::NotFound)
            }
        }
    }
}
