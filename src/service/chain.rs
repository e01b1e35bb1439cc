//! Sequential plugin removal chain.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::plugin::{Plugin, RemovalContext};

/// What the chain did.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainOutcome {
    /// At least one removal-capable plugin was invoked.
    pub ran: bool,
    /// Name of the exclusive plugin that halted the chain, if any.
    pub exclusive_claim: Option<&'static str>,
}

/// Run the plugin chain in registry order.
///
/// Plugins execute strictly sequentially: exclusivity is a chain-halting
/// signal that must be observed before the next plugin is considered. An
/// exclusive plugin halts the chain after it runs even if it matched
/// nothing internally. A failing plugin is logged and the chain continues;
/// an errored plugin does not claim exclusivity.
pub async fn run_chain(plugins: &[Arc<dyn Plugin>], ctx: &RemovalContext<'_>) -> ChainOutcome {
    let mut outcome = ChainOutcome::default();

    for plugin in plugins {
        let descriptor = plugin.descriptor();
        let Some(handler) = plugin.removal() else {
            continue;
        };

        outcome.ran = true;
        match handler.remove(ctx).await {
            Ok(()) => {
                debug!(plugin = descriptor.name, "removal plugin ran");
                if descriptor.exclusive {
                    debug!(
                        plugin = descriptor.name,
                        "removal finished via exclusive plugin"
                    );
                    outcome.exclusive_claim = Some(descriptor.name);
                    break;
                }
            }
            Err(e) => {
                warn!(plugin = descriptor.name, error = %e, "removal plugin failed, continuing chain");
            }
        }
    }

    outcome
}
