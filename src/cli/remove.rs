//! Handler for the `remove` command.

use std::sync::Arc;

use tracing::info;

use crate::adapter::{FunctionGatewayClient, NullFunctionRemover, RuntimeApiClient};
use crate::cli::{output, Cli, RemoveArgs};
use crate::plugin;
use crate::port::{FunctionRemover, RemovalResponse, ResponseSink};
use crate::service::{RemovalOutcome, RemovalRequest, RemovalService};

/// Response sink that reports to the operator terminal.
struct TerminalSink;

impl ResponseSink for TerminalSink {
    fn send(&self, response: RemovalResponse) {
        match response {
            RemovalResponse::Removed => output::ok("removed"),
            RemovalResponse::NotFound { message } => output::warn(&message),
            RemovalResponse::Custom { status, body } => {
                output::note(&format!("plugin response ({status}): {body}"));
            }
        }
    }
}

/// Execute the remove command.
pub async fn execute(cli: &Cli, args: &RemoveArgs) -> anyhow::Result<()> {
    let config = super::load_config(cli)?;
    config.init_logging();

    let runtime = Arc::new(RuntimeApiClient::new(config.runtime.api_url.clone()));
    let functions: Arc<dyn FunctionRemover> = match &config.functions {
        Some(functions) => Arc::new(FunctionGatewayClient::new(functions.api_url.clone())),
        None => Arc::new(NullFunctionRemover),
    };
    let service = RemovalService::new(runtime, functions, plugin::registry());

    let request = RemovalRequest {
        owner: args.owner.clone(),
        target: args.target.clone(),
    };
    info!(owner = %request.owner, target = %request.target, "removal requested");

    let outcome = service.remove(&request, &TerminalSink).await?;

    match outcome {
        RemovalOutcome::FunctionRemoved => Ok(()),
        RemovalOutcome::PluginHandled { plugin } => {
            output::note(&format!("handled by plugin '{plugin}'"));
            Ok(())
        }
        RemovalOutcome::Removed { count, strategy } => {
            output::note(&format!("{count} instance(s) removed via {strategy} match"));
            Ok(())
        }
        RemovalOutcome::NotFound => {
            anyhow::bail!("nothing removed for target '{}'", args.target)
        }
    }
}
