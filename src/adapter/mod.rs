//! Implementations of ports (hexagonal adapters).

mod functions;
mod runtime_api;

pub use functions::{FunctionGatewayClient, NullFunctionRemover};
pub use runtime_api::RuntimeApiClient;
