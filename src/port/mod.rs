//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams to the external systems this core consumes: the
//! workload runtime, the function gateway, and the transport response
//! boundary. Adapters implement them against real services; the testkit
//! provides in-memory fakes.
//!
//! # Available Ports
//!
//! - [`RuntimeClient`] - directory listing and instance teardown
//! - [`FunctionRemover`] - specialized function-workload removal
//! - [`ResponseSink`] - terminal responses back to the transport layer
//!
//! Note: the `Plugin` trait lives in [`crate::plugin`] as it is an
//! internal extension point rather than an external dependency port.

mod functions;
mod response;
mod runtime;

pub use functions::FunctionRemover;
pub use response::{RemovalResponse, ResponseSink};
pub use runtime::RuntimeClient;
