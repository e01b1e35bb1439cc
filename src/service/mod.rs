//! Core services: resolution, teardown, plugin chain, orchestration.

pub mod chain;
pub mod directory;
pub mod remover;
pub mod resolver;
pub mod teardown;

pub use chain::{run_chain, ChainOutcome};
pub use remover::{RemovalOutcome, RemovalRequest, RemovalService};
pub use resolver::resolve;
pub use teardown::teardown_all;
