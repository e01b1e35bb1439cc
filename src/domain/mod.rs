//! Runtime-agnostic domain types: instances, labels, resolution results.

mod instance;
mod resolution;

pub use instance::{labels, Instance, InstanceId, InstanceState};
pub use resolution::{MatchStrategy, Resolution};
