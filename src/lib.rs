//! berth - deployment instance resolution and removal.
//!
//! Server-side core of a multi-tenant deployment platform: resolves a
//! user-supplied identifier to the live workload instances it refers to
//! and removes them. A target may name a single instance, a routed
//! hostname shared by several replicas, or a whole project; resolution
//! cascades through those strategies in that order and the first match
//! wins.
//!
//! Removal itself is a fallback chain: the function gateway gets first
//! refusal, then registered removal plugins (an exclusive plugin ends the
//! request outright), and only then generic label-based teardown.
//!
//! # Architecture
//!
//! Hexagonal: the core depends on ports only; adapters implement them.
//!
//! - [`domain`] - instances, the label schema, resolution results
//! - [`port`] - runtime client, function remover, response boundary traits
//! - [`plugin`] - removal plugin trait and the process-wide registry
//! - [`service`] - resolver, teardown fan-out, plugin chain, orchestrator
//! - [`adapter`] - HTTP adapters for the runtime and function gateway
//! - [`config`] - TOML configuration and logging setup
//! - [`error`] - error types for the crate
//! - [`cli`] - operator commands (`remove`, `list`, `check`)
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use berth::adapter::{NullFunctionRemover, RuntimeApiClient};
//! use berth::plugin;
//! use berth::service::RemovalService;
//!
//! let runtime = Arc::new(RuntimeApiClient::new("http://127.0.0.1:7123".into()));
//! let service = RemovalService::new(runtime, Arc::new(NullFunctionRemover), plugin::registry());
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod plugin;
pub mod port;
pub mod service;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
