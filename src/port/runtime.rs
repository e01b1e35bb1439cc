//! Runtime client port: directory queries and instance teardown.

use async_trait::async_trait;

use crate::domain::Instance;
use crate::error::Error;

/// Client for the workload runtime that owns the live instance set.
///
/// The runtime is the authoritative state and there is no caching layer in
/// front of it: every request reads a fresh directory snapshot, so
/// resolution can race with concurrent deployments. That window is
/// accepted; repeated calls converge.
#[async_trait]
pub trait RuntimeClient: Send + Sync {
    /// List current instances with their metadata.
    ///
    /// The directory is not owner-scoped. Callers must filter by the
    /// ownership label before acting on the result.
    async fn list_instances(&self, include_stopped: bool) -> Result<Vec<Instance>, Error>;

    /// Stop and delete a single instance.
    async fn remove_instance(&self, instance: &Instance) -> Result<(), Error>;
}
