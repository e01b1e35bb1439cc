//! Function gateway port: ephemeral function-workload removal.

use async_trait::async_trait;

use crate::error::Error;

/// Remover for function-style workloads owned by the function gateway.
#[async_trait]
pub trait FunctionRemover: Send + Sync {
    /// Attempt to interpret `target` as a function identifier scoped to
    /// `owner` and remove it.
    ///
    /// Returns `Ok(true)` only on confirmed removal. A missing function is
    /// `Ok(false)`, never an error; an unreachable gateway is an error.
    async fn try_remove(&self, owner: &str, target: &str) -> Result<bool, Error>;
}
