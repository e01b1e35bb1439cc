//! Concurrent instance teardown with all-or-nothing reporting.

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::domain::Instance;
use crate::error::{Error, Result, TeardownFailure};
use crate::port::RuntimeClient;

/// Stop and delete every instance in the batch.
///
/// All removals are in flight concurrently; there is no ordering between
/// them and no cancellation of siblings when one fails. The batch succeeds
/// only if every removal succeeds. On failure the error keeps both the
/// instances that were removed and those that were not, so a repeated call
/// can resolve again and remove whatever remains.
pub async fn teardown_all(runtime: &dyn RuntimeClient, instances: &[Instance]) -> Result<usize> {
    let results = join_all(instances.iter().map(|instance| async move {
        match runtime.remove_instance(instance).await {
            Ok(()) => {
                debug!(instance = instance.name(), "instance removed");
                Ok(instance.name().to_string())
            }
            Err(e) => {
                warn!(instance = instance.name(), error = %e, "instance teardown failed");
                Err(TeardownFailure {
                    instance: instance.name().to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }))
    .await;

    let mut removed = Vec::new();
    let mut failed = Vec::new();
    for result in results {
        match result {
            Ok(name) => removed.push(name),
            Err(failure) => failed.push(failure),
        }
    }

    if failed.is_empty() {
        Ok(removed.len())
    } else {
        Err(Error::Teardown { removed, failed })
    }
}
