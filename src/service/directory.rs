//! Owner-scoped directory queries.

use crate::domain::Instance;
use crate::error::Result;
use crate::port::RuntimeClient;

/// List the owner's instances, stopped ones included, sorted by name.
///
/// The runtime directory spans all tenants; this narrows it to the caller
/// before presentation. Resolution applies the same ownership filter
/// itself.
pub async fn owned_instances(runtime: &dyn RuntimeClient, owner: &str) -> Result<Vec<Instance>> {
    let mut instances: Vec<Instance> = runtime
        .list_instances(true)
        .await?
        .into_iter()
        .filter(|i| i.is_owned_by(owner))
        .collect();
    instances.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(instances)
}
