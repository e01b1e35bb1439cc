//! In-memory runtime fake.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{Instance, InstanceState};
use crate::error::{Error, Result};
use crate::port::RuntimeClient;

/// In-memory [`RuntimeClient`] over a fixed directory.
///
/// Successful removals are applied to the directory and recorded so tests
/// can assert exactly which instances were torn down. `fail_removal_of`
/// scripts per-instance failures for partial-teardown tests.
#[derive(Default)]
pub struct InMemoryRuntime {
    instances: Mutex<Vec<Instance>>,
    removed: Mutex<Vec<String>>,
    fail_removal: Mutex<HashSet<String>>,
    list_calls: AtomicUsize,
}

impl InMemoryRuntime {
    #[must_use]
    pub fn new(instances: Vec<Instance>) -> Self {
        Self {
            instances: Mutex::new(instances),
            ..Self::default()
        }
    }

    /// Script the next removal of `name` to fail.
    pub fn fail_removal_of(&self, name: &str) {
        self.fail_removal.lock().insert(name.to_string());
    }

    /// Names of instances removed so far, in completion order.
    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().clone()
    }

    /// How many directory listings were requested.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RuntimeClient for InMemoryRuntime {
    async fn list_instances(&self, include_stopped: bool) -> Result<Vec<Instance>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let instances = self.instances.lock();
        Ok(instances
            .iter()
            .filter(|i| include_stopped || i.state() == InstanceState::Running)
            .cloned()
            .collect())
    }

    async fn remove_instance(&self, instance: &Instance) -> Result<()> {
        if self.fail_removal.lock().contains(instance.name()) {
            return Err(Error::Runtime(format!(
                "scripted removal failure for {}",
                instance.name()
            )));
        }

        self.instances.lock().retain(|i| i.id() != instance.id());
        self.removed.lock().push(instance.name().to_string());
        Ok(())
    }
}
