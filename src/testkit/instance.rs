//! Builder for instance fixtures.
//!
//! Provides a concise factory for directory entries carrying the platform
//! label schema, so tests focus on assertions rather than construction
//! boilerplate.

use std::collections::HashMap;

use chrono::Utc;

use crate::domain::{labels, Instance, InstanceId, InstanceState};

/// Start building an instance owned by `owner`.
pub fn instance(name: &str, owner: &str) -> InstanceBuilder {
    InstanceBuilder {
        name: name.to_string(),
        owner: owner.to_string(),
        state: InstanceState::Running,
        labels: HashMap::new(),
    }
}

/// Builder for a directory instance with platform labels.
pub struct InstanceBuilder {
    name: String,
    owner: String,
    state: InstanceState,
    labels: HashMap<String, String>,
}

impl InstanceBuilder {
    /// Assign the deployment group label.
    #[must_use]
    pub fn deployment(mut self, group: &str) -> Self {
        self.labels
            .insert(labels::DEPLOYMENT.to_string(), group.to_string());
        self
    }

    /// Assign the project label.
    #[must_use]
    pub fn project(mut self, project: &str) -> Self {
        self.labels
            .insert(labels::PROJECT.to_string(), project.to_string());
        self
    }

    /// Attach a host routing rule for the instance's deployment group.
    ///
    /// Call after [`deployment`](Self::deployment).
    #[must_use]
    pub fn routed_host(mut self, hostname: &str) -> Self {
        let group = self
            .labels
            .get(labels::DEPLOYMENT)
            .cloned()
            .unwrap_or_default();
        self.labels
            .insert(labels::route_rule(&group), labels::host_rule(hostname));
        self
    }

    /// Mark the instance as stopped.
    #[must_use]
    pub fn stopped(mut self) -> Self {
        self.state = InstanceState::Stopped;
        self
    }

    /// Set an arbitrary label.
    #[must_use]
    pub fn label(mut self, key: &str, value: &str) -> Self {
        self.labels.insert(key.to_string(), value.to_string());
        self
    }

    pub fn build(mut self) -> Instance {
        self.labels
            .insert(labels::OWNER.to_string(), self.owner.clone());
        Instance::new(
            InstanceId::new(format!("id-{}", self.name)),
            self.name,
            self.state,
            Utc::now(),
            self.labels,
        )
    }
}
