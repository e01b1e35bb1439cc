//! Workload instance view and the platform label schema.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Well-known label keys stamped on every platform-managed instance.
pub mod labels {
    /// Owning tenant.
    pub const OWNER: &str = "berth.owner";
    /// Deployment group the replica belongs to (the routing-rule-bearing
    /// unit).
    pub const DEPLOYMENT: &str = "berth.deployment";
    /// Coarse project grouping, possibly spanning several deployments.
    pub const PROJECT: &str = "berth.project";

    /// Router rule label key for a deployment group.
    pub fn route_rule(deployment: &str) -> String {
        format!("traefik.http.routers.{deployment}.rule")
    }

    /// Host rule expression in the router DSL.
    pub fn host_rule(hostname: &str) -> String {
        format!("Host(`{hostname}`)")
    }
}

/// Runtime instance identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(String);

impl InstanceId {
    /// Create a new `InstanceId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the instance ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for InstanceId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for InstanceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Lifecycle state as reported by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceState {
    Running,
    Stopped,
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
        })
    }
}

/// Read-only view of a workload instance as reported by the runtime.
///
/// The platform never constructs or persists instances; it reads them from
/// the runtime directory and deletes them through the same client. All
/// ownership and routing metadata lives in the label set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    id: InstanceId,
    name: String,
    state: InstanceState,
    created: DateTime<Utc>,
    labels: HashMap<String, String>,
}

impl Instance {
    pub fn new(
        id: InstanceId,
        name: impl Into<String>,
        state: InstanceState,
        created: DateTime<Utc>,
        labels: HashMap<String, String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            state,
            created,
            labels,
        }
    }

    #[must_use]
    pub fn id(&self) -> &InstanceId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn state(&self) -> InstanceState {
        self.state
    }

    #[must_use]
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Look up a label value.
    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Owning tenant, if the instance carries the ownership label.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.label(labels::OWNER)
    }

    /// Deployment group this replica belongs to.
    #[must_use]
    pub fn deployment_group(&self) -> Option<&str> {
        self.label(labels::DEPLOYMENT)
    }

    /// Project grouping label.
    #[must_use]
    pub fn project(&self) -> Option<&str> {
        self.label(labels::PROJECT)
    }

    #[must_use]
    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner() == Some(owner)
    }

    /// Routing rule attached to this instance's own deployment group.
    #[must_use]
    pub fn route_rule(&self) -> Option<&str> {
        let group = self.deployment_group()?;
        self.label(&labels::route_rule(group))
    }

    /// Whether this instance's routing rule serves the given hostname.
    #[must_use]
    pub fn serves_host(&self, hostname: &str) -> bool {
        self.route_rule()
            .is_some_and(|rule| rule == labels::host_rule(hostname))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(entries: &[(&str, &str)]) -> Instance {
        let labels = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Instance::new(
            InstanceId::new("i-1"),
            "web-1",
            InstanceState::Running,
            Utc::now(),
            labels,
        )
    }

    #[test]
    fn route_rule_follows_own_deployment_group() {
        let instance = labelled(&[
            (labels::DEPLOYMENT, "g1"),
            ("traefik.http.routers.g1.rule", "Host(`site.example`)"),
            ("traefik.http.routers.g2.rule", "Host(`other.example`)"),
        ]);

        assert_eq!(instance.route_rule(), Some("Host(`site.example`)"));
        assert!(instance.serves_host("site.example"));
        assert!(!instance.serves_host("other.example"));
    }

    #[test]
    fn no_deployment_group_means_no_route() {
        let instance = labelled(&[("traefik.http.routers.g1.rule", "Host(`site.example`)")]);

        assert_eq!(instance.route_rule(), None);
        assert!(!instance.serves_host("site.example"));
    }

    #[test]
    fn ownership_test_requires_exact_label() {
        let instance = labelled(&[(labels::OWNER, "alice")]);

        assert!(instance.is_owned_by("alice"));
        assert!(!instance.is_owned_by("alic"));
        assert!(!instance.is_owned_by("bob"));
    }
}
