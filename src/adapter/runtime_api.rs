//! HTTP adapter for the workload runtime API.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Instance, InstanceId, InstanceState};
use crate::error::{Error, Result};
use crate::port::RuntimeClient;

/// Wire record for one directory entry.
#[derive(Debug, Deserialize)]
struct InstanceRecord {
    id: String,
    name: String,
    state: InstanceState,
    created: DateTime<Utc>,
    #[serde(default)]
    labels: HashMap<String, String>,
}

impl From<InstanceRecord> for Instance {
    fn from(record: InstanceRecord) -> Self {
        // Runtime names carry a leading slash.
        let name = record.name.trim_start_matches('/').to_string();
        Instance::new(
            InstanceId::new(record.id),
            name,
            record.state,
            record.created,
            record.labels,
        )
    }
}

/// Runtime API client over HTTP.
pub struct RuntimeApiClient {
    client: Client,
    base_url: String,
}

impl RuntimeApiClient {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl RuntimeClient for RuntimeApiClient {
    async fn list_instances(&self, include_stopped: bool) -> Result<Vec<Instance>> {
        let url = format!("{}/instances?all={include_stopped}", self.base_url);
        debug!(url = %url, "listing instances");

        let records: Vec<InstanceRecord> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(count = records.len(), "directory snapshot fetched");
        Ok(records.into_iter().map(Instance::from).collect())
    }

    async fn remove_instance(&self, instance: &Instance) -> Result<()> {
        let stop = format!("{}/instances/{}/stop", self.base_url, instance.id());
        let response = self.client.post(&stop).send().await?;
        // An already-stopped instance is fine to delete.
        if !response.status().is_success() && response.status() != StatusCode::NOT_MODIFIED {
            return Err(Error::Runtime(format!(
                "failed to stop instance {}: {}",
                instance.name(),
                response.status()
            )));
        }

        let delete = format!("{}/instances/{}", self.base_url, instance.id());
        self.client
            .delete(&delete)
            .send()
            .await?
            .error_for_status()?;

        debug!(instance = instance.name(), "instance stopped and deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_record_strips_leading_slash_from_name() {
        let record = InstanceRecord {
            id: "i-1".into(),
            name: "/web-1".into(),
            state: InstanceState::Running,
            created: Utc::now(),
            labels: HashMap::new(),
        };

        let instance = Instance::from(record);
        assert_eq!(instance.name(), "web-1");
    }

    #[test]
    fn wire_record_deserializes_with_missing_labels() {
        let json = r#"{"id":"i-2","name":"/api-1","state":"stopped","created":"2026-01-05T12:00:00Z"}"#;
        let record: InstanceRecord = serde_json::from_str(json).unwrap();

        let instance = Instance::from(record);
        assert_eq!(instance.state(), InstanceState::Stopped);
        assert!(instance.owner().is_none());
    }
}
