//! HTTP adapter for the function gateway.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::port::FunctionRemover;

#[derive(Debug, Serialize)]
struct RemoveFunctionRequest<'a> {
    owner: &'a str,
    target: &'a str,
}

#[derive(Debug, Deserialize)]
struct RemoveFunctionResponse {
    removed: bool,
}

/// Function gateway client over HTTP.
pub struct FunctionGatewayClient {
    client: Client,
    base_url: String,
}

impl FunctionGatewayClient {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl FunctionRemover for FunctionGatewayClient {
    async fn try_remove(&self, owner: &str, target: &str) -> Result<bool> {
        let url = format!("{}/system/remove", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&RemoveFunctionRequest { owner, target })
            .send()
            .await?;

        // The gateway answers 404 when the target is not a function.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        let body: RemoveFunctionResponse = response.error_for_status()?.json().await?;
        debug!(owner = %owner, target = %target, removed = body.removed, "function gateway consulted");
        Ok(body.removed)
    }
}

/// Remover wired when no function gateway is configured.
pub struct NullFunctionRemover;

#[async_trait]
impl FunctionRemover for NullFunctionRemover {
    async fn try_remove(&self, _owner: &str, _target: &str) -> Result<bool> {
        Ok(false)
    }
}
