//! Stack-output store HTTP client.

use crate::error::StackOutputsError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Read-only client for the orchestrator's stack-output store.
#[derive(Clone)]
pub struct StackOutputsClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl StackOutputsClient {
    /// Create a new stack-output client.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StackOutputsError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: SecretString::new(api_key.into()),
        })
    }

    /// Fetch a stack and its published outputs by name.
    #[instrument(skip(self))]
    pub async fn describe_stack(&self, stack_name: &str) -> Result<Stack, StackOutputsError> {
        let response = self
            .client
            .get(format!("{}/stacks/{}", self.base_url, stack_name))
            .bearer_auth(self.api_key.expose_secret())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!("Stack store error: {} - {}", status, message);
            return Err(StackOutputsError::Api { status, message });
        }

        let body: DescribeStacksResponse = response.json().await?;
        let stack = body
            .stacks
            .into_iter()
            .next()
            .ok_or_else(|| StackOutputsError::StackNotFound(stack_name.to_string()))?;

        debug!(
            "Stack {} has {} outputs",
            stack.stack_name,
            stack.outputs.len()
        );
        Ok(stack)
    }
}
