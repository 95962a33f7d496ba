//! Common test utilities for integration tests.

use chime_client::ChimeClient;
use sma_provisioner::acquire::AcquisitionPolicy;
use sma_provisioner::event::LifecycleEvent;
use sma_provisioner::handler::LifecycleHandler;
use stack_outputs::StackOutputsClient;
use std::time::Duration;
use wiremock::MockServer;

/// Acquisition policy with near-zero delays for tests.
pub fn fast_policy(attempt_limit: u32, poll_limit: u32) -> AcquisitionPolicy {
    AcquisitionPolicy {
        poll_interval: Duration::from_millis(1),
        poll_limit,
        attempt_limit,
    }
}

/// Build a handler wired to mock provisioning and stack-store servers.
pub fn test_handler(
    chime: &MockServer,
    stacks: &MockServer,
    policy: AcquisitionPolicy,
) -> LifecycleHandler {
    let chime_client =
        ChimeClient::new("test-api-key", chime.uri(), Duration::from_secs(5)).unwrap();
    let stacks_client =
        StackOutputsClient::new("test-api-key", stacks.uri(), Duration::from_secs(5)).unwrap();
    LifecycleHandler::with_policy(chime_client, stacks_client, policy)
}

/// Deserialize a lifecycle event from its wire shape.
pub fn event(request_type: &str, physical_resource_id: Option<&str>) -> LifecycleEvent {
    let mut value = serde_json::json!({
        "RequestType": request_type,
        "ResourceProperties": {
            "region": "us-east-1",
            "smaName": "demo",
            "lambdaArn": "arn:aws:lambda:us-east-1:123:function:demo"
        }
    });
    if let Some(id) = physical_resource_id {
        value["PhysicalResourceId"] = serde_json::Value::String(id.to_string());
    }
    serde_json::from_value(value).unwrap()
}
