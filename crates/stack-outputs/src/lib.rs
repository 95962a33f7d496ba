//! Read-only client for the orchestrator's stack-output store.
//!
//! Used during delete to recover the resource identifiers the stack
//! published at create time; the handler itself holds no state.

mod client;
mod error;
mod types;

pub use client::StackOutputsClient;
pub use error::StackOutputsError;
pub use types::{Stack, StackOutput};

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> StackOutputsClient {
        StackOutputsClient::new("test-api-key", mock_server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_describe_stack() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stacks/demo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Stacks": [{
                    "StackName": "demo",
                    "Outputs": [
                        {"OutputKey": "phoneNumber", "OutputValue": "+13125550100"},
                        {"OutputKey": "smaID", "OutputValue": "sma-1"},
                        {"OutputKey": "sipRuleID", "OutputValue": "rule-1"}
                    ]
                }]
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let stack = client.describe_stack("demo").await.unwrap();

        assert_eq!(stack.stack_name, "demo");
        assert_eq!(stack.output("phoneNumber"), Some("+13125550100"));
        assert_eq!(stack.require_output("smaID").unwrap(), "sma-1");
        assert_eq!(stack.output("missing"), None);
    }

    #[tokio::test]
    async fn test_describe_stack_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stacks/gone"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "Stacks": [] })),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.describe_stack("gone").await;

        assert!(matches!(result, Err(StackOutputsError::StackNotFound(_))));
    }

    #[tokio::test]
    async fn test_describe_stack_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stacks/demo"))
            .respond_with(ResponseTemplate::new(403).set_body_string("AccessDenied"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.describe_stack("demo").await;

        assert!(matches!(
            result,
            Err(StackOutputsError::Api { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn test_require_output_missing() {
        let stack = Stack {
            stack_name: "demo".into(),
            outputs: vec![],
        };

        let result = stack.require_output("phoneNumber");
        assert!(matches!(result, Err(StackOutputsError::MissingOutput(k)) if k == "phoneNumber"));
    }
}
