//! Lifecycle event and response types exchanged with the orchestrator.

use serde::{Deserialize, Serialize};

/// Fixed physical resource id for the managed bundle. Only one logical
/// instance of this resource type can exist per deployment.
pub const PHYSICAL_RESOURCE_ID: &str = "smaResources";

/// Inbound lifecycle event.
#[derive(Debug, Clone, Deserialize)]
pub struct LifecycleEvent {
    #[serde(rename = "RequestType")]
    pub request_type: String,
    #[serde(rename = "ResourceProperties")]
    pub resource_properties: ResourceProperties,
    #[serde(rename = "PhysicalResourceId")]
    pub physical_resource_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceProperties {
    pub region: String,
    #[serde(rename = "smaName")]
    pub sma_name: String,
    #[serde(rename = "lambdaArn")]
    pub lambda_arn: String,
}

/// Result returned to the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifecycleResponse {
    #[serde(rename = "PhysicalResourceId")]
    pub physical_resource_id: String,
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub data: Option<ResourceBundle>,
}

/// Output attributes of the created resource. The mixed key casing is
/// part of the published output contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceBundle {
    #[serde(rename = "smaID")]
    pub sma_id: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "sip_rule_id")]
    pub sip_rule_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserialization() {
        let event: LifecycleEvent = serde_json::from_value(serde_json::json!({
            "RequestType": "Create",
            "ResourceProperties": {
                "region": "us-east-1",
                "smaName": "demo",
                "lambdaArn": "arn:aws:lambda:us-east-1:123:function:demo"
            }
        }))
        .unwrap();

        assert_eq!(event.request_type, "Create");
        assert_eq!(event.resource_properties.sma_name, "demo");
        assert!(event.physical_resource_id.is_none());
    }

    #[test]
    fn test_response_serialization_with_bundle() {
        let response = LifecycleResponse {
            physical_resource_id: PHYSICAL_RESOURCE_ID.to_string(),
            data: Some(ResourceBundle {
                sma_id: "sma-1".into(),
                phone_number: "+13125550100".into(),
                sip_rule_id: "rule-1".into(),
            }),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["PhysicalResourceId"], "smaResources");
        assert_eq!(json["Data"]["smaID"], "sma-1");
        assert_eq!(json["Data"]["phoneNumber"], "+13125550100");
        assert_eq!(json["Data"]["sip_rule_id"], "rule-1");
    }

    #[test]
    fn test_response_serialization_omits_empty_data() {
        let response = LifecycleResponse {
            physical_resource_id: "smaResources".into(),
            data: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("Data").is_none());
    }
}
