//! Chime provisioning API types.
//!
//! Field names follow the provider's PascalCase wire format.

use serde::{Deserialize, Serialize};

/// Phone number order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum OrderStatus {
    Processing,
    Successful,
    Failed,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn is_successful(self) -> bool {
        self == OrderStatus::Successful
    }
}

/// A pending or completed phone number order.
#[derive(Debug, Clone, Deserialize)]
pub struct PhoneNumberOrder {
    #[serde(rename = "PhoneNumberOrderId")]
    pub phone_number_order_id: String,
    #[serde(rename = "Status")]
    pub status: OrderStatus,
    #[serde(rename = "OrderedPhoneNumbers", default)]
    pub ordered_phone_numbers: Vec<OrderedPhoneNumber>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderedPhoneNumber {
    #[serde(rename = "E164PhoneNumber")]
    pub e164_phone_number: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchAvailablePhoneNumbersRequest {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "MaxResults")]
    pub max_results: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchAvailablePhoneNumbersResponse {
    #[serde(rename = "E164PhoneNumbers", default)]
    pub e164_phone_numbers: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePhoneNumberOrderRequest {
    #[serde(rename = "ProductType")]
    pub product_type: String,
    #[serde(rename = "E164PhoneNumbers")]
    pub e164_phone_numbers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhoneNumberOrderResponse {
    #[serde(rename = "PhoneNumberOrder")]
    pub phone_number_order: PhoneNumberOrder,
}

/// A SIP media application.
#[derive(Debug, Clone, Deserialize)]
pub struct SipMediaApplication {
    #[serde(rename = "SipMediaApplicationId")]
    pub sip_media_application_id: String,
    #[serde(rename = "AwsRegion")]
    pub aws_region: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipMediaApplicationEndpoint {
    #[serde(rename = "LambdaArn")]
    pub lambda_arn: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateSipMediaApplicationRequest {
    #[serde(rename = "AwsRegion")]
    pub aws_region: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Endpoints")]
    pub endpoints: Vec<SipMediaApplicationEndpoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SipMediaApplicationResponse {
    #[serde(rename = "SipMediaApplication")]
    pub sip_media_application: SipMediaApplication,
}

/// A SIP routing rule.
#[derive(Debug, Clone, Deserialize)]
pub struct SipRule {
    #[serde(rename = "SipRuleId")]
    pub sip_rule_id: String,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Disabled", default)]
    pub disabled: bool,
}

/// Routing target for a SIP rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipRuleTargetApplication {
    #[serde(rename = "SipMediaApplicationId")]
    pub sip_media_application_id: String,
    #[serde(rename = "Priority")]
    pub priority: u32,
    #[serde(rename = "AwsRegion")]
    pub aws_region: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateSipRuleRequest {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "TriggerType")]
    pub trigger_type: String,
    #[serde(rename = "TriggerValue")]
    pub trigger_value: String,
    #[serde(rename = "Disabled")]
    pub disabled: bool,
    #[serde(rename = "TargetApplications")]
    pub target_applications: Vec<SipRuleTargetApplication>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateSipRuleRequest {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Disabled")]
    pub disabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SipRuleResponse {
    #[serde(rename = "SipRule")]
    pub sip_rule: SipRule,
}
