//! Chime provisioning HTTP client.

use crate::error::ChimeError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Product type used when ordering numbers for SIP media application dial-in.
pub const SIP_DIAL_IN_PRODUCT_TYPE: &str = "SipMediaApplicationDialIn";

/// Trigger type for rules keyed on the called phone number.
pub const TO_PHONE_NUMBER_TRIGGER: &str = "ToPhoneNumber";

/// Telephony provisioning API client.
///
/// The API key is stored using `SecretString` to prevent accidental
/// exposure in logs or debug output.
#[derive(Clone)]
pub struct ChimeClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl ChimeClient {
    /// Create a new provisioning client.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ChimeError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: SecretString::new(api_key.into()),
        })
    }

    /// Search for available phone numbers in a state.
    #[instrument(skip(self))]
    pub async fn search_available_phone_numbers(
        &self,
        state: &str,
        max_results: u32,
    ) -> Result<Vec<String>, ChimeError> {
        let request = SearchAvailablePhoneNumbersRequest {
            state: state.to_string(),
            max_results,
        };

        let response = self
            .client
            .post(format!("{}/available-phone-numbers/search", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let body: SearchAvailablePhoneNumbersResponse = response.json().await?;
        debug!("Found {} available numbers", body.e164_phone_numbers.len());
        Ok(body.e164_phone_numbers)
    }

    /// Submit an order for phone numbers.
    #[instrument(skip(self))]
    pub async fn create_phone_number_order(
        &self,
        product_type: &str,
        e164_phone_numbers: &[String],
    ) -> Result<PhoneNumberOrder, ChimeError> {
        let request = CreatePhoneNumberOrderRequest {
            product_type: product_type.to_string(),
            e164_phone_numbers: e164_phone_numbers.to_vec(),
        };

        let response = self
            .client
            .post(format!("{}/phone-number-orders", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let body: PhoneNumberOrderResponse = response.json().await?;
        debug!(
            "Created order {} ({:?})",
            body.phone_number_order.phone_number_order_id, body.phone_number_order.status
        );
        Ok(body.phone_number_order)
    }

    /// Fetch the current state of a phone number order.
    #[instrument(skip(self))]
    pub async fn get_phone_number_order(
        &self,
        order_id: &str,
    ) -> Result<PhoneNumberOrder, ChimeError> {
        let response = self
            .client
            .get(format!("{}/phone-number-orders/{}", self.base_url, order_id))
            .bearer_auth(self.api_key.expose_secret())
            .send()
            .await?;
        let response = Self::check(response).await?;

        let body: PhoneNumberOrderResponse = response.json().await?;
        Ok(body.phone_number_order)
    }

    /// Release a phone number back to the provider.
    #[instrument(skip(self))]
    pub async fn delete_phone_number(&self, e164_phone_number: &str) -> Result<(), ChimeError> {
        // The + in an E.164 number must be percent-encoded in the path.
        let encoded_number = encode(e164_phone_number);
        let response = self
            .client
            .delete(format!("{}/phone-numbers/{}", self.base_url, encoded_number))
            .bearer_auth(self.api_key.expose_secret())
            .send()
            .await?;
        Self::check(response).await?;

        debug!("Released phone number {}", e164_phone_number);
        Ok(())
    }

    /// Create a SIP media application with a single compute-function endpoint.
    #[instrument(skip(self))]
    pub async fn create_sip_media_application(
        &self,
        aws_region: &str,
        name: &str,
        lambda_arn: &str,
    ) -> Result<SipMediaApplication, ChimeError> {
        let request = CreateSipMediaApplicationRequest {
            aws_region: aws_region.to_string(),
            name: name.to_string(),
            endpoints: vec![SipMediaApplicationEndpoint {
                lambda_arn: lambda_arn.to_string(),
            }],
        };

        let response = self
            .client
            .post(format!("{}/sip-media-applications", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let body: SipMediaApplicationResponse = response.json().await?;
        debug!(
            "Created SIP media application {}",
            body.sip_media_application.sip_media_application_id
        );
        Ok(body.sip_media_application)
    }

    /// Delete a SIP media application.
    #[instrument(skip(self))]
    pub async fn delete_sip_media_application(&self, sma_id: &str) -> Result<(), ChimeError> {
        let response = self
            .client
            .delete(format!("{}/sip-media-applications/{}", self.base_url, sma_id))
            .bearer_auth(self.api_key.expose_secret())
            .send()
            .await?;
        Self::check(response).await?;

        debug!("Deleted SIP media application {}", sma_id);
        Ok(())
    }

    /// Create an enabled SIP rule routing a phone number to a target application.
    #[instrument(skip(self, target))]
    pub async fn create_sip_rule(
        &self,
        name: &str,
        trigger_value: &str,
        target: SipRuleTargetApplication,
    ) -> Result<SipRule, ChimeError> {
        let request = CreateSipRuleRequest {
            name: name.to_string(),
            trigger_type: TO_PHONE_NUMBER_TRIGGER.to_string(),
            trigger_value: trigger_value.to_string(),
            disabled: false,
            target_applications: vec![target],
        };

        let response = self
            .client
            .post(format!("{}/sip-rules", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let body: SipRuleResponse = response.json().await?;
        debug!("Created SIP rule {}", body.sip_rule.sip_rule_id);
        Ok(body.sip_rule)
    }

    /// Update a SIP rule's name and enabled/disabled flag.
    ///
    /// The provider requires a name on every update, so disabling a rule
    /// always renames it as well.
    #[instrument(skip(self))]
    pub async fn update_sip_rule(
        &self,
        sip_rule_id: &str,
        name: &str,
        disabled: bool,
    ) -> Result<SipRule, ChimeError> {
        let request = UpdateSipRuleRequest {
            name: name.to_string(),
            disabled,
        };

        let response = self
            .client
            .put(format!("{}/sip-rules/{}", self.base_url, sip_rule_id))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let body: SipRuleResponse = response.json().await?;
        Ok(body.sip_rule)
    }

    /// Delete a SIP rule.
    #[instrument(skip(self))]
    pub async fn delete_sip_rule(&self, sip_rule_id: &str) -> Result<(), ChimeError> {
        let response = self
            .client
            .delete(format!("{}/sip-rules/{}", self.base_url, sip_rule_id))
            .bearer_auth(self.api_key.expose_secret())
            .send()
            .await?;
        Self::check(response).await?;

        debug!("Deleted SIP rule {}", sip_rule_id);
        Ok(())
    }

    /// Convert a non-2xx response into an API error carrying the body text.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ChimeError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        warn!("Chime API error: {} - {}", status, message);
        Err(ChimeError::Api { status, message })
    }
}
