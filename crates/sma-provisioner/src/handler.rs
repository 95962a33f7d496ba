//! Lifecycle dispatch and the create/update/delete procedures.

use crate::acquire::{AcquisitionPolicy, PhoneNumberAcquirer};
use crate::error::HandlerError;
use crate::event::{LifecycleEvent, LifecycleResponse, ResourceBundle, PHYSICAL_RESOURCE_ID};
use chime_client::{ChimeClient, SipRuleTargetApplication};
use stack_outputs::StackOutputsClient;
use tracing::{debug, info};

/// Stack output keys published at create time and read back at delete.
const PHONE_NUMBER_OUTPUT: &str = "phoneNumber";
const SMA_ID_OUTPUT: &str = "smaID";
const SIP_RULE_ID_OUTPUT: &str = "sipRuleID";

/// Maps lifecycle events to provisioning procedures.
pub struct LifecycleHandler {
    chime: ChimeClient,
    stacks: StackOutputsClient,
    acquirer: PhoneNumberAcquirer,
}

impl LifecycleHandler {
    /// Create a handler with the default acquisition policy.
    pub fn new(chime: ChimeClient, stacks: StackOutputsClient) -> Self {
        Self::with_policy(chime, stacks, AcquisitionPolicy::default())
    }

    /// Create a handler with an explicit acquisition policy.
    pub fn with_policy(
        chime: ChimeClient,
        stacks: StackOutputsClient,
        policy: AcquisitionPolicy,
    ) -> Self {
        let acquirer = PhoneNumberAcquirer::with_policy(chime.clone(), policy);
        Self {
            chime,
            stacks,
            acquirer,
        }
    }

    /// Dispatch one lifecycle event.
    pub async fn handle(&self, event: LifecycleEvent) -> Result<LifecycleResponse, HandlerError> {
        match event.request_type.as_str() {
            "Create" => self.on_create(&event).await,
            "Update" => self.on_update(&event),
            "Delete" => self.on_delete(&event).await,
            other => Err(HandlerError::UnsupportedRequestType(other.to_string())),
        }
    }

    /// Provision the bundle: number, application, rule — in that order.
    async fn on_create(&self, event: &LifecycleEvent) -> Result<LifecycleResponse, HandlerError> {
        let props = &event.resource_properties;

        let phone_number = self.acquirer.acquire().await?;

        let sma = self
            .chime
            .create_sip_media_application(
                &props.region,
                &format!("{}-SMA", props.sma_name),
                &props.lambda_arn,
            )
            .await?;
        info!(
            "Created SIP media application {}",
            sma.sip_media_application_id
        );

        // The rule is named after the number it triggers on.
        let rule = self
            .chime
            .create_sip_rule(
                &phone_number,
                &phone_number,
                SipRuleTargetApplication {
                    sip_media_application_id: sma.sip_media_application_id.clone(),
                    priority: 1,
                    aws_region: props.region.clone(),
                },
            )
            .await?;
        info!("Created SIP rule {} for {}", rule.sip_rule_id, phone_number);

        Ok(LifecycleResponse {
            physical_resource_id: PHYSICAL_RESOURCE_ID.to_string(),
            data: Some(ResourceBundle {
                sma_id: sma.sip_media_application_id,
                phone_number,
                sip_rule_id: rule.sip_rule_id,
            }),
        })
    }

    /// Property changes between deployments are accepted without
    /// reconciliation; nothing is re-provisioned.
    fn on_update(&self, event: &LifecycleEvent) -> Result<LifecycleResponse, HandlerError> {
        let physical_id = event
            .physical_resource_id
            .clone()
            .ok_or(HandlerError::MissingPhysicalResourceId)?;
        info!("Update is a no-op for {}", physical_id);

        Ok(LifecycleResponse {
            physical_resource_id: physical_id,
            data: None,
        })
    }

    /// Unwind the bundle in reverse dependency order. A failure partway
    /// through propagates and leaves the remaining resources in place.
    async fn on_delete(&self, event: &LifecycleEvent) -> Result<LifecycleResponse, HandlerError> {
        let physical_id = event
            .physical_resource_id
            .clone()
            .ok_or(HandlerError::MissingPhysicalResourceId)?;

        let stack = self
            .stacks
            .describe_stack(&event.resource_properties.sma_name)
            .await?;
        let phone_number = stack.require_output(PHONE_NUMBER_OUTPUT)?.to_string();
        let sma_id = stack.require_output(SMA_ID_OUTPUT)?.to_string();
        let sip_rule_id = stack.require_output(SIP_RULE_ID_OUTPUT)?.to_string();

        // A rule must never reference a deleted application, so the rule
        // goes first and the number is released last. The provider wants
        // a name on every rule update; the number serves as one.
        let disabled = self
            .chime
            .update_sip_rule(&sip_rule_id, &phone_number, true)
            .await?;
        debug!("Disabled SIP rule: {:?}", disabled);

        self.chime.delete_sip_rule(&sip_rule_id).await?;
        info!("Deleted SIP rule {}", sip_rule_id);

        self.chime.delete_sip_media_application(&sma_id).await?;
        info!("Deleted SIP media application {}", sma_id);

        self.chime.delete_phone_number(&phone_number).await?;
        info!("Released phone number {}", phone_number);

        Ok(LifecycleResponse {
            physical_resource_id: physical_id,
            data: None,
        })
    }
}
