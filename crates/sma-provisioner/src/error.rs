//! Lifecycle handler errors.

use crate::acquire::AcquireError;
use chime_client::ChimeError;
use stack_outputs::StackOutputsError;
use thiserror::Error;

/// Errors a lifecycle operation can fail with. All of them propagate to
/// the invoking orchestrator; no compensating cleanup happens here.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid request type: {0}")]
    UnsupportedRequestType(String),

    #[error("Event has no PhysicalResourceId")]
    MissingPhysicalResourceId,

    #[error("Phone number acquisition failed: {0}")]
    Acquire(#[from] AcquireError),

    #[error("Chime error: {0}")]
    Chime(#[from] ChimeError),

    #[error("Stack outputs error: {0}")]
    StackOutputs(#[from] StackOutputsError),
}
