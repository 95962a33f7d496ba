//! Phone number acquisition with bounded retries.
//!
//! The provider fulfills number orders asynchronously, so a single
//! acquisition is search → order → poll. A failed or timed-out attempt
//! is abandoned entirely and the next attempt starts from a fresh search.

use chime_client::{ChimeClient, ChimeError, OrderStatus, SIP_DIAL_IN_PRODUCT_TYPE};
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{info, warn};

/// State filter applied to every availability search.
pub const PHONE_NUMBER_STATE: &str = "IL";

/// Retry and polling budget for one acquisition.
#[derive(Debug, Clone, Copy)]
pub struct AcquisitionPolicy {
    /// Delay between order status polls.
    pub poll_interval: Duration,
    /// Status polls per order before the attempt is abandoned.
    pub poll_limit: u32,
    /// Full search-and-order attempts before giving up.
    pub attempt_limit: u32,
}

impl Default for AcquisitionPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            poll_limit: 10,
            attempt_limit: 10,
        }
    }
}

/// Terminal acquisition failure. Callers must handle this before using
/// any phone number value.
#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("could not get phone number after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Why a single attempt failed. Every cause triggers a fresh attempt.
#[derive(Error, Debug)]
enum AttemptError {
    #[error(transparent)]
    Chime(#[from] ChimeError),

    #[error("no phone numbers available in {PHONE_NUMBER_STATE}")]
    NoNumbersAvailable,

    #[error("order {order_id} did not complete within {polls} polls")]
    OrderTimedOut { order_id: String, polls: u32 },
}

/// Acquires one phone number through the asynchronous order API.
pub struct PhoneNumberAcquirer {
    client: ChimeClient,
    policy: AcquisitionPolicy,
}

impl PhoneNumberAcquirer {
    pub fn new(client: ChimeClient) -> Self {
        Self::with_policy(client, AcquisitionPolicy::default())
    }

    pub fn with_policy(client: ChimeClient, policy: AcquisitionPolicy) -> Self {
        Self { client, policy }
    }

    /// Acquire one phone number, retrying from a fresh search on failure.
    pub async fn acquire(&self) -> Result<String, AcquireError> {
        for attempt in 1..=self.policy.attempt_limit {
            match self.try_acquire().await {
                Ok(number) => {
                    info!("Acquired phone number {} on attempt {}", number, attempt);
                    return Ok(number);
                }
                Err(e) => warn!("Acquisition attempt {} failed: {}", attempt, e),
            }
        }

        Err(AcquireError::Exhausted {
            attempts: self.policy.attempt_limit,
        })
    }

    /// Search, order, and poll a single candidate number.
    async fn try_acquire(&self) -> Result<String, AttemptError> {
        let numbers = self
            .client
            .search_available_phone_numbers(PHONE_NUMBER_STATE, 1)
            .await?;
        let number = numbers
            .into_iter()
            .next()
            .ok_or(AttemptError::NoNumbersAvailable)?;
        info!("Ordering phone number {}", number);

        let order = self
            .client
            .create_phone_number_order(SIP_DIAL_IN_PRODUCT_TYPE, std::slice::from_ref(&number))
            .await?;

        let mut status = order.status;
        for _ in 0..self.policy.poll_limit {
            if status == OrderStatus::Successful {
                return Ok(number);
            }
            info!(
                "Order {} status: {:?}",
                order.phone_number_order_id, status
            );
            sleep(self.policy.poll_interval).await;
            status = self
                .client
                .get_phone_number_order(&order.phone_number_order_id)
                .await?
                .status;
        }

        if status == OrderStatus::Successful {
            return Ok(number);
        }

        Err(AttemptError::OrderTimedOut {
            order_id: order.phone_number_order_id,
            polls: self.policy.poll_limit,
        })
    }
}
