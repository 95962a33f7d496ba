//! Telephony provisioning API client.
//!
//! Covers the operations the SMA provisioner needs: phone number
//! search/order/release, SIP media applications, and SIP rules.

mod client;
mod error;
mod types;

pub use client::{ChimeClient, SIP_DIAL_IN_PRODUCT_TYPE, TO_PHONE_NUMBER_TRIGGER};
pub use error::ChimeError;
pub use types::*;
