//! SMA provisioner - lifecycle handler for a telephony integration.
//!
//! Maps create/update/delete stack operations onto a strictly ordered
//! sequence of provisioning API calls: acquire a phone number, create a
//! SIP media application, and route the number to it with a SIP rule.
//! The handler is stateless; the provisioning API and the stack-output
//! store are the only sources of truth.

pub mod acquire;
pub mod config;
pub mod error;
pub mod event;
pub mod handler;

pub use config::Config;
pub use error::HandlerError;
pub use handler::LifecycleHandler;
