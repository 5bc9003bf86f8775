//! Contact message delivery.
//!
//! Browser (csr): the send is simulated. The payload is logged, the
//! configured latency elapses, and the call succeeds. No request leaves the
//! page.
//! Native builds: resolves immediately with success so callers stay
//! exercisable in unit tests.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` and drive the form's failure transition from it;
//! nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::config::ContactConfig;
use crate::state::contact::ContactPayload;

/// Error returned by [`send_contact`].
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// The payload could not be encoded as template parameters.
    #[error("failed to encode contact payload: {0}")]
    Encode(#[from] serde_json::Error),
    /// The delivery service could not be reached or refused the message.
    ///
    /// The simulated sender never returns this. It is the variant a real
    /// email-delivery integration reports, and it drives the form's
    /// `Sending -> Idle` failure transition.
    #[error("contact delivery failed: {0}")]
    Transport(String),
}

/// Template parameters as the JSON object the delivery service expects.
///
/// # Errors
///
/// Returns [`ContactError::Encode`] if serialization fails.
pub fn encode_payload(payload: &ContactPayload) -> Result<String, ContactError> {
    Ok(serde_json::to_string(payload)?)
}

/// Deliver a contact message.
///
/// # Errors
///
/// Returns [`ContactError`] if the payload cannot be encoded or delivery
/// fails. The simulated sender only fails on encoding.
pub async fn send_contact(config: &ContactConfig, payload: &ContactPayload) -> Result<(), ContactError> {
    let params = encode_payload(payload)?;
    if config.is_placeholder() {
        log::debug!("contact delivery identifiers are placeholders; simulating send");
    }
    log::info!(
        "contact form submitted (service={}, template={}): {params}",
        config.service_id,
        config.template_id
    );

    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(config.send_delay_ms))).await;
    }

    Ok(())
}
