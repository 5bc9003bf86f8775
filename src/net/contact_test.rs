use futures::executor::block_on;

use super::*;
use crate::state::contact::{ContactFields, ContactState, SubmitOutcome};
use crate::state::toast::ToastKind;

fn payload() -> ContactPayload {
    ContactPayload {
        full_name: "Grace Hopper".to_owned(),
        from_email: "grace@example.com".to_owned(),
        service_type: "consulting".to_owned(),
        budget: "under-5k".to_owned(),
        message: "Compilers, please.".to_owned(),
    }
}

#[test]
fn encode_payload_produces_template_object() {
    let encoded = encode_payload(&payload()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(value["full_name"], "Grace Hopper");
    assert_eq!(value["from_email"], "grace@example.com");
    assert_eq!(value["service_type"], "consulting");
    assert_eq!(value["budget"], "under-5k");
    assert_eq!(value["message"], "Compilers, please.");
}

#[test]
fn encode_payload_escapes_user_text() {
    let mut p = payload();
    p.message = "line one\n\"quoted\"".to_owned();
    let encoded = encode_payload(&p).unwrap();
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(value["message"], "line one\n\"quoted\"");
}

#[test]
fn transport_error_display() {
    let err = ContactError::Transport("service unavailable".to_owned());
    assert_eq!(err.to_string(), "contact delivery failed: service unavailable");
}

#[test]
fn encode_error_converts_from_serde() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ContactError::from(serde_err);
    assert!(matches!(err, ContactError::Encode(_)));
    assert!(err.to_string().starts_with("failed to encode contact payload"));
}

// =============================================================
// Delivery
// =============================================================

#[test]
fn send_contact_succeeds_with_default_config() {
    let config = ContactConfig::default();
    assert!(block_on(send_contact(&config, &payload())).is_ok());
}

#[test]
fn submit_send_complete_clears_form() {
    let config = ContactConfig::default();
    let mut state = ContactState::default();
    let mut fields = ContactFields {
        full_name: "Grace Hopper".to_owned(),
        email: "grace@example.com".to_owned(),
        service_type: "consulting".to_owned(),
        budget: "under-5k".to_owned(),
        message: "Compilers, please.".to_owned(),
    };

    assert_eq!(state.submit(true), SubmitOutcome::Send);
    assert!(state.submit_disabled());
    let sent = fields.payload();
    assert_eq!(sent, payload());

    let result = block_on(send_contact(&config, &sent));
    let notice = state.complete(&mut fields, result.as_ref().map(|_| ())).unwrap();
    assert_eq!(notice.kind, ToastKind::Success);
    assert_eq!(notice.message, "Thank you! Your message has been sent.");
    assert_eq!(fields, ContactFields::default());
    assert!(!state.submit_disabled());
    assert_eq!(state.submit_label(), "Send Project Brief");
}
