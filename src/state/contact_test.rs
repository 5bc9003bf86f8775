use super::*;

fn filled() -> ContactFields {
    ContactFields {
        full_name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        service_type: "web-development".to_owned(),
        budget: "5k-10k".to_owned(),
        message: "Let's build an engine.".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn contact_state_default_is_idle_and_enabled() {
    let state = ContactState::default();
    assert_eq!(state.phase, FormPhase::Idle);
    assert!(!state.was_validated);
    assert!(!state.submit_disabled());
    assert_eq!(state.submit_label(), SUBMIT_LABEL);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn invalid_submit_returns_to_idle_and_marks_validated() {
    let mut state = ContactState::default();
    assert_eq!(state.submit(false), SubmitOutcome::Invalid);
    assert_eq!(state.phase, FormPhase::Idle);
    assert!(state.was_validated);
    assert!(!state.submit_disabled());
    assert_eq!(state.submit_label(), SUBMIT_LABEL);
}

#[test]
fn invalid_submit_produces_no_notice() {
    let mut state = ContactState::default();
    state.submit(false);
    let mut fields = filled();
    assert_eq!(state.complete(&mut fields, Ok(())), None);
    assert_eq!(fields, filled());
}

// =============================================================
// Sending
// =============================================================

#[test]
fn valid_submit_disables_control_immediately() {
    let mut state = ContactState::default();
    assert_eq!(state.submit(true), SubmitOutcome::Send);
    assert_eq!(state.phase, FormPhase::Sending);
    assert!(state.submit_disabled());
    assert_eq!(state.submit_label(), SENDING_LABEL);
}

#[test]
fn submit_while_sending_is_ignored() {
    let mut state = ContactState::default();
    state.submit(true);
    assert_eq!(state.submit(true), SubmitOutcome::Ignored);
    assert_eq!(state.submit(false), SubmitOutcome::Ignored);
    assert_eq!(state.phase, FormPhase::Sending);
    assert!(!state.was_validated);
}

#[test]
fn valid_submit_sends_then_clears_fields_and_restores_control() {
    let mut state = ContactState::default();
    let mut fields = filled();
    state.submit(false);

    assert_eq!(state.submit(true), SubmitOutcome::Send);
    assert!(state.submit_disabled());
    assert_eq!(state.submit_label(), "Sending...");
    assert_eq!(fields, filled());

    let notice = state.complete(&mut fields, Ok(())).unwrap();
    assert_eq!(notice.message, "Thank you! Your message has been sent.");
    assert_eq!(notice.kind, ToastKind::Success);
    assert_eq!(state.phase, FormPhase::Done);
    assert_eq!(fields, ContactFields::default());
    assert!(!state.was_validated);
    assert!(!state.submit_disabled());
    assert_eq!(state.submit_label(), "Send Project Brief");
}

#[test]
fn failed_send_keeps_fields_and_restores_control() {
    let mut state = ContactState::default();
    let mut fields = filled();
    state.submit(true);
    let err = ContactError::Transport("offline".to_owned());
    let notice = state.complete(&mut fields, Err(&err)).unwrap();
    assert_eq!(notice.kind, ToastKind::Error);
    assert_eq!(notice.message, "Sorry, your message could not be sent. Please try again.");
    assert_eq!(state.phase, FormPhase::Idle);
    assert_eq!(fields, filled());
    assert!(!state.submit_disabled());
    assert_eq!(state.submit_label(), "Send Project Brief");
}

#[test]
fn failed_send_can_be_retried() {
    let mut state = ContactState::default();
    let mut fields = filled();
    state.submit(true);
    let err = ContactError::Transport("offline".to_owned());
    state.complete(&mut fields, Err(&err));

    assert_eq!(state.submit(true), SubmitOutcome::Send);
    assert_eq!(fields.payload(), filled().payload());
    state.complete(&mut fields, Ok(()));
    assert_eq!(fields, ContactFields::default());
}

#[test]
fn done_accepts_another_submission() {
    let mut state = ContactState::default();
    let mut fields = filled();
    state.submit(true);
    state.complete(&mut fields, Ok(()));
    assert_eq!(state.submit(true), SubmitOutcome::Send);
}

#[test]
fn complete_is_single_use() {
    let mut state = ContactState::default();
    let mut fields = filled();
    state.submit(true);
    assert!(state.complete(&mut fields, Ok(())).is_some());
    fields = filled();
    assert!(state.complete(&mut fields, Ok(())).is_none());
    assert_eq!(fields, filled());
}

// =============================================================
// Fields & payload
// =============================================================

#[test]
fn payload_maps_field_values() {
    let payload = filled().payload();
    assert_eq!(payload.full_name, "Ada Lovelace");
    assert_eq!(payload.from_email, "ada@example.com");
    assert_eq!(payload.service_type, "web-development");
    assert_eq!(payload.budget, "5k-10k");
    assert_eq!(payload.message, "Let's build an engine.");
}

#[test]
fn payload_serializes_template_parameter_names() {
    let json = serde_json::to_value(filled().payload()).unwrap();
    let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    for key in ["full_name", "from_email", "service_type", "budget", "message"] {
        assert!(keys.iter().any(|k| k == key), "missing {key}");
    }
    assert_eq!(keys.len(), 5);
}

#[test]
fn clear_empties_every_field() {
    let mut fields = filled();
    fields.clear();
    assert_eq!(fields, ContactFields::default());
}
