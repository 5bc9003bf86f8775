use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_throttle_windows() {
    let config = SiteConfig::default();
    assert!((config.nav.throttle_ms - 150.0).abs() < f64::EPSILON);
    assert!((config.scroll_top.throttle_ms - 200.0).abs() < f64::EPSILON);
}

#[test]
fn default_thresholds() {
    let config = SiteConfig::default();
    assert!((config.nav.lead_px - 100.0).abs() < f64::EPSILON);
    assert!((config.scroll_top.threshold_px - 300.0).abs() < f64::EPSILON);
    assert!((config.reveal_threshold - 0.1).abs() < f64::EPSILON);
}

#[test]
fn default_toast_timings() {
    let toast = ToastConfig::default();
    assert_eq!(toast.enter_delay_ms, 10);
    assert_eq!(toast.display_ms, 5000);
    assert_eq!(toast.exit_ms, 300);
}

#[test]
fn default_contact_is_placeholder_with_simulated_delay() {
    let contact = ContactConfig::default();
    assert!(contact.is_placeholder());
    assert_eq!(contact.send_delay_ms, 1500);
}

// =============================================================
// Build-time overrides
// =============================================================

#[test]
fn contact_overrides_replace_placeholders() {
    let contact = ContactConfig::from_values(Some("svc"), Some("tpl"), Some("key"));
    assert_eq!(contact.service_id, "svc");
    assert_eq!(contact.template_id, "tpl");
    assert_eq!(contact.public_key, "key");
    assert!(!contact.is_placeholder());
}

#[test]
fn blank_overrides_fall_back_to_placeholders() {
    let contact = ContactConfig::from_values(Some("  "), None, Some("key"));
    assert_eq!(contact.service_id, PLACEHOLDER_SERVICE_ID);
    assert_eq!(contact.template_id, PLACEHOLDER_TEMPLATE_ID);
    assert_eq!(contact.public_key, "key");
    assert!(contact.is_placeholder());
}

#[test]
fn from_build_env_keeps_non_contact_defaults() {
    let config = SiteConfig::from_build_env();
    let defaults = SiteConfig::default();
    assert_eq!(config.nav, defaults.nav);
    assert_eq!(config.scroll_top, defaults.scroll_top);
    assert_eq!(config.toast, defaults.toast);
}
