//! Outbound delivery for page forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page has no backend of its own. Delivery calls go to third-party
//! integrations configured in [`crate::config::SiteConfig`].

pub mod contact;
