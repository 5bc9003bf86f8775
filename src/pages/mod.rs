//! Page-level components.

pub mod home;
