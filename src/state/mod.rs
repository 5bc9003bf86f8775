//! Page behaviour state.
//!
//! DESIGN
//! ======
//! Each handler owns a small focused model. Components wrap these in
//! `RwSignal`s provided via context; the models themselves are plain data so
//! their transitions are unit-tested without a browser.

pub mod contact;
pub mod reveal;
pub mod toast;
pub mod ui;
