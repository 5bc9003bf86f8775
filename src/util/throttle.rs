//! Leading-edge rate limiter for high-frequency browser events.
//!
//! DESIGN
//! ======
//! The first event fires immediately and opens a cooldown window of
//! `window_ms`. Events arriving inside the window are dropped. There is no
//! trailing fire: when a burst ends inside a window, the last event of the
//! burst is never delivered. Scroll handlers accept this because the next
//! scroll after the window re-samples the position.
//!
//! Time is passed in by the caller (milliseconds from `performance.now()` in
//! the browser) so the limiter is deterministic under test. A timestamp
//! earlier than the start of the open window means the clock was reset; the
//! window is discarded and the event fires.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

use std::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Throttle {
    window_ms: f64,
    cooldown_until: Option<f64>,
}

impl Throttle {
    /// A limiter admitting at most one event per `window_ms`.
    /// Negative windows are clamped to zero, which admits every event.
    #[must_use]
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms: window_ms.max(0.0),
            cooldown_until: None,
        }
    }

    #[must_use]
    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    /// Decide whether an event observed at `now_ms` should fire.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        if let Some(until) = self.cooldown_until {
            let opened_at = until - self.window_ms;
            if now_ms >= opened_at && now_ms < until {
                return false;
            }
        }
        self.cooldown_until = Some(now_ms + self.window_ms);
        true
    }

    /// [`Throttle::admit`] through a `Cell`, for `Fn` event callbacks.
    pub fn admit_cell(cell: &Cell<Self>, now_ms: f64) -> bool {
        let mut throttle = cell.get();
        let admitted = throttle.admit(now_ms);
        cell.set(throttle);
        admitted
    }
}

/// Monotonic time in milliseconds since page load.
#[cfg(feature = "csr")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}
