//! Page behaviour tunables.
//!
//! DESIGN
//! ======
//! Every timing and threshold the handlers use lives here with its default.
//! The contact-delivery identifiers may be overridden at build time through
//! `PORTFOLIO_EMAILJS_*` environment variables; everything else is fixed at
//! compile time since a static page has no runtime configuration source.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_NAV_THROTTLE_MS: f64 = 150.0;
const DEFAULT_NAV_LEAD_PX: f64 = 100.0;

const DEFAULT_SCROLL_TOP_THROTTLE_MS: f64 = 200.0;
const DEFAULT_SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

const DEFAULT_SEND_DELAY_MS: u32 = 1500;

const DEFAULT_TOAST_ENTER_DELAY_MS: u32 = 10;
const DEFAULT_TOAST_DISPLAY_MS: u32 = 5000;
const DEFAULT_TOAST_EXIT_MS: u32 = 300;

const PLACEHOLDER_SERVICE_ID: &str = "YOUR_SERVICE_ID";
const PLACEHOLDER_TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

/// Top-level configuration, provided to components via context.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub scroll_top: ScrollTopConfig,
    /// Fraction of an element that must be visible before it reveals.
    pub reveal_threshold: f64,
    pub contact: ContactConfig,
    pub toast: ToastConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav: NavConfig::default(),
            scroll_top: ScrollTopConfig::default(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            contact: ContactConfig::default(),
            toast: ToastConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Defaults plus any contact identifiers baked in at build time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            contact: ContactConfig::from_build_env(),
            ..Self::default()
        }
    }
}

/// Scroll-spy navigation settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavConfig {
    pub throttle_ms: f64,
    /// A section becomes current this many pixels before its top edge.
    pub lead_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_NAV_THROTTLE_MS,
            lead_px: DEFAULT_NAV_LEAD_PX,
        }
    }
}

/// Scroll-to-top button settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTopConfig {
    pub throttle_ms: f64,
    pub threshold_px: f64,
}

impl Default for ScrollTopConfig {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_SCROLL_TOP_THROTTLE_MS,
            threshold_px: DEFAULT_SCROLL_TOP_THRESHOLD_PX,
        }
    }
}

/// Contact delivery settings.
///
/// The identifiers name an email-delivery integration that this version
/// never calls; sends are simulated with `send_delay_ms` of latency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub send_delay_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            service_id: PLACEHOLDER_SERVICE_ID.to_owned(),
            template_id: PLACEHOLDER_TEMPLATE_ID.to_owned(),
            public_key: PLACEHOLDER_PUBLIC_KEY.to_owned(),
            send_delay_ms: DEFAULT_SEND_DELAY_MS,
        }
    }
}

impl ContactConfig {
    fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
            option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
            option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
        )
    }

    fn from_values(service_id: Option<&str>, template_id: Option<&str>, public_key: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            service_id: non_empty(service_id).unwrap_or(defaults.service_id),
            template_id: non_empty(template_id).unwrap_or(defaults.template_id),
            public_key: non_empty(public_key).unwrap_or(defaults.public_key),
            send_delay_ms: defaults.send_delay_ms,
        }
    }

    /// `true` while any identifier is still the shipped placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.service_id == PLACEHOLDER_SERVICE_ID
            || self.template_id == PLACEHOLDER_TEMPLATE_ID
            || self.public_key == PLACEHOLDER_PUBLIC_KEY
    }
}

/// Toast lifecycle timings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastConfig {
    /// Delay before the entrance transition so the initial state paints first.
    pub enter_delay_ms: u32,
    pub display_ms: u32,
    /// Length of the exit transition; the node is removed afterwards.
    pub exit_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: DEFAULT_TOAST_ENTER_DELAY_MS,
            display_ms: DEFAULT_TOAST_DISPLAY_MS,
            exit_ms: DEFAULT_TOAST_EXIT_MS,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}
