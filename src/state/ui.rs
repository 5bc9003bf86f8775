//! Page chrome state: theme, scroll-spy selection, scroll-to-top visibility.
//!
//! DESIGN
//! ======
//! The document-level theme attribute and the nav highlight are mirrored
//! here so a single writer owns each; components render from this state and
//! the DOM attribute follows it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::scroll::href_targets;
use crate::util::theme::Theme;

/// UI state shared by the header, nav, and floating controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    /// Id of the section the reader is in, if any.
    pub active_section: Option<String>,
    pub scroll_top_visible: bool,
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Record the current section. Returns `true` if it changed.
    pub fn set_active_section(&mut self, section: Option<&str>) -> bool {
        if self.active_section.as_deref() == section {
            return false;
        }
        self.active_section = section.map(str::to_owned);
        true
    }

    /// Whether the nav link with this `href` carries the active marker.
    #[must_use]
    pub fn is_active_link(&self, href: &str) -> bool {
        self.active_section
            .as_deref()
            .is_some_and(|id| href_targets(href, id))
    }

    /// Record scroll-to-top visibility. Returns `true` if it changed.
    pub fn set_scroll_top_visible(&mut self, visible: bool) -> bool {
        let changed = self.scroll_top_visible != visible;
        self.scroll_top_visible = visible;
        changed
    }
}
