//! Light/dark theme preference.
//!
//! Reads the preference from `localStorage` and applies a `data-theme`
//! attribute to `<body>`. Toggle writes back to `localStorage` and updates
//! that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage failures are ignored and native
//! builds no-op so the theme logic stays testable off-browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "theme";
#[cfg(feature = "csr")]
const THEME_ATTR: &str = "data-theme";

/// Site colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored value. Anything other than `"dark"`/`"light"` is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon for the toggle button. It shows the mode a click switches *to*:
    /// a sun while dark, a moon while light.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fa-regular fa-sun",
            Self::Light => "fa-regular fa-moon",
        }
    }
}

/// Read the stored theme, falling back to [`Theme::Dark`].
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}

/// Set the `data-theme` attribute on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.set_attribute(THEME_ATTR, theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Write the theme to `localStorage`.
pub fn persist(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist it. Returns the new theme.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(next);
    next
}
