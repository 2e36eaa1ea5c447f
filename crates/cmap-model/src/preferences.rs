//! User-facing toggles.

use serde::{Deserialize, Serialize};

/// Persisted UI toggles.
///
/// Serialized under the `preferences` storage key. Older documents used
/// lowercase `showsearch` / `showfilters`; both spellings are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    /// Dark colour scheme.
    pub dark_mode: bool,

    /// Filter panel visibility.
    #[serde(alias = "showfilters")]
    pub show_filters: bool,

    /// Search bar visibility.
    #[serde(alias = "showsearch")]
    pub show_search: bool,

    /// Sidebar visibility.
    pub sidebar: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self::for_host(ColorScheme::Light)
    }
}

impl Preferences {
    /// First-run preferences, taking the dark-mode default from the host.
    pub fn for_host(scheme: ColorScheme) -> Self {
        Self {
            dark_mode: scheme.is_dark(),
            show_filters: false,
            show_search: false,
            sidebar: true,
        }
    }

    /// Read a flag.
    pub fn get(&self, flag: PreferenceFlag) -> bool {
        match flag {
            PreferenceFlag::DarkMode => self.dark_mode,
            PreferenceFlag::ShowFilters => self.show_filters,
            PreferenceFlag::ShowSearch => self.show_search,
            PreferenceFlag::Sidebar => self.sidebar,
        }
    }

    /// Flip a flag and return its new value.
    pub fn flip(&mut self, flag: PreferenceFlag) -> bool {
        let slot = match flag {
            PreferenceFlag::DarkMode => &mut self.dark_mode,
            PreferenceFlag::ShowFilters => &mut self.show_filters,
            PreferenceFlag::ShowSearch => &mut self.show_search,
            PreferenceFlag::Sidebar => &mut self.sidebar,
        };
        *slot = !*slot;
        *slot
    }
}

/// The `preferences` document as found on disk, before host defaults apply.
///
/// Keys the document omits stay `None` so [`resolve`](Self::resolve) can
/// take them from the host, in particular a missing `darkMode`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredPreferences {
    pub dark_mode: Option<bool>,
    #[serde(alias = "showfilters")]
    pub show_filters: Option<bool>,
    #[serde(alias = "showsearch")]
    pub show_search: Option<bool>,
    pub sidebar: Option<bool>,
}

impl StoredPreferences {
    /// Fill every missing key from [`Preferences::for_host`].
    pub fn resolve(self, host: ColorScheme) -> Preferences {
        let fallback = Preferences::for_host(host);
        Preferences {
            dark_mode: self.dark_mode.unwrap_or(fallback.dark_mode),
            show_filters: self.show_filters.unwrap_or(fallback.show_filters),
            show_search: self.show_search.unwrap_or(fallback.show_search),
            sidebar: self.sidebar.unwrap_or(fallback.sidebar),
        }
    }
}

/// A named boolean in [`Preferences`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceFlag {
    DarkMode,
    ShowFilters,
    ShowSearch,
    Sidebar,
}

impl PreferenceFlag {
    pub const ALL: [PreferenceFlag; 4] = [
        Self::DarkMode,
        Self::ShowFilters,
        Self::ShowSearch,
        Self::Sidebar,
    ];

    /// Name used by toggle controls and the persisted document.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DarkMode => "darkMode",
            Self::ShowFilters => "showFilters",
            Self::ShowSearch => "showSearch",
            Self::Sidebar => "sidebar",
        }
    }

    /// Resolve a toggle name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "darkMode" => Some(Self::DarkMode),
            "showFilters" | "showfilters" => Some(Self::ShowFilters),
            "showSearch" | "showsearch" => Some(Self::ShowSearch),
            "sidebar" => Some(Self::Sidebar),
            _ => None,
        }
    }
}

/// Host colour-scheme signal, consulted once for the first-run default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    #[inline]
    pub const fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Interpret a terminal `COLORFGBG` value (`"fg;bg"` or `"fg;x;bg"`).
    ///
    /// Background indices 0-6 and 8 are the dark half of the 16-colour
    /// palette.
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        Some(match background {
            0..=6 | 8 => Self::Dark,
            _ => Self::Light,
        })
    }
}
