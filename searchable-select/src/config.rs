//! Select configuration.

use serde::{Deserialize, Serialize};

/// How the built-in predicate matches search text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Fuzzy match via nucleo-matcher.
    Fuzzy,
}

/// Which way the menu opens relative to the control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuDirection {
    #[default]
    Down,
    Up,
}

/// Props handed through to the Menu collaborator untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuProps {
    pub is_expanded: bool,
    pub direction: MenuDirection,
    /// Keyboard focus position, in the menu's own (filtered) coordinates.
    pub focused_index: Option<usize>,
    /// Maximum height of the option container.
    pub max_height: Option<u16>,
}

/// Per-select configuration.
///
/// # Example
///
/// ```
/// use searchable_select::config::{MatchMode, SelectConfig};
///
/// let config = SelectConfig::default()
///     .with_reset(false)
///     .with_match_mode(MatchMode::Fuzzy)
///     .with_max_menu_height(12);
///
/// assert!(!config.has_reset);
/// assert_eq!(config.menu.max_height, Some(12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Show a null option that clears the selection.
    ///
    /// Default: true
    pub has_reset: bool,

    /// Disable the whole select.
    pub is_disabled: bool,

    /// Options are still being fetched: everything is disabled and a loading
    /// entry is shown first.
    pub is_loading: bool,

    /// Style the control as selected/highlighted when a value is chosen.
    ///
    /// Default: true
    pub is_selection_highlighted: bool,

    /// Built-in predicate used when no custom predicate is set.
    pub match_mode: MatchMode,

    pub menu: MenuProps,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            has_reset: true,
            is_disabled: false,
            is_loading: false,
            is_selection_highlighted: true,
            match_mode: MatchMode::default(),
            menu: MenuProps::default(),
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reset(mut self, has_reset: bool) -> Self {
        self.has_reset = has_reset;
        self
    }

    pub fn with_disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    pub fn with_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn with_selection_highlighted(mut self, highlighted: bool) -> Self {
        self.is_selection_highlighted = highlighted;
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn with_menu(mut self, menu: MenuProps) -> Self {
        self.menu = menu;
        self
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.menu.is_expanded = expanded;
        self
    }

    pub fn with_max_menu_height(mut self, height: u16) -> Self {
        self.menu.max_height = Some(height);
        self
    }
}
