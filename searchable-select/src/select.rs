//! `SearchableSelect`: runs resolution passes over a descriptor tree and
//! relays menu and search events to caller callbacks.

use std::sync::{Arc, OnceLock};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::config::{MatchMode, SelectConfig};
use crate::control::{ControlView, control_view};
use crate::descriptor::Descriptor;
use crate::error::Result;
use crate::events::{MenuEvent, SearchEvent, SelectEvent, SourceEvent};
use crate::filter::{FuzzyFilter, OptionFilter, SubstringFilter, filter_options};
use crate::menu::{ResolvedMenu, build_menu};
use crate::record::option_records;
use crate::resolve::resolve_selection;
use crate::text::TextCombiner;

/// Callback fired when the user picks an option (`None` means reset).
pub type SelectHandler = Arc<dyn Fn(Option<usize>, &SelectEvent<'_>) + Send + Sync>;

/// Callback fired when the user edits the search text.
pub type SearchHandler = Arc<dyn Fn(&str, &SearchEvent) + Send + Sync>;

type SharedFilter = Arc<dyn OptionFilter + Send + Sync>;

/// Caller-owned select state. The engine only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectState {
    /// Selected option, as an original index.
    pub selected_index: Option<usize>,
    pub search_text: String,
}

impl SelectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected_index = Some(index);
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Store the outcome of a select event.
    pub fn apply_selection(&mut self, event: &SelectEvent<'_>) {
        self.selected_index = event.original_index;
    }

    /// Store new search text.
    pub fn apply_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }
}

/// A searchable select over a declarative descriptor tree.
///
/// # Example
///
/// ```
/// use searchable_select::prelude::*;
///
/// let select = SearchableSelect::new(
///     Descriptor::root()
///         .child(Descriptor::placeholder("Pick one"))
///         .child(Descriptor::option("option a"))
///         .child(Descriptor::option("option b")),
/// );
///
/// let state = SelectState::new().with_search("B");
/// let menu = select.resolve(&state).unwrap();
/// assert_eq!(menu.options().len(), 1);
/// assert_eq!(menu.original_index(0), Some(1));
/// ```
pub struct SearchableSelect {
    root: Descriptor,
    config: SelectConfig,
    predicate: Option<SharedFilter>,
    combiner: Option<TextCombiner>,
    fuzzy: OnceLock<FuzzyFilter>,
    on_select: Option<SelectHandler>,
    on_search: Option<SearchHandler>,
}

impl SearchableSelect {
    pub fn new(root: Descriptor) -> Self {
        Self {
            root,
            config: SelectConfig::default(),
            predicate: None,
            combiner: None,
            fuzzy: OnceLock::new(),
            on_select: None,
            on_search: None,
        }
    }

    pub fn with_config(mut self, config: SelectConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the built-in matching with a plain predicate.
    pub fn with_option_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str, &Descriptor) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(filter));
        self
    }

    /// Replace the built-in matching with any [`OptionFilter`].
    pub fn with_predicate(mut self, predicate: impl OptionFilter + Send + Sync + 'static) -> Self {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    /// Override how option text is combined for matching and labels.
    pub fn with_text_combiner<F>(mut self, combiner: F) -> Self
    where
        F: Fn(&Descriptor) -> String + Send + Sync + 'static,
    {
        self.combiner = Some(Arc::new(combiner));
        self
    }

    pub fn on_select<F>(mut self, handler: F) -> Self
    where
        F: Fn(Option<usize>, &SelectEvent<'_>) + Send + Sync + 'static,
    {
        self.on_select = Some(Arc::new(handler));
        self
    }

    pub fn on_search<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &SearchEvent) + Send + Sync + 'static,
    {
        self.on_search = Some(Arc::new(handler));
        self
    }

    pub fn root(&self) -> &Descriptor {
        &self.root
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Update the configuration between passes (e.g. toggling loading).
    pub fn set_config(&mut self, config: SelectConfig) {
        self.config = config;
    }

    /// Replace the descriptor tree.
    pub fn set_root(&mut self, root: Descriptor) {
        self.root = root;
    }

    /// Run one resolution pass.
    ///
    /// On error nothing is produced; a menu from an earlier pass stays valid.
    pub fn resolve(&self, state: &SelectState) -> Result<ResolvedMenu<'_>> {
        let classified = classify(&self.root)?;
        let options = option_records(&classified, self.combiner.as_ref(), self.config.is_loading);

        let search = Some(state.search_text.as_str());
        let visible = match (&self.predicate, self.config.match_mode) {
            (Some(predicate), _) => filter_options(&options, search, predicate.as_ref())?,
            (None, MatchMode::Substring) => filter_options(&options, search, &SubstringFilter)?,
            (None, MatchMode::Fuzzy) => {
                let fuzzy = self.fuzzy.get_or_init(FuzzyFilter::new);
                filter_options(&options, search, fuzzy)?
            }
        };

        let resolution = resolve_selection(
            &options,
            &visible,
            state.selected_index,
            self.config.has_reset,
            self.config.is_loading,
        );

        debug!(
            "select: pass search={:?} selected={:?} -> {} visible",
            state.search_text,
            state.selected_index,
            visible.len()
        );

        Ok(build_menu(
            &classified,
            options.len(),
            visible,
            &resolution,
            &self.config,
        ))
    }

    /// Build the control view for the current state.
    pub fn control(&self, state: &SelectState) -> Result<ControlView<'_>> {
        let classified = classify(&self.root)?;
        let options = option_records(&classified, self.combiner.as_ref(), self.config.is_loading);
        Ok(control_view(
            &classified,
            &options,
            state.selected_index,
            &self.config,
        ))
    }

    /// Translate a Menu activation and fire `on_select` once.
    ///
    /// Returns the translated event, or `None` if nothing was selectable.
    pub fn select<'m>(&self, menu: &ResolvedMenu<'m>, event: &MenuEvent) -> Option<SelectEvent<'m>> {
        let selected = menu.translate_selection(event)?;
        debug!("select: {:?} -> {:?}", event.target, selected.original_index);
        if let Some(handler) = &self.on_select {
            handler(selected.original_index, &selected);
        }
        Some(selected)
    }

    /// Report a user edit of the search text, firing `on_search` once.
    pub fn search(&self, text: &str, source: SourceEvent) {
        debug!("select: search {text:?}");
        if let Some(handler) = &self.on_search {
            handler(text, &SearchEvent { source });
        }
    }
}

impl std::fmt::Debug for SearchableSelect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchableSelect")
            .field("root", &self.root)
            .field("config", &self.config)
            .field("predicate", &self.predicate.is_some())
            .field("combiner", &self.combiner.is_some())
            .field("on_select", &self.on_select.is_some())
            .field("on_search", &self.on_search.is_some())
            .finish()
    }
}
