//! Menu adapter: assemble the render list handed to the Menu collaborator and
//! translate its index-based events back to original option order.

use log::{debug, warn};

use crate::classify::{Classified, Entry};
use crate::config::{MenuProps, SelectConfig};
use crate::descriptor::{ChildRef, Descriptor};
use crate::events::{MenuEvent, MenuTarget, SelectEvent};
use crate::filter::filter_groups;
use crate::record::{OptionGroupRecord, OptionRecord};
use crate::resolve::Resolution;

/// One entry of the resolved render list.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry<'a> {
    /// Synthetic, always disabled, first while loading.
    Loading,
    /// Synthetic reset entry. Renders the placeholder's content.
    Null {
        placeholder: Option<&'a Descriptor>,
        is_active: bool,
    },
    Option(OptionRecord<'a>),
    /// A group with at least one visible option.
    Group(OptionGroupRecord<'a>),
    /// Caller content kept at its declared position.
    Passthrough(ChildRef<'a>),
}

/// Everything the Menu collaborator needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMenu<'a> {
    pub entries: Vec<MenuEntry<'a>>,
    /// Filtered position of the highlighted option (0 or 1 element).
    pub selected_indices: Vec<usize>,
    pub is_loading: bool,
    pub is_disabled: bool,
    /// Header content: the search field descriptor, when declared.
    pub search_field: Option<&'a Descriptor>,
    pub props: MenuProps,
    /// Visible options in filtered order; position here is the Menu's index.
    visible: Vec<OptionRecord<'a>>,
    placeholder: Option<&'a Descriptor>,
    has_null: bool,
}

/// Build the render list for one pass.
///
/// Order: loading entry, null entry, then options, groups and passthrough
/// content in declaration order. Groups emptied by filtering are dropped.
pub fn build_menu<'a>(
    classified: &Classified<'a>,
    option_count: usize,
    visible: Vec<OptionRecord<'a>>,
    resolution: &Resolution,
    config: &SelectConfig,
) -> ResolvedMenu<'a> {
    let mut entries = Vec::with_capacity(classified.entries.len() + 2);

    if config.is_loading {
        entries.push(MenuEntry::Loading);
    }
    if let Some(null) = resolution.null_option {
        entries.push(MenuEntry::Null {
            placeholder: classified.placeholder,
            is_active: null.is_active,
        });
    }

    let mut by_original: Vec<Option<&OptionRecord<'a>>> = vec![None; option_count];
    for option in &visible {
        if let Some(slot) = by_original.get_mut(option.original_index) {
            *slot = Some(option);
        }
    }

    let mut groups = filter_groups(classified, &visible).into_iter();
    let mut original_index = 0;

    for entry in &classified.entries {
        match entry {
            Entry::Option(_) => {
                if let Some(Some(record)) = by_original.get(original_index) {
                    entries.push(MenuEntry::Option((*record).clone()));
                }
                original_index += 1;
            }
            Entry::Group(group) => {
                original_index += group.options.len();
                if let Some(Some(record)) = groups.next() {
                    entries.push(MenuEntry::Group(record));
                }
            }
            Entry::Passthrough(child) => entries.push(MenuEntry::Passthrough(*child)),
        }
    }

    debug!(
        "menu: {} entries, {} of {} options visible, selected={:?}",
        entries.len(),
        visible.len(),
        option_count,
        resolution.selected_indices
    );

    ResolvedMenu {
        entries,
        selected_indices: resolution.selected_indices.clone(),
        is_loading: config.is_loading,
        is_disabled: config.is_disabled,
        search_field: classified.search_field,
        props: config.menu.clone(),
        visible,
        placeholder: classified.placeholder,
        has_null: resolution.null_option.is_some(),
    }
}

impl<'a> ResolvedMenu<'a> {
    /// Visible options in the Menu's index order.
    pub fn options(&self) -> &[OptionRecord<'a>] {
        &self.visible
    }

    /// Original index of the option at a filtered position.
    pub fn original_index(&self, filtered_index: usize) -> Option<usize> {
        self.visible
            .get(filtered_index)
            .map(|option| option.original_index)
    }

    pub fn has_null_option(&self) -> bool {
        self.has_null
    }

    /// True when no option survived filtering; the Menu shows "no matches".
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Translate a Menu activation into caller terms.
    ///
    /// Returns `None` when the event cannot select anything: the select is
    /// disabled or loading, the option is disabled, or the index is stale.
    pub fn translate_selection(&self, event: &MenuEvent) -> Option<SelectEvent<'a>> {
        if self.is_disabled || self.is_loading {
            debug!("menu: ignoring {:?} while disabled or loading", event.target);
            return None;
        }

        match event.target {
            MenuTarget::Null => {
                if !self.has_null {
                    warn!("menu: null option activated but reset is disabled");
                    return None;
                }
                Some(SelectEvent {
                    original_index: None,
                    descriptor: self.placeholder,
                    source: event.source.clone(),
                })
            }
            MenuTarget::Option(filtered_index) => {
                let Some(option) = self.visible.get(filtered_index) else {
                    warn!(
                        "menu: option {filtered_index} out of range ({} visible)",
                        self.visible.len()
                    );
                    return None;
                };
                if option.is_disabled {
                    debug!("menu: option {filtered_index} is disabled");
                    return None;
                }
                Some(SelectEvent {
                    original_index: Some(option.original_index),
                    descriptor: Some(option.descriptor),
                    source: event.source.clone(),
                })
            }
        }
    }
}
