//! Option-tree resolution and filtering for a searchable select.
//!
//! A pass takes a declarative [`Descriptor`](descriptor::Descriptor) tree and
//! the caller's [`SelectState`](select::SelectState), and produces a
//! [`ResolvedMenu`](menu::ResolvedMenu) for the menu renderer:
//!
//! 1. [`classify`](classify::classify) partitions the tree by role.
//! 2. [`option_records`](record::option_records) flattens options in original order.
//! 3. [`filter_options`](filter::filter_options) applies the search predicate.
//! 4. [`resolve_selection`](resolve::resolve_selection) maps the selection onto the filtered list.
//! 5. [`build_menu`](menu::build_menu) assembles the render list.
//!
//! Menu events come back through
//! [`ResolvedMenu::translate_selection`](menu::ResolvedMenu::translate_selection),
//! which always reports original indices.

pub mod classify;
pub mod config;
pub mod control;
pub mod descriptor;
pub mod error;
pub mod events;
pub mod filter;
pub mod menu;
pub mod record;
pub mod resolve;
pub mod select;
pub mod text;

pub use error::{Result, SelectError};
pub use select::{SearchableSelect, SelectState};

pub mod prelude {
    pub use crate::classify::{Classified, Entry, classify};
    pub use crate::config::{MatchMode, MenuDirection, MenuProps, SelectConfig};
    pub use crate::control::{ControlContent, ControlView};
    pub use crate::descriptor::{ChildRef, Children, Descriptor, Node, Role};
    pub use crate::error::SelectError;
    pub use crate::events::{MenuEvent, MenuTarget, SearchEvent, SelectEvent, SourceEvent};
    pub use crate::filter::{
        Fallible, FuzzyFilter, OptionFilter, SubstringFilter, default_option_filter,
    };
    pub use crate::menu::{MenuEntry, ResolvedMenu};
    pub use crate::record::{OptionGroupRecord, OptionRecord};
    pub use crate::select::{SearchableSelect, SelectState};
    pub use crate::text::combined_text;
}
