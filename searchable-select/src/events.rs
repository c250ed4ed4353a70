//! Events flowing in from the Menu collaborator and out to the caller.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::descriptor::Descriptor;

/// The raw interaction that caused an event, handed through to callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEvent {
    /// Pointer click at terminal/window coordinates.
    Click { x: u16, y: u16 },
    /// Key press, by key name.
    Key(String),
    /// Text typed into the search field.
    Input,
    /// Triggered from code rather than by the user.
    Programmatic,
}

/// What the Menu reports as activated, in its own coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    /// The null/reset entry.
    Null,
    /// An option, by position among the visible (filtered) options.
    Option(usize),
}

/// Activation event emitted by the Menu collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEvent {
    pub target: MenuTarget,
    pub source: SourceEvent,
}

impl MenuEvent {
    pub fn new(target: MenuTarget, source: SourceEvent) -> Self {
        Self { target, source }
    }

    /// Shorthand for clicking the option at a filtered position.
    pub fn option(filtered_index: usize, source: SourceEvent) -> Self {
        Self::new(MenuTarget::Option(filtered_index), source)
    }
}

/// Caller-facing selection, expressed in original option order.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectEvent<'a> {
    /// Original index of the chosen option, or `None` for a reset.
    pub original_index: Option<usize>,
    /// The caller's own descriptor for the chosen option (the placeholder on reset).
    pub descriptor: Option<&'a Descriptor>,
    pub source: SourceEvent,
}

impl<'a> SelectEvent<'a> {
    /// Attributes the caller attached to the chosen descriptor.
    pub fn attrs(&self) -> Option<&'a BTreeMap<String, Value>> {
        self.descriptor.map(|descriptor| &descriptor.attrs)
    }

    /// Look up a single caller attribute.
    pub fn attr(&self, key: &str) -> Option<&'a Value> {
        self.attrs().and_then(|attrs| attrs.get(key))
    }
}

/// Payload for a search text change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEvent {
    pub source: SourceEvent,
}
