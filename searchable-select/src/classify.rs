//! Partition a descriptor tree by role.

use log::debug;

use crate::descriptor::{ChildRef, Descriptor, Role};
use crate::error::{Result, SelectError};

/// A classified option group: the group descriptor, its options and any
/// other children (labels) in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedGroup<'a> {
    pub descriptor: &'a Descriptor,
    pub options: Vec<&'a Descriptor>,
    /// Non-option children, e.g. a text label for the group.
    pub labels: Vec<ChildRef<'a>>,
}

/// A top-level entry, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry<'a> {
    Option(&'a Descriptor),
    Group(ClassifiedGroup<'a>),
    /// Unrecognized content, passed through untouched at this position.
    Passthrough(ChildRef<'a>),
}

/// Result of classifying a select's children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classified<'a> {
    pub placeholder: Option<&'a Descriptor>,
    pub search_field: Option<&'a Descriptor>,
    pub entries: Vec<Entry<'a>>,
}

impl<'a> Classified<'a> {
    /// All option descriptors, depth-first: top-level and grouped options
    /// combined. Position in this list is an option's original index.
    pub fn options(&self) -> Vec<&'a Descriptor> {
        let mut out = Vec::new();
        for entry in &self.entries {
            match entry {
                Entry::Option(option) => out.push(*option),
                Entry::Group(group) => out.extend(group.options.iter().copied()),
                Entry::Passthrough(_) => {}
            }
        }
        out
    }

    /// Passthrough content, in declaration order.
    pub fn other(&self) -> Vec<ChildRef<'a>> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Passthrough(child) => Some(*child),
                _ => None,
            })
            .collect()
    }

    pub fn groups(&self) -> impl Iterator<Item = &ClassifiedGroup<'a>> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Group(group) => Some(group),
            _ => None,
        })
    }
}

/// Classify the children of `root`.
///
/// Only the first placeholder and search field are kept. Option groups may
/// hold options and arbitrary labels, but not other groups.
pub fn classify(root: &Descriptor) -> Result<Classified<'_>> {
    let mut classified = Classified::default();

    for child in root.child_nodes() {
        let Some(descriptor) = child.as_descriptor() else {
            classified.entries.push(Entry::Passthrough(child));
            continue;
        };

        match &descriptor.role {
            Role::Placeholder => {
                if classified.placeholder.is_none() {
                    classified.placeholder = Some(descriptor);
                } else {
                    debug!("classify: ignoring duplicate placeholder");
                }
            }
            Role::SearchField => {
                if classified.search_field.is_none() {
                    classified.search_field = Some(descriptor);
                } else {
                    debug!("classify: ignoring duplicate search field");
                }
            }
            Role::Option => classified.entries.push(Entry::Option(descriptor)),
            Role::OptionGroup => classified
                .entries
                .push(Entry::Group(classify_group(descriptor)?)),
            Role::Other(_) => classified.entries.push(Entry::Passthrough(child)),
        }
    }

    debug!(
        "classify: {} entries, placeholder={}, search_field={}",
        classified.entries.len(),
        classified.placeholder.is_some(),
        classified.search_field.is_some()
    );

    Ok(classified)
}

fn classify_group(group: &Descriptor) -> Result<ClassifiedGroup<'_>> {
    let mut options = Vec::new();
    let mut labels = Vec::new();

    for child in group.child_nodes() {
        let Some(descriptor) = child.as_descriptor() else {
            labels.push(child);
            continue;
        };

        match &descriptor.role {
            Role::Option => options.push(descriptor),
            Role::OptionGroup => {
                return Err(SelectError::InvalidTree {
                    group: descriptor.name.clone(),
                    parent: group.name.clone(),
                });
            }
            Role::Placeholder | Role::SearchField => {
                debug!(
                    "classify: ignoring {} inside option group",
                    descriptor.role.label()
                );
            }
            Role::Other(_) => labels.push(child),
        }
    }

    Ok(ClassifiedGroup {
        descriptor: group,
        options,
        labels,
    })
}
