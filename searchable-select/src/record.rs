//! Normalized option records built from a classified tree.

use crate::classify::{Classified, ClassifiedGroup, Entry};
use crate::descriptor::{ChildRef, Descriptor};
use crate::text::{TextCombiner, text_of};

/// Normalized projection of one option descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionRecord<'a> {
    /// Position in the flattened, unfiltered, depth-first option order.
    pub original_index: usize,
    /// Extracted text used for matching and labels.
    pub text: String,
    /// Explicitly disabled, or forced while loading.
    pub is_disabled: bool,
    /// Index of the owning group among the classified groups.
    pub group: Option<usize>,
    /// The caller's descriptor, borrowed as-is.
    pub descriptor: &'a Descriptor,
}

impl<'a> OptionRecord<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.descriptor.name.as_deref()
    }
}

/// A group with the options that survived filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionGroupRecord<'a> {
    pub name: Option<String>,
    pub descriptor: &'a Descriptor,
    pub labels: Vec<ChildRef<'a>>,
    pub options: Vec<OptionRecord<'a>>,
}

impl<'a> OptionGroupRecord<'a> {
    pub(crate) fn new(group: &ClassifiedGroup<'a>, options: Vec<OptionRecord<'a>>) -> Self {
        Self {
            name: group.descriptor.name.clone(),
            descriptor: group.descriptor,
            labels: group.labels.clone(),
            options,
        }
    }
}

/// Build records for every option in `classified`, in original order.
///
/// While `is_loading` every record is disabled regardless of the descriptor.
pub fn option_records<'a>(
    classified: &Classified<'a>,
    combiner: Option<&TextCombiner>,
    is_loading: bool,
) -> Vec<OptionRecord<'a>> {
    let mut records = Vec::new();
    let mut group_index = 0;

    for entry in &classified.entries {
        match entry {
            Entry::Option(option) => {
                push_record(&mut records, *option, None, combiner, is_loading);
            }
            Entry::Group(group) => {
                for &option in &group.options {
                    push_record(&mut records, option, Some(group_index), combiner, is_loading);
                }
                group_index += 1;
            }
            Entry::Passthrough(_) => {}
        }
    }

    records
}

fn push_record<'a>(
    records: &mut Vec<OptionRecord<'a>>,
    descriptor: &'a Descriptor,
    group: Option<usize>,
    combiner: Option<&TextCombiner>,
    is_loading: bool,
) {
    records.push(OptionRecord {
        original_index: records.len(),
        text: text_of(descriptor, combiner),
        is_disabled: is_loading || descriptor.is_disabled,
        group,
        descriptor,
    });
}
