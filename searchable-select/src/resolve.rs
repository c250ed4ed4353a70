//! Selection resolution: map the caller's original-order selection onto the
//! filtered option list.

use log::debug;

use crate::record::OptionRecord;

/// The synthetic "clear selection" entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullOption {
    /// True when no visible option is selected, so the null option is the
    /// one rendered as current.
    pub is_active: bool,
}

/// Outcome of resolving the selection for one pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    /// The caller's selection after validation. Out-of-range indices become `None`.
    pub selected_original_index: Option<usize>,
    /// Filtered position of the highlighted option. Holds at most one index.
    pub selected_indices: Vec<usize>,
    /// Present whenever reset is enabled, whether or not anything is selected.
    pub null_option: Option<NullOption>,
}

impl Resolution {
    /// Filtered position of the highlighted option, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_indices.first().copied()
    }
}

/// Resolve `selected` (an original index over `options`) against `visible`.
///
/// Filtering out the selected option only clears the highlight; the caller's
/// stored selection is never touched. Nothing is highlighted while loading.
pub fn resolve_selection(
    options: &[OptionRecord<'_>],
    visible: &[OptionRecord<'_>],
    selected: Option<usize>,
    has_reset: bool,
    is_loading: bool,
) -> Resolution {
    let selected_original_index = match selected {
        Some(index) if index >= options.len() => {
            debug!(
                "resolve: selected index {index} out of range ({} options), treating as unselected",
                options.len()
            );
            None
        }
        other => other,
    };

    let selected_indices: Vec<usize> = match selected_original_index {
        Some(original) if !is_loading => visible
            .iter()
            .position(|option| option.original_index == original)
            .into_iter()
            .collect(),
        _ => Vec::new(),
    };

    let null_option = has_reset.then(|| NullOption {
        is_active: selected_indices.is_empty(),
    });

    Resolution {
        selected_original_index,
        selected_indices,
        null_option,
    }
}
