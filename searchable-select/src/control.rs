//! The non-menu control surface: what the closed select displays.

use crate::classify::Classified;
use crate::config::SelectConfig;
use crate::descriptor::Descriptor;
use crate::record::OptionRecord;

/// What the control shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlContent<'a> {
    /// The selected option's text and descriptor.
    Selected {
        original_index: usize,
        text: String,
        descriptor: &'a Descriptor,
    },
    /// Nothing selected: the placeholder descriptor, if one was declared.
    Placeholder(Option<&'a Descriptor>),
}

/// Display state of the control.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlView<'a> {
    pub content: ControlContent<'a>,
    pub is_selected: bool,
    pub is_highlighted: bool,
    pub is_disabled: bool,
}

impl ControlView<'_> {
    /// Text to render: the selected label, or the placeholder's text.
    pub fn label(&self) -> String {
        match &self.content {
            ControlContent::Selected { text, .. } => text.clone(),
            ControlContent::Placeholder(Some(placeholder)) => {
                crate::text::combined_text(placeholder)
            }
            ControlContent::Placeholder(None) => String::new(),
        }
    }
}

/// Build the control view from the unfiltered options.
///
/// The control reflects the caller's selection even when search text hides
/// the selected option from the menu.
pub fn control_view<'a>(
    classified: &Classified<'a>,
    options: &[OptionRecord<'a>],
    selected: Option<usize>,
    config: &SelectConfig,
) -> ControlView<'a> {
    let selected = selected.and_then(|index| options.get(index));
    let has_selection = selected.is_some();

    let content = match selected {
        Some(option) => ControlContent::Selected {
            original_index: option.original_index,
            text: option.text.clone(),
            descriptor: option.descriptor,
        },
        None => ControlContent::Placeholder(classified.placeholder),
    };

    let is_selected = !config.is_disabled && has_selection && config.is_selection_highlighted;
    let is_highlighted =
        is_selected || (config.menu.is_expanded && config.is_selection_highlighted);

    ControlView {
        content,
        is_selected,
        is_highlighted,
        is_disabled: config.is_disabled,
    }
}
