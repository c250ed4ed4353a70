//! Plain-text rendering of a resolved menu, standing in for a real Menu.

use searchable_select::control::ControlView;
use searchable_select::descriptor::ChildRef;
use searchable_select::menu::{MenuEntry, ResolvedMenu};
use searchable_select::record::OptionRecord;
use searchable_select::text::{combined_text, node_text};

fn child_text(child: &ChildRef<'_>) -> String {
    match child {
        ChildRef::Text(text) => text.to_string(),
        ChildRef::Node(node) => node_text(node),
    }
}

fn option_line(
    option: &OptionRecord<'_>,
    filtered_index: usize,
    menu: &ResolvedMenu<'_>,
) -> String {
    let marker = if menu.selected_indices.contains(&filtered_index) {
        "[x]"
    } else {
        "[ ]"
    };
    let disabled = if option.is_disabled { " (disabled)" } else { "" };
    format!(
        "{marker} {filtered_index}: {} #{}{disabled}",
        option.text, option.original_index
    )
}

/// One line per menu entry; group options are indented.
pub fn menu_lines(menu: &ResolvedMenu<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    let mut filtered_index = 0;

    if let Some(field) = menu.search_field {
        let hint = field
            .attrs
            .get("placeholder")
            .and_then(|value| value.as_str())
            .unwrap_or("search");
        lines.push(format!("search: <{hint}>"));
    }

    for entry in &menu.entries {
        match entry {
            MenuEntry::Loading => lines.push("... loading".to_string()),
            MenuEntry::Null {
                placeholder,
                is_active,
            } => {
                let marker = if *is_active { "(x)" } else { "( )" };
                let label = placeholder.map(combined_text).unwrap_or_default();
                lines.push(format!("{marker} {label}"));
            }
            MenuEntry::Option(option) => {
                lines.push(option_line(option, filtered_index, menu));
                filtered_index += 1;
            }
            MenuEntry::Group(group) => {
                let label: String = group.labels.iter().map(child_text).collect();
                lines.push(format!("== {} ==", label.trim()));
                for option in &group.options {
                    lines.push(format!("  {}", option_line(option, filtered_index, menu)));
                    filtered_index += 1;
                }
            }
            MenuEntry::Passthrough(child) => lines.push(format!("~ {}", child_text(child))),
        }
    }

    if menu.is_empty() {
        lines.push("(no matches)".to_string());
    }

    lines
}

pub fn control_line(view: &ControlView<'_>) -> String {
    let mut flags = Vec::new();
    if view.is_selected {
        flags.push("selected");
    }
    if view.is_highlighted {
        flags.push("highlighted");
    }
    if view.is_disabled {
        flags.push("disabled");
    }
    format!("control: {} [{}]", view.label(), flags.join(", "))
}
