//! Plain-text extraction from descriptor subtrees.

use std::sync::Arc;

use crate::descriptor::{Children, Descriptor, Node};

/// Concatenate all text found under a descriptor, depth-first, without separators.
///
/// ```
/// use searchable_select::descriptor::Descriptor;
/// use searchable_select::text::combined_text;
///
/// let option = Descriptor::option("1")
///     .child(Descriptor::other("b").text("2").text("3"));
/// assert_eq!(combined_text(&option), "123");
/// ```
pub fn combined_text(descriptor: &Descriptor) -> String {
    let mut out = String::new();
    push_children(&descriptor.children, &mut out);
    out
}

/// Text of a children value on its own.
pub fn children_text(children: &Children) -> String {
    let mut out = String::new();
    push_children(children, &mut out);
    out
}

/// Text of a single node.
pub fn node_text(node: &Node) -> String {
    let mut out = String::new();
    push_node(node, &mut out);
    out
}

fn push_children(children: &Children, out: &mut String) {
    match children {
        Children::Text(text) => out.push_str(text),
        Children::Nodes(nodes) => {
            for node in nodes {
                push_node(node, out);
            }
        }
        Children::None => {}
    }
}

fn push_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Element(descriptor) => push_children(&descriptor.children, out),
    }
}

/// Caller override for how an option's display/search text is produced.
pub type TextCombiner = Arc<dyn Fn(&Descriptor) -> String + Send + Sync>;

/// Resolve a descriptor's text with an optional combiner override.
pub(crate) fn text_of(descriptor: &Descriptor, combiner: Option<&TextCombiner>) -> String {
    match combiner {
        Some(combine) => combine(descriptor),
        None => combined_text(descriptor),
    }
}
