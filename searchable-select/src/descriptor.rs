//! Declarative descriptor tree consumed by the select engine.
//!
//! A [`Descriptor`] is a role-tagged node. The caller builds a tree of them
//! (usually rooted at a descriptor whose children are the select's contents)
//! and hands it to [`classify`](crate::classify::classify).
//!
//! # Example
//!
//! ```
//! use searchable_select::descriptor::Descriptor;
//!
//! let root = Descriptor::root()
//!     .child(Descriptor::placeholder("Select a fruit"))
//!     .child(Descriptor::option("Apple").name("apple"))
//!     .child(
//!         Descriptor::group("citrus")
//!             .text("Citrus")
//!             .child(Descriptor::option("Lemon"))
//!             .child(Descriptor::option("Lime").disabled(true)),
//!     );
//!
//! assert_eq!(root.children.len(), 3);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role a descriptor plays inside a select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Text shown in the control when nothing is selected, and as the null option.
    Placeholder,
    /// The search input rendered in the menu header.
    SearchField,
    /// A selectable option.
    Option,
    /// A named group of options.
    OptionGroup,
    /// Anything else. Passed through untouched; the string is a free-form tag.
    Other(String),
}

impl Role {
    /// Short name used in log lines and error messages.
    pub fn label(&self) -> &str {
        match self {
            Role::Placeholder => "placeholder",
            Role::SearchField => "search_field",
            Role::Option => "option",
            Role::OptionGroup => "option_group",
            Role::Other(tag) => tag,
        }
    }
}

/// Child content of a descriptor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Children {
    /// A single string.
    Text(String),
    /// An ordered list of nodes.
    Nodes(Vec<Node>),
    /// No children at all.
    #[default]
    None,
}

impl Children {
    pub fn is_none(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Number of child nodes. A text child counts as one.
    pub fn len(&self) -> usize {
        match self {
            Children::Text(_) => 1,
            Children::Nodes(nodes) => nodes.len(),
            Children::None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a node, promoting `None`/`Text` to a node list as needed.
    pub fn push(&mut self, node: Node) {
        match std::mem::take(self) {
            Children::None => *self = Children::Nodes(vec![node]),
            Children::Text(text) => *self = Children::Nodes(vec![Node::Text(text), node]),
            Children::Nodes(mut nodes) => {
                nodes.push(node);
                *self = Children::Nodes(nodes);
            }
        }
    }
}

/// One entry in a child list: plain text or a nested descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Descriptor),
}

impl Node {
    /// The descriptor behind this node, if it is not plain text.
    pub fn as_descriptor(&self) -> Option<&Descriptor> {
        match self {
            Node::Element(descriptor) => Some(descriptor),
            Node::Text(_) => None,
        }
    }
}

impl From<Descriptor> for Node {
    fn from(descriptor: Descriptor) -> Self {
        Node::Element(descriptor)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// A declarative, role-tagged description of a select element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub role: Role,

    /// Optional name. Used as the group name for option groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Explicitly disabled by the caller.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_disabled: bool,

    #[serde(default, skip_serializing_if = "Children::is_none")]
    pub children: Children,

    /// Arbitrary caller attributes, handed back untouched in select events.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, Value>,
}

impl Descriptor {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            name: None,
            is_disabled: false,
            children: Children::None,
            attrs: BTreeMap::new(),
        }
    }

    /// Container for a select's contents. Its own role is never inspected.
    pub fn root() -> Self {
        Self::new(Role::Other("select".to_string()))
    }

    pub fn placeholder(text: impl Into<String>) -> Self {
        Self::new(Role::Placeholder).text(text)
    }

    pub fn search_field() -> Self {
        Self::new(Role::SearchField)
    }

    pub fn option(text: impl Into<String>) -> Self {
        Self::new(Role::Option).text(text)
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self::new(Role::OptionGroup).name(name)
    }

    pub fn other(tag: impl Into<String>) -> Self {
        Self::new(Role::Other(tag.into()))
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Append a text child. The first text child on an empty descriptor is
    /// stored as plain `Children::Text`.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        match self.children {
            Children::None => self.children = Children::Text(text.into()),
            _ => self.children.push(Node::Text(text.into())),
        }
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        for node in nodes {
            self.children.push(node.into());
        }
        self
    }

    /// Iterate over child nodes. A plain text child is yielded as a single
    /// borrowed text slice through [`ChildRef::Text`].
    pub fn child_nodes(&self) -> impl Iterator<Item = ChildRef<'_>> {
        let (text, nodes): (Option<&str>, &[Node]) = match &self.children {
            Children::Text(text) => (Some(text.as_str()), &[]),
            Children::Nodes(nodes) => (None, nodes.as_slice()),
            Children::None => (None, &[]),
        };
        text.map(ChildRef::Text)
            .into_iter()
            .chain(nodes.iter().map(ChildRef::Node))
    }

    pub fn is_role(&self, role: &Role) -> bool {
        &self.role == role
    }
}

/// Borrowed view of one child, whether it came from `Children::Text` or a node list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChildRef<'a> {
    Text(&'a str),
    Node(&'a Node),
}

impl<'a> ChildRef<'a> {
    /// Plain text, whichever way it was stored.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            ChildRef::Text(text) => Some(text),
            ChildRef::Node(Node::Text(text)) => Some(text.as_str()),
            ChildRef::Node(Node::Element(_)) => None,
        }
    }

    pub fn as_descriptor(&self) -> Option<&'a Descriptor> {
        match self {
            ChildRef::Node(node) => node.as_descriptor(),
            ChildRef::Text(_) => None,
        }
    }
}
