use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;

use crate::generator::{generate, generate_section};

/// A parsed configuration: top-level sections keyed by label, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

/// A brace-delimited block of the configuration tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    /// Verbatim `/* ... */` comment attached to this block.
    pub comment: Option<String>,
    /// Where [`Section::comment`] is rendered.
    pub comment_position: CommentPosition,
    entries: IndexMap<String, Node>,
    leaf_comments: IndexMap<String, String>,
}

/// Placement of a section comment in generated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentPosition {
    /// First line inside the block.
    #[default]
    Inside,
    /// Line before the block opener, where the parser found it.
    Before,
}

/// A value stored under a label inside a [`Section`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Section(Section),
    Leaf(Leaf),
}

/// A terminal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    /// `key value`
    Scalar(String),
    /// `key` with no value.
    Flag,
    /// A key repeated with several values, in encounter order.
    Array(Vec<String>),
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the top-level section stored under `label`.
    pub fn get(&self, label: &str) -> Option<&Section> {
        self.sections.get(label)
    }

    /// Return a mutable top-level section stored under `label`.
    pub fn get_mut(&mut self, label: &str) -> Option<&mut Section> {
        self.sections.get_mut(label)
    }

    /// Insert or replace a top-level section. A replaced label keeps its position.
    pub fn insert(&mut self, label: impl Into<String>, section: Section) -> Option<Section> {
        self.sections.insert(label.into(), section)
    }

    /// Remove a top-level section, keeping the order of the remaining ones.
    pub fn remove(&mut self, label: &str) -> Option<Section> {
        self.sections.shift_remove(label)
    }

    /// Iterate top-level sections in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(label, section)| (label.as_str(), section))
    }

    /// Top-level labels in order.
    pub fn labels(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Walk a label path starting at the top level.
    ///
    /// The first segment names a top-level section; the remaining segments are
    /// resolved with [`Section::get_path`].
    pub fn get_path(&self, path: &[&str]) -> Option<NodeRef<'_>> {
        let (first, rest) = path.split_first()?;
        let section = self.get(first)?;
        if rest.is_empty() {
            return Some(NodeRef::Section(section));
        }
        section.get_path(rest).map(NodeRef::from)
    }
}

/// A borrowed view of either a top-level section or any nested node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Section(&'a Section),
    Leaf(&'a Leaf),
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Section(section) => NodeRef::Section(section),
            Node::Leaf(leaf) => NodeRef::Leaf(leaf),
        }
    }
}

impl Section {
    /// Create an empty section with no comment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty section carrying `comment`.
    pub fn with_comment(comment: impl Into<String>) -> Self {
        Self {
            comment: Some(comment.into()),
            ..Self::default()
        }
    }

    pub fn get(&self, label: &str) -> Option<&Node> {
        self.entries.get(label)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut Node> {
        self.entries.get_mut(label)
    }

    /// Return the nested section stored under `label`, if that entry is a section.
    pub fn get_section(&self, label: &str) -> Option<&Section> {
        match self.entries.get(label)? {
            Node::Section(section) => Some(section),
            Node::Leaf(_) => None,
        }
    }

    pub fn get_section_mut(&mut self, label: &str) -> Option<&mut Section> {
        match self.entries.get_mut(label)? {
            Node::Section(section) => Some(section),
            Node::Leaf(_) => None,
        }
    }

    /// Return the leaf stored under `key`, if that entry is a leaf.
    pub fn get_leaf(&self, key: &str) -> Option<&Leaf> {
        match self.entries.get(key)? {
            Node::Leaf(leaf) => Some(leaf),
            Node::Section(_) => None,
        }
    }

    /// Walk a nested label path and return the terminal node if found.
    pub fn get_path<'a>(&'a self, path: &[&str]) -> Option<&'a Node> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for segment in parents {
            current = current.get_section(segment)?;
        }
        current.get(last)
    }

    /// Insert or replace an entry. A replaced label keeps its position.
    ///
    /// Replacing a leaf drops the comment attached to it.
    pub fn insert(&mut self, label: impl Into<String>, node: Node) -> Option<Node> {
        let label = label.into();
        self.leaf_comments.shift_remove(&label);
        self.entries.insert(label, node)
    }

    /// Record a scalar value for `key`.
    ///
    /// A key that already holds a scalar is promoted to an array and an
    /// existing array is appended to. Any other existing kind is overwritten.
    pub fn push_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.get_mut(&key) {
            Some(Node::Leaf(Leaf::Array(items))) => items.push(value),
            Some(Node::Leaf(Leaf::Scalar(existing))) => {
                let first = std::mem::take(existing);
                self.entries
                    .insert(key, Node::Leaf(Leaf::Array(vec![first, value])));
            }
            _ => {
                self.insert(key, Node::Leaf(Leaf::Scalar(value)));
            }
        }
    }

    /// Record `key` as a presence-only flag, overwriting any previous value.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.insert(key, Node::Leaf(Leaf::Flag));
    }

    /// Remove an entry, keeping the order of the remaining ones.
    pub fn remove(&mut self, label: &str) -> Option<Node> {
        self.leaf_comments.shift_remove(label);
        self.entries.shift_remove(label)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(label, node)| (label.as_str(), node))
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Comment rendered on the line before the leaf entry `key`.
    pub fn leaf_comment(&self, key: &str) -> Option<&str> {
        self.leaf_comments.get(key).map(String::as_str)
    }

    /// Attach a comment to an existing leaf entry. Returns `false` when `key`
    /// is missing or names a section; section comments live on
    /// [`Section::comment`].
    pub fn set_leaf_comment(&mut self, key: &str, comment: impl Into<String>) -> bool {
        if self.get_leaf(key).is_none() {
            return false;
        }
        self.leaf_comments.insert(key.to_string(), comment.into());
        true
    }
}

impl Leaf {
    /// Values in emission order. A flag has none.
    pub fn values(&self) -> &[String] {
        match self {
            Leaf::Scalar(value) => std::slice::from_ref(value),
            Leaf::Flag => &[],
            Leaf::Array(items) => items,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Leaf::Scalar(_) => "scalar",
            Leaf::Flag => "flag",
            Leaf::Array(_) => "array",
        }
    }
}

impl From<Section> for Node {
    fn from(section: Section) -> Self {
        Node::Section(section)
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

/// Join a block keyword and its identifier into a compound label (`ethernet eth0`).
pub fn compound_label(keyword: &str, identifier: &str) -> String {
    format!("{keyword} {identifier}")
}

/// Split a label into its keyword and optional identifier.
pub fn split_label(label: &str) -> (&str, Option<&str>) {
    match label.split_once(' ') {
        Some((keyword, identifier)) => (keyword, Some(identifier)),
        None => (label, None),
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&generate(self))
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&generate_section(self, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::{split_label, Leaf, Node, Section};

    #[test]
    fn push_value_promotes_repeated_scalars() {
        let mut section = Section::new();
        section.push_value("address", "78.41.204.36");
        section.push_value("address", "1.1.1.1");
        section.push_value("address", "9.9.9.9");

        assert_eq!(
            section.get_leaf("address"),
            Some(&Leaf::Array(vec![
                "78.41.204.36".to_string(),
                "1.1.1.1".to_string(),
                "9.9.9.9".to_string(),
            ]))
        );
    }

    #[test]
    fn push_value_overwrites_flag_and_keeps_position() {
        let mut section = Section::new();
        section.set_flag("disable");
        section.push_value("mtu", "1500");
        section.push_value("disable", "yes");

        assert_eq!(section.labels(), vec!["disable", "mtu"]);
        assert_eq!(
            section.get_leaf("disable"),
            Some(&Leaf::Scalar("yes".to_string()))
        );
    }

    #[test]
    fn get_path_walks_nested_sections() {
        let mut route = Section::new();
        route.push_value("next-hop", "192.168.1.254");
        let mut statics = Section::new();
        statics.insert("route 0.0.0.0/0", Node::Section(route));

        assert_eq!(
            statics.get_path(&["route 0.0.0.0/0", "next-hop"]),
            Some(&Node::Leaf(Leaf::Scalar("192.168.1.254".to_string())))
        );
        assert!(statics.get_path(&["route 0.0.0.0/0", "missing"]).is_none());
    }

    #[test]
    fn remove_preserves_order_and_drops_leaf_comment() {
        let mut section = Section::new();
        section.push_value("a", "1");
        section.push_value("b", "2");
        section.push_value("c", "3");
        assert!(section.set_leaf_comment("b", "/* two */"));

        section.remove("b");
        section.push_value("b", "4");

        assert_eq!(section.labels(), vec!["a", "c", "b"]);
        assert_eq!(section.leaf_comment("b"), None);
    }

    #[test]
    fn set_leaf_comment_rejects_sections() {
        let mut section = Section::new();
        section.insert("member", Node::Section(Section::new()));
        assert!(!section.set_leaf_comment("member", "/* nope */"));
        assert!(!section.set_leaf_comment("missing", "/* nope */"));
    }

    #[test]
    fn split_label_separates_keyword_and_identifier() {
        assert_eq!(split_label("ethernet eth0"), ("ethernet", Some("eth0")));
        assert_eq!(split_label("interfaces"), ("interfaces", None));
    }
}
