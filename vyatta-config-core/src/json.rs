//! JSON view of a configuration tree.
//!
//! The shape is the one used by existing VyOS tooling: a section is an object,
//! its comment sits under the `comment` key ahead of the entries, a scalar is a
//! string, a flag is `true`, and a repeated key is a list.
//!
//! ```json
//! {"protocols": {"static": {"route 0.0.0.0/0": {
//!     "comment": "/* Default route */",
//!     "next-hop": "192.168.1.254"
//! }}}}
//! ```
//!
//! Leaf comments have no place in this shape and are not exported. On import,
//! a string wrapped in literal double quotes (`"\"Private Network\""`) is
//! unwrapped; the generator adds quotes back where the value needs them.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::tree::{Document, Leaf, Node, Section};

/// Key holding a section comment in the JSON shape.
pub const COMMENT_KEY: &str = "comment";

/// Errors produced while building a tree from JSON.
#[derive(Debug, Error)]
pub enum JsonError {
    /// Input was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// JSON was valid but does not describe a configuration tree.
    #[error("{path}: {message}")]
    Shape { path: String, message: String },
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (label, section) in self.iter() {
            map.serialize_entry(label, section)?;
        }
        map.end()
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.len() + usize::from(self.comment.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(comment) = &self.comment {
            map.serialize_entry(COMMENT_KEY, comment)?;
        }
        for (label, node) in self.iter() {
            map.serialize_entry(label, node)?;
        }
        map.end()
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Section(section) => section.serialize(serializer),
            Node::Leaf(leaf) => leaf.serialize(serializer),
        }
    }
}

impl Serialize for Leaf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Leaf::Scalar(value) => serializer.serialize_str(value),
            Leaf::Flag => serializer.serialize_bool(true),
            Leaf::Array(items) => items.serialize(serializer),
        }
    }
}

/// Convert a document into a JSON value, preserving key order.
pub fn to_json(document: &Document) -> Result<Value, JsonError> {
    Ok(serde_json::to_value(document)?)
}

/// Pretty-printed JSON text for a document.
pub fn to_json_string_pretty(document: &Document) -> Result<String, JsonError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Parse JSON text into a document.
pub fn from_json_str(input: &str) -> Result<Document, JsonError> {
    let value: Value = serde_json::from_str(input)?;
    from_json_value(&value)
}

/// Build a document from a JSON value.
///
/// `false` and `null` entries are omitted, numbers become scalars of their
/// decimal text, and a string under `comment` that looks like `/* ... */`
/// becomes the section comment.
pub fn from_json_value(value: &Value) -> Result<Document, JsonError> {
    let Value::Object(root) = value else {
        return Err(shape("$", "document must be a JSON object"));
    };

    let mut document = Document::new();
    for (label, child) in root {
        let Value::Object(map) = child else {
            return Err(shape(label, "top-level entries must be objects"));
        };
        document.insert(label.clone(), section_from_json(map, label)?);
    }
    Ok(document)
}

fn section_from_json(map: &Map<String, Value>, path: &str) -> Result<Section, JsonError> {
    let mut section = Section::new();
    for (label, value) in map {
        let child_path = format!("{path} > {label}");
        match value {
            Value::String(text) if label == COMMENT_KEY && is_comment(text) => {
                section.comment = Some(text.clone());
            }
            Value::Object(child) => {
                let child = section_from_json(child, &child_path)?;
                section.insert(label.clone(), Node::Section(child));
            }
            Value::String(text) => {
                section.insert(label.clone(), Node::Leaf(Leaf::Scalar(unwrap_quotes(text))));
            }
            Value::Number(number) => {
                section.insert(label.clone(), Node::Leaf(Leaf::Scalar(number.to_string())));
            }
            Value::Bool(true) => section.set_flag(label.clone()),
            Value::Bool(false) | Value::Null => {}
            Value::Array(items) => {
                let items = items
                    .iter()
                    .map(|item| array_item(item, &child_path))
                    .collect::<Result<Vec<_>, _>>()?;
                section.insert(label.clone(), Node::Leaf(Leaf::Array(items)));
            }
        }
    }
    Ok(section)
}

fn array_item(item: &Value, path: &str) -> Result<String, JsonError> {
    match item {
        Value::String(text) => Ok(unwrap_quotes(text)),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(shape(path, "array items must be strings or numbers")),
    }
}

/// Drop one pair of literal wrapping quotes when nothing inside needs them.
fn unwrap_quotes(text: &str) -> String {
    match text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) if !inner.contains('"') => inner.to_string(),
        _ => text.to_string(),
    }
}

fn is_comment(text: &str) -> bool {
    text.starts_with("/*") && text.ends_with("*/") && text.len() >= 4
}

fn shape(path: &str, message: &str) -> JsonError {
    JsonError::Shape {
        path: path.to_string(),
        message: message.to_string(),
    }
}
