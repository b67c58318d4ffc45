//! Parsing and generation of Vyatta/VyOS style configuration text.
//!
//! The format is line oriented and brace delimited:
//!
//! ```text
//! interfaces {
//!     ethernet eth0 {
//!         address dhcp
//!         hw-id bc:24:11:82:a3:e4
//!     }
//! }
//! ```
//!
//! [`parse`] turns text into a [`Document`]; [`generate`] turns a document back
//! into canonical text (stored key order, two-space indentation). Both are pure
//! and never touch the filesystem. [`json`] maps trees to and from the JSON
//! shape used by existing tooling, and [`diff`](mod@diff) compares two trees.

pub mod diff;
pub mod format;
pub mod generator;
pub mod json;
pub mod lexer;
pub mod parser;
pub mod tree;

pub use diff::{diff, diff_with_options, DiffEntry, DiffOptions, PATH_SEPARATOR};
pub use format::{format_json, format_summary, format_text};
pub use generator::{generate, generate_section};
pub use json::{from_json_str, from_json_value, to_json, to_json_string_pretty, JsonError};
pub use parser::{parse, ParseError, MAX_NESTING};
pub use tree::{
    compound_label, split_label, CommentPosition, Document, Leaf, Node, NodeRef, Section,
};
