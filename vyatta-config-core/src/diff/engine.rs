use crate::diff::result::DiffEntry;
use crate::{Document, Leaf, Node, Section};

/// Separator between labels in a diff path (`protocols > static > route 0.0.0.0/0`).
///
/// Labels routinely contain `.` and `/`, so neither can serve as a separator.
pub const PATH_SEPARATOR: &str = " > ";

/// Configures tree diff behavior.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Include [`DiffEntry::Identical`] rows.
    pub include_identical: bool,
    /// Maximum recursion depth. `-1` means unlimited; top-level sections are depth 0.
    pub max_depth: i32,
    /// Full paths or single labels to skip.
    pub ignore_paths: Vec<String>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            include_identical: false,
            max_depth: -1,
            ignore_paths: Vec::new(),
        }
    }
}

/// Diff two documents with default options.
pub fn diff(left: &Document, right: &Document) -> Vec<DiffEntry> {
    diff_with_options(left, right, &DiffOptions::default())
}

/// Diff two documents with custom options.
pub fn diff_with_options(left: &Document, right: &Document, opts: &DiffOptions) -> Vec<DiffEntry> {
    let mut out = Vec::new();

    for label in union_labels(left.labels(), right.labels()) {
        let path = label.to_string();
        if should_ignore(&path, opts) {
            continue;
        }
        match (left.get(label), right.get(label)) {
            (Some(l), Some(r)) => diff_section(l, r, &path, 0, opts, &mut out),
            (Some(l), None) => out.push(DiffEntry::OnlyLeft {
                path,
                node: Node::Section(l.clone()),
            }),
            (None, Some(r)) => out.push(DiffEntry::OnlyRight {
                path,
                node: Node::Section(r.clone()),
            }),
            (None, None) => {}
        }
    }

    out
}

fn diff_section(
    left: &Section,
    right: &Section,
    path: &str,
    depth: i32,
    opts: &DiffOptions,
    out: &mut Vec<DiffEntry>,
) {
    if opts.max_depth >= 0 && depth > opts.max_depth {
        return;
    }

    let start_len = out.len();

    if left.comment != right.comment {
        out.push(DiffEntry::Modified {
            path: path.to_string(),
            left: format!("comment={:?}", left.comment),
            right: format!("comment={:?}", right.comment),
        });
    }

    for label in union_labels(left.labels(), right.labels()) {
        let child_path = format!("{path}{PATH_SEPARATOR}{label}");
        if should_ignore(&child_path, opts) {
            continue;
        }
        match (left.get(label), right.get(label)) {
            (Some(Node::Section(l)), Some(Node::Section(r))) => {
                diff_section(l, r, &child_path, depth + 1, opts, out);
            }
            (Some(Node::Leaf(l)), Some(Node::Leaf(r))) => {
                let left_sig = leaf_signature(l, left.leaf_comment(label));
                let right_sig = leaf_signature(r, right.leaf_comment(label));
                if left_sig != right_sig {
                    out.push(DiffEntry::Modified {
                        path: child_path,
                        left: left_sig,
                        right: right_sig,
                    });
                } else if opts.include_identical {
                    out.push(DiffEntry::Identical { path: child_path });
                }
            }
            (Some(l), Some(r)) => out.push(DiffEntry::Structural {
                path: child_path,
                description: format!(
                    "kind mismatch: left={} right={}",
                    node_kind(l),
                    node_kind(r)
                ),
            }),
            (Some(l), None) => out.push(DiffEntry::OnlyLeft {
                path: child_path,
                node: l.clone(),
            }),
            (None, Some(r)) => out.push(DiffEntry::OnlyRight {
                path: child_path,
                node: r.clone(),
            }),
            (None, None) => {}
        }
    }

    let changed = out[start_len..]
        .iter()
        .any(|entry| !matches!(entry, DiffEntry::Identical { .. }));
    if opts.include_identical && !changed {
        out.push(DiffEntry::Identical {
            path: path.to_string(),
        });
    }
}

/// Left labels in order, then labels only present on the right.
fn union_labels<'a>(left: Vec<&'a str>, right: Vec<&'a str>) -> Vec<&'a str> {
    let mut labels = left;
    for label in right {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

fn should_ignore(path: &str, opts: &DiffOptions) -> bool {
    opts.ignore_paths.iter().any(|ignore| {
        path == ignore || path.split(PATH_SEPARATOR).any(|label| label == ignore)
    })
}

fn node_kind(node: &Node) -> &'static str {
    match node {
        Node::Section(_) => "section",
        Node::Leaf(leaf) => leaf.kind(),
    }
}

fn leaf_signature(leaf: &Leaf, comment: Option<&str>) -> String {
    match comment {
        Some(comment) => format!("{}={:?}, comment={comment:?}", leaf.kind(), leaf.values()),
        None => format!("{}={:?}", leaf.kind(), leaf.values()),
    }
}
