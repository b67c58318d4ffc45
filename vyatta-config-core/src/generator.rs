use crate::tree::{CommentPosition, Document, Leaf, Node, Section};

const INDENT: &str = "  ";

/// Serialize a [`Document`] into canonical configuration text.
pub fn generate(document: &Document) -> String {
    let mut out = String::new();
    for (label, section) in document.iter() {
        write_section(&mut out, label, section, 0);
    }
    out
}

/// Serialize the entries of `section` at `depth`, without its own braces.
///
/// A comment placed [`CommentPosition::Before`] belongs to the enclosing
/// block's text and is not part of this output.
pub fn generate_section(section: &Section, depth: usize) -> String {
    let mut out = String::new();
    write_body(&mut out, section, depth);
    out
}

fn write_section(out: &mut String, label: &str, section: &Section, depth: usize) {
    if let (Some(comment), CommentPosition::Before) = (&section.comment, section.comment_position)
    {
        push_line(out, depth, comment);
    }
    push_line(out, depth, &format!("{label} {{"));
    write_body(out, section, depth + 1);
    push_line(out, depth, "}");
}

fn write_body(out: &mut String, section: &Section, depth: usize) {
    if let (Some(comment), CommentPosition::Inside) = (&section.comment, section.comment_position)
    {
        push_line(out, depth, comment);
    }

    for (label, node) in section.iter() {
        match node {
            Node::Section(child) => write_section(out, label, child, depth),
            Node::Leaf(leaf) => {
                if let Some(comment) = section.leaf_comment(label) {
                    push_line(out, depth, comment);
                }
                write_leaf(out, label, leaf, depth);
            }
        }
    }
}

fn write_leaf(out: &mut String, key: &str, leaf: &Leaf, depth: usize) {
    match leaf {
        Leaf::Flag => push_line(out, depth, key),
        Leaf::Scalar(_) | Leaf::Array(_) => {
            for value in leaf.values() {
                push_line(out, depth, &format!("{key} {}", render_value(value)));
            }
        }
    }
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

/// Render a leaf value so that it re-parses as the same single token.
pub(crate) fn render_value(value: &str) -> String {
    if !needs_quotes(value) {
        value.to_string()
    } else {
        quote(value)
    }
}

/// Wrap `value` in double quotes, escaping embedded quotes and backslashes.
pub(crate) fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.starts_with('"')
        || value.starts_with("/*")
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '{' || c == '}')
}
