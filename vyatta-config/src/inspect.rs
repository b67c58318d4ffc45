use vyatta_config_core::{Leaf, Node, Section};

/// Render a section tree with a configurable max depth.
///
/// Sections print their label; leaves print `key = value` (arrays joined with
/// `, `, flags bare). Children deeper than `max_depth` are elided.
pub fn render_tree(label: &str, section: &Section, max_depth: usize) -> String {
    let mut out = String::new();
    render_section(label, section, 0, max_depth, &mut out);
    out
}

fn render_section(label: &str, section: &Section, depth: usize, max_depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!("{indent}{label}\n"));

    if depth >= max_depth {
        return;
    }

    for (child_label, node) in section.iter() {
        match node {
            Node::Section(child) => render_section(child_label, child, depth + 1, max_depth, out),
            Node::Leaf(leaf) => {
                let indent = "  ".repeat(depth + 1);
                out.push_str(&format!("{indent}{}\n", render_leaf(child_label, leaf)));
            }
        }
    }
}

fn render_leaf(key: &str, leaf: &Leaf) -> String {
    match leaf {
        Leaf::Flag => key.to_string(),
        Leaf::Scalar(_) | Leaf::Array(_) => format!("{key} = {}", leaf.values().join(", ")),
    }
}
