//! Tree rendering for `ls` and `find`.

use std::collections::BTreeMap;

use crate::cli::output;
use crate::core::domain::SecretPath;

#[derive(Default)]
struct Node {
    children: BTreeMap<String, Node>,
}

impl Node {
    fn insert(&mut self, components: &[&str]) {
        if let Some((first, rest)) = components.split_first() {
            self.children
                .entry((*first).to_string())
                .or_default()
                .insert(rest);
        }
    }
}

/// Render secrets as an indented tree below `title`.
///
/// `skip` leading components are dropped from every path, so listing a
/// subfolder shows its contents relative to that folder.
pub fn render(title: &str, paths: &[SecretPath], skip: usize) -> String {
    let mut root = Node::default();
    for path in paths {
        let components: Vec<&str> = path.as_str().split('/').skip(skip).collect();
        root.insert(&components);
    }

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    write_children(&root, "", &mut out);
    out
}

fn write_children(node: &Node, prefix: &str, out: &mut String) {
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let last = i + 1 == count;
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        if child.children.is_empty() {
            out.push_str(&output::secret(name));
        } else {
            out.push_str(&output::folder(name));
        }
        out.push('\n');

        let next = format!("{prefix}{}", if last { "    " } else { "│   " });
        write_children(child, &next, out);
    }
}
