use crate::{Dom, Id, NodeKind};

const INDENT_STEP: &str = "  ";
const PREVIEW_CHARS: usize = 40;

fn push_preview_replace_newlines(out: &mut String, s: &str, max_chars: usize) {
    let mut truncated = false;
    for (i, ch) in s.chars().enumerate() {
        if i == max_chars {
            truncated = true;
            break;
        }
        out.push(if ch == '\n' { ' ' } else { ch });
    }
    if truncated {
        out.push('…');
    }
}

/// One line per node, children indented by two spaces.
///
/// Elements print as `<name k="v">` with attribute values verbatim, text as
/// its trimmed contents in double quotes. At most `cap` nodes are printed.
pub fn outline(dom: &Dom, cap: usize) -> Vec<String> {
    fn walk(dom: &Dom, id: Id, depth: usize, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;
        let node = dom.node(id);
        let mut line = INDENT_STEP.repeat(depth);
        match &node.kind {
            NodeKind::Element { name, attributes } => {
                line.push('<');
                line.push_str(name);
                for (k, v) in attributes.iter() {
                    line.push(' ');
                    line.push_str(k);
                    line.push_str("=\"");
                    line.push_str(v);
                    line.push('"');
                }
                line.push('>');
            }
            NodeKind::Text { text } => {
                line.push('"');
                push_preview_replace_newlines(&mut line, text.trim(), PREVIEW_CHARS);
                line.push('"');
            }
        }
        out.push(line);
        for &child in &node.children {
            walk(dom, child, depth + 1, out, left);
        }
    }

    let mut out = Vec::new();
    let mut left = cap;
    walk(dom, dom.root(), 0, &mut out, &mut left);
    out
}
