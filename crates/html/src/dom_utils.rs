use crate::{Dom, Id, Node, NodeKind};

impl Dom {
    /// Pre-order (document order) iteration over every node reachable from the root.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            dom: self,
            stack: vec![self.root()],
        }
    }

    /// All elements named `name` (ASCII case-insensitive), in document order.
    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.descendants()
            .filter(move |node| node.is_element_named(name))
    }

    pub fn find_first_element<'a>(&'a self, name: &'a str) -> Option<&'a Node> {
        self.elements_named(name).next()
    }

    /// Element children of `id`, skipping text.
    pub fn children_elements(&self, id: Id) -> impl Iterator<Item = &Node> {
        self.children(id)
            .filter(|node| matches!(node.kind, NodeKind::Element { .. }))
    }

    /// Concatenated text under `id`, each run trimmed and joined by one space.
    pub fn text_content(&self, id: Id) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = self.node(current);
            if let Some(text) = node.text() {
                let t = text.trim();
                if !t.is_empty() {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(t);
                }
            }
            stack.extend(node.children.iter().rev());
        }
        out
    }
}

pub struct Descendants<'a> {
    dom: &'a Dom,
    stack: Vec<Id>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.dom.node(id);
        // Reverse so children come out in their original order.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
