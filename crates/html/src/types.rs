pub type NodeId = u32;

/// Handle into a [`Dom`] arena. Only meaningful for the `Dom` that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub NodeId);

impl Id {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Attribute map that keeps first-insertion order.
///
/// Keys are unique: inserting an existing key overwrites its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Element { name: String, attributes: Attributes },
    Text { text: String },
}

/// A node in the arena.
///
/// `parent` is a non-owning back-reference; ownership flows strictly through
/// `children`. Text nodes never have children.
#[derive(Clone, Debug)]
pub struct Node {
    pub id: Id,
    pub parent: Option<Id>,
    pub children: Vec<Id>,
    pub kind: NodeKind,
}

impl Node {
    pub fn tag_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { name, .. } => Some(name),
            NodeKind::Text { .. } => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { text } => Some(text),
            NodeKind::Element { .. } => None,
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match &self.kind {
            NodeKind::Element { attributes, .. } => Some(attributes),
            NodeKind::Text { .. } => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().and_then(|attrs| attrs.get(name))
    }

    pub fn is_element_named(&self, target: &str) -> bool {
        self.tag_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(target))
    }
}

/// Finished document tree. The root is always an `html` element.
#[derive(Clone, Debug)]
pub struct Dom {
    nodes: Vec<Node>,
    root: Id,
}

impl Dom {
    pub(crate) fn from_parts(nodes: Vec<Node>, root: Id) -> Self {
        debug_assert!(root.index() < nodes.len());
        Self { nodes, root }
    }

    pub fn root(&self) -> Id {
        self.root
    }

    pub fn root_node(&self) -> &Node {
        self.node(self.root)
    }

    /// Panics if `id` was not issued by this `Dom`.
    pub fn node(&self, id: Id) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn parent(&self, id: Id) -> Option<&Node> {
        self.node(id).parent.map(|p| self.node(p))
    }

    pub fn children(&self, id: Id) -> impl Iterator<Item = &Node> {
        self.node(id).children.iter().map(|&c| self.node(c))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
