//! Tree node types

use std::fmt;
use tabula_core::Value;

/// Handle to a node of a `TemplateTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node:{}", self.0)
    }
}

/// What a node represents
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The synthetic top node
    Root,
    /// One record, labelled with its table
    TableGroup {
        table: String,
        role: String,
        record: usize,
    },
    /// One field of a record and its pending edit
    FieldLeaf {
        record: usize,
        field: usize,
        overlay: Value,
    },
}

impl NodeKind {
    /// Whether this is a field leaf, the only editable kind
    pub fn is_leaf(&self) -> bool {
        matches!(self, NodeKind::FieldLeaf { .. })
    }
}

/// Arena slot. Children are owned through the arena; `parent` is only used
/// to answer `parent_of`.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) hidden: bool,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
            hidden: false,
        }
    }
}
