//! Three-level editable tree over a set of records.
//!
//! ```text
//! Root
//! ├── creature_template        (TableGroup)
//! │   ├── entry     1000       (FieldLeaf)
//! │   └── name      Test Mob
//! └── creature_ai_scripts
//!     └── ...
//! ```
//!
//! Edits go to a per-leaf overlay and reach the owned records only on
//! `commit`. Filtering toggles leaf visibility; the shape never changes
//! after construction.

use crate::error::{Error, Result};
use crate::node::{Node, NodeId, NodeKind};
use tabula_core::{Field, Record, Value};
use tabula_db::Template;
use tracing::debug;

/// Number of columns every node exposes
pub const COLUMN_COUNT: usize = 2;

/// Column holding labels
pub const LABEL_COLUMN: usize = 0;

/// Column holding values
pub const VALUE_COLUMN: usize = 1;

const ROOT: NodeId = NodeId(0);

/// A committed edit, ready for a persistence step
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub table: String,
    pub role: String,
    pub primary_key_field: String,
    pub primary_key: Value,
    pub field: String,
    pub value: Value,
}

/// Tree adapter owning the records it displays
#[derive(Debug, Clone)]
pub struct TemplateTree {
    nodes: Vec<Node>,
    records: Vec<Record>,
    filter: String,
}

impl TemplateTree {
    /// Build from `(role, record)` groups in display order.
    ///
    /// Empty sentinels get no node. Each record's fields become leaves in
    /// column order; sibling groups need not share columns.
    pub fn from_groups<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = (String, Record)>,
    {
        let mut tree = Self {
            nodes: vec![Node::new(NodeKind::Root, None)],
            records: Vec::new(),
            filter: String::new(),
        };

        for (role, record) in groups {
            if record.is_empty() {
                continue;
            }
            let record_index = tree.records.len();
            let group = tree.push(
                NodeKind::TableGroup {
                    table: record.source_table().to_string(),
                    role,
                    record: record_index,
                },
                ROOT,
            );
            for (i, field) in record.fields().iter().enumerate() {
                tree.push(
                    NodeKind::FieldLeaf {
                        record: record_index,
                        field: i,
                        overlay: field.value.clone(),
                    },
                    group,
                );
            }
            tree.records.push(record);
        }
        tree
    }

    /// Build from a template aggregate
    pub fn from_template(template: Template) -> Self {
        Self::from_groups(template.into_groups())
    }

    fn push(&mut self, kind: NodeKind, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    // === Navigation ===

    /// The root node
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Total number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree has nothing under its root
    pub fn is_empty(&self) -> bool {
        self.nodes[ROOT.0].children.is_empty()
    }

    /// Kind of a node
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.0).map(|n| &n.kind)
    }

    /// Child at `row` under `parent`
    pub fn child_at(&self, parent: NodeId, row: usize) -> Option<NodeId> {
        self.nodes.get(parent.0)?.children.get(row).copied()
    }

    /// Parent of a node; `None` for the root
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    /// Children of a node
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Number of children
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    /// Number of columns; the same for every node
    pub fn column_count(&self, _id: NodeId) -> usize {
        COLUMN_COUNT
    }

    /// Position of a node among its siblings
    pub fn row_of(&self, id: NodeId) -> usize {
        self.parent_of(id)
            .and_then(|p| self.children(p).iter().position(|c| *c == id))
            .unwrap_or(0)
    }

    /// Table group nodes in display order
    pub fn groups(&self) -> &[NodeId] {
        self.children(ROOT)
    }

    // === Cells ===

    /// Label shown in column 0: table name for groups, field name for leaves
    pub fn label(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Root => Some(""),
            NodeKind::TableGroup { table, .. } => Some(table),
            NodeKind::FieldLeaf { record, field, .. } => {
                self.records.get(*record)?.field_at(*field).map(|f| f.name.as_str())
            }
        }
    }

    /// Cell content. Leaves show their overlay in column 1; every other
    /// node shows nothing there.
    pub fn value_at(&self, id: NodeId, column: usize) -> Option<Value> {
        let kind = self.kind(id)?;
        match column {
            LABEL_COLUMN => self.label(id).map(Value::from),
            VALUE_COLUMN => Some(match kind {
                NodeKind::FieldLeaf { overlay, .. } => overlay.clone(),
                NodeKind::Root | NodeKind::TableGroup { .. } => Value::Null,
            }),
            _ => None,
        }
    }

    /// Pending value of a leaf
    pub fn overlay(&self, id: NodeId) -> Option<&Value> {
        match self.kind(id)? {
            NodeKind::FieldLeaf { overlay, .. } => Some(overlay),
            _ => None,
        }
    }

    /// Underlying field of a leaf, unaffected by edits until `commit`
    pub fn field(&self, id: NodeId) -> Option<&Field> {
        match self.kind(id)? {
            NodeKind::FieldLeaf { record, field, .. } => self.records.get(*record)?.field_at(*field),
            _ => None,
        }
    }

    /// Record behind a group or leaf
    pub fn record_of(&self, id: NodeId) -> Option<&Record> {
        match self.kind(id)? {
            NodeKind::Root => None,
            NodeKind::TableGroup { record, .. } | NodeKind::FieldLeaf { record, .. } => {
                self.records.get(*record)
            }
        }
    }

    /// All owned records, in group order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Give back the owned records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    // === Editing ===

    /// Store a pending value on a leaf.
    ///
    /// No type checking happens here. Visibility is left alone until the
    /// next filter change.
    pub fn set_value(&mut self, id: NodeId, value: impl Into<Value>) -> Result<()> {
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or_else(|| Error::InvalidIndex(id.to_string()))?;
        match &mut node.kind {
            NodeKind::FieldLeaf { overlay, .. } => {
                *overlay = value.into();
                Ok(())
            }
            NodeKind::Root => Err(Error::InvalidTarget("cannot edit the root".into())),
            NodeKind::TableGroup { table, .. } => {
                Err(Error::InvalidTarget(format!("cannot edit table group {}", table)))
            }
        }
    }

    /// Whether a leaf's overlay differs from its field
    pub fn is_dirty(&self, id: NodeId) -> bool {
        match (self.overlay(id), self.field(id)) {
            (Some(overlay), Some(field)) => *overlay != field.value,
            _ => false,
        }
    }

    /// Every leaf with a pending edit
    pub fn dirty_leaves(&self) -> Vec<NodeId> {
        self.leaves().filter(|id| self.is_dirty(*id)).collect()
    }

    /// Drop a leaf's pending edit
    pub fn revert(&mut self, id: NodeId) -> Result<()> {
        let original = self
            .field(id)
            .map(|f| f.value.clone())
            .ok_or_else(|| Error::InvalidTarget(format!("{} is not a field", id)))?;
        self.set_value(id, original)
    }

    /// Drop every pending edit
    pub fn revert_all(&mut self) -> Result<()> {
        for id in self.dirty_leaves() {
            self.revert(id)?;
        }
        Ok(())
    }

    /// Leaves whose overlay does not fit the column's declared type
    pub fn type_mismatches(&self) -> Vec<NodeId> {
        self.leaves()
            .filter(|id| match (self.overlay(*id), self.field(*id)) {
                (Some(overlay), Some(field)) => !field.declared_type.accepts(overlay),
                _ => false,
            })
            .collect()
    }

    /// Write pending edits into the owned records.
    ///
    /// Returns what changed so a persistence step can write it out. Nothing
    /// is sent to the database here. Each `Change` names its row by the
    /// primary key it had before the commit, even when the key itself
    /// was edited.
    pub fn commit(&mut self) -> Result<Vec<Change>> {
        let stored_keys: Vec<Value> = self
            .records
            .iter()
            .map(|r| r.primary_key().cloned().unwrap_or_default())
            .collect();
        let mut changes = Vec::new();
        for id in self.dirty_leaves() {
            let (record_index, field_index, value) = match &self.nodes[id.0].kind {
                NodeKind::FieldLeaf {
                    record,
                    field,
                    overlay,
                } => (*record, *field, overlay.clone()),
                _ => continue,
            };
            let role = self
                .parent_of(id)
                .and_then(|g| match self.kind(g) {
                    Some(NodeKind::TableGroup { role, .. }) => Some(role.clone()),
                    _ => None,
                })
                .unwrap_or_default();

            let record = &mut self.records[record_index];
            record.set_value_at(field_index, value.clone())?;
            let field = record
                .field_at(field_index)
                .map(|f| f.name.clone())
                .unwrap_or_default();
            changes.push(Change {
                table: record.source_table().to_string(),
                role,
                primary_key_field: record.primary_key_field().to_string(),
                primary_key: stored_keys[record_index].clone(),
                field,
                value,
            });
        }
        debug!(changes = changes.len(), "overlay committed");
        Ok(changes)
    }

    // === Filtering ===

    /// Current filter text
    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    /// Show only leaves whose name or pending value contains `text`,
    /// ignoring case. An empty text shows everything. Groups stay visible.
    pub fn apply_filter(&mut self, text: &str) {
        self.filter = text.to_string();
        let needle = text.to_lowercase();

        let groups = self.nodes[ROOT.0].children.clone();
        for group in groups {
            let leaves = self.nodes[group.0].children.clone();
            for leaf in leaves {
                let visible = needle.is_empty() || self.leaf_matches(leaf, &needle);
                self.nodes[leaf.0].hidden = !visible;
            }
        }
        debug!(
            filter = %self.filter,
            visible = self.visible_leaf_count(),
            "filter applied"
        );
    }

    fn leaf_matches(&self, id: NodeId, needle: &str) -> bool {
        let name_match = self
            .field(id)
            .map(|f| f.name.to_lowercase().contains(needle))
            .unwrap_or(false);
        name_match
            || self
                .overlay(id)
                .map(|v| v.to_text().to_lowercase().contains(needle))
                .unwrap_or(false)
    }

    /// Whether a node is hidden by the filter
    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).map(|n| n.hidden).unwrap_or(false)
    }

    /// Number of leaves the filter lets through
    pub fn visible_leaf_count(&self) -> usize {
        self.leaves().filter(|id| !self.is_hidden(*id)).count()
    }

    /// All leaves in display order
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.groups()
            .iter()
            .flat_map(move |g| self.children(*g).iter().copied())
    }
}
