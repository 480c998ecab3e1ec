//! Presentation surface consumed by a tree view front end

use crate::error::{Error, Result};
use crate::node::NodeId;
use crate::tree::{TemplateTree, COLUMN_COUNT, VALUE_COLUMN};
use tabula_core::Value;

/// Column headers
pub const HEADERS: [&str; COLUMN_COUNT] = ["Field", "Value"];

/// Position of a cell. `None` wherever a parent is expected means the
/// invisible root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelIndex {
    pub row: usize,
    pub column: usize,
    pub node: NodeId,
}

/// What a front end may do with a cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemFlags {
    pub editable: bool,
    pub selectable: bool,
}

impl ItemFlags {
    /// No interaction
    pub const NONE: ItemFlags = ItemFlags {
        editable: false,
        selectable: false,
    };

    /// Editable and selectable
    pub const EDITABLE: ItemFlags = ItemFlags {
        editable: true,
        selectable: true,
    };
}

/// Item-model interface over a tree of cells
pub trait TreeModel {
    fn row_count(&self, parent: Option<ModelIndex>) -> usize;

    fn column_count(&self, parent: Option<ModelIndex>) -> usize;

    /// Index of a child cell, or `None` when out of range
    fn index(&self, row: usize, column: usize, parent: Option<ModelIndex>) -> Option<ModelIndex>;

    /// Parent of a cell; `None` when the parent is the root
    fn parent(&self, index: ModelIndex) -> Option<ModelIndex>;

    /// Cell content; `Value::Null` when there is none
    fn data(&self, index: ModelIndex) -> Value;

    fn set_data(&mut self, index: ModelIndex, value: Value) -> Result<()>;

    fn flags(&self, index: ModelIndex) -> ItemFlags;

    fn header_data(&self, column: usize) -> Option<&str> {
        HEADERS.get(column).copied()
    }

    fn is_row_hidden(&self, row: usize, parent: Option<ModelIndex>) -> bool;

    /// Replace the filter and recompute visibility before returning
    fn set_filter_text(&mut self, text: &str);
}

impl TemplateTree {
    fn node_of(&self, parent: Option<ModelIndex>) -> NodeId {
        parent.map(|p| p.node).unwrap_or_else(|| self.root())
    }
}

impl TreeModel for TemplateTree {
    fn row_count(&self, parent: Option<ModelIndex>) -> usize {
        match parent {
            // only column 0 carries children
            Some(p) if p.column != 0 => 0,
            _ => self.child_count(self.node_of(parent)),
        }
    }

    fn column_count(&self, parent: Option<ModelIndex>) -> usize {
        TemplateTree::column_count(self, self.node_of(parent))
    }

    fn index(&self, row: usize, column: usize, parent: Option<ModelIndex>) -> Option<ModelIndex> {
        if column >= COLUMN_COUNT || parent.is_some_and(|p| p.column != 0) {
            return None;
        }
        let node = self.child_at(self.node_of(parent), row)?;
        Some(ModelIndex { row, column, node })
    }

    fn parent(&self, index: ModelIndex) -> Option<ModelIndex> {
        let parent = self.parent_of(index.node)?;
        if parent == self.root() {
            return None;
        }
        Some(ModelIndex {
            row: self.row_of(parent),
            column: 0,
            node: parent,
        })
    }

    fn data(&self, index: ModelIndex) -> Value {
        self.value_at(index.node, index.column).unwrap_or_default()
    }

    fn set_data(&mut self, index: ModelIndex, value: Value) -> Result<()> {
        if index.column != VALUE_COLUMN {
            return Err(Error::InvalidTarget(format!(
                "column {} of {} is not editable",
                index.column, index.node
            )));
        }
        self.set_value(index.node, value)
    }

    fn flags(&self, index: ModelIndex) -> ItemFlags {
        match self.kind(index.node) {
            Some(kind) if kind.is_leaf() && index.column == VALUE_COLUMN => ItemFlags::EDITABLE,
            _ => ItemFlags::NONE,
        }
    }

    fn is_row_hidden(&self, row: usize, parent: Option<ModelIndex>) -> bool {
        self.child_at(self.node_of(parent), row)
            .map(|node| self.is_hidden(node))
            .unwrap_or(false)
    }

    fn set_filter_text(&mut self, text: &str) {
        self.apply_filter(text);
    }
}
