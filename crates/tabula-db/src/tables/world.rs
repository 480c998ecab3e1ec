//! Item and map tables of the world database.

use tabula_core::{ColumnDef, TableDescriptor};

pub const ITEM_TEMPLATE: TableDescriptor = TableDescriptor {
    name: "item_template",
    primary_key: "entry",
    columns: &[
        ColumnDef::int("entry"),
        ColumnDef::int("class"),
        ColumnDef::int("subclass"),
        ColumnDef::text("name"),
        ColumnDef::int("displayid"),
        ColumnDef::int("Quality"),
        ColumnDef::int("Flags"),
        ColumnDef::int("BuyPrice"),
        ColumnDef::int("SellPrice"),
        ColumnDef::int("InventoryType"),
        ColumnDef::int("ItemLevel"),
        ColumnDef::int("RequiredLevel"),
        ColumnDef::text("ScriptName"),
    ],
};

pub const MAP_TEMPLATE: TableDescriptor = TableDescriptor {
    name: "map_template",
    primary_key: "Entry",
    columns: &[ColumnDef::int("Entry"), ColumnDef::text("MapName")],
};
