//! Creature tables of the world database.

use tabula_core::{ColumnDef, TableDescriptor};

/// `creature_template`: one row per creature kind.
pub const CREATURE_TEMPLATE: TableDescriptor = TableDescriptor {
    name: "creature_template",
    primary_key: "entry",
    columns: &[
        ColumnDef::int("entry"),
        ColumnDef::int("KillCredit1"),
        ColumnDef::int("KillCredit2"),
        ColumnDef::int("modelid_1"),
        ColumnDef::int("modelid_2"),
        ColumnDef::int("modelid_3"),
        ColumnDef::int("modelid_4"),
        ColumnDef::text("name"),
        ColumnDef::text("subname"),
        ColumnDef::int("gossip_menu_id"),
        ColumnDef::int("minlevel"),
        ColumnDef::int("maxlevel"),
        ColumnDef::int("minhealth"),
        ColumnDef::int("maxhealth"),
        ColumnDef::int("minmana"),
        ColumnDef::int("maxmana"),
        ColumnDef::int("armor"),
        ColumnDef::int("faction_A"),
        ColumnDef::int("faction_H"),
        ColumnDef::int("npcflag"),
        ColumnDef::real("speed_walk"),
        ColumnDef::real("speed_run"),
        ColumnDef::real("scale"),
        ColumnDef::int("rank"),
        ColumnDef::real("mindmg"),
        ColumnDef::real("maxdmg"),
        ColumnDef::int("dmgschool"),
        ColumnDef::int("attackpower"),
        ColumnDef::real("dmg_multiplier"),
        ColumnDef::int("baseattacktime"),
        ColumnDef::int("rangeattacktime"),
        ColumnDef::int("unit_class"),
        ColumnDef::int("unit_flags"),
        ColumnDef::int("dynamicflags"),
        ColumnDef::int("family"),
        ColumnDef::int("trainer_type"),
        ColumnDef::int("trainer_spell"),
        ColumnDef::int("trainer_class"),
        ColumnDef::int("trainer_race"),
        ColumnDef::real("minrangedmg"),
        ColumnDef::real("maxrangedmg"),
        ColumnDef::int("rangedattackpower"),
        ColumnDef::int("type"),
        ColumnDef::int("type_flags"),
        ColumnDef::int("lootid"),
        ColumnDef::int("pickpocketloot"),
        ColumnDef::int("skinloot"),
        ColumnDef::int("resistance1"),
        ColumnDef::int("resistance2"),
        ColumnDef::int("resistance3"),
        ColumnDef::int("resistance4"),
        ColumnDef::int("resistance5"),
        ColumnDef::int("resistance6"),
        ColumnDef::int("spell1"),
        ColumnDef::int("spell2"),
        ColumnDef::int("spell3"),
        ColumnDef::int("spell4"),
        ColumnDef::int("PetSpellDataId"),
        ColumnDef::int("mingold"),
        ColumnDef::int("maxgold"),
        ColumnDef::text("AIName"),
        ColumnDef::int("MovementType"),
        ColumnDef::int("InhabitType"),
        ColumnDef::int("Civilian"),
        ColumnDef::int("RacialLeader"),
        ColumnDef::int("RegenHealth"),
        ColumnDef::int("equipment_id"),
        ColumnDef::int("trainer_id"),
        ColumnDef::int("vendor_id"),
        ColumnDef::int("MechanicImmuneMask"),
        ColumnDef::int("SchoolImmuneMask"),
        ColumnDef::int("flags_extra"),
        ColumnDef::text("ScriptName"),
    ],
};

/// `creature`: spawned instances of a template.
pub const CREATURE: TableDescriptor = TableDescriptor {
    name: "creature",
    primary_key: "guid",
    columns: &[
        ColumnDef::int("guid"),
        ColumnDef::int("id"),
        ColumnDef::int("map"),
        ColumnDef::int("modelid"),
        ColumnDef::int("equipment_id"),
        ColumnDef::real("position_x"),
        ColumnDef::real("position_y"),
        ColumnDef::real("position_z"),
        ColumnDef::real("orientation"),
        ColumnDef::int("spawntimesecs"),
        ColumnDef::real("spawndist"),
        ColumnDef::int("currentwaypoint"),
        ColumnDef::int("curhealth"),
        ColumnDef::int("curmana"),
        ColumnDef::int("DeathState"),
        ColumnDef::int("MovementType"),
    ],
};

/// `creature_ai_scripts`: EventAI rows, many per template.
pub const CREATURE_AI_SCRIPTS: TableDescriptor = TableDescriptor {
    name: "creature_ai_scripts",
    primary_key: "id",
    columns: &[
        ColumnDef::int("id"),
        ColumnDef::int("creature_id"),
        ColumnDef::int("event_type"),
        ColumnDef::int("event_inverse_phase_mask"),
        ColumnDef::int("event_chance"),
        ColumnDef::int("event_flags"),
        ColumnDef::int("event_param1"),
        ColumnDef::int("event_param2"),
        ColumnDef::int("event_param3"),
        ColumnDef::int("event_param4"),
        ColumnDef::int("action1_type"),
        ColumnDef::int("action1_param1"),
        ColumnDef::int("action1_param2"),
        ColumnDef::int("action1_param3"),
        ColumnDef::int("action2_type"),
        ColumnDef::int("action2_param1"),
        ColumnDef::int("action2_param2"),
        ColumnDef::int("action2_param3"),
        ColumnDef::int("action3_type"),
        ColumnDef::int("action3_param1"),
        ColumnDef::int("action3_param2"),
        ColumnDef::int("action3_param3"),
        ColumnDef::text("comment"),
    ],
};

/// `creature_equip_template`: item entries per equipment set.
pub const CREATURE_EQUIP_TEMPLATE: TableDescriptor = TableDescriptor {
    name: "creature_equip_template",
    primary_key: "entry",
    columns: &[
        ColumnDef::int("entry"),
        ColumnDef::int("equipentry1"),
        ColumnDef::int("equipentry2"),
        ColumnDef::int("equipentry3"),
    ],
};

/// `creature_equip_template_raw`: display ids for equipment without items.
pub const CREATURE_EQUIP_TEMPLATE_RAW: TableDescriptor = TableDescriptor {
    name: "creature_equip_template_raw",
    primary_key: "entry",
    columns: &[
        ColumnDef::int("entry"),
        ColumnDef::int("equipmodel1"),
        ColumnDef::int("equipmodel2"),
        ColumnDef::int("equipmodel3"),
        ColumnDef::int("equipinfo1"),
        ColumnDef::int("equipinfo2"),
        ColumnDef::int("equipinfo3"),
        ColumnDef::int("equipslot1"),
        ColumnDef::int("equipslot2"),
        ColumnDef::int("equipslot3"),
    ],
};

/// `creature_template_addon`: per-template mount, emote and auras.
pub const CREATURE_TEMPLATE_ADDON: TableDescriptor = TableDescriptor {
    name: "creature_template_addon",
    primary_key: "entry",
    columns: &[
        ColumnDef::int("entry"),
        ColumnDef::int("mount"),
        ColumnDef::int("bytes1"),
        ColumnDef::int("b2_0_sheath"),
        ColumnDef::int("b2_1_flags"),
        ColumnDef::int("emote"),
        ColumnDef::int("moveflags"),
        ColumnDef::text("auras"),
    ],
};

/// `creature_addon`: per-spawn overrides of the template addon.
pub const CREATURE_ADDON: TableDescriptor = TableDescriptor {
    name: "creature_addon",
    primary_key: "guid",
    columns: &[
        ColumnDef::int("guid"),
        ColumnDef::int("mount"),
        ColumnDef::int("bytes1"),
        ColumnDef::int("b2_0_sheath"),
        ColumnDef::int("b2_1_flags"),
        ColumnDef::int("emote"),
        ColumnDef::int("moveflags"),
        ColumnDef::text("auras"),
    ],
};

/// `creature_model_info`: bounding data per display model.
pub const CREATURE_MODEL_INFO: TableDescriptor = TableDescriptor {
    name: "creature_model_info",
    primary_key: "modelid",
    columns: &[
        ColumnDef::int("modelid"),
        ColumnDef::real("bounding_radius"),
        ColumnDef::real("combat_reach"),
        ColumnDef::int("gender"),
        ColumnDef::int("modelid_other_gender"),
        ColumnDef::int("modelid_alternative"),
    ],
};
