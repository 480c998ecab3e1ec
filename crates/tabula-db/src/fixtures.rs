//! Seeded in-memory world database for tests.

use crate::session::Session;

const WORLD_SQL: &str = "
CREATE TABLE creature_template (
    entry INTEGER PRIMARY KEY,
    name VARCHAR(100),
    modelid_1 MEDIUMINT,
    modelid_2 MEDIUMINT,
    modelid_3 MEDIUMINT,
    modelid_4 MEDIUMINT,
    equipment_id MEDIUMINT,
    speed_walk FLOAT
);
INSERT INTO creature_template VALUES (1000, 'Test Mob', 500, 0, 0, 0, 0, 1.0);
INSERT INTO creature_template VALUES (1001, 'Armed Mob', 501, 502, 0, 0, 7, 1.2);
INSERT INTO creature_template VALUES (1002, 'Bare Mob', 0, 0, 0, 0, NULL, 1.0);

CREATE TABLE creature (
    guid INTEGER PRIMARY KEY,
    id MEDIUMINT,
    map SMALLINT,
    position_x FLOAT
);
INSERT INTO creature VALUES (1, 1001, 0, 10.5);
INSERT INTO creature VALUES (2, 1001, 1, -3.25);

CREATE TABLE creature_ai_scripts (
    id INTEGER PRIMARY KEY,
    creature_id MEDIUMINT,
    event_type TINYINT,
    action1_type TINYINT,
    comment TEXT
);
INSERT INTO creature_ai_scripts VALUES (100001, 1000, 0, 1, 'say hello');
INSERT INTO creature_ai_scripts VALUES (100002, 1000, 6, 11, 'cast on death');

CREATE TABLE creature_equip_template (
    entry INTEGER PRIMARY KEY,
    equipentry1 MEDIUMINT,
    equipentry2 MEDIUMINT,
    equipentry3 MEDIUMINT
);
INSERT INTO creature_equip_template VALUES (7, 1899, 0, 2552);

CREATE TABLE creature_template_addon (
    entry INTEGER PRIMARY KEY,
    mount MEDIUMINT,
    auras TEXT
);
INSERT INTO creature_template_addon VALUES (1001, 0, '18950');

CREATE TABLE creature_model_info (
    modelid INTEGER PRIMARY KEY,
    bounding_radius FLOAT,
    combat_reach FLOAT,
    gender TINYINT
);
INSERT INTO creature_model_info VALUES (500, 0.3, 1.5, 0);
INSERT INTO creature_model_info VALUES (501, 0.4, 1.5, 1);
INSERT INTO creature_model_info VALUES (502, 0.5, 2.0, 2);
";

/// A session over a small world database.
///
/// Entries: 1000 "Test Mob" (two AI scripts, model slot 1 only),
/// 1001 "Armed Mob" (two spawns, equipment 7, addon, model slots 1-2),
/// 1002 "Bare Mob" (no relations, NULL equipment id).
pub(crate) fn world() -> Session {
    let session = Session::open_in_memory().expect("in-memory session");
    session.execute_batch(WORLD_SQL).expect("seed world");
    session
}
