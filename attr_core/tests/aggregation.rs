//! End-to-end aggregation tests against an in-memory game database.

use attr_core::prelude::*;

/// Which query a [`FaultyDb`] refuses to answer.
enum Fault {
    Story,
    Equipment(i32),
    Bounds,
}

/// Delegates to a seeded MemoryDatabase but fails one chosen query, for
/// exercising the degrade-on-failure contract.
struct FaultyDb {
    inner: MemoryDatabase,
    fault: Fault,
}

impl GameDatabase for FaultyDb {
    fn rarity_record(
        &self,
        unit_id: i32,
        rarity: i32,
    ) -> Result<Option<RarityRecord>, StoreError> {
        self.inner.rarity_record(unit_id, rarity)
    }

    fn rank_bonus(&self, unit_id: i32, rank: i32) -> Result<Option<Attributes>, StoreError> {
        self.inner.rank_bonus(unit_id, rank)
    }

    fn rank_record(&self, unit_id: i32, rank: i32) -> Result<Option<RankRecord>, StoreError> {
        self.inner.rank_record(unit_id, rank)
    }

    fn equipment_record(&self, equip_id: i32) -> Result<Option<EquipmentRecord>, StoreError> {
        if matches!(self.fault, Fault::Equipment(bad) if bad == equip_id) {
            return Err(StoreError::Query("equipment row corrupt".to_string()));
        }
        self.inner.equipment_record(equip_id)
    }

    fn unique_equipment_records(
        &self,
        unit_id: i32,
        level: i32,
        level2: i32,
    ) -> Result<Vec<UniqueEquipmentRecord>, StoreError> {
        self.inner.unique_equipment_records(unit_id, level, level2)
    }

    fn story_unlock_records(&self, unit_id: i32) -> Result<Vec<StoryUnlockRecord>, StoreError> {
        if matches!(self.fault, Fault::Story) {
            return Err(StoreError::Query("story table unavailable".to_string()));
        }
        self.inner.story_unlock_records(unit_id)
    }

    fn alias_unit_ids(&self, unit_id: i32) -> Result<Vec<i32>, StoreError> {
        self.inner.alias_unit_ids(unit_id)
    }

    fn passive_skill_action(
        &self,
        action_id: i32,
        level: i32,
    ) -> Result<Option<PassiveSkillAction>, StoreError> {
        self.inner.passive_skill_action(action_id, level)
    }

    fn progression_bounds(
        &self,
        unit_id: i32,
    ) -> Result<Option<ProgressionBounds>, StoreError> {
        if matches!(self.fault, Fault::Bounds) {
            return Err(StoreError::Query("bounds table unavailable".to_string()));
        }
        self.inner.progression_bounds(unit_id)
    }
}

fn attrs(hp: f64, atk: f64, def: f64) -> Attributes {
    Attributes {
        hp,
        atk,
        def,
        ..Attributes::default()
    }
}

/// A freshly released unit: rarity data and an EX skill, nothing else.
fn newcomer_db() -> MemoryDatabase {
    let mut db = MemoryDatabase::new();
    db.insert_bounds(
        100101,
        ProgressionBounds {
            max_level: 98,
            max_rank: 21,
            max_rarity: 5,
            max_unique_equip_level: 260,
        },
    );
    db.insert_rarity(RarityRecord {
        unit_id: 100101,
        rarity: 3,
        attributes: attrs(2764.0, 115.0, 54.0),
        growth: attrs(310.5, 14.0, 2.5),
    });
    db.insert_skill_action(PassiveSkillAction {
        action_id: 100_150_101,
        target_code: 2,
        base: 30.0,
        per_level: 1.5,
    });
    db
}

/// A fully built unit with every layer populated.
fn veteran_db() -> MemoryDatabase {
    let mut db = newcomer_db();
    db.insert_rank_bonus(100101, 7, attrs(0.0, 0.0, 12.0));
    db.insert_rank(RankRecord {
        unit_id: 100101,
        rank: 7,
        attributes: attrs(350.0, 22.0, 18.0),
        equip_slot_1: 101011,
        equip_slot_2: 0,
        equip_slot_3: 101031,
        equip_slot_4: UNKNOWN_EQUIP_ID,
        equip_slot_5: 0,
        equip_slot_6: 101061,
    });
    db.insert_equipment(EquipmentRecord {
        equipment_id: 101011,
        name: "Iron Blade".to_string(),
        attributes: attrs(0.0, 20.0, 0.0),
    });
    db.insert_equipment(EquipmentRecord {
        equipment_id: 101031,
        name: "Leather Guard".to_string(),
        attributes: attrs(55.0, 0.0, 6.0),
    });
    db.insert_equipment(EquipmentRecord {
        equipment_id: 101061,
        name: "Feather Charm".to_string(),
        attributes: attrs(120.0, 0.0, 0.0),
    });
    db.insert_unique_equipment(UniqueEquipmentRecord {
        equipment_id: 130001,
        unit_id: 100101,
        slot: 1,
        name: "Bloom Sword".to_string(),
        description: String::new(),
        attributes: attrs(0.0, 160.0, 0.0),
    });
    db.insert_story(StoryUnlockRecord {
        story_id: 1001011,
        unit_id: 100101,
        attributes: attrs(45.0, 8.0, 0.0),
    });
    db.insert_story(StoryUnlockRecord {
        story_id: 1001012,
        unit_id: 100101,
        attributes: attrs(60.0, 0.0, 4.0),
    });
    db
}

#[test]
fn fresh_unit_is_base_plus_growth_plus_ex_skill() {
    let engine = AttrEngine::new(newcomer_db());
    let selection = CharacterSelection::new(100101, 1, 1, 3, 0, 0);
    let result = engine.compute_all(&selection).into_computed().unwrap();

    // level 1 + rank 1 = two growth steps over the rarity base.
    assert_eq!(result.sum.hp, 2764.0 + 310.5 * 2.0);
    assert_eq!(result.sum.def, 54.0 + 2.5 * 2.0);
    // Plain EX variant (rarity < 5) at level 1.
    assert_eq!(result.ex_skill.atk, 31.5);
    assert_eq!(result.sum.atk, 115.0 + 14.0 * 2.0 + 31.5);

    assert_eq!(result.equips.len(), 6);
    assert!(result.equips.iter().all(EquipmentRecord::is_unknown));
    assert!(result.unique_equips.is_empty());
    assert!(result.story.is_zero());
    assert!(result.is_complete());
}

#[test]
fn veteran_unit_sums_every_layer() {
    let engine = AttrEngine::new(veteran_db());
    let selection = CharacterSelection::new(100101, 50, 7, 3, 120, 0);
    let outcome = engine.compute_all(&selection);
    let result = outcome.as_computed().unwrap();

    let growth_steps = (50 + 7) as f64;
    let expected_hp = 2764.0 + 310.5 * growth_steps // rarity base + growth
        + 350.0 // rank stat floor
        + 55.0 + 120.0 // gear
        + 45.0 + 60.0; // story
    assert_eq!(result.sum.hp, expected_hp);

    let expected_atk = 115.0 + 14.0 * growth_steps
        + 22.0
        + 20.0 // gear
        + 160.0 // unique equipment
        + 8.0 // story
        + (30.0 + 1.5 * 50.0); // EX skill
    assert_eq!(result.sum.atk, expected_atk);

    assert_eq!(result.rank_bonus.def, 12.0);
    assert_eq!(result.story, attrs(105.0, 8.0, 4.0));
    assert_eq!(result.unique_equips.len(), 1);
    // Slots 2, 4, 5 stay placeholders in panel order 6,3,5,2,4,1.
    assert!(result.equips[2].is_unknown());
    assert!(result.equips[3].is_unknown());
    assert!(result.equips[4].is_unknown());
    assert_eq!(result.equips[0].equipment_id, 101061);
    assert!(result.is_complete());

    // Panel details beyond the attribute sum come straight off the store.
    let blade = engine.database().equipment_record(101011).unwrap().unwrap();
    assert_eq!(blade.name, "Iron Blade");
}

#[test]
fn placeholder_slots_never_contribute() {
    let engine = AttrEngine::new(veteran_db());
    let selection = CharacterSelection::new(100101, 50, 7, 3, 0, 0);
    let result = engine.compute_all(&selection).into_computed().unwrap();

    let placeholder_sum: Attributes = result
        .equips
        .iter()
        .filter(|e| e.is_unknown())
        .map(|e| e.attributes)
        .sum();
    assert!(placeholder_sum.is_zero());
}

#[test]
fn unique_equipment_at_level_zero_grants_nothing() {
    let engine = AttrEngine::new(veteran_db());
    let selection_owned = CharacterSelection::new(100101, 50, 7, 3, 120, 0);
    let selection_unawakened = CharacterSelection::new(100101, 50, 7, 3, 0, 0);

    let owned = engine
        .compute_all(&selection_owned)
        .into_computed()
        .unwrap();
    let unawakened = engine
        .compute_all(&selection_unawakened)
        .into_computed()
        .unwrap();

    assert_eq!(owned.sum.atk - unawakened.sum.atk, 160.0);
    // The item is still listed for display.
    assert_eq!(unawakened.unique_equips.len(), 1);
    assert!(unawakened.unique_equips[0].attributes.is_zero());
}

#[test]
fn story_failure_degrades_only_the_story_layer() {
    let selection = CharacterSelection::new(100101, 50, 7, 3, 120, 0);

    let failing = AttrEngine::new(FaultyDb {
        inner: veteran_db(),
        fault: Fault::Story,
    });
    let degraded = failing.compute_all(&selection).into_computed().unwrap();

    // Reference run with the story table genuinely empty: the veteran
    // data minus its story rows.
    let veteran = veteran_db();
    let mut no_story = newcomer_db();
    no_story.insert_rank_bonus(100101, 7, attrs(0.0, 0.0, 12.0));
    no_story.insert_rank(veteran.rank_record(100101, 7).unwrap().unwrap());
    for id in [101011, 101031, 101061] {
        no_story.insert_equipment(veteran.equipment_record(id).unwrap().unwrap());
    }
    for record in veteran.unique_equipment_records(100101, 120, 0).unwrap() {
        no_story.insert_unique_equipment(record);
    }
    let reference = AttrEngine::new(no_story)
        .compute_all(&selection)
        .into_computed()
        .unwrap();

    assert_eq!(degraded.sum, reference.sum);
    assert!(degraded.story.is_zero());
    assert_eq!(degraded.failures.len(), 1);
    assert_eq!(degraded.failures[0].layer, Layer::Story);
    assert!(!degraded.is_complete());
}

#[test]
fn gear_slot_failure_keeps_partial_sum() {
    // Panel order is 6, 3, 5, 2, 4, 1: slot 6 resolves before the failing
    // slot 3, slot 1 after it.
    let engine = AttrEngine::new(FaultyDb {
        inner: veteran_db(),
        fault: Fault::Equipment(101031),
    });
    let selection = CharacterSelection::new(100101, 50, 7, 3, 120, 0);
    let result = engine.compute_all(&selection).into_computed().unwrap();

    assert_eq!(result.equips[0].equipment_id, 101061);
    assert!(result.equips[1].is_unknown());
    assert!(result.equips[5].is_unknown());
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].layer, Layer::Gear);
    assert!(!result.is_complete());

    let growth_steps = (50 + 7) as f64;
    let expected_hp = 2764.0 + 310.5 * growth_steps
        + 350.0
        + 120.0 // only the slot resolved before the failure
        + 45.0 + 60.0;
    assert_eq!(result.sum.hp, expected_hp);
    // 101011 (atk 20) was never reached; every other layer is untouched.
    let expected_atk = 115.0 + 14.0 * growth_steps
        + 22.0
        + 160.0
        + 8.0
        + (30.0 + 1.5 * 50.0);
    assert_eq!(result.sum.atk, expected_atk);
}

#[test]
fn bounds_query_failure_reads_as_unreleased() {
    let engine = AttrEngine::new(FaultyDb {
        inner: veteran_db(),
        fault: Fault::Bounds,
    });

    assert_eq!(engine.max_bounds(100101), None);
    assert!(engine.is_unknown(100101));
    let selection = CharacterSelection::new(100101, 50, 7, 3, 120, 0);
    assert_eq!(engine.compute_all(&selection), ComputeOutcome::Unknown);
}

#[test]
fn rank_compare_against_missing_rank_data() {
    // Rank 8 has no data at all: its side degrades to base + growth only.
    let engine = AttrEngine::new(veteran_db());
    let rows = engine.compare_ranks(100101, 50, 3, 0, 0, 7, 8);

    let hp = rows.iter().find(|r| r.field == AttrField::Hp).unwrap();
    // Moving 7 -> 8 loses the rank floor and gear but gains a growth step;
    // the story bonus applies to both sides and cancels.
    assert_eq!(hp.delta, 310.5 - 350.0 - 55.0 - 120.0);
}

#[test]
fn compare_rows_are_negated_when_ranks_swap() {
    let engine = AttrEngine::new(veteran_db());
    let forward = engine.compare_ranks(100101, 50, 3, 120, 0, 1, 7);
    let backward = engine.compare_ranks(100101, 50, 3, 120, 0, 7, 1);

    assert_eq!(forward.len(), backward.len());
    for (f, b) in forward.iter().zip(backward.iter()) {
        assert_eq!(f.delta, -b.delta);
        assert_eq!(f.value_a, b.value_b);
        assert_eq!(f.value_b, b.value_a);
    }
}

#[test]
fn recomputation_is_deterministic() {
    let engine = AttrEngine::new(veteran_db());
    let selection = CharacterSelection::new(100101, 50, 7, 3, 120, 0);
    let first = engine.compute_all(&selection);
    let second = engine.compute_all(&selection);
    assert_eq!(first, second);
}
