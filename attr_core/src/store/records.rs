//! Row types read from the bundled game database

use crate::attr::Attributes;
use crate::types::UNKNOWN_EQUIP_ID;
use serde::{Deserialize, Serialize};

/// Base stats and per-level growth rates for one `(unit, rarity)` pair.
///
/// `growth` holds the attribute gain per combined level step; the growth
/// layer is `growth × (level + rank)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityRecord {
    pub unit_id: i32,
    pub rarity: i32,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub growth: Attributes,
}

/// Rank-tier stat floor plus the six equipment slot ids unlocked at that
/// rank. May be absent for ranks a unit has no data for yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankRecord {
    pub unit_id: i32,
    pub rank: i32,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub equip_slot_1: i32,
    #[serde(default)]
    pub equip_slot_2: i32,
    #[serde(default)]
    pub equip_slot_3: i32,
    #[serde(default)]
    pub equip_slot_4: i32,
    #[serde(default)]
    pub equip_slot_5: i32,
    #[serde(default)]
    pub equip_slot_6: i32,
}

impl RankRecord {
    /// Slot ids in the in-game panel order (6, 3, 5, 2, 4, 1).
    pub fn ordered_slot_ids(&self) -> [i32; 6] {
        [
            self.equip_slot_6,
            self.equip_slot_3,
            self.equip_slot_5,
            self.equip_slot_2,
            self.equip_slot_4,
            self.equip_slot_1,
        ]
    }
}

/// One piece of general equipment at its fully-enhanced stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub equipment_id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub attributes: Attributes,
}

impl EquipmentRecord {
    /// The placeholder record for an unobtained or unreleased slot. It
    /// occupies a panel position but never contributes to the stat sum.
    pub fn unknown() -> EquipmentRecord {
        EquipmentRecord {
            equipment_id: UNKNOWN_EQUIP_ID,
            name: "???".to_string(),
            attributes: Attributes::zero(),
        }
    }

    /// True for the placeholder record.
    pub fn is_unknown(&self) -> bool {
        self.equipment_id == UNKNOWN_EQUIP_ID
    }
}

/// A character-exclusive equipment item scaled to a requested level tier.
///
/// `slot` is 1 or 2; a handful of units carry two unique items with
/// independent level tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueEquipmentRecord {
    pub equipment_id: i32,
    pub unit_id: i32,
    #[serde(default = "default_unique_slot")]
    pub slot: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attributes: Attributes,
}

fn default_unique_slot() -> i32 {
    1
}

/// The permanent stat bonus granted by one completed story chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryUnlockRecord {
    pub story_id: i32,
    pub unit_id: i32,
    #[serde(default)]
    pub attributes: Attributes,
}

/// A decoded EX-skill action: a flat, level-scaled bonus to one field.
///
/// `target_code` keeps the raw database encoding (1..=5, or 0 for "no
/// effect"); the passive resolver maps it through
/// [`AttrField::from_skill_target_code`](crate::attr::AttrField::from_skill_target_code).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassiveSkillAction {
    pub action_id: i32,
    #[serde(default)]
    pub target_code: i32,
    #[serde(default)]
    pub base: f64,
    #[serde(default)]
    pub per_level: f64,
}

/// Maximum progression values for a unit, used to seed selection bounds.
/// Absent bounds mean the unit is not yet released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionBounds {
    pub max_level: i32,
    pub max_rank: i32,
    pub max_rarity: i32,
    pub max_unique_equip_level: i32,
}
