//! Core types specific to attr_core

use serde::{Deserialize, Serialize};

/// Sentinel equipment id for not-yet-obtained or not-yet-released gear.
pub const UNKNOWN_EQUIP_ID: i32 = 999_999;

/// Sentinel for progression parameters that have not been chosen yet.
///
/// Distinct from 0, which is a valid unique-equipment level ("owned but not
/// yet awakened").
pub const UNSET: i32 = -1;

/// Progression parameters for one attribute computation.
///
/// A selection starts out with every parameter unset; the engine refuses to
/// compute until the caller has filled in all of them, so a half-seeded
/// slider state can never produce a bogus panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSelection {
    pub unit_id: i32,
    pub level: i32,
    pub rank: i32,
    pub rarity: i32,
    pub unique_equip_level: i32,
    pub unique_equip_level2: i32,
}

impl CharacterSelection {
    /// A fully specified selection.
    pub fn new(
        unit_id: i32,
        level: i32,
        rank: i32,
        rarity: i32,
        unique_equip_level: i32,
        unique_equip_level2: i32,
    ) -> CharacterSelection {
        CharacterSelection {
            unit_id,
            level,
            rank,
            rarity,
            unique_equip_level,
            unique_equip_level2,
        }
    }

    /// A selection for `unit_id` with every progression parameter unset.
    pub fn unset(unit_id: i32) -> CharacterSelection {
        CharacterSelection {
            unit_id,
            level: UNSET,
            rank: UNSET,
            rarity: UNSET,
            unique_equip_level: UNSET,
            unique_equip_level2: UNSET,
        }
    }

    /// True once every progression parameter has been chosen.
    pub fn is_initialized(&self) -> bool {
        self.level != UNSET
            && self.rank != UNSET
            && self.rarity != UNSET
            && self.unique_equip_level != UNSET
            && self.unique_equip_level2 != UNSET
    }
}
