//! GameDatabase - read-only query boundary over the bundled game data

mod data;
mod memory;
mod records;

pub use data::{DataError, GameData};
pub use memory::MemoryDatabase;
pub use records::{
    EquipmentRecord, PassiveSkillAction, ProgressionBounds, RankRecord, RarityRecord,
    StoryUnlockRecord, UniqueEquipmentRecord,
};

use crate::attr::Attributes;
use thiserror::Error;

/// A failed datastore query.
///
/// Absent data is *not* an error - lookups return `Ok(None)` or an empty
/// list for rows that simply do not exist. Errors here mean the query
/// itself failed, and the aggregator degrades that layer to zero. The
/// variants carry owned strings so a failure can be cloned into the
/// per-layer ledger of a result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("query failed: {0}")]
    Query(String),
}

/// Read-only query interface the engine runs against.
///
/// Implementations own their own connection discipline; the engine issues
/// independent point lookups and never holds state between them.
pub trait GameDatabase {
    /// Base stats and growth rates for `(unit_id, rarity)`.
    fn rarity_record(&self, unit_id: i32, rarity: i32)
        -> Result<Option<RarityRecord>, StoreError>;

    /// Flat rank bonus stats, if the unit has any at this rank.
    fn rank_bonus(&self, unit_id: i32, rank: i32) -> Result<Option<Attributes>, StoreError>;

    /// Rank stat floor and equipment slots; `None` above the unit's data.
    fn rank_record(&self, unit_id: i32, rank: i32) -> Result<Option<RankRecord>, StoreError>;

    /// One piece of general equipment by id.
    fn equipment_record(&self, equip_id: i32) -> Result<Option<EquipmentRecord>, StoreError>;

    /// The unit's unique equipment (0, 1, or 2 items), already scaled to
    /// the supplied level tiers. The level-0 zeroing rule is applied by the
    /// resolver regardless of what this returns.
    fn unique_equipment_records(
        &self,
        unit_id: i32,
        level: i32,
        level2: i32,
    ) -> Result<Vec<UniqueEquipmentRecord>, StoreError>;

    /// Story chapter bonuses recorded directly against `unit_id`.
    fn story_unlock_records(&self, unit_id: i32) -> Result<Vec<StoryUnlockRecord>, StoreError>;

    /// Costume/alternate unit ids sharing this unit's story track
    /// (excluding `unit_id` itself; empty for most units).
    fn alias_unit_ids(&self, unit_id: i32) -> Result<Vec<i32>, StoreError>;

    /// The EX-skill action behind the derived `action_id` at `level`.
    fn passive_skill_action(
        &self,
        action_id: i32,
        level: i32,
    ) -> Result<Option<PassiveSkillAction>, StoreError>;

    /// Maximum progression values; `None` for unreleased units.
    fn progression_bounds(&self, unit_id: i32)
        -> Result<Option<ProgressionBounds>, StoreError>;
}
