//! GameData - bundled game database loaded from TOML

use crate::attr::Attributes;
use crate::store::records::{
    EquipmentRecord, PassiveSkillAction, ProgressionBounds, RankRecord, RarityRecord,
    StoryUnlockRecord, UniqueEquipmentRecord,
};
use crate::store::{GameDatabase, StoreError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Bundled-data loading error
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read data file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Flat rank bonus row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankBonusRow {
    pub unit_id: i32,
    pub rank: i32,
    #[serde(default)]
    pub attributes: Attributes,
}

/// Unique equipment with its per-tier enhancement growth. The store scales
/// rows to a requested level; the resolver never interpolates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueEquipmentRow {
    pub equipment_id: i32,
    pub unit_id: i32,
    #[serde(default = "default_unique_slot")]
    pub slot: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub base: Attributes,
    #[serde(default)]
    pub growth: Attributes,
}

fn default_unique_slot() -> i32 {
    1
}

impl UniqueEquipmentRow {
    /// Stats at `level`: `base + growth × (level − 1)`. Level 1 is the
    /// unenhanced item; levels below 1 clamp to it (the level-0 zeroing
    /// rule lives in the resolver, not here).
    fn scaled(&self, level: i32) -> UniqueEquipmentRecord {
        let steps = (level - 1).max(0) as f64;
        UniqueEquipmentRecord {
            equipment_id: self.equipment_id,
            unit_id: self.unit_id,
            slot: self.slot,
            name: self.name.clone(),
            description: self.description.clone(),
            attributes: self.base + self.growth * steps,
        }
    }
}

/// Story-sharing alternate ids for one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasRow {
    pub unit_id: i32,
    #[serde(default)]
    pub aliases: Vec<i32>,
}

/// Progression bounds row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundsRow {
    pub unit_id: i32,
    pub max_level: i32,
    pub max_rank: i32,
    pub max_rarity: i32,
    #[serde(default)]
    pub max_unique_equip_level: i32,
}

/// The periodically-shipped read-only game database, deserialized from one
/// TOML document. Lookups are linear scans; the tables are bounded by the
/// game's content size and the engine issues point queries only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameData {
    pub rarities: Vec<RarityRecord>,
    pub rank_bonuses: Vec<RankBonusRow>,
    pub ranks: Vec<RankRecord>,
    pub equipment: Vec<EquipmentRecord>,
    pub unique_equipment: Vec<UniqueEquipmentRow>,
    pub stories: Vec<StoryUnlockRecord>,
    pub aliases: Vec<AliasRow>,
    pub skill_actions: Vec<PassiveSkillAction>,
    pub bounds: Vec<BoundsRow>,
}

impl GameData {
    /// Load a bundled database from a TOML file.
    pub fn from_path(path: &Path) -> Result<GameData, DataError> {
        let content = fs::read_to_string(path)?;
        GameData::from_toml_str(&content)
    }

    /// Parse a bundled database from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<GameData, DataError> {
        let data: GameData = toml::from_str(content)?;
        Ok(data)
    }
}

impl GameDatabase for GameData {
    fn rarity_record(
        &self,
        unit_id: i32,
        rarity: i32,
    ) -> Result<Option<RarityRecord>, StoreError> {
        Ok(self
            .rarities
            .iter()
            .find(|r| r.unit_id == unit_id && r.rarity == rarity)
            .cloned())
    }

    fn rank_bonus(&self, unit_id: i32, rank: i32) -> Result<Option<Attributes>, StoreError> {
        Ok(self
            .rank_bonuses
            .iter()
            .find(|r| r.unit_id == unit_id && r.rank == rank)
            .map(|r| r.attributes))
    }

    fn rank_record(&self, unit_id: i32, rank: i32) -> Result<Option<RankRecord>, StoreError> {
        Ok(self
            .ranks
            .iter()
            .find(|r| r.unit_id == unit_id && r.rank == rank)
            .cloned())
    }

    fn equipment_record(&self, equip_id: i32) -> Result<Option<EquipmentRecord>, StoreError> {
        Ok(self
            .equipment
            .iter()
            .find(|e| e.equipment_id == equip_id)
            .cloned())
    }

    fn unique_equipment_records(
        &self,
        unit_id: i32,
        level: i32,
        level2: i32,
    ) -> Result<Vec<UniqueEquipmentRecord>, StoreError> {
        let mut records: Vec<UniqueEquipmentRecord> = self
            .unique_equipment
            .iter()
            .filter(|row| row.unit_id == unit_id)
            .map(|row| row.scaled(if row.slot == 2 { level2 } else { level }))
            .collect();
        records.sort_by_key(|r| r.slot);
        Ok(records)
    }

    fn story_unlock_records(&self, unit_id: i32) -> Result<Vec<StoryUnlockRecord>, StoreError> {
        Ok(self
            .stories
            .iter()
            .filter(|s| s.unit_id == unit_id)
            .cloned()
            .collect())
    }

    fn alias_unit_ids(&self, unit_id: i32) -> Result<Vec<i32>, StoreError> {
        Ok(self
            .aliases
            .iter()
            .find(|a| a.unit_id == unit_id)
            .map(|a| a.aliases.clone())
            .unwrap_or_default())
    }

    fn passive_skill_action(
        &self,
        action_id: i32,
        _level: i32,
    ) -> Result<Option<PassiveSkillAction>, StoreError> {
        Ok(self
            .skill_actions
            .iter()
            .find(|a| a.action_id == action_id)
            .cloned())
    }

    fn progression_bounds(
        &self,
        unit_id: i32,
    ) -> Result<Option<ProgressionBounds>, StoreError> {
        Ok(self.bounds.iter().find(|b| b.unit_id == unit_id).map(|b| {
            ProgressionBounds {
                max_level: b.max_level,
                max_rank: b.max_rank,
                max_rarity: b.max_rarity,
                max_unique_equip_level: b.max_unique_equip_level,
            }
        }))
    }
}
