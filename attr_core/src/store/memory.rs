//! MemoryDatabase - hash-map backed GameDatabase for tests and tools

use crate::attr::Attributes;
use crate::store::records::{
    EquipmentRecord, PassiveSkillAction, ProgressionBounds, RankRecord, RarityRecord,
    StoryUnlockRecord, UniqueEquipmentRecord,
};
use crate::store::{GameDatabase, StoreError};
use std::collections::HashMap;

/// An in-memory [`GameDatabase`].
///
/// Unique equipment rows are returned as inserted (they are treated as
/// already scaled); the bundled-data store in
/// [`GameData`](crate::store::GameData) is the implementation that scales
/// per level tier.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    rarities: HashMap<(i32, i32), RarityRecord>,
    rank_bonuses: HashMap<(i32, i32), Attributes>,
    ranks: HashMap<(i32, i32), RankRecord>,
    equipment: HashMap<i32, EquipmentRecord>,
    unique_equipment: HashMap<i32, Vec<UniqueEquipmentRecord>>,
    stories: HashMap<i32, Vec<StoryUnlockRecord>>,
    aliases: HashMap<i32, Vec<i32>>,
    skill_actions: HashMap<i32, PassiveSkillAction>,
    bounds: HashMap<i32, ProgressionBounds>,
}

impl MemoryDatabase {
    pub fn new() -> MemoryDatabase {
        MemoryDatabase::default()
    }

    pub fn insert_rarity(&mut self, record: RarityRecord) {
        self.rarities
            .insert((record.unit_id, record.rarity), record);
    }

    pub fn insert_rank_bonus(&mut self, unit_id: i32, rank: i32, attributes: Attributes) {
        self.rank_bonuses.insert((unit_id, rank), attributes);
    }

    pub fn insert_rank(&mut self, record: RankRecord) {
        self.ranks.insert((record.unit_id, record.rank), record);
    }

    pub fn insert_equipment(&mut self, record: EquipmentRecord) {
        self.equipment.insert(record.equipment_id, record);
    }

    pub fn insert_unique_equipment(&mut self, record: UniqueEquipmentRecord) {
        self.unique_equipment
            .entry(record.unit_id)
            .or_default()
            .push(record);
    }

    pub fn insert_story(&mut self, record: StoryUnlockRecord) {
        self.stories.entry(record.unit_id).or_default().push(record);
    }

    pub fn insert_aliases(&mut self, unit_id: i32, aliases: Vec<i32>) {
        self.aliases.insert(unit_id, aliases);
    }

    pub fn insert_skill_action(&mut self, action: PassiveSkillAction) {
        self.skill_actions.insert(action.action_id, action);
    }

    pub fn insert_bounds(&mut self, unit_id: i32, bounds: ProgressionBounds) {
        self.bounds.insert(unit_id, bounds);
    }
}

impl GameDatabase for MemoryDatabase {
    fn rarity_record(
        &self,
        unit_id: i32,
        rarity: i32,
    ) -> Result<Option<RarityRecord>, StoreError> {
        Ok(self.rarities.get(&(unit_id, rarity)).cloned())
    }

    fn rank_bonus(&self, unit_id: i32, rank: i32) -> Result<Option<Attributes>, StoreError> {
        Ok(self.rank_bonuses.get(&(unit_id, rank)).copied())
    }

    fn rank_record(&self, unit_id: i32, rank: i32) -> Result<Option<RankRecord>, StoreError> {
        Ok(self.ranks.get(&(unit_id, rank)).cloned())
    }

    fn equipment_record(&self, equip_id: i32) -> Result<Option<EquipmentRecord>, StoreError> {
        Ok(self.equipment.get(&equip_id).cloned())
    }

    fn unique_equipment_records(
        &self,
        unit_id: i32,
        _level: i32,
        _level2: i32,
    ) -> Result<Vec<UniqueEquipmentRecord>, StoreError> {
        let mut records = self
            .unique_equipment
            .get(&unit_id)
            .cloned()
            .unwrap_or_default();
        records.sort_by_key(|r| r.slot);
        Ok(records)
    }

    fn story_unlock_records(&self, unit_id: i32) -> Result<Vec<StoryUnlockRecord>, StoreError> {
        Ok(self.stories.get(&unit_id).cloned().unwrap_or_default())
    }

    fn alias_unit_ids(&self, unit_id: i32) -> Result<Vec<i32>, StoreError> {
        Ok(self.aliases.get(&unit_id).cloned().unwrap_or_default())
    }

    fn passive_skill_action(
        &self,
        action_id: i32,
        _level: i32,
    ) -> Result<Option<PassiveSkillAction>, StoreError> {
        Ok(self.skill_actions.get(&action_id).cloned())
    }

    fn progression_bounds(
        &self,
        unit_id: i32,
    ) -> Result<Option<ProgressionBounds>, StoreError> {
        Ok(self.bounds.get(&unit_id).copied())
    }
}
