//! Unique equipment - character-exclusive items with their own level track

use crate::attr::Attributes;
use crate::store::{GameDatabase, StoreError, UniqueEquipmentRecord};

/// Resolved unique-equipment layer. `equips` has 0, 1, or 2 entries; most
/// units carry none.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UniqueEquipLayer {
    pub equips: Vec<UniqueEquipmentRecord>,
    pub total: Attributes,
}

/// Resolves a unit's unique equipment at the selected level tiers.
pub struct UniqueEquipResolver<'a, D: GameDatabase + ?Sized> {
    db: &'a D,
}

impl<'a, D: GameDatabase + ?Sized> UniqueEquipResolver<'a, D> {
    pub fn new(db: &'a D) -> UniqueEquipResolver<'a, D> {
        UniqueEquipResolver { db }
    }

    /// Resolve the layer for `unit_id` with per-slot levels.
    ///
    /// Level 0 means "owned but not awakened": the item stays in the list
    /// for display, but its stats are replaced with the zero vector no
    /// matter what the datastore returned for it.
    pub fn resolve(
        &self,
        unit_id: i32,
        level: i32,
        level2: i32,
    ) -> Result<UniqueEquipLayer, StoreError> {
        let records = self.db.unique_equipment_records(unit_id, level, level2)?;
        let mut layer = UniqueEquipLayer::default();
        for mut record in records {
            let slot_level = if record.slot == 2 { level2 } else { level };
            if slot_level == 0 {
                record.attributes = Attributes::zero();
            }
            layer.total = layer.total + record.attributes;
            layer.equips.push(record);
        }
        Ok(layer)
    }
}
