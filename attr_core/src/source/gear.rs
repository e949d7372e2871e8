//! Gear - stats from the six rank-gated equipment slots

use crate::attr::Attributes;
use crate::store::{EquipmentRecord, GameDatabase, StoreError};
use crate::types::UNKNOWN_EQUIP_ID;

/// Resolved equipment layer: the six panel slots plus their summed stats.
///
/// `equips` always has six entries so the panel keeps its layout; unknown
/// and unresolved slots hold the placeholder record, which is excluded from
/// `total`. `failure` carries the first slot query that failed - the sum
/// then covers only the slots resolved before it.
#[derive(Debug, Clone, PartialEq)]
pub struct GearLayer {
    pub equips: Vec<EquipmentRecord>,
    pub total: Attributes,
    pub failure: Option<StoreError>,
}

impl GearLayer {
    fn empty() -> GearLayer {
        GearLayer {
            equips: vec![EquipmentRecord::unknown(); 6],
            total: Attributes::zero(),
            failure: None,
        }
    }
}

/// Resolves the equipment slot list of a `(unit, rank)` pair.
pub struct GearResolver<'a, D: GameDatabase + ?Sized> {
    db: &'a D,
}

impl<'a, D: GameDatabase + ?Sized> GearResolver<'a, D> {
    pub fn new(db: &'a D) -> GearResolver<'a, D> {
        GearResolver { db }
    }

    /// Resolve the gear layer for `(unit_id, rank)`.
    ///
    /// An absent rank record is valid (six placeholders, zero total). An
    /// error from the rank-record query itself is returned to the caller;
    /// an error on an individual slot is captured in
    /// [`GearLayer::failure`] with the remaining slots left as
    /// placeholders.
    pub fn resolve(&self, unit_id: i32, rank: i32) -> Result<GearLayer, StoreError> {
        let Some(rank_record) = self.db.rank_record(unit_id, rank)? else {
            return Ok(GearLayer::empty());
        };

        let mut layer = GearLayer::empty();
        for (position, equip_id) in rank_record.ordered_slot_ids().into_iter().enumerate() {
            if layer.failure.is_some() {
                break;
            }
            if equip_id == UNKNOWN_EQUIP_ID || equip_id == 0 {
                continue;
            }
            match self.db.equipment_record(equip_id) {
                Ok(Some(record)) => {
                    layer.total = layer.total + record.attributes;
                    layer.equips[position] = record;
                }
                // A missing row keeps the placeholder at this position.
                Ok(None) => {}
                Err(err) => layer.failure = Some(err),
            }
        }
        Ok(layer)
    }
}
