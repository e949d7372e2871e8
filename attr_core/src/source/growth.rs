//! Growth curve - level-scaled attribute gain from a rarity record

use crate::attr::Attributes;
use crate::store::RarityRecord;

/// Growth contribution for a combined progression step count.
///
/// The game scales the rarity growth rates by `level + rank` - rank steps
/// feed the same per-level curve as character levels. Callers pass the
/// combined value.
pub fn growth_attributes(rarity: &RarityRecord, combined_level: i32) -> Attributes {
    rarity.growth.multiply(combined_level as f64)
}
