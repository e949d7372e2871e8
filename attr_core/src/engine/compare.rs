//! Rank comparison - before/after stat deltas for the compare screen

use crate::attr::{AttrField, Attributes};
use crate::engine::AttrEngine;
use crate::store::GameDatabase;
use crate::types::CharacterSelection;

/// One row of the rank comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankCompareRow {
    pub field: AttrField,
    pub value_a: f64,
    pub value_b: f64,
    /// `value_b - value_a`; positive means the target rank is ahead.
    pub delta: f64,
}

/// Diff two attribute vectors over the curated display subset.
///
/// Both operands are read-only; the rows are a fresh value.
pub fn rank_compare_rows(a: &Attributes, b: &Attributes) -> Vec<RankCompareRow> {
    AttrField::DISPLAY
        .into_iter()
        .map(|field| RankCompareRow {
            field,
            value_a: a.get(field),
            value_b: b.get(field),
            delta: b.get(field) - a.get(field),
        })
        .collect()
}

impl<D: GameDatabase> AttrEngine<D> {
    /// Compute the panel at two ranks and diff them field by field.
    ///
    /// Every other progression parameter is held fixed. A rank whose
    /// computation cannot produce a panel (unknown unit) contributes the
    /// zero vector, matching the panel's own fallback display.
    pub fn compare_ranks(
        &self,
        unit_id: i32,
        level: i32,
        rarity: i32,
        unique_equip_level: i32,
        unique_equip_level2: i32,
        rank_a: i32,
        rank_b: i32,
    ) -> Vec<RankCompareRow> {
        let total_at = |rank: i32| {
            let selection = CharacterSelection::new(
                unit_id,
                level,
                rank,
                rarity,
                unique_equip_level,
                unique_equip_level2,
            );
            self.compute_all(&selection)
                .into_computed()
                .map(|result| result.sum)
                .unwrap_or_else(Attributes::zero)
        };
        rank_compare_rows(&total_at(rank_a), &total_at(rank_b))
    }
}
