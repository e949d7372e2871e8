//! AttrEngine - folds the attribute layers into one panel result

mod compare;

pub use compare::{rank_compare_rows, RankCompareRow};

use crate::attr::Attributes;
use crate::source::{
    growth_attributes, GearResolver, PassiveSkillResolver, StoryResolver, UniqueEquipResolver,
};
use crate::store::{
    EquipmentRecord, GameDatabase, ProgressionBounds, StoreError, UniqueEquipmentRecord,
};
use crate::types::CharacterSelection;

/// One accumulation layer, named for the failure ledger and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    RankBonus,
    RarityBase,
    Growth,
    RankStatus,
    Gear,
    UniqueEquip,
    Story,
    PassiveSkill,
}

impl Layer {
    pub fn name(self) -> &'static str {
        match self {
            Layer::RankBonus => "rank_bonus",
            Layer::RarityBase => "rarity_base",
            Layer::Growth => "growth",
            Layer::RankStatus => "rank_status",
            Layer::Gear => "gear",
            Layer::UniqueEquip => "unique_equip",
            Layer::Story => "story",
            Layer::PassiveSkill => "passive_skill",
        }
    }
}

/// A layer whose datastore query failed and contributed zero instead.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerFailure {
    pub layer: Layer,
    pub error: StoreError,
}

/// The computed panel: grand total plus every per-layer piece the UI
/// renders separately. Built once per computation and never mutated after;
/// a re-computation replaces the whole value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AllAttrResult {
    /// Field-wise total over every layer.
    pub sum: Attributes,
    /// Flat rank bonus, zero when the unit has none at this rank.
    pub rank_bonus: Attributes,
    /// The six equipment panel slots, placeholders included.
    pub equips: Vec<EquipmentRecord>,
    /// Unique equipment (0..=2 entries), level-0 items zeroed.
    pub unique_equips: Vec<UniqueEquipmentRecord>,
    /// Total story-chapter bonus.
    pub story: Attributes,
    /// EX-skill passive bonus.
    pub ex_skill: Attributes,
    /// Layers that degraded to zero, in accumulation order.
    pub failures: Vec<LayerFailure>,
}

impl AllAttrResult {
    /// True when every layer resolved without degradation.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of one attribute computation.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputeOutcome {
    /// A (possibly degraded) panel result.
    Computed(AllAttrResult),
    /// No progression bounds exist - the unit is not yet released.
    Unknown,
    /// The selection still has unset progression parameters.
    Uninitialized,
}

impl ComputeOutcome {
    pub fn as_computed(&self) -> Option<&AllAttrResult> {
        match self {
            ComputeOutcome::Computed(result) => Some(result),
            _ => None,
        }
    }

    pub fn into_computed(self) -> Option<AllAttrResult> {
        match self {
            ComputeOutcome::Computed(result) => Some(result),
            _ => None,
        }
    }
}

/// The attribute aggregation engine.
///
/// Owns a read-only datastore and nothing else: every computation takes all
/// of its inputs as parameters and returns a fresh value, so concurrent
/// computations for different characters never share state and a superseded
/// result can simply be dropped.
pub struct AttrEngine<D: GameDatabase> {
    db: D,
}

impl<D: GameDatabase> AttrEngine<D> {
    pub fn new(db: D) -> AttrEngine<D> {
        AttrEngine { db }
    }

    pub fn database(&self) -> &D {
        &self.db
    }

    /// Maximum progression values for seeding selection bounds.
    ///
    /// `None` means the unit is unreleased; a failed query is reported and
    /// treated the same way.
    pub fn max_bounds(&self, unit_id: i32) -> Option<ProgressionBounds> {
        match self.db.progression_bounds(unit_id) {
            Ok(bounds) => bounds,
            Err(error) => {
                tracing::warn!(unit_id, %error, "progression bounds query failed");
                None
            }
        }
    }

    /// True when the unit has no progression data at all.
    pub fn is_unknown(&self, unit_id: i32) -> bool {
        self.max_bounds(unit_id).is_none()
    }

    /// Compute the full attribute panel for one selection.
    ///
    /// Layers accumulate in a fixed order: rank bonus, rarity base, growth,
    /// rank stat floor, gear, unique equipment, story, passive skill. Each
    /// layer is fault-isolated - a failed query degrades that layer to zero,
    /// logs the context, and leaves the remaining layers untouched. No
    /// error escapes this method.
    pub fn compute_all(&self, selection: &CharacterSelection) -> ComputeOutcome {
        if !selection.is_initialized() {
            return ComputeOutcome::Uninitialized;
        }
        if self.is_unknown(selection.unit_id) {
            return ComputeOutcome::Unknown;
        }

        let unit_id = selection.unit_id;
        let mut result = AllAttrResult {
            equips: vec![EquipmentRecord::unknown(); 6],
            ..AllAttrResult::default()
        };
        let mut sum = Attributes::zero();

        // Flat rank bonus.
        match self.db.rank_bonus(unit_id, selection.rank) {
            Ok(Some(bonus)) => {
                result.rank_bonus = bonus;
                sum = sum + bonus;
            }
            Ok(None) => {}
            Err(error) => record_failure(&mut result, Layer::RankBonus, error, selection),
        }

        // Rarity base and growth share one record; a failed query degrades
        // both layers.
        match self.db.rarity_record(unit_id, selection.rarity) {
            Ok(Some(rarity)) => {
                sum = sum + rarity.attributes;
                sum = sum + growth_attributes(&rarity, selection.level + selection.rank);
            }
            Ok(None) => {}
            Err(error) => {
                record_failure(&mut result, Layer::RarityBase, error.clone(), selection);
                record_failure(&mut result, Layer::Growth, error, selection);
            }
        }

        // Rank stat floor.
        match self.db.rank_record(unit_id, selection.rank) {
            Ok(Some(record)) => sum = sum + record.attributes,
            Ok(None) => {}
            Err(error) => record_failure(&mut result, Layer::RankStatus, error, selection),
        }

        // Gear.
        match GearResolver::new(&self.db).resolve(unit_id, selection.rank) {
            Ok(layer) => {
                sum = sum + layer.total;
                result.equips = layer.equips;
                if let Some(error) = layer.failure {
                    record_failure(&mut result, Layer::Gear, error, selection);
                }
            }
            Err(error) => record_failure(&mut result, Layer::Gear, error, selection),
        }

        // Unique equipment.
        match UniqueEquipResolver::new(&self.db).resolve(
            unit_id,
            selection.unique_equip_level,
            selection.unique_equip_level2,
        ) {
            Ok(layer) => {
                sum = sum + layer.total;
                result.unique_equips = layer.equips;
            }
            Err(error) => record_failure(&mut result, Layer::UniqueEquip, error, selection),
        }

        // Story chapters.
        match StoryResolver::new(&self.db).resolve(unit_id) {
            Ok(total) => {
                result.story = total;
                sum = sum + total;
            }
            Err(error) => record_failure(&mut result, Layer::Story, error, selection),
        }

        // EX-skill passive.
        match PassiveSkillResolver::new(&self.db).resolve(unit_id, selection.rarity, selection.level)
        {
            Ok(bonus) => {
                result.ex_skill = bonus;
                sum = sum + bonus;
            }
            Err(error) => record_failure(&mut result, Layer::PassiveSkill, error, selection),
        }

        result.sum = sum;
        ComputeOutcome::Computed(result)
    }
}

fn record_failure(
    result: &mut AllAttrResult,
    layer: Layer,
    error: StoreError,
    selection: &CharacterSelection,
) {
    tracing::warn!(
        unit_id = selection.unit_id,
        level = selection.level,
        rank = selection.rank,
        rarity = selection.rarity,
        unique_equip_level = selection.unique_equip_level,
        unique_equip_level2 = selection.unique_equip_level2,
        layer = layer.name(),
        %error,
        "attribute layer degraded to zero"
    );
    result.failures.push(LayerFailure { layer, error });
}
