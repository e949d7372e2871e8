//! Prelude module for convenient imports
//!
//! ```rust
//! use attr_core::prelude::*;
//! ```

// Core types
pub use crate::attr::{AttrField, Attributes};
pub use crate::types::{CharacterSelection, UNKNOWN_EQUIP_ID};

// Engine
pub use crate::engine::{AllAttrResult, AttrEngine, ComputeOutcome, Layer, LayerFailure, RankCompareRow};

// Datastore boundary
pub use crate::store::{
    EquipmentRecord, GameData, GameDatabase, MemoryDatabase, PassiveSkillAction,
    ProgressionBounds, RankRecord, RarityRecord, StoreError, StoryUnlockRecord,
    UniqueEquipmentRecord,
};

// Resolvers
pub use crate::source::{
    growth_attributes, passive_action_id, GearResolver, PassiveSkillResolver, StoryResolver,
    UniqueEquipResolver,
};
