//! attr_core - Character attribute aggregation for a bundled game database
//!
//! This library provides:
//! - Attributes: the fixed combat attribute vector with pure arithmetic
//! - GameDatabase: the read-only query boundary over the bundled game data
//! - Layer resolvers: gear, unique equipment, story, growth, passive skill
//! - AttrEngine: folds every layer into one AllAttrResult panel
//! - Rank comparison: field-by-field deltas between two gear tiers

pub mod attr;
pub mod engine;
pub mod prelude;
pub mod source;
pub mod store;
pub mod types;

// Re-export core types for convenience
pub use attr::{AttrField, Attributes};
pub use engine::{
    AllAttrResult, AttrEngine, ComputeOutcome, Layer, LayerFailure, RankCompareRow,
};
pub use store::{GameDatabase, StoreError};
pub use types::{CharacterSelection, UNKNOWN_EQUIP_ID};
