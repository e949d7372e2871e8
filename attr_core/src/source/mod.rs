//! Resolvers for the independently-sourced attribute layers
//!
//! Each resolver turns one slice of the game database into an attribute
//! contribution plus whatever display records the caller needs. Resolvers
//! are pure lookups - they hold a borrow of the datastore and no other
//! state, so a computation for one character never touches another's.

mod gear;
mod growth;
mod passive;
mod story;
mod unique;

pub use gear::{GearLayer, GearResolver};
pub use growth::growth_attributes;
pub use passive::{passive_action_id, PassiveSkillResolver};
pub use story::StoryResolver;
pub use unique::{UniqueEquipLayer, UniqueEquipResolver};
