//! Story bonuses - permanent stats from completed story chapters

use crate::attr::Attributes;
use crate::store::{GameDatabase, StoreError};

/// Sums the story-chapter bonuses of a unit and its story-sharing aliases.
pub struct StoryResolver<'a, D: GameDatabase + ?Sized> {
    db: &'a D,
}

impl<'a, D: GameDatabase + ?Sized> StoryResolver<'a, D> {
    pub fn new(db: &'a D) -> StoryResolver<'a, D> {
        StoryResolver { db }
    }

    /// Total story bonus for `unit_id`.
    ///
    /// Costume variants share one story track; chapters may be recorded
    /// against any of the sibling ids, so the sum runs over the unit plus
    /// its alias set. No chapters is a valid empty sum.
    pub fn resolve(&self, unit_id: i32) -> Result<Attributes, StoreError> {
        let mut ids = vec![unit_id];
        for alias in self.db.alias_unit_ids(unit_id)? {
            if !ids.contains(&alias) {
                ids.push(alias);
            }
        }

        let mut total = Attributes::zero();
        for id in ids {
            for record in self.db.story_unlock_records(id)? {
                total = total + record.attributes;
            }
        }
        Ok(total)
    }
}
