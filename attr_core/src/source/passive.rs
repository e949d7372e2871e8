//! Passive skill bonus - the flat stat grant hidden in an EX-skill action

use crate::attr::{AttrField, Attributes};
use crate::store::{GameDatabase, StoreError};

/// Derive the synthetic action id carrying a unit's EX-skill stat bonus.
///
/// `unit_id / 100` strips the costume suffix, grouping every costume of a
/// character under one family. Rarity 5 and up uses the awakened "EX+"
/// variant (511), lower rarities the plain "EX" variant (501).
pub fn passive_action_id(unit_id: i32, rarity: i32) -> i32 {
    let family = unit_id / 100;
    let variant = if rarity >= 5 { 511 } else { 501 };
    (family * 1000 + variant) * 100 + 1
}

/// Decodes the EX-skill action record into a one-field attribute delta.
pub struct PassiveSkillResolver<'a, D: GameDatabase + ?Sized> {
    db: &'a D,
}

impl<'a, D: GameDatabase + ?Sized> PassiveSkillResolver<'a, D> {
    pub fn new(db: &'a D) -> PassiveSkillResolver<'a, D> {
        PassiveSkillResolver { db }
    }

    /// Resolve the bonus vector for `(unit_id, rarity)` at `level`.
    ///
    /// The magnitude is `base + per_level × level`, assigned entirely to
    /// the field named by the action's target code. An absent action or an
    /// unrecognized target code yields the zero vector - both mean "this
    /// character has no EX stat bonus", not an error.
    pub fn resolve(&self, unit_id: i32, rarity: i32, level: i32) -> Result<Attributes, StoreError> {
        let action_id = passive_action_id(unit_id, rarity);
        let Some(action) = self.db.passive_skill_action(action_id, level)? else {
            return Ok(Attributes::zero());
        };
        let Some(field) = AttrField::from_skill_target_code(action.target_code) else {
            return Ok(Attributes::zero());
        };
        let magnitude = action.base + action.per_level * level as f64;
        Ok(Attributes::with_field(field, magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryDatabase, PassiveSkillAction};

    #[test]
    fn test_action_id_derivation() {
        assert_eq!(passive_action_id(100101, 3), 100_150_101);
        assert_eq!(passive_action_id(100101, 5), 100_151_101);
        assert_eq!(passive_action_id(100101, 6), 100_151_101);
        // Costumes of one character share the family id.
        assert_eq!(passive_action_id(100102, 3), passive_action_id(100101, 3));
    }

    #[test]
    fn test_magnitude_is_affine_in_level() {
        let mut db = MemoryDatabase::new();
        db.insert_skill_action(PassiveSkillAction {
            action_id: 100_150_101,
            target_code: 2,
            base: 100.0,
            per_level: 5.0,
        });

        let bonus = PassiveSkillResolver::new(&db)
            .resolve(100101, 3, 20)
            .unwrap();
        assert_eq!(bonus.atk, 200.0);
        assert_eq!(bonus, Attributes::with_field(AttrField::Atk, 200.0));
    }

    #[test]
    fn test_absent_action_is_zero() {
        let db = MemoryDatabase::new();
        let bonus = PassiveSkillResolver::new(&db)
            .resolve(100101, 3, 20)
            .unwrap();
        assert!(bonus.is_zero());
    }

    #[test]
    fn test_no_effect_target_code_is_zero() {
        let mut db = MemoryDatabase::new();
        db.insert_skill_action(PassiveSkillAction {
            action_id: 100_150_101,
            target_code: 0,
            base: 100.0,
            per_level: 5.0,
        });

        let bonus = PassiveSkillResolver::new(&db)
            .resolve(100101, 3, 20)
            .unwrap();
        assert!(bonus.is_zero());
    }

    #[test]
    fn test_rarity_five_selects_awakened_variant() {
        let mut db = MemoryDatabase::new();
        db.insert_skill_action(PassiveSkillAction {
            action_id: 100_150_101,
            target_code: 1,
            base: 50.0,
            per_level: 0.0,
        });
        db.insert_skill_action(PassiveSkillAction {
            action_id: 100_151_101,
            target_code: 1,
            base: 90.0,
            per_level: 0.0,
        });

        let resolver = PassiveSkillResolver::new(&db);
        assert_eq!(resolver.resolve(100101, 4, 1).unwrap().hp, 50.0);
        assert_eq!(resolver.resolve(100101, 5, 1).unwrap().hp, 90.0);
    }
}
