//! Attributes - the fixed combat attribute vector

mod field;

pub use field::AttrField;

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Mul};

/// The combat attribute vector of a unit, an equipment piece, or a single
/// bonus layer.
///
/// All fields default to zero and no field derives from another; quantities
/// like "effective power" are computed by callers, never stored here.
/// Addition and scaling are pure - every operation returns a new vector and
/// leaves its operands untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub hp: f64,
    pub atk: f64,
    pub magic_str: f64,
    pub def: f64,
    pub magic_def: f64,
    pub physical_critical: f64,
    pub magic_critical: f64,
    pub wave_hp_recovery: f64,
    pub wave_energy_recovery: f64,
    pub dodge: f64,
    pub physical_penetrate: f64,
    pub magic_penetrate: f64,
    pub life_steal: f64,
    pub hp_recovery_rate: f64,
    pub energy_recovery_rate: f64,
    pub energy_reduce_rate: f64,
    pub accuracy: f64,
}

impl Attributes {
    /// The all-zero vector.
    pub fn zero() -> Attributes {
        Attributes::default()
    }

    /// A vector with a single non-zero field.
    pub fn with_field(field: AttrField, value: f64) -> Attributes {
        let mut attr = Attributes::zero();
        attr.set(field, value);
        attr
    }

    /// Read one field.
    pub fn get(&self, field: AttrField) -> f64 {
        match field {
            AttrField::Hp => self.hp,
            AttrField::Atk => self.atk,
            AttrField::MagicStr => self.magic_str,
            AttrField::Def => self.def,
            AttrField::MagicDef => self.magic_def,
            AttrField::PhysicalCritical => self.physical_critical,
            AttrField::MagicCritical => self.magic_critical,
            AttrField::WaveHpRecovery => self.wave_hp_recovery,
            AttrField::WaveEnergyRecovery => self.wave_energy_recovery,
            AttrField::Dodge => self.dodge,
            AttrField::PhysicalPenetrate => self.physical_penetrate,
            AttrField::MagicPenetrate => self.magic_penetrate,
            AttrField::LifeSteal => self.life_steal,
            AttrField::HpRecoveryRate => self.hp_recovery_rate,
            AttrField::EnergyRecoveryRate => self.energy_recovery_rate,
            AttrField::EnergyReduceRate => self.energy_reduce_rate,
            AttrField::Accuracy => self.accuracy,
        }
    }

    /// Write one field.
    pub fn set(&mut self, field: AttrField, value: f64) {
        match field {
            AttrField::Hp => self.hp = value,
            AttrField::Atk => self.atk = value,
            AttrField::MagicStr => self.magic_str = value,
            AttrField::Def => self.def = value,
            AttrField::MagicDef => self.magic_def = value,
            AttrField::PhysicalCritical => self.physical_critical = value,
            AttrField::MagicCritical => self.magic_critical = value,
            AttrField::WaveHpRecovery => self.wave_hp_recovery = value,
            AttrField::WaveEnergyRecovery => self.wave_energy_recovery = value,
            AttrField::Dodge => self.dodge = value,
            AttrField::PhysicalPenetrate => self.physical_penetrate = value,
            AttrField::MagicPenetrate => self.magic_penetrate = value,
            AttrField::LifeSteal => self.life_steal = value,
            AttrField::HpRecoveryRate => self.hp_recovery_rate = value,
            AttrField::EnergyRecoveryRate => self.energy_recovery_rate = value,
            AttrField::EnergyReduceRate => self.energy_reduce_rate = value,
            AttrField::Accuracy => self.accuracy = value,
        }
    }

    /// Field-wise sum.
    pub fn add(&self, other: &Attributes) -> Attributes {
        let mut out = *self;
        for field in AttrField::ALL {
            out.set(field, out.get(field) + other.get(field));
        }
        out
    }

    /// Scale every field by `scalar`.
    pub fn multiply(&self, scalar: f64) -> Attributes {
        let mut out = Attributes::zero();
        for field in AttrField::ALL {
            out.set(field, self.get(field) * scalar);
        }
        out
    }

    /// True when every field is zero.
    pub fn is_zero(&self) -> bool {
        AttrField::ALL.iter().all(|field| self.get(*field) == 0.0)
    }

    /// Iterate `(field, value)` pairs in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = (AttrField, f64)> + '_ {
        AttrField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

impl Add for Attributes {
    type Output = Attributes;

    fn add(self, rhs: Attributes) -> Attributes {
        Attributes::add(&self, &rhs)
    }
}

impl Mul<f64> for Attributes {
    type Output = Attributes;

    fn mul(self, rhs: f64) -> Attributes {
        self.multiply(rhs)
    }
}

impl Sum for Attributes {
    fn sum<I: Iterator<Item = Attributes>>(iter: I) -> Attributes {
        iter.fold(Attributes::zero(), |acc, attr| acc + attr)
    }
}
