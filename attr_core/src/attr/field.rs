//! AttrField - Closed enumeration of the combat attribute schema

use serde::{Deserialize, Serialize};

/// One named field of an [`Attributes`](crate::attr::Attributes) vector.
///
/// The game database addresses fields by small integer codes in skill action
/// records; the engine always goes through this enum, so an unrecognized
/// code surfaces as an explicit `None` instead of a silent write to the
/// wrong field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrField {
    Hp,
    Atk,
    MagicStr,
    Def,
    MagicDef,
    PhysicalCritical,
    MagicCritical,
    WaveHpRecovery,
    WaveEnergyRecovery,
    Dodge,
    PhysicalPenetrate,
    MagicPenetrate,
    LifeSteal,
    HpRecoveryRate,
    EnergyRecoveryRate,
    EnergyReduceRate,
    Accuracy,
}

impl AttrField {
    /// Every field, in canonical schema order.
    pub const ALL: [AttrField; 17] = [
        AttrField::Hp,
        AttrField::Atk,
        AttrField::MagicStr,
        AttrField::Def,
        AttrField::MagicDef,
        AttrField::PhysicalCritical,
        AttrField::MagicCritical,
        AttrField::WaveHpRecovery,
        AttrField::WaveEnergyRecovery,
        AttrField::Dodge,
        AttrField::PhysicalPenetrate,
        AttrField::MagicPenetrate,
        AttrField::LifeSteal,
        AttrField::HpRecoveryRate,
        AttrField::EnergyRecoveryRate,
        AttrField::EnergyReduceRate,
        AttrField::Accuracy,
    ];

    /// The user-facing subset shown on stat panels and rank comparison
    /// tables, in panel order. The four internal rate fields are tracked
    /// in the vector but never displayed.
    pub const DISPLAY: [AttrField; 13] = [
        AttrField::Hp,
        AttrField::Atk,
        AttrField::MagicStr,
        AttrField::Def,
        AttrField::MagicDef,
        AttrField::PhysicalCritical,
        AttrField::MagicCritical,
        AttrField::WaveHpRecovery,
        AttrField::WaveEnergyRecovery,
        AttrField::Dodge,
        AttrField::PhysicalPenetrate,
        AttrField::MagicPenetrate,
        AttrField::LifeSteal,
    ];

    /// Display label for stat panels.
    pub fn label(self) -> &'static str {
        match self {
            AttrField::Hp => "HP",
            AttrField::Atk => "ATK",
            AttrField::MagicStr => "Magic ATK",
            AttrField::Def => "DEF",
            AttrField::MagicDef => "Magic DEF",
            AttrField::PhysicalCritical => "Physical Crit",
            AttrField::MagicCritical => "Magic Crit",
            AttrField::WaveHpRecovery => "HP Recovery",
            AttrField::WaveEnergyRecovery => "TP Recovery",
            AttrField::Dodge => "Dodge",
            AttrField::PhysicalPenetrate => "Physical Penetrate",
            AttrField::MagicPenetrate => "Magic Penetrate",
            AttrField::LifeSteal => "Life Steal",
            AttrField::HpRecoveryRate => "HP Recovery Rate",
            AttrField::EnergyRecoveryRate => "TP Recovery Rate",
            AttrField::EnergyReduceRate => "TP Reduce Rate",
            AttrField::Accuracy => "Accuracy",
        }
    }

    /// Map the target-field code used by passive skill action records.
    ///
    /// Codes outside `1..=5` (including the 0 written for actions with no
    /// attribute effect) carry no bonus and map to `None`.
    pub fn from_skill_target_code(code: i32) -> Option<AttrField> {
        match code {
            1 => Some(AttrField::Hp),
            2 => Some(AttrField::Atk),
            3 => Some(AttrField::Def),
            4 => Some(AttrField::MagicStr),
            5 => Some(AttrField::MagicDef),
            _ => None,
        }
    }
}
