//! Structural Steel Grades
//!
//! Specified minimum yield and tensile strengths for the rolled-shape and
//! plate grades the engine supports. Values are in ksc (kgf/cm²), the
//! engine's native stress unit; SS400/SM490 values follow TIS/JIS
//! practice, A36/A992 follow ASTM.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Ksc;

/// Structural steel grade for beams and connection plates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SteelGrade {
    /// JIS/TIS SS400 — Fy 2400 ksc, Fu 4100 ksc (the regional default)
    #[default]
    Ss400,
    /// JIS SM490 — Fy 3250 ksc, Fu 5000 ksc
    Sm490,
    /// ASTM A36 — Fy 2500 ksc, Fu 4000 ksc
    A36,
    /// ASTM A992 — Fy 3500 ksc, Fu 4550 ksc
    A992,
}

impl SteelGrade {
    /// All grades for UI selection
    pub const ALL: [SteelGrade; 4] = [
        SteelGrade::Ss400,
        SteelGrade::Sm490,
        SteelGrade::A36,
        SteelGrade::A992,
    ];

    /// Specified minimum yield strength Fy (ksc)
    pub fn fy_ksc(&self) -> f64 {
        match self {
            SteelGrade::Ss400 => 2400.0,
            SteelGrade::Sm490 => 3250.0,
            SteelGrade::A36 => 2500.0,
            SteelGrade::A992 => 3500.0,
        }
    }

    /// Specified minimum tensile strength Fu (ksc)
    pub fn fu_ksc(&self) -> f64 {
        match self {
            SteelGrade::Ss400 => 4100.0,
            SteelGrade::Sm490 => 5000.0,
            SteelGrade::A36 => 4000.0,
            SteelGrade::A992 => 4550.0,
        }
    }

    /// Get Fy as a typed unit
    pub fn fy(&self) -> Ksc {
        Ksc(self.fy_ksc())
    }

    /// Get Fu as a typed unit
    pub fn fu(&self) -> Ksc {
        Ksc(self.fu_ksc())
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::Ss400 => "SS400",
            SteelGrade::Sm490 => "SM490",
            SteelGrade::A36 => "A36",
            SteelGrade::A992 => "A992",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '-'], "").as_str() {
            "SS400" => Ok(SteelGrade::Ss400),
            "SM490" => Ok(SteelGrade::Sm490),
            "A36" | "ASTMA36" => Ok(SteelGrade::A36),
            "A992" | "ASTMA992" => Ok(SteelGrade::A992),
            _ => Err(CalcError::invalid_input(
                "steel_grade",
                s,
                "Expected one of: SS400, SM490, A36, A992",
            )),
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
