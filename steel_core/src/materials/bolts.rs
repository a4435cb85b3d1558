//! High-Strength Bolts and the Shear-Tab Hardware Catalog
//!
//! Bolt grade shear-strength constants (AISC Table J3.2), the minimum
//! edge-distance bands of Table J3.4M, standard pitch/hole rules, and the
//! ordered bolt/plate/weld catalog the connection solver walks.
//!
//! Fabrication dimensions are in millimeters throughout this module; the
//! checker converts to centimeters internally.

use serde::{Deserialize, Serialize};

/// Standard hole clearance over the nominal bolt diameter (mm)
pub const HOLE_CLEARANCE_MM: f64 = 2.0;

/// Minimum bolt pitch as a multiple of the nominal diameter (AISC J3.3)
pub const MIN_PITCH_FACTOR: f64 = 2.67;

/// Standard pitch used by the solver, as a multiple of diameter
pub const STANDARD_PITCH_FACTOR: f64 = 3.0;

/// High-strength structural bolt grade with thread condition.
///
/// N = threads included in the shear plane, X = threads excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BoltGrade {
    /// A325, threads included: Fnv = 3800 ksc
    #[default]
    A325N,
    /// A325, threads excluded: Fnv = 4780 ksc
    A325X,
    /// A490, threads included: Fnv = 4780 ksc
    A490N,
    /// A490, threads excluded: Fnv = 5900 ksc
    A490X,
}

impl BoltGrade {
    /// All bolt grades for UI selection
    pub const ALL: [BoltGrade; 4] = [
        BoltGrade::A325N,
        BoltGrade::A325X,
        BoltGrade::A490N,
        BoltGrade::A490X,
    ];

    /// Nominal shear stress Fnv (ksc) per AISC Table J3.2
    pub fn fnv_ksc(&self) -> f64 {
        match self {
            BoltGrade::A325N => 3800.0,
            BoltGrade::A325X => 4780.0,
            BoltGrade::A490N => 4780.0,
            BoltGrade::A490X => 5900.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BoltGrade::A325N => "A325-N",
            BoltGrade::A325X => "A325-X",
            BoltGrade::A490N => "A490-N",
            BoltGrade::A490X => "A490-X",
        }
    }
}

impl std::fmt::Display for BoltGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Minimum edge distance for a bolt diameter (mm), banded per
/// AISC Table J3.4M: 22 mm up to M16, 26 mm up to M22, 30 mm above.
pub fn min_edge_distance_mm(dia_mm: f64) -> f64 {
    if dia_mm <= 16.0 {
        22.0
    } else if dia_mm <= 22.0 {
        26.0
    } else {
        30.0
    }
}

/// Standard bolt pitch for a diameter (mm)
pub fn standard_pitch_mm(dia_mm: f64) -> f64 {
    STANDARD_PITCH_FACTOR * dia_mm
}

/// Standard hole diameter for a bolt (mm)
pub fn hole_dia_mm(dia_mm: f64) -> f64 {
    dia_mm + HOLE_CLEARANCE_MM
}

/// One rung of the solver's escalation ladder: a bolt diameter with its
/// companion minimum plate thickness and fillet weld size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoltCatalogEntry {
    /// Nominal bolt diameter (mm)
    pub dia_mm: f64,
    /// Minimum shear-tab plate thickness paired with this bolt (mm)
    pub min_plate_thickness_mm: f64,
    /// Minimum fillet weld size paired with this plate (mm)
    pub min_weld_mm: f64,
}

/// Ordered bolt/plate/weld catalog, smallest to largest.
///
/// The order is the solver's escalation (and economy) order; changing it
/// changes which solution is reported first.
pub static BOLT_CATALOG: [BoltCatalogEntry; 4] = [
    BoltCatalogEntry {
        dia_mm: 16.0,
        min_plate_thickness_mm: 6.0,
        min_weld_mm: 5.0,
    },
    BoltCatalogEntry {
        dia_mm: 20.0,
        min_plate_thickness_mm: 8.0,
        min_weld_mm: 6.0,
    },
    BoltCatalogEntry {
        dia_mm: 22.0,
        min_plate_thickness_mm: 9.0,
        min_weld_mm: 6.0,
    },
    BoltCatalogEntry {
        dia_mm: 24.0,
        min_plate_thickness_mm: 10.0,
        min_weld_mm: 8.0,
    },
];

/// Catalog start index for a beam depth (mm).
///
/// Deeper beams skip the smallest bolts; this is an engineering heuristic
/// for where the search is likely to succeed, not a hard constraint.
pub fn start_index_for_depth(depth_mm: f64) -> usize {
    if depth_mm <= 250.0 {
        0
    } else if depth_mm <= 450.0 {
        1
    } else {
        2
    }
}
