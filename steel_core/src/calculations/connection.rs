//! # Shear-Tab Connection Limit States (AISC 360-16 Chapter J)
//!
//! Checks a single-plate (shear tab) connection bolted to a beam web
//! against the five limit states the engine carries:
//!
//! 1. Bolt shear: Rn = Fnv·Ab·n
//! 2. Bearing/tear-out at the beam web (edge + inner bolt terms, each
//!    capped at 2.4·d·t·Fu)
//! 3. Bearing/tear-out at the plate
//! 4. Plate shear yielding: Rn = 0.60·Fy·Ag
//! 5. Plate shear rupture: Rn = 0.60·Fu·Anv
//!
//! Block-shear rupture and weld strength are deliberately not checked;
//! the weld size is carried in the geometry for fabrication output only.
//!
//! The geometry validator runs first and short-circuits with a
//! structured [`CalcError::GeometryViolation`] naming the violated
//! constraint; limit-state math never runs on an illegal geometry.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::calculations::connection::{check, ConnectionGeometry};
//! use steel_core::design::DesignMethod;
//! use steel_core::materials::{BoltGrade, SteelGrade};
//!
//! let geometry = ConnectionGeometry::standard(BoltGrade::A325N, 20.0, 3);
//! let result = check(
//!     &geometry,
//!     9_360.0,
//!     0.65,
//!     SteelGrade::Ss400,
//!     SteelGrade::Ss400,
//!     DesignMethod::Asd,
//! )
//! .unwrap();
//!
//! assert!(result.passes);
//! println!("Controls: {} at ratio {:.2}", result.controlling, result.ratio);
//! ```

use serde::{Deserialize, Serialize};

use crate::design::{DesignMethod, FactorClass};
use crate::errors::{CalcError, CalcResult};
use crate::materials::bolts::{
    hole_dia_mm, min_edge_distance_mm, standard_pitch_mm, BoltGrade, MIN_PITCH_FACTOR,
};
use crate::materials::SteelGrade;

/// Candidate shear-tab geometry.
///
/// Bolts are in a single vertical row; fabrication dimensions in mm.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bolt_dia_mm": 20.0,
///   "bolt_grade": "A325N",
///   "rows": 3,
///   "pitch_mm": 60.0,
///   "lev_mm": 26.0,
///   "leh_mm": 26.0,
///   "plate_thickness_mm": 8.0,
///   "plate_height_mm": 172.0,
///   "weld_size_mm": 6.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionGeometry {
    /// Nominal bolt diameter (mm)
    pub bolt_dia_mm: f64,

    /// Bolt grade (fixes Fnv)
    pub bolt_grade: BoltGrade,

    /// Number of bolt rows (bolts in the single vertical line)
    pub rows: usize,

    /// Center-to-center bolt spacing (mm)
    pub pitch_mm: f64,

    /// Vertical edge distance, bolt center to plate end (mm)
    pub lev_mm: f64,

    /// Horizontal edge distance, bolt center to plate edge (mm)
    pub leh_mm: f64,

    /// Plate thickness (mm)
    pub plate_thickness_mm: f64,

    /// Plate height (mm)
    pub plate_height_mm: f64,

    /// Fillet weld size at the support leg (mm); carried for
    /// fabrication, not strength-checked here
    pub weld_size_mm: f64,
}

impl ConnectionGeometry {
    /// Geometry at the standard pitch and minimum edge distances for a
    /// bolt diameter, with the plate sized to exactly fit the bolt group.
    pub fn standard(bolt_grade: BoltGrade, bolt_dia_mm: f64, rows: usize) -> Self {
        let pitch_mm = standard_pitch_mm(bolt_dia_mm);
        let edge_mm = min_edge_distance_mm(bolt_dia_mm);
        ConnectionGeometry {
            bolt_dia_mm,
            bolt_grade,
            rows,
            pitch_mm,
            lev_mm: edge_mm,
            leh_mm: edge_mm,
            plate_thickness_mm: 8.0,
            plate_height_mm: (rows.saturating_sub(1)) as f64 * pitch_mm + 2.0 * edge_mm,
            weld_size_mm: 6.0,
        }
    }

    /// Standard hole diameter for this bolt (mm)
    pub fn hole_dia_mm(&self) -> f64 {
        hole_dia_mm(self.bolt_dia_mm)
    }

    /// Validate code minima. Runs before any limit-state math.
    pub fn validate(&self) -> CalcResult<()> {
        if self.rows < 2 {
            return Err(CalcError::geometry_violation(
                "rows",
                self.rows.to_string(),
                "2",
            ));
        }
        let min_pitch = MIN_PITCH_FACTOR * self.bolt_dia_mm;
        if self.pitch_mm < min_pitch {
            return Err(CalcError::geometry_violation(
                "pitch_mm",
                format!("{:.1}", self.pitch_mm),
                format!("{min_pitch:.1}"),
            ));
        }
        let min_edge = min_edge_distance_mm(self.bolt_dia_mm);
        if self.lev_mm < min_edge {
            return Err(CalcError::geometry_violation(
                "lev_mm",
                format!("{:.1}", self.lev_mm),
                format!("{min_edge:.1}"),
            ));
        }
        if self.leh_mm < min_edge {
            return Err(CalcError::geometry_violation(
                "leh_mm",
                format!("{:.1}", self.leh_mm),
                format!("{min_edge:.1}"),
            ));
        }
        let min_height = (self.rows - 1) as f64 * self.pitch_mm + 2.0 * self.lev_mm;
        if self.plate_height_mm < min_height {
            return Err(CalcError::geometry_violation(
                "plate_height_mm",
                format!("{:.1}", self.plate_height_mm),
                format!("{min_height:.1}"),
            ));
        }
        if self.plate_thickness_mm <= 0.0 {
            return Err(CalcError::geometry_violation(
                "plate_thickness_mm",
                format!("{:.1}", self.plate_thickness_mm),
                "> 0",
            ));
        }
        Ok(())
    }
}

/// The five limit states the checker evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionLimitState {
    /// Shear rupture of the bolt group
    BoltShear,
    /// Bearing/tear-out of the beam web
    WebBearing,
    /// Bearing/tear-out of the plate
    PlateBearing,
    /// Shear yielding of the plate gross section
    PlateShearYield,
    /// Shear rupture of the plate net section
    PlateShearRupture,
}

impl ConnectionLimitState {
    /// Safety-factor family of this limit state.
    ///
    /// Only gross-section yielding takes the yielding factors; everything
    /// else is fracture-type.
    pub fn factor_class(&self) -> FactorClass {
        match self {
            ConnectionLimitState::PlateShearYield => FactorClass::ShearYielding,
            _ => FactorClass::Rupture,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConnectionLimitState::BoltShear => "Bolt shear",
            ConnectionLimitState::WebBearing => "Bearing at beam web",
            ConnectionLimitState::PlateBearing => "Bearing at plate",
            ConnectionLimitState::PlateShearYield => "Plate shear yielding",
            ConnectionLimitState::PlateShearRupture => "Plate shear rupture",
        }
    }
}

impl std::fmt::Display for ConnectionLimitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One evaluated limit state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitStateCheck {
    /// Which limit state
    pub limit_state: ConnectionLimitState,

    /// Nominal strength Rn (kgf)
    pub rn_kgf: f64,

    /// Factor applied (Ω for ASD, φ for LRFD)
    pub factor: f64,

    /// Design strength (kgf)
    pub design_kgf: f64,

    /// Demand / design strength
    pub ratio: f64,
}

/// Results of checking one geometry against one demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionCheckResult {
    /// Demand shear (kgf)
    pub demand_kgf: f64,

    /// Every limit state, in fixed evaluation order
    pub checks: Vec<LimitStateCheck>,

    /// The limit state with the minimum design strength
    pub controlling: ConnectionLimitState,

    /// Minimum design strength (kgf)
    pub design_kgf: f64,

    /// Demand / minimum design strength
    pub ratio: f64,

    /// True iff every limit-state ratio is ≤ 1.0
    pub passes: bool,
}

impl ConnectionCheckResult {
    /// Look up one limit state's check
    pub fn get(&self, limit_state: ConnectionLimitState) -> Option<&LimitStateCheck> {
        self.checks.iter().find(|c| c.limit_state == limit_state)
    }
}

/// Check a connection geometry against a demand shear.
///
/// Pure and idempotent: identical inputs always produce identical
/// results.
///
/// # Arguments
///
/// * `geometry` - Candidate shear-tab geometry
/// * `demand_kgf` - Demand shear (kgf)
/// * `web_thickness_cm` - Supported beam's web thickness (cm)
/// * `beam_grade` - Beam steel (Fu used for web bearing)
/// * `plate_grade` - Plate steel (Fy/Fu for plate limit states)
/// * `method` - ASD or LRFD
pub fn check(
    geometry: &ConnectionGeometry,
    demand_kgf: f64,
    web_thickness_cm: f64,
    beam_grade: SteelGrade,
    plate_grade: SteelGrade,
    method: DesignMethod,
) -> CalcResult<ConnectionCheckResult> {
    geometry.validate()?;

    if demand_kgf < 0.0 {
        return Err(CalcError::invalid_input(
            "demand_kgf",
            demand_kgf.to_string(),
            "Demand shear cannot be negative",
        ));
    }
    if web_thickness_cm <= 0.0 {
        return Err(CalcError::invalid_input(
            "web_thickness_cm",
            web_thickness_cm.to_string(),
            "Web thickness must be positive",
        ));
    }

    // Work in cm / kgf
    let d = geometry.bolt_dia_mm / 10.0;
    let dh = geometry.hole_dia_mm() / 10.0;
    let pitch = geometry.pitch_mm / 10.0;
    let lev = geometry.lev_mm / 10.0;
    let tp = geometry.plate_thickness_mm / 10.0;
    let hp = geometry.plate_height_mm / 10.0;
    let n = geometry.rows as f64;

    let mut checks = Vec::with_capacity(5);
    let mut push = |limit_state: ConnectionLimitState, rn: f64| {
        let class = limit_state.factor_class();
        let design = method.design_strength(rn, class);
        checks.push(LimitStateCheck {
            limit_state,
            rn_kgf: rn,
            factor: method.factor(class),
            design_kgf: design,
            ratio: if design > 0.0 {
                demand_kgf / design
            } else {
                f64::INFINITY
            },
        });
    };

    // 1. Bolt shear
    let ab = std::f64::consts::PI * d * d / 4.0;
    push(
        ConnectionLimitState::BoltShear,
        geometry.bolt_grade.fnv_ksc() * ab * n,
    );

    // 2./3. Bearing/tear-out: one edge bolt + (n-1) inner bolts, each
    // term capped at the deformation limit 2.4·d·t·Fu
    let bearing = |t: f64, fu: f64| -> f64 {
        let cap = 2.4 * d * t * fu;
        let lc_edge = lev - dh / 2.0;
        let lc_inner = pitch - dh;
        let edge = (1.2 * lc_edge * t * fu).min(cap);
        let inner = (1.2 * lc_inner * t * fu).min(cap);
        edge + (n - 1.0) * inner
    };
    push(
        ConnectionLimitState::WebBearing,
        bearing(web_thickness_cm, beam_grade.fu_ksc()),
    );
    push(
        ConnectionLimitState::PlateBearing,
        bearing(tp, plate_grade.fu_ksc()),
    );

    // 4. Plate shear yielding on the gross section
    let ag = hp * tp;
    push(
        ConnectionLimitState::PlateShearYield,
        0.6 * plate_grade.fy_ksc() * ag,
    );

    // 5. Plate shear rupture on the net section
    let anv = (hp - n * dh) * tp;
    push(
        ConnectionLimitState::PlateShearRupture,
        0.6 * plate_grade.fu_ksc() * anv,
    );

    let controlling_check = checks
        .iter()
        .min_by(|a, b| {
            a.design_kgf
                .partial_cmp(&b.design_kgf)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .cloned()
        .ok_or_else(|| CalcError::Internal {
            message: "no limit states evaluated".to_string(),
        })?;

    let passes = checks.iter().all(|c| c.ratio <= 1.0);

    Ok(ConnectionCheckResult {
        demand_kgf,
        checks,
        controlling: controlling_check.limit_state,
        design_kgf: controlling_check.design_kgf,
        ratio: if controlling_check.design_kgf > 0.0 {
            demand_kgf / controlling_check.design_kgf
        } else {
            f64::INFINITY
        },
        passes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// M20 group of 3 on an H-300 web (tw = 6.5 mm), SS400 throughout
    fn m20_three_rows() -> ConnectionGeometry {
        ConnectionGeometry::standard(BoltGrade::A325N, 20.0, 3)
    }

    fn check_m20(demand: f64, method: DesignMethod) -> ConnectionCheckResult {
        check(
            &m20_three_rows(),
            demand,
            0.65,
            SteelGrade::Ss400,
            SteelGrade::Ss400,
            method,
        )
        .unwrap()
    }

    #[test]
    fn test_standard_geometry() {
        let g = m20_three_rows();
        assert_eq!(g.pitch_mm, 60.0);
        assert_eq!(g.lev_mm, 26.0);
        assert_eq!(g.plate_height_mm, 172.0);
        assert_eq!(g.hole_dia_mm(), 22.0);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_limit_state_strengths() {
        let result = check_m20(9_360.0, DesignMethod::Asd);

        let bolt = result.get(ConnectionLimitState::BoltShear).unwrap();
        assert!((bolt.rn_kgf - 35_814.2).abs() < 1.0);
        assert!((bolt.design_kgf - 17_907.1).abs() < 1.0);

        let web = result.get(ConnectionLimitState::WebBearing).unwrap();
        assert!((web.rn_kgf - 29_101.8).abs() < 1.0);
        assert!((web.design_kgf - 14_550.9).abs() < 1.0);

        let plate_brg = result.get(ConnectionLimitState::PlateBearing).unwrap();
        assert!((plate_brg.rn_kgf - 35_817.6).abs() < 1.0);

        let yield_check = result.get(ConnectionLimitState::PlateShearYield).unwrap();
        assert!((yield_check.rn_kgf - 19_814.4).abs() < 1.0);
        assert_eq!(yield_check.factor, 1.50);
        assert!((yield_check.design_kgf - 13_209.6).abs() < 1.0);

        let rupture = result.get(ConnectionLimitState::PlateShearRupture).unwrap();
        assert!((rupture.rn_kgf - 20_860.8).abs() < 1.0);
        assert_eq!(rupture.factor, 2.00);
        assert!((rupture.design_kgf - 10_430.4).abs() < 1.0);
    }

    #[test]
    fn test_controlling_is_minimum_design_strength() {
        let result = check_m20(9_360.0, DesignMethod::Asd);
        assert_eq!(result.controlling, ConnectionLimitState::PlateShearRupture);
        assert!((result.design_kgf - 10_430.4).abs() < 1.0);
        assert!((result.ratio - 0.8974).abs() < 0.001);
        assert!(result.passes);
    }

    #[test]
    fn test_fails_above_controlling_strength() {
        let result = check_m20(12_000.0, DesignMethod::Asd);
        assert!(!result.passes);
        assert!(result.ratio > 1.0);
        // bolt shear still has margin; pass/fail is per limit state
        let bolt = result.get(ConnectionLimitState::BoltShear).unwrap();
        assert!(bolt.ratio < 1.0);
    }

    #[test]
    fn test_factor_families_not_conflated() {
        let result = check_m20(9_360.0, DesignMethod::Lrfd);
        let yield_check = result.get(ConnectionLimitState::PlateShearYield).unwrap();
        let rupture = result.get(ConnectionLimitState::PlateShearRupture).unwrap();
        assert_eq!(yield_check.factor, 1.00);
        assert_eq!(rupture.factor, 0.75);
    }

    #[test]
    fn test_check_is_idempotent() {
        let first = check_m20(9_360.0, DesignMethod::Asd);
        let second = check_m20(9_360.0, DesignMethod::Asd);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pitch_violation_short_circuits() {
        let mut g = m20_three_rows();
        g.pitch_mm = 40.0; // < 2.67·20 = 53.4
        let result = check(
            &g,
            1_000.0,
            0.65,
            SteelGrade::Ss400,
            SteelGrade::Ss400,
            DesignMethod::Asd,
        );
        match result {
            Err(CalcError::GeometryViolation {
                constraint,
                required,
                ..
            }) => {
                assert_eq!(constraint, "pitch_mm");
                assert_eq!(required, "53.4");
            }
            other => panic!("expected geometry violation, got {other:?}"),
        }
    }

    #[test]
    fn test_edge_distance_violation() {
        let mut g = m20_three_rows();
        g.lev_mm = 20.0; // < 26 for M20
        let result = check(
            &g,
            1_000.0,
            0.65,
            SteelGrade::Ss400,
            SteelGrade::Ss400,
            DesignMethod::Asd,
        );
        assert!(matches!(result, Err(CalcError::GeometryViolation { .. })));
    }

    #[test]
    fn test_negative_demand_rejected() {
        let result = check(
            &m20_three_rows(),
            -10.0,
            0.65,
            SteelGrade::Ss400,
            SteelGrade::Ss400,
            DesignMethod::Asd,
        );
        assert!(matches!(result, Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_result_serialization() {
        let result = check_m20(9_360.0, DesignMethod::Asd);
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("PlateShearRupture"));

        let roundtrip: ConnectionCheckResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
