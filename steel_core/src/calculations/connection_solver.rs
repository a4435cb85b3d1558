//! # Shear-Tab Connection Solver
//!
//! Walks the ordered bolt/plate/weld catalog looking for the first
//! geometry that carries a demand shear on a given beam. The escalation
//! order is the catalog's economy order:
//!
//! 1. Bolt diameter, from a depth-derived start index upward
//! 2. Row count, from 2 up to what the clear web height can hold
//! 3. Four plate/weld thickness steps (standard, then three reinforced)
//!
//! The candidate stream is an explicit finite iterator
//! ([`CandidateGenerator`]); the search itself is a plain first-match
//! loop over it, so escalation policy and pass/fail evaluation stay
//! independently testable.
//!
//! Greedy first-match: the search assumes capacity is non-decreasing
//! along each escalation axis and returns the first feasible candidate
//! in catalog order, not a certified global optimum. An exhausted
//! catalog is a normal, reportable outcome
//! ([`ConnectionStatus::ExceedsCatalog`]), never an error.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::calculations::connection_solver::{solve, ConnectionDesignInput};
//! use steel_core::design::DesignMethod;
//! use steel_core::materials::{builtin_catalog, complete, BoltGrade, SteelGrade};
//!
//! let raw = builtin_catalog().lookup("H-300x150x6.5x9").unwrap();
//! let section = complete(raw).unwrap();
//!
//! let input = ConnectionDesignInput {
//!     label: "C-1".to_string(),
//!     demand_kgf: 9_360.0,
//!     section,
//!     method: DesignMethod::Asd,
//!     bolt_grade: BoltGrade::A325N,
//!     beam_grade: SteelGrade::Ss400,
//!     plate_grade: SteelGrade::Ss400,
//! };
//!
//! let solution = solve(&input).unwrap();
//! assert!(solution.status.is_pass());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::connection::{check, ConnectionCheckResult, ConnectionGeometry};
use crate::design::DesignMethod;
use crate::errors::{CalcError, CalcResult};
use crate::materials::bolts::{
    min_edge_distance_mm, standard_pitch_mm, start_index_for_depth, BoltCatalogEntry, BoltGrade,
    BOLT_CATALOG,
};
use crate::materials::{SectionProperties, SteelGrade};

/// Plate thickness increment per reinforcement step (mm)
const PLATE_STEP_MM: f64 = 2.0;

/// Weld size increment per reinforcement step (mm)
const WELD_STEP_MM: f64 = 1.0;

/// Number of plate/weld steps per bolt-and-row combination
const ESCALATION_STEPS: usize = 4;

/// Input parameters for a connection design run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionDesignInput {
    /// User label for this connection (e.g., "C-1")
    pub label: String,

    /// Demand shear to transfer (kgf)
    pub demand_kgf: f64,

    /// Completed properties of the supported beam
    pub section: SectionProperties,

    /// Design method (ASD or LRFD)
    pub method: DesignMethod,

    /// Bolt grade for every candidate
    pub bolt_grade: BoltGrade,

    /// Beam steel grade (web bearing)
    pub beam_grade: SteelGrade,

    /// Plate steel grade
    pub plate_grade: SteelGrade,
}

impl ConnectionDesignInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.demand_kgf < 0.0 {
            return Err(CalcError::invalid_input(
                "demand_kgf",
                self.demand_kgf.to_string(),
                "Demand shear cannot be negative",
            ));
        }
        if self.section.tw_cm <= 0.0 {
            return Err(CalcError::invalid_input(
                "section.tw_cm",
                self.section.tw_cm.to_string(),
                "Web thickness must be positive",
            ));
        }
        Ok(())
    }
}

/// Terminal state of a solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionStatus {
    /// A catalog geometry carries the demand
    Pass,
    /// Every catalog geometry was tried and none passed; the solution
    /// carries the largest attempt for reporting
    ExceedsCatalog,
}

impl ConnectionStatus {
    /// Convenience predicate
    pub fn is_pass(&self) -> bool {
        matches!(self, ConnectionStatus::Pass)
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConnectionStatus::Pass => "PASS",
            ConnectionStatus::ExceedsCatalog => "FAIL - exceeds catalog",
        };
        write!(f, "{name}")
    }
}

/// Outcome of a solver run: the accepted (or largest attempted)
/// geometry, its full check, and the terminal status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionSolution {
    /// Accepted geometry on Pass; largest attempted on ExceedsCatalog
    pub geometry: ConnectionGeometry,

    /// Full limit-state breakdown for that geometry
    pub result: ConnectionCheckResult,

    /// Controlling demand/design ratio of that geometry
    pub ratio: f64,

    /// Terminal status; callers must branch on this, not assume Pass
    pub status: ConnectionStatus,

    /// How many candidates were evaluated
    pub candidates_tried: usize,
}

/// Finite, restartable stream of candidate geometries in catalog order.
///
/// Bolt diameters start at the depth-derived index; row counts are
/// bounded by what fits the beam's clear web height at the bolt's
/// standard pitch and edge distance. Rungs that cannot hold even two
/// rows are skipped.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    entries: &'static [BoltCatalogEntry],
    bolt_grade: BoltGrade,
    clear_height_mm: f64,
    entry_idx: usize,
    rows: usize,
    step: usize,
}

impl CandidateGenerator {
    /// Candidate stream for a beam section.
    pub fn for_section(section: &SectionProperties, bolt_grade: BoltGrade) -> Self {
        let start = start_index_for_depth(section.d_cm * 10.0);
        CandidateGenerator {
            entries: &BOLT_CATALOG[start..],
            bolt_grade,
            clear_height_mm: section.clear_web_height_cm() * 10.0,
            entry_idx: 0,
            rows: 2,
            step: 0,
        }
    }

    /// Most rows that fit the clear web height at a bolt's standard
    /// pitch and minimum edge distance.
    fn max_rows(&self, entry: BoltCatalogEntry) -> usize {
        let pitch = standard_pitch_mm(entry.dia_mm);
        let edge = min_edge_distance_mm(entry.dia_mm);
        let room = self.clear_height_mm - 2.0 * edge;
        if room < 0.0 {
            0
        } else {
            (room / pitch).floor() as usize + 1
        }
    }

    fn build(&self, entry: BoltCatalogEntry) -> ConnectionGeometry {
        let mut g = ConnectionGeometry::standard(self.bolt_grade, entry.dia_mm, self.rows);
        g.plate_thickness_mm = entry.min_plate_thickness_mm + self.step as f64 * PLATE_STEP_MM;
        g.weld_size_mm = entry.min_weld_mm + self.step as f64 * WELD_STEP_MM;
        g
    }
}

impl Iterator for CandidateGenerator {
    type Item = ConnectionGeometry;

    fn next(&mut self) -> Option<ConnectionGeometry> {
        while self.entry_idx < self.entries.len() {
            let entry = self.entries[self.entry_idx];
            let max_rows = self.max_rows(entry);
            if max_rows < 2 || self.rows > max_rows {
                self.entry_idx += 1;
                self.rows = 2;
                self.step = 0;
                continue;
            }

            let candidate = self.build(entry);

            self.step += 1;
            if self.step == ESCALATION_STEPS {
                self.step = 0;
                self.rows += 1;
            }
            return Some(candidate);
        }
        None
    }
}

/// Find the first catalog geometry that carries the demand.
///
/// Returns `ConnectionStatus::ExceedsCatalog` (with the largest
/// attempted geometry) when the whole catalog fails; errors only on
/// invalid input or a beam too shallow for any bolt group.
pub fn solve(input: &ConnectionDesignInput) -> CalcResult<ConnectionSolution> {
    input.validate()?;

    let mut tried = 0;
    let mut last: Option<(ConnectionGeometry, ConnectionCheckResult)> = None;

    for candidate in CandidateGenerator::for_section(&input.section, input.bolt_grade) {
        let result = check(
            &candidate,
            input.demand_kgf,
            input.section.tw_cm,
            input.beam_grade,
            input.plate_grade,
            input.method,
        )?;
        tried += 1;

        if result.passes {
            let ratio = result.ratio;
            return Ok(ConnectionSolution {
                geometry: candidate,
                result,
                ratio,
                status: ConnectionStatus::Pass,
                candidates_tried: tried,
            });
        }
        last = Some((candidate, result));
    }

    let (geometry, result) = last.ok_or_else(|| {
        CalcError::calculation_failed(
            "connection_solver",
            format!(
                "No bolt group fits the clear web height of {}",
                input.section.name
            ),
        )
    })?;

    let ratio = result.ratio;
    Ok(ConnectionSolution {
        geometry,
        result,
        ratio,
        status: ConnectionStatus::ExceedsCatalog,
        candidates_tried: tried,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{builtin_catalog, complete};

    fn design_input(section_name: &str, demand_kgf: f64) -> ConnectionDesignInput {
        let raw = builtin_catalog().lookup(section_name).unwrap();
        ConnectionDesignInput {
            label: "C-1".to_string(),
            demand_kgf,
            section: complete(raw).unwrap(),
            method: DesignMethod::Asd,
            bolt_grade: BoltGrade::A325N,
            beam_grade: SteelGrade::Ss400,
            plate_grade: SteelGrade::Ss400,
        }
    }

    #[test]
    fn test_generator_order_and_bounds() {
        let input = design_input("H-300x150x6.5x9", 0.0);
        let candidates: Vec<ConnectionGeometry> =
            CandidateGenerator::for_section(&input.section, BoltGrade::A325N).collect();

        // Depth 300 mm starts at M20; clear height 264 mm holds up to
        // 4 rows of M20 (and the stream is finite)
        assert_eq!(candidates.first().unwrap().bolt_dia_mm, 20.0);
        assert_eq!(candidates.first().unwrap().rows, 2);
        let m20_max_rows = candidates
            .iter()
            .filter(|c| c.bolt_dia_mm == 20.0)
            .map(|c| c.rows)
            .max()
            .unwrap();
        assert_eq!(m20_max_rows, 4);

        // diameters never decrease along the stream
        for pair in candidates.windows(2) {
            assert!(pair[0].bolt_dia_mm <= pair[1].bolt_dia_mm);
        }

        // every emitted candidate satisfies the code minima
        for c in &candidates {
            assert!(c.validate().is_ok(), "{c:?}");
        }
    }

    #[test]
    fn test_generator_is_restartable() {
        let input = design_input("H-300x150x6.5x9", 0.0);
        let first: Vec<_> =
            CandidateGenerator::for_section(&input.section, BoltGrade::A325N).collect();
        let second: Vec<_> =
            CandidateGenerator::for_section(&input.section, BoltGrade::A325N).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_solve_half_design_shear() {
        // 9 360 kgf is half the ASD design shear of the H-300 beam
        let solution = solve(&design_input("H-300x150x6.5x9", 9_360.0)).unwrap();

        assert_eq!(solution.status, ConnectionStatus::Pass);
        assert_eq!(solution.geometry.bolt_dia_mm, 20.0);
        assert_eq!(solution.geometry.rows, 3);
        assert_eq!(solution.geometry.plate_thickness_mm, 8.0);
        assert_eq!(solution.geometry.weld_size_mm, 6.0);
        assert_eq!(solution.geometry.plate_height_mm, 172.0);
        // two-row attempts fail on web bearing first (4 steps), then the
        // first three-row candidate passes
        assert_eq!(solution.candidates_tried, 5);
        assert!((solution.ratio - 0.8974).abs() < 0.001);
    }

    #[test]
    fn test_zero_demand_returns_first_candidate() {
        let solution = solve(&design_input("H-200x100x5.5x8", 0.0)).unwrap();

        assert_eq!(solution.status, ConnectionStatus::Pass);
        assert_eq!(solution.candidates_tried, 1);
        // Shallow beam starts at the smallest catalog bolt
        assert_eq!(solution.geometry.bolt_dia_mm, 16.0);
        assert_eq!(solution.geometry.rows, 2);
        assert_eq!(solution.geometry.plate_thickness_mm, 6.0);
        assert_eq!(solution.ratio, 0.0);
    }

    #[test]
    fn test_exhausted_catalog_reports_fail() {
        let solution = solve(&design_input("H-300x150x6.5x9", 100_000.0)).unwrap();

        assert_eq!(solution.status, ConnectionStatus::ExceedsCatalog);
        assert!(!solution.status.is_pass());
        // Largest attempt: biggest bolt, most rows, thickest plate
        assert_eq!(solution.geometry.bolt_dia_mm, 24.0);
        assert_eq!(solution.geometry.rows, 3);
        assert_eq!(solution.geometry.plate_thickness_mm, 16.0);
        assert_eq!(solution.candidates_tried, 32);
        assert!((solution.ratio - 5.74).abs() < 0.01);
        assert!(!solution.result.passes);
    }

    #[test]
    fn test_solution_geometry_always_legal() {
        for demand in [0.0, 2_000.0, 9_360.0, 15_000.0, 100_000.0] {
            let solution = solve(&design_input("H-400x200x8x13", demand)).unwrap();
            assert!(solution.geometry.validate().is_ok());
        }
    }

    #[test]
    fn test_deeper_beam_starts_at_larger_bolt() {
        let shallow = solve(&design_input("H-200x100x5.5x8", 0.0)).unwrap();
        let deep = solve(&design_input("H-600x200x11x17", 0.0)).unwrap();
        assert!(deep.geometry.bolt_dia_mm > shallow.geometry.bolt_dia_mm);
    }

    #[test]
    fn test_negative_demand_rejected() {
        let result = solve(&design_input("H-300x150x6.5x9", -1.0));
        assert!(matches!(result, Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_solution_serialization() {
        let solution = solve(&design_input("H-300x150x6.5x9", 9_360.0)).unwrap();
        let json = serde_json::to_string_pretty(&solution).unwrap();
        assert!(json.contains("\"status\": \"Pass\""));

        let roundtrip: ConnectionSolution = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.geometry, solution.geometry);
        assert_eq!(roundtrip.status, solution.status);
    }
}
