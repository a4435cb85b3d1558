//! # Structural Calculations
//!
//! This module contains all calculation types. Each calculation follows
//! the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input)` / `check(...)` / `solve(input)` - Pure functions
//!
//! ## Available Calculations
//!
//! - [`beam_capacity`] - Wide-flange beam capacity with LTB (AISC F, G)
//! - [`connection`] - Shear-tab limit-state checker (AISC J)
//! - [`connection_solver`] - First-match search over the hardware catalog

pub mod beam_capacity;
pub mod connection;
pub mod connection_solver;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use beam_capacity::{BeamCapacityInput, BeamCapacityResult, CapacityMode, LtbZone};
pub use connection::{ConnectionCheckResult, ConnectionGeometry, ConnectionLimitState};
pub use connection_solver::{ConnectionDesignInput, ConnectionSolution, ConnectionStatus};

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Beam capacity calculation
    BeamCapacity(BeamCapacityInput),
    /// Shear-tab connection design
    Connection(ConnectionDesignInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::BeamCapacity(b) => &b.label,
            CalculationItem::Connection(c) => &c.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::BeamCapacity(_) => "Beam Capacity",
            CalculationItem::Connection(_) => "Connection",
        }
    }
}
