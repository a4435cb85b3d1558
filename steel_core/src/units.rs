//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64
//! wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The engine uses one consistent internal system
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Internal System (metric, kgf-based)
//!
//! All capacity and limit-state math runs in centimeters and
//! kilograms-force, which keeps the AISC formulas free of conversion
//! factors (stress in ksc = kgf/cm² pairs naturally with cm lengths).
//! Conversions happen only at the API boundary:
//! - Span: meters (user) ↔ centimeters (internal)
//! - Fabrication dimensions (bolts, plates, welds): millimeters ↔ cm
//! - Stress: ksc primary; MPa accepted at the boundary
//! - Modulus E: GPa at the boundary (e.g. 200 GPa) → ksc internally
//! - Distributed load: kgf/m reported; kgf/cm internal
//!
//! ## Example
//!
//! ```rust
//! use steel_core::units::{Meters, Centimeters, Mpa, Ksc};
//!
//! let span = Meters(6.0);
//! let span_cm: Centimeters = span.into();
//! assert_eq!(span_cm.0, 600.0);
//!
//! let fy: Ksc = Mpa(235.0).into();
//! assert!((fy.0 - 2396.3).abs() < 0.1);
//! ```

use serde::{Deserialize, Serialize};

/// One GPa expressed in ksc (kgf/cm²): 1e9 Pa / 98 066.5 Pa-per-ksc
pub const GPA_TO_KSC: f64 = 1.0e9 / 98_066.5;

/// One MPa expressed in ksc
pub const MPA_TO_KSC: f64 = 1.0e6 / 98_066.5;

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Millimeters> for Centimeters {
    fn from(mm: Millimeters) -> Self {
        Centimeters(mm.0 / 10.0)
    }
}

impl From<Centimeters> for Millimeters {
    fn from(cm: Centimeters) -> Self {
        Millimeters(cm.0 * 10.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilograms-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kgf(pub f64);

/// Force in metric tons-force (1 tf = 1000 kgf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonf(pub f64);

impl From<Kgf> for Tonf {
    fn from(kgf: Kgf) -> Self {
        Tonf(kgf.0 / 1000.0)
    }
}

impl From<Tonf> for Kgf {
    fn from(tf: Tonf) -> Self {
        Kgf(tf.0 * 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in ksc (kgf/cm²), the primary stress unit of the engine
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksc(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

impl From<Mpa> for Ksc {
    fn from(mpa: Mpa) -> Self {
        Ksc(mpa.0 * MPA_TO_KSC)
    }
}

impl From<Ksc> for Mpa {
    fn from(ksc: Ksc) -> Self {
        Mpa(ksc.0 / MPA_TO_KSC)
    }
}

// ============================================================================
// Distributed Load Units
// ============================================================================

/// Distributed load in kgf per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfPerM(pub f64);

/// Distributed load in tf per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TonfPerM(pub f64);

impl From<KgfPerM> for TonfPerM {
    fn from(w: KgfPerM) -> Self {
        TonfPerM(w.0 / 1000.0)
    }
}

impl From<TonfPerM> for KgfPerM {
    fn from(w: TonfPerM) -> Self {
        KgfPerM(w.0 * 1000.0)
    }
}
