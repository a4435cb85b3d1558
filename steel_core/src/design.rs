//! # Design Method and Safety Factors
//!
//! ASD/LRFD selection and the fixed safety-factor families of
//! AISC 360-16. A nominal strength Rn becomes a design strength by
//!
//! ```text
//! ASD:  Rn / Ω
//! LRFD: φ · Rn
//! ```
//!
//! ## Factor Summary
//!
//! | Family         | Ω    | φ    | Applies to                               |
//! |----------------|------|------|------------------------------------------|
//! | Flexure        | 1.67 | 0.90 | Beam bending (Mn)                        |
//! | Shear yielding | 1.50 | 1.00 | Beam shear (Vn), plate shear yield       |
//! | Rupture        | 2.00 | 0.75 | Bolt shear, bearing, plate shear rupture |
//!
//! The yielding and rupture families must never be conflated; every limit
//! state names its family explicitly via [`FactorClass`].
//!
//! These pairs are constants of the specification, not configurable inputs.

use serde::{Deserialize, Serialize};

/// Design methodology per AISC 360-16
///
/// # Example
/// ```
/// use steel_core::design::{DesignMethod, FactorClass};
///
/// let rn = 1000.0;
/// let asd = DesignMethod::Asd.design_strength(rn, FactorClass::ShearYielding);
/// let lrfd = DesignMethod::Lrfd.design_strength(rn, FactorClass::ShearYielding);
/// assert!((asd - 666.67).abs() < 0.01);
/// assert_eq!(lrfd, 1000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DesignMethod {
    /// Allowable Strength Design (divide nominal by Ω)
    #[default]
    Asd,
    /// Load and Resistance Factor Design (multiply nominal by φ)
    Lrfd,
}

impl DesignMethod {
    /// All design methods for UI selection
    pub const ALL: [DesignMethod; 2] = [DesignMethod::Asd, DesignMethod::Lrfd];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignMethod::Asd => "ASD (Allowable Strength Design)",
            DesignMethod::Lrfd => "LRFD (Load and Resistance Factor Design)",
        }
    }

    /// Get short code
    pub fn code(&self) -> &'static str {
        match self {
            DesignMethod::Asd => "ASD",
            DesignMethod::Lrfd => "LRFD",
        }
    }

    /// Reduce a nominal strength to its design strength for the given
    /// limit-state family.
    pub fn design_strength(&self, nominal: f64, class: FactorClass) -> f64 {
        match self {
            DesignMethod::Asd => nominal / class.omega(),
            DesignMethod::Lrfd => nominal * class.phi(),
        }
    }

    /// The factor actually applied by this method for the given family
    /// (Ω for ASD, φ for LRFD), for result reporting.
    pub fn factor(&self, class: FactorClass) -> f64 {
        match self {
            DesignMethod::Asd => class.omega(),
            DesignMethod::Lrfd => class.phi(),
        }
    }
}

impl std::fmt::Display for DesignMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Safety-factor family per AISC 360-16 Chapters F, G and J.
///
/// Yielding-type limit states carry the lower factors; fracture-type limit
/// states (bolt shear, bearing/tear-out, net-section rupture) carry the
/// higher ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorClass {
    /// Beam flexure: Ω = 1.67, φ = 0.90 (AISC F1)
    Flexure,
    /// Shear yielding: Ω = 1.50, φ = 1.00 (AISC G1, J4.2(a))
    ShearYielding,
    /// Fracture-type states: Ω = 2.00, φ = 0.75 (AISC J3, J4.2(b))
    Rupture,
}

impl FactorClass {
    /// ASD safety factor Ω
    pub fn omega(&self) -> f64 {
        match self {
            FactorClass::Flexure => 1.67,
            FactorClass::ShearYielding => 1.50,
            FactorClass::Rupture => 2.00,
        }
    }

    /// LRFD resistance factor φ
    pub fn phi(&self) -> f64 {
        match self {
            FactorClass::Flexure => 0.90,
            FactorClass::ShearYielding => 1.00,
            FactorClass::Rupture => 0.75,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_families() {
        assert_eq!(FactorClass::Flexure.omega(), 1.67);
        assert_eq!(FactorClass::Flexure.phi(), 0.90);
        assert_eq!(FactorClass::ShearYielding.omega(), 1.50);
        assert_eq!(FactorClass::ShearYielding.phi(), 1.00);
        assert_eq!(FactorClass::Rupture.omega(), 2.00);
        assert_eq!(FactorClass::Rupture.phi(), 0.75);
    }

    #[test]
    fn test_design_strength() {
        let rn = 28_080.0;
        assert!(
            (DesignMethod::Asd.design_strength(rn, FactorClass::ShearYielding) - 18_720.0).abs()
                < 1e-9
        );
        assert_eq!(
            DesignMethod::Lrfd.design_strength(rn, FactorClass::ShearYielding),
            28_080.0
        );
    }

    #[test]
    fn test_lrfd_to_asd_ratios() {
        // LRFD/ASD design-value ratio is φ·Ω for each family
        let rn = 1.0;
        let shear = DesignMethod::Lrfd.design_strength(rn, FactorClass::ShearYielding)
            / DesignMethod::Asd.design_strength(rn, FactorClass::ShearYielding);
        assert!((shear - 1.50).abs() < 1e-12);

        let flexure = DesignMethod::Lrfd.design_strength(rn, FactorClass::Flexure)
            / DesignMethod::Asd.design_strength(rn, FactorClass::Flexure);
        assert!((flexure - 1.503).abs() < 1e-12);
    }

    #[test]
    fn test_method_serialization() {
        let json = serde_json::to_string(&DesignMethod::Lrfd).unwrap();
        assert_eq!(json, "\"Lrfd\"");
        let roundtrip: DesignMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, DesignMethod::Lrfd);
    }

    #[test]
    fn test_display() {
        assert_eq!(DesignMethod::Asd.to_string(), "ASD");
        assert_eq!(DesignMethod::Lrfd.code(), "LRFD");
    }
}
