//! Wide-Flange Section Catalog (JIS G3192 / TIS rolled H-shapes)
//!
//! Raw section records and the catalog that indexes them by label.
//! Catalog records are deliberately *incomplete*: tabulated mill data
//! carries dimensions, unit weight and the principal inertias, while the
//! derived quantities (A, ry, Sx, fillet radius, sometimes Iy) are filled
//! by [`crate::materials::completer::complete`]. The catalog itself never
//! derives anything.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::materials::sections::builtin_catalog;
//! use steel_core::materials::completer::complete;
//!
//! let catalog = builtin_catalog();
//! let raw = catalog.lookup("H-300x150x6.5x9").unwrap();
//! let section = complete(raw).unwrap();
//!
//! assert_eq!(section.d_cm, 30.0);
//! assert!((section.a_cm2 - 46.75).abs() < 0.01);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Raw section record as tabulated, possibly missing derived properties.
///
/// All dimensional values are metric: cm, cm², cm³, cm⁴; unit weight in
/// kg/m.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Catalog label (e.g., "H-300x150x6.5x9")
    pub name: String,

    /// Overall depth D (cm)
    pub d_cm: f64,

    /// Flange width B (cm)
    pub bf_cm: f64,

    /// Web thickness tw (cm)
    pub tw_cm: f64,

    /// Flange thickness tf (cm)
    pub tf_cm: f64,

    /// Unit weight (kg/m)
    pub w_kg_m: f64,

    /// Strong-axis moment of inertia Ix (cm⁴)
    pub ix_cm4: f64,

    /// Plastic section modulus Zx (cm³)
    pub zx_cm3: f64,

    /// Weak-axis moment of inertia Iy (cm⁴); approximated from the
    /// flanges when absent
    pub iy_cm4: Option<f64>,

    /// Cross-sectional area (cm²); back-calculated from unit weight
    /// when absent
    pub a_cm2: Option<f64>,

    /// Weak-axis radius of gyration ry (cm)
    pub ry_cm: Option<f64>,

    /// Elastic section modulus Sx (cm³)
    pub sx_cm3: Option<f64>,

    /// Web-to-flange fillet radius r (cm)
    pub r_cm: Option<f64>,
}

impl SectionRecord {
    /// Minimal record from tabulated mill data (derived fields absent)
    #[allow(clippy::too_many_arguments)]
    pub fn from_table(
        name: impl Into<String>,
        d_cm: f64,
        bf_cm: f64,
        tw_cm: f64,
        tf_cm: f64,
        w_kg_m: f64,
        ix_cm4: f64,
        iy_cm4: Option<f64>,
        zx_cm3: f64,
    ) -> Self {
        SectionRecord {
            name: name.into(),
            d_cm,
            bf_cm,
            tw_cm,
            tf_cm,
            w_kg_m,
            ix_cm4,
            zx_cm3,
            iy_cm4,
            a_cm2: None,
            ry_cm: None,
            sx_cm3: None,
            r_cm: None,
        }
    }
}

/// Completed section properties, every derived value present.
///
/// Produced only by [`crate::materials::completer::complete`]; the
/// derivations are cached here and never recomputed downstream, so a
/// section processed twice can never disagree with itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Catalog label
    pub name: String,

    /// Overall depth D (cm)
    pub d_cm: f64,

    /// Flange width B (cm)
    pub bf_cm: f64,

    /// Web thickness tw (cm)
    pub tw_cm: f64,

    /// Flange thickness tf (cm)
    pub tf_cm: f64,

    /// Unit weight (kg/m)
    pub w_kg_m: f64,

    /// Strong-axis moment of inertia Ix (cm⁴)
    pub ix_cm4: f64,

    /// Weak-axis moment of inertia Iy (cm⁴)
    pub iy_cm4: f64,

    /// Plastic section modulus Zx (cm³)
    pub zx_cm3: f64,

    /// Cross-sectional area (cm²)
    pub a_cm2: f64,

    /// Weak-axis radius of gyration ry (cm)
    pub ry_cm: f64,

    /// Elastic section modulus Sx (cm³)
    pub sx_cm3: f64,

    /// Web-to-flange fillet radius r (cm)
    pub r_cm: f64,
}

impl SectionProperties {
    /// Web shear area Aw = D · tw (cm²)
    pub fn web_area_cm2(&self) -> f64 {
        self.d_cm * self.tw_cm
    }

    /// Clear web height between fillets, T = D − 2·(tf + r) (cm).
    ///
    /// This is the vertical room available to a shear-tab bolt group.
    pub fn clear_web_height_cm(&self) -> f64 {
        self.d_cm - 2.0 * (self.tf_cm + self.r_cm)
    }

    /// Distance between flange centroids h0 = D − tf (cm)
    pub fn h0_cm(&self) -> f64 {
        self.d_cm - self.tf_cm
    }
}

impl std::fmt::Display for SectionProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (A={:.1} cm², Ix={:.0} cm⁴, Zx={:.0} cm³)",
            self.name, self.a_cm2, self.ix_cm4, self.zx_cm3
        )
    }
}

/// Section catalog indexed by label.
///
/// Read-only reference data: the engine takes records out of it and never
/// writes back. Labels match case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct SectionCatalog {
    /// Records indexed by uppercase label
    records: HashMap<String, SectionRecord>,
}

impl SectionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record into the catalog
    pub fn insert(&mut self, record: SectionRecord) {
        self.records.insert(record.name.to_uppercase(), record);
    }

    /// Look up a record by label (case-insensitive)
    pub fn lookup(&self, name: &str) -> CalcResult<&SectionRecord> {
        self.records
            .get(&name.to_uppercase())
            .ok_or_else(|| CalcError::section_not_found(name))
    }

    /// All records, sorted by unit weight then label for stable iteration
    pub fn all_sorted(&self) -> Vec<&SectionRecord> {
        let mut records: Vec<&SectionRecord> = self.records.values().collect();
        records.sort_by(|a, b| {
            a.w_kg_m
                .partial_cmp(&b.w_kg_m)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        records
    }

    /// Search for records whose label starts with a pattern
    pub fn search(&self, pattern: &str) -> Vec<&SectionRecord> {
        let pattern_upper = pattern.to_uppercase();
        self.records
            .iter()
            .filter(|(k, _)| k.starts_with(&pattern_upper))
            .map(|(_, v)| v)
            .collect()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The built-in catalog, loaded once
static BUILTIN: Lazy<SectionCatalog> = Lazy::new(build_builtin);

/// Get the built-in rolled H-shape catalog (JIS G3192 / TIS series).
///
/// Records carry tabulated data only; run them through the property
/// completer before any capacity calculation.
pub fn builtin_catalog() -> &'static SectionCatalog {
    &BUILTIN
}

fn build_builtin() -> SectionCatalog {
    // (label, D, B, tw, tf, W, Ix, Iy, Zx) in cm / kg/m / cm⁴ / cm³
    let rows = [
        ("H-100x50x5x7", 10.0, 5.0, 0.5, 0.7, 9.3, 187.0, 14.8, 41.8),
        ("H-100x100x6x8", 10.0, 10.0, 0.6, 0.8, 16.9, 378.0, 134.0, 84.2),
        ("H-125x60x6x8", 12.5, 6.0, 0.6, 0.8, 13.1, 409.0, 29.1, 74.0),
        ("H-125x125x6.5x9", 12.5, 12.5, 0.65, 0.9, 23.6, 839.0, 293.0, 149.1),
        ("H-150x75x5x7", 15.0, 7.5, 0.5, 0.7, 14.0, 666.0, 49.5, 98.2),
        ("H-150x150x7x10", 15.0, 15.0, 0.7, 1.0, 31.1, 1620.0, 563.0, 239.6),
        ("H-175x90x5x8", 17.5, 9.0, 0.5, 0.8, 18.0, 1210.0, 97.5, 151.8),
        ("H-175x175x7.5x11", 17.5, 17.5, 0.75, 1.1, 40.2, 2900.0, 984.0, 359.6),
        ("H-200x100x5.5x8", 20.0, 10.0, 0.55, 0.8, 20.9, 1810.0, 134.0, 200.2),
        ("H-200x200x8x12", 20.0, 20.0, 0.8, 1.2, 49.9, 4720.0, 1600.0, 513.2),
        ("H-250x125x6x9", 25.0, 12.5, 0.6, 0.9, 29.0, 3960.0, 294.0, 351.9),
        ("H-250x250x9x14", 25.0, 25.0, 0.9, 1.4, 71.8, 10700.0, 3650.0, 936.9),
        ("H-300x150x6.5x9", 30.0, 15.0, 0.65, 0.9, 36.7, 7210.0, 508.0, 522.1),
        ("H-300x300x10x15", 30.0, 30.0, 1.0, 1.5, 93.0, 20200.0, 6750.0, 1464.8),
        ("H-350x175x7x11", 35.0, 17.5, 0.7, 1.1, 49.6, 13600.0, 984.0, 840.8),
        ("H-350x350x12x19", 35.0, 35.0, 1.2, 1.9, 137.0, 40300.0, 13600.0, 2493.2),
        ("H-400x200x8x13", 40.0, 20.0, 0.8, 1.3, 66.0, 23700.0, 1740.0, 1286.0),
        ("H-400x400x13x21", 40.0, 40.0, 1.3, 2.1, 172.0, 66600.0, 22400.0, 3600.1),
        ("H-450x200x9x14", 45.0, 20.0, 0.9, 1.4, 76.0, 33500.0, 1870.0, 1621.5),
        ("H-500x200x10x16", 50.0, 20.0, 1.0, 1.6, 89.6, 47800.0, 2140.0, 2096.4),
        ("H-600x200x11x17", 60.0, 20.0, 1.1, 1.7, 106.0, 77600.0, 2280.0, 2863.2),
        ("H-700x300x13x24", 70.0, 30.0, 1.3, 2.4, 185.0, 201000.0, 10800.0, 6248.8),
        ("H-800x300x14x26", 80.0, 30.0, 1.4, 2.6, 210.0, 292000.0, 11700.0, 7995.5),
        ("H-900x300x16x28", 90.0, 30.0, 1.6, 2.8, 243.0, 411000.0, 12600.0, 10174.1),
    ];

    let mut catalog = SectionCatalog::new();
    for (name, d, bf, tw, tf, w, ix, iy, zx) in rows {
        catalog.insert(SectionRecord::from_table(
            name,
            d,
            bf,
            tw,
            tf,
            w,
            ix,
            Some(iy),
            zx,
        ));
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loaded() {
        let catalog = builtin_catalog();
        assert!(!catalog.is_empty());
        assert!(catalog.len() >= 20);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let catalog = builtin_catalog();
        let upper = catalog.lookup("H-300X150X6.5X9").unwrap();
        let lower = catalog.lookup("h-300x150x6.5x9").unwrap();
        assert_eq!(upper.name, lower.name);
        assert_eq!(upper.d_cm, 30.0);
        assert_eq!(upper.tw_cm, 0.65);
    }

    #[test]
    fn test_lookup_not_found() {
        let catalog = builtin_catalog();
        let result = catalog.lookup("H-999x999");
        assert!(matches!(result, Err(CalcError::SectionNotFound { .. })));
    }

    #[test]
    fn test_raw_records_are_incomplete() {
        let catalog = builtin_catalog();
        let raw = catalog.lookup("H-300x150x6.5x9").unwrap();
        assert!(raw.a_cm2.is_none());
        assert!(raw.ry_cm.is_none());
        assert!(raw.sx_cm3.is_none());
        assert!(raw.r_cm.is_none());
        assert!(raw.iy_cm4.is_some());
    }

    #[test]
    fn test_all_sorted_by_weight() {
        let catalog = builtin_catalog();
        let sorted = catalog.all_sorted();
        assert_eq!(sorted.len(), catalog.len());
        for pair in sorted.windows(2) {
            assert!(pair[0].w_kg_m <= pair[1].w_kg_m);
        }
    }

    #[test]
    fn test_search_by_prefix() {
        let catalog = builtin_catalog();
        let h300 = catalog.search("H-300");
        assert_eq!(h300.len(), 2);
        assert!(h300.iter().all(|r| r.name.starts_with("H-300")));
    }

    #[test]
    fn test_record_serialization() {
        let catalog = builtin_catalog();
        let raw = catalog.lookup("H-200x100x5.5x8").unwrap();
        let json = serde_json::to_string(raw).unwrap();
        let roundtrip: SectionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(*raw, roundtrip);
    }
}
