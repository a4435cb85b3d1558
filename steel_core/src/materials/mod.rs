//! # Materials and Catalogs
//!
//! Steel grades, bolt hardware, and the wide-flange section catalog.
//!
//! ## Layout
//!
//! - [`grades`] - Structural steel grades (Fy/Fu in ksc)
//! - [`bolts`] - Bolt grades, code minima, and the solver's hardware catalog
//! - [`sections`] - Raw section records and the built-in H-shape catalog
//! - [`completer`] - Pure raw-record → completed-properties transformation
//!
//! ## Example
//!
//! ```rust
//! use steel_core::materials::{builtin_catalog, complete, SteelGrade};
//!
//! let raw = builtin_catalog().lookup("H-300x150x6.5x9").unwrap();
//! let section = complete(raw).unwrap();
//! let fy = SteelGrade::Ss400.fy_ksc();
//!
//! assert!(section.a_cm2 > 0.0);
//! assert_eq!(fy, 2400.0);
//! ```

pub mod bolts;
pub mod completer;
pub mod grades;
pub mod sections;

// Re-export commonly used types
pub use bolts::{BoltCatalogEntry, BoltGrade, BOLT_CATALOG};
pub use completer::complete;
pub use grades::SteelGrade;
pub use sections::{builtin_catalog, SectionCatalog, SectionProperties, SectionRecord};
