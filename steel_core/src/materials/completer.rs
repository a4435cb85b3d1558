//! Section Property Completion
//!
//! Pure transformation from a raw, possibly-incomplete [`SectionRecord`]
//! to a fully-populated [`SectionProperties`]. All derivations happen
//! here, once, and are cached on the returned record; nothing downstream
//! ever re-derives them. The input is never mutated, so sections can be
//! completed concurrently without ordering effects.
//!
//! Derivations, in order:
//! 1. fillet radius r ≈ tf (engineering default when the mill table
//!    omits it)
//! 2. A = W / 0.785 (steel density 7.85 g/cm³: one cm² of steel weighs
//!    0.785 kg per meter of length)
//! 3. Iy ≈ tf·B³/6 from the two flanges, when absent
//! 4. ry = sqrt(Iy / A)
//! 5. Sx = Ix / (D/2)
//!
//! A value already present on the record is never overwritten. If a
//! required property cannot be derived the section is rejected with
//! [`CalcError::DerivationFailed`]; callers must skip it, never substitute
//! a default.

use crate::errors::{CalcError, CalcResult};
use crate::materials::sections::{SectionProperties, SectionRecord};

/// Area back-calculation constant: kg/m of steel per cm² of section
const STEEL_WEIGHT_PER_CM2: f64 = 0.785;

/// Complete a raw section record.
///
/// # Example
///
/// ```rust
/// use steel_core::materials::sections::SectionRecord;
/// use steel_core::materials::completer::complete;
///
/// let raw = SectionRecord::from_table(
///     "H-300x150x6.5x9",
///     30.0, 15.0, 0.65, 0.9, 36.7, 7210.0, Some(508.0), 522.1,
/// );
/// let section = complete(&raw).unwrap();
/// assert!((section.sx_cm3 - 480.67).abs() < 0.01);
/// assert!((section.ry_cm - 3.30).abs() < 0.01);
/// ```
pub fn complete(raw: &SectionRecord) -> CalcResult<SectionProperties> {
    validate_base(raw)?;

    let r_cm = raw.r_cm.unwrap_or(raw.tf_cm);

    let a_cm2 = match raw.a_cm2 {
        Some(a) => a,
        None => raw.w_kg_m / STEEL_WEIGHT_PER_CM2,
    };
    if a_cm2 <= 0.0 {
        return Err(CalcError::derivation_failed(
            &raw.name,
            "A",
            "Unit weight is non-positive, area cannot be back-calculated",
        ));
    }

    let iy_cm4 = match raw.iy_cm4 {
        Some(iy) => iy,
        // Two flange plates about the weak axis: 2 · (tf·B³/12)
        None => {
            if raw.bf_cm > 0.0 && raw.tf_cm > 0.0 {
                raw.tf_cm * raw.bf_cm.powi(3) / 6.0
            } else {
                return Err(CalcError::derivation_failed(
                    &raw.name,
                    "Iy",
                    "Iy missing and no flange data to approximate it",
                ));
            }
        }
    };
    if iy_cm4 <= 0.0 {
        return Err(CalcError::derivation_failed(
            &raw.name,
            "Iy",
            "Weak-axis inertia must be positive",
        ));
    }

    let ry_cm = match raw.ry_cm {
        Some(ry) => ry,
        None => (iy_cm4 / a_cm2).sqrt(),
    };

    let sx_cm3 = match raw.sx_cm3 {
        Some(sx) => sx,
        None => raw.ix_cm4 / (raw.d_cm / 2.0),
    };

    Ok(SectionProperties {
        name: raw.name.clone(),
        d_cm: raw.d_cm,
        bf_cm: raw.bf_cm,
        tw_cm: raw.tw_cm,
        tf_cm: raw.tf_cm,
        w_kg_m: raw.w_kg_m,
        ix_cm4: raw.ix_cm4,
        iy_cm4,
        zx_cm3: raw.zx_cm3,
        a_cm2,
        ry_cm,
        sx_cm3,
        r_cm,
    })
}

/// Geometric sanity of the tabulated values: everything positive and the
/// flanges must fit inside the depth.
fn validate_base(raw: &SectionRecord) -> CalcResult<()> {
    let positive = [
        ("d_cm", raw.d_cm),
        ("bf_cm", raw.bf_cm),
        ("tw_cm", raw.tw_cm),
        ("tf_cm", raw.tf_cm),
        ("w_kg_m", raw.w_kg_m),
        ("ix_cm4", raw.ix_cm4),
        ("zx_cm3", raw.zx_cm3),
    ];
    for (field, value) in positive {
        if value <= 0.0 {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                "Section property must be positive",
            ));
        }
    }
    if raw.d_cm <= 2.0 * raw.tf_cm {
        return Err(CalcError::invalid_input(
            "d_cm",
            raw.d_cm.to_string(),
            "Depth must exceed twice the flange thickness",
        ));
    }
    Ok(())
}
