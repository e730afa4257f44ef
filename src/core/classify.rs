// ShowReg - core/classify.rs
//
// Competition class derivation. Pure and total: every input combination
// yields a label, and the same inputs always yield the same label.

use crate::core::model::{AgeCategory, CertStatus, ShowType};
use crate::util::constants;

/// Collapse a breed string to its grouping category.
///
/// Any breed carrying the "Other Purebred" marker (e.g. "Other Purebred
/// (Ragdoll)") collapses to the bare marker for labelling; the sub-breed
/// detail stays on the record. All other breeds pass through unchanged.
pub fn breed_category(breed: &str) -> &str {
    if breed.contains(constants::OTHER_PUREBRED_MARKER) {
        constants::OTHER_PUREBRED_MARKER
    } else {
        breed
    }
}

/// True for the mixed/household breeds that always form their own per-age
/// class regardless of show type or status.
pub fn is_mixed_breed(breed: &str) -> bool {
    constants::MIXED_BREEDS.contains(&breed_category(breed))
}

/// Derive the competition class label for a contestant.
///
/// `show_type` is the raw configured string; it is parsed leniently and an
/// unrecognised value falls through to the generic label. This is a defined
/// fallback, not a failure.
pub fn classify(show_type: &str, breed: &str, status: CertStatus, age: AgeCategory) -> String {
    let category = breed_category(breed);

    // Mixed/household entries always group by breed and age only.
    if is_mixed_breed(breed) {
        return format!("{category} - {age}");
    }

    match ShowType::parse(show_type) {
        Some(ShowType::Simple) => format!("{status} - {age}"),
        Some(ShowType::BreedBase) => format!("{category} - {age}"),
        Some(ShowType::Complex) => format!("{category} {status} - {age}"),
        None => constants::FALLBACK_CLASS_LABEL.to_string(),
    }
}

// =============================================================================
// Unit tests
// =============================================================================
