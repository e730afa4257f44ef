// ShowReg - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use serde::{Deserialize, Serialize};

// =============================================================================
// Contestant record
// =============================================================================

/// One registered cat-show contestant.
///
/// This is the core data unit that flows through classification, ranking,
/// persistence, and export. `class_label` is always derived from
/// (show type, breed, status, age) by the classifier and must never be
/// edited directly (registration and edit both recompute it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestantRecord {
    /// Owner's name. Required non-empty.
    pub owner: String,

    /// Owner's phone number. Free text, may be empty.
    pub phone: String,

    /// The cat's name. Required non-empty.
    pub pet_name: String,

    /// The cat's sex. `Unspecified` only occurs when loading a store file
    /// that predates the sex column.
    pub sex: Sex,

    /// Breed, free text. May encode a sub-breed in parenthetical form,
    /// e.g. "Other Purebred (Ragdoll)". The full text is kept on the
    /// record; only the class label collapses it.
    pub breed: String,

    /// Colour/pattern description. Required non-empty.
    pub color: String,

    /// Certification status.
    pub status: CertStatus,

    /// Age category.
    pub age: AgeCategory,

    /// Computed competition class, e.g. "Pedigree - Adult". Derived.
    pub class_label: String,
}

// =============================================================================
// Sex
// =============================================================================

/// Contestant sex. `Unspecified` exists only for schema backfill: a store
/// file written before the sex column was introduced loads as this variant
/// rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Sex {
    /// Human-readable label, as persisted in the store file.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Unspecified => constants::PLACEHOLDER,
        }
    }

    /// Parse a persisted or operator-entered label (case-insensitive).
    /// Anything unrecognised maps to `Unspecified`, matching the store's
    /// backfill tolerance.
    pub fn parse(s: &str) -> Sex {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Sex::Male,
            "female" | "f" => Sex::Female,
            _ => Sex::Unspecified,
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Certification status
// =============================================================================

/// Certification status of a contestant.
///
/// `Unspecified` is the forced placeholder in breed-base mode, where status
/// is not part of the class label; `PetClass` is forced for mixed/household
/// breeds at entry time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CertStatus {
    Pedigree,
    NonPedigree,
    PetClass,
    #[default]
    Unspecified,
}

impl CertStatus {
    /// Human-readable label, as persisted and as used in class labels.
    pub fn label(&self) -> &'static str {
        match self {
            CertStatus::Pedigree => "Pedigree",
            CertStatus::NonPedigree => "Non-Pedigree",
            CertStatus::PetClass => "Pet Class",
            CertStatus::Unspecified => constants::PLACEHOLDER,
        }
    }

    /// Parse a persisted or operator-entered label (case-insensitive).
    pub fn parse(s: &str) -> CertStatus {
        match s.trim().to_lowercase().as_str() {
            "pedigree" | "ped" => CertStatus::Pedigree,
            "non-pedigree" | "nonpedigree" | "non-ped" => CertStatus::NonPedigree,
            "pet class" | "pet-class" | "petclass" => CertStatus::PetClass,
            _ => CertStatus::Unspecified,
        }
    }
}

impl std::fmt::Display for CertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Age category
// =============================================================================

/// Contestant age category. Kittens sort before adults in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AgeCategory {
    Kitten,
    #[default]
    Adult,
}

impl AgeCategory {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AgeCategory::Kitten => "Kitten",
            AgeCategory::Adult => "Adult",
        }
    }

    /// Parse a persisted or operator-entered label. Any label containing
    /// "kitten" (case-insensitive) is a kitten; everything else is adult.
    pub fn parse(s: &str) -> AgeCategory {
        if s.trim().to_lowercase().contains("kitten") {
            AgeCategory::Kitten
        } else {
            AgeCategory::Adult
        }
    }
}

impl std::fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Show type
// =============================================================================

/// Classification mode selected once per session.
///
/// The configured value is a free string; `parse` matches it leniently so
/// descriptive values like "Type 1: Simple (Ped vs Non-Ped)" select the
/// right mode. Strings matching no mode fall through to the classifier's
/// generic fallback and the ranker's breed-first key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowType {
    /// Entries grouped purely by certification status.
    Simple,
    /// Entries grouped purely by breed ("one breed one class").
    BreedBase,
    /// Full cross of breed and status.
    Complex,
}

impl ShowType {
    /// All variants in display order.
    pub fn all() -> &'static [ShowType] {
        &[ShowType::Simple, ShowType::BreedBase, ShowType::Complex]
    }

    /// Canonical label.
    pub fn label(&self) -> &'static str {
        match self {
            ShowType::Simple => "Simple",
            ShowType::BreedBase => "Breed-base",
            ShowType::Complex => "Complex",
        }
    }

    /// Lenient parse of a configured show-type string.
    ///
    /// Returns `None` for unrecognised strings; callers treat `None` as the
    /// documented generic fallback, not as a failure.
    pub fn parse(s: &str) -> Option<ShowType> {
        let lower = s.to_lowercase();
        if lower.contains("simple") || lower.contains("type 1") {
            Some(ShowType::Simple)
        } else if lower.contains("breed-base") || lower.contains("breed base") || lower.contains("type 2") {
            Some(ShowType::BreedBase)
        } else if lower.contains("complex") || lower.contains("type 3") {
            Some(ShowType::Complex)
        } else {
            None
        }
    }
}

impl std::fmt::Display for ShowType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_parse_round_trips_labels() {
        assert_eq!(Sex::parse("Male"), Sex::Male);
        assert_eq!(Sex::parse("female"), Sex::Female);
        assert_eq!(Sex::parse("-"), Sex::Unspecified);
        assert_eq!(Sex::parse(""), Sex::Unspecified);
    }

    #[test]
    fn status_parse_accepts_display_labels() {
        for status in [
            CertStatus::Pedigree,
            CertStatus::NonPedigree,
            CertStatus::PetClass,
            CertStatus::Unspecified,
        ] {
            assert_eq!(CertStatus::parse(status.label()), status);
        }
    }

    #[test]
    fn age_parse_matches_kitten_token_anywhere() {
        assert_eq!(AgeCategory::parse("Kitten"), AgeCategory::Kitten);
        assert_eq!(AgeCategory::parse("Kitten (4-7 months)"), AgeCategory::Kitten);
        assert_eq!(AgeCategory::parse("Adult"), AgeCategory::Adult);
        assert_eq!(AgeCategory::parse("Senior"), AgeCategory::Adult);
    }

    #[test]
    fn show_type_parse_is_lenient() {
        assert_eq!(ShowType::parse("Simple"), Some(ShowType::Simple));
        assert_eq!(
            ShowType::parse("Type 1: Simple (Ped vs Non-Ped)"),
            Some(ShowType::Simple)
        );
        assert_eq!(ShowType::parse("breed base"), Some(ShowType::BreedBase));
        assert_eq!(ShowType::parse("Type 3: Complex"), Some(ShowType::Complex));
        assert_eq!(ShowType::parse("tournament"), None);
    }
}
