// ShowReg - core/rank.rs
//
// Canonical contestant ordering. One stable sort assigns the global
// sequence numbers consumed by BOTH the catalogue and the tag sheets, so
// the two exports can never disagree on a contestant's number.

use crate::core::classify::breed_category;
use crate::core::model::{AgeCategory, CertStatus, ContestantRecord, ShowType};
use std::cmp::Ordering;

/// A record annotated with its 1-based global sequence number, assigned
/// after the full stable sort.
#[derive(Debug, Clone)]
pub struct RankedRecord {
    /// 1-based position in the canonical ordering. Shared by all exports.
    pub seq: usize,

    /// The underlying contestant record.
    pub record: ContestantRecord,
}

/// Group rank: purebreds before household mixes before domestics.
pub fn group_rank(breed: &str) -> u8 {
    match breed_category(breed) {
        "Domestik" => 3,
        "Household Pet (Mix)" => 2,
        _ => 1,
    }
}

/// Age rank: kittens before adults.
pub fn age_rank(age: AgeCategory) -> u8 {
    match age {
        AgeCategory::Kitten => 1,
        AgeCategory::Adult => 2,
    }
}

/// Status rank: pedigree, then non-pedigree, then everything else.
pub fn status_rank(status: CertStatus) -> u8 {
    match status {
        CertStatus::Pedigree => 1,
        CertStatus::NonPedigree => 2,
        _ => 3,
    }
}

/// Total order over records for the given show type.
///
/// Simple mode orders by (group, status, age, breed, colour); every other
/// mode, including an unrecognised show type, orders by
/// (group, breed, status, age, colour).
pub fn compare(a: &ContestantRecord, b: &ContestantRecord, show_type: &str) -> Ordering {
    let by_group = group_rank(&a.breed).cmp(&group_rank(&b.breed));
    let by_age = age_rank(a.age).cmp(&age_rank(b.age));
    let by_status = status_rank(a.status).cmp(&status_rank(b.status));
    let by_breed = a.breed.cmp(&b.breed);
    let by_color = a.color.cmp(&b.color);

    match ShowType::parse(show_type) {
        Some(ShowType::Simple) => by_group
            .then(by_status)
            .then(by_age)
            .then(by_breed)
            .then(by_color),
        _ => by_group
            .then(by_breed)
            .then(by_status)
            .then(by_age)
            .then(by_color),
    }
}

/// Sort records into the canonical order and assign global sequence numbers.
///
/// The sort is stable: records with identical full keys keep their relative
/// insertion order. Sequence numbers are 1-based and global across the whole
/// set (not reset per class).
pub fn sort_and_number(records: Vec<ContestantRecord>, show_type: &str) -> Vec<RankedRecord> {
    let mut sorted = records;
    sorted.sort_by(|a, b| compare(a, b, show_type));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, record)| RankedRecord { seq: i + 1, record })
        .collect()
}

// =============================================================================
// Unit tests
// =============================================================================
