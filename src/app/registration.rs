// ShowReg - app/registration.rs
//
// Registration, edit, and delete commands over the record store.
// Validation happens before any store access, so a rejected submission
// never mutates the persisted file.

use crate::app::session::SessionData;
use crate::app::store::RecordStore;
use crate::core::classify::{classify, is_mixed_breed};
use crate::core::model::{AgeCategory, CertStatus, ContestantRecord, Sex, ShowType};
use crate::util::error::{RegistrationError, Result};

/// Raw operator input for one registration.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub owner: String,
    pub phone: String,
    pub pet_name: String,
    pub sex: Sex,
    pub breed: String,
    /// Optional sub-breed for "Other Purebred" entries; encoded into the
    /// breed text in parenthetical form.
    pub sub_breed: Option<String>,
    pub color: String,
    pub status: CertStatus,
    pub age: AgeCategory,
}

/// Encode the final breed text from the selected breed and optional
/// sub-breed: "Other Purebred" plus "Ragdoll" becomes
/// "Other Purebred (Ragdoll)".
/// A sub-breed on any other breed selection is ignored.
pub fn resolve_breed(breed: &str, sub_breed: Option<&str>) -> String {
    match sub_breed {
        Some(sub) if breed.contains(crate::util::constants::OTHER_PUREBRED_MARKER)
            && !sub.trim().is_empty() =>
        {
            format!(
                "{} ({})",
                crate::util::constants::OTHER_PUREBRED_MARKER,
                sub.trim()
            )
        }
        _ => breed.to_string(),
    }
}

fn require_non_empty(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegistrationError::EmptyField { field }.into());
    }
    Ok(())
}

/// Validate a form and build the record to be admitted, computing the
/// class label with the show type active at this moment.
///
/// Status forcing happens here, before classification:
/// - mixed/household breeds are always Pet Class;
/// - breed-base mode forces the placeholder (status is not part of the
///   label in that mode).
pub fn build_record(form: &RegistrationForm, show_type: &str) -> Result<ContestantRecord> {
    require_non_empty(&form.owner, "owner")?;
    require_non_empty(&form.pet_name, "pet name")?;
    require_non_empty(&form.color, "color")?;

    let breed = resolve_breed(&form.breed, form.sub_breed.as_deref());

    let status = if is_mixed_breed(&breed) {
        CertStatus::PetClass
    } else if ShowType::parse(show_type) == Some(ShowType::BreedBase) {
        CertStatus::Unspecified
    } else {
        form.status
    };

    let class_label = classify(show_type, &breed, status, form.age);

    Ok(ContestantRecord {
        owner: form.owner.trim().to_string(),
        phone: form.phone.trim().to_string(),
        pet_name: form.pet_name.trim().to_string(),
        sex: form.sex,
        breed,
        color: form.color.trim().to_string(),
        status,
        age: form.age,
        class_label,
    })
}

/// Register one contestant: validate, classify, append, and advance the
/// session's form generation.
pub fn register(
    form: &RegistrationForm,
    session: &mut SessionData,
    store: &RecordStore,
) -> Result<ContestantRecord> {
    let record = build_record(form, &session.show_type)?;
    store.append(vec![record.clone()])?;
    session.advance_generation();

    tracing::info!(
        pet = %record.pet_name,
        class = %record.class_label,
        generation = session.form_generation,
        "Contestant registered"
    );
    Ok(record)
}

/// Field updates for an in-place edit. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct RecordUpdate {
    pub owner: Option<String>,
    pub phone: Option<String>,
    pub pet_name: Option<String>,
    pub sex: Option<Sex>,
    pub breed: Option<String>,
    pub color: Option<String>,
    pub status: Option<CertStatus>,
    pub age: Option<AgeCategory>,
}

/// Edit the record at `index` (0-based) and rewrite the store.
///
/// The class label is always re-derived from the current show type and the
/// record's (possibly updated) breed, status, and age. It is never taken
/// from the update itself.
pub fn edit(
    store: &RecordStore,
    show_type: &str,
    index: usize,
    update: &RecordUpdate,
) -> Result<ContestantRecord> {
    let mut records = store.load()?;
    let count = records.len();
    let record = records
        .get_mut(index)
        .ok_or(RegistrationError::NoSuchRecord { index, count })?;

    if let Some(owner) = &update.owner {
        record.owner = owner.clone();
    }
    if let Some(phone) = &update.phone {
        record.phone = phone.clone();
    }
    if let Some(pet_name) = &update.pet_name {
        record.pet_name = pet_name.clone();
    }
    if let Some(sex) = update.sex {
        record.sex = sex;
    }
    if let Some(breed) = &update.breed {
        record.breed = breed.clone();
    }
    if let Some(color) = &update.color {
        record.color = color.clone();
    }
    if let Some(status) = update.status {
        record.status = status;
    }
    if let Some(age) = update.age {
        record.age = age;
    }

    require_non_empty(&record.owner, "owner")?;
    require_non_empty(&record.pet_name, "pet name")?;
    require_non_empty(&record.color, "color")?;

    if is_mixed_breed(&record.breed) {
        record.status = CertStatus::PetClass;
    }
    record.class_label = classify(show_type, &record.breed, record.status, record.age);

    let edited = record.clone();
    store.overwrite(&records)?;
    tracing::info!(index, class = %edited.class_label, "Record edited");
    Ok(edited)
}

/// Delete the record at `index` (0-based) and rewrite the store.
pub fn delete(store: &RecordStore, index: usize) -> Result<ContestantRecord> {
    let mut records = store.load()?;
    let count = records.len();
    if index >= count {
        return Err(RegistrationError::NoSuchRecord { index, count }.into());
    }
    let removed = records.remove(index);
    store.overwrite(&records)?;
    tracing::info!(index, pet = %removed.pet_name, "Record deleted");
    Ok(removed)
}

// =============================================================================
// Unit tests
// =============================================================================
