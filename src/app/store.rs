// ShowReg - app/store.rs
//
// The persisted contestant store: one CSV file, read and rewritten
// wholesale on every operation.
//
// Design principles:
// - Every write is atomic (write to temp, rename over final) so a crash
//   during save never corrupts the previous good store.
// - Exactly one writer at a time is assumed; concurrent operator sessions
//   are out of scope (last writer wins, no conflict detection).
// - Loading a file that predates the Sex column backfills a placeholder
//   rather than failing.

use crate::core::export::{read_records, write_records};
use crate::core::model::ContestantRecord;
use crate::util::error::StoreError;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Handle to the persisted store file. Holds no cached state: every
/// operation re-reads the file so the handle always reflects disk.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted CSV file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full record set. A missing file is an empty store, not an
    /// error (first run).
    pub fn load(&self) -> Result<Vec<ContestantRecord>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No store file yet; empty set");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        read_records(file, &self.path)
    }

    /// Append records: read the current set, concatenate, rewrite the file.
    pub fn append(&self, new_records: Vec<ContestantRecord>) -> Result<usize, StoreError> {
        let mut records = self.load()?;
        records.extend(new_records);
        self.overwrite(&records)?;
        Ok(records.len())
    }

    /// Replace the persisted set wholesale. Used after edit and delete.
    ///
    /// Atomic: the new content is written to a sibling temp file and
    /// renamed over the original, so a failure mid-write leaves the prior
    /// content intact.
    pub fn overwrite(&self, records: &[ContestantRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let tmp = self.path.with_extension("csv.tmp");
        let file = File::create(&tmp).map_err(|e| StoreError::Io {
            path: tmp.clone(),
            source: e,
        })?;
        write_records(records, BufWriter::new(file), &self.path)?;

        std::fs::rename(&tmp, &self.path).map_err(|e| {
            // Clean up the temp file on failure; ignore any secondary error.
            let _ = std::fs::remove_file(&tmp);
            StoreError::Io {
                path: self.path.clone(),
                source: e,
            }
        })?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "Store written");
        Ok(())
    }

    /// Delete the persisted artifact entirely. A missing file is fine.
    pub fn reset(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "Store reset");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{AgeCategory, CertStatus, Sex};
    use tempfile::TempDir;

    fn sample(owner: &str) -> ContestantRecord {
        ContestantRecord {
            owner: owner.to_string(),
            phone: "0800".to_string(),
            pet_name: format!("{owner}-cat"),
            sex: Sex::Male,
            breed: "Bengal".to_string(),
            color: "Spotted".to_string(),
            status: CertStatus::Pedigree,
            age: AgeCategory::Kitten,
            class_label: "Pedigree - Kitten".to_string(),
        }
    }

    #[test]
    fn load_of_missing_file_is_empty_set() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("contestants.csv"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn append_accumulates_across_calls() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("contestants.csv"));

        assert_eq!(store.append(vec![sample("a")]).unwrap(), 1);
        assert_eq!(store.append(vec![sample("b"), sample("c")]).unwrap(), 3);

        let records = store.load().unwrap();
        let owners: Vec<_> = records.iter().map(|r| r.owner.as_str()).collect();
        assert_eq!(owners, ["a", "b", "c"]);
    }

    /// overwrite(load()) is a no-op on file content.
    #[test]
    fn overwrite_of_loaded_set_is_byte_stable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contestants.csv");
        let store = RecordStore::new(&path);
        store.append(vec![sample("a"), sample("b")]).unwrap();

        let before = std::fs::read(&path).unwrap();
        let records = store.load().unwrap();
        store.overwrite(&records).unwrap();
        let after = std::fs::read(&path).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn legacy_file_without_sex_column_loads_with_placeholder() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contestants.csv");
        std::fs::write(
            &path,
            "Owner,Phone,PetName,Breed,Color,Status,AgeCategory,ClassLabel\n\
             Sari,0812,Mochi,Persian,Red,Pedigree,Adult,Pedigree - Adult\n",
        )
        .unwrap();

        let store = RecordStore::new(&path);
        let records = store.load().unwrap();
        assert_eq!(records[0].sex, Sex::Unspecified);

        // The next write upgrades the file to the full schema.
        store.overwrite(&records).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Owner,Phone,PetName,Sex,"));
        assert!(content.contains(",-,Persian,"));
    }

    #[test]
    fn reset_removes_the_file_and_tolerates_absence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contestants.csv");
        let store = RecordStore::new(&path);

        store.append(vec![sample("a")]).unwrap();
        assert!(path.exists());
        store.reset().unwrap();
        assert!(!path.exists());
        // Second reset is not an error.
        store.reset().unwrap();
    }

    #[test]
    fn failed_write_leaves_prior_content_intact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contestants.csv");
        let store = RecordStore::new(&path);
        store.append(vec![sample("a")]).unwrap();
        let before = std::fs::read(&path).unwrap();

        // Leftover temp file from a simulated crash must not corrupt the store.
        std::fs::write(path.with_extension("csv.tmp"), b"garbage").unwrap();
        store.append(vec![sample("b")]).unwrap();

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_ne!(std::fs::read(&path).unwrap(), before);
    }
}
