// ShowReg - app/import.rs
//
// Admin import: merge an exported CSV or XLSX file into the store.
// Rows are appended verbatim; the only validation is column presence,
// and any failure leaves the store unchanged (rows are fully parsed
// before the single append write).

use crate::app::store::RecordStore;
use crate::core::export::read_records;
use crate::core::model::{AgeCategory, CertStatus, ContestantRecord, Sex};
use crate::util::constants;
use crate::util::error::{ImportError, StoreError};
use calamine::{open_workbook_auto, Data, Reader};
use std::fs::File;
use std::path::Path;

/// Import `path` into the store. Format is chosen by extension:
/// `.csv` for the tabular backup format, `.xlsx` for a spreadsheet
/// workbook (first worksheet only). Returns the number of appended rows.
pub fn import_file(store: &RecordStore, path: &Path) -> Result<usize, ImportError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let records = match extension.as_deref() {
        Some("csv") => read_csv(path)?,
        Some("xlsx") => read_xlsx(path)?,
        _ => {
            return Err(ImportError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let appended = records.len();
    store.append(records).map_err(|e| match e {
        StoreError::Csv { path, source } => ImportError::Csv { path, source },
        StoreError::Io { path, source } => ImportError::Io { path, source },
        StoreError::MissingColumn { path, column } => ImportError::MissingColumn { path, column },
    })?;

    tracing::info!(path = %path.display(), rows = appended, "Import merged into store");
    Ok(appended)
}

fn read_csv(path: &Path) -> Result<Vec<ContestantRecord>, ImportError> {
    let file = File::open(path).map_err(|e| ImportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_records(file, path).map_err(|e| match e {
        StoreError::Csv { path, source } => ImportError::Csv { path, source },
        StoreError::Io { path, source } => ImportError::Io { path, source },
        StoreError::MissingColumn { path, column } => ImportError::MissingColumn { path, column },
    })
}

fn read_xlsx(path: &Path) -> Result<Vec<ContestantRecord>, ImportError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| ImportError::Workbook {
        path: path.to_path_buf(),
        source: e,
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ImportError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| ImportError::Workbook {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .ok_or_else(|| ImportError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .iter()
        .map(cell_text)
        .collect();

    let index_of = |column: &str| header.iter().position(|h| h == column);

    // Same column-presence rule as the CSV codec: Sex may be absent and is
    // backfilled; every other column is required.
    let mut indices = Vec::with_capacity(constants::COLUMNS.len());
    for column in constants::COLUMNS {
        match index_of(column) {
            Some(i) => indices.push(Some(i)),
            None if column == constants::OPTIONAL_COLUMN => indices.push(None),
            None => {
                return Err(ImportError::MissingColumn {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                })
            }
        }
    }

    let cell = |row: &[Data], slot: Option<usize>| -> String {
        slot.and_then(|i| row.get(i))
            .map(cell_text)
            .unwrap_or_else(|| constants::PLACEHOLDER.to_string())
    };

    let mut records = Vec::new();
    for row in rows {
        records.push(ContestantRecord {
            owner: cell(row, indices[0]),
            phone: cell(row, indices[1]),
            pet_name: cell(row, indices[2]),
            sex: Sex::parse(&cell(row, indices[3])),
            breed: cell(row, indices[4]),
            color: cell(row, indices[5]),
            status: CertStatus::parse(&cell(row, indices[6])),
            age: AgeCategory::parse(&cell(row, indices[7])),
            class_label: cell(row, indices[8]),
        });
    }

    Ok(records)
}

/// Render a workbook cell as the text the CSV codec would have seen.
/// Phone numbers frequently arrive as numeric cells; integral floats are
/// printed without the trailing ".0".
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn csv_import_appends_to_existing_store() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("contestants.csv"));

        let import = dir.path().join("old_data.csv");
        std::fs::write(
            &import,
            "Owner,Phone,PetName,Sex,Breed,Color,Status,AgeCategory,ClassLabel\n\
             Sari,0812,Mochi,Female,Persian,Red,Pedigree,Adult,Pedigree - Adult\n\
             Budi,0813,Oyen,Male,Domestik,Orange,Pet Class,Kitten,Domestik - Kitten\n",
        )
        .unwrap();

        assert_eq!(import_file(&store, &import).unwrap(), 2);
        assert_eq!(store.load().unwrap().len(), 2);

        // Importing again appends, never replaces.
        import_file(&store, &import).unwrap();
        assert_eq!(store.load().unwrap().len(), 4);
    }

    #[test]
    fn unsupported_extension_is_rejected_and_store_untouched() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("contestants.csv"));
        let bogus = dir.path().join("data.ods");
        std::fs::write(&bogus, b"whatever").unwrap();

        let err = import_file(&store, &bogus).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat { .. }));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn csv_missing_required_column_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("contestants.csv"));
        let import = dir.path().join("broken.csv");
        std::fs::write(&import, "Owner,Phone\nSari,0812\n").unwrap();

        let err = import_file(&store, &import).unwrap_err();
        assert!(matches!(err, ImportError::MissingColumn { .. }));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn numeric_cell_text_drops_trailing_zero() {
        assert_eq!(cell_text(&Data::Float(628123.0)), "628123");
        assert_eq!(cell_text(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_text(&Data::String("Mochi".to_string())), "Mochi");
        assert_eq!(cell_text(&Data::Empty), "");
    }
}
