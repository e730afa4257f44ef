// ShowReg - core/export.rs
//
// CSV codec for the persisted store and the backup dump (identical format).
// Core layer: reads from any Read, writes to any Write; file handling is
// the app layer's concern.

use crate::core::model::{AgeCategory, CertStatus, ContestantRecord, Sex};
use crate::util::constants;
use crate::util::error::StoreError;
use std::io::{Read, Write};
use std::path::Path;

/// Write records as CSV in the canonical column order, header row first.
///
/// Every whole-file write goes through here, so a load/overwrite cycle with
/// an unchanged record set reproduces the file byte for byte.
pub fn write_records<W: Write>(
    records: &[ContestantRecord],
    writer: W,
    path: &Path,
) -> Result<usize, StoreError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(constants::COLUMNS)
        .map_err(|e| StoreError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for record in records {
        csv_writer
            .write_record([
                record.owner.as_str(),
                record.phone.as_str(),
                record.pet_name.as_str(),
                record.sex.label(),
                record.breed.as_str(),
                record.color.as_str(),
                record.status.label(),
                record.age.label(),
                record.class_label.as_str(),
            ])
            .map_err(|e| StoreError::Csv {
                path: path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Read records from CSV content.
///
/// Columns are located by header name, so column order in the source file
/// does not matter. A file predating the Sex column loads with sex
/// backfilled to the placeholder; load must never fail solely because of
/// that missing optional column. Any other missing column is an error.
pub fn read_records<R: Read>(reader: R, path: &Path) -> Result<Vec<ContestantRecord>, StoreError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| StoreError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();

    let index_of = |column: &str| headers.iter().position(|h| h == column);

    let mut indices = Vec::with_capacity(constants::COLUMNS.len());
    for column in constants::COLUMNS {
        match index_of(column) {
            Some(i) => indices.push(Some(i)),
            None if column == constants::OPTIONAL_COLUMN => indices.push(None),
            None => {
                return Err(StoreError::MissingColumn {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                })
            }
        }
    }

    let cell = |row: &csv::StringRecord, slot: Option<usize>| -> String {
        slot.and_then(|i| row.get(i))
            .unwrap_or(constants::PLACEHOLDER)
            .to_string()
    };

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|e| StoreError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;

        records.push(ContestantRecord {
            owner: cell(&row, indices[0]),
            phone: cell(&row, indices[1]),
            pet_name: cell(&row, indices[2]),
            sex: Sex::parse(&cell(&row, indices[3])),
            breed: cell(&row, indices[4]),
            color: cell(&row, indices[5]),
            status: CertStatus::parse(&cell(&row, indices[6])),
            age: AgeCategory::parse(&cell(&row, indices[7])),
            class_label: cell(&row, indices[8]),
        });
    }

    Ok(records)
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> ContestantRecord {
        ContestantRecord {
            owner: "Sari".to_string(),
            phone: "0812-000".to_string(),
            pet_name: "Mochi".to_string(),
            sex: Sex::Female,
            breed: "Persian".to_string(),
            color: "Red Tabby".to_string(),
            status: CertStatus::Pedigree,
            age: AgeCategory::Adult,
            class_label: "Pedigree - Adult".to_string(),
        }
    }

    #[test]
    fn write_emits_canonical_header() {
        let mut buf = Vec::new();
        let count = write_records(&[sample()], &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("Owner,Phone,PetName,Sex,Breed,Color,Status,AgeCategory,ClassLabel\n"));
        assert!(output.contains("Sari,0812-000,Mochi,Female,Persian,Red Tabby,Pedigree,Adult,Pedigree - Adult"));
    }

    /// write(read(x)) reproduces x byte for byte for canonical files.
    #[test]
    fn round_trip_is_byte_stable() {
        let mut first = Vec::new();
        write_records(&[sample()], &mut first, &PathBuf::from("a.csv")).unwrap();

        let loaded = read_records(first.as_slice(), &PathBuf::from("a.csv")).unwrap();
        let mut second = Vec::new();
        write_records(&loaded, &mut second, &PathBuf::from("b.csv")).unwrap();

        assert_eq!(first, second);
    }

    /// A file written before the Sex column existed loads with a
    /// placeholder, not an error.
    #[test]
    fn missing_sex_column_is_backfilled() {
        let legacy = "Owner,Phone,PetName,Breed,Color,Status,AgeCategory,ClassLabel\n\
                      Sari,0812,Mochi,Persian,Red,Pedigree,Adult,Pedigree - Adult\n";
        let records = read_records(legacy.as_bytes(), &PathBuf::from("old.csv")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sex, Sex::Unspecified);
        assert_eq!(records[0].owner, "Sari");
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let broken = "Owner,Phone,PetName,Sex,Breed,Color,Status,AgeCategory\n";
        let err = read_records(broken.as_bytes(), &PathBuf::from("bad.csv")).unwrap_err();
        assert!(
            matches!(err, StoreError::MissingColumn { ref column, .. } if column == "ClassLabel"),
            "expected MissingColumn(ClassLabel), got {err:?}"
        );
    }

    #[test]
    fn columns_are_located_by_name_not_position() {
        let shuffled = "ClassLabel,Owner,PetName,Phone,Color,Breed,AgeCategory,Status,Sex\n\
                        Pedigree - Adult,Sari,Mochi,0812,Red,Persian,Adult,Pedigree,Female\n";
        let records = read_records(shuffled.as_bytes(), &PathBuf::from("s.csv")).unwrap();
        assert_eq!(records[0].owner, "Sari");
        assert_eq!(records[0].breed, "Persian");
        assert_eq!(records[0].sex, Sex::Female);
    }
}
