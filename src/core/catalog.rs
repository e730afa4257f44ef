// ShowReg - core/catalog.rs
//
// Catalogue document builder. Pure transformation from the canonical
// ranked sequence to a page-per-class document model; XLSX rendering
// lives in app/excel.rs.

use crate::core::model::ShowType;
use crate::core::rank::RankedRecord;
use crate::util::constants;

/// A formatted catalogue: one page per distinct class label, in the order
/// labels are first encountered after sorting.
#[derive(Debug, Clone, Default)]
pub struct CatalogDocument {
    pub pages: Vec<CatalogPage>,
}

/// One class-label page: uppercased title, header row, and one body row per
/// record in that class in global sort order.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    /// Class label as computed (original casing).
    pub label: String,

    /// Uppercased label rendered as the merged title row.
    pub title: String,

    /// Column header names.
    pub columns: Vec<&'static str>,

    /// Body rows, one per record, cells aligned with `columns`.
    /// The first cell is the global sequence number.
    pub rows: Vec<Vec<String>>,

    /// Per-column width: longest of header/data plus fixed padding.
    pub column_widths: Vec<usize>,
}

/// Column headers for the given show type. In breed-base mode the Status
/// column is omitted entirely; status is a forced placeholder there and
/// carries no information.
fn columns_for(show_type: &str) -> Vec<&'static str> {
    let mut cols = vec![
        "Seq",
        "Owner",
        "Phone",
        "PetName",
        "Sex",
        "Breed",
        "Color",
        "Status",
        "AgeCategory",
        "ClassLabel",
    ];
    if ShowType::parse(show_type) == Some(ShowType::BreedBase) {
        cols.retain(|c| *c != "Status");
    }
    cols
}

fn row_for(ranked: &RankedRecord, columns: &[&'static str]) -> Vec<String> {
    let r = &ranked.record;
    columns
        .iter()
        .map(|col| match *col {
            "Seq" => ranked.seq.to_string(),
            "Owner" => r.owner.clone(),
            "Phone" => r.phone.clone(),
            "PetName" => r.pet_name.clone(),
            "Sex" => r.sex.label().to_string(),
            "Breed" => r.breed.clone(),
            "Color" => r.color.clone(),
            "Status" => r.status.label().to_string(),
            "AgeCategory" => r.age.label().to_string(),
            "ClassLabel" => r.class_label.clone(),
            other => unreachable!("unknown catalogue column {other}"),
        })
        .collect()
}

/// Build the catalogue document from the shared ranked sequence.
///
/// Empty input produces an empty document (no pages). Sequence numbers are
/// taken from the ranked records as-is; they are global across the whole
/// set and never reset per page.
pub fn build_catalog(ranked: &[RankedRecord], show_type: &str) -> CatalogDocument {
    let columns = columns_for(show_type);
    let mut pages: Vec<CatalogPage> = Vec::new();

    for entry in ranked {
        let label = &entry.record.class_label;
        let page = match pages.iter_mut().find(|p| p.label == *label) {
            Some(page) => page,
            None => {
                pages.push(CatalogPage {
                    label: label.clone(),
                    title: label.to_uppercase(),
                    columns: columns.clone(),
                    rows: Vec::new(),
                    column_widths: Vec::new(),
                });
                pages.last_mut().expect("just pushed")
            }
        };
        page.rows.push(row_for(entry, &columns));
    }

    for page in &mut pages {
        page.column_widths = auto_widths(&page.columns, &page.rows);
    }

    CatalogDocument { pages }
}

/// Auto-size each column to the longest value (header or data) plus the
/// fixed padding margin.
fn auto_widths(columns: &[&'static str], rows: &[Vec<String>]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let data_max = rows
                .iter()
                .map(|row| row[i].chars().count())
                .max()
                .unwrap_or(0);
            data_max.max(header.chars().count()) + constants::COLUMN_WIDTH_PADDING
        })
        .collect()
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{AgeCategory, CertStatus, ContestantRecord, Sex};
    use crate::core::rank::sort_and_number;

    fn record(owner: &str, breed: &str, status: CertStatus, age: AgeCategory) -> ContestantRecord {
        ContestantRecord {
            owner: owner.to_string(),
            phone: "0800-1234".to_string(),
            pet_name: format!("{owner}-cat"),
            sex: Sex::Female,
            breed: breed.to_string(),
            color: "Blue".to_string(),
            status,
            age,
            class_label: crate::core::classify::classify("Simple", breed, status, age),
        }
    }

    #[test]
    fn empty_input_produces_empty_document() {
        let doc = build_catalog(&[], "Simple");
        assert!(doc.pages.is_empty());
    }

    #[test]
    fn one_page_per_class_label_in_sorted_encounter_order() {
        let records = vec![
            record("a", "Persian", CertStatus::NonPedigree, AgeCategory::Adult),
            record("b", "Persian", CertStatus::Pedigree, AgeCategory::Adult),
            record("c", "Bengal", CertStatus::Pedigree, AgeCategory::Adult),
        ];
        let ranked = sort_and_number(records, "Simple");
        let doc = build_catalog(&ranked, "Simple");

        let labels: Vec<_> = doc.pages.iter().map(|p| p.label.as_str()).collect();
        // Pedigree sorts first, so its page is encountered first.
        assert_eq!(labels, ["Pedigree - Adult", "Non-Pedigree - Adult"]);
        assert_eq!(doc.pages[0].rows.len(), 2);
        assert_eq!(doc.pages[1].rows.len(), 1);
        assert_eq!(doc.pages[0].title, "PEDIGREE - ADULT");
    }

    #[test]
    fn sequence_numbers_are_global_not_per_page() {
        let records = vec![
            record("a", "Persian", CertStatus::NonPedigree, AgeCategory::Adult),
            record("b", "Persian", CertStatus::Pedigree, AgeCategory::Adult),
        ];
        let ranked = sort_and_number(records, "Simple");
        let doc = build_catalog(&ranked, "Simple");
        // Second page's only row carries sequence number 2, not 1.
        assert_eq!(doc.pages[1].rows[0][0], "2");
    }

    #[test]
    fn breed_base_mode_omits_status_column() {
        let records = vec![record("a", "Persian", CertStatus::Unspecified, AgeCategory::Adult)];
        let ranked = sort_and_number(records, "Breed-base");
        let doc = build_catalog(&ranked, "Breed-base");
        assert!(!doc.pages[0].columns.contains(&"Status"));
        assert_eq!(doc.pages[0].columns.len(), doc.pages[0].rows[0].len());
    }

    #[test]
    fn column_widths_cover_longest_value_plus_padding() {
        let mut long = record("somebody with a very long name", "Persian", CertStatus::Pedigree, AgeCategory::Adult);
        long.owner = "somebody with a very long name".to_string();
        let ranked = sort_and_number(vec![long], "Simple");
        let doc = build_catalog(&ranked, "Simple");
        let page = &doc.pages[0];

        let owner_idx = page.columns.iter().position(|c| *c == "Owner").unwrap();
        assert_eq!(
            page.column_widths[owner_idx],
            "somebody with a very long name".len() + constants::COLUMN_WIDTH_PADDING
        );
        // Header longer than data: header wins.
        let age_idx = page.columns.iter().position(|c| *c == "AgeCategory").unwrap();
        assert_eq!(
            page.column_widths[age_idx],
            "AgeCategory".len() + constants::COLUMN_WIDTH_PADDING
        );
    }
}
