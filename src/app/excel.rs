// ShowReg - app/excel.rs
//
// XLSX rendering of the catalogue document: one worksheet per class label
// with a merged title row, a styled header row, bordered body cells, and
// auto-sized columns.

use crate::core::catalog::CatalogDocument;
use crate::util::constants;
use crate::util::error::ExportError;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use std::path::Path;

/// Derive a legal worksheet name from a class label: truncated to the
/// fixed budget, with forbidden filesystem/workbook characters stripped.
pub fn sanitize_sheet_name(label: &str) -> String {
    let cleaned: String = label
        .chars()
        .filter(|c| !constants::SHEET_NAME_FORBIDDEN.contains(c))
        .collect();
    let truncated: String = cleaned
        .trim()
        .chars()
        .take(constants::SHEET_NAME_MAX_CHARS)
        .collect();
    let truncated = truncated.trim_end().to_string();
    if truncated.is_empty() {
        "Class".to_string()
    } else {
        truncated
    }
}

/// Build the styled workbook in memory.
pub fn build_workbook(doc: &CatalogDocument) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();

    let fmt_title = Format::new()
        .set_bold()
        .set_font_size(14)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_background_color(Color::RGB(0xDDEBF7));
    let fmt_header = Format::new()
        .set_bold()
        .set_font_size(11)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_background_color(Color::RGB(0xFFF2CC))
        .set_text_wrap();
    let fmt_body = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    for page in &doc.pages {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sanitize_sheet_name(&page.label))?;

        let last_col = (page.columns.len() - 1) as u16;
        worksheet.merge_range(0, 0, 0, last_col, &page.title, &fmt_title)?;

        for (col, name) in page.columns.iter().enumerate() {
            worksheet.write_string_with_format(1, col as u16, *name, &fmt_header)?;
        }

        for (row_idx, row) in page.rows.iter().enumerate() {
            for (col_idx, value) in row.iter().enumerate() {
                worksheet.write_string_with_format(
                    (row_idx + 2) as u32,
                    col_idx as u16,
                    value,
                    &fmt_body,
                )?;
            }
        }

        for (col, width) in page.column_widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width as f64)?;
        }
    }

    Ok(workbook)
}

/// Render the catalogue document and save it to `path`.
pub fn export_catalog(doc: &CatalogDocument, path: &Path) -> Result<(), ExportError> {
    let mut workbook = build_workbook(doc).map_err(|e| ExportError::Spreadsheet {
        path: path.to_path_buf(),
        source: e,
    })?;
    workbook.save(path).map_err(|e| ExportError::Spreadsheet {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), sheets = doc.pages.len(), "Catalogue exported");
    Ok(())
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::build_catalog;
    use crate::core::classify::classify;
    use crate::core::model::{AgeCategory, CertStatus, ContestantRecord, Sex};
    use crate::core::rank::sort_and_number;

    #[test]
    fn sheet_names_strip_forbidden_characters() {
        assert_eq!(
            sanitize_sheet_name("Household Pet (Mix) - Adult"),
            "Household Pet Mix - Adult"
        );
        assert_eq!(sanitize_sheet_name("A/B:C[D]E"), "ABCDE");
    }

    #[test]
    fn sheet_names_truncate_to_budget() {
        let long = "Other Purebred Non-Pedigree - Kitten Division";
        let name = sanitize_sheet_name(long);
        assert!(name.chars().count() <= constants::SHEET_NAME_MAX_CHARS);
    }

    #[test]
    fn fully_stripped_label_falls_back() {
        assert_eq!(sanitize_sheet_name("[]//::"), "Class");
    }

    #[test]
    fn workbook_builds_with_one_sheet_per_class() {
        let records: Vec<ContestantRecord> = [
            ("Sari", "Persian", CertStatus::Pedigree),
            ("Budi", "Bengal", CertStatus::NonPedigree),
        ]
        .into_iter()
        .map(|(owner, breed, status)| ContestantRecord {
            owner: owner.to_string(),
            phone: "0812".to_string(),
            pet_name: format!("{owner}-cat"),
            sex: Sex::Male,
            breed: breed.to_string(),
            color: "Brown".to_string(),
            status,
            age: AgeCategory::Adult,
            class_label: classify("Simple", breed, status, AgeCategory::Adult),
        })
        .collect();

        let ranked = sort_and_number(records, "Simple");
        let doc = build_catalog(&ranked, "Simple");
        let mut workbook = build_workbook(&doc).unwrap();

        let bytes = workbook.save_to_buffer().unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn empty_document_builds_an_empty_workbook() {
        // No pages is a valid degenerate case; saving is the caller's choice.
        let workbook = build_workbook(&CatalogDocument::default());
        assert!(workbook.is_ok());
    }
}
