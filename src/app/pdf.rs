// ShowReg - app/pdf.rs
//
// PDF rendering of the tag-sheet layout: A4 portrait pages, a 2x4 grid of
// outlined cards, Helvetica text, and an optional branding logo in each
// card header. A missing or undecodable logo degrades silently to a
// text-only header; it is a warning, never an error.

use crate::core::tags::{TagCard, TagSheet};
use crate::util::constants;
use crate::util::error::ExportError;
use printpdf::image_crate::DynamicImage;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfLayerReference, Point, Rgb,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Millimetres per typographic point.
const MM_PER_PT: f32 = 25.4 / 72.0;

/// DPI at which the branding logo is embedded.
const LOGO_DPI: f32 = 300.0;

/// Branding context shared by every card header.
pub struct Branding {
    /// Organisation name printed on each card.
    pub organisation: String,

    /// Decoded logo image, if the configured asset was present and readable.
    pub logo: Option<DynamicImage>,
}

impl Branding {
    /// Resolve branding from config values. An absent or unreadable logo
    /// file logs a warning and falls back to the text-only header.
    pub fn resolve(organisation: &str, logo_path: Option<&Path>) -> Self {
        let logo = logo_path.and_then(|path| match printpdf::image_crate::open(path) {
            Ok(img) => {
                tracing::debug!(path = %path.display(), "Branding logo loaded");
                Some(img)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Branding logo unavailable; using text-only tag headers"
                );
                None
            }
        });
        Self {
            organisation: organisation.to_string(),
            logo,
        }
    }
}

/// Card cell dimensions derived from the page geometry.
fn card_size() -> (f32, f32) {
    let grid_width = constants::PAGE_WIDTH_MM - 2.0 * constants::PAGE_MARGIN_MM;
    let grid_height = constants::PAGE_HEIGHT_MM - 2.0 * constants::PAGE_MARGIN_MM;
    (
        grid_width / constants::TAG_GRID_COLUMNS as f32,
        grid_height / constants::TAG_GRID_ROWS as f32,
    )
}

/// Render the tag sheets to a PDF file at `path`.
///
/// An empty layout still produces a valid single blank page so the output
/// is always a well-formed document.
pub fn export_tag_sheets(
    sheet: &TagSheet,
    branding: &Branding,
    path: &Path,
) -> Result<(), ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        format!("{} Tag Sheets", branding.organisation),
        Mm(constants::PAGE_WIDTH_MM),
        Mm(constants::PAGE_HEIGHT_MM),
        "cards",
    );

    let pdf_err = |source: printpdf::Error| ExportError::Pdf {
        path: path.to_path_buf(),
        source,
    };

    let font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;

    for (page_idx, tag_page) in sheet.pages.iter().enumerate() {
        let layer = if page_idx == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(
                Mm(constants::PAGE_WIDTH_MM),
                Mm(constants::PAGE_HEIGHT_MM),
                "cards",
            );
            doc.get_page(page).get_layer(layer)
        };

        for card in &tag_page.cards {
            draw_card(&layer, card, branding, &font, &font_bold);
        }
    }

    let file = File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    doc.save(&mut BufWriter::new(file)).map_err(pdf_err)?;

    tracing::info!(path = %path.display(), pages = sheet.pages.len().max(1), "Tag sheets exported");
    Ok(())
}

/// Draw one card at its grid position. All offsets are fixed so every card
/// aligns visually regardless of text length.
fn draw_card(
    layer: &PdfLayerReference,
    card: &TagCard,
    branding: &Branding,
    font: &IndirectFontRef,
    font_bold: &IndirectFontRef,
) {
    let (card_w, card_h) = card_size();
    let x0 = constants::PAGE_MARGIN_MM + card.column as f32 * card_w;
    let y_top = constants::PAGE_HEIGHT_MM - constants::PAGE_MARGIN_MM - card.row as f32 * card_h;
    let y0 = y_top - card_h;

    // Card outline.
    layer.set_outline_color(Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None)));
    layer.set_outline_thickness(0.4);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x0), Mm(y0)), false),
            (Point::new(Mm(x0 + card_w), Mm(y0)), false),
            (Point::new(Mm(x0 + card_w), Mm(y_top)), false),
            (Point::new(Mm(x0), Mm(y_top)), false),
        ],
        is_closed: true,
    });

    // Header block: optional logo, then the organisation name. The text
    // shifts right when a logo is present.
    let mut header_x = x0 + constants::TAG_LABEL_OFFSET_MM;
    if let Some(logo) = &branding.logo {
        let logo_mm_w = logo.width() as f32 * 25.4 / LOGO_DPI;
        let scale = constants::TAG_LOGO_WIDTH_MM / logo_mm_w;
        let logo_mm_h = logo.height() as f32 * 25.4 / LOGO_DPI * scale;
        Image::from_dynamic_image(logo).add_to_layer(
            layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(header_x)),
                translate_y: Some(Mm(y_top - 5.0 - logo_mm_h)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(LOGO_DPI),
                ..Default::default()
            },
        );
        header_x += constants::TAG_LOGO_WIDTH_MM + 2.0;
    }
    layer.use_text(
        branding.organisation.as_str(),
        constants::TAG_HEADER_FONT_PT,
        Mm(header_x),
        Mm(y_top - 7.0),
        font_bold,
    );

    // Top-right age-category annotation.
    let annotation_w = text_width_mm(card.age_label, constants::TAG_ANNOTATION_FONT_PT);
    layer.use_text(
        card.age_label,
        constants::TAG_ANNOTATION_FONT_PT,
        Mm(x0 + card_w - annotation_w - 3.0),
        Mm(y_top - 6.0),
        font,
    );

    // Large centred sequence number.
    let seq = card.sequence.to_string();
    let seq_w = text_width_mm(&seq, constants::TAG_SEQUENCE_FONT_PT);
    layer.use_text(
        seq,
        constants::TAG_SEQUENCE_FONT_PT,
        Mm(x0 + (card_w - seq_w) / 2.0),
        Mm(y0 + card_h * 0.48),
        font_bold,
    );

    // Three detail lines with fixed label/value column offsets.
    let details = [
        ("Name", card.name.as_str()),
        ("Breed", card.breed_color.as_str()),
        ("Sex", card.sex.as_str()),
    ];
    for (i, (label, value)) in details.iter().enumerate() {
        let y = y0 + 16.0 - i as f32 * 5.5;
        layer.use_text(
            format!("{label}:"),
            constants::TAG_DETAIL_FONT_PT,
            Mm(x0 + constants::TAG_LABEL_OFFSET_MM),
            Mm(y),
            font_bold,
        );
        layer.use_text(
            *value,
            constants::TAG_DETAIL_FONT_PT,
            Mm(x0 + constants::TAG_VALUE_OFFSET_MM),
            Mm(y),
            font,
        );
    }
}

/// Approximate rendered width of `text` in millimetres. Helvetica glyphs
/// average close to half an em; accurate metrics are not needed for
/// centring a number or right-aligning a short annotation.
fn text_width_mm(text: &str, font_pt: f32) -> f32 {
    text.chars().count() as f32 * font_pt * 0.5 * MM_PER_PT
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{AgeCategory, CertStatus, ContestantRecord, Sex};
    use crate::core::rank::sort_and_number;
    use crate::core::tags::build_tag_sheets;
    use tempfile::TempDir;

    fn ranked(n: usize) -> TagSheet {
        let records: Vec<ContestantRecord> = (0..n)
            .map(|i| ContestantRecord {
                owner: format!("owner-{i}"),
                phone: String::new(),
                pet_name: format!("cat-{i}"),
                sex: Sex::Female,
                breed: "Persian".to_string(),
                color: "White".to_string(),
                status: CertStatus::Pedigree,
                age: AgeCategory::Adult,
                class_label: "Pedigree - Adult".to_string(),
            })
            .collect();
        build_tag_sheets(&sort_and_number(records, "Simple"))
    }

    fn branding() -> Branding {
        Branding {
            organisation: "Smart Groomer Indonesia".to_string(),
            logo: None,
        }
    }

    #[test]
    fn export_writes_a_pdf_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tags.pdf");
        export_tag_sheets(&ranked(11), &branding(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn empty_layout_still_produces_a_valid_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.pdf");
        export_tag_sheets(&ranked(0), &branding(), &path).unwrap();
        assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn missing_logo_resolves_to_text_only_branding() {
        let b = Branding::resolve(
            "Smart Groomer Indonesia",
            Some(Path::new("/nonexistent/logo.png")),
        );
        assert!(b.logo.is_none());
        assert_eq!(b.organisation, "Smart Groomer Indonesia");
    }

    #[test]
    fn card_geometry_fills_the_grid_area() {
        let (w, h) = card_size();
        assert!((w * constants::TAG_GRID_COLUMNS as f32
            - (constants::PAGE_WIDTH_MM - 2.0 * constants::PAGE_MARGIN_MM))
            .abs()
            < f32::EPSILON);
        assert!((h * constants::TAG_GRID_ROWS as f32
            - (constants::PAGE_HEIGHT_MM - 2.0 * constants::PAGE_MARGIN_MM))
            .abs()
            < f32::EPSILON);
    }
}
