// ShowReg - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ShowReg";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ShowReg";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default organisation name printed on tag-sheet headers.
/// Override with `[branding] organisation` in config.toml.
pub const DEFAULT_ORGANISATION: &str = "Smart Groomer Indonesia";

// =============================================================================
// Record store
// =============================================================================

/// File name of the persisted contestant store (CSV, header row, UTF-8).
pub const STORE_FILE_NAME: &str = "contestants.csv";

/// Canonical column order of the persisted store and the backup export.
/// Every whole-file write emits exactly these columns in this order so that
/// `overwrite(load())` is byte-stable.
pub const COLUMNS: [&str; 9] = [
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

/// The one column that may legitimately be absent from an older store file.
/// Records loaded from such a file get the sex placeholder instead of failing.
pub const OPTIONAL_COLUMN: &str = "Sex";

// =============================================================================
// Classification
// =============================================================================

/// Substring marking a breed entry that carries a parenthetical sub-breed,
/// e.g. "Other Purebred (Ragdoll)". Collapsed to this token for labelling.
pub const OTHER_PUREBRED_MARKER: &str = "Other Purebred";

/// Breeds that always form their own per-age class regardless of show type.
pub const MIXED_BREEDS: [&str; 2] = ["Household Pet (Mix)", "Domestik"];

/// Class label returned when the configured show type matches no known mode.
pub const FALLBACK_CLASS_LABEL: &str = "General";

/// Placeholder rendered for an unspecified enum value (sex backfill,
/// status in breed-base mode).
pub const PLACEHOLDER: &str = "-";

// =============================================================================
// Catalogue export
// =============================================================================

/// Fixed padding added to the longest cell when auto-sizing a column.
pub const COLUMN_WIDTH_PADDING: usize = 3;

/// Maximum sheet-name length after sanitisation. The XLSX format itself
/// caps names at 31 characters; 30 leaves one in reserve.
pub const SHEET_NAME_MAX_CHARS: usize = 30;

/// Characters stripped from class labels when deriving a sheet name.
/// Covers everything the XLSX format forbids plus bracketing noise.
pub const SHEET_NAME_FORBIDDEN: [char; 10] =
    ['/', '\\', '?', '*', ':', '[', ']', '\'', '(', ')'];

// =============================================================================
// Tag sheets
// =============================================================================

/// Card grid columns per physical page.
pub const TAG_GRID_COLUMNS: usize = 2;

/// Card grid rows per physical page.
pub const TAG_GRID_ROWS: usize = 4;

/// Cards per physical page.
pub const TAGS_PER_PAGE: usize = TAG_GRID_COLUMNS * TAG_GRID_ROWS;

/// Character budget for any single detail-line value on a card.
/// Longer values are truncated with an ellipsis rather than overflowing.
pub const TAG_FIELD_MAX_CHARS: usize = 26;

/// Ellipsis marker appended to truncated card values.
pub const TAG_ELLIPSIS: &str = "...";

/// A4 portrait page width in millimetres.
pub const PAGE_WIDTH_MM: f32 = 210.0;

/// A4 portrait page height in millimetres.
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Outer margin around the card grid in millimetres.
pub const PAGE_MARGIN_MM: f32 = 10.0;

/// Horizontal offset of a detail-line label from the card's left edge (mm).
pub const TAG_LABEL_OFFSET_MM: f32 = 6.0;

/// Horizontal offset of a detail-line value from the card's left edge (mm).
/// Fixed so all cards align visually regardless of label length.
pub const TAG_VALUE_OFFSET_MM: f32 = 24.0;

/// Font size of the organisation header line (points).
pub const TAG_HEADER_FONT_PT: f32 = 10.0;

/// Font size of the age-category annotation (points).
pub const TAG_ANNOTATION_FONT_PT: f32 = 8.0;

/// Font size of the large centred sequence number (points).
pub const TAG_SEQUENCE_FONT_PT: f32 = 34.0;

/// Font size of the detail lines (points).
pub const TAG_DETAIL_FONT_PT: f32 = 9.0;

/// Maximum width of the embedded branding logo on a card (mm).
pub const TAG_LOGO_WIDTH_MM: f32 = 18.0;

// =============================================================================
// Session and configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";

/// Default show type when neither session nor config specify one.
pub const DEFAULT_SHOW_TYPE: &str = "Simple";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
