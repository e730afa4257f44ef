// ShowReg - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. All errors preserve the causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all ShowReg operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum ShowRegError {
    /// Registration validation failed; nothing was written.
    Registration(RegistrationError),

    /// Record store load or write failed.
    Store(StoreError),

    /// Import of an uploaded file failed; the store is unchanged.
    Import(ImportError),

    /// Catalogue, tag-sheet, or backup export failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for ShowRegError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registration(e) => write!(f, "Registration error: {e}"),
            Self::Store(e) => write!(f, "Store error: {e}"),
            Self::Import(e) => write!(f, "Import error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ShowRegError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Registration(e) => Some(e),
            Self::Store(e) => Some(e),
            Self::Import(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Registration errors
// ---------------------------------------------------------------------------

/// Errors raised while validating a registration or edit submission.
///
/// A validation failure aborts the operation before any store access,
/// so the persisted file is never partially written.
#[derive(Debug)]
pub enum RegistrationError {
    /// A required free-text field was empty (after trimming).
    EmptyField { field: &'static str },

    /// An index-based edit or delete referenced a record that does not exist.
    NoSuchRecord { index: usize, count: usize },
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => {
                write!(f, "Required field '{field}' is empty")
            }
            Self::NoSuchRecord { index, count } => {
                write!(f, "No record at index {index} (store holds {count})")
            }
        }
    }
}

impl std::error::Error for RegistrationError {}

impl From<RegistrationError> for ShowRegError {
    fn from(e: RegistrationError) -> Self {
        Self::Registration(e)
    }
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

/// Errors related to the persisted record store.
#[derive(Debug)]
pub enum StoreError {
    /// A required column is missing from the persisted file's header.
    /// (The Sex column is exempt: it is backfilled, never an error.)
    MissingColumn { path: PathBuf, column: String },

    /// CSV decode/encode error.
    Csv { path: PathBuf, source: csv::Error },

    /// I/O error reading or writing the store file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { path, column } => write!(
                f,
                "Store file '{}' is missing required column '{column}'",
                path.display()
            ),
            Self::Csv { path, source } => {
                write!(f, "CSV error in '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "I/O error on store '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<StoreError> for ShowRegError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

// ---------------------------------------------------------------------------
// Import errors
// ---------------------------------------------------------------------------

/// Errors related to importing an external CSV/XLSX file.
///
/// Any import error leaves the store untouched: rows are parsed and
/// validated in full before the single append write.
#[derive(Debug)]
pub enum ImportError {
    /// File extension is neither `.csv` nor `.xlsx`.
    UnsupportedFormat { path: PathBuf },

    /// The workbook contains no readable worksheet.
    NoWorksheet { path: PathBuf },

    /// A required column is missing from the imported file.
    MissingColumn { path: PathBuf, column: String },

    /// CSV decode error.
    Csv { path: PathBuf, source: csv::Error },

    /// Workbook decode error.
    Workbook {
        path: PathBuf,
        source: calamine::Error,
    },

    /// I/O error reading the import file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat { path } => write!(
                f,
                "'{}' is not a supported import format (expected .csv or .xlsx)",
                path.display()
            ),
            Self::NoWorksheet { path } => {
                write!(f, "'{}' contains no readable worksheet", path.display())
            }
            Self::MissingColumn { path, column } => write!(
                f,
                "Import file '{}' is missing required column '{column}'",
                path.display()
            ),
            Self::Csv { path, source } => {
                write!(f, "CSV error in '{}': {source}", path.display())
            }
            Self::Workbook { path, source } => {
                write!(f, "Workbook error in '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "I/O error reading '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv { source, .. } => Some(source),
            Self::Workbook { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ImportError> for ShowRegError {
    fn from(e: ImportError) -> Self {
        Self::Import(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error (backup dump).
    Csv { path: PathBuf, source: csv::Error },

    /// Spreadsheet generation error (XLSX catalogue).
    Spreadsheet {
        path: PathBuf,
        source: rust_xlsxwriter::XlsxError,
    },

    /// PDF generation error (tag sheets).
    Pdf {
        path: PathBuf,
        source: printpdf::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "Backup export error '{}': {source}", path.display())
            }
            Self::Spreadsheet { path, source } => {
                write!(f, "Catalogue export error '{}': {source}", path.display())
            }
            Self::Pdf { path, source } => {
                write!(f, "Tag sheet export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Spreadsheet { source, .. } => Some(source),
            Self::Pdf { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for ShowRegError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for ShowRegError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for ShowReg results.
pub type Result<T> = std::result::Result<T, ShowRegError>;
