// ShowReg - app/session.rs
//
// Session persistence: the active show type and the form generation id,
// restored between invocations.
//
// Design principles:
// - The session is saved atomically (write to temp, rename over final) so
//   a crash during save never corrupts the previous good session.
// - Load errors are silently discarded: a corrupt or incompatible session
//   just starts fresh with the configured default show type.
// - The show type is process-wide configuration, applied uniformly during
//   any classification or ranking pass; it is never stored per record.

use crate::util::constants::SESSION_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment whenever `SessionData` changes in a breaking way. Version
/// mismatches silently discard the session.
pub const SESSION_VERSION: u32 = 1;

/// Complete persistent session snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version, must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    /// Active show type, as a free configuration string. Parsed leniently
    /// wherever a mode decision is needed.
    pub show_type: String,

    /// Explicit form generation id: incremented by the caller after each
    /// successful registration. Lets a front end rebuild a clean entry
    /// form without tracking its own counter.
    #[serde(default)]
    pub form_generation: u64,
}

impl SessionData {
    /// A fresh session with the given default show type.
    pub fn fresh(default_show_type: &str) -> Self {
        Self {
            version: SESSION_VERSION,
            show_type: default_show_type.to_string(),
            form_generation: 0,
        }
    }

    /// Advance the form generation after a successful submission.
    pub fn advance_generation(&mut self) {
        self.form_generation += 1;
    }
}

/// Resolve the session file path from the platform data directory.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Save `data` to `path` atomically (write temp, then rename).
///
/// Creates parent directories as needed. Returns a descriptive error string
/// suitable for a tracing warn! call; session-save failures are logged,
/// never surfaced as operation failures.
pub fn save(data: &SessionData, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            format!(
                "cannot create session directory '{}': {e}",
                parent.display()
            )
        })?;
    }

    let json = serde_json::to_string_pretty(data)
        .map_err(|e| format!("failed to serialise session: {e}"))?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes())
        .map_err(|e| format!("failed to write session temp file '{}': {e}", tmp.display()))?;

    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        format!("failed to finalise session file '{}': {e}", path.display())
    })?;

    tracing::debug!(path = %path.display(), "Session saved");
    Ok(())
}

/// Load and validate a `SessionData` from `path`.
///
/// Returns `None` on any error (file not found, JSON parse failure,
/// version mismatch). The caller should treat `None` as "start fresh".
pub fn load(path: &Path) -> Option<SessionData> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read session file");
            }
        })
        .ok()?;

    let data: SessionData = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Session file is malformed, starting fresh"
            );
        })
        .ok()?;

    if data.version != SESSION_VERSION {
        tracing::warn!(
            found = data.version,
            expected = SESSION_VERSION,
            "Session file version mismatch, starting fresh"
        );
        return None;
    }

    Some(data)
}

// =============================================================================
// Unit tests
// =============================================================================
