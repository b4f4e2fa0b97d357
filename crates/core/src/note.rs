//! Validation rules for note submissions.

use crate::error::CoreError;

/// Number of hex digits in a note colour (`RRGGBB`, no leading `#`).
pub const NOTE_COLOR_LEN: usize = 6;

/// Largest accepted `title` or `text`, in bytes (MySQL `TEXT`).
pub const MAX_NOTE_FIELD_BYTES: usize = 65_535;

/// Validate a note submission: `title` and `text` must fit a `TEXT` column
/// and `color` must pass [`validate_note_color`].
pub fn validate_note_fields(title: &str, text: &str, color: &str) -> Result<(), CoreError> {
    for (field, value) in [("title", title), ("text", text)] {
        if value.len() > MAX_NOTE_FIELD_BYTES {
            return Err(CoreError::Validation(format!(
                "Note {field} must be at most {MAX_NOTE_FIELD_BYTES} bytes"
            )));
        }
    }

    validate_note_color(color)
}

/// Validate that a note colour is exactly six hex digits without a leading `#`.
///
/// Matches the `CHAR(6)` column of the `note` table.
pub fn validate_note_color(color: &str) -> Result<(), CoreError> {
    if color.len() != NOTE_COLOR_LEN {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must be {NOTE_COLOR_LEN} hex digits (RRGGBB)"
        )));
    }

    if !color.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must contain only hex digits"
        )));
    }

    Ok(())
}
