use std::{fs, path::Path};

use crate::core::{Flashcard, ImportError};

/// Reads the bundled tab-separated data file into flashcards, preserving
/// file order. Lines whose first field starts with `#` are comments; blank
/// lines are skipped; a missing second column becomes an empty back.
pub fn load_flashcards(path: &Path) -> Result<Vec<Flashcard>, ImportError> {
    if !path.exists() {
        return Err(ImportError::ResourceNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut flashcards = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            continue;
        }

        let mut columns = line.split('\t');
        let front = columns.next().unwrap_or("").trim();
        if front.starts_with('#') {
            continue;
        }

        // Columns beyond the second are ignored.
        let back = columns.next().unwrap_or("");
        flashcards.push(Flashcard { front: front.to_string(), back: back.to_string() });
    }

    Ok(flashcards)
}
