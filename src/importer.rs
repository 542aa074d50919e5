use std::{collections::HashSet, path::Path};

use crate::{
    core::{Flashcard, ImportError, ModelSpec, StoredNote},
    parser,
    prompt::Prompter,
};

pub const DECK_NAME: &str = "Acted Flashcards CP1";
pub const MODEL_NAME: &str = "Acted Flashcards CP1";

/// Tag attached to every inserted note so the user can find or remove them
/// later.
pub const SOURCE_TAG: &str = "ActedFlashcardsCP1";

/// The host collection operations the import needs. `select_deck` and
/// `set_current_model` bind the session state that later `add_note` calls
/// insert into.
pub trait Collection {
    /// Create-if-absent deck selection, returning the deck id.
    fn select_deck(&mut self, name: &str) -> Result<u64, ImportError>;

    fn model_exists(&mut self, name: &str) -> Result<bool, ImportError>;

    fn create_model(&mut self, spec: &ModelSpec) -> Result<(), ImportError>;

    fn set_current_model(&mut self, name: &str) -> Result<(), ImportError>;

    fn find_note_ids(&mut self, deck_name: &str) -> Result<Vec<u64>, ImportError>;

    fn notes_info(&mut self, note_ids: &[u64]) -> Result<Vec<StoredNote>, ImportError>;

    /// Inserts a note with the two fields and tags into the selected deck
    /// using the current model, returning the new note id.
    fn add_note(&mut self, front: &str, back: &str, tags: &[&str]) -> Result<u64, ImportError>;

    /// Session-wide refresh after mutation.
    fn refresh(&mut self) -> Result<(), ImportError>;
}

/// Looks up the note type by name and creates it only if missing. An
/// existing model is trusted as-is, never repaired or redefined.
pub fn ensure_model<C: Collection>(col: &mut C) -> Result<(), ImportError> {
    if col.model_exists(MODEL_NAME)? {
        return Ok(());
    }
    col.create_model(&ModelSpec::basic_front_back(MODEL_NAME))
}

/// Inserts every flashcard whose front is not already present in the deck,
/// returning the number of notes added.
pub fn import_missing<C: Collection>(
    col: &mut C,
    cards: &[Flashcard],
    deck_name: &str,
) -> Result<usize, ImportError> {
    col.select_deck(deck_name)?;
    ensure_model(col)?;
    col.set_current_model(MODEL_NAME)?;

    let note_ids = col.find_note_ids(deck_name)?;
    let notes = col.notes_info(&note_ids)?;

    // Notes with no stored fields are skipped when building the index.
    let mut existing_fronts: HashSet<String> =
        notes.into_iter().filter_map(|note| note.fields.into_iter().next()).collect();

    let mut added = 0;
    for card in cards {
        if existing_fronts.contains(&card.front) {
            continue;
        }

        col.add_note(&card.front, &card.back, &[SOURCE_TAG])?;
        added += 1;

        // Inserting the front immediately collapses duplicate fronts within
        // the data file itself to the first occurrence.
        existing_fronts.insert(card.front.clone());
    }

    col.refresh()?;
    Ok(added)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported(usize),
    EmptyDataSet,
    Declined,
}

/// Full import flow: parse, confirm with the user, insert the missing
/// cards, report the count. Parsing happens before any host mutation, so a
/// missing or empty data file leaves the collection untouched.
pub fn import_from_path<C: Collection, P: Prompter>(
    col: &mut C,
    prompter: &P,
    data_path: &Path,
) -> Result<ImportOutcome, ImportError> {
    let cards = parser::load_flashcards(data_path)?;
    println!("Parsed {} flashcards", cards.len());

    if cards.is_empty() {
        prompter.warning("No flashcards were found in the bundled data file.");
        return Ok(ImportOutcome::EmptyDataSet);
    }

    let question = format!(
        "Import {} flashcards into the '{}' deck?\n\
         Existing cards with the same front text will be skipped.",
        cards.len(),
        DECK_NAME
    );
    if !prompter.confirm(&question) {
        return Ok(ImportOutcome::Declined);
    }

    let added = import_missing(col, &cards, DECK_NAME)?;

    prompter.info(&format!("Imported {} new flashcards into '{}'.", added, DECK_NAME));
    Ok(ImportOutcome::Imported(added))
}
