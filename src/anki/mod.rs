use std::{collections::HashMap, thread::sleep, time::Duration};

use crate::{
    core::{ImportError, ModelSpec, StoredNote},
    importer::Collection,
};

pub mod api;

/// AnkiConnect-backed collection. Deck selection and the current model live
/// on this side of the seam, mirroring the host's session-global state.
pub struct AnkiCollection {
    current_deck: Option<String>,
    current_model: Option<String>,
}

impl AnkiCollection {
    /// Fails when AnkiConnect is unreachable, i.e. Anki is closed or no
    /// collection is open.
    pub fn connect() -> Result<Self, ImportError> {
        let version = api::get_version()?;
        println!("AnkiConnect is online. Version: {}", version);
        Ok(Self { current_deck: None, current_model: None })
    }

    pub fn wait_awake(wait_time: u64, max_attempts: u32) -> Option<Self> {
        for attempt in 1..=max_attempts {
            match Self::connect() {
                Ok(collection) => return Some(collection),
                Err(err) => {
                    println!(
                        "AnkiConnect attempt {} of {} failed. Retrying in {} seconds... Error: {}",
                        attempt, max_attempts, wait_time, err
                    );
                    if attempt < max_attempts {
                        sleep(Duration::from_secs(wait_time));
                    }
                }
            }
        }
        None
    }
}

impl Collection for AnkiCollection {
    fn select_deck(&mut self, name: &str) -> Result<u64, ImportError> {
        let decks = api::get_deck_ids()?;
        let id = match decks.get(name) {
            Some(&id) => id,
            None => api::create_deck(name)?,
        };
        self.current_deck = Some(name.to_string());
        Ok(id)
    }

    fn model_exists(&mut self, name: &str) -> Result<bool, ImportError> {
        Ok(api::get_model_ids()?.contains_key(name))
    }

    fn create_model(&mut self, spec: &ModelSpec) -> Result<(), ImportError> {
        api::create_model(spec)
    }

    fn set_current_model(&mut self, name: &str) -> Result<(), ImportError> {
        self.current_model = Some(name.to_string());
        Ok(())
    }

    fn find_note_ids(&mut self, deck_name: &str) -> Result<Vec<u64>, ImportError> {
        api::get_note_ids(&api::deck_query(deck_name))
    }

    fn notes_info(&mut self, note_ids: &[u64]) -> Result<Vec<StoredNote>, ImportError> {
        let notes = api::get_notes(note_ids)?;

        Ok(notes
            .into_iter()
            .map(|note| {
                let mut fields: Vec<(u32, String)> =
                    note.fields.into_values().map(|field| (field.order, field.value)).collect();
                fields.sort_by_key(|(order, _)| *order);

                StoredNote {
                    id: note.note_id,
                    fields: fields.into_iter().map(|(_, value)| value).collect(),
                }
            })
            .collect())
    }

    fn add_note(&mut self, front: &str, back: &str, tags: &[&str]) -> Result<u64, ImportError> {
        let deck = self
            .current_deck
            .as_deref()
            .ok_or_else(|| ImportError::Custom("no deck selected before add_note".to_string()))?;
        let model = self
            .current_model
            .as_deref()
            .ok_or_else(|| ImportError::Custom("no current model before add_note".to_string()))?;

        let mut fields = HashMap::new();
        fields.insert("Front", front);
        fields.insert("Back", back);

        api::add_note(deck, model, fields, tags)
    }

    fn refresh(&mut self) -> Result<(), ImportError> {
        api::reload_collection()
    }
}
