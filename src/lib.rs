//! Imports the bundled "Acted Flashcards CP1" TSV deck into Anki over
//! AnkiConnect, creating the deck and note type if absent and skipping
//! cards whose front text already exists.

pub mod anki;
pub mod commands;
pub mod core;
pub mod importer;
pub mod parser;
pub mod prompt;
