pub mod errors;
pub mod models;

pub use errors::ImportError;
pub use models::{CardTemplate, Flashcard, ModelSpec, StoredNote};
