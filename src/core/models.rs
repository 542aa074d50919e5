/// One flashcard as parsed from the bundled TSV file. The front text is the
/// dedup key within the target deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTemplate {
    pub name: String,
    pub qfmt: String,
    pub afmt: String,
}

/// Field and template definition for a note type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    pub name: String,
    pub fields: Vec<String>,
    pub templates: Vec<CardTemplate>,
}

impl ModelSpec {
    /// Two fields, one card: question shows Front, answer repeats the
    /// question above a separator followed by Back.
    pub fn basic_front_back(name: &str) -> Self {
        ModelSpec {
            name: name.to_string(),
            fields: vec!["Front".to_string(), "Back".to_string()],
            templates: vec![CardTemplate {
                name: "Card 1".to_string(),
                qfmt: "{{Front}}".to_string(),
                afmt: "{{FrontSide}}<hr id=answer>{{Back}}".to_string(),
            }],
        }
    }
}

/// A note already present in the collection, with field values in model
/// order.
#[derive(Debug, Clone)]
pub struct StoredNote {
    pub id: u64,
    pub fields: Vec<String>,
}
