use std::path::Path;

use crate::{
    anki::AnkiCollection,
    importer::{self, Collection},
    prompt::{DialogPrompter, Prompter},
};

pub const IMPORT_ACTION_LABEL: &str = "Import Acted Flashcards CP1";
pub const DATA_PATH: &str = "data/Acted Flashcards CP1 - incomplete.txt";

struct Command {
    label: String,
    action: fn(),
}

/// Label-keyed registry of user-invocable actions.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: Vec::new() }
    }

    /// Check-before-add: a second command with an identical label is
    /// refused, so repeated session-ready hooks register only one entry.
    pub fn register(&mut self, label: &str, action: fn()) -> bool {
        if self.commands.iter().any(|command| command.label == label) {
            return false;
        }
        self.commands.push(Command { label: label.to_string(), action });
        true
    }

    pub fn invoke(&self, label: &str) -> bool {
        match self.commands.iter().find(|command| command.label == label) {
            Some(command) => {
                (command.action)();
                true
            }
            None => false,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.commands.iter().map(|command| command.label.as_str()).collect()
    }
}

/// Session startup hook: registers the import action once.
pub fn on_session_ready(registry: &mut CommandRegistry) {
    registry.register(IMPORT_ACTION_LABEL, run_import_action);
}

fn run_import_action() {
    run_import(&DialogPrompter);
}

/// Action handler wired to the real collaborators: AnkiConnect collection
/// and native dialogs.
pub fn run_import(prompter: &impl Prompter) {
    let mut collection = AnkiCollection::wait_awake(2, 3);
    handle_import(collection.as_mut(), prompter, Path::new(DATA_PATH));
}

/// Terminal outcomes per the one-dialog rule: no open session or a failed
/// import shows a warning; success and empty-file messages come from the
/// import flow itself; declining shows nothing.
pub fn handle_import<C: Collection, P: Prompter>(
    col: Option<&mut C>,
    prompter: &P,
    data_path: &Path,
) {
    let Some(col) = col else {
        prompter.warning("Please open a collection before importing the flashcards.");
        return;
    };

    if let Err(err) = importer::import_from_path(col, prompter, data_path) {
        eprintln!("Import failed: {}", err);
        prompter.warning(&err.to_string());
    }
}
