use acted_flashcards::commands::{self, CommandRegistry, IMPORT_ACTION_LABEL};

fn main() {
    let mut registry = CommandRegistry::new();
    commands::on_session_ready(&mut registry);

    registry.invoke(IMPORT_ACTION_LABEL);
}
