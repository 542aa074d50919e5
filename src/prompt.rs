use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

const DIALOG_TITLE: &str = "Acted Flashcards CP1";

/// User-interaction surface needed by the import action: one blocking
/// yes/no question plus fire-and-forget info and warning messages.
pub trait Prompter {
    fn confirm(&self, question: &str) -> bool;
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
}

/// Native message dialogs via rfd.
pub struct DialogPrompter;

impl Prompter for DialogPrompter {
    fn confirm(&self, question: &str) -> bool {
        MessageDialog::new()
            .set_title(DIALOG_TITLE)
            .set_level(MessageLevel::Info)
            .set_description(question)
            .set_buttons(MessageButtons::YesNo)
            .show()
            == MessageDialogResult::Yes
    }

    fn info(&self, message: &str) {
        MessageDialog::new()
            .set_title(DIALOG_TITLE)
            .set_level(MessageLevel::Info)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn warning(&self, message: &str) {
        MessageDialog::new()
            .set_title(DIALOG_TITLE)
            .set_level(MessageLevel::Warning)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
