//! Datei-Dialoge und modale Fenster.

mod file_dialogs;
mod import_dialog;

pub use file_dialogs::handle_file_dialogs;
pub use import_dialog::show_import_dialog;
