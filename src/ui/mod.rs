//! UI-Komponenten: Toolbar, Karte, Panel, Popup, Input-Handling, Dialoge.

mod canvas;
pub mod dialogs;
pub mod feature_panel;
pub mod input;
mod keyboard;
mod popup;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Toolbar, Panels, Dialoge).
/// Tastenkürzel, Eingabephasen und das Zeichnen der Karte sind in eigene
/// Dateien extrahiert.
pub mod status;
pub mod toolbar;

pub use canvas::render_map;
pub use dialogs::{handle_file_dialogs, show_import_dialog};
pub use feature_panel::render_feature_panel;
pub use input::InputState;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
