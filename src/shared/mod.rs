//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Optionen und UI-Texte werden von `app` und `ui` gleichermaßen gelesen.

mod messages;
pub mod options;

pub use messages::Messages;
pub use options::EditorOptions;
