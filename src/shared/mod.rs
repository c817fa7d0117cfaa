//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und Farbpalette, die zwischen `app` und `viewport`
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
pub mod palette;

pub use options::ExplorerOptions;
pub use options::{DEFAULT_QUERY, HISTORY_CAPACITY, RECENTS_CAPACITY};
