//! Verträge externer Kollaborateure: Datenbank-Backend, Dateidialog, Recents-Persistenz.
//!
//! Der Store ruft diese Traits nur auf; Implementierungen liefert der Host.

#[cfg(feature = "native-dialogs")]
mod dialog;
mod recents;

#[cfg(feature = "native-dialogs")]
pub use dialog::RfdFileDialog;
pub use recents::{JsonRecentsStore, MemoryRecentsStore};

use crate::core::QueryResult;
use crate::error::{ConnectionError, QueryError};

/// Asynchrones Datenbank-Backend (Query-Engine, Speicherung).
///
/// Timeouts gehören an diese Grenze, nicht in den Store.
#[allow(async_fn_in_trait)]
pub trait DatabaseBackend {
    /// Öffnet eine bestehende Datenbank. Legt nie eine neue an.
    async fn connect_existing(&self, path: &str) -> Result<(), ConnectionError>;
    /// Legt eine Datenbank an (und öffnet sie).
    async fn create(&self, path: &str) -> Result<(), ConnectionError>;
    /// Schließt die offene Datenbank. Fehler werden vom Store nur geloggt.
    async fn disconnect(&self) -> Result<(), ConnectionError>;
    /// Führt eine Query aus.
    async fn query(&self, text: &str) -> Result<QueryResult, QueryError>;
}

/// Filter für den Öffnen-Dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// Anzeigename (z.B. "Graph Database Files")
    pub name: String,
    /// Endungen ohne Punkt
    pub extensions: Vec<String>,
}

impl FileFilter {
    /// Erstellt einen Filter.
    pub fn new(name: impl Into<String>, extensions: &[String]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.to_vec(),
        }
    }
}

/// Nativer Datei-/Ordnerdialog. `None` = abgebrochen.
#[allow(async_fn_in_trait)]
pub trait FileDialog {
    /// Wählt eine Datei.
    async fn open_file(&self, filters: &[FileFilter]) -> Option<String>;
    /// Wählt ein Verzeichnis.
    async fn open_directory(&self) -> Option<String>;
}

/// Persistenz der Recents-Liste. Kapazität und Dedup erzwingt der Store.
pub trait RecentsStore {
    /// Lädt die gespeicherte Liste (neueste zuerst).
    fn load(&self) -> Vec<String>;
    /// Speichert die Liste.
    fn save(&mut self, recents: &[String]);
}
