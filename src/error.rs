//! Fehler-Taxonomie: Verbindung, Query, Layout.
//!
//! `ConnectionError` wird an den Aufrufer (UI) weitergereicht,
//! `QueryError` landet als Banner im State, `LayoutError` wird nur geloggt.

use thiserror::Error;

/// Fehler beim Öffnen, Anlegen oder Schließen einer Datenbank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// Backend hat das Öffnen/Anlegen abgelehnt
    #[error("failed to open database at {path}: {reason}")]
    Rejected { path: String, reason: String },
    /// Datenbankpfad ist leer
    #[error("database path is empty")]
    EmptyPath,
    /// Datenbankname ist nach Bereinigung leer
    #[error("invalid database name {name:?}")]
    InvalidName { name: String },
    /// Operation benötigt eine offene Verbindung
    #[error("no database is currently open")]
    NotConnected,
}

impl ConnectionError {
    /// Kurzform für `Rejected`.
    pub fn rejected(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Fehler bei der Ausführung einer Query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Query-Text fehlerhaft oder zur Laufzeit gescheitert
    #[error("{message}")]
    Failed { message: String },
    /// Keine Verbindung offen
    #[error("no database is currently open")]
    NotConnected,
}

impl QueryError {
    /// Erstellt einen `Failed`-Fehler mit Meldung.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// Fehler des Force-Layouts. Nie fatal: alte Positionen bleiben erhalten.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Simulation lieferte nicht-endliche Positionen
    #[error("force layout diverged at iteration {iteration}")]
    Diverged { iteration: usize },
    /// Ungültige Layout-Parameter (z.B. Kantenlänge <= 0)
    #[error("invalid layout parameter: {0}")]
    InvalidParameter(&'static str),
}
