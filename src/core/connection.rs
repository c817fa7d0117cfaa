//! Verbindungszustand zur Datenbank.

/// Verbindungszustand.
///
/// `is_connected()` wird aus dem Pfad abgeleitet und nie separat gespeichert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionState {
    path: Option<String>,
}

impl ConnectionState {
    /// Verbunden mit `path`.
    pub fn connected(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Nicht verbunden.
    pub fn disconnected() -> Self {
        Self { path: None }
    }

    /// Pfad der offenen Datenbank.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Gibt `true` zurück, wenn eine Datenbank offen ist.
    pub fn is_connected(&self) -> bool {
        self.path.is_some()
    }

    /// Dateiname der offenen Datenbank (letzte Pfadkomponente, `/` oder `\`).
    pub fn file_name(&self) -> Option<&str> {
        self.path
            .as_deref()
            .and_then(|path| path.rsplit(|c| c == '/' || c == '\\').next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_iff_path_present() {
        let state = ConnectionState::connected("/data/graph.mx");
        assert!(state.is_connected());
        assert_eq!(state.path(), Some("/data/graph.mx"));
        assert_eq!(state.file_name(), Some("graph.mx"));

        let state = ConnectionState::disconnected();
        assert!(!state.is_connected());
        assert_eq!(state.path(), None);
        assert_eq!(state.file_name(), None);
    }

    #[test]
    fn file_name_handles_windows_separators() {
        let state = ConnectionState::connected(r"C:\db\work.mx");
        assert_eq!(state.file_name(), Some("work.mx"));
    }
}
