use crate::app::{CommandLog, HistoryLog, LayoutController};
use crate::core::{ConnectionState, GraphViewModel, QueryTable, ResultView};
use crate::shared::ExplorerOptions;
use std::sync::Arc;

use super::Selection;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Offene Datenbank (oder keine)
    pub connection: ConnectionState,
    /// Zuletzt geöffnete Datenbanken, neueste zuerst, ohne Duplikate
    pub recents: Vec<String>,
    /// Aktueller Text im Query-Editor
    pub query_text: String,
    /// Kanonisches Graph-View-Model des letzten erfolgreichen Queries
    pub graph: Arc<GraphViewModel>,
    /// Tabellen-Anteil des letzten erfolgreichen Queries
    pub table: Arc<QueryTable>,
    /// Aktive Ergebnis-Ansicht
    pub result_view: ResultView,
    /// Selektiertes Element
    pub selection: Selection,
    /// Panel-Layout
    pub layout: LayoutController,
    /// Query-Verlauf
    pub history: HistoryLog,
    /// Transientes Fehler-Banner
    pub last_error: Option<String>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: ExplorerOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(ExplorerOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen
    pub fn with_options(options: ExplorerOptions) -> Self {
        Self {
            connection: ConnectionState::disconnected(),
            recents: Vec::new(),
            query_text: options.default_query.clone(),
            graph: Arc::new(GraphViewModel::new()),
            table: Arc::new(QueryTable::default()),
            result_view: ResultView::Graph,
            selection: Selection::None,
            layout: LayoutController::new(),
            history: HistoryLog::with_capacity(options.history_capacity),
            last_error: None,
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gibt `true` zurück, wenn eine Datenbank offen ist.
    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    /// Anzahl der Nodes im aktuellen Graph (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Anzahl der Edges im aktuellen Graph (für UI-Anzeige)
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Statuszeile: `CONNECTED <pfad>` oder `DISCONNECTED`.
    pub fn status_line(&self) -> String {
        match self.connection.path() {
            Some(path) => format!("CONNECTED {path}"),
            None => "DISCONNECTED".to_string(),
        }
    }

    /// Recents, deren Pfad `term` enthält (Groß-/Kleinschreibung egal).
    pub fn filtered_recents(&self, term: &str) -> Vec<&str> {
        let needle = term.trim().to_lowercase();
        self.recents
            .iter()
            .filter(|path| needle.is_empty() || path.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_defaults() {
        let state = AppState::new();
        assert!(!state.is_connected());
        assert_eq!(state.query_text, crate::shared::DEFAULT_QUERY);
        assert!(state.graph.is_empty());
        assert!(state.selection.is_none());
        assert!(state.last_error.is_none());
        assert_eq!(state.status_line(), "DISCONNECTED");
    }

    #[test]
    fn status_line_shows_path() {
        let mut state = AppState::new();
        state.connection = ConnectionState::connected("/data/graph.mx");
        assert_eq!(state.status_line(), "CONNECTED /data/graph.mx");
    }

    #[test]
    fn filtered_recents_ignores_case() {
        let mut state = AppState::new();
        state.recents = vec![
            "/data/Social.mx".to_string(),
            "/data/movies.mx".to_string(),
        ];
        assert_eq!(state.filtered_recents("SOCIAL"), vec!["/data/Social.mx"]);
        assert_eq!(state.filtered_recents("").len(), 2);
        assert!(state.filtered_recents("zzz").is_empty());
    }
}
