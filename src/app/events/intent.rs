use crate::app::{BottomPanel, ExecutionOutcome, LeftTab, Selection, TopPanel};
use crate::core::ResultView;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Text im Query-Editor geändert (auch: Leeren)
    QueryTextChanged { text: String },
    /// Tab der linken Sidebar angeklickt
    LeftTabToggled { tab: LeftTab },
    /// Panel im oberen rechten Slot angeklickt
    TopPanelToggled { panel: TopPanel },
    /// Panel im unteren rechten Slot angeklickt
    BottomPanelToggled { panel: BottomPanel },
    /// Element im Viewport angeklickt oder per Suche gefunden
    SelectionRequested { selection: Selection },
    /// Klick auf den Hintergrund
    SelectionCleared,
    /// Fehler-Banner geschlossen
    ErrorDismissed,
    /// Ergebnis-Ansicht (Graph/Tabelle) gewechselt
    ResultViewChanged { view: ResultView },
    /// Backend hat Öffnen/Anlegen bestätigt
    ConnectionEstablished { path: String },
    /// Backend hat Öffnen/Anlegen abgelehnt
    ConnectionFailed {
        path: String,
        /// Pfad aus den Recents entfernen
        prune: bool,
        message: String,
    },
    /// Datenbank geschlossen
    Disconnected,
    /// Aktuelle Query-Ausführung abgeschlossen
    QueryFinished {
        query_text: String,
        outcome: ExecutionOutcome,
    },
}
