use crate::app::{BottomPanel, LeftTab, QueryStatus, Selection, StateChange, TopPanel};
use crate::core::{GraphViewModel, QueryTable, ResultView};
use std::sync::Arc;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Query-Text setzen
    SetQueryText { text: String },
    /// Linken Tab umschalten
    ToggleLeftTab { tab: LeftTab },
    /// Oberes Panel umschalten
    ToggleTopPanel { panel: TopPanel },
    /// Unteres Panel umschalten
    ToggleBottomPanel { panel: BottomPanel },
    /// Eigenschaften-Panel oben erzwingen
    RevealProperties,
    /// Element selektieren
    SetSelection { selection: Selection },
    /// Selektion aufheben
    ClearSelection,
    /// Fehler-Banner setzen
    SetError { message: String },
    /// Fehler-Banner entfernen
    ClearError,
    /// Ergebnis-Ansicht setzen
    SetResultView { view: ResultView },
    /// Verbindung übernehmen
    SetConnection { path: String },
    /// Verbindung entfernen
    ClearConnection,
    /// Pfad vorne in die Recents einfügen
    RememberRecent { path: String },
    /// Pfad aus den Recents entfernen
    ForgetRecent { path: String },
    /// Graph und Tabelle leeren
    ClearGraph,
    /// Neues Ergebnis veröffentlichen
    ApplyQueryResult {
        graph: Arc<GraphViewModel>,
        table: Arc<QueryTable>,
    },
    /// History-Eintrag aufzeichnen (Dedup-Insert)
    RecordHistory {
        query_text: String,
        status: QueryStatus,
        duration_ms: u64,
        result_count: usize,
    },
}

impl AppCommand {
    /// Kurzname für das Command-Log.
    pub fn name(&self) -> &'static str {
        match self {
            AppCommand::SetQueryText { .. } => "SetQueryText",
            AppCommand::ToggleLeftTab { .. } => "ToggleLeftTab",
            AppCommand::ToggleTopPanel { .. } => "ToggleTopPanel",
            AppCommand::ToggleBottomPanel { .. } => "ToggleBottomPanel",
            AppCommand::RevealProperties => "RevealProperties",
            AppCommand::SetSelection { .. } => "SetSelection",
            AppCommand::ClearSelection => "ClearSelection",
            AppCommand::SetError { .. } => "SetError",
            AppCommand::ClearError => "ClearError",
            AppCommand::SetResultView { .. } => "SetResultView",
            AppCommand::SetConnection { .. } => "SetConnection",
            AppCommand::ClearConnection => "ClearConnection",
            AppCommand::RememberRecent { .. } => "RememberRecent",
            AppCommand::ForgetRecent { .. } => "ForgetRecent",
            AppCommand::ClearGraph => "ClearGraph",
            AppCommand::ApplyQueryResult { .. } => "ApplyQueryResult",
            AppCommand::RecordHistory { .. } => "RecordHistory",
        }
    }

    /// Bereich des States, den dieser Command verändert.
    pub fn change(&self) -> StateChange {
        match self {
            AppCommand::SetQueryText { .. } => StateChange::QueryText,
            AppCommand::ToggleLeftTab { .. }
            | AppCommand::ToggleTopPanel { .. }
            | AppCommand::ToggleBottomPanel { .. }
            | AppCommand::RevealProperties => StateChange::Layout,
            AppCommand::SetSelection { .. } | AppCommand::ClearSelection => {
                StateChange::Selection
            }
            AppCommand::SetError { .. } | AppCommand::ClearError => StateChange::Error,
            AppCommand::SetResultView { .. } => StateChange::ResultView,
            AppCommand::SetConnection { .. } | AppCommand::ClearConnection => {
                StateChange::Connection
            }
            AppCommand::RememberRecent { .. } | AppCommand::ForgetRecent { .. } => {
                StateChange::Recents
            }
            AppCommand::ClearGraph | AppCommand::ApplyQueryResult { .. } => StateChange::Graph,
            AppCommand::RecordHistory { .. } => StateChange::History,
        }
    }
}
