//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState, StateChange};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Gibt die betroffenen State-Bereiche zurück (ohne Duplikate,
    /// in Ausführungsreihenfolge).
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        intent: AppIntent,
    ) -> anyhow::Result<Vec<StateChange>> {
        let mut changes = Vec::new();
        self.apply_intent(state, intent, &mut changes)?;
        Ok(changes)
    }

    /// Wie `handle_intent`, sammelt die Bereiche aber in `changes`.
    ///
    /// Scheitert ein Command, enthält `changes` genau die Bereiche der
    /// bis dahin ausgeführten Commands.
    pub fn apply_intent(
        &mut self,
        state: &mut AppState,
        intent: AppIntent,
        changes: &mut Vec<StateChange>,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            let change = command.change();
            self.handle_command(state, command)?;
            if !changes.contains(&change) {
                changes.push(change);
            }
        }
        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Verbindung & Recents ===
            AppCommand::SetConnection { path } => handlers::connection::set(state, path)?,
            AppCommand::ClearConnection => handlers::connection::clear(state),
            AppCommand::RememberRecent { path } => {
                handlers::connection::remember_recent(state, path)
            }
            AppCommand::ForgetRecent { path } => handlers::connection::forget_recent(state, &path),

            // === Query & Ergebnis ===
            AppCommand::ApplyQueryResult { graph, table } => {
                handlers::query::apply_result(state, graph, table)
            }
            AppCommand::ClearGraph => handlers::query::clear_graph(state),
            AppCommand::RecordHistory {
                query_text,
                status,
                duration_ms,
                result_count,
            } => handlers::query::record_history(
                state,
                &query_text,
                status,
                duration_ms,
                result_count,
            ),

            // === Selektion ===
            AppCommand::SetSelection { selection } => handlers::selection::set(state, selection),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Layout, Editor & Banner ===
            AppCommand::ToggleLeftTab { tab } => handlers::layout::toggle_left(state, tab),
            AppCommand::ToggleTopPanel { panel } => handlers::layout::toggle_top(state, panel),
            AppCommand::ToggleBottomPanel { panel } => {
                handlers::layout::toggle_bottom(state, panel)
            }
            AppCommand::RevealProperties => handlers::layout::reveal_properties(state),
            AppCommand::SetQueryText { text } => handlers::layout::set_query_text(state, text),
            AppCommand::SetResultView { view } => handlers::layout::set_result_view(state, view),
            AppCommand::SetError { message } => handlers::layout::set_error(state, message),
            AppCommand::ClearError => handlers::layout::clear_error(state),
        }

        Ok(())
    }
}
