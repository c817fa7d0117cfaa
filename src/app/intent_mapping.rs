//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, ExecutionOutcome, QueryStatus, Selection, TopPanel};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::QueryTextChanged { text } => vec![AppCommand::SetQueryText { text }],
        AppIntent::LeftTabToggled { tab } => vec![AppCommand::ToggleLeftTab { tab }],
        AppIntent::TopPanelToggled { panel } => vec![AppCommand::ToggleTopPanel { panel }],
        AppIntent::BottomPanelToggled { panel } => vec![AppCommand::ToggleBottomPanel { panel }],
        AppIntent::SelectionRequested { selection } => {
            if selection.is_none() {
                return vec![AppCommand::ClearSelection];
            }
            // Auto-Reveal: Selektion zeigt immer das Eigenschaften-Panel
            let reveal = state.layout.top_panel() != Some(TopPanel::Properties);
            let mut commands = vec![AppCommand::SetSelection { selection }];
            if reveal {
                commands.push(AppCommand::RevealProperties);
            }
            commands
        }
        AppIntent::SelectionCleared => vec![AppCommand::ClearSelection],
        AppIntent::ErrorDismissed => vec![AppCommand::ClearError],
        AppIntent::ResultViewChanged { view } => vec![AppCommand::SetResultView { view }],
        AppIntent::ConnectionEstablished { path } => {
            let mut commands = Vec::with_capacity(5);
            // Wechsel auf eine andere Datenbank: alter Graph gehört nicht mehr dazu
            if state.connection.path().is_some_and(|current| current != path) {
                commands.push(AppCommand::ClearGraph);
                commands.push(AppCommand::ClearSelection);
            }
            commands.push(AppCommand::ClearError);
            commands.push(AppCommand::SetConnection { path: path.clone() });
            commands.push(AppCommand::RememberRecent { path });
            commands
        }
        AppIntent::ConnectionFailed {
            path,
            prune,
            message,
        } => {
            let mut commands = vec![AppCommand::SetError { message }];
            if prune {
                commands.push(AppCommand::ForgetRecent { path });
            }
            commands
        }
        AppIntent::Disconnected => vec![
            AppCommand::ClearConnection,
            AppCommand::ClearGraph,
            AppCommand::ClearSelection,
        ],
        AppIntent::QueryFinished {
            query_text,
            outcome,
        } => match outcome {
            ExecutionOutcome::Success {
                graph,
                table,
                preferred_view,
                duration_ms,
                result_count,
            } => {
                // Node- und Edge-IDs sind getrennte Namensräume
                let selection_gone = match &state.selection {
                    Selection::None => false,
                    Selection::Node(node) => !graph.contains_node(node.id),
                    Selection::Edge(edge) => !graph.contains_edge(edge.id),
                };
                let mut commands = vec![
                    AppCommand::ClearError,
                    AppCommand::ApplyQueryResult { graph, table },
                    AppCommand::SetResultView {
                        view: preferred_view,
                    },
                ];
                if selection_gone {
                    commands.push(AppCommand::ClearSelection);
                }
                commands.push(AppCommand::RecordHistory {
                    query_text,
                    status: QueryStatus::Success,
                    duration_ms,
                    result_count,
                });
                commands
            }
            ExecutionOutcome::Failure {
                message,
                duration_ms,
            } => vec![
                AppCommand::SetError { message },
                AppCommand::RecordHistory {
                    query_text,
                    status: QueryStatus::Error,
                    duration_ms,
                    result_count: 0,
                },
            ],
        },
    }
}
