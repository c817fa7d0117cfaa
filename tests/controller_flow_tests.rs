use graph_explorer::{
    AppController, AppIntent, AppState, BottomPanel, ConnectionState, ExecutionOutcome, Node,
    QueryError, QueryResult, QueryStatus, ResultView, Selection, StateChange, TopPanel,
};
use std::time::Duration;

fn last_command_name(state: &AppState) -> &'static str {
    state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein")
        .name
}

fn success(nodes: Vec<Node>) -> ExecutionOutcome {
    let result = QueryResult {
        nodes,
        duration_ms: 5,
        ..QueryResult::default()
    };
    ExecutionOutcome::from_result(Ok(result), Duration::ZERO)
}

#[test]
fn test_query_text_changed_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let changes = controller
        .handle_intent(
            &mut state,
            AppIntent::QueryTextChanged {
                text: "RETURN 1".into(),
            },
        )
        .expect("QueryTextChanged sollte ohne Fehler durchlaufen");

    assert_eq!(state.query_text, "RETURN 1");
    assert_eq!(changes, vec![StateChange::QueryText]);
    assert_eq!(last_command_name(&state), "SetQueryText");
}

#[test]
fn test_connection_established_remembers_recent() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let changes = controller
        .handle_intent(
            &mut state,
            AppIntent::ConnectionEstablished {
                path: "/data/a.mx".into(),
            },
        )
        .expect("ConnectionEstablished sollte ohne Fehler durchlaufen");

    assert!(state.is_connected());
    assert_eq!(state.recents, vec!["/data/a.mx".to_string()]);
    assert!(changes.contains(&StateChange::Connection));
    assert!(changes.contains(&StateChange::Recents));
    assert_eq!(last_command_name(&state), "RememberRecent");
}

#[test]
fn test_connection_established_with_blank_path_fails() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ConnectionEstablished { path: "  ".into() },
    );

    assert!(result.is_err());
    assert!(!state.is_connected());
}

#[test]
fn test_connection_failed_without_prune_keeps_recents() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.recents = vec!["/data/a.mx".into()];

    controller
        .handle_intent(
            &mut state,
            AppIntent::ConnectionFailed {
                path: "/data/a.mx".into(),
                prune: false,
                message: "locked".into(),
            },
        )
        .expect("ConnectionFailed sollte ohne Fehler durchlaufen");

    assert_eq!(state.recents.len(), 1);
    assert_eq!(state.last_error.as_deref(), Some("locked"));
    assert_eq!(last_command_name(&state), "SetError");
}

#[test]
fn test_query_finished_success_records_history_last() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.connection = ConnectionState::connected("/data/a.mx");
    state.last_error = Some("alter Fehler".into());

    controller
        .handle_intent(
            &mut state,
            AppIntent::QueryFinished {
                query_text: "MATCH (n) RETURN n".into(),
                outcome: success(vec![Node::new(1, "Person"), Node::new(2, "Person")]),
            },
        )
        .expect("QueryFinished sollte ohne Fehler durchlaufen");

    assert!(state.last_error.is_none());
    assert_eq!(state.node_count(), 2);
    assert_eq!(state.result_view, ResultView::Graph);
    assert_eq!(last_command_name(&state), "RecordHistory");
    let entry = state.history.latest().expect("History-Eintrag erwartet");
    assert_eq!(entry.status, QueryStatus::Success);
    assert_eq!(entry.result_count, 2);
}

#[test]
fn test_query_finished_failure_keeps_graph() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::QueryFinished {
                query_text: "q1".into(),
                outcome: success(vec![Node::new(7, "City")]),
            },
        )
        .expect("QueryFinished sollte ohne Fehler durchlaufen");

    let failure = ExecutionOutcome::from_result(
        Err(QueryError::failed("unknown label")),
        Duration::from_millis(3),
    );
    controller
        .handle_intent(
            &mut state,
            AppIntent::QueryFinished {
                query_text: "q2".into(),
                outcome: failure,
            },
        )
        .expect("QueryFinished sollte ohne Fehler durchlaufen");

    assert_eq!(state.node_count(), 1);
    assert_eq!(state.last_error.as_deref(), Some("unknown label"));
    let entry = state.history.latest().expect("History-Eintrag erwartet");
    assert_eq!(entry.query_text, "q2");
    assert_eq!(entry.status, QueryStatus::Error);
    assert_eq!(entry.duration_ms, 3);
}

#[test]
fn test_selection_requested_reveals_properties_once() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::TopPanelToggled {
                panel: TopPanel::Properties,
            },
        )
        .expect("TopPanelToggled sollte ohne Fehler durchlaufen");
    assert_eq!(state.layout.top_panel(), None);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectionRequested {
                selection: Selection::Node(Node::new(1, "Person")),
            },
        )
        .expect("SelectionRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.layout.top_panel(), Some(TopPanel::Properties));
    assert_eq!(last_command_name(&state), "RevealProperties");

    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectionRequested {
                selection: Selection::Node(Node::new(2, "Person")),
            },
        )
        .expect("SelectionRequested sollte ohne Fehler durchlaufen");
    assert_eq!(last_command_name(&state), "SetSelection");
}

#[test]
fn test_bottom_panel_toggle_is_independent() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::BottomPanelToggled {
                panel: BottomPanel::Analysis,
            },
        )
        .expect("BottomPanelToggled sollte ohne Fehler durchlaufen");

    assert_eq!(state.layout.bottom_panel(), Some(BottomPanel::Analysis));
    assert_eq!(state.layout.top_panel(), Some(TopPanel::Properties));
    assert!(state.layout.right_sidebar_visible());
}

#[test]
fn test_error_dismissed_clears_banner() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.last_error = Some("boom".into());

    controller
        .handle_intent(&mut state, AppIntent::ErrorDismissed)
        .expect("ErrorDismissed sollte ohne Fehler durchlaufen");

    assert!(state.last_error.is_none());
    assert_eq!(last_command_name(&state), "ClearError");
}
