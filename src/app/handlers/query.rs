//! Handler für Query-Ergebnisse und History.

use crate::app::{AppState, QueryStatus};
use crate::core::{GraphViewModel, QueryTable, ResultView};
use std::sync::Arc;

/// Veröffentlicht ein neues Ergebnis (ersetzt das alte vollständig).
pub fn apply_result(state: &mut AppState, graph: Arc<GraphViewModel>, table: Arc<QueryTable>) {
    log::info!(
        "Ergebnis übernommen: {} Nodes, {} Edges, {} Zeilen",
        graph.node_count(),
        graph.edge_count(),
        table.rows.len()
    );
    state.graph = graph;
    state.table = table;
}

/// Leert Graph und Tabelle.
pub fn clear_graph(state: &mut AppState) {
    state.graph = Arc::new(GraphViewModel::new());
    state.table = Arc::new(QueryTable::default());
    state.result_view = ResultView::Graph;
}

/// Zeichnet einen History-Eintrag auf.
pub fn record_history(
    state: &mut AppState,
    query_text: &str,
    status: QueryStatus,
    duration_ms: u64,
    result_count: usize,
) {
    let entry = state
        .history
        .record(query_text, status, duration_ms, result_count);
    log::debug!(
        "History: {:?} in {} ms ({} Ergebnisse): {}",
        entry.status,
        entry.duration_ms,
        entry.result_count,
        entry.query_text
    );
}
