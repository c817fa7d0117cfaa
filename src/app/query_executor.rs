//! Ausführung einzelner Queries gegen das Backend.
//!
//! Jede Ausführung bekommt eine monoton steigende Request-ID. Nur das
//! Ergebnis der zuletzt gestarteten Ausführung wird übernommen; ältere
//! Ergebnisse (langsamer Query vor schnellem Query) werden verworfen.

use crate::backend::DatabaseBackend;
use crate::core::{GraphViewModel, QueryResult, QueryTable, ResultView};
use crate::error::QueryError;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Ergebnis einer abgeschlossenen Ausführung.
#[derive(Debug, Clone)]
pub enum ExecutionOutcome {
    /// Backend lieferte ein Ergebnis
    Success {
        /// Kopiertes, ab jetzt unveränderliches View-Model
        graph: Arc<GraphViewModel>,
        /// Tabellen-Anteil
        table: Arc<QueryTable>,
        /// Empfohlene Ansicht (Tabelle bei reinen Zeilen-Ergebnissen)
        preferred_view: ResultView,
        /// Vom Backend gemeldete Dauer
        duration_ms: u64,
        /// Anzahl Ergebnisse für die History
        result_count: usize,
    },
    /// Backend lieferte einen Fehler
    Failure {
        /// Fehlermeldung für das Banner
        message: String,
        /// Gemessene Wall-Clock-Dauer
        duration_ms: u64,
    },
}

impl ExecutionOutcome {
    /// Baut das Outcome aus dem Backend-Ergebnis.
    ///
    /// Erfolg übernimmt die Backend-Dauer, Fehler die gemessene `elapsed`.
    pub fn from_result(result: Result<QueryResult, QueryError>, elapsed: Duration) -> Self {
        match result {
            Ok(result) => ExecutionOutcome::Success {
                graph: Arc::new(GraphViewModel::from_result(&result)),
                table: Arc::new(QueryTable::from_result(&result)),
                preferred_view: result.preferred_view(),
                duration_ms: result.duration_ms,
                result_count: result.result_count(),
            },
            Err(e) => ExecutionOutcome::Failure {
                message: e.to_string(),
                duration_ms: elapsed.as_millis() as u64,
            },
        }
    }

    /// Gibt `true` zurück bei Erfolg.
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionOutcome::Success { .. })
    }

    /// Dauer in Millisekunden.
    pub fn duration_ms(&self) -> u64 {
        match self {
            ExecutionOutcome::Success { duration_ms, .. }
            | ExecutionOutcome::Failure { duration_ms, .. } => *duration_ms,
        }
    }
}

/// Eine gestartete, noch nicht abgeschlossene Ausführung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    request_id: u64,
    query_text: String,
    started_at: Instant,
}

impl PendingQuery {
    /// Request-ID dieser Ausführung.
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// Ausgeführter Query-Text.
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    /// Startzeitpunkt.
    pub fn started_at(&self) -> Instant {
        self.started_at
    }
}

/// Vergibt Request-IDs und wandelt Backend-Ergebnisse in Outcomes um.
#[derive(Debug, Default)]
pub struct QueryExecutor {
    latest_request: u64,
}

impl QueryExecutor {
    /// Erstellt einen Executor ohne laufende Ausführung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet eine Ausführung und macht sie zur aktuellen.
    pub fn begin(&mut self, query_text: &str) -> PendingQuery {
        self.latest_request += 1;
        log::debug!("Query #{} gestartet: {}", self.latest_request, query_text);
        PendingQuery {
            request_id: self.latest_request,
            query_text: query_text.to_string(),
            started_at: Instant::now(),
        }
    }

    /// Zuletzt vergebene Request-ID (0 = noch keine).
    pub fn latest_request_id(&self) -> u64 {
        self.latest_request
    }

    /// Gibt `true` zurück, wenn `pending` die zuletzt gestartete Ausführung ist.
    pub fn is_current(&self, pending: &PendingQuery) -> bool {
        pending.request_id == self.latest_request
    }

    /// Schließt eine Ausführung ab. `None`, wenn sie inzwischen überholt wurde.
    pub fn complete(
        &self,
        pending: &PendingQuery,
        result: Result<QueryResult, QueryError>,
    ) -> Option<ExecutionOutcome> {
        if !self.is_current(pending) {
            log::warn!(
                "Veraltetes Query-Ergebnis #{} verworfen (aktuell: #{})",
                pending.request_id,
                self.latest_request
            );
            return None;
        }
        Some(ExecutionOutcome::from_result(
            result,
            pending.started_at.elapsed(),
        ))
    }

    /// Startet, wartet auf das Backend und schließt ab.
    pub async fn execute<B: DatabaseBackend>(
        &mut self,
        backend: &B,
        query_text: &str,
    ) -> Option<ExecutionOutcome> {
        let pending = self.begin(query_text);
        let result = backend.query(pending.query_text()).await;
        self.complete(&pending, result)
    }
}
