//! StateStore: einzige Quelle der Wahrheit für Konsumenten.
//!
//! Alle Mutationen laufen als `AppIntent` durch den `AppController`.
//! Async-Aktionen warten nur auf das Backend und übergeben danach einen
//! Intent; der Store selbst ist ein single-threaded Reducer.

use super::{
    AppController, AppIntent, AppState, BottomPanel, ExecutionOutcome, LeftTab, PendingQuery,
    QueryExecutor, Selection, TopPanel,
};
use crate::backend::{DatabaseBackend, FileDialog, FileFilter, RecentsStore};
use crate::core::{QueryResult, ResultView};
use crate::error::{ConnectionError, QueryError};
use crate::shared::ExplorerOptions;
use regex::Regex;
use std::sync::LazyLock;

/// Zeichen, die in Datenbanknamen nicht erlaubt sind.
static INVALID_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("statisches Regex-Muster"));

/// Vom Dispatch betroffener State-Bereich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateChange {
    /// Verbindung geöffnet/geschlossen
    Connection,
    /// Recents-Liste
    Recents,
    /// Query-Text
    QueryText,
    /// Graph/Tabelle
    Graph,
    /// Selektion
    Selection,
    /// Panel-Layout
    Layout,
    /// Query-Verlauf
    History,
    /// Fehler-Banner
    Error,
    /// Ergebnis-Ansicht
    ResultView,
}

/// Handle einer State-Subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&AppState, &[StateChange])>;

/// Komposition aus State, Controller, Executor und externen Kollaborateuren.
pub struct StateStore<B: DatabaseBackend, R: RecentsStore> {
    state: AppState,
    controller: AppController,
    executor: QueryExecutor,
    backend: B,
    recents_store: R,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
}

impl<B: DatabaseBackend, R: RecentsStore> StateStore<B, R> {
    /// Baut den Store und lädt die Recents einmalig.
    pub fn new(backend: B, recents_store: R, options: ExplorerOptions) -> Self {
        let mut state = AppState::with_options(options);

        let mut recents: Vec<String> = Vec::new();
        for path in recents_store.load() {
            if !path.is_empty() && !recents.contains(&path) {
                recents.push(path);
            }
        }
        recents.truncate(state.options.recents_capacity.max(1));
        state.recents = recents;

        log::info!("StateStore gestartet ({} Recents)", state.recents.len());
        Self {
            state,
            controller: AppController::new(),
            executor: QueryExecutor::new(),
            backend,
            recents_store,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Read-only Sicht auf den State.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Das Backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Der Recents-Store.
    pub fn recents_store(&self) -> &R {
        &self.recents_store
    }

    /// Registriert einen Beobachter. Er erhält nach jeder Änderung den
    /// vollständigen State und die betroffenen Bereiche.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&AppState, &[StateChange]) + 'static,
    ) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Entfernt einen Beobachter.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Verarbeitet einen Intent, persistiert Recents und benachrichtigt Beobachter.
    ///
    /// Scheitert ein Command mittendrin, werden die bereits angewendeten
    /// Änderungen trotzdem gemeldet, bevor der Fehler zurückkommt.
    pub fn dispatch(&mut self, intent: AppIntent) -> anyhow::Result<Vec<StateChange>> {
        let mut changes = Vec::new();
        let result = self
            .controller
            .apply_intent(&mut self.state, intent, &mut changes);
        self.publish(&changes);
        result.map(|()| changes)
    }

    fn publish(&mut self, changes: &[StateChange]) {
        if changes.is_empty() {
            return;
        }
        if changes.contains(&StateChange::Recents) {
            self.recents_store.save(&self.state.recents);
        }
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state, changes);
        }
    }

    /// Dispatch ohne Fehlerweitergabe (Fehler werden geloggt).
    fn apply(&mut self, intent: AppIntent) {
        if let Err(e) = self.dispatch(intent) {
            log::error!("Intent konnte nicht verarbeitet werden: {:#}", e);
        }
    }

    // ── Verbindung ──────────────────────────────────────────────

    /// Öffnet eine bestehende Datenbank.
    ///
    /// Bei Fehler wird der Pfad aus den Recents entfernt und der Fehler
    /// an den Aufrufer weitergegeben.
    pub async fn connect(&mut self, path: &str) -> Result<(), ConnectionError> {
        if path.trim().is_empty() {
            return self.finish_connection(path, Err(ConnectionError::EmptyPath), false);
        }
        let result = self.backend.connect_existing(path).await;
        self.finish_connection(path, result, true)
    }

    /// Legt `parent_dir/name.<ext>` an und verbindet.
    ///
    /// `name` wird auf `[A-Za-z0-9_-]` reduziert. Gibt den Pfad zurück.
    pub async fn create_database(
        &mut self,
        parent_dir: &str,
        name: &str,
    ) -> Result<String, ConnectionError> {
        let path = match compose_database_path(
            parent_dir,
            name,
            &self.state.options.database_extension,
        ) {
            Ok(path) => path,
            Err(e) => {
                self.apply(AppIntent::ConnectionFailed {
                    path: String::new(),
                    prune: false,
                    message: e.to_string(),
                });
                return Err(e);
            }
        };

        let result = self.backend.create(&path).await;
        self.finish_connection(&path, result, false)?;
        Ok(path)
    }

    fn finish_connection(
        &mut self,
        path: &str,
        result: Result<(), ConnectionError>,
        prune: bool,
    ) -> Result<(), ConnectionError> {
        match result {
            Ok(()) => {
                self.apply(AppIntent::ConnectionEstablished {
                    path: path.to_string(),
                });
                Ok(())
            }
            Err(e) => {
                log::warn!("Verbindung zu {} fehlgeschlagen: {}", path, e);
                self.apply(AppIntent::ConnectionFailed {
                    path: path.to_string(),
                    prune,
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Schließt die Datenbank. Backend-Fehler werden nur geloggt.
    pub async fn disconnect(&mut self) {
        if let Err(e) = self.backend.disconnect().await {
            log::warn!("Fehler beim Schließen der Datenbank (ignoriert): {}", e);
        }
        self.apply(AppIntent::Disconnected);
    }

    /// Zeigt den Öffnen-Dialog und verbindet bei Auswahl.
    ///
    /// `Ok(false)`, wenn der Dialog abgebrochen wurde.
    pub async fn open_database_dialog<D: FileDialog>(
        &mut self,
        dialog: &D,
    ) -> Result<bool, ConnectionError> {
        let filters = [FileFilter::new(
            "Graph Database Files",
            &self.state.options.open_file_extensions,
        )];
        let Some(path) = dialog.open_file(&filters).await else {
            log::debug!("Öffnen-Dialog abgebrochen");
            return Ok(false);
        };
        log::info!("Öffne Datenbank: {}", path);
        self.connect(&path).await?;
        Ok(true)
    }

    // ── Query ───────────────────────────────────────────────────

    /// Setzt den Query-Text (leerer Text = Editor leeren).
    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.apply(AppIntent::QueryTextChanged { text: text.into() });
    }

    /// Prüft Verbindung und Text, übernimmt ggf. den Override.
    fn prepare_query(&mut self, override_text: Option<&str>) -> Option<String> {
        if !self.state.is_connected() {
            log::debug!("run_query ohne Verbindung ignoriert");
            return None;
        }
        if let Some(text) = override_text {
            self.set_query_text(text);
        }
        let text = self.state.query_text.trim();
        if text.is_empty() {
            log::debug!("Leerer Query-Text ignoriert");
            return None;
        }
        Some(text.to_string())
    }

    /// Startet eine Ausführung ohne Backend-Aufruf.
    ///
    /// `None`, wenn keine Verbindung besteht oder der Text leer ist.
    /// `override_text` wird zum neuen Query-Text (History-Replay).
    pub fn begin_query(&mut self, override_text: Option<&str>) -> Option<PendingQuery> {
        let text = self.prepare_query(override_text)?;
        Some(self.executor.begin(&text))
    }

    /// Übernimmt das Ergebnis einer Ausführung.
    ///
    /// Gibt `false` zurück, wenn die Ausführung inzwischen überholt wurde;
    /// dann bleiben Graph, Banner und History unverändert.
    pub fn complete_query(
        &mut self,
        pending: &PendingQuery,
        result: Result<QueryResult, QueryError>,
    ) -> bool {
        let Some(outcome) = self.executor.complete(pending, result) else {
            return false;
        };
        self.finish_query(pending.query_text(), outcome);
        true
    }

    fn finish_query(&mut self, query_text: &str, outcome: ExecutionOutcome) {
        if let ExecutionOutcome::Success {
            duration_ms,
            result_count,
            ..
        } = &outcome
        {
            log::info!(
                "Query in {} ms: {} Ergebnisse ({})",
                duration_ms,
                result_count,
                query_text
            );
        }
        self.apply(AppIntent::QueryFinished {
            query_text: query_text.to_string(),
            outcome,
        });
    }

    /// Führt den aktuellen (oder übergebenen) Query aus.
    ///
    /// Gibt `true` zurück, wenn ein Ergebnis übernommen wurde.
    pub async fn run_query(&mut self, override_text: Option<&str>) -> bool {
        let Some(text) = self.prepare_query(override_text) else {
            return false;
        };
        let Some(outcome) = self.executor.execute(&self.backend, &text).await else {
            return false;
        };
        self.finish_query(&text, outcome);
        true
    }

    // ── Selektion, Layout, Banner ───────────────────────────────

    /// Setzt die Selektion (`Selection::None` hebt sie auf).
    pub fn select(&mut self, selection: Selection) {
        self.apply(AppIntent::SelectionRequested { selection });
    }

    /// Hebt die Selektion auf.
    pub fn clear_selection(&mut self) {
        self.apply(AppIntent::SelectionCleared);
    }

    /// Linken Tab umschalten.
    pub fn toggle_left(&mut self, tab: LeftTab) {
        self.apply(AppIntent::LeftTabToggled { tab });
    }

    /// Oberes Panel umschalten.
    pub fn toggle_top(&mut self, panel: TopPanel) {
        self.apply(AppIntent::TopPanelToggled { panel });
    }

    /// Unteres Panel umschalten.
    pub fn toggle_bottom(&mut self, panel: BottomPanel) {
        self.apply(AppIntent::BottomPanelToggled { panel });
    }

    /// Ergebnis-Ansicht wechseln.
    pub fn set_result_view(&mut self, view: ResultView) {
        self.apply(AppIntent::ResultViewChanged { view });
    }

    /// Fehler-Banner schließen.
    pub fn clear_error(&mut self) {
        self.apply(AppIntent::ErrorDismissed);
    }

    /// Recents für die Suche im Willkommens-Bildschirm.
    pub fn filtered_recents(&self, term: &str) -> Vec<&str> {
        self.state.filtered_recents(term)
    }

    /// Beendet den Store: schließt eine offene Verbindung und entfernt alle Beobachter.
    pub async fn shutdown(mut self) -> AppState {
        if self.state.is_connected() {
            self.disconnect().await;
        }
        self.subscribers.clear();
        log::info!("StateStore beendet");
        self.state
    }
}

/// Baut `parent_dir/name.<ext>` mit bereinigtem Namen.
pub fn compose_database_path(
    parent_dir: &str,
    name: &str,
    extension: &str,
) -> Result<String, ConnectionError> {
    let clean = INVALID_NAME_CHARS.replace_all(name, "");
    if clean.is_empty() {
        return Err(ConnectionError::InvalidName {
            name: name.to_string(),
        });
    }
    let parent = parent_dir.trim_end_matches(|c| c == '/' || c == '\\');
    Ok(format!("{parent}/{clean}.{extension}"))
}
