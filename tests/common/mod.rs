//! Gemeinsame Test-Helfer: Fake-Backend, Fake-Dialog, Beispieldaten.

#![allow(dead_code)]

use graph_explorer::{
    ConnectionError, DatabaseBackend, Edge, ExplorerOptions, FileDialog, FileFilter,
    MemoryRecentsStore, Node, PropertyValue, QueryError, QueryResult, StateStore,
};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

/// Initialisiert env_logger einmalig im Test-Modus (`RUST_LOG=debug`).
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// In-Memory-Backend mit vorbereiteten Antworten.
#[derive(Default)]
pub struct FakeBackend {
    existing: RefCell<HashSet<String>>,
    results: RefCell<HashMap<String, Result<QueryResult, QueryError>>>,
    pub fail_create: Cell<bool>,
    pub fail_disconnect: Cell<bool>,
    pub connect_calls: RefCell<Vec<String>>,
    pub create_calls: RefCell<Vec<String>>,
    pub query_calls: RefCell<Vec<String>>,
    pub disconnect_calls: Cell<usize>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pfad, den `connect_existing` akzeptiert.
    pub fn with_database(self, path: &str) -> Self {
        self.existing.borrow_mut().insert(path.to_string());
        self
    }

    /// Antwort für einen Query-Text.
    pub fn with_result(self, query: &str, result: QueryResult) -> Self {
        self.results
            .borrow_mut()
            .insert(query.to_string(), Ok(result));
        self
    }

    /// Fehler für einen Query-Text.
    pub fn with_error(self, query: &str, message: &str) -> Self {
        self.results
            .borrow_mut()
            .insert(query.to_string(), Err(QueryError::failed(message)));
        self
    }
}

impl DatabaseBackend for FakeBackend {
    async fn connect_existing(&self, path: &str) -> Result<(), ConnectionError> {
        self.connect_calls.borrow_mut().push(path.to_string());
        if self.existing.borrow().contains(path) {
            Ok(())
        } else {
            Err(ConnectionError::rejected(path, "no such database"))
        }
    }

    async fn create(&self, path: &str) -> Result<(), ConnectionError> {
        self.create_calls.borrow_mut().push(path.to_string());
        if self.fail_create.get() {
            return Err(ConnectionError::rejected(path, "permission denied"));
        }
        self.existing.borrow_mut().insert(path.to_string());
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), ConnectionError> {
        self.disconnect_calls.set(self.disconnect_calls.get() + 1);
        if self.fail_disconnect.get() {
            return Err(ConnectionError::NotConnected);
        }
        Ok(())
    }

    async fn query(&self, text: &str) -> Result<QueryResult, QueryError> {
        self.query_calls.borrow_mut().push(text.to_string());
        self.results
            .borrow()
            .get(text)
            .cloned()
            .unwrap_or_else(|| Err(QueryError::failed(format!("unknown query: {text}"))))
    }
}

/// Dialog mit fester Auswahl (`None` = abgebrochen).
pub struct FakeDialog {
    pub pick: Option<String>,
    pub seen_filters: RefCell<Vec<FileFilter>>,
}

impl FakeDialog {
    pub fn picking(path: Option<&str>) -> Self {
        Self {
            pick: path.map(str::to_string),
            seen_filters: RefCell::new(Vec::new()),
        }
    }
}

impl FileDialog for FakeDialog {
    async fn open_file(&self, filters: &[FileFilter]) -> Option<String> {
        self.seen_filters.borrow_mut().extend_from_slice(filters);
        self.pick.clone()
    }

    async fn open_directory(&self) -> Option<String> {
        self.pick.clone()
    }
}

pub type TestStore = StateStore<FakeBackend, MemoryRecentsStore>;

pub fn store(backend: FakeBackend) -> TestStore {
    init_logger();
    StateStore::new(backend, MemoryRecentsStore::new(), ExplorerOptions::default())
}

pub fn store_with_recents(backend: FakeBackend, recents: &[&str]) -> TestStore {
    init_logger();
    let recents = MemoryRecentsStore::with_entries(recents.iter().map(|s| s.to_string()).collect());
    StateStore::new(backend, recents, ExplorerOptions::default())
}

/// Kleiner sozialer Graph: Alice → Bob → Carol, Alice → Carol.
pub fn social_result() -> QueryResult {
    QueryResult {
        nodes: vec![
            Node::new(1, "Person").with_property("name", "Alice"),
            Node::new(2, "Person").with_property("name", "Bob"),
            Node::new(3, "Person").with_property("name", "Carol"),
            Node::new(4, "City").with_property("name", "Berlin"),
        ],
        edges: vec![
            Edge::new(10, 1, 2, "KNOWS"),
            Edge::new(11, 2, 3, "KNOWS"),
            Edge::new(12, 1, 3, "KNOWS"),
            Edge::new(13, 3, 4, "LIVES_IN"),
        ],
        columns: vec!["n".into()],
        rows: Vec::new(),
        duration_ms: 7,
    }
}

/// Einzelner Node mit anderer ID.
pub fn other_result() -> QueryResult {
    QueryResult {
        nodes: vec![Node::new(50, "Movie").with_property("title", "Metropolis")],
        edges: Vec::new(),
        columns: vec!["m".into()],
        rows: Vec::new(),
        duration_ms: 3,
    }
}

/// Reines Tabellen-Ergebnis.
pub fn table_result() -> QueryResult {
    QueryResult {
        nodes: Vec::new(),
        edges: Vec::new(),
        columns: vec!["p.name".into(), "p.age".into()],
        rows: vec![
            vec![PropertyValue::from("Alice"), PropertyValue::Int(36)],
            vec![PropertyValue::from("Bob"), PropertyValue::Null],
        ],
        duration_ms: 2,
    }
}
