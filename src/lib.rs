//! Graph Explorer Library.
//! Zustands-Koordinator (Verbindung, Queries, History, Panel-Layout) und
//! Graph-Viewport (Diff, Selektion, Suche, Algorithmen, Vollbild-Shutter).

pub mod app;
pub mod backend;
pub mod core;
pub mod error;
pub mod shared;
pub mod viewport;

pub use app::{
    AlgorithmKind, AlgorithmRequest, AppCommand, AppController, AppIntent, AppState,
    BottomPanel, EventBus, ExecutionOutcome, HistoryEntry, HistoryLog, LayoutController,
    LeftTab, PendingQuery, QueryExecutor, QueryStatus, Selection, SelectionKind, StateChange,
    StateStore, TopPanel, RUN_ALGORITHM,
};
pub use backend::{
    DatabaseBackend, FileDialog, FileFilter, JsonRecentsStore, MemoryRecentsStore, RecentsStore,
};
pub use core::{
    Camera2D, ConnectionState, Edge, ElementId, GraphViewModel, Node, Properties, PropertyValue,
    QueryResult, QueryTable, ResultView,
};
pub use error::{ConnectionError, LayoutError, QueryError};
pub use shared::ExplorerOptions;
pub use viewport::{GraphViewport, ShutterPhase, ViewportStats};
