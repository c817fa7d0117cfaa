//! Application-Layer: Store, Controller, State, Events und Feature-Handler.

pub mod command_log;
pub mod controller;
pub mod event_bus;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod layout;
pub mod query_executor;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Verbindung, Query, Graph, Layout).
pub mod state;
pub mod store;

pub use command_log::{CommandLog, CommandRecord};
pub use controller::AppController;
pub use event_bus::{AlgorithmKind, AlgorithmRequest, EventBus, SubscriptionId, RUN_ALGORITHM};
pub use events::{AppCommand, AppIntent};
pub use history::{HistoryEntry, HistoryLog, QueryStatus};
pub use layout::{BottomPanel, LayoutController, LeftTab, TopPanel};
pub use query_executor::{ExecutionOutcome, PendingQuery, QueryExecutor};
pub use state::{AppState, Selection, SelectionKind};
pub use store::{StateChange, StateStore, SubscriberId};
