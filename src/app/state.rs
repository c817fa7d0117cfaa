//! Application State: zentrale Datenhaltung.
//!
//! - `AppState`: kanonischer Zustand (Verbindung, Query, Graph, Layout, History)
//! - `Selection`: aktuell selektiertes Graph-Element

mod app_state;
mod selection;

pub use app_state::AppState;
pub use selection::{Selection, SelectionKind};
