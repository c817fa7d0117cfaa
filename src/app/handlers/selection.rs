//! Handler für Selektions-Operationen.

use crate::app::{AppState, Selection};

/// Setzt die Selektion.
pub fn set(state: &mut AppState, selection: Selection) {
    state.selection = selection;
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    state.selection = Selection::None;
}
