//! Handler für Panel-Layout, Query-Text und Fehler-Banner.

use crate::app::{AppState, BottomPanel, LeftTab, TopPanel};
use crate::core::ResultView;

/// Schaltet den linken Tab um.
pub fn toggle_left(state: &mut AppState, tab: LeftTab) {
    state.layout.toggle_left(tab);
}

/// Schaltet das obere Panel um.
pub fn toggle_top(state: &mut AppState, panel: TopPanel) {
    state.layout.toggle_top(panel);
}

/// Schaltet das untere Panel um.
pub fn toggle_bottom(state: &mut AppState, panel: BottomPanel) {
    state.layout.toggle_bottom(panel);
}

/// Zeigt das Eigenschaften-Panel.
pub fn reveal_properties(state: &mut AppState) {
    state.layout.reveal_properties();
}

/// Setzt den Query-Text.
pub fn set_query_text(state: &mut AppState, text: String) {
    state.query_text = text;
}

/// Setzt die Ergebnis-Ansicht.
pub fn set_result_view(state: &mut AppState, view: ResultView) {
    state.result_view = view;
}

/// Setzt das Fehler-Banner.
pub fn set_error(state: &mut AppState, message: String) {
    log::warn!("{}", message);
    state.last_error = Some(message);
}

/// Entfernt das Fehler-Banner.
pub fn clear_error(state: &mut AppState) {
    state.last_error = None;
}
