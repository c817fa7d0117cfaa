//! Handler für Verbindung und Recents.

use crate::app::AppState;
use crate::core::ConnectionState;

/// Übernimmt eine bestätigte Verbindung.
pub fn set(state: &mut AppState, path: String) -> anyhow::Result<()> {
    anyhow::ensure!(!path.trim().is_empty(), "Leerer Datenbankpfad");
    log::info!("Verbunden mit {}", path);
    state.connection = ConnectionState::connected(path);
    Ok(())
}

/// Entfernt die Verbindung.
pub fn clear(state: &mut AppState) {
    if let Some(path) = state.connection.path() {
        log::info!("Verbindung zu {} getrennt", path);
    }
    state.connection = ConnectionState::disconnected();
}

/// Fügt `path` vorne in die Recents ein (Dedup, Kapazität).
pub fn remember_recent(state: &mut AppState, path: String) {
    state.recents.retain(|p| *p != path);
    state.recents.insert(0, path);
    state.recents.truncate(state.options.recents_capacity.max(1));
}

/// Entfernt `path` aus den Recents.
pub fn forget_recent(state: &mut AppState, path: &str) {
    let before = state.recents.len();
    state.recents.retain(|p| p != path);
    if state.recents.len() != before {
        log::info!("Pfad aus Recents entfernt: {}", path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remember_dedups_and_caps() {
        let mut state = AppState::new();
        state.options.recents_capacity = 3;
        for path in ["/a", "/b", "/c", "/a", "/d"] {
            remember_recent(&mut state, path.to_string());
        }
        assert_eq!(state.recents, vec!["/d", "/a", "/c"]);
    }

    #[test]
    fn set_rejects_blank_path() {
        let mut state = AppState::new();
        assert!(set(&mut state, "  ".into()).is_err());
        assert!(!state.is_connected());
    }
}
