//! Zentrale Konfiguration für den Graph Explorer.
//!
//! `ExplorerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Store ───────────────────────────────────────────────────────────

/// Maximale Anzahl History-Einträge.
pub const HISTORY_CAPACITY: usize = 50;
/// Maximale Anzahl zuletzt geöffneter Datenbanken.
pub const RECENTS_CAPACITY: usize = 10;
/// Query-Text beim Start.
pub const DEFAULT_QUERY: &str = "MATCH (n)-[r]->(m) RETURN n,r,m LIMIT 50";
/// Dateiendung neu angelegter Datenbanken.
pub const DATABASE_EXTENSION: &str = "mx";

// ── Shutter (Vollbild-Übergang) ─────────────────────────────────────

/// Dauer des Ausblendens bis zum Abkoppeln vom Rendering.
pub const SHUTTER_FADE_OUT_MS: u64 = 250;
/// Wartezeit nach dem Geometrie-Wechsel, bis der Container eingeschwungen ist.
pub const SHUTTER_SETTLE_MS: u64 = 550;

// ── Node-Darstellung ────────────────────────────────────────────────

/// Basisgröße eines Nodes.
pub const NODE_BASE_SIZE: f32 = 20.0;
/// Obergrenze der Node-Größe.
pub const NODE_MAX_SIZE: f32 = 60.0;
/// Zoom beim Fokussieren eines angeklickten Nodes.
pub const FOCUS_ZOOM: f32 = 4.0;
/// Rand beim Einrahmen in Pixeln.
pub const FIT_PADDING: f32 = 60.0;

// ── Algorithmen ─────────────────────────────────────────────────────

/// Dämpfungsfaktor für PageRank.
pub const PAGERANK_DAMPING: f64 = 0.85;
/// Maximale PageRank-Iterationen.
pub const PAGERANK_ITERATIONS: usize = 50;
/// Schwelle der normierten Degree-Centrality für hervorgehobene Hubs.
pub const DEGREE_THRESHOLD: f64 = 0.3;

/// Alle zur Laufzeit änderbaren Explorer-Optionen.
/// Wird als `graph_explorer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerOptions {
    // ── Store ───────────────────────────────────────────────────
    /// Kapazität des Query-Verlaufs
    pub history_capacity: usize,
    /// Kapazität der Recents-Liste
    pub recents_capacity: usize,
    /// Initialer Query-Text
    pub default_query: String,
    /// Endung neu angelegter Datenbanken (ohne Punkt)
    pub database_extension: String,
    /// Dateiendungen für den Öffnen-Dialog
    pub open_file_extensions: Vec<String>,

    // ── Shutter ─────────────────────────────────────────────────
    /// Ausblenddauer (Phase 1 → 2) in ms
    pub shutter_fade_out_ms: u64,
    /// Einschwingzeit nach Geometrie-Wechsel (Phase 2 → 3) in ms
    pub shutter_settle_ms: u64,

    // ── Nodes ───────────────────────────────────────────────────
    /// Basisgröße eines Nodes
    pub node_base_size: f32,
    /// Maximale Node-Größe
    pub node_max_size: f32,
    /// Größenzuwachs bei maximalem PageRank-Score
    pub pagerank_size_gain: f32,
    /// Dauer der Größen-Animation in ms
    pub size_animation_ms: u64,
    /// Zoom beim Fokussieren eines Nodes
    pub focus_zoom: f32,
    /// Rand beim Einrahmen in Pixeln
    pub fit_padding: f32,

    // ── Algorithmen ─────────────────────────────────────────────
    /// PageRank-Dämpfung
    pub pagerank_damping: f64,
    /// Maximale PageRank-Iterationen
    pub pagerank_iterations: usize,
    /// Schwelle für Degree-Centrality-Hubs (normiert)
    pub degree_threshold: f64,
    /// Größe hervorgehobener Hubs
    pub promoted_size: f32,
    /// Deckkraft abgesenkter Nodes
    pub demoted_opacity: f32,
    /// Größenfaktor abgesenkter Nodes
    pub demoted_size_factor: f32,

    // ── Force-Layout ────────────────────────────────────────────
    /// Iterationen der Force-Simulation
    pub layout_iterations: usize,
    /// Ideale Kantenlänge
    pub layout_ideal_edge_length: f32,
    /// Anziehung zum Ursprung
    pub layout_gravity: f32,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            history_capacity: HISTORY_CAPACITY,
            recents_capacity: RECENTS_CAPACITY,
            default_query: DEFAULT_QUERY.to_string(),
            database_extension: DATABASE_EXTENSION.to_string(),
            open_file_extensions: vec!["mx".into(), "db".into(), "bin".into()],
            shutter_fade_out_ms: SHUTTER_FADE_OUT_MS,
            shutter_settle_ms: SHUTTER_SETTLE_MS,
            node_base_size: NODE_BASE_SIZE,
            node_max_size: NODE_MAX_SIZE,
            pagerank_size_gain: 40.0,
            size_animation_ms: 500,
            focus_zoom: FOCUS_ZOOM,
            fit_padding: FIT_PADDING,
            pagerank_damping: PAGERANK_DAMPING,
            pagerank_iterations: PAGERANK_ITERATIONS,
            degree_threshold: DEGREE_THRESHOLD,
            promoted_size: 30.0,
            demoted_opacity: 0.2,
            demoted_size_factor: 0.8,
            layout_iterations: 300,
            layout_ideal_edge_length: 90.0,
            layout_gravity: 0.4,
        }
    }
}

impl ExplorerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("graph_explorer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("graph_explorer.toml")
    }

    /// Ausblenddauer als `Duration`.
    pub fn shutter_fade_out(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.shutter_fade_out_ms)
    }

    /// Einschwingzeit als `Duration`.
    pub fn shutter_settle(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.shutter_settle_ms)
    }

    /// Dauer der Größen-Animation als `Duration`.
    pub fn size_animation(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.size_animation_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_toml_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("graph_explorer.toml");

        let mut options = ExplorerOptions::default();
        options.history_capacity = 7;
        options.default_query = "MATCH (n) RETURN n".into();
        options.save_to_file(&path).expect("speichern");

        let loaded = ExplorerOptions::load_from_file(&path);
        assert_eq!(loaded, options);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "recents_capacity = 3\n").expect("schreiben");

        let loaded = ExplorerOptions::load_from_file(&path);
        assert_eq!(loaded.recents_capacity, 3);
        assert_eq!(loaded.history_capacity, HISTORY_CAPACITY);
        assert_eq!(loaded.default_query, DEFAULT_QUERY);
    }

    #[test]
    fn broken_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "history_capacity = \"viele\"").expect("schreiben");

        assert_eq!(ExplorerOptions::load_from_file(&path), ExplorerOptions::default());
        assert_eq!(
            ExplorerOptions::load_from_file(&dir.path().join("fehlt.toml")),
            ExplorerOptions::default()
        );
    }
}
