//! Recents-Persistenz: im Speicher oder als JSON-Datei.

use super::RecentsStore;
use std::path::{Path, PathBuf};

/// Recents nur im Speicher (Tests, Sessions ohne Persistenz).
#[derive(Debug, Clone, Default)]
pub struct MemoryRecentsStore {
    entries: Vec<String>,
    saves: usize,
}

impl MemoryRecentsStore {
    /// Leerer Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store mit vorbelegten Einträgen.
    pub fn with_entries(entries: Vec<String>) -> Self {
        Self { entries, saves: 0 }
    }

    /// Zuletzt gespeicherte Liste.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Anzahl der `save`-Aufrufe.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl RecentsStore for MemoryRecentsStore {
    fn load(&self) -> Vec<String> {
        self.entries.clone()
    }

    fn save(&mut self, recents: &[String]) {
        self.entries = recents.to_vec();
        self.saves += 1;
    }
}

/// Recents als JSON-Array in einer Datei.
#[derive(Debug, Clone)]
pub struct JsonRecentsStore {
    path: PathBuf,
}

impl JsonRecentsStore {
    /// Store auf einer Datei.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Dateipfad.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecentsStore for JsonRecentsStore {
    fn load(&self) -> Vec<String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => {
                log::info!("Keine Recents-Datei gefunden: {}", self.path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!(
                    "Recents-Datei fehlerhaft ({}), starte mit leerer Liste: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, recents: &[String]) {
        let result = serde_json::to_string_pretty(recents)
            .map_err(anyhow::Error::from)
            .and_then(|json| std::fs::write(&self.path, json).map_err(anyhow::Error::from));
        if let Err(e) = result {
            log::warn!(
                "Recents konnten nicht gespeichert werden ({}): {:#}",
                self.path.display(),
                e
            );
        }
    }
}
