//! Query-Verlauf: begrenzt, dedupliziert, neueste zuerst.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Ergebnis-Status einer Ausführung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    /// Erfolgreich ausgeführt
    Success,
    /// Vom Backend abgelehnt oder gescheitert
    Error,
}

/// Ein Eintrag im Query-Verlauf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Eindeutige Eintrags-ID
    pub id: Uuid,
    /// Ausgeführter Query-Text (eindeutig innerhalb des Logs)
    pub query_text: String,
    /// Zeitpunkt in Millisekunden seit Unix-Epoche
    pub timestamp_ms: i64,
    /// Status der Ausführung
    pub status: QueryStatus,
    /// Dauer in Millisekunden
    pub duration_ms: u64,
    /// Anzahl der Ergebnisse (0 bei Fehler)
    pub result_count: usize,
}

/// Begrenzter, deduplizierter Verlauf.
///
/// Invariante: kein `query_text` kommt doppelt vor. Ein erneut ausgeführter
/// Query ersetzt seinen alten Eintrag (egal an welcher Position) und steht
/// danach an Position 0.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_capacity(crate::shared::HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    /// Erstellt einen leeren Verlauf mit maximaler Länge (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Dedup-Insert mit aktuellem Zeitstempel.
    pub fn record(
        &mut self,
        query_text: &str,
        status: QueryStatus,
        duration_ms: u64,
        result_count: usize,
    ) -> HistoryEntry {
        self.record_at(query_text, status, duration_ms, result_count, now_millis())
    }

    /// Dedup-Insert mit explizitem Zeitstempel.
    ///
    /// Entfernt jeden Eintrag mit gleichem Text, fügt vorne ein und
    /// kürzt auf Kapazität (älteste fallen weg).
    pub fn record_at(
        &mut self,
        query_text: &str,
        status: QueryStatus,
        duration_ms: u64,
        result_count: usize,
        timestamp_ms: i64,
    ) -> HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            query_text: query_text.to_string(),
            timestamp_ms,
            status,
            duration_ms,
            result_count,
        };

        self.entries.retain(|e| e.query_text != query_text);
        self.entries.insert(0, entry.clone());
        self.entries.truncate(self.capacity);
        entry
    }

    /// Einträge, neueste zuerst.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Neuester Eintrag.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Sucht einen Eintrag per ID.
    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximale Länge.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
