//! Query-Ergebnis vom Backend und tabellarische Sicht.

use super::graph::{Edge, Node};
use super::value::PropertyValue;
use serde::{Deserialize, Serialize};

/// Rohes Ergebnis einer Query, wie vom `DatabaseBackend` geliefert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Graph-Anteil: Nodes
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Graph-Anteil: Edges
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Tabellen-Anteil: Spaltennamen (z.B. `"f.path"`)
    #[serde(default)]
    pub columns: Vec<String>,
    /// Tabellen-Anteil: Zeilen
    #[serde(default)]
    pub rows: Vec<Vec<PropertyValue>>,
    /// Vom Backend gemessene Ausführungsdauer
    #[serde(default)]
    pub duration_ms: u64,
}

impl QueryResult {
    /// Anzahl der Ergebnisse für die History.
    ///
    /// Nodes zählen vorrangig; reine Tabellen-Ergebnisse zählen Zeilen.
    pub fn result_count(&self) -> usize {
        if self.nodes.is_empty() {
            self.rows.len()
        } else {
            self.nodes.len()
        }
    }

    /// Bevorzugte Ergebnis-Ansicht: Tabelle, wenn Zeilen aber keine Nodes vorliegen.
    pub fn preferred_view(&self) -> ResultView {
        if !self.rows.is_empty() && self.nodes.is_empty() {
            ResultView::Table
        } else {
            ResultView::Graph
        }
    }
}

/// Tabellarischer Teil des letzten erfolgreichen Ergebnisses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTable {
    /// Spaltennamen
    pub columns: Vec<String>,
    /// Zeilen
    pub rows: Vec<Vec<PropertyValue>>,
}

impl QueryTable {
    /// Kopiert den Tabellen-Anteil aus einem Ergebnis.
    pub fn from_result(result: &QueryResult) -> Self {
        Self {
            columns: result.columns.clone(),
            rows: result.rows.clone(),
        }
    }

    /// Zeilen als formatierte Zellen-Texte.
    pub fn formatted_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(PropertyValue::to_cell_text).collect())
            .collect()
    }
}

/// Welche Ergebnis-Ansicht die UI zeigt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResultView {
    /// Node-Link-Viewport
    #[default]
    Graph,
    /// Ergebnistabelle
    Table,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_view_preferred_only_without_nodes() {
        let mut result = QueryResult {
            columns: vec!["n.name".into()],
            rows: vec![vec![PropertyValue::from("a")]],
            ..Default::default()
        };
        assert_eq!(result.preferred_view(), ResultView::Table);
        assert_eq!(result.result_count(), 1);

        result.nodes.push(Node::new(1, "Person"));
        assert_eq!(result.preferred_view(), ResultView::Graph);

        assert_eq!(QueryResult::default().preferred_view(), ResultView::Graph);
    }

    #[test]
    fn deserializes_backend_payload() {
        let payload = r#"{
            "columns": ["n"],
            "rows": [[{"id": 1}]],
            "nodes": [{"id": 1, "label": "File", "properties": {"path": "/a"}}],
            "edges": [],
            "duration_ms": 12
        }"#;
        let result: QueryResult = serde_json::from_str(payload).expect("gültiges Ergebnis");
        assert_eq!(result.duration_ms, 12);
        assert_eq!(result.nodes[0].properties["path"], PropertyValue::from("/a"));
        assert_eq!(
            QueryTable::from_result(&result).formatted_rows(),
            vec![vec![r#"{"id":1}"#.to_string()]]
        );
    }
}
