//! Graph-Elemente und das kanonische Graph-View-Model.

use super::query_result::QueryResult;
use super::value::Properties;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// ID eines Nodes oder einer Edge (vom Backend vergeben).
pub type ElementId = i64;

/// Node im Graph-View-Model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Backend-ID (eindeutig pro View-Model)
    pub id: ElementId,
    /// Node-Label (bestimmt die Farbe im Viewport)
    pub label: String,
    /// Properties des Nodes
    #[serde(default)]
    pub properties: Properties,
    /// Optionale Darstellungsgröße
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_size: Option<f32>,
    /// Optionale Farbe als Hex-String (`#rrggbb`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Node {
    /// Erstellt einen Node ohne Properties.
    pub fn new(id: ElementId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            properties: Properties::new(),
            visual_size: None,
            color: None,
        }
    }

    /// Builder: fügt eine Property hinzu.
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<super::PropertyValue>,
    ) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// Gerichtete Edge zwischen zwei Nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Backend-ID
    pub id: ElementId,
    /// Start-Node
    #[serde(rename = "source")]
    pub source_id: ElementId,
    /// Ziel-Node
    #[serde(rename = "target")]
    pub target_id: ElementId,
    /// Relationstyp
    pub label: String,
    /// Properties der Edge
    #[serde(default)]
    pub properties: Properties,
}

impl Edge {
    /// Erstellt eine Edge ohne Properties.
    pub fn new(
        id: ElementId,
        source_id: ElementId,
        target_id: ElementId,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            source_id,
            target_id,
            label: label.into(),
            properties: Properties::new(),
        }
    }
}

/// Kanonisches Graph-View-Model.
///
/// Wird vom Store als `Arc` veröffentlicht und danach nie mutiert;
/// jede Änderung erzeugt ein neues Objekt. Der Viewport arbeitet
/// ausschließlich auf seiner eigenen Render-Kopie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphViewModel {
    /// Nodes (IDs eindeutig)
    pub nodes: Vec<Node>,
    /// Edges
    pub edges: Vec<Edge>,
}

impl GraphViewModel {
    /// Leeres View-Model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut ein View-Model aus einem Query-Ergebnis.
    ///
    /// Kopiert jeden Node/jede Edge. Doppelte IDs (gleicher Node in mehreren
    /// Ergebniszeilen) werden auf das erste Vorkommen reduziert.
    pub fn from_result(result: &QueryResult) -> Self {
        let mut seen_nodes = HashSet::with_capacity(result.nodes.len());
        let nodes = result
            .nodes
            .iter()
            .filter(|node| seen_nodes.insert(node.id))
            .cloned()
            .collect();

        let mut seen_edges = HashSet::with_capacity(result.edges.len());
        let edges = result
            .edges
            .iter()
            .filter(|edge| seen_edges.insert(edge.id))
            .cloned()
            .collect();

        Self { nodes, edges }
    }

    /// Anzahl der Nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl der Edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Gibt `true` zurück, wenn weder Nodes noch Edges vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Prüft, ob ein Node mit dieser ID existiert.
    pub fn contains_node(&self, id: ElementId) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    /// Prüft, ob eine Edge mit dieser ID existiert.
    pub fn contains_edge(&self, id: ElementId) -> bool {
        self.edges.iter().any(|edge| edge.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_result_deduplicates_repeated_nodes() {
        let result = QueryResult {
            nodes: vec![Node::new(1, "Person"), Node::new(2, "City"), Node::new(1, "Person")],
            edges: vec![Edge::new(10, 1, 2, "LIVES_IN"), Edge::new(10, 1, 2, "LIVES_IN")],
            ..Default::default()
        };

        let vm = GraphViewModel::from_result(&result);
        assert_eq!(vm.node_count(), 2);
        assert_eq!(vm.edge_count(), 1);
        assert!(vm.contains_node(2));
        assert!(vm.contains_edge(10));
        assert!(!vm.contains_edge(11));
    }

    #[test]
    fn edge_uses_source_target_on_the_wire() {
        let edge: Edge =
            serde_json::from_str(r#"{"id":3,"source":1,"target":2,"label":"KNOWS"}"#)
                .expect("gültige Edge");
        assert_eq!(edge.source_id, 1);
        assert_eq!(edge.target_id, 2);
        assert!(edge.properties.is_empty());
    }
}
