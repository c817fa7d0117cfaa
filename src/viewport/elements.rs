//! Private Render-Kopie der Graph-Elemente.
//!
//! Wird bei jedem `apply_data` komplett neu aus dem View-Model gebaut und
//! danach nur vom Viewport mutiert (Positionen, Größen, Farben).

use crate::core::{Edge, ElementId, GraphViewModel, Node, Properties};
use crate::shared::palette::{self, EDGE_COLOR, HIGHLIGHT_COLOR};
use glam::Vec2;
use indexmap::IndexMap;

/// Goldener Winkel für die Phyllotaxis-Startverteilung.
const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// Visuelle Gewichtung durch Degree Centrality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    /// Unverändert
    #[default]
    Normal,
    /// Hub: Akzentfarbe, größer, volle Deckkraft
    Promoted,
    /// Randknoten: kleiner, transparent
    Demoted,
}

/// Gerenderter Node.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNode {
    pub id: ElementId,
    pub label: String,
    pub properties: Properties,
    /// Weltposition
    pub position: Vec2,
    /// Aktuelle (ggf. animierte) Größe
    pub size: f32,
    /// Startgröße der laufenden Animation
    pub size_from: f32,
    /// Zielgröße der laufenden Animation
    pub target_size: f32,
    /// Label-Farbe bzw. Akzentfarbe
    pub color: [f32; 4],
    pub opacity: f32,
    /// Such-Treffer
    pub highlighted: bool,
    pub emphasis: Emphasis,
}

impl RenderedNode {
    /// Farbe, mit der der Node gezeichnet wird.
    pub fn display_color(&self) -> [f32; 4] {
        let mut color = if self.highlighted {
            HIGHLIGHT_COLOR
        } else {
            self.color
        };
        color[3] *= self.opacity;
        color
    }

    /// Node so, wie er gerade gerendert ist (für die Selektion).
    pub fn to_node(&self) -> Node {
        Node {
            id: self.id,
            label: self.label.clone(),
            properties: self.properties.clone(),
            visual_size: Some(self.size),
            color: Some(palette::rgba_to_hex(self.color)),
        }
    }

    /// Suchtreffer: Label enthält `needle` (klein geschrieben) oder ID exakt gleich `term`.
    pub fn matches(&self, needle: &str, term: &str) -> bool {
        self.label.to_lowercase().contains(needle) || self.id.to_string() == term
    }
}

/// Gerenderte Edge.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEdge {
    pub id: ElementId,
    pub source_id: ElementId,
    pub target_id: ElementId,
    pub label: String,
    pub properties: Properties,
    pub color: [f32; 4],
}

impl RenderedEdge {
    /// Edge so, wie sie gerade gerendert ist (für die Selektion).
    pub fn to_edge(&self) -> Edge {
        Edge {
            id: self.id,
            source_id: self.source_id,
            target_id: self.target_id,
            label: self.label.clone(),
            properties: self.properties.clone(),
        }
    }
}

/// Alle gerenderten Elemente in Einfügereihenfolge.
#[derive(Debug, Clone, Default)]
pub struct ElementSet {
    nodes: IndexMap<ElementId, RenderedNode>,
    edges: IndexMap<ElementId, RenderedEdge>,
}

impl ElementSet {
    /// Leere Menge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut die Render-Kopie: erst Nodes, dann Edges.
    ///
    /// Startpositionen sind deterministisch (Phyllotaxis nach Index).
    /// Edges auf unbekannte Nodes werden verworfen.
    pub fn from_view_model(view_model: &GraphViewModel, base_size: f32, spacing: f32) -> Self {
        let mut nodes = IndexMap::with_capacity(view_model.nodes.len());
        for node in &view_model.nodes {
            let index = nodes.len();
            nodes.entry(node.id).or_insert_with(|| RenderedNode {
                id: node.id,
                label: node.label.clone(),
                properties: node.properties.clone(),
                position: phyllotaxis(index, spacing),
                size: base_size,
                size_from: base_size,
                target_size: base_size,
                color: palette::color_for_label(&node.label),
                opacity: 1.0,
                highlighted: false,
                emphasis: Emphasis::Normal,
            });
        }

        let mut edges = IndexMap::with_capacity(view_model.edges.len());
        let mut dangling = 0usize;
        for edge in &view_model.edges {
            if !(nodes.contains_key(&edge.source_id) && nodes.contains_key(&edge.target_id)) {
                dangling += 1;
                continue;
            }
            let color = if edge.label.is_empty() {
                EDGE_COLOR
            } else {
                let mut color = palette::color_for_label(&edge.label);
                color[3] = EDGE_COLOR[3];
                color
            };
            edges.entry(edge.id).or_insert_with(|| RenderedEdge {
                id: edge.id,
                source_id: edge.source_id,
                target_id: edge.target_id,
                label: edge.label.clone(),
                properties: edge.properties.clone(),
                color,
            });
        }
        if dangling > 0 {
            log::debug!("{} Edges ohne bekannte Endpunkte verworfen", dangling);
        }

        Self { nodes, edges }
    }

    pub fn node(&self, id: ElementId) -> Option<&RenderedNode> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: ElementId) -> Option<&mut RenderedNode> {
        self.nodes.get_mut(&id)
    }

    pub fn edge(&self, id: ElementId) -> Option<&RenderedEdge> {
        self.edges.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &RenderedNode> {
        self.nodes.values()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut RenderedNode> {
        self.nodes.values_mut()
    }

    pub fn edges(&self) -> impl Iterator<Item = &RenderedEdge> {
        self.edges.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Edges als Node-Indexpaare (für Layout und Algorithmen).
    pub fn index_pairs(&self) -> Vec<(usize, usize)> {
        self.edges
            .values()
            .filter_map(|edge| {
                let source = self.nodes.get_index_of(&edge.source_id)?;
                let target = self.nodes.get_index_of(&edge.target_id)?;
                Some((source, target))
            })
            .collect()
    }

    /// Positionen in Node-Reihenfolge.
    pub fn positions(&self) -> Vec<Vec2> {
        self.nodes.values().map(|n| n.position).collect()
    }

    /// Schreibt Positionen in Node-Reihenfolge zurück.
    pub fn set_positions(&mut self, positions: &[Vec2]) {
        for (node, position) in self.nodes.values_mut().zip(positions) {
            node.position = *position;
        }
    }

    /// Bounding Box der angegebenen Nodes (inkl. Node-Radius).
    pub fn bounds_of<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a ElementId>,
    ) -> Option<(Vec2, Vec2)> {
        let mut bounds: Option<(Vec2, Vec2)> = None;
        for node in ids.into_iter().filter_map(|id| self.nodes.get(id)) {
            let half = Vec2::splat(node.size * 0.5);
            let (lo, hi) = (node.position - half, node.position + half);
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(lo), max.max(hi)),
                None => (lo, hi),
            });
        }
        bounds
    }

    /// Bounding Box aller Nodes.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        self.bounds_of(self.nodes.keys())
    }
}

fn phyllotaxis(index: usize, spacing: f32) -> Vec2 {
    let radius = spacing * 0.5 * (index as f32).sqrt();
    let angle = index as f32 * GOLDEN_ANGLE;
    Vec2::new(angle.cos(), angle.sin()) * radius
}
