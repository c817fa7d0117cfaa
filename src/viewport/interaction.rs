//! Selektion und Suche im Viewport.
//!
//! Der Viewport verändert nie den Store direkt; er liefert Intents, die
//! der Host an den `StateStore` weitergibt.

use super::GraphViewport;
use crate::app::{AppIntent, Selection};
use crate::core::ElementId;
use glam::Vec2;

impl GraphViewport {
    /// Klick auf einen Node: zentriert und zoomt, liefert den Selektions-Intent.
    pub fn select_node(&mut self, id: ElementId) -> Option<AppIntent> {
        if !self.alive {
            return None;
        }
        let node = self.elements.node(id)?;
        let position = node.position;
        let selection = Selection::Node(node.to_node());

        self.camera.look_at(position);
        self.camera.set_zoom(self.options.focus_zoom);
        Some(AppIntent::SelectionRequested { selection })
    }

    /// Klick auf eine Edge.
    pub fn select_edge(&mut self, id: ElementId) -> Option<AppIntent> {
        if !self.alive {
            return None;
        }
        let edge = self.elements.edge(id)?;
        Some(AppIntent::SelectionRequested {
            selection: Selection::Edge(edge.to_edge()),
        })
    }

    /// Klick auf den Hintergrund.
    pub fn deselect(&mut self) -> AppIntent {
        AppIntent::SelectionCleared
    }

    /// Sucht Nodes per Label-Teilstring (ohne Groß-/Kleinschreibung) oder exakter ID.
    ///
    /// Bei Treffern: alte Markierungen entfernen, Treffer markieren,
    /// Treffer einrahmen und den ersten selektieren. Leerer Begriff oder
    /// keine Treffer: keine Änderung.
    pub fn search(&mut self, term: &str) -> Option<AppIntent> {
        if !self.alive {
            return None;
        }
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        let needle = term.to_lowercase();
        let hits: Vec<ElementId> = self
            .elements
            .nodes()
            .filter(|node| node.matches(&needle, term))
            .map(|node| node.id)
            .collect();
        let first = *hits.first()?;

        for node in self.elements.nodes_mut() {
            node.highlighted = hits.contains(&node.id);
        }
        log::debug!("Suche '{}': {} Treffer", term, hits.len());

        if let Some((min, max)) = self.elements.bounds_of(&hits) {
            self.camera
                .fit_bounds(min, max, self.surface_size, self.options.fit_padding);
        }

        let node = self.elements.node(first)?;
        Some(AppIntent::SelectionRequested {
            selection: Selection::Node(node.to_node()),
        })
    }

    /// Node unter einer Screen-Position (oberster zuerst).
    pub fn pick_node(&self, screen_pos: Vec2) -> Option<ElementId> {
        let world = self.camera.screen_to_world(screen_pos, self.surface_size);
        self.elements
            .nodes()
            .filter(|node| node.position.distance(world) <= node.size * 0.5)
            .last()
            .map(|node| node.id)
    }

    /// Pan um ein Screen-Delta (Drag).
    pub fn pan_by_screen(&mut self, delta: Vec2) {
        if !self.alive {
            return;
        }
        self.camera.pan(-delta / self.camera.zoom);
    }

    /// Zoom um `factor`, der Welt-Punkt unter `screen_pos` bleibt stehen.
    pub fn zoom_at(&mut self, screen_pos: Vec2, factor: f32) {
        if !self.alive {
            return;
        }
        let anchor = self.camera.screen_to_world(screen_pos, self.surface_size);
        self.camera.zoom_by(factor);
        let moved = self.camera.screen_to_world(screen_pos, self.surface_size);
        self.camera.pan(anchor - moved);
    }

    /// Entfernt alle Such-Markierungen.
    pub fn clear_highlights(&mut self) {
        for node in self.elements.nodes_mut() {
            node.highlighted = false;
        }
    }
}
