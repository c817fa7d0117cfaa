//! Graph-Viewport: private Render-Kopie, Layout, Interaktion, Algorithmen
//! und Vollbild-Übergang.
//!
//! Der Viewport hat keinen eigenen Takt. Der Host ruft pro Frame
//! [`GraphViewport::advance`] mit der aktuellen Zeit auf; darüber laufen
//! verzögerte Shutter-Schritte und Größen-Animationen.

pub mod algorithms;
pub mod elements;
pub mod force_layout;
mod interaction;
mod shutter;
pub mod timers;

pub use elements::{ElementSet, Emphasis, RenderedEdge, RenderedNode};
pub use shutter::ShutterPhase;

use crate::app::{AlgorithmKind, AlgorithmRequest, EventBus, SubscriptionId, RUN_ALGORITHM};
use crate::core::{Camera2D, GraphViewModel};
use crate::shared::palette;
use crate::shared::ExplorerOptions;
use algorithms::PageRank;
use force_layout::ForceLayoutConfig;
use glam::Vec2;
use shutter::ShutterStep;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use timers::TimerQueue;

/// Kennzahlen der gerenderten Elemente.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportStats {
    pub node_count: usize,
    pub edge_count: usize,
}

/// Laufende Größen-Animation.
#[derive(Debug, Clone, Copy)]
struct SizeTween {
    started: Duration,
    duration: Duration,
}

/// Quadratisches Ease-Out.
fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Besitzt die Render-Instanz und alle direkten Interaktionen.
pub struct GraphViewport {
    options: ExplorerOptions,
    elements: ElementSet,
    stats: ViewportStats,
    camera: Camera2D,
    container_size: Vec2,
    surface_size: Vec2,
    fullscreen: bool,
    visible: bool,
    rendering: bool,
    shutter: ShutterPhase,
    timers: TimerQueue<ShutterStep>,
    now: Duration,
    frame: u64,
    size_tween: Option<SizeTween>,
    alive: bool,
    subscription: Option<SubscriptionId>,
}

impl GraphViewport {
    /// Erstellt einen sichtbaren, rendernden Viewport ohne Elemente.
    pub fn new(options: ExplorerOptions, container_size: Vec2) -> Self {
        Self {
            options,
            elements: ElementSet::new(),
            stats: ViewportStats::default(),
            camera: Camera2D::new(),
            container_size,
            surface_size: container_size,
            fullscreen: false,
            visible: true,
            rendering: true,
            shutter: ShutterPhase::Idle,
            timers: TimerQueue::new(),
            now: Duration::ZERO,
            frame: 0,
            size_tween: None,
            alive: true,
            subscription: None,
        }
    }

    /// Abonniert [`RUN_ALGORITHM`] auf dem Bus.
    ///
    /// Der Handler hält nur eine schwache Referenz; ein abgebauter oder
    /// gerade belegter Viewport verwirft die Anfrage.
    pub fn attach(
        viewport: &Rc<RefCell<Self>>,
        bus: &mut EventBus<AlgorithmRequest>,
    ) -> SubscriptionId {
        let weak = Rc::downgrade(viewport);
        let id = bus.on(RUN_ALGORITHM, move |request: &AlgorithmRequest| {
            let Some(viewport) = weak.upgrade() else {
                return;
            };
            let borrowed = viewport.try_borrow_mut();
            match borrowed {
                Ok(mut viewport) => viewport.run_algorithm(request),
                Err(_) => log::warn!("Viewport belegt, {:?} verworfen", request.kind),
            };
        });
        match viewport.try_borrow_mut() {
            Ok(mut viewport) => viewport.subscription = Some(id),
            Err(_) => log::warn!("Viewport belegt, Subscription nicht vermerkt"),
        }
        id
    }

    /// Baut den Viewport ab: bricht alle Timer ab und meldet sich vom Bus ab.
    /// Danach sind alle Operationen No-Ops.
    pub fn teardown(&mut self, bus: &mut EventBus<AlgorithmRequest>) {
        if !self.alive {
            return;
        }
        self.alive = false;
        let canceled = self.timers.cancel_all();
        if let Some(id) = self.subscription.take() {
            bus.off(RUN_ALGORITHM, id);
        }
        self.size_tween = None;
        self.shutter = ShutterPhase::Idle;
        log::info!("Viewport abgebaut ({} offene Schritte abgebrochen)", canceled);
    }

    // ── Zustand ─────────────────────────────────────────────────

    pub fn stats(&self) -> ViewportStats {
        self.stats
    }

    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_rendering(&self) -> bool {
        self.rendering
    }

    pub fn shutter_phase(&self) -> ShutterPhase {
        self.shutter
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn container_size(&self) -> Vec2 {
        self.container_size
    }

    pub fn surface_size(&self) -> Vec2 {
        self.surface_size
    }

    /// Anzahl geplanter, noch nicht ausgelöster Schritte.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Gibt `true` zurück, solange eine Größen-Animation läuft.
    pub fn is_animating(&self) -> bool {
        self.size_tween.is_some()
    }

    // ── Daten ───────────────────────────────────────────────────

    /// Ersetzt alle gerenderten Elemente durch eine Kopie von `view_model`.
    ///
    /// Layout läuft nur bei mindestens einem Node; Layout-Fehler werden
    /// geloggt und lassen die Startpositionen stehen.
    pub fn apply_data(&mut self, view_model: &GraphViewModel) {
        if !self.alive {
            log::debug!("apply_data nach Teardown ignoriert");
            return;
        }
        self.size_tween = None;
        self.elements = ElementSet::from_view_model(
            view_model,
            self.options.node_base_size,
            self.options.layout_ideal_edge_length,
        );

        if self.elements.node_count() > 0 {
            self.run_layout();
        }
        if self.visible && self.rendering {
            self.fit_all();
        }

        self.stats = ViewportStats {
            node_count: self.elements.node_count(),
            edge_count: self.elements.edge_count(),
        };
        log::debug!(
            "Viewport: {} Nodes, {} Edges",
            self.stats.node_count,
            self.stats.edge_count
        );
    }

    fn run_layout(&mut self) {
        let config = ForceLayoutConfig::from_options(&self.options);
        let start = self.elements.positions();
        let pairs = self.elements.index_pairs();
        match force_layout::run(&start, &pairs, &config) {
            Ok(run) => {
                self.elements.set_positions(&run.positions);
                log::debug!("Force-Layout nach {} Iterationen fertig", run.iterations);
            }
            Err(e) => log::warn!("Force-Layout fehlgeschlagen, Positionen bleiben: {}", e),
        }
    }

    // ── Kamera & Größe ──────────────────────────────────────────

    /// Rahmt alle Nodes ein.
    pub fn fit_all(&mut self) {
        if let Some((min, max)) = self.elements.bounds() {
            self.camera
                .fit_bounds(min, max, self.surface_size, self.options.fit_padding);
        }
    }

    /// Container-Größe hat sich geändert (Resize-Observer).
    ///
    /// Die Surface folgt immer; neu eingerahmt wird nur, wenn sichtbar
    /// und rendernd (nicht während des Shutters).
    pub fn on_container_resized(&mut self, size: Vec2) {
        if !self.alive || size == self.container_size {
            return;
        }
        self.container_size = size;
        self.surface_size = size;
        if self.visible && self.rendering {
            self.fit_all();
        }
    }

    // ── Takt ────────────────────────────────────────────────────

    /// Ein Frame: löst fällige Schritte aus und treibt die Größen-Animation.
    pub fn advance(&mut self, now: Duration) {
        if !self.alive {
            return;
        }
        self.now = now;
        self.frame += 1;
        for step in self.timers.take_due(now, self.frame) {
            self.run_shutter_step(step);
        }
        self.step_size_tween();
    }

    fn start_size_tween(&mut self) {
        let duration = self.options.size_animation();
        for node in self.elements.nodes_mut() {
            node.size_from = node.size;
        }
        if duration.is_zero() {
            for node in self.elements.nodes_mut() {
                node.size = node.target_size;
            }
            self.size_tween = None;
        } else {
            self.size_tween = Some(SizeTween {
                started: self.now,
                duration,
            });
        }
    }

    fn step_size_tween(&mut self) {
        let Some(tween) = self.size_tween else {
            return;
        };
        let elapsed = self.now.saturating_sub(tween.started);
        let t = elapsed.as_secs_f32() / tween.duration.as_secs_f32();
        if t >= 1.0 {
            for node in self.elements.nodes_mut() {
                node.size = node.target_size;
            }
            self.size_tween = None;
            return;
        }
        let eased = ease_out(t);
        for node in self.elements.nodes_mut() {
            node.size = node.size_from + (node.target_size - node.size_from) * eased;
        }
    }

    // ── Algorithmen ─────────────────────────────────────────────

    /// Führt einen Algorithmus auf den gerenderten Elementen aus und
    /// kodiert das Ergebnis visuell um.
    pub fn run_algorithm(&mut self, request: &AlgorithmRequest) {
        if !self.alive {
            return;
        }
        let node_count = self.elements.node_count();
        if node_count == 0 {
            log::debug!("{:?} ohne Nodes übersprungen", request.kind);
            return;
        }
        let pairs = self.elements.index_pairs();

        match request.kind {
            AlgorithmKind::PageRank => {
                let damping = request
                    .param_f64("damping")
                    .unwrap_or(self.options.pagerank_damping);
                let iterations = request
                    .param_f64("iterations")
                    .map(|v| v.max(0.0) as usize)
                    .unwrap_or(self.options.pagerank_iterations);
                let scores = PageRank::new(iterations, damping).run(node_count, &pairs);
                self.encode_pagerank(&scores);
            }
            AlgorithmKind::DegreeCentrality => {
                let threshold = request
                    .param_f64("threshold")
                    .unwrap_or(self.options.degree_threshold);
                let scores = algorithms::degree_centrality(node_count, &pairs);
                self.encode_degree(&scores, threshold);
            }
        }
        self.start_size_tween();
        log::info!("{:?} auf {} Nodes angewendet", request.kind, node_count);
    }

    fn encode_pagerank(&mut self, scores: &[f64]) {
        let max_score = scores.iter().copied().fold(0.0_f64, f64::max);
        let base = self.options.node_base_size;
        let gain = self.options.pagerank_size_gain;
        let cap = self.options.node_max_size.max(base);

        for (node, score) in self.elements.nodes_mut().zip(scores) {
            let relative = if max_score > 0.0 {
                (score / max_score) as f32
            } else {
                0.0
            };
            node.target_size = (base + gain * relative).min(cap);
            node.color = palette::color_for_label(&node.label);
            node.opacity = 1.0;
            node.emphasis = Emphasis::Normal;
        }
    }

    fn encode_degree(&mut self, scores: &[f64], threshold: f64) {
        let promoted_size = self.options.promoted_size;
        let demoted_size = self.options.node_base_size * self.options.demoted_size_factor;
        let demoted_opacity = self.options.demoted_opacity;

        for (node, score) in self.elements.nodes_mut().zip(scores) {
            if *score > threshold {
                node.emphasis = Emphasis::Promoted;
                node.color = palette::PROMOTED_COLOR;
                node.target_size = promoted_size;
                node.opacity = 1.0;
            } else {
                node.emphasis = Emphasis::Demoted;
                node.color = palette::color_for_label(&node.label);
                node.target_size = demoted_size;
                node.opacity = demoted_opacity;
            }
        }
    }
}
