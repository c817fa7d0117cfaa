//! 2D-Kamera für Pan, Zoom und Framing des Graph-Viewports.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom.
///
/// Bei Zoom 1.0 entspricht eine Welt-Einheit einem Screen-Pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Position der Kamera (Bildschirmmitte) in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.05;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 10.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Setzt den Zoom-Level (geklemmt).
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Konvertiert Screen-Koordinaten (Pixel, Ursprung oben links) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (screen_pos - screen_size * 0.5) / self.zoom + self.position
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten.
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (world_pos - self.position) * self.zoom + screen_size * 0.5
    }

    /// Rahmt die Bounding Box `[min, max]` in eine Fläche der Größe `screen_size` ein.
    ///
    /// `padding` ist der Rand in Pixeln. Bei leerer Fläche wird nur zentriert.
    pub fn fit_bounds(&mut self, min: Vec2, max: Vec2, screen_size: Vec2, padding: f32) {
        self.position = (min + max) * 0.5;

        let available = screen_size - Vec2::splat(2.0 * padding);
        if available.x <= 0.0 || available.y <= 0.0 {
            return;
        }

        // Einzelner Punkt: Ausdehnung 1 verhindert Division durch 0
        let extent = (max - min).max(Vec2::ONE);
        let zoom = (available.x / extent.x).min(available.y / extent.y);
        self.set_zoom(zoom);
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
