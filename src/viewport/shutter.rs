//! Vollbild-Shutter: vierphasiger, zeitgesteuerter Übergang.
//!
//! 1. Ausblenden (`visible = false`)
//! 2. nach `shutter_fade_out`: Rendering lösen, im nächsten Frame Geometrie umschalten
//! 3. nach `shutter_settle`: Surface an Container anpassen, alles einrahmen
//! 4. Rendering an, im nächsten Frame einblenden
//!
//! Jeder verzögerte Schritt liegt in der `TimerQueue` und wird bei
//! `teardown` abgebrochen.

use super::timers::Due;
use super::GraphViewport;

/// Sichtbare Phase des Übergangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShutterPhase {
    /// Kein Übergang aktiv
    #[default]
    Idle,
    /// Ausblenden läuft
    FadingOut,
    /// Rendering gelöst, Geometriewechsel im nächsten Frame
    Detached,
    /// Container-Geometrie schwingt ein
    Settling,
    /// Rendering läuft wieder, Einblenden im nächsten Frame
    Revealing,
}

/// Verzögerter Schritt des Übergangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutterStep {
    Detach,
    FlipGeometry,
    Reattach,
    Reveal,
}

impl GraphViewport {
    /// Startet den Vollbild-Wechsel.
    ///
    /// Gibt `false` zurück, wenn bereits ein Übergang läuft oder der
    /// Viewport abgebaut ist.
    pub fn toggle_fullscreen(&mut self) -> bool {
        if !self.alive {
            log::debug!("Vollbild-Wechsel nach Teardown ignoriert");
            return false;
        }
        if self.shutter != ShutterPhase::Idle {
            log::debug!("Vollbild-Wechsel ignoriert, Übergang läuft ({:?})", self.shutter);
            return false;
        }

        self.visible = false;
        self.shutter = ShutterPhase::FadingOut;
        let due = self.now + self.options.shutter_fade_out();
        self.timers.schedule(Due::At(due), ShutterStep::Detach);
        log::debug!("Shutter: {:?}", self.shutter);
        true
    }

    pub(super) fn run_shutter_step(&mut self, step: ShutterStep) {
        match step {
            ShutterStep::Detach => {
                self.rendering = false;
                self.shutter = ShutterPhase::Detached;
                self.timers
                    .schedule(Due::Frame(self.frame + 1), ShutterStep::FlipGeometry);
            }
            ShutterStep::FlipGeometry => {
                self.fullscreen = !self.fullscreen;
                self.shutter = ShutterPhase::Settling;
                let due = self.now + self.options.shutter_settle();
                self.timers.schedule(Due::At(due), ShutterStep::Reattach);
            }
            ShutterStep::Reattach => {
                self.surface_size = self.container_size;
                self.fit_all();
                self.rendering = true;
                self.shutter = ShutterPhase::Revealing;
                self.timers
                    .schedule(Due::Frame(self.frame + 1), ShutterStep::Reveal);
            }
            ShutterStep::Reveal => {
                self.visible = true;
                self.shutter = ShutterPhase::Idle;
            }
        }
        log::debug!("Shutter: {:?}", self.shutter);
    }
}
