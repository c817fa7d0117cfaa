//! Panel-Layout: linker Tab-Slot, rechter Split (oben/unten).
//!
//! Jeder Slot ist ein eigener, totaler Zustandsautomat. Die Sichtbarkeit
//! der rechten Sidebar wird nur abgeleitet, nie gespeichert.

/// Tabs der linken Sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeftTab {
    /// Datenbank-Explorer (Recents, aktive Verbindung)
    #[default]
    Explorer,
    /// Suche
    Search,
    /// Einstellungen
    Settings,
}

/// Panels des oberen rechten Slots (gegenseitig exklusiv).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopPanel {
    /// Eigenschaften des selektierten Elements
    Properties,
    /// Query-Verlauf
    History,
}

/// Panels des unteren rechten Slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomPanel {
    /// Graph-Algorithmen
    Analysis,
}

/// Zustand aller Panel-Slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutController {
    left_tab: LeftTab,
    left_open: bool,
    top_panel: Option<TopPanel>,
    bottom_panel: Option<BottomPanel>,
}

impl Default for LayoutController {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutController {
    /// Startzustand: Explorer offen, Eigenschaften oben, unten geschlossen.
    pub fn new() -> Self {
        Self {
            left_tab: LeftTab::Explorer,
            left_open: true,
            top_panel: Some(TopPanel::Properties),
            bottom_panel: None,
        }
    }

    /// Aktiver linker Tab.
    pub fn left_tab(&self) -> LeftTab {
        self.left_tab
    }

    /// Ob die linke Sidebar offen ist.
    pub fn left_open(&self) -> bool {
        self.left_open
    }

    /// Aktives oberes Panel.
    pub fn top_panel(&self) -> Option<TopPanel> {
        self.top_panel
    }

    /// Aktives unteres Panel.
    pub fn bottom_panel(&self) -> Option<BottomPanel> {
        self.bottom_panel
    }

    /// Rechte Sidebar sichtbar ⇔ mindestens ein Slot aktiv.
    pub fn right_sidebar_visible(&self) -> bool {
        self.top_panel.is_some() || self.bottom_panel.is_some()
    }

    /// Gleicher Tab: auf/zu. Anderer Tab: wechseln und öffnen.
    pub fn toggle_left(&mut self, tab: LeftTab) {
        if self.left_tab == tab {
            self.left_open = !self.left_open;
        } else {
            self.left_tab = tab;
            self.left_open = true;
        }
    }

    /// Aktives Panel: schließen. Sonst: ersetzen.
    pub fn toggle_top(&mut self, panel: TopPanel) {
        self.top_panel = if self.top_panel == Some(panel) {
            None
        } else {
            Some(panel)
        };
    }

    /// Wie `toggle_top`, unabhängig vom oberen Slot.
    pub fn toggle_bottom(&mut self, panel: BottomPanel) {
        self.bottom_panel = if self.bottom_panel == Some(panel) {
            None
        } else {
            Some(panel)
        };
    }

    /// Erzwingt das Eigenschaften-Panel oben (Auto-Reveal bei Selektion).
    pub fn reveal_properties(&mut self) {
        self.top_panel = Some(TopPanel::Properties);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_left_same_tab_flips_open() {
        let mut layout = LayoutController::new();
        layout.toggle_left(LeftTab::Explorer);
        assert!(!layout.left_open());
        layout.toggle_left(LeftTab::Explorer);
        assert!(layout.left_open());
    }

    #[test]
    fn toggle_left_other_tab_switches_and_opens() {
        let mut layout = LayoutController::new();
        layout.toggle_left(LeftTab::Explorer);
        assert!(!layout.left_open());

        layout.toggle_left(LeftTab::Settings);
        assert_eq!(layout.left_tab(), LeftTab::Settings);
        assert!(layout.left_open());
    }

    #[test]
    fn top_slot_switches_and_closes() {
        let mut layout = LayoutController::new();
        layout.toggle_top(TopPanel::History);
        assert_eq!(layout.top_panel(), Some(TopPanel::History));

        layout.toggle_top(TopPanel::History);
        assert_eq!(layout.top_panel(), None);
        assert!(!layout.right_sidebar_visible());
    }

    #[test]
    fn top_and_bottom_are_independent() {
        let mut layout = LayoutController::new();
        layout.toggle_bottom(BottomPanel::Analysis);
        assert_eq!(layout.top_panel(), Some(TopPanel::Properties));
        assert_eq!(layout.bottom_panel(), Some(BottomPanel::Analysis));

        layout.toggle_top(TopPanel::Properties);
        assert!(layout.right_sidebar_visible());

        layout.toggle_bottom(BottomPanel::Analysis);
        assert!(!layout.right_sidebar_visible());
    }

    #[test]
    fn reveal_properties_replaces_history() {
        let mut layout = LayoutController::new();
        layout.toggle_top(TopPanel::History);
        layout.reveal_properties();
        assert_eq!(layout.top_panel(), Some(TopPanel::Properties));
    }
}
