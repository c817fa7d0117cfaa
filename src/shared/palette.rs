//! Deterministische Label-Farben für Nodes.
//!
//! Gleiches Label ⇒ gleiche Farbe, über alle Renders und Prozesse hinweg
//! (FNV-1a ohne Seed, kein `RandomState`).

/// FNV-1a 64 Bit über Bytes. Nicht kryptografisch, nur für Farb-Buckets.
#[derive(Clone, Copy, Debug)]
pub struct Fnv1a64(u64);

impl Fnv1a64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    /// Startzustand.
    pub fn new() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    /// Mischt Bytes ein.
    pub fn update(&mut self, bytes: &[u8]) {
        let mut hash = self.0;
        for b in bytes {
            hash ^= *b as u64;
            hash = hash.wrapping_mul(Self::PRIME);
        }
        self.0 = hash;
    }

    /// Hash-Wert.
    pub fn finish(self) -> u64 {
        self.0
    }
}

impl Default for Fnv1a64 {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash über einen String.
pub fn hash_label(label: &str) -> u64 {
    let mut h = Fnv1a64::new();
    h.update(label.as_bytes());
    h.finish()
}

/// Gedeckte Kategorien-Palette (RGBA) vor dunklem Hintergrund.
pub const LABEL_PALETTE: [[f32; 4]; 8] = [
    [0.388, 0.400, 0.945, 1.0], // Indigo
    [0.220, 0.741, 0.973, 1.0], // Sky
    [0.176, 0.831, 0.749, 1.0], // Teal
    [0.655, 0.545, 0.980, 1.0], // Violet
    [0.984, 0.573, 0.235, 1.0], // Orange
    [0.957, 0.447, 0.714, 1.0], // Pink
    [0.580, 0.639, 0.722, 1.0], // Slate
    [0.910, 0.475, 0.976, 1.0], // Fuchsia
];

/// Farbe für Such-Treffer (Sky-400).
pub const HIGHLIGHT_COLOR: [f32; 4] = [0.220, 0.741, 0.973, 1.0];
/// Farbe für hervorgehobene Hubs der Degree-Centrality (Amber).
pub const PROMOTED_COLOR: [f32; 4] = [0.961, 0.620, 0.043, 1.0];
/// Farbe für Edges (Zinc-600).
pub const EDGE_COLOR: [f32; 4] = [0.322, 0.322, 0.357, 0.8];

/// Palettenfarbe für ein Label.
pub fn color_for_label(label: &str) -> [f32; 4] {
    let index = (hash_label(label) % LABEL_PALETTE.len() as u64) as usize;
    LABEL_PALETTE[index]
}

/// RGBA → `#rrggbb` (Alpha wird ignoriert).
pub fn rgba_to_hex(color: [f32; 4]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color[0]),
        channel(color[1]),
        channel(color[2])
    )
}
