//! Force-Layout (Fruchterman-Reingold mit adaptiver Schrittweite).
//!
//! Abstoßung zwischen allen Node-Paaren, Anziehung entlang der Edges und
//! eine schwache Gravitation zum Ursprung. Deterministisch: gleiche
//! Startpositionen ergeben gleiche Endpositionen.

use crate::error::LayoutError;
use crate::shared::ExplorerOptions;
use glam::Vec2;

/// Anteil der Kraft, der pro Iteration höchstens in Bewegung umgesetzt wird.
const MAX_FORCE_SHARE: f32 = 0.25;

/// Parameter der Simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceLayoutConfig {
    /// Maximale Iterationen
    pub iterations: usize,
    /// Ideale Kantenlänge `k`
    pub ideal_edge_length: f32,
    /// Anziehung zum Ursprung
    pub gravity: f32,
    /// Start-Schrittweite (Welt-Einheiten)
    pub initial_step: f32,
    /// Abkühlung bei steigender Energie
    pub cooling_factor: f32,
    /// Abbruch, sobald Schrittweite oder größte Bewegung unter `convergence_threshold * k` fällt
    pub convergence_threshold: f32,
}

impl Default for ForceLayoutConfig {
    fn default() -> Self {
        Self {
            iterations: 300,
            ideal_edge_length: 90.0,
            gravity: 0.4,
            initial_step: 30.0,
            cooling_factor: 0.9,
            convergence_threshold: 1e-3,
        }
    }
}

impl ForceLayoutConfig {
    /// Parameter aus den Explorer-Optionen.
    pub fn from_options(options: &ExplorerOptions) -> Self {
        Self {
            iterations: options.layout_iterations,
            ideal_edge_length: options.layout_ideal_edge_length,
            gravity: options.layout_gravity,
            ..Self::default()
        }
    }
}

/// Ergebnis eines erfolgreichen Laufs.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRun {
    /// Neue Positionen (gleiche Reihenfolge wie die Eingabe)
    pub positions: Vec<Vec2>,
    /// Tatsächlich gelaufene Iterationen
    pub iterations: usize,
}

/// Berechnet neue Positionen ausgehend von `initial`.
///
/// Die Eingabe bleibt unverändert; bei Fehler behält der Aufrufer seine
/// alten Positionen.
pub fn run(
    initial: &[Vec2],
    edges: &[(usize, usize)],
    config: &ForceLayoutConfig,
) -> Result<LayoutRun, LayoutError> {
    if !(config.ideal_edge_length > 0.0) {
        return Err(LayoutError::InvalidParameter("ideal_edge_length must be > 0"));
    }
    if !(config.cooling_factor > 0.0 && config.cooling_factor < 1.0) {
        return Err(LayoutError::InvalidParameter("cooling_factor must be in (0, 1)"));
    }

    let n = initial.len();
    let mut positions = initial.to_vec();
    if n < 2 {
        return Ok(LayoutRun {
            positions,
            iterations: 0,
        });
    }

    let k = config.ideal_edge_length;
    let k_sq = k * k;
    let mut step = config.initial_step;
    let mut prev_energy = f32::MAX;
    let mut forces = vec![Vec2::ZERO; n];
    let mut iterations = 0;

    for iteration in 0..config.iterations {
        iterations = iteration + 1;
        forces.iter_mut().for_each(|f| *f = Vec2::ZERO);

        // O(n^2) Abstoßung
        for i in 0..n {
            for j in (i + 1)..n {
                let mut delta = positions[i] - positions[j];
                let mut dist = delta.length();
                if dist < 1e-3 {
                    // Deckungsgleiche Nodes deterministisch auseinanderschieben
                    let angle = (i * 31 + j * 17) as f32;
                    delta = Vec2::new(angle.cos(), angle.sin()) * 1e-2;
                    dist = 1e-2;
                }
                let force = delta / dist * (k_sq / dist);
                forces[i] += force;
                forces[j] -= force;
            }
        }

        // Anziehung entlang der Edges
        for &(source, target) in edges {
            if source == target || source >= n || target >= n {
                continue;
            }
            let delta = positions[source] - positions[target];
            let dist = delta.length();
            if dist < 1e-6 {
                continue;
            }
            let force = delta / dist * (dist * dist / k);
            forces[source] -= force;
            forces[target] += force;
        }

        let mut energy = 0.0;
        let mut max_move: f32 = 0.0;
        for (pos, force) in positions.iter_mut().zip(&forces) {
            let force = *force - *pos * config.gravity;
            let magnitude = force.length();
            energy += magnitude * magnitude;
            if magnitude > 0.0 {
                // Verschiebung: höchstens `step`, höchstens ein Viertel der Kraft
                let displacement = force * (step / magnitude).min(MAX_FORCE_SHARE);
                max_move = max_move.max(displacement.length());
                *pos += displacement;
            }
        }

        if !energy.is_finite() || positions.iter().any(|p| !p.is_finite()) {
            return Err(LayoutError::Diverged { iteration });
        }

        if energy >= prev_energy {
            step *= config.cooling_factor;
        } else if energy <= 0.95 * prev_energy {
            step = (step / config.cooling_factor).min(config.initial_step);
        }
        prev_energy = energy;

        let threshold = config.convergence_threshold * k;
        if step < threshold || max_move < threshold {
            break;
        }
    }

    Ok(LayoutRun {
        positions,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(n: usize) -> Vec<Vec2> {
        (0..n)
            .map(|i| {
                let a = i as f32 / n as f32 * std::f32::consts::TAU;
                Vec2::new(a.cos(), a.sin()) * 10.0
            })
            .collect()
    }

    #[test]
    fn single_node_is_untouched() {
        let result = run(&[Vec2::new(3.0, 4.0)], &[], &ForceLayoutConfig::default())
            .expect("Layout ok");
        assert_eq!(result.positions, vec![Vec2::new(3.0, 4.0)]);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn connected_pair_settles_near_ideal_length() {
        let config = ForceLayoutConfig {
            gravity: 0.0,
            ..ForceLayoutConfig::default()
        };
        let result = run(
            &[Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)],
            &[(0, 1)],
            &config,
        )
        .expect("Layout ok");
        let dist = result.positions[0].distance(result.positions[1]);
        assert!(
            (dist - config.ideal_edge_length).abs() < config.ideal_edge_length * 0.2,
            "Abstand {dist}"
        );
    }

    #[test]
    fn layout_is_deterministic() {
        let start = ring(8);
        let edges = [(0, 1), (1, 2), (2, 3), (4, 5), (6, 7), (7, 0)];
        let config = ForceLayoutConfig::default();
        let a = run(&start, &edges, &config).expect("Layout ok");
        let b = run(&start, &edges, &config).expect("Layout ok");
        assert_eq!(a, b);
        assert!(a.positions.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn invalid_edge_length_is_rejected() {
        let config = ForceLayoutConfig {
            ideal_edge_length: 0.0,
            ..ForceLayoutConfig::default()
        };
        let err = run(&ring(3), &[], &config).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidParameter(_)));
    }

    #[test]
    fn non_finite_input_diverges() {
        let start = vec![Vec2::new(f32::NAN, 0.0), Vec2::ZERO, Vec2::ONE];
        let err = run(&start, &[], &ForceLayoutConfig::default()).unwrap_err();
        assert_eq!(err, LayoutError::Diverged { iteration: 0 });
    }
}
