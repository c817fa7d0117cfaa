//! In-Process Publish/Subscribe.
//!
//! Zustellung synchron, im selben Thread, in Registrierungsreihenfolge.
//! Ohne registrierte Handler wird ein Event stillschweigend verworfen.

use crate::core::{Properties, PropertyValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Event-Name für Algorithmus-Anfragen an den Viewport.
pub const RUN_ALGORITHM: &str = "run-algorithm";

/// Handle einer Registrierung, für `off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<P> = Box<dyn FnMut(&P)>;

/// Typisierter Event-Kanal für Payload `P`.
pub struct EventBus<P> {
    handlers: IndexMap<String, Vec<(SubscriptionId, Handler<P>)>>,
    next_id: u64,
}

impl<P> Default for EventBus<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> EventBus<P> {
    /// Leerer Bus.
    pub fn new() -> Self {
        Self {
            handlers: IndexMap::new(),
            next_id: 0,
        }
    }

    /// Registriert einen Handler für `name`.
    pub fn on(&mut self, name: &str, handler: impl FnMut(&P) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers
            .entry(name.to_string())
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Entfernt einen Handler. `false`, wenn er nicht (mehr) registriert war.
    pub fn off(&mut self, name: &str, id: SubscriptionId) -> bool {
        let Some(list) = self.handlers.get_mut(name) else {
            return false;
        };
        let before = list.len();
        list.retain(|(handler_id, _)| *handler_id != id);
        let removed = list.len() != before;
        if list.is_empty() {
            self.handlers.shift_remove(name);
        }
        removed
    }

    /// Stellt `payload` an alle Handler von `name` zu. Gibt die Anzahl zurück.
    pub fn emit(&mut self, name: &str, payload: &P) -> usize {
        let Some(list) = self.handlers.get_mut(name) else {
            log::debug!("Event '{}' ohne Empfänger verworfen", name);
            return 0;
        };
        for (_, handler) in list.iter_mut() {
            handler(payload);
        }
        log::debug!("Event '{}' an {} Empfänger zugestellt", name, list.len());
        list.len()
    }

    /// Anzahl registrierter Handler für `name`.
    pub fn handler_count(&self, name: &str) -> usize {
        self.handlers.get(name).map_or(0, Vec::len)
    }
}

/// Verfügbare Graph-Algorithmen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlgorithmKind {
    /// Gedämpfte Wichtigkeit pro Node
    #[serde(rename = "pagerank")]
    PageRank,
    /// Normierter Grad pro Node
    #[serde(rename = "degree_centrality")]
    DegreeCentrality,
}

/// Payload von [`RUN_ALGORITHM`].
///
/// `params` kann Standardwerte überschreiben: `damping`, `iterations`
/// (PageRank) und `threshold` (Degree Centrality).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmRequest {
    /// Gewünschter Algorithmus
    #[serde(rename = "algorithm")]
    pub kind: AlgorithmKind,
    /// Optionale Parameter
    #[serde(default)]
    pub params: Properties,
}

impl AlgorithmRequest {
    /// Anfrage ohne Parameter.
    pub fn new(kind: AlgorithmKind) -> Self {
        Self {
            kind,
            params: Properties::new(),
        }
    }

    /// Builder: setzt einen Parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Numerischer Parameter.
    pub fn param_f64(&self, key: &str) -> Option<f64> {
        self.params.get(key).and_then(PropertyValue::as_f64)
    }
}
