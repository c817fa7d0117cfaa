//! Getaggte Property-Werte (JSON-ähnlich, aber typisiert).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Property-Map eines Graph-Elements. Einfügereihenfolge bleibt erhalten.
pub type Properties = IndexMap<String, PropertyValue>;

/// Ein Property- oder Tabellenzellen-Wert.
///
/// Deserialisiert direkt aus JSON (`null`, Bool, Zahl, String, Array, Objekt).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// JSON `null`
    #[default]
    Null,
    /// Wahrheitswert
    Bool(bool),
    /// Ganzzahl
    Int(i64),
    /// Gleitkommazahl
    Float(f64),
    /// Zeichenkette
    String(String),
    /// Liste gleichartiger Werte
    List(Vec<PropertyValue>),
    /// Verschachtelte Map
    Map(Properties),
}

impl PropertyValue {
    /// Gibt `true` zurück für `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Liefert den String-Inhalt, falls vorhanden.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Liefert den Wert als `f64`, falls numerisch.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Formatiert den Wert für eine Tabellenzelle.
    ///
    /// Skalare werden direkt ausgegeben, Listen und Maps als kompaktes JSON.
    pub fn to_cell_text(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => s.clone(),
            Self::List(_) | Self::Map(_) => {
                serde_json::to_string(self).unwrap_or_else(|_| "<unprintable>".to_string())
            }
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cell_text())
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
