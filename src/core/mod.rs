//! Core-Domänentypen: Property-Werte, Graph-View-Model, Query-Ergebnisse,
//! Verbindungszustand und Kamera.

pub mod camera;
pub mod connection;
/// Graph-View-Model
///
/// - Node / Edge: Graph-Elemente mit Label und Property-Map
/// - GraphViewModel: kanonische, pro Publish unveränderliche Kopie im Store
pub mod graph;
pub mod query_result;
pub mod value;

pub use camera::Camera2D;
pub use connection::ConnectionState;
pub use graph::{Edge, ElementId, GraphViewModel, Node};
pub use query_result::{QueryResult, QueryTable, ResultView};
pub use value::{Properties, PropertyValue};
