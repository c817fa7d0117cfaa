use crate::core::{Edge, ElementId, Node, Properties};

/// Art des selektierten Elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Node
    Node,
    /// Edge
    Edge,
}

/// Selektiertes Graph-Element.
///
/// Element und Art sind ein Wert: es gibt keinen Zustand mit Element
/// aber ohne Art (oder umgekehrt).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    /// Nichts selektiert
    #[default]
    None,
    /// Node, wie er im Viewport gerendert war
    Node(Node),
    /// Edge, wie sie im Viewport gerendert war
    Edge(Edge),
}

impl Selection {
    /// Art des Elements, `None` wenn nichts selektiert ist.
    pub fn kind(&self) -> Option<SelectionKind> {
        match self {
            Selection::None => None,
            Selection::Node(_) => Some(SelectionKind::Node),
            Selection::Edge(_) => Some(SelectionKind::Edge),
        }
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// ID des Elements.
    pub fn element_id(&self) -> Option<ElementId> {
        match self {
            Selection::None => None,
            Selection::Node(node) => Some(node.id),
            Selection::Edge(edge) => Some(edge.id),
        }
    }

    /// Label des Elements.
    pub fn label(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Node(node) => Some(node.label.as_str()),
            Selection::Edge(edge) => Some(edge.label.as_str()),
        }
    }

    /// Properties für das Eigenschaften-Panel.
    pub fn properties(&self) -> Option<&Properties> {
        match self {
            Selection::None => None,
            Selection::Node(node) => Some(&node.properties),
            Selection::Edge(edge) => Some(&edge.properties),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_and_kind_are_consistent() {
        assert_eq!(Selection::None.kind(), None);
        assert_eq!(Selection::None.element_id(), None);

        let node = Selection::Node(Node::new(7, "Person").with_property("name", "Ada"));
        assert_eq!(node.kind(), Some(SelectionKind::Node));
        assert_eq!(node.element_id(), Some(7));
        assert_eq!(node.label(), Some("Person"));
        assert_eq!(node.properties().map(|p| p.len()), Some(1));

        let edge = Selection::Edge(Edge::new(3, 1, 2, "KNOWS"));
        assert_eq!(edge.kind(), Some(SelectionKind::Edge));
        assert!(!edge.is_none());
    }
}
