//! Edge record for the property graph

use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, Label, NodeId};
use serde::{Deserialize, Serialize};

/// A directed, labeled edge in the property graph
///
/// The edge originates at the `tail` node and terminates at the `head`
/// node. The label names the kind of relationship; properties carry
/// everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Node the edge originates at
    pub tail: NodeId,

    /// Node the edge terminates at
    pub head: NodeId,

    /// Kind of relationship (e.g. "BORN_IN", "WITHIN")
    pub label: Label,

    /// Properties associated with this edge
    pub properties: PropertyMap,
}

impl Edge {
    /// Create a new directed edge
    pub(super) fn new(
        id: EdgeId,
        tail: NodeId,
        head: NodeId,
        label: Label,
        properties: PropertyMap,
    ) -> Self {
        Edge {
            id,
            tail,
            head,
            label,
            properties,
        }
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Check if property exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Get number of properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Check if this edge goes FROM the given node
    pub fn starts_at(&self, node: NodeId) -> bool {
        self.tail == node
    }

    /// Check if this edge goes TO the given node
    pub fn ends_at(&self, node: NodeId) -> bool {
        self.head == node
    }

    /// Check if this edge connects the two nodes, in either orientation
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.tail == a && self.head == b) || (self.tail == b && self.head == a)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
