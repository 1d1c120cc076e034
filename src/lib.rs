//! Propgraph — an in-memory property graph
//!
//! Nodes and directed, labeled edges, each carrying an arbitrary key/value
//! property map. The [`Graph`] owns both collections, allocates
//! monotonically increasing identifiers from independent counters, and keeps
//! every node's incoming/outgoing edge sets consistent with the edge map:
//! an edge id appears in its tail's outgoing set and its head's incoming
//! set, or the edge does not exist.
//!
//! There is no query language, no persistence and no internal locking. The
//! graph is a plain single-threaded data structure driven entirely by its
//! caller; wrap it in a lock if several writers need to share it.
//!
//! # Example Usage
//!
//! ```rust
//! use propgraph::{Direction, Graph, PropertyMap};
//!
//! let mut graph = Graph::new();
//!
//! // Create nodes
//! let idaho = graph.add_node(PropertyMap::from([
//!     ("type".to_string(), "State".into()),
//!     ("name".to_string(), "Idaho".into()),
//! ]));
//! let lucy = graph.add_node(PropertyMap::from([
//!     ("type".to_string(), "Person".into()),
//!     ("name".to_string(), "Lucy".into()),
//! ]));
//!
//! // Connect them
//! let born_in = graph.add_edge(lucy, "BORN_IN", idaho, PropertyMap::new()).unwrap();
//!
//! // Adjacency is registered on both endpoints
//! assert!(graph.get_node(lucy).unwrap().outgoing().contains(&born_in));
//! assert!(graph.get_node(idaho).unwrap().incoming().contains(&born_in));
//! assert_eq!(graph.neighbors(lucy, Direction::Outgoing).unwrap(), vec![idaho]);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    Direction, Edge, EdgeId, Graph, GraphError, GraphResult, Label, Node, NodeId, PropertyMap,
    PropertyValue,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
