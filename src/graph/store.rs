//! In-memory graph storage
//!
//! The [`Graph`] owns the node and edge maps and the two id counters, and is
//! the only code that touches a node's adjacency sets. The invariant it
//! maintains: an edge id is present in its tail's outgoing set and its
//! head's incoming set, or the edge does not exist at all.

use super::edge::Edge;
use super::node::Node;
use super::property::PropertyMap;
use super::types::{Direction, EdgeId, Label, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("Invalid edge: tail node {0} does not exist")]
    InvalidEdgeTail(NodeId),

    #[error("Invalid edge: head node {0} does not exist")]
    InvalidEdgeHead(NodeId),

    #[error("Edge label must not be empty")]
    EmptyLabel,
}

pub type GraphResult<T> = Result<T, GraphError>;

/// An in-memory property graph
///
/// Hash maps keyed by id give O(1) lookups; ids are handed out from
/// monotonically increasing per-graph counters and never reused, so a
/// returned `NodeId`/`EdgeId` stays valid for the life of the graph.
/// Entities are never deleted, which is why the adjacency sets only grow.
///
/// All operations are synchronous and take `&self`/`&mut self`; callers
/// that share a graph across threads must add their own locking.
#[derive(Debug)]
pub struct Graph {
    /// Node storage: NodeId -> Node
    nodes: FxHashMap<NodeId, Node>,

    /// Edge storage: EdgeId -> Edge
    edges: FxHashMap<EdgeId, Edge>,

    /// Next node id to allocate
    next_node_id: u64,

    /// Next edge id to allocate (independent of the node counter)
    next_edge_id: u64,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Graph {
            nodes: FxHashMap::default(),
            edges: FxHashMap::default(),
            next_node_id: 1,
            next_edge_id: 1,
        }
    }

    /// Add a node with the given properties, returning its id
    ///
    /// The property map may be empty. Always succeeds.
    pub fn add_node(&mut self, properties: PropertyMap) -> NodeId {
        let id = NodeId::new(self.next_node_id);
        self.next_node_id += 1;

        debug!("Added node {} ({} properties)", id, properties.len());
        self.nodes.insert(id, Node::new(id, properties));
        id
    }

    /// Add a directed, labeled edge from `tail` to `head`
    ///
    /// Inserts the edge and registers its id in `tail`'s outgoing set and
    /// `head`'s incoming set. Both endpoints must already exist and the
    /// label must be non-empty; everything is validated before the first
    /// mutation, so a failed call leaves the graph exactly as it was.
    ///
    /// Multiple edges between the same pair of nodes are allowed, including
    /// with the same label.
    pub fn add_edge(
        &mut self,
        tail: NodeId,
        label: impl Into<Label>,
        head: NodeId,
        properties: PropertyMap,
    ) -> GraphResult<EdgeId> {
        let label = label.into();
        if label.is_empty() {
            return Err(GraphError::EmptyLabel);
        }
        if !self.nodes.contains_key(&tail) {
            return Err(GraphError::InvalidEdgeTail(tail));
        }
        if !self.nodes.contains_key(&head) {
            return Err(GraphError::InvalidEdgeHead(head));
        }

        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;

        debug!("Added edge {}: {} -[{}]-> {}", id, tail, label, head);
        self.edges.insert(id, Edge::new(id, tail, head, label, properties));

        // Endpoints were checked above, so both lookups hit.
        if let Some(node) = self.nodes.get_mut(&tail) {
            node.link_outgoing(id);
        }
        if let Some(node) = self.nodes.get_mut(&head) {
            node.link_incoming(id);
        }

        Ok(id)
    }

    /// Get a node by id
    pub fn get_node(&self, id: NodeId) -> GraphResult<&Node> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    /// Get an edge by id
    pub fn get_edge(&self, id: EdgeId) -> GraphResult<&Edge> {
        self.edges.get(&id).ok_or(GraphError::EdgeNotFound(id))
    }

    /// Check if a node exists
    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Check if an edge exists
    pub fn has_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    /// Nodes one edge away in the given direction
    ///
    /// For [`Direction::Outgoing`] these are the heads of the node's
    /// outgoing edges; for [`Direction::Incoming`] the tails of its incoming
    /// ones. A neighbor appears once per connecting edge, so multi-edges
    /// produce repeats.
    pub fn neighbors(&self, id: NodeId, direction: Direction) -> GraphResult<Vec<NodeId>> {
        Ok(self
            .adjacent_edges(id, direction)?
            .into_iter()
            .map(|edge| match direction {
                Direction::Outgoing => edge.head,
                Direction::Incoming => edge.tail,
            })
            .collect())
    }

    /// All edges leaving the node
    pub fn outgoing_edges(&self, id: NodeId) -> GraphResult<Vec<&Edge>> {
        self.adjacent_edges(id, Direction::Outgoing)
    }

    /// All edges arriving at the node
    pub fn incoming_edges(&self, id: NodeId) -> GraphResult<Vec<&Edge>> {
        self.adjacent_edges(id, Direction::Incoming)
    }

    /// The node's edges in the given direction that carry `label`
    pub fn edges_with_label(
        &self,
        id: NodeId,
        label: &Label,
        direction: Direction,
    ) -> GraphResult<Vec<&Edge>> {
        Ok(self
            .adjacent_edges(id, direction)?
            .into_iter()
            .filter(|edge| &edge.label == label)
            .collect())
    }

    /// Nodes whose properties match at least one key/value pair of `pattern`
    ///
    /// Matching is shallow: values are compared whole, nested maps are not
    /// descended into. An empty pattern matches nothing. Result order is
    /// unspecified.
    pub fn find_nodes(&self, pattern: &PropertyMap) -> Vec<&Node> {
        self.nodes
            .values()
            .filter(|node| {
                pattern
                    .iter()
                    .any(|(key, value)| node.properties.get(key) == Some(value))
            })
            .collect()
    }

    /// Follow `label` edges head-to-head starting from `edge`'s head
    ///
    /// Returns the last node on the chain with no outgoing `label` edge, or
    /// `None` when the starting head itself has none. When a node has
    /// several matching edges an arbitrary one is taken. A chain that
    /// revisits a node stops there and returns the revisited node, so a
    /// label cycle terminates.
    pub fn follow_label_chain(&self, edge: EdgeId, label: &Label) -> GraphResult<Option<NodeId>> {
        let mut current = self.get_edge(edge)?.head;

        let mut next = self.first_labeled_out(current, label);
        if next.is_none() {
            return Ok(None);
        }

        let mut visited = FxHashSet::default();
        while let Some(step) = next {
            if !visited.insert(current) {
                break;
            }
            current = step.head;
            next = self.first_labeled_out(current, label);
        }

        Ok(Some(current))
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterate over all nodes, in no particular order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate over all edges, in no particular order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Drop all nodes and edges and restart both id counters
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.next_node_id = 1;
        self.next_edge_id = 1;
    }

    fn adjacent_edges(&self, id: NodeId, direction: Direction) -> GraphResult<Vec<&Edge>> {
        let node = self.get_node(id)?;
        let edge_ids = match direction {
            Direction::Outgoing => node.outgoing(),
            Direction::Incoming => node.incoming(),
        };
        Ok(edge_ids
            .iter()
            .filter_map(|edge_id| self.edges.get(edge_id))
            .collect())
    }

    fn first_labeled_out(&self, id: NodeId, label: &Label) -> Option<&Edge> {
        let node = self.nodes.get(&id)?;
        node.outgoing()
            .iter()
            .filter_map(|edge_id| self.edges.get(edge_id))
            .find(|edge| &edge.label == label)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
