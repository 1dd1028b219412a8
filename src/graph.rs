//! Graph model: nodes, deduplicated edges, and pin state.

use std::collections::BTreeMap;

use glam::Vec3;
use rand::Rng;
use thiserror::Error;

use crate::protocol::GraphDescription;

/// Errors that can occur while building a graph model from a description.
///
/// All of these indicate a contract violation by the upstream graph producer,
/// so they fail the whole load rather than being silently tolerated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// An edge references a node id absent from the node list
    #[error("edge references unknown node id {id}")]
    UnknownEdgeEndpoint { id: u64 },

    /// No node in the description is marked as the initial state
    #[error("graph description has no initial node")]
    NoInitialNode,

    /// More than one node is marked as the initial state
    #[error("graph description marks more than one node as initial")]
    MultipleInitialNodes,
}

/// A simulated node: position, velocity, transient force accumulator, pin state.
#[derive(Debug, Clone)]
pub struct Node {
    pub position: Vec3,
    pub velocity: Vec3,
    pub force: Vec3,
    pub pinned: bool,
}

impl Node {
    fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            force: Vec3::ZERO,
            pinned: false,
        }
    }
}

/// Nodes and edges for one loaded graph.
///
/// Node iteration is ordered by id, so snapshots keep a stable ordering within
/// and across frames.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    nodes: BTreeMap<u64, Node>,
    edges: Vec<(u64, u64)>,
}

impl GraphModel {
    /// Build a model from an upstream graph description.
    ///
    /// Every node starts at a random position inside the unit cube centered on
    /// the origin, with zero velocity and unpinned; the initial node's entry is
    /// then overwritten to sit pinned at the origin. Edges are deduplicated
    /// treating `(a, b)` and `(b, a)` as identical, and self-loops are dropped.
    pub fn load(description: &GraphDescription) -> Result<Self, LayoutError> {
        let mut initial = None;
        for node in &description.nodes {
            if node.is_initial && initial.replace(node.id).is_some() {
                return Err(LayoutError::MultipleInitialNodes);
            }
        }
        let initial = initial.ok_or(LayoutError::NoInitialNode)?;

        let mut rng = rand::thread_rng();
        let mut nodes = BTreeMap::new();
        for node in &description.nodes {
            let position = Vec3::new(
                rng.gen_range(-0.5..0.5),
                rng.gen_range(-0.5..0.5),
                rng.gen_range(-0.5..0.5),
            );
            nodes.insert(node.id, Node::at(position));
        }

        nodes.insert(
            initial,
            Node {
                position: Vec3::ZERO,
                velocity: Vec3::ZERO,
                force: Vec3::ZERO,
                pinned: true,
            },
        );

        let mut edges: Vec<(u64, u64)> = Vec::new();
        for edge in &description.edges {
            if edge.source == edge.target {
                continue;
            }
            for id in [edge.source, edge.target] {
                if !nodes.contains_key(&id) {
                    return Err(LayoutError::UnknownEdgeEndpoint { id });
                }
            }
            let key = (
                edge.source.min(edge.target),
                edge.source.max(edge.target),
            );
            if !edges.contains(&key) {
                edges.push(key);
            }
        }

        Ok(Self { nodes, edges })
    }

    /// Flip the pin state of one node; unknown ids are a no-op.
    ///
    /// Velocity is zeroed on every toggle, in both directions, so a newly
    /// released node starts from rest instead of carrying stale momentum.
    pub fn toggle_pin(&mut self, id: u64) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.pinned = !node.pinned;
            node.velocity = Vec3::ZERO;
        }
    }

    /// Accumulate force on one node. Pinned and unknown nodes never receive force.
    pub(crate) fn add_force(&mut self, id: u64, force: Vec3) {
        if let Some(node) = self.nodes.get_mut(&id) {
            if !node.pinned {
                node.force += force;
            }
        }
    }

    pub fn nodes(&self) -> &BTreeMap<u64, Node> {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.values_mut()
    }

    pub fn node(&self, id: u64) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: u64) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Deduplicated, self-loop-free edge list, each pair ordered low-high.
    pub fn edges(&self) -> &[(u64, u64)] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
