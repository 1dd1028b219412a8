//! Velocity/position integration with damping and a hard speed clamp.

use glam::Vec3;

use crate::graph::GraphModel;
use crate::simulation::LayoutConfig;

/// Advance every node one step from its accumulated force.
///
/// Per unpinned node, in order: apply force to velocity, damp, clamp speed,
/// move, clear the accumulator. Pinned nodes keep their position and velocity
/// untouched; their accumulator is still cleared in case anything set it.
pub fn integrate(graph: &mut GraphModel, config: &LayoutConfig) {
    for node in graph.nodes_mut() {
        if node.pinned {
            node.force = Vec3::ZERO;
            continue;
        }
        node.velocity += node.force;
        node.velocity *= 1.0 - config.damping;
        node.velocity = node.velocity.clamp_length_max(config.max_speed);
        node.position += node.velocity;
        node.force = Vec3::ZERO;
    }
}
