//! Spring and repulsion force accumulation.
//!
//! Both contributions add into the same per-node force accumulator before
//! integration. Pinned nodes never receive force, independent of their edges.

use glam::Vec3;

use crate::graph::GraphModel;
use crate::simulation::LayoutConfig;
use crate::spatial::SpatialGrid;

/// Accumulate a Hookean spring force along every edge.
///
/// The force pulls each edge's length toward `rest_length`. With exactly one
/// pinned endpoint the entire force goes to the free endpoint; with both free
/// it is split half-and-half with opposite signs; with both pinned the edge is
/// skipped. Coincident endpoints are skipped to keep the direction defined.
pub fn apply_spring_forces(graph: &mut GraphModel, config: &LayoutConfig) {
    for i in 0..graph.edges().len() {
        let (a, b) = graph.edges()[i];
        let (Some(node_a), Some(node_b)) = (graph.node(a), graph.node(b)) else {
            continue;
        };
        if node_a.pinned && node_b.pinned {
            continue;
        }
        let (a_pinned, b_pinned) = (node_a.pinned, node_b.pinned);

        let d = node_b.position - node_a.position;
        let len = d.length();
        if len <= f32::EPSILON {
            continue;
        }
        let force = d / len * (config.rest_length - len) * config.stiffness;

        if a_pinned {
            graph.add_force(b, force);
        } else if b_pinned {
            graph.add_force(a, -force);
        } else {
            graph.add_force(b, force * 0.5);
            graph.add_force(a, force * -0.5);
        }
    }
}

/// Accumulate an inverse-square repulsion force on every unpinned node.
///
/// Neighbors come from the spatial grid, limited to `falloff_radius`; each one
/// pushes the node away with magnitude `repulsion / distance²`. Exactly
/// coincident pairs are skipped rather than dividing by zero.
pub fn apply_repulsion(graph: &mut GraphModel, grid: &SpatialGrid, config: &LayoutConfig) {
    let targets: Vec<(u64, Vec3)> = graph
        .nodes()
        .iter()
        .filter(|(_, node)| !node.pinned)
        .map(|(&id, node)| (id, node.position))
        .collect();

    for (id, position) in targets {
        let mut total = Vec3::ZERO;
        for (other, other_position) in grid.query(position, config.falloff_radius) {
            if other == id {
                continue;
            }
            let away = position - other_position;
            let distance_sq = away.length_squared();
            if distance_sq <= f32::EPSILON {
                continue;
            }
            total += away / distance_sq.sqrt() * (config.repulsion / distance_sq);
        }
        graph.add_force(id, total);
    }
}
