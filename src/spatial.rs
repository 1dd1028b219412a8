//! Grid-based spatial partitioning for approximate neighbor queries.
//!
//! Space is cut into cubes of a fixed cell size (twice the repulsion falloff
//! radius) and each bucket holds the nodes whose position falls in that cell.
//! The grid is rebuilt from scratch once per frame; node counts are bounded by
//! a single puzzle's reachable-state graph, so O(n) per frame is fine.

use std::collections::HashMap;

use glam::Vec3;

use crate::graph::GraphModel;

/// Integer bucket coordinate: floor of position / cell size, per axis.
type CellKey = (i32, i32, i32);

/// Buckets node positions for cheap radius queries.
#[derive(Debug)]
pub struct SpatialGrid {
    cell_size: f32,
    buckets: HashMap<CellKey, Vec<(u64, Vec3)>>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            buckets: HashMap::new(),
        }
    }

    fn cell_of(&self, point: Vec3) -> CellKey {
        (
            (point.x / self.cell_size).floor() as i32,
            (point.y / self.cell_size).floor() as i32,
            (point.z / self.cell_size).floor() as i32,
        )
    }

    /// Clear and repopulate the grid from current node positions.
    pub fn rebuild(&mut self, graph: &GraphModel) {
        self.buckets.clear();
        for (&id, node) in graph.nodes() {
            let key = self.cell_of(node.position);
            self.buckets.entry(key).or_default().push((id, node.position));
        }
    }

    /// Nodes within `radius` of `point`, as `(id, position)` pairs.
    ///
    /// Candidates come from the bucket containing `point` plus the seven
    /// buckets reached by decrementing one or more axis indices, then get
    /// filtered by exact Euclidean distance. Upper-adjacent buckets are not
    /// examined, so a few true neighbors near certain cell boundaries are
    /// missed; callers accept that in exchange for the fixed 8-bucket scan.
    pub fn query(&self, point: Vec3, radius: f32) -> Vec<(u64, Vec3)> {
        let (cx, cy, cz) = self.cell_of(point);
        let mut hits = Vec::new();
        for dx in -1..=0 {
            for dy in -1..=0 {
                for dz in -1..=0 {
                    let Some(bucket) = self.buckets.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    for &(id, position) in bucket {
                        if position.distance(point) <= radius {
                            hits.push((id, position));
                        }
                    }
                }
            }
        }
        hits
    }
}
