//! Simulation state machine: owns the graph model and advances it frame by frame.

use crate::forces;
use crate::graph::{GraphModel, LayoutError};
use crate::integrator;
use crate::protocol::{Command, ControlMessage, FrameEvent};
use crate::spatial::SpatialGrid;

/// Tunable constants for the force model and integrator.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Rest length every edge spring settles toward, in distance units
    pub rest_length: f32,
    /// Spring stiffness multiplier
    pub stiffness: f32,
    /// Repulsion strength; per-pair magnitude is `repulsion / distance²`
    pub repulsion: f32,
    /// Maximum distance at which repulsion applies; spatial buckets are cubes
    /// of twice this side
    pub falloff_radius: f32,
    /// Fraction of velocity shed each frame
    pub damping: f32,
    /// Hard clamp on velocity magnitude after integration
    pub max_speed: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rest_length: 10.0,
            stiffness: 0.2,
            repulsion: 0.3,
            falloff_radius: 10.0,
            damping: 0.2,
            max_speed: 100.0,
        }
    }
}

/// Run state of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No graph loaded yet
    Uninitialized,
    /// Ticks advance
    Running,
    /// State preserved, ticks suspended
    Paused,
}

/// The complete simulation: graph model, spatial grid, run state, frame counter.
///
/// All mutation goes through [`Simulation::apply`] and [`Simulation::tick`];
/// there is no shared state with the caller, so ticks are strictly sequential
/// by construction.
pub struct Simulation {
    config: LayoutConfig,
    graph: GraphModel,
    grid: SpatialGrid,
    state: RunState,
    frame: u64,
}

impl Simulation {
    pub fn new(config: LayoutConfig) -> Self {
        let grid = SpatialGrid::new(config.falloff_radius * 2.0);
        Self {
            config,
            graph: GraphModel::default(),
            grid,
            state: RunState::Uninitialized,
            frame: 0,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Completed integration steps since the last load.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut GraphModel {
        &mut self.graph
    }

    /// Apply one control command.
    ///
    /// Only `Load` can fail; a failed load leaves the previous graph and run
    /// state untouched, since the new model is fully built before the swap.
    /// A successful load discards all prior state and moves to `Running`.
    /// `SetPaused(false)` before any load stays `Uninitialized`; there is
    /// nothing to run yet.
    pub fn apply(&mut self, command: Command) -> Result<(), LayoutError> {
        match command {
            Command::Load(description) => {
                self.graph = GraphModel::load(&description)?;
                self.frame = 0;
                self.state = RunState::Running;
            }
            Command::TogglePin { id } => self.graph.toggle_pin(id),
            Command::SetPaused(paused) => {
                self.state = match (self.state, paused) {
                    (RunState::Uninitialized, _) => RunState::Uninitialized,
                    (_, true) => RunState::Paused,
                    (_, false) => RunState::Running,
                };
            }
        }
        Ok(())
    }

    /// Apply every command carried by one control message.
    pub fn apply_message(&mut self, message: ControlMessage) -> Result<(), LayoutError> {
        for command in message.into_commands() {
            self.apply(command)?;
        }
        Ok(())
    }

    /// Advance one frame and return its position snapshot.
    ///
    /// Returns `None` unless the simulation is running. Order within a frame:
    /// rebuild the spatial grid, accumulate spring then repulsion forces,
    /// integrate, snapshot, bump the frame counter.
    pub fn tick(&mut self) -> Option<Vec<FrameEvent>> {
        if self.state != RunState::Running {
            return None;
        }
        self.grid.rebuild(&self.graph);
        forces::apply_spring_forces(&mut self.graph, &self.config);
        forces::apply_repulsion(&mut self.graph, &self.grid, &self.config);
        integrator::integrate(&mut self.graph, &self.config);
        self.frame += 1;
        Some(self.snapshot())
    }

    /// Current positions of every node, in stable id order.
    pub fn snapshot(&self) -> Vec<FrameEvent> {
        self.graph
            .nodes()
            .iter()
            .map(|(&id, node)| FrameEvent {
                id,
                position: node.position.into(),
            })
            .collect()
    }
}
