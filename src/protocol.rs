//! Wire types for the control protocol and the frame snapshot stream.
//!
//! Inbound traffic is a single message type with optional, composable fields
//! (a message may load a graph and set the pause flag at once). Internally the
//! message expands into explicit [`Command`]s so the simulation's state machine
//! can be driven and tested without a message-passing harness.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One node in an upstream graph description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    /// Stable identifier assigned by the solver, unique within a graph
    pub id: u64,

    /// Marks the graph's designated initial state; exactly one node carries it
    #[serde(default)]
    pub is_initial: bool,
}

/// One edge as supplied by the producer. Direction is ignored by the
/// simulation; `(a, b)` and `(b, a)` describe the same spring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDescription {
    pub source: u64,
    pub target: u64,
}

/// Complete state-transition graph as produced by the solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDescription {
    pub nodes: Vec<NodeDescription>,
    pub edges: Vec<EdgeDescription>,
}

/// Inbound control message.
///
/// All fields are optional and composable; absent fields are simply not acted
/// upon, and unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlMessage {
    /// Replace the entire simulation state with a freshly loaded graph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphDescription>,

    /// Flip the pin state of one node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggle_pin: Option<u64>,

    /// Suspend or resume ticking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause: Option<bool>,
}

impl ControlMessage {
    /// Expand into explicit commands, in the order they are acted upon:
    /// load first, then pin toggle, then pause.
    pub fn into_commands(self) -> Vec<Command> {
        let mut commands = Vec::new();
        if let Some(graph) = self.graph {
            commands.push(Command::Load(graph));
        }
        if let Some(id) = self.toggle_pin {
            commands.push(Command::TogglePin { id });
        }
        if let Some(paused) = self.pause {
            commands.push(Command::SetPaused(paused));
        }
        commands
    }
}

/// An explicit simulation command, the unit the state machine consumes.
#[derive(Debug, Clone)]
pub enum Command {
    /// Discard any prior state and load this graph
    Load(GraphDescription),
    /// Flip the pin state of one node (no-op if the id is unknown)
    TogglePin { id: u64 },
    /// Suspend or resume ticking without touching simulation state
    SetPaused(bool),
}

/// 3D position on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for Position {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// One node's entry in a per-frame snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameEvent {
    pub id: u64,
    pub position: Position,
}
