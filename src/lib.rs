//! stategraph-layout - force-directed 3D layout for puzzle state-transition graphs.
//!
//! An external solver produces the reachable-state graph of a puzzle level; this
//! crate positions its nodes in 3D space so a renderer can draw it meaningfully.
//! The simulation runs as a long-lived task driven by asynchronous control
//! messages (load a graph, pin a node, pause) and emits one position snapshot
//! per completed frame.

pub mod forces;
pub mod graph;
pub mod integrator;
pub mod protocol;
pub mod scheduler;
pub mod simulation;
pub mod spatial;

pub use graph::{GraphModel, LayoutError, Node};
pub use protocol::{Command, ControlMessage, FrameEvent, GraphDescription};
pub use simulation::{LayoutConfig, RunState, Simulation};
