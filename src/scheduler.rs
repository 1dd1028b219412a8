//! Async driver: consumes control messages, paces ticks, emits snapshots.
//!
//! The scheduler owns its [`Simulation`] outright; the host talks to it only
//! through channels, so no tick ever races a control command. While paused or
//! before the first load the task blocks on the command channel and costs
//! nothing.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::protocol::{ControlMessage, FrameEvent};
use crate::simulation::{LayoutConfig, Simulation};

/// Default tick pacing, roughly display refresh rate.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Drive a simulation until either channel closes.
///
/// While running, ticks are paced by `frame_interval` and each completed tick
/// sends one snapshot before the next tick can begin, so the snapshot stream
/// is ordered and frame N reflects exactly N integration steps since the last
/// load. Rejected loads are logged and leave the previous state in place.
pub async fn run(
    config: LayoutConfig,
    frame_interval: Duration,
    mut commands: mpsc::Receiver<ControlMessage>,
    frames: mpsc::Sender<Vec<FrameEvent>>,
) {
    let mut simulation = Simulation::new(config);
    // A zero interval would make tokio panic; pace at least one millisecond.
    let mut ticker = tokio::time::interval(frame_interval.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        if simulation.is_running() {
            tokio::select! {
                message = commands.recv() => match message {
                    Some(message) => handle(&mut simulation, message),
                    None => break,
                },
                _ = ticker.tick() => {
                    if let Some(snapshot) = simulation.tick() {
                        if frames.send(snapshot).await.is_err() {
                            debug!("frame consumer dropped, stopping scheduler");
                            break;
                        }
                    }
                }
            }
        } else {
            match commands.recv().await {
                Some(message) => handle(&mut simulation, message),
                None => break,
            }
        }
    }

    info!(frames = simulation.frame(), "scheduler stopped");
}

fn handle(simulation: &mut Simulation, message: ControlMessage) {
    if message.graph.is_some() {
        debug!("loading new graph");
    }
    if let Err(cause) = simulation.apply_message(message) {
        error!(%cause, "rejected control message");
    }
}
