use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::sync::mpsc;

use stategraph_layout::protocol::{ControlMessage, GraphDescription};
use stategraph_layout::scheduler;
use stategraph_layout::simulation::LayoutConfig;

/// Lay out a solved state-transition graph in 3D.
#[derive(Parser)]
#[command(name = "stategraph-layout")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input graph description (.json)
    #[arg(short, long)]
    input: PathBuf,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 300)]
    ticks: u64,

    /// Print every frame as a JSON line instead of only the last one
    #[arg(long)]
    stream: bool,

    /// Milliseconds between frames
    #[arg(long, default_value_t = 1)]
    interval_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let graph: GraphDescription = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", cli.input.display()))?;
    // Validate up front: a load the scheduler rejects would leave it idle and
    // this process waiting forever for frames.
    stategraph_layout::GraphModel::load(&graph)
        .with_context(|| format!("invalid graph description in {}", cli.input.display()))?;

    let (command_tx, command_rx) = mpsc::channel(16);
    let (frame_tx, mut frame_rx) = mpsc::channel(16);
    let worker = tokio::spawn(scheduler::run(
        LayoutConfig::default(),
        Duration::from_millis(cli.interval_ms),
        command_rx,
        frame_tx,
    ));

    command_tx
        .send(ControlMessage {
            graph: Some(graph),
            ..Default::default()
        })
        .await?;

    let mut last = None;
    for _ in 0..cli.ticks {
        let Some(snapshot) = frame_rx.recv().await else {
            break;
        };
        if cli.stream {
            println!("{}", serde_json::to_string(&snapshot)?);
        }
        last = Some(snapshot);
    }

    // Closing both channels tears the scheduler down.
    drop(command_tx);
    drop(frame_rx);
    worker.await?;

    if !cli.stream {
        if let Some(snapshot) = last {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}
