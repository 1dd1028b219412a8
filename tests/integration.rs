use std::io::Write;
use std::process::Command;

use stategraph_layout::protocol::FrameEvent;

#[test]
fn binary_prints_a_final_snapshot_for_a_fixture_graph() {
    let output = Command::new(env!("CARGO_BIN_EXE_stategraph-layout"))
        .args([
            "--input",
            "tests/fixtures/diamond.json",
            "--ticks",
            "50",
        ])
        .output()
        .expect("failed to execute stategraph-layout");

    assert!(output.status.success(), "binary exited with error");

    let snapshot: Vec<FrameEvent> =
        serde_json::from_slice(&output.stdout).expect("stdout is not a snapshot");
    let ids: Vec<u64> = snapshot.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);

    for event in &snapshot {
        assert!(event.position.x.is_finite());
        assert!(event.position.y.is_finite());
        assert!(event.position.z.is_finite());
    }

    // The initial node is pinned at the origin and must not have moved.
    assert_eq!(snapshot[0].position.x, 0.0);
    assert_eq!(snapshot[0].position.y, 0.0);
    assert_eq!(snapshot[0].position.z, 0.0);
}

#[test]
fn binary_streams_one_snapshot_line_per_tick() {
    let output = Command::new(env!("CARGO_BIN_EXE_stategraph-layout"))
        .args([
            "--input",
            "tests/fixtures/diamond.json",
            "--ticks",
            "10",
            "--stream",
        ])
        .output()
        .expect("failed to execute stategraph-layout");

    assert!(output.status.success(), "binary exited with error");

    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    for line in lines {
        let snapshot: Vec<FrameEvent> =
            serde_json::from_str(line).expect("line is not a snapshot");
        assert_eq!(snapshot.len(), 6);
    }
}

#[test]
fn binary_rejects_a_graph_with_an_unknown_edge_endpoint() {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    write!(
        file,
        r#"{{"nodes": [{{"id": 0, "isInitial": true}}], "edges": [{{"source": 0, "target": 7}}]}}"#
    )
    .expect("failed to write temp file");

    let output = Command::new(env!("CARGO_BIN_EXE_stategraph-layout"))
        .args(["--input", file.path().to_str().unwrap()])
        .output()
        .expect("failed to execute stategraph-layout");

    assert!(!output.status.success(), "binary accepted a bad graph");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown node id 7"),
        "stderr did not name the bad id: {stderr}"
    );
}
