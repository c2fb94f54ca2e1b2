#![allow(clippy::float_cmp)]

use serde_json::Value;

use super::*;

// =============================================================
// Helpers
// =============================================================

const FRAME_MS: f64 = 16.0;

fn script(json: &str) -> Script {
    Script::parse(json).unwrap()
}

fn lines(out: Vec<u8>) -> Vec<Value> {
    String::from_utf8(out).unwrap().lines().map(|line| serde_json::from_str(line).unwrap()).collect()
}

fn replay(json: &str) -> (ReplayStats, Vec<Value>) {
    let mut out = Vec::<u8>::new();
    let stats = run(script(json), GestureConfig::default(), FRAME_MS, &mut out).unwrap();
    (stats, lines(out))
}

const DOUBLE_TAP: &str = r#"{
    "mode": "zoom_pan",
    "surface": {"width": 800, "height": 600},
    "image": {"width": 400, "height": 300},
    "events": [
        {"time_ms": 0, "event": {"kind": "down", "contact": {"id": 0, "x": 400, "y": 300}}},
        {"time_ms": 50, "event": {"kind": "up", "contact": {"id": 0, "x": 400, "y": 300}}},
        {"time_ms": 150, "event": {"kind": "down", "contact": {"id": 0, "x": 400, "y": 300}}},
        {"time_ms": 200, "event": {"kind": "up", "contact": {"id": 0, "x": 400, "y": 300}}}
    ]
}"#;

// =============================================================
// Synchronous replay
// =============================================================

#[test]
fn track_drag_prints_one_line_per_redraw() {
    let (stats, out) = replay(
        r#"{"events": [
            {"time_ms": 0, "event": {"kind": "down", "contact": {"id": 0, "x": 10, "y": 10}}},
            {"time_ms": 16, "event": {"kind": "move", "contacts": [{"id": 0, "x": 40, "y": 0}]}},
            {"time_ms": 32, "event": {"kind": "up", "contact": {"id": 0, "x": 40, "y": 0}}}
        ]}"#,
    );
    assert_eq!(stats, ReplayStats { events: 3, frames: 0, snapshots: 1 });
    assert_eq!(out.len(), 1);
    assert_eq!(out[0]["time_ms"], 16.0);
    assert_eq!(out[0]["mode"], "track");
    assert_eq!(out[0]["offset"]["x"], 30.0);
    assert_eq!(out[0]["offset"]["y"], -10.0);
}

#[test]
fn sizing_prints_initial_snapshot() {
    let (stats, out) = replay(r#"{"mode": "zoom_pan", "surface": {"width": 100, "height": 100}, "image": {"width": 50, "height": 50}}"#);
    assert_eq!(stats.snapshots, 1);
    assert_eq!(out[0]["zoom_phase"], "settled_small");
    assert_eq!(out[0]["scale"], 2.0);
}

#[test]
fn double_tap_animates_to_settled_big() {
    let (stats, out) = replay(DOUBLE_TAP);
    assert_eq!(stats.events, 4);
    assert!(stats.frames > 0);

    let last = out.last().unwrap();
    assert_eq!(last["zoom_phase"], "settled_big");
    assert_eq!(last["scale"], 3.0);

    let times: Vec<f64> = out.iter().filter_map(|line| line["time_ms"].as_f64()).collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]), "{times:?}");
}

#[test]
fn frames_interleave_with_events() {
    let (_, out) = replay(DOUBLE_TAP);
    let times: Vec<f64> = out.iter().filter_map(|line| line["time_ms"].as_f64()).collect();
    // Double tap at 150, then frames every 16 ms.
    assert!(times.contains(&150.0));
    assert!(times.contains(&166.0));
    assert!(times.contains(&182.0));
}

#[test]
fn trailing_budget_stops_frames() {
    let (stats, out) = replay(
        r#"{
            "mode": "zoom_pan",
            "surface": {"width": 800, "height": 600},
            "image": {"width": 400, "height": 300},
            "trailing_frames_ms": 32,
            "events": [
                {"time_ms": 0, "event": {"kind": "down", "contact": {"id": 0, "x": 400, "y": 300}}},
                {"time_ms": 50, "event": {"kind": "up", "contact": {"id": 0, "x": 400, "y": 300}}},
                {"time_ms": 150, "event": {"kind": "down", "contact": {"id": 0, "x": 400, "y": 300}}}
            ]
        }"#,
    );
    assert_eq!(stats.frames, 2);
    assert_eq!(out.last().unwrap()["zoom_phase"], "animating_in");
}

#[test]
fn draw_mode_prints_paths() {
    let (_, out) = replay(
        r#"{"mode": "draw", "events": [
            {"time_ms": 0, "event": {"kind": "down", "contact": {"id": 3, "x": 1, "y": 1}}},
            {"time_ms": 16, "event": {"kind": "move", "contacts": [{"id": 3, "x": 2, "y": 2}]}}
        ]}"#,
    );
    assert_eq!(out.len(), 2);
    assert_eq!(out[1]["paths"][0]["contact"], 3);
    assert_eq!(out[1]["paths"][0]["points"].as_array().map(Vec::len), Some(2));
    assert_eq!(out[1]["stroke"]["cap"], "round");
}

#[test]
fn bad_event_is_skipped() {
    let (stats, out) = replay(
        r#"{"events": [
            {"time_ms": 0, "event": {"kind": "move", "contacts": [{"id": 0, "x": 2, "y": 2}]}}
        ]}"#,
    );
    assert_eq!(stats.events, 1);
    assert!(out.is_empty());
}

#[test]
fn non_positive_frame_period_is_rejected() {
    for frame_ms in [0.0, -16.0, f64::NAN] {
        let err = run(script("{}"), GestureConfig::default(), frame_ms, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, ReplayError::FramePeriod(_)));
    }
}

// =============================================================
// Realtime replay
// =============================================================

#[tokio::test(start_paused = true)]
async fn realtime_matches_synchronous_output() {
    let mut sync_out = Vec::<u8>::new();
    let sync_stats = run(script(DOUBLE_TAP), GestureConfig::default(), FRAME_MS, &mut sync_out).unwrap();

    let mut realtime_out = Vec::<u8>::new();
    let realtime_stats =
        run_realtime(script(DOUBLE_TAP), GestureConfig::default(), FRAME_MS, &mut realtime_out).await.unwrap();

    assert_eq!(realtime_stats, sync_stats);
    assert_eq!(realtime_out, sync_out);
}

#[tokio::test(start_paused = true)]
async fn realtime_waits_for_event_times() {
    let start = Instant::now();
    let json = r#"{"events": [
        {"time_ms": 0, "event": {"kind": "down", "contact": {"id": 0, "x": 0, "y": 0}}},
        {"time_ms": 500, "event": {"kind": "up", "contact": {"id": 0, "x": 0, "y": 0}}}
    ]}"#;
    run_realtime(script(json), GestureConfig::default(), FRAME_MS, &mut Vec::<u8>::new()).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(500));
}
