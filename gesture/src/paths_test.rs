#![allow(clippy::float_cmp)]

use super::*;
use crate::event::Contact;

fn c(id: ContactId, x: f64, y: f64) -> Contact {
    Contact::new(id, x, y)
}

fn pts(points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn down_seeds_path_with_one_point() {
    let mut r = MultiPathRecorder::new();
    let actions = r.on_event(&PointerEvent::Down { contact: c(5, 1.0, 2.0) }).unwrap();
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(r.paths().get(5), Some(pts(&[(1.0, 2.0)]).as_slice()));
}

#[test]
fn move_appends_to_every_active_path() {
    let mut r = MultiPathRecorder::new();
    r.on_event(&PointerEvent::Down { contact: c(0, 0.0, 0.0) }).unwrap();
    r.on_event(&PointerEvent::SecondaryDown { contacts: vec![c(0, 0.0, 0.0), c(1, 50.0, 50.0)], index: 1 })
        .unwrap();
    r.on_event(&PointerEvent::Move { contacts: vec![c(0, 1.0, 1.0), c(1, 51.0, 52.0)] }).unwrap();

    assert_eq!(r.paths().len(), 2);
    assert_eq!(r.paths().get(0), Some(pts(&[(0.0, 0.0), (1.0, 1.0)]).as_slice()));
    assert_eq!(r.paths().get(1), Some(pts(&[(50.0, 50.0), (51.0, 52.0)]).as_slice()));
}

#[test]
fn release_removes_only_that_path() {
    let mut r = MultiPathRecorder::new();
    r.on_event(&PointerEvent::Down { contact: c(0, 0.0, 0.0) }).unwrap();
    r.on_event(&PointerEvent::SecondaryDown { contacts: vec![c(0, 0.0, 0.0), c(1, 9.0, 9.0)], index: 1 })
        .unwrap();
    r.on_event(&PointerEvent::Move { contacts: vec![c(0, 2.0, 0.0), c(1, 9.0, 11.0)] }).unwrap();
    let kept = r.paths().get(1).map(<[Point]>::to_vec);

    r.on_event(&PointerEvent::SecondaryUp { contacts: vec![c(0, 2.0, 0.0), c(1, 9.0, 11.0)], index: 0 })
        .unwrap();
    assert_eq!(r.paths().get(0), None);
    assert_eq!(r.paths().get(1).map(<[Point]>::to_vec), kept);

    r.on_event(&PointerEvent::Up { contact: c(1, 9.0, 11.0) }).unwrap();
    assert!(r.paths().is_empty());
}

#[test]
fn reused_id_starts_a_fresh_path() {
    let mut r = MultiPathRecorder::new();
    r.on_event(&PointerEvent::Down { contact: c(0, 0.0, 0.0) }).unwrap();
    r.on_event(&PointerEvent::Move { contacts: vec![c(0, 5.0, 5.0)] }).unwrap();
    r.on_event(&PointerEvent::Up { contact: c(0, 5.0, 5.0) }).unwrap();

    r.on_event(&PointerEvent::Down { contact: c(0, 100.0, 100.0) }).unwrap();
    assert_eq!(r.paths().get(0), Some(pts(&[(100.0, 100.0)]).as_slice()));
}

// =============================================================
// Isolation
// =============================================================

#[test]
fn each_path_holds_only_its_own_points() {
    let mut r = MultiPathRecorder::new();
    r.on_event(&PointerEvent::Down { contact: c(0, 0.0, 0.0) }).unwrap();
    let mut expected_0 = vec![Point::new(0.0, 0.0)];
    let mut expected_1 = Vec::new();
    let mut expected_2 = Vec::new();

    r.on_event(&PointerEvent::SecondaryDown { contacts: vec![c(0, 0.0, 0.0), c(1, 100.0, 0.0)], index: 1 })
        .unwrap();
    expected_1.push(Point::new(100.0, 0.0));

    for step in 1..=5 {
        let s = f64::from(step);
        let contacts = vec![c(0, s, 0.0), c(1, 100.0, s)];
        expected_0.push(Point::new(s, 0.0));
        expected_1.push(Point::new(100.0, s));
        r.on_event(&PointerEvent::Move { contacts }).unwrap();
    }

    let three = vec![c(0, 5.0, 0.0), c(1, 100.0, 5.0), c(2, 200.0, 200.0)];
    r.on_event(&PointerEvent::SecondaryDown { contacts: three.clone(), index: 2 }).unwrap();
    expected_2.push(Point::new(200.0, 200.0));
    assert_eq!(r.paths().get(1), Some(expected_1.as_slice()));
    r.on_event(&PointerEvent::SecondaryUp { contacts: three, index: 1 }).unwrap();

    r.on_event(&PointerEvent::Move { contacts: vec![c(0, 6.0, 0.0), c(2, 201.0, 200.0)] }).unwrap();
    expected_0.push(Point::new(6.0, 0.0));
    expected_2.push(Point::new(201.0, 200.0));

    assert_eq!(r.paths().get(0), Some(expected_0.as_slice()));
    assert_eq!(r.paths().get(1), None);
    assert_eq!(r.paths().get(2), Some(expected_2.as_slice()));
}

// =============================================================
// Invariant violations
// =============================================================

#[test]
fn move_for_unknown_contact_errors_and_appends_nothing() {
    let mut r = MultiPathRecorder::new();
    r.on_event(&PointerEvent::Down { contact: c(0, 0.0, 0.0) }).unwrap();
    let err = r
        .on_event(&PointerEvent::Move { contacts: vec![c(0, 1.0, 1.0), c(3, 2.0, 2.0)] })
        .unwrap_err();
    assert_eq!(err, GestureError::MissingPath { id: 3 });
    assert_eq!(r.paths().get(0).map(<[Point]>::len), Some(1));
}

#[test]
fn stroke_style_is_round() {
    let style = StrokeStyle::round(4.0);
    assert_eq!(style.width, 4.0);
    assert_eq!(style.cap, LineCap::Round);
    assert_eq!(style.join, LineJoin::Round);
}
