#![allow(clippy::float_cmp)]

use super::*;

fn c(id: u32, x: f64, y: f64) -> Contact {
    Contact::new(id, x, y)
}

// =============================================================
// centroid()
// =============================================================

#[test]
fn centroid_of_one_is_itself() {
    assert_eq!(centroid(&[c(0, 3.0, 4.0)], None).unwrap(), Point::new(3.0, 4.0));
}

#[test]
fn centroid_is_unweighted_mean() {
    let contacts = [c(0, 0.0, 0.0), c(1, 10.0, 0.0), c(2, 20.0, 30.0)];
    assert_eq!(centroid(&contacts, None).unwrap(), Point::new(10.0, 10.0));
}

#[test]
fn centroid_skips_releasing_contact_in_sum_and_count() {
    let contacts = [c(0, 0.0, 0.0), c(1, 10.0, 10.0), c(2, 1000.0, 1000.0)];
    assert_eq!(centroid(&contacts, Some(2)).unwrap(), Point::new(5.0, 5.0));
}

#[test]
fn centroid_of_nothing_errors() {
    assert_eq!(centroid(&[], None), Err(GestureError::EmptyContactSet));
    assert_eq!(centroid(&[c(0, 1.0, 1.0)], Some(0)), Err(GestureError::EmptyContactSet));
}

// =============================================================
// CentroidTracker
// =============================================================

#[test]
fn single_contact_drags_like_pointer_tracker() {
    let mut t = CentroidTracker::new();
    t.on_event(&PointerEvent::Down { contact: c(0, 10.0, 10.0) }).unwrap();
    let actions = t.on_event(&PointerEvent::Move { contacts: vec![c(0, 25.0, 5.0)] }).unwrap();
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(t.offset(), Point::new(15.0, -5.0));
}

#[test]
fn second_contact_reanchors_without_jump() {
    let mut t = CentroidTracker::new();
    t.on_event(&PointerEvent::Down { contact: c(0, 0.0, 0.0) }).unwrap();
    t.on_event(&PointerEvent::Move { contacts: vec![c(0, 10.0, 0.0)] }).unwrap();

    let both = vec![c(0, 10.0, 0.0), c(1, 110.0, 100.0)];
    t.on_event(&PointerEvent::SecondaryDown { contacts: both.clone(), index: 1 }).unwrap();
    assert_eq!(t.drag_origin().map(|o| o.down), Some(Point::new(60.0, 50.0)));

    t.on_event(&PointerEvent::Move { contacts: both }).unwrap();
    assert_eq!(t.offset(), Point::new(10.0, 0.0));
}

#[test]
fn group_moves_by_centroid_delta() {
    let mut t = CentroidTracker::new();
    t.on_event(&PointerEvent::Down { contact: c(0, 0.0, 0.0) }).unwrap();
    t.on_event(&PointerEvent::SecondaryDown { contacts: vec![c(0, 0.0, 0.0), c(1, 100.0, 0.0)], index: 1 })
        .unwrap();
    // One finger still, one moves 40 right: centroid moves 20.
    t.on_event(&PointerEvent::Move { contacts: vec![c(0, 0.0, 0.0), c(1, 140.0, 0.0)] }).unwrap();
    assert_eq!(t.offset(), Point::new(20.0, 0.0));
}

#[test]
fn release_reanchors_on_survivors() {
    let mut t = CentroidTracker::new();
    t.on_event(&PointerEvent::Down { contact: c(0, 0.0, 0.0) }).unwrap();
    t.on_event(&PointerEvent::SecondaryDown { contacts: vec![c(0, 0.0, 0.0), c(1, 100.0, 100.0)], index: 1 })
        .unwrap();
    t.on_event(&PointerEvent::SecondaryUp { contacts: vec![c(0, 0.0, 0.0), c(1, 100.0, 100.0)], index: 1 })
        .unwrap();
    assert_eq!(t.drag_origin().map(|o| o.down), Some(Point::ZERO));

    t.on_event(&PointerEvent::Move { contacts: vec![c(0, 0.0, 0.0)] }).unwrap();
    assert_eq!(t.offset(), Point::ZERO);
}

#[test]
fn move_outside_gesture_errors() {
    let mut t = CentroidTracker::new();
    let err = t.on_event(&PointerEvent::Move { contacts: vec![c(0, 0.0, 0.0)] }).unwrap_err();
    assert_eq!(err, GestureError::NoTrackedContact);
}

#[test]
fn empty_move_errors_and_keeps_offset() {
    let mut t = CentroidTracker::new();
    t.on_event(&PointerEvent::Down { contact: c(0, 0.0, 0.0) }).unwrap();
    t.on_event(&PointerEvent::Move { contacts: vec![c(0, 5.0, 5.0)] }).unwrap();
    let err = t.on_event(&PointerEvent::Move { contacts: Vec::new() }).unwrap_err();
    assert_eq!(err, GestureError::EmptyContactSet);
    assert_eq!(t.offset(), Point::new(5.0, 5.0));
}

#[test]
fn up_ends_gesture_and_keeps_offset() {
    let mut t = CentroidTracker::new();
    t.on_event(&PointerEvent::Down { contact: c(0, 0.0, 0.0) }).unwrap();
    t.on_event(&PointerEvent::Move { contacts: vec![c(0, 3.0, 0.0)] }).unwrap();
    t.on_event(&PointerEvent::Up { contact: c(0, 3.0, 0.0) }).unwrap();
    assert_eq!(t.drag_origin(), None);
    assert_eq!(t.offset(), Point::new(3.0, 0.0));
}
