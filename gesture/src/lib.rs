//! Multi-touch pan, zoom and draw for a single image or drawing surface.
//!
//! The crate is a pure reducer over pointer events and an external frame
//! clock. It never paints: hosts feed it [`event::TimedEvent`]s and frame
//! ticks, act on the returned [`engine::Action`]s, and read an
//! [`engine::Snapshot`] (offset, scale, transform, paths) when asked to
//! redraw.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Single entry point over all modes, actions and snapshots |
//! | [`event`] | Contacts and pointer events |
//! | [`tracker`] | Drag by one authoritative contact with seamless hand-off |
//! | [`centroid`] | Drag by the centroid of all contacts |
//! | [`paths`] | One freehand path per contact |
//! | [`zoom`] | Double-tap zoom, bounded pan and fling |
//! | [`recognizer`] | Tap, double-tap, drag and fling recognition |
//! | [`fling`] | Inertial scroll with overscroll and spring-back |
//! | [`animation`] | Zoom animation progress |
//! | [`task`] | Cancellable per-frame tasks |
//! | [`bounds`] | Scale and pan limits |
//! | [`transform`] | Points, sizes and the image-to-surface transform |
//! | [`config`] | Tunables and environment overrides |
//! | [`error`] | Invariant violations |
//! | [`consts`] | Default values and thresholds |

pub mod animation;
pub mod bounds;
pub mod centroid;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod event;
pub mod fling;
pub mod paths;
pub mod recognizer;
pub mod task;
pub mod tracker;
pub mod transform;
pub mod zoom;
