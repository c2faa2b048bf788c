//! Quadratic lift and drag forces for the canonical link of a simulated model.
//!
//! The force model in [`physics`] is host-agnostic and talks to the simulator
//! through the traits in [`host`]. The [`plugins`] wire it into a Bevy app.

pub mod components;
pub mod config;
pub mod diagnostics;
pub mod host;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use config::PluginConfig;
pub use diagnostics::{BevyLog, Diagnostics, LogField, LogLevel, LogRecord, RecordingLog};
pub use host::{ConfigBundle, EntityStore, EntityStoreMut, TickInfo};
pub use physics::{AeroForces, LiftDragSystem};
pub use plugins::{LiftDragPlugin, LiftDragSet, PhysicsPlugin, PhysicsSet};
