use bevy::prelude::*;

/// Marks an entity the lift/drag plugin may attach to
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Model;

/// A rigid body belonging to a model
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Link;

/// The reference link of its model
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct CanonicalLink;

/// Present once velocity reporting was requested for a link
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct VelocityChecks;
