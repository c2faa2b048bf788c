pub mod lift_drag;
pub mod link;
pub mod physics;
pub mod spatial;

pub use lift_drag::LiftDragAttachment;
pub use link::{CanonicalLink, Link, Model, VelocityChecks};
pub use physics::{Force, ForceAccumulator};
pub use spatial::SpatialComponent;
