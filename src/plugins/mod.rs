mod lift_drag;
mod physics;

pub use lift_drag::{LiftDragPlugin, LiftDragSet};
pub use physics::{PhysicsPlugin, PhysicsSet};
