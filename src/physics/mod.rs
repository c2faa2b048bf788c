pub mod forces;
pub mod model;

pub use forces::{compute_drag_force, compute_forces, compute_lift_force, AeroForces};
pub use model::{ActiveModel, LiftDragSystem};
