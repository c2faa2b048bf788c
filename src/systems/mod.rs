pub mod lift_drag;
pub mod physics;

pub use lift_drag::{
    advance_clock_system, apply_lift_drag_forces_system, attach_lift_drag_system,
    detach_lift_drag_system, sample_lift_drag_velocity_system,
};
pub use physics::{calculate_net_force_moment, clear_forces_system, force_accumulation_system};
