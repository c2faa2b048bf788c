use nalgebra::Vector3;

/// Configuration element holding the lift coefficient
pub const LIFT_COEFFICIENT_KEY: &str = "liftCoefficient";
/// Configuration element holding the drag coefficient
pub const DRAG_COEFFICIENT_KEY: &str = "dragCoefficient";

/// Coefficient used when the configuration does not provide one
pub const DEFAULT_COEFFICIENT: f64 = 0.0;

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 250.0; // Host physics rate (s)

/// World vertical axis (z up)
#[inline]
pub fn world_up() -> Vector3<f64> {
    Vector3::z()
}

/// Offset of the applied forces from the link origin, in the link frame
#[inline]
pub fn force_offset() -> Vector3<f64> {
    Vector3::zeros()
}
