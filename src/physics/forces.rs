use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{normalize_or_zero, world_up};

/// Drag and lift acting on a link, both in the world frame [N]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroForces {
    pub drag: Vector3<f64>,
    pub lift: Vector3<f64>,
}

impl AeroForces {
    pub fn zero() -> Self {
        Self {
            drag: Vector3::zeros(),
            lift: Vector3::zeros(),
        }
    }

    pub fn total(&self) -> Vector3<f64> {
        self.drag + self.lift
    }
}

/// Quadratic drag opposing `velocity`: `-v * c_d * |v|`.
pub fn compute_drag_force(velocity: &Vector3<f64>, drag_coefficient: f64) -> Vector3<f64> {
    -velocity * drag_coefficient * velocity.norm()
}

/// Quadratic lift perpendicular to `velocity`, in the plane holding the
/// velocity and the world vertical.
///
/// With `n = normalize(-v) x up`, lift is `(v x n) * c_l * |v|`. A zero
/// velocity normalizes to the zero vector, so the result is zero rather than NaN.
pub fn compute_lift_force(velocity: &Vector3<f64>, lift_coefficient: f64) -> Vector3<f64> {
    let n = normalize_or_zero(&-velocity).cross(&world_up());
    velocity.cross(&n) * lift_coefficient * velocity.norm()
}

pub fn compute_forces(
    velocity: &Vector3<f64>,
    lift_coefficient: f64,
    drag_coefficient: f64,
) -> AeroForces {
    AeroForces {
        drag: compute_drag_force(velocity, drag_coefficient),
        lift: compute_lift_force(velocity, lift_coefficient),
    }
}
