use nalgebra::Vector3;

/// Unit vector in the direction of `v`, or the zero vector when `v` has no length.
#[inline]
pub fn normalize_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    v.try_normalize(0.0).unwrap_or_else(Vector3::zeros)
}

/// Squared horizontal speed, the vertical component is ignored
#[inline]
pub fn ground_speed_squared(velocity: &Vector3<f64>) -> f64 {
    velocity.x.powi(2) + velocity.y.powi(2)
}
