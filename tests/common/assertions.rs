use approx::assert_relative_eq;
use lift_drag::components::ForceAccumulator;
use nalgebra::Vector3;

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Assert the forces a link received this tick, in submission order
#[track_caller]
pub fn assert_forces_eq(accumulator: &ForceAccumulator, expected: &[Vector3<f64>]) {
    assert_eq!(
        accumulator.forces.len(),
        expected.len(),
        "Unexpected number of applied forces"
    );
    for (force, expected) in accumulator.forces.iter().zip(expected) {
        assert_vector_eq(&force.vector, expected, 1e-12);
        assert_eq!(force.offset, Vector3::zeros(), "Force not applied at the link origin");
    }
}
