use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{Force, ForceAccumulator, SpatialComponent};

/// Net force and moment about the link origin of world-frame `forces`
/// applied at link-frame offsets.
pub fn calculate_net_force_moment(
    forces: &[Force],
    attitude: &UnitQuaternion<f64>,
) -> (Vector3<f64>, Vector3<f64>) {
    let mut net_force = Vector3::zeros();
    let mut net_moment = Vector3::zeros();

    for force in forces {
        net_force += force.vector;
        let offset_world = attitude * force.offset;
        net_moment += offset_world.cross(&force.vector);
    }

    (net_force, net_moment)
}

/// Reset what links accumulated during the previous tick.
pub fn clear_forces_system(mut query: Query<&mut ForceAccumulator>) {
    for mut accumulator in query.iter_mut() {
        accumulator.clear_forces();
    }
}

pub fn force_accumulation_system(
    mut query: Query<(&mut ForceAccumulator, Option<&SpatialComponent>)>,
) {
    for (mut accumulator, spatial) in query.iter_mut() {
        let attitude = spatial.map_or_else(UnitQuaternion::identity, |s| s.attitude);
        let (net_force, net_moment) = calculate_net_force_moment(&accumulator.forces, &attitude);
        accumulator.net_force = net_force;
        accumulator.net_moment = net_moment;
    }
}
