use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A force the host was asked to apply to a link this tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Force {
    /// Force vector in the world frame [N]
    pub vector: Vector3<f64>,
    /// Point of application in the link frame [m]
    pub offset: Vector3<f64>,
}

/// Forces submitted to a link during one tick and their resultant.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForceAccumulator {
    pub forces: Vec<Force>,
    pub net_force: Vector3<f64>,
    pub net_moment: Vector3<f64>,
}

impl ForceAccumulator {
    pub fn add_force(&mut self, vector: Vector3<f64>, offset: Vector3<f64>) {
        // Store the force for later processing
        self.forces.push(Force { vector, offset });
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
        self.net_force = Vector3::zeros();
        self.net_moment = Vector3::zeros();
    }
}
