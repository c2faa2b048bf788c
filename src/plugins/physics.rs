use bevy::ecs::schedule::{InternedScheduleLabel, ScheduleLabel};
use bevy::prelude::*;

use crate::systems::{clear_forces_system, force_accumulation_system};

/// Host physics stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum PhysicsSet {
    ClearForces,
    ForceAccumulation,
    /// Hosts integrate accumulated forces into motion here
    Integration,
}

/// Collects the forces applied to links each tick into a net force and moment.
pub struct PhysicsPlugin {
    pub schedule: InternedScheduleLabel,
}

impl Default for PhysicsPlugin {
    fn default() -> Self {
        Self::in_schedule(FixedUpdate)
    }
}

impl PhysicsPlugin {
    pub fn in_schedule(schedule: impl ScheduleLabel) -> Self {
        Self {
            schedule: schedule.intern(),
        }
    }
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            self.schedule,
            (
                PhysicsSet::ClearForces,
                PhysicsSet::ForceAccumulation,
                PhysicsSet::Integration,
            )
                .chain(),
        );

        app.add_systems(
            self.schedule,
            (
                clear_forces_system.in_set(PhysicsSet::ClearForces),
                force_accumulation_system.in_set(PhysicsSet::ForceAccumulation),
            ),
        );
    }
}
