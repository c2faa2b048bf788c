use bevy::ecs::schedule::{InternedScheduleLabel, ScheduleLabel};
use bevy::prelude::*;
use std::sync::Arc;

use crate::diagnostics::Diagnostics;
use crate::plugins::{PhysicsPlugin, PhysicsSet};
use crate::resources::{DiagnosticsSink, LiftDragModels, SimulationClock};
use crate::systems::{
    advance_clock_system, apply_lift_drag_forces_system, attach_lift_drag_system,
    detach_lift_drag_system, sample_lift_drag_velocity_system,
};

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum LiftDragSet {
    Clock,
    Attach,
    /// Before the host integrates
    ApplyForces,
    /// After the host integrated
    SampleVelocity,
}

/// Runs the lift/drag hooks of every attached model once per tick.
///
/// Within the schedule a tick runs as: clock, attach/detach, clear forces,
/// apply lift and drag, accumulate, integrate (host), sample velocity.
/// Adds a [`PhysicsPlugin`] in the same schedule unless one was added before.
pub struct LiftDragPlugin {
    pub schedule: InternedScheduleLabel,
    pub diagnostics: Option<Arc<dyn Diagnostics + Send + Sync>>,
}

impl Default for LiftDragPlugin {
    fn default() -> Self {
        Self {
            schedule: FixedUpdate.intern(),
            diagnostics: None,
        }
    }
}

impl LiftDragPlugin {
    pub fn in_schedule(mut self, schedule: impl ScheduleLabel) -> Self {
        self.schedule = schedule.intern();
        self
    }

    /// Report to `sink` instead of Bevy's log
    pub fn with_diagnostics(mut self, sink: Arc<dyn Diagnostics + Send + Sync>) -> Self {
        self.diagnostics = Some(sink);
        self
    }
}

impl Plugin for LiftDragPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<PhysicsPlugin>() {
            app.add_plugins(PhysicsPlugin::in_schedule(self.schedule));
        }

        app.init_resource::<LiftDragModels>()
            .init_resource::<SimulationClock>();

        match &self.diagnostics {
            Some(sink) => {
                app.insert_resource(DiagnosticsSink::new(sink.clone()));
            }
            None => {
                app.init_resource::<DiagnosticsSink>();
            }
        }

        app.configure_sets(
            self.schedule,
            (
                LiftDragSet::Clock,
                LiftDragSet::Attach,
                PhysicsSet::ClearForces,
                LiftDragSet::ApplyForces,
                PhysicsSet::ForceAccumulation,
                PhysicsSet::Integration,
                LiftDragSet::SampleVelocity,
            )
                .chain(),
        );

        app.add_systems(
            self.schedule,
            (
                advance_clock_system.in_set(LiftDragSet::Clock),
                (detach_lift_drag_system, attach_lift_drag_system)
                    .chain()
                    .in_set(LiftDragSet::Attach),
                apply_lift_drag_forces_system.in_set(LiftDragSet::ApplyForces),
                sample_lift_drag_velocity_system.in_set(LiftDragSet::SampleVelocity),
            ),
        );
    }
}
