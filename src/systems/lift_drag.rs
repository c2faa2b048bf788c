use bevy::prelude::*;

use crate::components::LiftDragAttachment;
use crate::config::PluginConfig;
use crate::physics::LiftDragSystem;
use crate::resources::{DiagnosticsSink, LiftDragModels, SimulationClock};

/// Start the tick, taking the step size from the fixed clock when there is one.
pub fn advance_clock_system(mut clock: ResMut<SimulationClock>, time: Option<Res<Time<Fixed>>>) {
    let dt = time.map_or_else(|| clock.timestep(), |t| t.timestep());
    clock.begin_tick(dt);
}

/// Configure a model for every new [`LiftDragAttachment`].
pub fn attach_lift_drag_system(world: &mut World) {
    let mut query = world.query::<(Entity, &LiftDragAttachment)>();
    let models = world.resource::<LiftDragModels>();
    let pending: Vec<(Entity, PluginConfig)> = query
        .iter(world)
        .filter(|(entity, _)| !models.contains(*entity))
        .map(|(entity, attachment)| (entity, attachment.config.clone()))
        .collect();

    if pending.is_empty() {
        return;
    }

    let sink = world.resource::<DiagnosticsSink>().0.clone();
    for (entity, config) in pending {
        let system = LiftDragSystem::configure(entity, &config, world, &*sink);
        world
            .resource_mut::<LiftDragModels>()
            .insert(entity, system);
    }
}

/// Drop the model of every entity that lost its attachment or was despawned.
pub fn detach_lift_drag_system(
    attached: Query<(), With<LiftDragAttachment>>,
    mut models: ResMut<LiftDragModels>,
) {
    let detached = models.retain(|entity| attached.contains(entity));
    for entity in detached {
        debug!("Lift/drag model detached from {:?}", entity);
    }
}

/// Pre-step hook of every model.
pub fn apply_lift_drag_forces_system(world: &mut World) {
    let info = world.resource::<SimulationClock>().tick_info();
    world.resource_scope(|world, mut models: Mut<LiftDragModels>| {
        for (_, model) in models.iter_mut() {
            model.pre_update(&info, world);
        }
    });
}

/// Post-step hook of every model.
pub fn sample_lift_drag_velocity_system(world: &mut World) {
    let info = world.resource::<SimulationClock>().tick_info();
    let sink = world.resource::<DiagnosticsSink>().0.clone();
    world.resource_scope(|world, mut models: Mut<LiftDragModels>| {
        for (_, model) in models.iter_mut() {
            model.post_update(&info, &*world, &*sink);
        }
    });
}
