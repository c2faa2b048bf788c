use bevy::prelude::*;
use lift_drag::{
    components::{
        CanonicalLink, ForceAccumulator, LiftDragAttachment, Link, Model, SpatialComponent,
    },
    physics::LiftDragSystem,
    plugins::{LiftDragPlugin, PhysicsPlugin, PhysicsSet},
    resources::{LiftDragModels, SimulationClock},
    RecordingLog,
};
use nalgebra::Vector3;
use std::sync::Arc;

/// Moves links with unit mass under their net force
fn unit_mass_integrator(
    clock: Res<SimulationClock>,
    mut query: Query<(&ForceAccumulator, &mut SpatialComponent)>,
) {
    let info = clock.tick_info();
    if info.paused {
        return;
    }
    let dt = info.dt.as_secs_f64();
    for (accumulator, mut spatial) in query.iter_mut() {
        let velocity = spatial.velocity + accumulator.net_force * dt;
        spatial.velocity = velocity;
        spatial.position += velocity * dt;
    }
}

// Builder for creating a test application with customizable configuration
#[derive(Default)]
pub struct TestAppBuilder {
    integrate: bool,
    lift_drag_only: bool,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let the links move under the applied forces
    pub fn with_integrator(mut self) -> Self {
        self.integrate = true;
        self
    }

    /// Leave the physics plugin for `LiftDragPlugin` to add
    pub fn lift_drag_only(mut self) -> Self {
        self.lift_drag_only = true;
        self
    }

    pub fn build(self) -> TestApp {
        let log = Arc::new(RecordingLog::new());
        let mut app = App::new();

        if !self.lift_drag_only {
            app.add_plugins(PhysicsPlugin::default());
        }
        app.add_plugins(LiftDragPlugin::default().with_diagnostics(log.clone()));

        if self.integrate {
            app.add_systems(
                FixedUpdate,
                unit_mass_integrator.in_set(PhysicsSet::Integration),
            );
        }

        TestApp { app, log }
    }
}

/// A model entity and its canonical link
#[derive(Debug, Clone, Copy)]
pub struct Glider {
    pub model: Entity,
    pub link: Entity,
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub log: Arc<RecordingLog>,
}

impl TestApp {
    /// Run one frame of the main schedule, no fixed tick
    pub fn run_frame(&mut self) {
        self.app.update();
    }

    /// Run `steps` simulation ticks
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn spawn_glider(&mut self, attachment: LiftDragAttachment, velocity: Vector3<f64>) -> Glider {
        let glider = self.spawn_model("glider", velocity, true);
        self.app
            .world_mut()
            .entity_mut(glider.model)
            .insert(attachment);
        glider
    }

    /// Model whose only link is not flagged canonical
    pub fn spawn_glider_without_canonical_link(&mut self, attachment: LiftDragAttachment) -> Glider {
        let glider = self.spawn_model("broken", Vector3::new(10.0, 0.0, 0.0), false);
        self.app
            .world_mut()
            .entity_mut(glider.model)
            .insert(attachment);
        glider
    }

    fn spawn_model(&mut self, name: &str, velocity: Vector3<f64>, canonical: bool) -> Glider {
        let world = self.app.world_mut();
        let link = world
            .spawn((
                Link,
                Name::new(format!("{name}_link")),
                SpatialComponent::with_velocity(velocity),
                ForceAccumulator::default(),
            ))
            .id();
        if canonical {
            world.entity_mut(link).insert(CanonicalLink);
        }
        let model = world.spawn((Model, Name::new(name.to_string()))).id();
        world.entity_mut(model).add_child(link);
        Glider { model, link }
    }

    pub fn set_velocity(&mut self, link: Entity, velocity: Vector3<f64>) {
        if let Some(mut spatial) = self.app.world_mut().get_mut::<SpatialComponent>(link) {
            spatial.velocity = velocity;
        }
    }

    pub fn velocity(&self, link: Entity) -> Vector3<f64> {
        self.app
            .world()
            .get::<SpatialComponent>(link)
            .map(|s| s.velocity)
            .unwrap_or_else(Vector3::zeros)
    }

    pub fn model(&self, model: Entity) -> Option<&LiftDragSystem<Entity>> {
        self.app.world().resource::<LiftDragModels>().get(model)
    }

    pub fn models(&self) -> &LiftDragModels {
        self.app.world().resource::<LiftDragModels>()
    }

    pub fn accumulator(&self, link: Entity) -> Option<&ForceAccumulator> {
        self.app.world().get::<ForceAccumulator>(link)
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.app
            .world_mut()
            .resource_mut::<SimulationClock>()
            .set_paused(paused);
    }
}
