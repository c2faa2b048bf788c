use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{CanonicalLink, ForceAccumulator, Model, SpatialComponent, VelocityChecks};
use crate::host::{EntityStore, EntityStoreMut};

impl EntityStore for World {
    type Entity = Entity;

    fn is_model(&self, entity: Entity) -> bool {
        self.get::<Model>(entity).is_some()
    }

    fn canonical_link(&self, model: Entity) -> Option<Entity> {
        let children = self.get::<Children>(model)?;
        children
            .iter()
            .find(|&&child| self.get::<CanonicalLink>(child).is_some())
            .copied()
    }

    fn world_linear_velocity(&self, link: Entity) -> Option<Vector3<f64>> {
        self.get::<VelocityChecks>(link)?;
        self.get::<SpatialComponent>(link)
            .map(|spatial| spatial.velocity)
    }

    fn name(&self, entity: Entity) -> Option<String> {
        self.get::<Name>(entity)
            .map(|name| name.as_str().to_string())
    }
}

impl EntityStoreMut for World {
    fn enable_velocity_checks(&mut self, link: Entity) {
        if self.entities().contains(link) {
            self.entity_mut(link).insert(VelocityChecks);
        }
    }

    fn add_world_force(&mut self, link: Entity, force: Vector3<f64>, offset: Vector3<f64>) {
        if let Some(mut accumulator) = self.get_mut::<ForceAccumulator>(link) {
            accumulator.add_force(force, offset);
            return;
        }
        if self.entities().contains(link) {
            let mut accumulator = ForceAccumulator::default();
            accumulator.add_force(force, offset);
            self.entity_mut(link).insert(accumulator);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Link;
    use approx::assert_relative_eq;

    fn spawn_model(world: &mut World, canonical: bool) -> (Entity, Entity) {
        let link = world
            .spawn((Link, Name::new("base_link"), SpatialComponent::default()))
            .id();
        if canonical {
            world.entity_mut(link).insert(CanonicalLink);
        }
        let model = world.spawn((Model, Name::new("glider"))).id();
        world.entity_mut(model).add_child(link);
        (model, link)
    }

    #[test]
    fn test_model_and_canonical_link() {
        let mut world = World::new();
        let (model, link) = spawn_model(&mut world, true);

        assert!(world.is_model(model));
        assert!(!world.is_model(link));
        assert_eq!(world.canonical_link(model), Some(link));
        assert_eq!(world.name(link).as_deref(), Some("base_link"));
    }

    #[test]
    fn test_no_canonical_child() {
        let mut world = World::new();
        let (model, _) = spawn_model(&mut world, false);
        assert_eq!(world.canonical_link(model), None);
    }

    #[test]
    fn test_velocity_requires_checks() {
        let mut world = World::new();
        let (_, link) = spawn_model(&mut world, true);
        world.get_mut::<SpatialComponent>(link).unwrap().velocity = Vector3::new(1.0, 2.0, 3.0);

        assert_eq!(world.world_linear_velocity(link), None);

        world.enable_velocity_checks(link);
        assert_eq!(
            world.world_linear_velocity(link),
            Some(Vector3::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn test_add_world_force_inserts_accumulator() {
        let mut world = World::new();
        let (_, link) = spawn_model(&mut world, true);

        world.add_world_force(link, Vector3::new(1.0, 0.0, 0.0), Vector3::zeros());
        world.add_world_force(link, Vector3::new(0.0, 0.0, 2.0), Vector3::zeros());

        let accumulator = world.get::<ForceAccumulator>(link).unwrap();
        assert_eq!(accumulator.forces.len(), 2);
        assert_relative_eq!(accumulator.forces[1].vector, Vector3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_despawned_link_is_ignored() {
        let mut world = World::new();
        let (_, link) = spawn_model(&mut world, true);
        world.despawn(link);

        world.enable_velocity_checks(link);
        world.add_world_force(link, Vector3::new(1.0, 0.0, 0.0), Vector3::zeros());
        assert_eq!(world.world_linear_velocity(link), None);
        assert_eq!(world.name(link), None);
    }
}
