use bevy::prelude::*;
use std::collections::BTreeMap;

use crate::physics::LiftDragSystem;

/// Every attached lift/drag model, keyed by its model entity.
#[derive(Resource, Debug, Default)]
pub struct LiftDragModels {
    models: BTreeMap<Entity, LiftDragSystem<Entity>>,
}

impl LiftDragModels {
    pub fn insert(&mut self, model: Entity, system: LiftDragSystem<Entity>) {
        self.models.insert(model, system);
    }

    pub fn remove(&mut self, model: Entity) -> Option<LiftDragSystem<Entity>> {
        self.models.remove(&model)
    }

    /// Keep the models for which `keep` holds, returning the entities dropped
    pub fn retain(&mut self, mut keep: impl FnMut(Entity) -> bool) -> Vec<Entity> {
        let mut dropped = Vec::new();
        self.models.retain(|entity, _| {
            let kept = keep(*entity);
            if !kept {
                dropped.push(*entity);
            }
            kept
        });
        dropped
    }

    pub fn get(&self, model: Entity) -> Option<&LiftDragSystem<Entity>> {
        self.models.get(&model)
    }

    pub fn contains(&self, model: Entity) -> bool {
        self.models.contains_key(&model)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &LiftDragSystem<Entity>)> {
        self.models.iter().map(|(e, m)| (*e, m))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut LiftDragSystem<Entity>)> {
        self.models.iter_mut().map(|(e, m)| (*e, m))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
