use nalgebra::Vector3;
use std::fmt::Debug;
use std::time::Duration;

use crate::utils::ConfigError;

/// Read access to the simulator's entities.
///
/// The model never owns an entity, it only keeps the host's identifier and
/// asks the store about it when needed.
pub trait EntityStore {
    type Entity: Copy + Debug + Eq;

    /// Whether `entity` is a model the plugin can attach to
    fn is_model(&self, entity: Self::Entity) -> bool;

    /// First child link of `model` flagged as canonical
    fn canonical_link(&self, model: Self::Entity) -> Option<Self::Entity>;

    /// World-frame linear velocity of `link`. `None` until velocity checks are
    /// enabled for it, or once it is gone.
    fn world_linear_velocity(&self, link: Self::Entity) -> Option<Vector3<f64>>;

    fn name(&self, entity: Self::Entity) -> Option<String>;
}

/// Write access to the simulator's entities.
pub trait EntityStoreMut: EntityStore {
    /// Ask the host to start reporting the world velocity of `link`
    fn enable_velocity_checks(&mut self, link: Self::Entity);

    /// Apply a world-frame `force` at `offset` (link frame) for the coming step
    fn add_world_force(&mut self, link: Self::Entity, force: Vector3<f64>, offset: Vector3<f64>);
}

/// Element lookup on the per-instance configuration.
pub trait ConfigBundle {
    fn has_element(&self, key: &str) -> bool;
    fn get_f64(&self, key: &str) -> Result<f64, ConfigError>;
}

/// Timing of the tick a hook is called for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInfo {
    /// Simulation time at the start of the tick
    pub sim_time: Duration,
    /// Step size of the tick
    pub dt: Duration,
    /// Ticks run so far
    pub iterations: u64,
    /// Set while the simulation is paused; both model hooks skip such ticks
    pub paused: bool,
}
