use nalgebra::Vector3;

use crate::diagnostics::{Diagnostics, LogField};
use crate::host::{ConfigBundle, EntityStore, EntityStoreMut, TickInfo};
use crate::physics::forces::{compute_forces, AeroForces};
use crate::utils::{
    force_offset, ground_speed_squared, LiftDragError, DEFAULT_COEFFICIENT, DRAG_COEFFICIENT_KEY,
    LIFT_COEFFICIENT_KEY,
};

/// State of a model attached to a valid link.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveModel<E> {
    pub link: E,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    /// World velocity sampled at the end of the previous tick
    pub last_velocity: Vector3<f64>,
    pub ground_speed_squared: f64,
}

#[derive(Debug, Clone, PartialEq)]
enum ModelState<E> {
    /// Attachment failed; every hook is a no-op from then on
    Inert,
    Active(ActiveModel<E>),
}

/// Quadratic lift/drag model for the canonical link of one model.
///
/// The host drives it with three hooks: [`configure`](Self::configure) once,
/// then [`pre_update`](Self::pre_update) before and
/// [`post_update`](Self::post_update) after each physics step. Forces applied
/// in tick N use the velocity sampled at the end of tick N-1.
#[derive(Debug, Clone, PartialEq)]
pub struct LiftDragSystem<E> {
    state: ModelState<E>,
}

impl<E: Copy + std::fmt::Debug + Eq> LiftDragSystem<E> {
    /// A model that does nothing
    pub fn inert() -> Self {
        Self {
            state: ModelState::Inert,
        }
    }

    /// Attach to `model`: resolve its canonical link, enable velocity checks on
    /// it and read the coefficients from `config`.
    ///
    /// Never fails. An unusable attachment is logged and gives an inert model,
    /// a missing coefficient is logged and defaults to zero.
    pub fn configure<S, C>(model: E, config: &C, store: &mut S, log: &dyn Diagnostics) -> Self
    where
        S: EntityStoreMut<Entity = E> + ?Sized,
        C: ConfigBundle + ?Sized,
    {
        if !store.is_model(model) {
            let err = LiftDragError::InvalidAttachment(
                "plugin should be attached to a model entity, failed to initialize".to_string(),
            );
            log.error(&err.to_string(), &[LogField::new("entity", format!("{:?}", model))]);
            return Self::inert();
        }

        let Some(link) = store.canonical_link(model) else {
            let err = LiftDragError::InvalidAttachment(
                "model has no canonical link, failed to initialize".to_string(),
            );
            log.error(&err.to_string(), &[model_field(&*store, model)]);
            return Self::inert();
        };
        store.enable_velocity_checks(link);

        let lift_coefficient = read_coefficient(config, LIFT_COEFFICIENT_KEY, log);
        let drag_coefficient = read_coefficient(config, DRAG_COEFFICIENT_KEY, log);

        log.info(
            "Lift/drag model attached",
            &[
                model_field(&*store, model),
                link_field(&*store, link),
                LogField::new(LIFT_COEFFICIENT_KEY, lift_coefficient),
                LogField::new(DRAG_COEFFICIENT_KEY, drag_coefficient),
            ],
        );

        Self {
            state: ModelState::Active(ActiveModel {
                link,
                lift_coefficient,
                drag_coefficient,
                last_velocity: Vector3::zeros(),
                ground_speed_squared: 0.0,
            }),
        }
    }

    /// Apply drag then lift, computed from the last velocity sample, at the
    /// link origin.
    pub fn pre_update<S>(&mut self, info: &TickInfo, store: &mut S)
    where
        S: EntityStoreMut<Entity = E> + ?Sized,
    {
        if info.paused {
            return;
        }
        let ModelState::Active(active) = &self.state else {
            return;
        };

        let forces = compute_forces(
            &active.last_velocity,
            active.lift_coefficient,
            active.drag_coefficient,
        );
        store.add_world_force(active.link, forces.drag, force_offset());
        store.add_world_force(active.link, forces.lift, force_offset());
    }

    /// Sample the link's world velocity for the next tick's forces.
    ///
    /// When the host has no velocity for the link the error is logged and the
    /// previous sample is kept.
    pub fn post_update<S>(&mut self, info: &TickInfo, store: &S, log: &dyn Diagnostics)
    where
        S: EntityStore<Entity = E> + ?Sized,
    {
        if info.paused {
            return;
        }
        let ModelState::Active(active) = &mut self.state else {
            return;
        };

        let Some(velocity) = store.world_linear_velocity(active.link) else {
            let link = link_field(store, active.link);
            let err = LiftDragError::VelocityUnavailable(link.value.clone());
            log.error(
                &err.to_string(),
                &[link, LogField::new("iteration", info.iterations)],
            );
            return;
        };

        active.last_velocity = velocity;
        active.ground_speed_squared = ground_speed_squared(&velocity);
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ModelState::Active(_))
    }

    pub fn active(&self) -> Option<&ActiveModel<E>> {
        match &self.state {
            ModelState::Active(active) => Some(active),
            ModelState::Inert => None,
        }
    }

    pub fn link(&self) -> Option<E> {
        self.active().map(|a| a.link)
    }

    pub fn lift_coefficient(&self) -> f64 {
        self.active()
            .map_or(DEFAULT_COEFFICIENT, |a| a.lift_coefficient)
    }

    pub fn drag_coefficient(&self) -> f64 {
        self.active()
            .map_or(DEFAULT_COEFFICIENT, |a| a.drag_coefficient)
    }

    pub fn last_velocity(&self) -> Vector3<f64> {
        self.active()
            .map_or_else(Vector3::zeros, |a| a.last_velocity)
    }

    pub fn ground_speed_squared(&self) -> f64 {
        self.active().map_or(0.0, |a| a.ground_speed_squared)
    }

    pub fn ground_speed(&self) -> f64 {
        self.ground_speed_squared().sqrt()
    }

    /// Forces the next pre-update will apply
    pub fn forces(&self) -> AeroForces {
        self.active().map_or_else(AeroForces::zero, |a| {
            compute_forces(&a.last_velocity, a.lift_coefficient, a.drag_coefficient)
        })
    }
}

fn read_coefficient<C>(config: &C, key: &'static str, log: &dyn Diagnostics) -> f64
where
    C: ConfigBundle + ?Sized,
{
    if !config.has_element(key) {
        let err = LiftDragError::MissingCoefficient(key, DEFAULT_COEFFICIENT);
        log.warn(&err.to_string(), &[LogField::new("coefficient", key)]);
        return DEFAULT_COEFFICIENT;
    }
    match config.get_f64(key) {
        Ok(value) => value,
        Err(e) => {
            let err = LiftDragError::InvalidCoefficient {
                name: key,
                reason: e.to_string(),
                default: DEFAULT_COEFFICIENT,
            };
            log.error(&err.to_string(), &[LogField::new("coefficient", key)]);
            DEFAULT_COEFFICIENT
        }
    }
}

fn model_field<S: EntityStore + ?Sized>(store: &S, model: S::Entity) -> LogField {
    LogField::new("model", display_name(store, model))
}

fn link_field<S: EntityStore + ?Sized>(store: &S, link: S::Entity) -> LogField {
    LogField::new("link", display_name(store, link))
}

fn display_name<S: EntityStore + ?Sized>(store: &S, entity: S::Entity) -> String {
    store
        .name(entity)
        .unwrap_or_else(|| format!("{:?}", entity))
}
