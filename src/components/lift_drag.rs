use bevy::prelude::*;

use crate::config::PluginConfig;
use crate::utils::{DRAG_COEFFICIENT_KEY, LIFT_COEFFICIENT_KEY};

/// Attaches a lift/drag model to the [`crate::components::Model`] entity
/// carrying it. Removing the component, or despawning the entity, detaches it.
#[derive(Component, Debug, Clone, Default)]
pub struct LiftDragAttachment {
    pub config: PluginConfig,
}

impl LiftDragAttachment {
    pub fn new(config: PluginConfig) -> Self {
        Self { config }
    }

    /// Attachment with both coefficients set
    pub fn with_coefficients(lift_coefficient: f64, drag_coefficient: f64) -> Self {
        Self::new(
            PluginConfig::new()
                .with(LIFT_COEFFICIENT_KEY, lift_coefficient)
                .with(DRAG_COEFFICIENT_KEY, drag_coefficient),
        )
    }
}
