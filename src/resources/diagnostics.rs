use bevy::prelude::*;
use std::sync::Arc;

use crate::diagnostics::{BevyLog, Diagnostics};

/// Sink the Bevy systems report model diagnostics to
#[derive(Resource, Clone)]
pub struct DiagnosticsSink(pub Arc<dyn Diagnostics + Send + Sync>);

impl Default for DiagnosticsSink {
    fn default() -> Self {
        Self(Arc::new(BevyLog))
    }
}

impl DiagnosticsSink {
    pub fn new(sink: Arc<dyn Diagnostics + Send + Sync>) -> Self {
        Self(sink)
    }
}
