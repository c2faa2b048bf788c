mod diagnostics;
mod models;
mod time;

pub use diagnostics::DiagnosticsSink;
pub use models::LiftDragModels;
pub use time::SimulationClock;
