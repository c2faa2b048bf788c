mod traits;
mod world;

pub use traits::{ConfigBundle, EntityStore, EntityStoreMut, TickInfo};
