mod assertions;
mod test_app;

// Re-export
pub use assertions::{assert_forces_eq, assert_vector_eq};
pub use test_app::{Glider, TestApp, TestAppBuilder};
