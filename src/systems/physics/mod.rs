mod force_calculator;

pub use force_calculator::{
    calculate_net_force_moment, clear_forces_system, force_accumulation_system,
};
