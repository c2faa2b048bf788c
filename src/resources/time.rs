use bevy::prelude::*;
use std::time::Duration;

use crate::host::TickInfo;
use crate::utils::DEFAULT_TIMESTEP;

/// Tick bookkeeping handed to the plugin hooks.
#[derive(Resource, Debug, Clone)]
pub struct SimulationClock {
    sim_time: Duration,
    iterations: u64,
    timestep: Duration,
    paused: bool,
    current: TickInfo,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(Duration::from_secs_f64(DEFAULT_TIMESTEP))
    }
}

impl SimulationClock {
    pub fn new(timestep: Duration) -> Self {
        Self {
            sim_time: Duration::ZERO,
            iterations: 0,
            timestep,
            paused: false,
            current: TickInfo::default(),
        }
    }

    /// Start a tick of length `dt`. A paused clock does not advance.
    pub fn begin_tick(&mut self, dt: Duration) {
        self.timestep = dt;
        self.current = TickInfo {
            sim_time: self.sim_time,
            dt,
            iterations: self.iterations,
            paused: self.paused,
        };
        if !self.paused {
            self.sim_time += dt;
            self.iterations += 1;
        }
    }

    /// Info for the tick in progress
    pub fn tick_info(&self) -> TickInfo {
        self.current
    }

    pub fn sim_time(&self) -> Duration {
        self.sim_time
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn timestep(&self) -> Duration {
        self.timestep
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advances() {
        let mut clock = SimulationClock::new(Duration::from_millis(10));
        clock.begin_tick(Duration::from_millis(10));
        clock.begin_tick(Duration::from_millis(10));

        let info = clock.tick_info();
        assert_eq!(info.iterations, 1);
        assert_eq!(info.sim_time, Duration::from_millis(10));
        assert!(!info.paused);
        assert_eq!(clock.iterations(), 2);
        assert_eq!(clock.sim_time(), Duration::from_millis(20));
    }

    #[test]
    fn test_paused_clock_holds() {
        let mut clock = SimulationClock::default();
        clock.set_paused(true);
        clock.begin_tick(Duration::from_millis(4));

        assert!(clock.tick_info().paused);
        assert_eq!(clock.iterations(), 0);
        assert_eq!(clock.sim_time(), Duration::ZERO);
    }
}
