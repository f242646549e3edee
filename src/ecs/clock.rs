use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Simulation clock resource counting completed ticks.
///
/// The `advance_clock` system moves the clock forward at the end of each
/// tick (in `SimPhase::Last`), so systems see the current tick before it
/// advances.
#[derive(Resource, Debug, Default)]
pub struct SimClock {
    pub tick: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Bevy system that advances the simulation clock by one tick.
pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clock_starts_at_zero() {
        assert_eq!(SimClock::new().tick, 0);
    }

    #[test]
    fn advance_increments_tick() {
        let mut clock = SimClock::new();
        for _ in 0..30 {
            clock.advance();
        }
        assert_eq!(clock.tick, 30);
    }
}
