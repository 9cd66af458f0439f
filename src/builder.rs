use crate::player::{Clock, Player, SystemClock};
use crate::traits::Algorithm;
use crate::utils::clamp_speed;

/// Builder over the player's tunables: speed factor and clock source.
pub struct PlayerBuilder<A: Algorithm, C: Clock = SystemClock> {
    algorithm: A,
    speed: u32,
    clock: C,
}

impl<A: Algorithm> PlayerBuilder<A, SystemClock> {
    pub fn new(algorithm: A) -> Self {
        Self {
            algorithm,
            speed: 50,
            clock: SystemClock,
        }
    }
}

impl<A: Algorithm, C: Clock> PlayerBuilder<A, C> {
    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = clamp_speed(speed);
        self
    }

    pub fn with_clock<D: Clock>(self, clock: D) -> PlayerBuilder<A, D> {
        PlayerBuilder {
            algorithm: self.algorithm,
            speed: self.speed,
            clock,
        }
    }

    pub fn build(self) -> Player<A, C> {
        let mut player = Player::with_clock(self.algorithm, self.clock);
        player.set_speed(self.speed);
        player
    }
}
