use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::SpawnError;
use crate::food::Food;
use crate::geometry::GridGeometry;
use crate::input::GameInput;
use crate::snake::{Snake, TickOutcome};

/// What happened during one gameplay tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    pub ate_food: bool,
    /// Set when this tick raised the best length of the session.
    pub new_best: bool,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub best_length: usize,
    pub tick_count: u64,
    geometry: GridGeometry,
    rng: StdRng,
}

impl GameState {
    /// Creates a session seeded from system entropy.
    pub fn new(geometry: GridGeometry) -> Result<Self, SpawnError> {
        Self::with_rng(geometry, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    pub fn new_with_seed(geometry: GridGeometry, seed: u64) -> Result<Self, SpawnError> {
        Self::with_rng(geometry, StdRng::seed_from_u64(seed))
    }

    fn with_rng(geometry: GridGeometry, mut rng: StdRng) -> Result<Self, SpawnError> {
        let snake = Snake::new(geometry);
        let food = Food::spawn(&mut rng, &snake)?;

        Ok(Self {
            best_length: snake.length(),
            snake,
            food,
            tick_count: 0,
            geometry,
            rng,
        })
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Food is only checked when the snake actually moved, so a reset always
    /// wins over growth. Fails when eaten food cannot be replaced because the
    /// snake covers the whole board.
    pub fn tick(&mut self) -> Result<TickReport, SpawnError> {
        self.tick_count += 1;

        let outcome = self.snake.tick();
        let mut report = TickReport {
            outcome,
            ate_food: false,
            new_best: false,
        };

        if outcome == TickOutcome::Reset {
            info!(
                "self-collision at tick {}; snake reset to {:?}",
                self.tick_count,
                self.snake.head()
            );
            return Ok(report);
        }

        if self.snake.head() == self.food.position {
            report.ate_food = true;

            // Spawn before growing: a full board leaves the target length at
            // what the board holds. Growth does not change the avoided body.
            let food = Food::spawn(&mut self.rng, &self.snake)?;
            self.snake.grow();
            self.food = food;
            debug!(
                "food eaten, length now {}, respawned at {:?}",
                self.snake.length(),
                self.food.position
            );

            report.new_best = self.record_best(self.snake.length());
        }

        Ok(report)
    }

    fn record_best(&mut self, length: usize) -> bool {
        if length <= self.best_length {
            return false;
        }

        self.best_length = length;
        info!("new best length {}", self.best_length);
        true
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.snake.set_pending_direction(direction),
            GameInput::Quit => {}
        }
    }

    /// Length shown as the score.
    #[must_use]
    pub fn score(&self) -> usize {
        self.snake.length()
    }

    #[must_use]
    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }
}
