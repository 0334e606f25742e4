use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridBounds, SNAKE_START, SNAKE_START_DIRECTION};
use crate::food;
use crate::input::GameInput;
use crate::snake::{MoveOutcome, Position, Snake};

/// Current high-level gameplay state.
///
/// `GameOver` is absorbing; `Paused` doubles as the pre-start state and is
/// only ever entered and left by the driver.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

/// What ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete mutable simulation state for one session.
///
/// One [`tick`](Game::tick) advances the whole simulation by exactly one
/// discrete time step; everything else is read access plus
/// [`apply_input`](Game::apply_input). Single-threaded and non-reentrant
/// by construction.
#[derive(Debug, Clone)]
pub struct Game {
    pub snake: Snake,
    pub food: HashSet<Position>,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    bounds: GridBounds,
    rng: StdRng,
}

impl Game {
    /// Creates a game with entropy-seeded food placement.
    ///
    /// Both bounds must be positive; this is a caller contract, not a
    /// validated error.
    #[must_use]
    pub fn new(bounds: GridBounds) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridBounds, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridBounds, rng: StdRng) -> Self {
        let mut game = Self {
            snake: Snake::new(SNAKE_START, SNAKE_START_DIRECTION),
            food: HashSet::new(),
            score: 0,
            status: GameStatus::Playing,
            death_reason: None,
            tick_count: 0,
            bounds,
            rng,
        };

        game.spawn_new_food();
        game
    }

    /// Advances the simulation by one tick.
    ///
    /// Moves the snake, ends the game on self-collision or on leaving the
    /// board, otherwise resolves food consumption and keeps the food set
    /// non-empty. A paused or ended game is left untouched.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.tick_count += 1;
        let outcome = self.snake.advance();

        if self.snake.has_collided_with_self() {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(DeathReason::SelfCollision);
            return;
        }

        if self.bounds.is_out_of_bounds(self.snake.head()) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(DeathReason::WallCollision);
            return;
        }

        self.handle_food(outcome);

        if self.food.is_empty() {
            self.spawn_new_food();
        }
    }

    /// Eats the first food item the snake now touches, if any.
    fn handle_food(&mut self, outcome: MoveOutcome) {
        let eaten = self
            .food
            .iter()
            .copied()
            .find(|pos| self.snake.has_collided(*pos));

        let Some(eaten) = eaten else {
            return;
        };

        self.food.remove(&eaten);
        self.score += 1;
        self.snake.grow(outcome);
    }

    /// Spawns one food item into a valid cell.
    ///
    /// Rejection-sampled with no iteration cap; terminates as long as the
    /// sampled sub-board has a free cell, which holds for any board the
    /// snake has not outgrown.
    pub fn spawn_new_food(&mut self) {
        let mut candidate = food::random_position(&mut self.rng, self.bounds);
        while !self.is_valid_position(candidate) {
            candidate = food::random_position(&mut self.rng, self.bounds);
        }

        self.food.insert(candidate);
    }

    /// Returns true when `pos` is outside the playable board.
    #[must_use]
    pub fn is_out_of_bounds(&self, pos: Position) -> bool {
        self.bounds.is_out_of_bounds(pos)
    }

    /// Returns true when `pos` is in bounds and occupied by neither food
    /// nor the snake.
    #[must_use]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        !self.is_out_of_bounds(pos) && !self.food.contains(&pos) && !self.snake.has_collided(pos)
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.snake.set_direction(direction);
                }
            }
            GameInput::Pause => {
                self.status = match self.status {
                    GameStatus::Playing => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Playing,
                    other => other,
                };
            }
            GameInput::Quit | GameInput::Confirm => {}
        }
    }

    /// Returns the grid bounds fixed at construction.
    #[must_use]
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Returns true once the game has reached its terminal state.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Returns true while the game sits on the start screen: paused
    /// before the first tick.
    #[must_use]
    pub fn is_start_screen(&self) -> bool {
        self.status == GameStatus::Paused && self.tick_count == 0 && self.score == 0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::config::GridBounds;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{DeathReason, Game, GameStatus};

    fn bounds(max: i32) -> GridBounds {
        GridBounds { max_x: max, max_y: max }
    }

    #[test]
    fn construction_seeds_exactly_one_valid_food_item() {
        let game = Game::new_with_seed(bounds(8), 1);

        assert_eq!(game.food.len(), 1);
        for pos in &game.food {
            assert!(!game.snake.has_collided(*pos));
            assert!(!game.is_out_of_bounds(*pos));
        }
    }

    #[test]
    fn eating_increments_score_and_grows_the_body() {
        let mut game = Game::new_with_seed(bounds(9), 4);
        game.snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);
        game.food = HashSet::from([Position { x: 6, y: 5 }]);

        game.tick();

        assert_eq!(game.score, 1);
        assert_eq!(game.snake.body_len(), 1);
        assert!(!game.food.contains(&Position { x: 6, y: 5 }));
        // The set was refilled immediately.
        assert_eq!(game.food.len(), 1);
    }

    #[test]
    fn body_length_tracks_score_through_consecutive_meals() {
        let mut game = Game::new_with_seed(bounds(20), 5);
        game.snake = Snake::new(Position { x: 1, y: 1 }, Direction::Right);

        for step in 1..=6 {
            let next = Position {
                x: game.snake.head().x + 1,
                y: 1,
            };
            game.food = HashSet::from([next]);
            game.tick();

            assert_eq!(game.status, GameStatus::Playing);
            assert_eq!(game.score, step);
            assert_eq!(game.snake.body_len() as u32, game.score);
        }
    }

    #[test]
    fn running_off_the_board_ends_the_game() {
        let mut game = Game::new_with_seed(bounds(3), 2);
        game.snake = Snake::new(Position { x: 3, y: 1 }, Direction::Right);
        game.food = HashSet::from([Position { x: 0, y: 0 }]);

        game.tick();

        assert_eq!(game.status, GameStatus::GameOver);
        assert_eq!(game.death_reason, Some(DeathReason::WallCollision));
        assert_eq!(game.snake.head(), Position { x: 4, y: 1 });
    }

    #[test]
    fn stepping_into_the_body_ends_the_game() {
        let mut game = Game::new_with_seed(bounds(7), 3);
        game.snake = Snake::from_parts(
            Position { x: 2, y: 2 },
            vec![
                Position { x: 1, y: 2 },
                Position { x: 1, y: 1 },
                Position { x: 2, y: 1 },
                Position { x: 3, y: 1 },
                Position { x: 3, y: 2 },
            ],
            Direction::Left,
        );
        game.food = HashSet::from([Position { x: 6, y: 6 }]);

        game.tick();

        assert_eq!(game.status, GameStatus::GameOver);
        assert_eq!(game.death_reason, Some(DeathReason::SelfCollision));
    }

    #[test]
    fn an_ending_tick_skips_food_handling() {
        let mut game = Game::new_with_seed(bounds(3), 6);
        game.snake = Snake::new(Position { x: 3, y: 2 }, Direction::Right);
        // Food on the doomed head's landing cell must not be eaten.
        game.food = HashSet::from([Position { x: 4, y: 2 }]);

        game.tick();

        assert_eq!(game.status, GameStatus::GameOver);
        assert_eq!(game.score, 0);
        assert!(game.food.contains(&Position { x: 4, y: 2 }));
    }

    #[test]
    fn ticking_an_ended_game_changes_nothing() {
        let mut game = Game::new_with_seed(bounds(3), 2);
        game.snake = Snake::new(Position { x: 3, y: 1 }, Direction::Right);
        game.tick();
        assert_eq!(game.status, GameStatus::GameOver);

        let head = game.snake.head();
        let food = game.food.clone();
        let score = game.score;
        let ticks = game.tick_count;

        game.tick();
        game.tick();

        assert_eq!(game.snake.head(), head);
        assert_eq!(game.food, food);
        assert_eq!(game.score, score);
        assert_eq!(game.tick_count, ticks);
    }

    #[test]
    fn pausing_freezes_the_simulation() {
        let mut game = Game::new_with_seed(bounds(10), 8);
        let head = game.snake.head();

        game.apply_input(GameInput::Pause);
        game.tick();
        assert_eq!(game.snake.head(), head);
        assert_eq!(game.tick_count, 0);

        game.apply_input(GameInput::Pause);
        game.tick();
        assert_ne!(game.snake.head(), head);
    }

    #[test]
    fn pause_does_not_resurrect_an_ended_game() {
        let mut game = Game::new_with_seed(bounds(3), 2);
        game.snake = Snake::new(Position { x: 3, y: 1 }, Direction::Right);
        game.tick();
        assert_eq!(game.status, GameStatus::GameOver);

        game.apply_input(GameInput::Pause);
        assert_eq!(game.status, GameStatus::GameOver);
    }

    #[test]
    fn reversal_into_the_body_is_allowed_and_fatal() {
        let mut game = Game::new_with_seed(bounds(10), 9);
        game.snake = Snake::new(Position { x: 4, y: 4 }, Direction::Right);

        // Eat twice; a reversal only self-collides once two segments
        // trail the head (a length-two snake reverses into the cell its
        // tail just vacated).
        for _ in 0..2 {
            let next = Position {
                x: game.snake.head().x + 1,
                y: 4,
            };
            game.food = HashSet::from([next]);
            game.tick();
        }
        assert_eq!(game.snake.body_len(), 2);

        game.apply_input(GameInput::Direction(Direction::Left));
        game.tick();

        assert_eq!(game.status, GameStatus::GameOver);
        assert_eq!(game.death_reason, Some(DeathReason::SelfCollision));
    }

    #[test]
    fn food_stays_nonempty_and_disjoint_while_playing() {
        let mut game = Game::new_with_seed(bounds(15), 11);

        while game.status == GameStatus::Playing {
            game.tick();

            if game.status != GameStatus::Playing {
                break;
            }

            assert!(!game.food.is_empty());
            for pos in &game.food {
                assert!(!game.snake.has_collided(*pos));
                assert!(!game.is_out_of_bounds(*pos));
            }
            assert_eq!(game.snake.body_len() as u32, game.score);
        }

        assert_eq!(game.status, GameStatus::GameOver);
    }

    #[test]
    fn spawned_food_avoids_snake_food_and_the_unsampled_edge() {
        let mut game = Game::new_with_seed(bounds(5), 13);
        for _ in 0..10 {
            game.spawn_new_food();
        }

        assert_eq!(game.food.len(), 11);
        for pos in &game.food {
            assert!(!game.snake.has_collided(*pos));
            assert!(pos.x < 5 && pos.y < 5);
        }
    }

    #[test]
    fn same_seed_replays_identically() {
        let run = |seed: u64| {
            let mut game = Game::new_with_seed(bounds(12), seed);
            for _ in 0..8 {
                game.tick();
            }
            (game.snake.head(), game.food.clone(), game.score)
        };

        assert_eq!(run(21), run(21));
    }
}
