//! Deterministic, tick-driven snake simulation with a ratatui front end.
//!
//! The simulation core is pure state: an external driver applies inputs
//! and calls [`game::Game::tick`] once per time step, then reads the
//! updated snake, food set and score back out for drawing. `snake`,
//! `game`, `food` and `config` make up that core; the remaining modules
//! are the thin terminal adapter doing exactly that once per frame.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
