use std::collections::VecDeque;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Record of one completed movement step.
///
/// Produced by [`Snake::advance`] and consumed by [`Snake::grow`], so that
/// growing is only expressible with the record of the step being grown:
/// a snake cannot grow before it has moved.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MoveOutcome {
    /// Head position after the step.
    pub new_head: Position,
    /// Tail cell vacated by the step.
    pub vacated_tail: Position,
}

/// The player-controlled snake: a head cell plus a tail-first body.
///
/// `body` runs from the oldest tail segment (front) to the segment
/// immediately behind the head (back) and never contains the head itself.
/// The body length equals the number of food items eaten so far.
#[derive(Debug, Clone)]
pub struct Snake {
    head: Position,
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates a single-cell snake at `head` facing `direction`.
    #[must_use]
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            head,
            body: VecDeque::new(),
            direction,
        }
    }

    /// Creates a snake from an explicit head and tail-first body.
    #[must_use]
    pub fn from_parts(head: Position, body: Vec<Position>, direction: Direction) -> Self {
        Self {
            head,
            body: VecDeque::from(body),
            direction,
        }
    }

    /// Slides the snake one cell along its current direction.
    ///
    /// The old head cell becomes the segment right behind the new head and
    /// the oldest tail segment is vacated; pushing before popping keeps the
    /// queue non-empty, so a vacated tail always exists. For a body-less
    /// snake the vacated cell is the old head itself, which means a snake
    /// that eats on its very first step still grows correctly.
    pub fn advance(&mut self) -> MoveOutcome {
        self.body.push_back(self.head);
        let vacated_tail = self
            .body
            .pop_front()
            .expect("body holds at least the old head after the push");
        self.head = self.direction.step(self.head);

        MoveOutcome {
            new_head: self.head,
            vacated_tail,
        }
    }

    /// Restores the tail cell vacated by the step that produced `outcome`,
    /// lengthening the snake by one segment.
    pub fn grow(&mut self, outcome: MoveOutcome) {
        self.body.push_front(outcome.vacated_tail);
    }

    /// Returns true if `pos` is the head or any body segment.
    #[must_use]
    pub fn has_collided(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Returns true if the head overlaps any body segment.
    #[must_use]
    pub fn has_collided_with_self(&self) -> bool {
        self.body.contains(&self.head)
    }

    /// Sets the heading used by the next step.
    ///
    /// All four directions are accepted, including the direct reversal of
    /// the current heading; a 180° turn into a non-empty body is a legal
    /// input that self-collides on the next step.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.head
    }

    /// Returns the current heading.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from the tail toward the head.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Returns the number of body segments, excluding the head.
    #[must_use]
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Returns the total cell count, head included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Always false; the snake is never shorter than its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}
