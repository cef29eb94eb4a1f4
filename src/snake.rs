use std::collections::VecDeque;

use crate::geometry::{GridGeometry, Position};
use crate::input::{direction_change_is_valid, Direction};

/// Result of advancing the snake by one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The head advanced one cell.
    Moved,
    /// The head ran into the body and the snake restarted from the center.
    Reset,
}

/// Mutable snake state: body, heading and growth target.
#[derive(Debug, Clone)]
pub struct Snake {
    geometry: GridGeometry,
    body: VecDeque<Position>,
    length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    last_tail: Option<Position>,
}

impl Snake {
    /// Creates a one-cell snake at the board center heading right.
    #[must_use]
    pub fn new(geometry: GridGeometry) -> Self {
        let mut snake = Self {
            geometry,
            body: VecDeque::new(),
            length: 1,
            direction: Direction::Right,
            pending_direction: None,
            last_tail: None,
        };
        snake.reset();
        snake
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// The growth target starts at the segment count.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(
        geometry: GridGeometry,
        segments: Vec<Position>,
        direction: Direction,
    ) -> Self {
        assert!(
            !segments.is_empty(),
            "snake body must always contain at least one segment"
        );

        Self {
            geometry,
            length: segments.len(),
            body: VecDeque::from(segments),
            direction,
            pending_direction: None,
            last_tail: None,
        }
    }

    /// Restores the initial one-cell state in place.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_front(self.geometry.center());
        self.length = 1;
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.last_tail = None;
    }

    /// Records the direction to take on the next tick; the latest call wins.
    ///
    /// Reversals are accepted here and discarded by [`Snake::tick`].
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// Raises the growth target by one segment.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Applies the pending turn and advances one cell.
    pub fn tick(&mut self) -> TickOutcome {
        if let Some(next) = self.pending_direction.take() {
            if direction_change_is_valid(self.direction, next) {
                self.direction = next;
            }
        }

        let next_head = self.geometry.wrap_step(self.head(), self.direction);
        if self.body.iter().skip(1).any(|segment| *segment == next_head) {
            self.reset();
            return TickOutcome::Reset;
        }

        self.last_tail = self.body.back().copied();
        self.body.push_front(next_head);
        if self.body.len() > self.length {
            let _ = self.body.pop_back();
        }

        TickOutcome::Moved
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false: the body keeps at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Target length the body grows towards.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Cell vacated by the last move, kept for one tick so it can be erased.
    #[must_use]
    pub fn last_tail(&self) -> Option<Position> {
        self.last_tail
    }

    #[must_use]
    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
