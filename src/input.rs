use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit vector in screen coordinates (y grows downwards).
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Translates terminal key events into game inputs.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps one key event; unrelated keys yield `None`.
    #[must_use]
    pub fn map_key(&self, key: KeyEvent) -> Option<GameInput> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(GameInput::Quit);
        }

        let direction = match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W') => Direction::Up,
            KeyCode::Down | KeyCode::Char('s' | 'S') => Direction::Down,
            KeyCode::Left | KeyCode::Char('a' | 'A') => Direction::Left,
            KeyCode::Right | KeyCode::Char('d' | 'D') => Direction::Right,
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => return Some(GameInput::Quit),
            _ => return None,
        };

        Some(GameInput::Direction(direction))
    }

    /// Reads every event already queued without blocking.
    pub fn drain_inputs(&mut self) -> io::Result<Vec<GameInput>> {
        let mut inputs = Vec::new();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = self.map_key(key) {
                    inputs.push(input);
                }
            }
        }

        Ok(inputs)
    }

    /// Blocks until an event arrives or `timeout` elapses.
    pub fn wait(&self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }
}
