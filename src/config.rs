use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use ratatui::style::Color;
use ratatui::symbols::border;

/// Board width in pixel-aligned units.
pub const SCREEN_WIDTH: i32 = 640;

/// Board height in pixel-aligned units.
pub const SCREEN_HEIGHT: i32 = 480;

/// Edge length of one grid cell.
pub const GRID_SIZE: i32 = 20;

/// Ticks per second for the plain style.
pub const CLASSIC_TICKS_PER_SECOND: u32 = 20;

/// Ticks per second for the embellished style.
pub const DETAILED_TICKS_PER_SECOND: u32 = 10;

/// Base terminal title.
pub const TITLE: &str = "Snake";

/// Visual preset; also fixes the tick rate.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, ValueEnum)]
pub enum Style {
    /// Plain cells at 20 ticks per second.
    #[default]
    Classic,
    /// Eyes on the head, grid pattern and a score line at 10 ticks per second.
    Detailed,
}

impl Style {
    #[must_use]
    pub fn ticks_per_second(self) -> u32 {
        match self {
            Self::Classic => CLASSIC_TICKS_PER_SECOND,
            Self::Detailed => DETAILED_TICKS_PER_SECOND,
        }
    }

    /// Returns the fixed interval between two simulation ticks.
    #[must_use]
    pub fn tick_interval(self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second()
    }

    #[must_use]
    pub fn is_detailed(self) -> bool {
        self == Self::Detailed
    }
}

/// Runtime options resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub style: Style,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

/// Colors applied to all visual elements.
///
/// In half-block rendering mode every entity is a solid colored block.
#[derive(Debug)]
pub struct Theme {
    /// Empty board cells.
    pub background: Color,
    /// Alternate background used for the grid pattern in the detailed style.
    pub grid_line: Color,
    pub snake_body: Color,
    /// Head color in the detailed style; the classic style paints the head
    /// with `snake_body`.
    pub snake_eyes: Color,
    pub food: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_text: Color,
}

/// Classic arcade palette: green snake, red food on black.
pub const THEME: Theme = Theme {
    background: Color::Rgb(0, 0, 0),
    grid_line: Color::Rgb(24, 24, 24),
    snake_body: Color::Rgb(0, 255, 0),
    snake_eyes: Color::Rgb(255, 255, 255),
    food: Color::Rgb(255, 0, 0),
    border_fg: Color::Rgb(93, 216, 228),
    border_bg: Color::Rgb(0, 0, 0),
    hud_text: Color::Rgb(93, 216, 228),
};

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left and right columns: `█`
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Upper half-block glyph for compositing two grid rows into one terminal row.
pub const GLYPH_HALF_UPPER: &str = "▀";
