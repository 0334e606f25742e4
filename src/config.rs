use ratatui::style::Color;

use crate::input::Direction;
use crate::snake::Position;

/// Inclusive grid bounds for one game session.
///
/// The playable board is `[0, max_x] × [0, max_y]`, i.e.
/// `(max_x + 1) × (max_y + 1)` cells. Random food placement samples only
/// the half-open `[0, max_x) × [0, max_y)` sub-range (see `food`), so the
/// outermost row and column are playable but never receive spawned food.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridBounds {
    pub max_x: i32,
    pub max_y: i32,
}

impl GridBounds {
    /// Returns true when `pos` lies outside the playable board.
    #[must_use]
    pub fn is_out_of_bounds(self, pos: Position) -> bool {
        pos.x < 0 || pos.y < 0 || pos.x > self.max_x || pos.y > self.max_y
    }

    /// Returns the total number of playable cells.
    #[must_use]
    pub fn cell_count(self) -> usize {
        let columns = usize::try_from(self.max_x + 1).unwrap_or(0);
        let rows = usize::try_from(self.max_y + 1).unwrap_or(0);
        columns * rows
    }
}

/// Starting head cell for a new game.
pub const SNAKE_START: Position = Position { x: 1, y: 1 };

/// Starting heading for a new game.
pub const SNAKE_START_DIRECTION: Direction = Direction::Right;

/// Default largest playable x coordinate (40 columns).
pub const DEFAULT_MAX_X: i32 = 39;

/// Default largest playable y coordinate (20 rows).
pub const DEFAULT_MAX_Y: i32 = 19;

/// Simulation rate.
pub const TICKS_PER_SECOND: u64 = 10;

/// Fixed interval between simulation ticks in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 1000 / TICKS_PER_SECOND;

/// Keyboard poll timeout per loop iteration in milliseconds.
pub const INPUT_POLL_MS: u64 = 16;

/// Solid block glyph for snake cells.
pub const GLYPH_SNAKE: &str = "█";

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub border: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake with red food.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    border: Color::White,
    hud_score: Color::Green,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border: Color::Cyan,
    hud_score: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border: Color::Magenta,
    hud_score: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks a theme up by case-insensitive name.
#[must_use]
pub fn theme_named(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}
