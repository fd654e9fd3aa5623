//! Assorted constants & default configuration
use ratatui::style::Color;
use std::num::NonZeroU32;

/// Default width of the playfield, in cells
pub(crate) const BOARD_WIDTH: u16 = 32;

/// Default height of the playfield, in cells
pub(crate) const BOARD_HEIGHT: u16 = 24;

/// Default number of terminal columns used to draw a single cell.  Terminal
/// characters are roughly twice as tall as they are wide, so two columns give
/// square-looking tiles.
pub(crate) const TILE_WIDTH: u16 = 2;

/// Default number of game ticks per second
pub(crate) const TICK_RATE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(rate) => rate,
    None => panic!("TICK_RATE should be nonzero"),
};

/// Default color of the empty playfield
pub(crate) const BACKGROUND_COLOR: Color = Color::Black;

/// Default color of the outline drawn around each tile
pub(crate) const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);

/// Default fill color of the food tile
pub(crate) const FOOD_COLOR: Color = Color::Rgb(255, 0, 0);

/// Default fill color of the snake's tiles
pub(crate) const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);

/// Number of uniformly random cells to try when placing food before falling
/// back to choosing among the free cells directly
pub(crate) const PLACEMENT_ATTEMPTS: usize = 32;

/// Environment variable holding the `tracing` filter directives
pub(crate) const LOG_FILTER_VAR: &str = "GRIDSNAKE_LOG";

/// Glyphs for the left & right edges of a tile at least two columns wide
pub(crate) const TILE_EDGE_SYMBOLS: (char, char) = ('[', ']');

/// Glyph for a tile that is only one column wide
pub(crate) const NARROW_TILE_SYMBOL: char = '▪';
