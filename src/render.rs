//! Drawing: the tile-level rendering interface & its terminal implementation
use crate::consts;
use crate::geometry::{Board, Cell};
use crate::util::center_rect;
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Position, Rect, Size},
    style::{Color, Style},
    widgets::Widget,
    Terminal,
};
use std::io;

/// Something that whole-cell tiles can be drawn onto.
///
/// Each frame is drawn by calling [`fill()`][TileSink::fill] once, then
/// [`draw_tile()`][TileSink::draw_tile] for every occupied cell, then
/// [`present()`][TileSink::present].
pub(crate) trait TileSink {
    /// Paint the whole playfield with `color`, discarding any tiles drawn
    /// since the last `present()`
    fn fill(&mut self, color: Color);

    /// Draw a tile at `cell` with the given interior & outline colors
    fn draw_tile(&mut self, cell: Cell, fill: Color, border: Color);

    /// Show everything drawn since the last `fill()`
    fn present(&mut self) -> io::Result<()>;
}

/// An entity that knows how to draw itself onto a [`TileSink`]
pub(crate) trait Drawable {
    fn draw(&self, sink: &mut dyn TileSink);
}

/// The colors with which an entity's tiles are drawn
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Tint {
    pub(crate) fill: Color,
    pub(crate) border: Color,
}

impl Tint {
    pub(crate) fn draw_at(self, sink: &mut dyn TileSink, cell: Cell) {
        sink.draw_tile(cell, self.fill, self.border);
    }
}

/// A [`TileSink`] that draws to a terminal via ratatui
#[derive(Debug)]
pub(crate) struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
    scene: Scene,
}

impl<B: Backend> TerminalSink<B> {
    pub(crate) fn new(terminal: Terminal<B>, board: Board, tile_width: u16) -> Self {
        TerminalSink {
            terminal,
            scene: Scene::new(board, tile_width),
        }
    }
}

impl<B: Backend> TileSink for TerminalSink<B> {
    fn fill(&mut self, color: Color) {
        self.scene.background = color;
        self.scene.tiles.clear();
    }

    fn draw_tile(&mut self, cell: Cell, fill: Color, border: Color) {
        self.scene.tiles.push(Tile { cell, fill, border });
    }

    fn present(&mut self) -> io::Result<()> {
        let scene = &self.scene;
        self.terminal
            .draw(|frame| frame.render_widget(scene, frame.area()))?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Tile {
    cell: Cell,
    fill: Color,
    border: Color,
}

/// The contents of one frame: a background color plus the tiles drawn over
/// it, laid out in the center of the terminal inside a dotted border (as all
/// edges of the board wrap around)
#[derive(Clone, Debug, Eq, PartialEq)]
struct Scene {
    board: Board,
    tile_width: u16,
    background: Color,
    tiles: Vec<Tile>,
}

impl Scene {
    fn new(board: Board, tile_width: u16) -> Scene {
        Scene {
            board,
            tile_width,
            background: Color::Reset,
            tiles: Vec::new(),
        }
    }

    /// The size of the playfield plus its border, in terminal cells
    fn outer_size(&self) -> Size {
        Size {
            width: self
                .board
                .width()
                .saturating_mul(self.tile_width)
                .saturating_add(2),
            height: self.board.height().saturating_add(2),
        }
    }
}

impl Widget for &Scene {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block_area = center_rect(area, self.outer_size());
        DottedBorder.render(block_area, buf);
        let field = Rect {
            x: block_area.x.saturating_add(1),
            y: block_area.y.saturating_add(1),
            width: block_area.width.saturating_sub(2),
            height: block_area.height.saturating_sub(2),
        };
        buf.set_style(field, Style::new().bg(self.background));
        let mut canvas = Canvas { area: field, buf };
        for tile in &self.tiles {
            canvas.draw_tile(*tile, self.tile_width);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_char(&mut self, pos: Position, symbol: char, style: Option<Style>) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if !self.area.contains(Position::new(x, y)) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            if let Some(style) = style {
                cell.set_style(style);
            }
        }
    }

    fn draw_tile(&mut self, tile: Tile, tile_width: u16) {
        let style = Style::new().fg(tile.border).bg(tile.fill);
        let Some(left) = tile.cell.x.checked_mul(tile_width) else {
            return;
        };
        let y = tile.cell.y;
        if tile_width == 1 {
            self.draw_char(Position::new(left, y), consts::NARROW_TILE_SYMBOL, Some(style));
            return;
        }
        let (open, close) = consts::TILE_EDGE_SYMBOLS;
        for i in 0..tile_width {
            let symbol = if i == 0 {
                open
            } else if i + 1 == tile_width {
                close
            } else {
                ' '
            };
            self.draw_char(Position::new(left.saturating_add(i), y), symbol, Some(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let size = area.as_size();
        let max_x = size.width.saturating_sub(1);
        let max_y = size.height.saturating_sub(1);
        let mut canvas = Canvas { area, buf };
        canvas.draw_char(Position::ORIGIN, '·', None);
        canvas.draw_char(Position::new(max_x, 0), '·', None);
        canvas.draw_char(Position::new(max_x, max_y), '·', None);
        canvas.draw_char(Position::new(0, max_y), '·', None);
        for x in 1..max_x {
            canvas.draw_char(Position::new(x, 0), '⋯', None);
            canvas.draw_char(Position::new(x, max_y), '⋯', None);
        }
        for y in 1..max_y {
            canvas.draw_char(Position::new(0, y), '⋮', None);
            canvas.draw_char(Position::new(max_x, y), '⋮', None);
        }
    }
}
