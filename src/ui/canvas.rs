//! Cell buffer drawing surface.
//!
//! Entities live in world pixels; the canvas projects them onto a grid of
//! terminal cells so the field scales with the terminal. Draw calls outside
//! the grid are clipped, and any non-empty shape covers at least one cell so
//! thin objects (the player line, a far-away obstacle edge) never vanish.

use crate::runner::types::Rect as WorldRect;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Cell in the render buffer with foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// A `cols` x `rows` grid showing a `world_width` x `world_height` field.
#[derive(Debug, Clone)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    world_width: i32,
    world_height: i32,
    cells: Vec<Vec<Cell>>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16, world_width: i32, world_height: i32) -> Self {
        Self {
            cols,
            rows,
            world_width: world_width.max(1),
            world_height: world_height.max(1),
            cells: vec![vec![Cell::default(); cols as usize]; rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        self.cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }

    /// Column containing world x.
    pub fn col_of(&self, x: i32) -> i64 {
        floor_scale(x, self.cols, self.world_width)
    }

    /// Row containing world y.
    pub fn row_of(&self, y: i32) -> i64 {
        floor_scale(y, self.rows, self.world_height)
    }

    /// Fill a world-space rectangle.
    pub fn fill_rect(&mut self, rect: &WorldRect, ch: char, fg: Color) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        let first_col = self.col_of(rect.x);
        let last_col = (ceil_scale(rect.right(), self.cols, self.world_width) - 1).max(first_col);
        let first_row = self.row_of(rect.y);
        let last_row =
            (ceil_scale(rect.bottom(), self.rows, self.world_height) - 1).max(first_row);

        for row in first_row.max(0)..=last_row.min(self.rows as i64 - 1) {
            for col in first_col.max(0)..=last_col.min(self.cols as i64 - 1) {
                self.cells[row as usize][col as usize] = Cell {
                    ch,
                    fg,
                    bg: Color::Reset,
                };
            }
        }
    }

    /// Vertical line at world x spanning [y0, y1).
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, ch: char, fg: Color) {
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        self.fill_rect(&WorldRect::new(x, top, 1, (bottom - top).max(1)), ch, fg);
    }

    /// Horizontal line at world y spanning [x0, x1).
    pub fn hline(&mut self, y: i32, x0: i32, x1: i32, ch: char, fg: Color) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        self.fill_rect(&WorldRect::new(left, y, (right - left).max(1), 1), ch, fg);
    }

    /// Write text at a cell position. Characters past the right edge are
    /// dropped.
    pub fn text(&mut self, col: u16, row: u16, text: &str, fg: Color) {
        let Some(cells) = self.cells.get_mut(row as usize) else {
            return;
        };
        for (i, ch) in text.chars().enumerate() {
            let c = col as usize + i;
            if c >= cells.len() {
                break;
            }
            cells[c] = Cell {
                ch,
                fg,
                bg: Color::Reset,
            };
        }
    }

    /// Convert the buffer into styled lines, merging runs of equal color.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        self.cells
            .iter()
            .map(|row_data| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut current_fg = Color::Reset;
                let mut current_bg = Color::Reset;
                let mut current_text = String::new();

                for &cell in row_data {
                    if (cell.fg != current_fg || cell.bg != current_bg)
                        && !current_text.is_empty()
                    {
                        spans.push(Span::styled(
                            std::mem::take(&mut current_text),
                            Style::default().fg(current_fg).bg(current_bg),
                        ));
                    }
                    current_fg = cell.fg;
                    current_bg = cell.bg;
                    current_text.push(cell.ch);
                }
                if !current_text.is_empty() {
                    spans.push(Span::styled(
                        current_text,
                        Style::default().fg(current_fg).bg(current_bg),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    }
}

fn floor_scale(value: i32, cells: u16, world: i32) -> i64 {
    (value as i64 * cells as i64).div_euclid(world as i64)
}

fn ceil_scale(value: i32, cells: u16, world: i32) -> i64 {
    -((-(value as i64) * cells as i64).div_euclid(world as i64))
}
