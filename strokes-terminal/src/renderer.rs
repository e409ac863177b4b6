/// Terminal cell canvas that scales a logical pixel canvas onto the screen
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use strokes_core::{CanvasConfig, Color as Rgb, Point2, Surface};

/// Glyph used for lit cells
const LIT: char = '█';

/// Character grid standing in for the logical canvas
///
/// Each cell covers a `canvas / grid` block of logical pixels; a pixel write
/// lights the cell it falls into. Writes outside the canvas are dropped.
pub struct CellCanvas {
    columns: usize,
    rows: usize,
    canvas: CanvasConfig,
    cells: Vec<Option<Rgb>>,
}

impl CellCanvas {
    pub fn new(columns: usize, rows: usize, canvas: CanvasConfig) -> Self {
        Self {
            columns,
            rows,
            canvas,
            cells: vec![None; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Resize the grid, dropping its contents
    pub fn resize(&mut self, columns: usize, rows: usize) {
        self.columns = columns;
        self.rows = rows;
        self.cells = vec![None; columns * rows];
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<Rgb> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells[row * self.columns + column]
    }

    /// Logical canvas point at the centre of a terminal cell
    pub fn cell_to_canvas(&self, column: u16, row: u16) -> Point2 {
        let cx = (2 * column as u64 + 1) * self.canvas.width as u64 / (2 * self.columns.max(1) as u64);
        let cy = (2 * row as u64 + 1) * self.canvas.height as u64 / (2 * self.rows.max(1) as u64);
        Point2::new(cx as i32, cy as i32)
    }

    fn canvas_to_cell(&self, point: Point2) -> Option<usize> {
        if self.cells.is_empty() {
            return None;
        }
        let x = u64::try_from(point.x).ok()?;
        let y = u64::try_from(point.y).ok()?;
        if x >= self.canvas.width as u64 || y >= self.canvas.height as u64 {
            return None;
        }
        let column = (x * self.columns as u64 / self.canvas.width as u64) as usize;
        let row = (y * self.rows as u64 / self.canvas.height as u64) as usize;
        Some(row * self.columns + column)
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            for column in 0..self.columns {
                match self.cells[row * self.columns + column] {
                    Some(Rgb { r, g, b }) => {
                        writer.queue(SetForegroundColor(Color::Rgb { r, g, b }))?;
                        writer.queue(Print(LIT))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
            if row + 1 < self.rows {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Surface for CellCanvas {
    fn draw_pixel(&mut self, point: Point2, color: Rgb) {
        if let Some(idx) = self.canvas_to_cell(point) {
            self.cells[idx] = Some(color);
        }
    }
}
