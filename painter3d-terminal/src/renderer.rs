/// Cell-grid canvas for terminal rendering
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use painter3d_core::{Canvas, Color, ScreenPoint, Viewport};

/// Glyph used for outline segments
const LINE_GLYPH: char = '*';

/// One character cell of the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub foreground: Color,
    pub background: Color,
}

impl Cell {
    const BLANK: Cell = Cell {
        glyph: ' ',
        foreground: Color::BLACK,
        background: Color::BLACK,
    };
}

/// Canvas that maps a virtual viewport onto a grid of terminal cells.
///
/// Every cell stands for the viewport pixel at its centre, so drawing
/// commands keep using viewport coordinates whatever the terminal size.
pub struct AsciiCanvas {
    columns: usize,
    rows: usize,
    viewport: Viewport,
    cells: Vec<Cell>,
}

impl AsciiCanvas {
    pub fn new(columns: usize, rows: usize, viewport: Viewport) -> Self {
        Self {
            columns,
            rows,
            viewport,
            cells: vec![Cell::BLANK; columns * rows],
        }
    }

    pub fn resize(&mut self, columns: usize, rows: usize) {
        self.columns = columns;
        self.rows = rows;
        self.cells = vec![Cell::BLANK; columns * rows];
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    pub fn size(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<&Cell> {
        if column < self.columns && row < self.rows {
            self.cells.get(row * self.columns + column)
        } else {
            None
        }
    }

    /// Viewport pixels covered by one cell horizontally and vertically
    pub fn cell_scale(&self) -> (f32, f32) {
        (
            self.viewport.width as f32 / self.columns.max(1) as f32,
            self.viewport.height as f32 / self.rows.max(1) as f32,
        )
    }

    fn to_cell_space(&self, point: ScreenPoint) -> (f32, f32) {
        let (sx, sy) = self.cell_scale();
        (point.0 as f32 / sx, point.1 as f32 / sy)
    }

    fn cell_mut(&mut self, column: i32, row: i32) -> Option<&mut Cell> {
        if column < 0 || row < 0 || column as usize >= self.columns || row as usize >= self.rows {
            return None;
        }
        self.cells.get_mut(row as usize * self.columns + column as usize)
    }

    fn fill_triangle(&mut self, v0: (f32, f32), v1: (f32, f32), v2: (f32, f32), color: Color) {
        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.columns as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.rows as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                if let Some((w0, w1, w2)) = barycentric(v0, v1, v2, p) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        if let Some(cell) = self.cell_mut(x, y) {
                            cell.glyph = ' ';
                            cell.background = color;
                        }
                    }
                }
            }
        }
    }

    fn draw_segment(&mut self, from: (f32, f32), to: (f32, f32), color: Color) {
        let (mut x0, mut y0) = (from.0.floor() as i32, from.1.floor() as i32);
        let (x1, y1) = (to.0.floor() as i32, to.1.floor() as i32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let step_x = if x0 < x1 { 1 } else { -1 };
        let step_y = if y0 < y1 { 1 } else { -1 };
        let mut error = dx + dy;

        loop {
            if let Some(cell) = self.cell_mut(x0, y0) {
                cell.glyph = LINE_GLYPH;
                cell.foreground = color;
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x0 += step_x;
            }
            if doubled <= dx {
                error += dx;
                y0 += step_y;
            }
        }
    }

    /// Write the grid to `writer`, emitting color changes only where they occur.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current: Option<(Color, Color)> = None;

        for row in 0..self.rows {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            for cell in &self.cells[row * self.columns..(row + 1) * self.columns] {
                let colors = (cell.foreground, cell.background);
                if current != Some(colors) {
                    writer.queue(SetForegroundColor(rgb(cell.foreground)))?;
                    writer.queue(SetBackgroundColor(rgb(cell.background)))?;
                    current = Some(colors);
                }
                writer.queue(Print(cell.glyph))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Canvas for AsciiCanvas {
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Color) {
        if points.len() < 3 {
            return;
        }
        let corners: Vec<(f32, f32)> = points.iter().map(|&p| self.to_cell_space(p)).collect();
        for i in 1..corners.len() - 1 {
            self.fill_triangle(corners[0], corners[i], corners[i + 1], color);
        }
    }

    fn outline_polygon(&mut self, points: &[ScreenPoint], color: Color) {
        let corners: Vec<(f32, f32)> = points.iter().map(|&p| self.to_cell_space(p)).collect();
        match corners.len() {
            0 => {}
            1 => self.draw_segment(corners[0], corners[0], color),
            2 => self.draw_segment(corners[0], corners[1], color),
            n => {
                for i in 0..n {
                    self.draw_segment(corners[i], corners[(i + 1) % n], color);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, position: ScreenPoint, color: Color) {
        let (x, y) = self.to_cell_space(position);
        let (column, row) = (x.floor() as i32, y.floor() as i32);
        for (offset, glyph) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(column + offset as i32, row) {
                cell.glyph = glyph;
                cell.foreground = color;
            }
        }
    }
}

fn rgb(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
