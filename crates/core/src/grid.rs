//! Character grid produced by the compositor.

use crate::types::GridSize;

/// Which compositing pass last painted a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layer {
    #[default]
    Empty,
    /// Stars, clouds, birds.
    Sky,
    /// The terrain silhouette row.
    Surface,
    /// Sparse texture inside the hills.
    Fill,
    /// Trees, flowers, grass clumps, rocks.
    Decor,
    /// Butterflies.
    Critter,
    /// Scrolling grass along the bottom row.
    Ground,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub glyph: char,
    pub layer: Layer,
}

impl GridCell {
    pub const BLANK: GridCell = GridCell {
        glyph: ' ',
        layer: Layer::Empty,
    };

    pub fn is_blank(&self) -> bool {
        self.layer == Layer::Empty
    }
}

impl Default for GridCell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// `rows x cols` buffer of glyphs. Writes outside the grid are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<GridCell>,
}

impl Grid {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![GridCell::BLANK; size.cell_count()],
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn cols(&self) -> u16 {
        self.size.cols
    }

    pub fn rows(&self) -> u16 {
        self.size.rows
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(GridCell::BLANK);
    }

    #[inline(always)]
    fn idx(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.size.rows as i32 || col >= self.size.cols as i32 {
            return None;
        }
        Some((row as usize) * (self.size.cols as usize) + (col as usize))
    }

    pub fn get(&self, row: i32, col: i32) -> Option<GridCell> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    pub fn glyph(&self, row: i32, col: i32) -> Option<char> {
        self.get(row, col).map(|c| c.glyph)
    }

    pub fn set(&mut self, row: i32, col: i32, glyph: char, layer: Layer) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = GridCell { glyph, layer };
        }
    }

    /// Set a cell only if `allow` accepts what is there now.
    pub fn set_if(
        &mut self,
        row: i32,
        col: i32,
        glyph: char,
        layer: Layer,
        allow: impl Fn(GridCell) -> bool,
    ) {
        if let Some(i) = self.idx(row, col) {
            if allow(self.cells[i]) {
                self.cells[i] = GridCell { glyph, layer };
            }
        }
    }

    /// Paint one row of a shape; spaces are transparent.
    pub fn stamp(&mut self, row: i32, col: i32, text: &str, layer: Layer) {
        for (dx, ch) in text.chars().enumerate() {
            if ch != ' ' {
                self.set(row, col + dx as i32, ch, layer);
            }
        }
    }

    /// Paint a multi-row shape with its top-left corner at `(row, col)`.
    pub fn stamp_shape(&mut self, row: i32, col: i32, shape: &[&str], layer: Layer) {
        for (dy, line) in shape.iter().enumerate() {
            self.stamp(row + dy as i32, col, line, layer);
        }
    }

    /// Row as a string.
    pub fn row_text(&self, row: u16) -> String {
        let cols = self.size.cols as usize;
        let start = row as usize * cols;
        self.cells
            .get(start..start + cols)
            .map(|r| r.iter().map(|c| c.glyph).collect())
            .unwrap_or_default()
    }

    /// Rows joined with `\n`, no trailing newline.
    pub fn to_text(&self) -> String {
        let cols = self.size.cols as usize;
        let mut out = String::with_capacity(self.cells.len() + self.size.rows as usize);
        for (i, row) in self.cells.chunks(cols.max(1)).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|c| c.glyph));
        }
        out
    }
}
