use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A fixed-size grid of cells. Row 0 is the top row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Build a board from text rows, top row first. `X` and `O` are pieces,
    /// anything else is an empty cell.
    pub fn from_rows(rows: &[&str]) -> Self {
        let cols = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut board = Board::new(rows.len(), cols);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'X' | 'x' => Cell::X,
                    'O' | 'o' => Cell::O,
                    _ => Cell::Empty,
                };
                board.cells[row * cols + col] = cell;
            }
        }
        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the cell at a position, or `None` when it lies outside the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.contains(row, col) {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Get the cell at a position, failing with `OutOfRange` off the board
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        self.get(row, col).ok_or_else(|| self.out_of_range(row, col))
    }

    /// Overwrite a cell. Only bounds are checked; legality is the
    /// validator's job.
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), MoveError> {
        if !self.contains(row, col) {
            return Err(self.out_of_range(row, col));
        }
        self.cells[row * self.cols + col] = cell;
        Ok(())
    }

    /// An owned copy for display or inspection
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// One row of cells, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Clear every cell, keeping the dimensions
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// The board turned through 180 degrees
    pub fn rotated_180(&self) -> Board {
        let mut cells = self.cells.clone();
        cells.reverse();
        Board {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    fn out_of_range(&self, row: usize, col: usize) -> MoveError {
        MoveError::OutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }
}
