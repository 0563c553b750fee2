//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for cache locality and cheap copies: every transition
//! returns a new board rather than editing the previous one.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Tetromino;
use crate::types::{Cell, PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

/// Result of [`Board::clear_lines`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    /// Board with full rows removed and empty rows prepended
    pub board: Board,
    /// Indices (in the input board) of the removed rows, top to bottom
    pub rows: ArrayVec<u8, { BOARD_HEIGHT as usize }>,
}

impl LineClear {
    pub fn lines_cleared(&self) -> u32 {
        self.rows.len() as u32
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// A single row, or None if out of bounds
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check whether `piece`, moved by `offset`, fits on the board.
    ///
    /// A block fails if its column is outside the board, its row is below the
    /// bottom, or its row is visible and the cell is filled. Blocks above the
    /// top row (`y < 0`) are only checked horizontally.
    pub fn is_valid_position(&self, piece: &Tetromino, offset: Position) -> bool {
        piece.shifted(offset).blocks().iter().all(|block| {
            if block.x < 0 || block.x >= BOARD_WIDTH as i8 || block.y >= BOARD_HEIGHT as i8 {
                return false;
            }
            block.y < 0 || !self.is_occupied(block.x, block.y)
        })
    }

    /// Bake a piece into a copy of the board.
    ///
    /// Blocks above the top row are dropped; the spawn check on the next
    /// piece is what detects a topped-out stack.
    pub fn place(&self, piece: &Tetromino) -> Board {
        let mut board = self.clone();
        for block in piece.blocks() {
            if block.y >= 0 {
                board.set(block.x, block.y, Some(piece.kind));
            }
        }
        board
    }

    /// Remove every full row and shift the rest down.
    ///
    /// Remaining rows keep their relative order and the board is topped up
    /// with empty rows, so the row count never changes.
    pub fn clear_lines(&self) -> LineClear {
        let width = BOARD_WIDTH as usize;
        let mut rows = ArrayVec::new();
        let mut board = Board::new();
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top, copying survivors to the write position
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                rows.push(read_y as u8);
            } else {
                write_y -= 1;
                let src = read_y * width;
                let dst = write_y * width;
                board.cells[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
            }
        }

        rows.reverse();
        LineClear { board, rows }
    }

    /// Create a board from text rows for tests and scenario setup.
    ///
    /// Rows are aligned to the bottom of the board; missing rows above are
    /// empty. `.` is empty, any piece letter fills the cell with that kind,
    /// and any other character fills it with `I`.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Board::new();
        let skip = rows.len().saturating_sub(BOARD_HEIGHT as usize);
        let top = BOARD_HEIGHT as usize - (rows.len() - skip);
        for (i, row) in rows.iter().skip(skip).enumerate() {
            for (x, ch) in row.chars().take(BOARD_WIDTH as usize).enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = PieceKind::from_str(&ch.to_string()).unwrap_or(PieceKind::I);
                board.set(x as i8, (top + i) as i8, Some(kind));
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
