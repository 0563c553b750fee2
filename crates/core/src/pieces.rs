//! Pieces module - Tetromino shapes and rotation sequences
//!
//! Every kind owns a fixed, ordered list of rotation masks. A mask is a
//! tightly cropped grid of rows where `1` marks an occupied cell. Rotating a
//! piece selects the next mask in its list (wrapping) without changing the
//! piece position; there are no wall kicks.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Position, SPAWN_X, SPAWN_Y};

/// A rotation mask: rows of 0/1 cells, top row first
pub type ShapeMask = &'static [&'static [u8]];

/// Upper bound on occupied cells of any mask (4x4 grid)
pub const MAX_BLOCKS: usize = 16;

/// Occupied cells of a piece in absolute board coordinates
pub type Blocks = ArrayVec<Position, MAX_BLOCKS>;

const I_SHAPES: [ShapeMask; 2] = [&[&[1, 1, 1, 1]], &[&[1], &[1], &[1], &[1]]];

const O_SHAPES: [ShapeMask; 1] = [&[&[1, 1], &[1, 1]]];

const T_SHAPES: [ShapeMask; 4] = [
    &[&[0, 1, 0], &[1, 1, 1]],
    &[&[1, 0], &[1, 1], &[1, 0]],
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1], &[1, 1], &[0, 1]],
];

const S_SHAPES: [ShapeMask; 2] = [&[&[0, 1, 1], &[1, 1, 0]], &[&[1, 0], &[1, 1], &[0, 1]]];

const Z_SHAPES: [ShapeMask; 2] = [&[&[1, 1, 0], &[0, 1, 1]], &[&[0, 1], &[1, 1], &[1, 0]]];

const J_SHAPES: [ShapeMask; 4] = [
    &[&[1, 0, 0], &[1, 1, 1]],
    &[&[1, 1], &[1, 0], &[1, 0]],
    &[&[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1], &[0, 1], &[1, 1]],
];

const L_SHAPES: [ShapeMask; 4] = [
    &[&[0, 0, 1], &[1, 1, 1]],
    &[&[1, 0], &[1, 0], &[1, 1]],
    &[&[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1], &[0, 1], &[0, 1]],
];

/// Get the rotation sequence for a piece kind
pub fn rotations(kind: PieceKind) -> &'static [ShapeMask] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    }
}

/// Get the mask for a piece kind at a rotation index (wrapping)
pub fn get_shape(kind: PieceKind, rotation: usize) -> ShapeMask {
    let shapes = rotations(kind);
    shapes[rotation % shapes.len()]
}

/// Iterate the occupied (column, row) offsets of a mask
pub fn mask_cells(mask: ShapeMask) -> impl Iterator<Item = (i8, i8)> {
    mask.iter().enumerate().flat_map(|(row, cells)| {
        cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled != 0)
            .map(move |(col, _)| (col as i8, row as i8))
    })
}

/// Spawn position for new pieces
pub const SPAWN_POSITION: Position = Position::new(SPAWN_X, SPAWN_Y);

/// Active falling piece
///
/// The shape is not stored: it is looked up from `kind` and `rotation`, so a
/// piece can never carry a mask that belongs to another kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: usize,
    pub position: Position,
}

impl Tetromino {
    /// Create a new tetromino at the spawn position in its first rotation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            position: SPAWN_POSITION,
        }
    }

    /// The current rotation mask
    pub fn shape(&self) -> ShapeMask {
        get_shape(self.kind, self.rotation)
    }

    /// The same piece advanced to the next rotation, position unchanged
    pub fn rotated(&self) -> Self {
        let count = rotations(self.kind).len();
        Self {
            rotation: (self.rotation + 1) % count,
            ..*self
        }
    }

    /// The same piece moved by `offset`
    pub fn shifted(&self, offset: Position) -> Self {
        Self {
            position: self.position.offset(offset),
            ..*self
        }
    }

    /// Absolute board coordinates of every occupied cell
    pub fn blocks(&self) -> Blocks {
        mask_cells(self.shape())
            .map(|(dx, dy)| Position::new(self.position.x + dx, self.position.y + dy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mask_has_four_cells() {
        for kind in PieceKind::ALL {
            for &mask in rotations(kind) {
                assert_eq!(mask_cells(mask).count(), 4, "{:?} mask {:?}", kind, mask);
            }
        }
    }

    #[test]
    fn masks_have_uniform_row_width() {
        for kind in PieceKind::ALL {
            for &mask in rotations(kind) {
                let width = mask[0].len();
                assert!(mask.iter().all(|row| row.len() == width));
            }
        }
    }

    #[test]
    fn rotation_counts() {
        assert_eq!(rotations(PieceKind::I).len(), 2);
        assert_eq!(rotations(PieceKind::O).len(), 1);
        assert_eq!(rotations(PieceKind::T).len(), 4);
        assert_eq!(rotations(PieceKind::S).len(), 2);
        assert_eq!(rotations(PieceKind::Z).len(), 2);
        assert_eq!(rotations(PieceKind::J).len(), 4);
        assert_eq!(rotations(PieceKind::L).len(), 4);
    }

    #[test]
    fn get_shape_wraps_rotation_index() {
        assert_eq!(get_shape(PieceKind::I, 2), get_shape(PieceKind::I, 0));
        assert_eq!(get_shape(PieceKind::T, 5), get_shape(PieceKind::T, 1));
    }

    #[test]
    fn new_piece_spawns_centered() {
        let piece = Tetromino::new(PieceKind::T);
        assert_eq!(piece.kind, PieceKind::T);
        assert_eq!(piece.rotation, 0);
        assert_eq!(piece.position, Position::new(4, 0));
    }

    #[test]
    fn blocks_are_offset_by_position() {
        let piece = Tetromino::new(PieceKind::T);
        let blocks = piece.blocks();
        assert_eq!(
            blocks.as_slice(),
            &[
                Position::new(5, 0),
                Position::new(4, 1),
                Position::new(5, 1),
                Position::new(6, 1)
            ]
        );
    }

    #[test]
    fn rotated_keeps_position_and_wraps() {
        let piece = Tetromino::new(PieceKind::S).shifted(Position::new(1, 3));
        let once = piece.rotated();
        assert_eq!(once.rotation, 1);
        assert_eq!(once.position, piece.position);

        let twice = once.rotated();
        assert_eq!(twice.rotation, 0);
        assert_eq!(twice, piece);
    }

    #[test]
    fn o_piece_rotation_is_identity() {
        let piece = Tetromino::new(PieceKind::O);
        assert_eq!(piece.rotated(), piece);
    }
}
