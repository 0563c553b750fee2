//! Piece construction, rotation, and piece sources

use blockfall::core::{get_shape, rotations, FixedSequence, PieceSource, RandomPieces, Tetromino};
use blockfall::types::{PieceKind, Position, SPAWN_X, SPAWN_Y};

#[test]
fn test_new_piece_spawns_at_center_top() {
    for kind in PieceKind::ALL {
        let piece = Tetromino::new(kind);
        assert_eq!(piece.kind, kind);
        assert_eq!(piece.rotation, 0);
        assert_eq!(piece.position, Position::new(SPAWN_X, SPAWN_Y));
    }
    assert_eq!(SPAWN_X, 4);
}

#[test]
fn test_i_piece_blocks() {
    let blocks = Tetromino::new(PieceKind::I).blocks();
    assert_eq!(
        blocks.as_slice(),
        &[
            Position::new(4, 0),
            Position::new(5, 0),
            Position::new(6, 0),
            Position::new(7, 0),
        ]
    );
}

#[test]
fn test_t_piece_blocks_follow_mask() {
    let piece = Tetromino {
        position: Position::new(2, 5),
        ..Tetromino::new(PieceKind::T)
    };
    assert_eq!(
        piece.blocks().as_slice(),
        &[
            Position::new(3, 5),
            Position::new(2, 6),
            Position::new(3, 6),
            Position::new(4, 6),
        ]
    );
}

#[test]
fn test_every_rotation_has_four_blocks() {
    for kind in PieceKind::ALL {
        let mut piece = Tetromino::new(kind);
        for _ in 0..rotations(kind).len() {
            assert_eq!(piece.blocks().len(), 4, "{:?} rotation {}", kind, piece.rotation);
            piece = piece.rotated();
        }
    }
}

#[test]
fn test_rotation_cycles_back() {
    for kind in PieceKind::ALL {
        let start = Tetromino::new(kind);
        let mut piece = start;
        for _ in 0..rotations(kind).len() {
            piece = piece.rotated();
            assert_eq!(piece.position, start.position);
        }
        assert_eq!(piece, start);
    }
}

#[test]
fn test_o_piece_rotation_is_identity() {
    let o = Tetromino::new(PieceKind::O);
    assert_eq!(o.rotated(), o);
}

#[test]
fn test_get_shape_wraps_rotation_index() {
    assert_eq!(get_shape(PieceKind::T, 4), get_shape(PieceKind::T, 0));
    assert_eq!(get_shape(PieceKind::I, 3), get_shape(PieceKind::I, 1));
    assert_eq!(get_shape(PieceKind::I, 1).len(), 4);
}

#[test]
fn test_seeded_pieces_are_reproducible() {
    let mut a = RandomPieces::new(99);
    let mut b = RandomPieces::new(99);
    let seq_a: Vec<_> = (0..50).map(|_| a.next_kind()).collect();
    let seq_b: Vec<_> = (0..50).map(|_| b.next_kind()).collect();
    assert_eq!(seq_a, seq_b);
}

#[test]
fn test_random_pieces_cover_all_kinds() {
    let mut source = RandomPieces::new(7);
    let mut seen = [false; 7];
    for _ in 0..500 {
        let kind = source.next_kind();
        let i = PieceKind::ALL.iter().position(|k| *k == kind).unwrap();
        seen[i] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn test_fixed_sequence_cycles() {
    let mut source = FixedSequence::new(&[PieceKind::S, PieceKind::Z]);
    assert_eq!(source.peek(), PieceKind::S);
    let drawn: Vec<_> = (0..5).map(|_| source.next_kind()).collect();
    assert_eq!(
        drawn,
        vec![PieceKind::S, PieceKind::Z, PieceKind::S, PieceKind::Z, PieceKind::S]
    );
}

#[test]
fn test_closure_is_a_piece_source() {
    let mut calls = 0;
    let mut source = || {
        calls += 1;
        PieceKind::J
    };
    assert_eq!(source.next_kind(), PieceKind::J);
    assert_eq!(source.next_kind(), PieceKind::J);
    drop(source);
    assert_eq!(calls, 2);
}
