//! Game state transitions driven through the public API

use blockfall::core::{Board, FixedSequence, GameState, Tetromino};
use blockfall::types::{Direction, PieceKind, Position, BOARD_HEIGHT};

fn start(kinds: &[PieceKind]) -> (GameState, FixedSequence) {
    let mut source = FixedSequence::new(kinds);
    let state = GameState::new(&mut source);
    (state, source)
}

#[test]
fn test_new_game_layout() {
    let (state, _) = start(&[PieceKind::Z, PieceKind::Z]);

    assert_eq!(state.board(), &Board::new());
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 0);
    assert_eq!(state.lines(), 0);
    assert!(!state.game_over());
    assert!(!state.paused());

    let current = state.current_piece().unwrap();
    assert_eq!(current.position, Position::new(4, 0));
    assert_eq!(current.rotation, 0);

    // Same kind, still two separate pieces
    assert_eq!(current.kind, state.next_piece().kind);
    assert_eq!(state.next_piece().position, Position::new(4, 0));
}

#[test]
fn test_piece_falls_then_locks_on_the_following_step() {
    let (mut state, mut source) = start(&[PieceKind::O, PieceKind::L, PieceKind::T]);
    let mut steps = 0;

    while state.can_move(Direction::Down.offset()) {
        state = state.step(&mut source);
        steps += 1;
    }
    assert_eq!(steps, BOARD_HEIGHT as usize - 2);
    assert_eq!(state.current_piece().unwrap().kind, PieceKind::O);
    assert_eq!(state.board(), &Board::new());

    let locked = state.step(&mut source);
    assert!(locked.board().is_occupied(4, 18));
    assert!(locked.board().is_occupied(5, 19));
    assert_eq!(locked.current_piece(), Some(Tetromino::new(PieceKind::L)));
    assert_eq!(locked.next_piece().kind, PieceKind::T);
    assert_eq!(locked.score(), 0);
}

#[test]
fn test_completed_row_is_cleared_and_scored() {
    let (state, mut source) = start(&[PieceKind::O]);
    let state = state.with_board(Board::from_rows(&["IIII..IIII"]));

    let next = state.hard_drop().step(&mut source);

    assert_eq!(next.lines(), 1);
    assert_eq!(next.score(), 40 * (state.level() + 1));
    // The O's top half drops into the bottom row
    assert_eq!(next.board().get(4, 19), Some(Some(PieceKind::O)));
    assert_eq!(next.board().get(5, 19), Some(Some(PieceKind::O)));
    assert_eq!(next.board().get(0, 19), Some(None));
    assert!(!next.board().is_row_full(19));
}

#[test]
fn test_tetris_scores_1200() {
    let (state, mut source) = start(&[PieceKind::I]);
    let board = Board::from_rows(&["IIIII.IIII"; 4]);
    let vertical = Tetromino::new(PieceKind::I).rotated().shifted(Position::new(1, 0));
    let state = state.with_board(board).with_current_piece(vertical);

    let next = state.hard_drop().step(&mut source);
    assert_eq!(next.lines(), 4);
    assert_eq!(next.score(), 1200);
    assert_eq!(next.board(), &Board::new());
}

#[test]
fn test_blocked_spawn_ends_the_game() {
    let (state, mut source) = start(&[PieceKind::O]);
    let mut board = Board::new();
    board.set(4, 2, Some(PieceKind::S));
    board.set(5, 2, Some(PieceKind::S));
    let state = state.with_board(board);

    let (over, event) = state.step_with_event(&mut source);

    assert!(event.unwrap().game_over);
    assert!(over.game_over());
    assert_eq!(over.current_piece(), None);
    assert!(over.board().is_occupied(4, 0));
    assert!(!over.is_playable());

    // Nothing moves any more
    assert_eq!(over.step(&mut source), over);
    assert_eq!(over.move_piece(Direction::Left), over);
    assert_eq!(over.toggle_pause(), over);
}

#[test]
fn test_invalid_transitions_return_equal_state() {
    let (state, _) = start(&[PieceKind::I]);

    // Vertical I cannot rotate back to horizontal against the right wall
    let vertical = Tetromino {
        position: Position::new(9, 5),
        ..Tetromino::new(PieceKind::I).rotated()
    };
    let state = state.with_current_piece(vertical);

    assert_eq!(state.rotate(), state);
    assert_eq!(state.move_piece(Direction::Right), state);
    assert_ne!(state.move_piece(Direction::Left), state);
}

#[test]
fn test_move_down_on_floor_does_not_lock() {
    let (state, _) = start(&[PieceKind::T]);
    let landed = state.hard_drop();
    assert_eq!(landed.move_piece(Direction::Down), landed);
    assert_eq!(landed.board(), &Board::new());
}

#[test]
fn test_transitions_keep_previous_states() {
    let (state, mut source) = start(&[PieceKind::J, PieceKind::S]);
    let snapshot = state.clone();

    let _ = state.move_piece(Direction::Right);
    let _ = state.rotate();
    let _ = state.hard_drop().step(&mut source);

    assert_eq!(state, snapshot);
}

#[test]
fn test_pause_round_trip() {
    let (state, mut source) = start(&[PieceKind::T]);
    let paused = state.toggle_pause();

    assert!(paused.paused());
    assert_eq!(paused.step(&mut source), paused);
    assert_eq!(paused.toggle_pause(), state);
}
