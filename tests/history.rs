use pretty_assertions::assert_eq;
use synaptic::board::{Board, Player};
use synaptic::error::GameError;
use synaptic::history::{HistoryEntry, Timeline};

fn after(moves: &[usize]) -> Vec<HistoryEntry> {
    let mut board = Board::new();
    let mut out = Vec::new();
    for &m in moves {
        let side = board.side_to_move();
        board = board.with(m, side);
        out.push(HistoryEntry { board, next_to_move: side.other() });
    }
    out
}

fn timeline_of(moves: &[usize]) -> Timeline {
    let mut t = Timeline::new();
    for e in after(moves) { t.record(e); }
    t
}

#[test]
fn record_after_rewind_discards_the_future() {
    let mut t = timeline_of(&[4, 0, 8, 2, 1]);
    assert_eq!(t.len(), 6);
    let k = 2;
    t.jump(k).unwrap();
    assert!(!t.is_at_end());
    let branch = HistoryEntry { board: t.current().board.with(6, Player::X), next_to_move: Player::O };
    t.record(branch);
    assert_eq!(t.len(), k + 2);
    assert_eq!(t.cursor(), k + 1);
    assert_eq!(*t.current(), branch);
}

#[test]
fn jump_rejects_out_of_range() {
    let mut t = timeline_of(&[4, 0]);
    assert_eq!(t.jump(3), Err(GameError::OutOfRange { index: 3, len: 3 }));
    assert_eq!(t.jump(usize::MAX), Err(GameError::OutOfRange { index: usize::MAX, len: 3 }));
    // A failed jump keeps the cursor.
    assert_eq!(t.cursor(), 2);
}

#[test]
fn jump_zero_is_the_empty_board_with_x_to_move() {
    let mut t = timeline_of(&[4, 0, 8]);
    let e = t.jump(0).unwrap();
    assert_eq!(e, HistoryEntry { board: Board::new(), next_to_move: Player::X });
    assert_eq!(t.cursor(), 0);
    // Jumping does not drop anything until a new move is recorded.
    assert_eq!(t.len(), 4);
    assert_eq!(t.jump(3).unwrap().board.filled(), 3);
}

#[test]
fn entries_are_independent_snapshots() {
    let moves = [4, 0, 8];
    let t = timeline_of(&moves);
    let expected = after(&moves);
    assert_eq!(&t.entries()[1..], &expected[..]);
    assert_eq!(t.entries()[1].board.filled(), 1);
    assert_eq!(t.entries()[3].board.filled(), 3);
}

#[test]
fn reset_leaves_one_entry() {
    let mut t = timeline_of(&[4, 0, 8]);
    t.jump(1).unwrap();
    t.reset();
    assert_eq!(t.len(), 1);
    assert_eq!(t.cursor(), 0);
    assert_eq!(*t.current(), HistoryEntry::start());
}
