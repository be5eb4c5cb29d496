use stampede_core::{BoardState, Line, Square, completed_lines, has_line, toggle_stamp};

fn grid(side: usize, stamped: &[usize]) -> Vec<Square> {
    (0..side * side)
        .map(|i| Square {
            goal: format!("{i}"),
            stamped_idx: stamped.contains(&i).then_some(i % 12),
        })
        .collect()
}

#[test]
fn centre_square_closes_middle_row_and_diagonal() {
    // Middle row and main diagonal are one stamp short; no other line is full.
    let mut squares = grid(3, &[0, 8]);
    squares[3].stamped_idx = Some(1);
    squares[5].stamped_idx = Some(1);
    assert!(!has_line(&squares, 3));

    squares[4].stamped_idx = Some(0);
    assert!(has_line(&squares, 3));
    assert_eq!(
        completed_lines(&squares, 3),
        vec![Line::Row(1), Line::Diagonal]
    );
}

#[test]
fn every_square_but_the_centre_still_completes_outer_lines() {
    let all_but_centre: Vec<usize> = (0..9).filter(|i| *i != 4).collect();
    let squares = grid(3, &all_but_centre);
    assert!(has_line(&squares, 3));
    assert_eq!(
        completed_lines(&squares, 3),
        vec![Line::Row(0), Line::Row(2), Line::Column(0), Line::Column(2)]
    );
}

#[test]
fn anti_diagonal_on_five_by_five() {
    let mut squares = grid(5, &[4, 8, 12, 16, 20]);
    assert!(has_line(&squares, 5));
    assert_eq!(completed_lines(&squares, 5), vec![Line::AntiDiagonal]);

    squares[12].stamped_idx = None;
    assert!(!has_line(&squares, 5));
}

#[test]
fn column_completed_through_reducer() {
    let mut board = BoardState::default_with_side(4);
    for row in 0..4 {
        assert!(!has_line(&board.squares, board.side()));
        board = toggle_stamp(&board, row * 4 + 2, 6);
    }
    assert_eq!(completed_lines(&board.squares, 4), vec![Line::Column(2)]);
}
