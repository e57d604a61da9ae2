use super::board::Board;
use super::player::Player;

/// One of the four line directions a run can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
    /// Up and to the left (\)
    DiagonalDown,
    /// Up and to the right (/)
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// (row, col) step between consecutive cells of a run
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (-1, -1),
            Axis::DiagonalUp => (-1, 1),
        }
    }
}

/// A completed run: `length` cells from `origin` along `axis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub origin: (usize, usize),
    pub axis: Axis,
    pub length: usize,
}

impl WinningLine {
    pub fn cells(&self) -> Vec<(usize, usize)> {
        (0..self.length)
            .filter_map(|i| step(self.origin, self.axis, i as isize))
            .collect()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().contains(&(row, col))
    }
}

/// Finds runs of `run_length` identical pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinDetector {
    run_length: usize,
}

impl WinDetector {
    pub fn new(run_length: usize) -> Self {
        WinDetector { run_length }
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Scan every occupied cell as a possible run start.
    pub fn winner(&self, board: &Board) -> Option<Player> {
        self.find_line(board).map(|line| line.player)
    }

    /// Like [`winner`](Self::winner), but also reports where the run is.
    ///
    /// Rows are visited bottom-up and each occupied cell is tried as the start
    /// of a window along every axis. Windows that leave the board never count.
    pub fn find_line(&self, board: &Board) -> Option<WinningLine> {
        for row in (0..board.rows()).rev() {
            for col in 0..board.cols() {
                let Some(player) = board.get(row, col).and_then(Player::from_cell) else {
                    continue;
                };
                for axis in Axis::ALL {
                    if self.window_matches(board, (row, col), axis, player) {
                        return Some(WinningLine {
                            player,
                            origin: (row, col),
                            axis,
                            length: self.run_length,
                        });
                    }
                }
            }
        }
        None
    }

    /// Check only the lines through (row, col), e.g. the cell just played.
    pub fn wins_through(&self, board: &Board, row: usize, col: usize) -> Option<WinningLine> {
        let player = board.get(row, col).and_then(Player::from_cell)?;
        let cell = player.to_cell();

        for axis in Axis::ALL {
            // Walk back to the start of the run, then count forward from it
            let mut back = 0;
            while step((row, col), axis, -(back + 1)).and_then(|(r, c)| board.get(r, c))
                == Some(cell)
            {
                back += 1;
            }
            let Some(origin) = step((row, col), axis, -back) else {
                continue;
            };
            let mut length = 1;
            while step(origin, axis, length as isize).and_then(|(r, c)| board.get(r, c))
                == Some(cell)
            {
                length += 1;
            }
            if length >= self.run_length {
                return Some(WinningLine {
                    player,
                    origin,
                    axis,
                    length,
                });
            }
        }
        None
    }

    fn window_matches(
        &self,
        board: &Board,
        origin: (usize, usize),
        axis: Axis,
        player: Player,
    ) -> bool {
        (0..self.run_length).all(|i| {
            step(origin, axis, i as isize).and_then(|(r, c)| board.get(r, c))
                == Some(player.to_cell())
        })
    }
}

/// The cell `n` steps from `from` along `axis`, if the index stays non-negative.
fn step(from: (usize, usize), axis: Axis, n: isize) -> Option<(usize, usize)> {
    let (dr, dc) = axis.delta();
    let row = from.0.checked_add_signed(dr * n)?;
    let col = from.1.checked_add_signed(dc * n)?;
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use proptest::prelude::*;

    fn c4() -> WinDetector {
        WinDetector::new(4)
    }

    fn ttt() -> WinDetector {
        WinDetector::new(3)
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(c4().winner(&Board::new(6, 7)), None);
    }

    #[test]
    fn test_horizontal_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".XXXX..",
        ]);
        let line = c4().find_line(&board).unwrap();
        assert_eq!(line.player, Player::X);
        assert_eq!(line.axis, Axis::Horizontal);
        assert_eq!(line.origin, (5, 1));
    }

    #[test]
    fn test_vertical_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "...O...",
            "...O...",
            "...O...",
            "...O...",
        ]);
        assert_eq!(c4().winner(&board), Some(Player::O));
    }

    #[test]
    fn test_diagonal_up_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "...X...",
            "..XO...",
            ".XOO...",
            "XOOX...",
        ]);
        let line = c4().find_line(&board).unwrap();
        assert_eq!(line.player, Player::X);
        assert_eq!(line.axis, Axis::DiagonalUp);
        assert_eq!(line.cells(), vec![(5, 0), (4, 1), (3, 2), (2, 3)]);
    }

    #[test]
    fn test_diagonal_down_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "...X...",
            "...OX..",
            "...OOX.",
            "...XOOX",
        ]);
        let line = c4().find_line(&board).unwrap();
        assert_eq!(line.player, Player::X);
        assert_eq!(line.axis, Axis::DiagonalDown);
        assert_eq!(line.origin, (5, 6));
    }

    #[test]
    fn test_no_win_with_three() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XXX.XXX",
        ]);
        assert_eq!(c4().winner(&board), None);
    }

    #[test]
    fn test_window_never_wraps_across_rows() {
        // Two X at the end of one row and two at the start of the next
        let board = Board::from_rows(&["..XX", "XX.."]);
        assert_eq!(c4().winner(&board), None);
    }

    #[test]
    fn test_winner_is_idempotent() {
        let board = Board::from_rows(&["XXX", "OO.", "..."]);
        assert_eq!(ttt().find_line(&board), ttt().find_line(&board));
    }

    #[test]
    fn test_tic_tac_toe_lines() {
        let wins = [
            ["XXX", "OO.", "..."],
            ["O..", "XXX", "O.."],
            ["X.O", "XO.", "X.."],
            ["XO.", "OX.", "..X"],
            ["..X", "OXO", "X.."],
        ];
        for rows in wins {
            assert_eq!(ttt().winner(&Board::from_rows(&rows)), Some(Player::X), "{rows:?}");
        }
        let draw = Board::from_rows(&["XOX", "XOO", "OXX"]);
        assert_eq!(ttt().winner(&draw), None);
    }

    #[test]
    fn test_wins_through_reports_full_run() {
        let board = Board::from_rows(&[".....", "XXXXX"]);
        let line = c4().wins_through(&board, 1, 2).unwrap();
        assert_eq!(line.origin, (1, 0));
        assert_eq!(line.length, 5);
        assert!(line.contains(1, 4));
    }

    /// Every 3x3 board with a piece at the last-move cell: the last-move
    /// check must agree with the full scan whenever that piece's owner wins.
    #[test]
    fn test_wins_through_matches_full_scan_for_every_cell() {
        for row in 0..3 {
            for col in 0..3 {
                for mask in 0u32..3u32.pow(9) {
                    let mut board = Board::new(3, 3);
                    let mut m = mask;
                    for i in 0..9 {
                        let cell = match m % 3 {
                            0 => Cell::Empty,
                            1 => Cell::X,
                            _ => Cell::O,
                        };
                        m /= 3;
                        board.place(i / 3, i % 3, cell).unwrap();
                    }
                    let Some(mover) = board.get(row, col).and_then(Player::from_cell) else {
                        continue;
                    };
                    let through = ttt().wins_through(&board, row, col).is_some();
                    let line_via_cell = full_scan_lines(&board, 3)
                        .iter()
                        .any(|l| l.player == mover && l.contains(row, col));
                    assert_eq!(through, line_via_cell, "cell ({row},{col}) mask {mask}");
                }
            }
        }
    }

    /// All windows the full scan would accept, not just the first.
    fn full_scan_lines(board: &Board, k: usize) -> Vec<WinningLine> {
        let detector = WinDetector::new(k);
        let mut lines = Vec::new();
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let Some(player) = board.get(row, col).and_then(Player::from_cell) else {
                    continue;
                };
                for axis in Axis::ALL {
                    if detector.window_matches(board, (row, col), axis, player) {
                        lines.push(WinningLine {
                            player,
                            origin: (row, col),
                            axis,
                            length: k,
                        });
                    }
                }
            }
        }
        lines
    }

    fn board_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Board> {
        prop::collection::vec(
            prop_oneof![Just(Cell::Empty), Just(Cell::X), Just(Cell::O)],
            rows * cols,
        )
        .prop_map(move |cells| {
            let mut board = Board::new(rows, cols);
            for (i, cell) in cells.into_iter().enumerate() {
                board.place(i / cols, i % cols, cell).unwrap();
            }
            board
        })
    }

    proptest! {
        #[test]
        fn prop_rotation_preserves_winning_cells(board in board_strategy(6, 7)) {
            let rotated = board.rotated_180();
            let mirror = |(r, c): (usize, usize)| (5 - r, 6 - c);

            let mut original: Vec<_> = full_scan_lines(&board, 4)
                .iter()
                .flat_map(|l| l.cells().into_iter().map(move |cell| (l.player, mirror(cell))))
                .collect();
            let mut turned: Vec<_> = full_scan_lines(&rotated, 4)
                .iter()
                .flat_map(|l| l.cells().into_iter().map(move |cell| (l.player, cell)))
                .collect();
            original.sort_by_key(|&(p, cell)| (p.symbol(), cell));
            original.dedup();
            turned.sort_by_key(|&(p, cell)| (p.symbol(), cell));
            turned.dedup();

            prop_assert_eq!(original, turned);
            prop_assert_eq!(c4().winner(&board).is_some(), c4().winner(&rotated).is_some());
        }

        #[test]
        fn prop_every_full_scan_line_is_seen_through_its_cells(board in board_strategy(6, 7)) {
            for line in full_scan_lines(&board, 4) {
                for (r, c) in line.cells() {
                    let through = c4().wins_through(&board, r, c);
                    prop_assert!(through.is_some());
                    prop_assert_eq!(through.map(|l| l.player), Some(line.player));
                }
            }
        }
    }
}
