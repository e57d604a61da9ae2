use super::board::{Board, Cell};
use super::rules::Placement;
use crate::error::MoveError;

/// A proposed move, as it arrives from a player or the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Drop into a column, counted from 1 as players name them.
    Drop { column: usize },
    /// Place at a 0-based (row, col) cell, row 0 being the top.
    Place { row: usize, col: usize },
}

/// Decides whether a move is legal on a board and where it lands.
///
/// Pure: it reads the board and never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveValidator {
    placement: Placement,
}

impl MoveValidator {
    pub fn new(placement: Placement) -> Self {
        MoveValidator { placement }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Resolve a move to the (row, col) cell it would occupy.
    pub fn resolve(&self, board: &Board, mv: Move) -> Result<(usize, usize), MoveError> {
        match (self.placement, mv) {
            (Placement::Drop, Move::Drop { column }) => {
                Self::landing_row(board, column).map(|row| (row, column - 1))
            }
            (Placement::Free, Move::Place { row, col }) => {
                if board.cell_at(row, col)?.is_empty() {
                    Ok((row, col))
                } else {
                    Err(MoveError::CellOccupied { row, col })
                }
            }
            _ => Err(MoveError::WrongMoveKind),
        }
    }

    pub fn is_legal(&self, board: &Board, mv: Move) -> bool {
        self.resolve(board, mv).is_ok()
    }

    /// Every legal move on the board, in row-major (or column) order
    pub fn legal_moves(&self, board: &Board) -> Vec<Move> {
        match self.placement {
            Placement::Drop => (1..=board.cols())
                .map(|column| Move::Drop { column })
                .filter(|&mv| self.is_legal(board, mv))
                .collect(),
            Placement::Free => (0..board.rows())
                .flat_map(|row| (0..board.cols()).map(move |col| Move::Place { row, col }))
                .filter(|&mv| self.is_legal(board, mv))
                .collect(),
        }
    }

    /// Lowest empty row of a 1-based column, searching from the bottom up
    fn landing_row(board: &Board, column: usize) -> Result<usize, MoveError> {
        if column == 0 || column > board.cols() {
            return Err(MoveError::ColumnOutOfRange {
                column,
                cols: board.cols(),
            });
        }
        let col = column - 1;
        (0..board.rows())
            .rev()
            .find(|&row| board.get(row, col) == Some(Cell::Empty))
            .ok_or(MoveError::ColumnFull(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_validator() -> MoveValidator {
        MoveValidator::new(Placement::Drop)
    }

    fn free_validator() -> MoveValidator {
        MoveValidator::new(Placement::Free)
    }

    #[test]
    fn test_drop_lands_on_bottom_row() {
        let board = Board::new(6, 7);
        assert_eq!(
            drop_validator().resolve(&board, Move::Drop { column: 4 }),
            Ok((5, 3))
        );
    }

    #[test]
    fn test_drop_stacks_on_existing_pieces() {
        let mut board = Board::new(6, 7);
        board.place(5, 0, Cell::X).unwrap();
        board.place(4, 0, Cell::O).unwrap();
        assert_eq!(
            drop_validator().resolve(&board, Move::Drop { column: 1 }),
            Ok((3, 0))
        );
    }

    #[test]
    fn test_drop_column_out_of_range() {
        let board = Board::new(6, 7);
        let validator = drop_validator();
        assert_eq!(
            validator.resolve(&board, Move::Drop { column: 0 }),
            Err(MoveError::ColumnOutOfRange { column: 0, cols: 7 })
        );
        assert_eq!(
            validator.resolve(&board, Move::Drop { column: 8 }),
            Err(MoveError::ColumnOutOfRange { column: 8, cols: 7 })
        );
    }

    #[test]
    fn test_full_column_rejected() {
        let mut board = Board::new(6, 7);
        for row in 0..6 {
            board.place(row, 2, Cell::X).unwrap();
        }
        let validator = drop_validator();
        assert_eq!(
            validator.resolve(&board, Move::Drop { column: 3 }),
            Err(MoveError::ColumnFull(3))
        );
        assert_eq!(validator.legal_moves(&board).len(), 6);
    }

    #[test]
    fn test_place_on_empty_cell() {
        let board = Board::new(3, 3);
        assert_eq!(
            free_validator().resolve(&board, Move::Place { row: 2, col: 1 }),
            Ok((2, 1))
        );
    }

    #[test]
    fn test_place_on_occupied_cell_either_owner() {
        let board = Board::from_rows(&["X..", ".O.", "..."]);
        let validator = free_validator();
        assert_eq!(
            validator.resolve(&board, Move::Place { row: 0, col: 0 }),
            Err(MoveError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(
            validator.resolve(&board, Move::Place { row: 1, col: 1 }),
            Err(MoveError::CellOccupied { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_place_out_of_range() {
        let board = Board::new(3, 3);
        assert!(matches!(
            free_validator().resolve(&board, Move::Place { row: 0, col: 3 }),
            Err(MoveError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_wrong_move_kind() {
        let board = Board::new(3, 3);
        assert_eq!(
            free_validator().resolve(&board, Move::Drop { column: 1 }),
            Err(MoveError::WrongMoveKind)
        );
        assert_eq!(
            drop_validator().resolve(&board, Move::Place { row: 0, col: 0 }),
            Err(MoveError::WrongMoveKind)
        );
    }

    #[test]
    fn test_resolve_is_pure_and_repeatable() {
        let board = Board::from_rows(&["...", "...", "XO."]);
        let before = board.snapshot();
        let validator = free_validator();
        let first = validator.resolve(&board, Move::Place { row: 2, col: 2 });
        let second = validator.resolve(&board, Move::Place { row: 2, col: 2 });
        assert_eq!(first, second);
        assert_eq!(board, before);
    }

    #[test]
    fn test_legal_moves_free() {
        let board = Board::from_rows(&["XOX", "O.X", "OX."]);
        assert_eq!(
            free_validator().legal_moves(&board),
            vec![Move::Place { row: 1, col: 1 }, Move::Place { row: 2, col: 2 }]
        );
    }
}
