//! Text boundary: turns what a player types into a [`Move`] and back.
//!
//! Drop games take a column number (`4`). Placement games take a row digit
//! followed by a column letter (`3a`), with row 1 at the bottom so that `3a`
//! is the top-left cell of a 3x3 board. Range and occupancy are left to the
//! validator; this module only rejects text that is not a move at all.

use crate::config::Opponent;
use crate::error::InputError;
use crate::game::{GameRules, Move, Placement};

pub fn parse_move(rules: &GameRules, text: &str) -> Result<Move, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    match rules.placement() {
        Placement::Drop => text
            .parse::<usize>()
            .map(|column| Move::Drop { column })
            .map_err(|_| InputError::NotANumber(text.to_string())),
        Placement::Free => parse_cell(rules, text),
    }
}

fn parse_cell(rules: &GameRules, text: &str) -> Result<Move, InputError> {
    let chars: Vec<char> = text.chars().collect();
    let &[row_ch, col_ch] = chars.as_slice() else {
        return Err(InputError::WrongLength(text.to_string()));
    };

    let row = row_ch
        .to_digit(10)
        .map(|d| d as usize)
        .filter(|d| (1..=rules.rows()).contains(d))
        .map(|d| rules.rows() - d)
        .ok_or(InputError::BadRow(row_ch))?;

    let col = col_ch
        .is_ascii_alphabetic()
        .then(|| (col_ch.to_ascii_lowercase() as u8 - b'a') as usize)
        .filter(|&c| c < rules.cols())
        .ok_or(InputError::BadColumn(col_ch))?;

    Ok(Move::Place { row, col })
}

/// The text a player would type for this move
pub fn format_move(rules: &GameRules, mv: Move) -> String {
    match mv {
        Move::Drop { column } => column.to_string(),
        Move::Place { row, col } => {
            let letter = char::from(b'a' + (col % 26) as u8);
            format!("{}{}", rules.rows().saturating_sub(row), letter)
        }
    }
}

/// `P` for another player, `C` for the computer
pub fn parse_opponent(text: &str) -> Option<Opponent> {
    match text.trim() {
        "P" | "p" => Some(Opponent::Human),
        "C" | "c" => Some(Opponent::Computer),
        _ => None,
    }
}
