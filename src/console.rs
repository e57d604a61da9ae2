//! Line-oriented console front-end. Reads moves from any `BufRead` and
//! writes the board and prompts to any `Write`, so sessions can be scripted.

use std::io::{self, BufRead, Write};

use crate::ai::{Agent, RandomAgent};
use crate::config::Opponent;
use crate::game::{Board, Cell, GameOutcome, GameRules, GameStatus, Placement, Player, RuleEngine};
use crate::input::{format_move, parse_move, parse_opponent};

pub struct Console<R, W> {
    engine: RuleEngine,
    computer: Option<(Player, RandomAgent)>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(engine: RuleEngine, input: R, output: W) -> Self {
        Console {
            engine,
            computer: None,
            input,
            output,
        }
    }

    /// Let `agent` make every move for `plays`
    pub fn with_computer(mut self, plays: Player, agent: RandomAgent) -> Self {
        self.computer = Some((plays, agent));
        self
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Ask whether the second seat is a person or the computer.
    /// Returns `None` if input ends first.
    pub fn choose_opponent(&mut self) -> io::Result<Option<Opponent>> {
        loop {
            writeln!(
                self.output,
                "Enter 'P' if you want to play against another player; enter 'C' to play against computer."
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(opponent) = parse_opponent(&line) {
                return Ok(Some(opponent));
            }
        }
    }

    /// Play until someone wins, the board fills, or input runs out.
    /// Running out of input abandons the game and returns `Ongoing`.
    pub fn run(&mut self) -> io::Result<GameOutcome> {
        let rules = *self.engine.rules();
        write!(self.output, "{}", render_board(self.engine.board(), &rules))?;
        if let Some((plays, _)) = &self.computer {
            writeln!(
                self.output,
                "Start game against computer. You are {} and Computer is {}.",
                plays.other().name(),
                plays.name()
            )?;
        }
        writeln!(self.output, "Begin Game.")?;

        loop {
            let player = match self.engine.status() {
                GameStatus::Won(winner) => {
                    writeln!(self.output, "{} Won the Game", winner.name())?;
                    return Ok(GameOutcome::Win(winner));
                }
                GameStatus::Drawn => {
                    writeln!(self.output, "The board is full, the game is a draw!")?;
                    return Ok(GameOutcome::Draw);
                }
                GameStatus::AwaitingMove(player) => player,
            };

            let mv = match &mut self.computer {
                Some((plays, agent)) if *plays == player => {
                    let mv = agent
                        .select_move(self.engine.board(), self.engine.validator())
                        .ok_or_else(|| io::Error::other("computer found no legal move"))?;
                    writeln!(
                        self.output,
                        "It is the computer's turn, computer plays: {}",
                        format_move(&rules, mv)
                    )?;
                    mv
                }
                _ => {
                    writeln!(self.output, "{}", turn_prompt(player, &rules))?;
                    let Some(line) = self.read_line()? else {
                        return Ok(GameOutcome::Ongoing);
                    };
                    match parse_move(&rules, &line) {
                        Ok(mv) => mv,
                        Err(e) => {
                            writeln!(self.output, "Not a valid move ({e}), please try again")?;
                            continue;
                        }
                    }
                }
            };

            match self.engine.apply_move(mv) {
                Ok(_) => write!(self.output, "{}", render_board(self.engine.board(), &rules))?,
                Err(e) => writeln!(self.output, "Move rejected: {e}. Please try again.")?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn turn_prompt(player: Player, rules: &GameRules) -> String {
    match rules.placement() {
        Placement::Drop => format!(
            "{} - your turn. Choose a column number from 1-{}.",
            player.name(),
            rules.cols()
        ),
        Placement::Free => format!(
            "{} - your turn. Choose a cell position to place your piece, e.g. {}a for the top left corner.",
            player.name(),
            rules.rows()
        ),
    }
}

/// Text drawing of the board, top row first, ending with a newline.
pub fn render_board(board: &Board, rules: &GameRules) -> String {
    let mut out = String::new();
    match rules.placement() {
        Placement::Drop => {
            for row in 0..board.rows() {
                for &cell in board.row(row) {
                    out.push_str(&format!("| {} ", symbol(cell, ' ')));
                }
                out.push_str("|\n");
            }
            for col in 1..=board.cols() {
                out.push_str(&format!("{col:>3} "));
            }
            out.push('\n');
        }
        Placement::Free => {
            for row in 0..board.rows() {
                out.push_str(&(board.rows() - row).to_string());
                for &cell in board.row(row) {
                    out.push('|');
                    out.push(symbol(cell, '_'));
                }
                out.push_str("|\n");
            }
            out.push(' ');
            for col in 0..board.cols() {
                out.push(' ');
                out.push(char::from(b'a' + col as u8));
            }
            out.push('\n');
        }
    }
    out
}

fn symbol(cell: Cell, empty: char) -> char {
    Player::from_cell(cell).map_or(empty, Player::symbol)
}
