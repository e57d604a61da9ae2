use crate::ai::{Agent, RandomAgent};
use crate::game::{GameOutcome, Move, Placement, Player, RuleEngine};
use crate::input::format_move;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

pub struct App {
    engine: RuleEngine,
    computer: Option<(Player, RandomAgent)>,
    cursor: (usize, usize),
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(engine: RuleEngine) -> Self {
        let cursor = Self::home(&engine);
        App {
            engine,
            computer: None,
            cursor,
            should_quit: false,
            message: None,
        }
    }

    /// Let `agent` make every move for `plays`. If that is X, it opens.
    pub fn with_computer(mut self, plays: Player, agent: RandomAgent) -> Self {
        self.computer = Some((plays, agent));
        self.computer_turn();
        self
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Selected (row, col); the row is unused in drop games
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Middle column, middle row
    fn home(engine: &RuleEngine) -> (usize, usize) {
        let rules = engine.rules();
        (rules.rows() / 2, rules.cols() / 2)
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        let rules = *self.engine.rules();
        let (row, col) = self.cursor;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.cursor.1 = col.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor.1 = (col + 1).min(rules.cols() - 1);
            }
            KeyCode::Up if rules.placement() == Placement::Free => {
                self.cursor.0 = row.saturating_sub(1);
            }
            KeyCode::Down if rules.placement() == Placement::Free => {
                self.cursor.0 = (row + 1).min(rules.rows() - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_selected();
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.cursor = Self::home(&self.engine);
                self.message = Some("New game started!".to_string());
                self.computer_turn();
            }
            _ => {}
        }
    }

    /// Play the human move under the cursor, then let the computer answer
    fn play_selected(&mut self) {
        if self.engine.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.is_computer_turn() {
            return;
        }

        let (row, col) = self.cursor;
        let mv = match self.engine.rules().placement() {
            Placement::Drop => Move::Drop { column: col + 1 },
            Placement::Free => Move::Place { row, col },
        };
        match self.engine.apply_move(mv) {
            Ok(report) => {
                self.announce(report.outcome);
                self.computer_turn();
            }
            Err(e) => {
                self.message = Some(format!("Move rejected: {e}"));
            }
        }
    }

    fn is_computer_turn(&self) -> bool {
        !self.engine.is_terminal()
            && matches!(&self.computer, Some((plays, _)) if *plays == self.engine.current_player())
    }

    /// Make the computer's move if it owns the current turn
    fn computer_turn(&mut self) {
        if !self.is_computer_turn() {
            return;
        }
        let Some((_, agent)) = self.computer.as_mut() else {
            return;
        };
        let Some(mv) = agent.select_move(self.engine.board(), self.engine.validator()) else {
            return;
        };
        debug!(?mv, "computer move");
        if let Ok(report) = self.engine.apply_move(mv) {
            let rules = *self.engine.rules();
            self.message = Some(format!("Computer played {}", format_move(&rules, mv)));
            self.announce(report.outcome);
        }
    }

    fn announce(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(player) => {
                self.message = Some(format!("{} wins!", player.name()));
            }
            GameOutcome::Draw => {
                self.message = Some("It's a draw!".to_string());
            }
            GameOutcome::Ongoing => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let opponent = match &self.computer {
            Some((plays, _)) => format!("Computer plays {}", plays.symbol()),
            None => "Two players".to_string(),
        };
        super::game_view::render(frame, &self.engine, self.cursor, &self.message, &opponent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::SamplingStrategy;
    use crate::game::{Cell, GameStatus};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut app = App::new(RuleEngine::connect_four());
        assert_eq!(app.cursor().1, 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor().1, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.cursor().1, 0);
        // Up/down only move in placement games
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor().0, 3);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = App::new(RuleEngine::connect_four());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine().board().cell_at(5, 3), Ok(Cell::X));
        assert_eq!(app.engine().current_player(), Player::O);
    }

    #[test]
    fn test_occupied_cell_shows_message() {
        let mut app = App::new(RuleEngine::tic_tac_toe());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine().turn_count(), 1);
        assert!(app.message().unwrap().starts_with("Move rejected"));
    }

    #[test]
    fn test_computer_answers_human_move() {
        let agent = RandomAgent::with_seed(SamplingStrategy::Enumerate, 4);
        let mut app = App::new(RuleEngine::tic_tac_toe()).with_computer(Player::O, agent);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.engine().turn_count(), 2);
        assert_eq!(app.engine().current_player(), Player::X);
        assert!(app.message().unwrap().starts_with("Computer played"));
    }

    #[test]
    fn test_computer_opens_when_playing_x() {
        let agent = RandomAgent::with_seed(SamplingStrategy::Enumerate, 4);
        let app = App::new(RuleEngine::connect_four()).with_computer(Player::X, agent);
        assert_eq!(app.engine().turn_count(), 1);
    }

    #[test]
    fn test_win_then_restart() {
        let mut app = App::new(RuleEngine::tic_tac_toe());
        // X: top row, O: middle row
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            app.cursor = (row, col);
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.engine().status(), GameStatus::Won(Player::X));
        assert_eq!(app.message(), Some("PlayerX wins!"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine().turn_count(), 0);
        assert_eq!(app.cursor(), (1, 1));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(RuleEngine::connect_four());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_render_shows_board_and_status() {
        let mut app = App::new(RuleEngine::connect_four());
        press(&mut app, KeyCode::Enter);
        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Connect Four"));
        assert!(text.contains("Current Player: O"));
        assert!(text.contains("Two players"));
    }

    #[test]
    fn test_render_finished_tic_tac_toe() {
        let mut app = App::new(RuleEngine::tic_tac_toe());
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            app.cursor = (row, col);
            press(&mut app, KeyCode::Enter);
        }
        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Tic-Tac-Toe"));
        assert!(text.contains("X wins"));
    }
}
