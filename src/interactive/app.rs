//! TUI application state and event loop

use crate::game::{Event as GameEvent, Game, GameError, Input, Outcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play(Input),
    Quit,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a>) -> Self {
        let cols = game.config().cols;
        let rows = game.config().rows;

        Self {
            game,
            messages: vec![Message {
                text: format!("Guess the {cols}-letter word in {rows} tries."),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Map a key press to an action; depends on whether the game is over
    #[must_use]
    pub fn action_for_key(&self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return Some(Action::Quit);
        }

        if key.code == KeyCode::Char('n') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Play(Input::NewGame));
        }

        if self.game.is_finished() {
            return match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('n') | KeyCode::Enter => Some(Action::Play(Input::NewGame)),
                _ => None,
            };
        }

        let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        match key.code {
            KeyCode::Char(c) if plain && c.is_ascii_alphabetic() => {
                Some(Action::Play(Input::Letter(c)))
            }
            KeyCode::Backspace | KeyCode::Delete => Some(Action::Play(Input::Delete)),
            KeyCode::Enter => Some(Action::Play(Input::Submit)),
            _ => None,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Play(input) => self.handle_input(input),
        }
    }

    /// Apply an input to the game and turn its result into messages
    pub fn handle_input(&mut self, input: Input) {
        match self.game.apply(input) {
            Ok(GameEvent::Scored(report)) => match report.outcome {
                Outcome::Won => {
                    let celebration = match report.attempt {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        _ => "😅 PHEW! Got it! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                Outcome::Lost => {
                    let answer = self
                        .game
                        .revealed_answer()
                        .map(ToString::to_string)
                        .unwrap_or_default();
                    self.add_message(
                        &format!("Out of guesses! The word was {answer}"),
                        MessageStyle::Error,
                    );
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                Outcome::InProgress => {}
            },
            Ok(GameEvent::Restarted) => {
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Ok(GameEvent::Typed(_) | GameEvent::Deleted) => {}
            Err(GameError::InvalidWord(word)) => {
                self.add_message(&format!("Not in word list: {word}"), MessageStyle::Error);
            }
            Err(GameError::RowIncomplete { .. }) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Err(e) => log::debug!("ignored {input:?}: {e}"),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(action) = app.action_for_key(key) {
                app.handle_action(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameConfig;
    use crate::wordlists::WordList;

    fn list() -> WordList {
        let words = |l: &[&str]| l.iter().map(|w| Word::new(*w).unwrap()).collect();
        WordList::new(words(&["crane"]), words(&["trace", "slate", "ghost"])).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press_all(app: &mut App, keys: &str) {
        for c in keys.chars() {
            let action = app.action_for_key(key(KeyCode::Char(c))).unwrap();
            app.handle_action(action);
        }
    }

    fn submit(app: &mut App) {
        let action = app.action_for_key(key(KeyCode::Enter)).unwrap();
        app.handle_action(action);
    }

    #[test]
    fn key_mapping_while_playing() {
        let list = list();
        let app = App::new(Game::with_seed(&list, GameConfig::default(), 1).unwrap());

        assert_eq!(
            app.action_for_key(key(KeyCode::Char('a'))),
            Some(Action::Play(Input::Letter('a')))
        );
        assert_eq!(
            app.action_for_key(key(KeyCode::Backspace)),
            Some(Action::Play(Input::Delete))
        );
        assert_eq!(
            app.action_for_key(key(KeyCode::Enter)),
            Some(Action::Play(Input::Submit))
        );
        assert_eq!(app.action_for_key(key(KeyCode::Char('1'))), None);
        assert_eq!(app.action_for_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            app.action_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn modified_letters_do_not_type() {
        let list = list();
        let app = App::new(Game::with_seed(&list, GameConfig::default(), 1).unwrap());

        assert_eq!(
            app.action_for_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::Play(Input::Letter('A')))
        );
        assert_eq!(
            app.action_for_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            app.action_for_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(
            app.action_for_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(Action::Play(Input::NewGame))
        );
    }

    #[test]
    fn invalid_word_adds_error_message() {
        let list = list();
        let mut app = App::new(Game::with_seed(&list, GameConfig::default(), 1).unwrap());

        press_all(&mut app, "zzzzz");
        submit(&mut app);

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("ZZZZZ"));
        assert_eq!(app.game.attempts_used(), 0);
    }

    #[test]
    fn win_then_new_game() {
        let list = list();
        let mut app = App::new(Game::with_seed(&list, GameConfig::default(), 1).unwrap());

        press_all(&mut app, "crane");
        submit(&mut app);
        assert_eq!(app.game.outcome(), Outcome::Won);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );

        // Letters no longer type once the game is over
        assert_eq!(app.action_for_key(key(KeyCode::Char('a'))), None);
        assert_eq!(app.action_for_key(key(KeyCode::Char('q'))), Some(Action::Quit));

        let action = app.action_for_key(key(KeyCode::Char('n'))).unwrap();
        app.handle_action(action);
        assert_eq!(app.game.outcome(), Outcome::InProgress);
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn loss_reveals_answer() {
        let list = list();
        let game = Game::with_seed(&list, GameConfig::new(2, 5), 1).unwrap();
        let mut app = App::new(game);

        for word in ["slate", "ghost"] {
            press_all(&mut app, word);
            submit(&mut app);
        }

        assert_eq!(app.game.outcome(), Outcome::Lost);
        assert!(app.messages.iter().any(|m| m.text.contains("CRANE")));
    }

    #[test]
    fn messages_are_capped() {
        let list = list();
        let mut app = App::new(Game::with_seed(&list, GameConfig::default(), 1).unwrap());
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
