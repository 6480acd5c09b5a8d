use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

use crate::config::AppConfig;
use crate::controller::{Action, Controller, Phase};

/// Translate a key press into a controller action for the given phase.
/// Quitting is handled by [`App`] and never maps to an action.
pub fn map_key(phase: Phase, code: KeyCode) -> Option<Action> {
    match phase {
        Phase::Configuring => match code {
            KeyCode::Char('1') => Some(Action::StartTwoPlayer),
            KeyCode::Char('2') => Some(Action::StartVsComputer),
            KeyCode::Char('3') | KeyCode::Char('h') => Some(Action::ToggleHelp),
            _ => None,
        },
        Phase::InProgress => match code {
            KeyCode::Left => Some(Action::Left),
            KeyCode::Right => Some(Action::Right),
            KeyCode::Down | KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Drop),
            KeyCode::Up | KeyCode::Char('u') => Some(Action::Undo),
            KeyCode::Char('r') => Some(Action::Restart),
            _ => None,
        },
        Phase::Over => match code {
            KeyCode::Char('s') => Some(Action::ShowWinningMoves),
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Char('r') => Some(Action::Restart),
            _ => None,
        },
    }
}

pub struct App {
    controller: Controller,
    tick: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            controller: Controller::new(config),
            tick: config.ui.tick(),
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.controller.poll_computer();

            let view = self.controller.view();
            terminal.draw(|f| super::game_view::render(f, &view))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            code => {
                if let Some(action) = map_key(self.controller.phase(), code) {
                    self.controller.handle(action);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_configuration_keys() {
        assert_eq!(
            map_key(Phase::Configuring, KeyCode::Char('1')),
            Some(Action::StartTwoPlayer)
        );
        assert_eq!(
            map_key(Phase::Configuring, KeyCode::Char('2')),
            Some(Action::StartVsComputer)
        );
        assert_eq!(
            map_key(Phase::Configuring, KeyCode::Char('3')),
            Some(Action::ToggleHelp)
        );
        assert_eq!(
            map_key(Phase::Configuring, KeyCode::Char('h')),
            Some(Action::ToggleHelp)
        );
        assert_eq!(map_key(Phase::Configuring, KeyCode::Enter), None);
    }

    #[test]
    fn test_in_progress_keys() {
        assert_eq!(map_key(Phase::InProgress, KeyCode::Left), Some(Action::Left));
        assert_eq!(map_key(Phase::InProgress, KeyCode::Right), Some(Action::Right));
        assert_eq!(map_key(Phase::InProgress, KeyCode::Down), Some(Action::Drop));
        assert_eq!(map_key(Phase::InProgress, KeyCode::Enter), Some(Action::Drop));
        assert_eq!(map_key(Phase::InProgress, KeyCode::Up), Some(Action::Undo));
        assert_eq!(
            map_key(Phase::InProgress, KeyCode::Char('r')),
            Some(Action::Restart)
        );
        assert_eq!(map_key(Phase::InProgress, KeyCode::Char('1')), None);
    }

    #[test]
    fn test_game_over_keys() {
        assert_eq!(
            map_key(Phase::Over, KeyCode::Char('s')),
            Some(Action::ShowWinningMoves)
        );
        assert_eq!(map_key(Phase::Over, KeyCode::Enter), Some(Action::Confirm));
        assert_eq!(
            map_key(Phase::Over, KeyCode::Char('r')),
            Some(Action::Restart)
        );
        assert_eq!(map_key(Phase::Over, KeyCode::Left), None);
    }

    #[test]
    fn test_quit_key() {
        let mut config = AppConfig::default();
        config.computer.delay_ms = 0;
        let mut app = App::new(&config);
        app.handle_key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE));
        assert_eq!(app.controller.phase(), Phase::InProgress);
        assert!(!app.should_quit);
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);
    }
}
