//! Main TUI application state and loop

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Frame, Terminal};
use tracing::info;

use super::screens::{HelpScreen, SetupScreen};
use super::traits::{Screen, ScreenAction};
use crate::config::SetupConfig;
use crate::form::{SetupController, SetupOutcome};

/// Main TUI application state
pub struct App {
    pub setup: SetupScreen,
    pub show_help_popup: bool,
    pub should_quit: bool,
}

impl App {
    /// Open the setup screen with the configured prefill and masking
    pub fn new(config: &SetupConfig) -> Self {
        let controller = SetupController::with_state(config.prefill.to_state());
        let mut setup = SetupScreen::new(controller, config.mask_secrets);
        setup.on_enter();

        Self {
            setup,
            show_help_popup: false,
            should_quit: false,
        }
    }

    /// Run the main application loop until the screen closes
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<SetupOutcome> {
        info!("Setup screen opened");

        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = crossterm::event::read()? {
                // Ignore key release/repeat reports on platforms that send them
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key)?;
                }
            }
        }

        Ok(self.outcome())
    }

    /// Handle keyboard input events
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        let is_ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);

        if self.show_help_popup && !is_ctrl_c {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                self.show_help_popup = false;
            }
            return Ok(());
        }

        match self.setup.handle_key_event(key)? {
            ScreenAction::Close => self.should_quit = true,
            ScreenAction::ToggleHelp => self.show_help_popup = !self.show_help_popup,
            ScreenAction::None => {}
        }
        Ok(())
    }

    /// Outcome of the screen; an unclosed screen counts as cancelled
    pub fn outcome(&self) -> SetupOutcome {
        self.setup
            .outcome()
            .cloned()
            .unwrap_or(SetupOutcome::Cancelled)
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let area = f.size();
        self.setup.draw(f, area);

        if self.show_help_popup {
            HelpScreen::render(f, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Prefill;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn prefilled_config() -> SetupConfig {
        SetupConfig {
            prefill: Prefill {
                access_key: Some("AKIAVISIBLE".to_string()),
                secret_key: Some("hunter2".to_string()),
                account_id: Some("acct-42".to_string()),
                crypt_key: Some("cryptic".to_string()),
            },
            ..SetupConfig::default()
        }
    }

    #[test]
    fn test_draw_shows_form() {
        let mut app = App::new(&SetupConfig::default());
        let text = screen_text(&mut app);

        assert!(text.contains("Notes Sync Setup"));
        assert!(text.contains("Access Key"));
        assert!(text.contains("Secret Key"));
        assert!(text.contains("Account ID"));
        assert!(text.contains("Encryption Key"));
        assert!(text.contains("[ Done ]"));
        assert!(text.contains("0 of 4 fields filled"));
    }

    #[test]
    fn test_draw_masks_secrets() {
        let mut app = App::new(&prefilled_config());
        let text = screen_text(&mut app);

        assert!(text.contains("AKIAVISIBLE"));
        assert!(text.contains("acct-42"));
        assert!(!text.contains("hunter2"));
        assert!(!text.contains("cryptic"));
        assert!(text.contains("•••••••"));
    }

    #[test]
    fn test_draw_reveals_secrets_when_unmasked() {
        let config = SetupConfig {
            mask_secrets: false,
            ..prefilled_config()
        };
        let mut app = App::new(&config);
        let text = screen_text(&mut app);

        assert!(text.contains("hunter2"));
        assert!(text.contains("Secret Key (visible)"));
    }

    #[test]
    fn test_help_popup_toggles_and_swallows_keys() {
        let mut app = App::new(&SetupConfig::default());
        app.handle_key_event(key(KeyCode::F(1))).unwrap();
        assert!(app.show_help_popup);
        assert!(screen_text(&mut app).contains("Connecting your notes"));

        // Esc closes the popup instead of cancelling the form
        app.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert!(!app.show_help_popup);
        assert!(!app.should_quit);

        app.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit);
        assert_eq!(app.outcome(), SetupOutcome::Cancelled);
    }

    #[test]
    fn test_ctrl_c_cancels_from_help_popup() {
        let mut app = App::new(&SetupConfig::default());
        app.handle_key_event(key(KeyCode::F(1))).unwrap();
        assert!(app.show_help_popup);

        // Plain keys are still swallowed by the popup
        app.handle_key_event(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.setup.controller().state().filled_count(), 0);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
        assert_eq!(app.outcome(), SetupOutcome::Cancelled);
    }

    #[test]
    fn test_prefilled_form_confirms() {
        let mut app = App::new(&prefilled_config());
        for _ in 0..4 {
            app.handle_key_event(key(KeyCode::Tab)).unwrap();
        }
        app.handle_key_event(key(KeyCode::Enter)).unwrap();

        assert!(app.should_quit);
        match app.outcome() {
            SetupOutcome::Confirmed(credentials) => {
                assert_eq!(credentials.secret_key, "hunter2")
            }
            SetupOutcome::Cancelled => panic!("expected confirmation"),
        }
    }
}
