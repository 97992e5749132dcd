//! Headless key scripts
//!
//! A script is a comma separated list of tokens, each turned into one key
//! event (or several for `text:`), fed to the same [`App`] the terminal uses.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::error::{Result, SetupError};
use crate::form::SetupOutcome;
use crate::setup_tui::App;

pub const VALID_TOKENS: &str = "tab, backtab, up, down, enter, esc, backspace, delete, left, right, \
home, end, ctrl-u, ctrl-r, ctrl-s, ctrl-c, f1, comma, space, text:<chars>";

/// Turn a script into key events
pub fn parse_script(raw: &str) -> Result<Vec<KeyEvent>> {
    let mut keys = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        // Text keeps its case; named keys do not
        if let Some(text) = token.strip_prefix("text:") {
            keys.extend(text.chars().map(|c| plain(KeyCode::Char(c))));
            continue;
        }

        let key = match token.to_ascii_lowercase().as_str() {
            "tab" => plain(KeyCode::Tab),
            "backtab" => KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            "up" => plain(KeyCode::Up),
            "down" => plain(KeyCode::Down),
            "enter" => plain(KeyCode::Enter),
            "esc" => plain(KeyCode::Esc),
            "backspace" => plain(KeyCode::Backspace),
            "delete" => plain(KeyCode::Delete),
            "left" => plain(KeyCode::Left),
            "right" => plain(KeyCode::Right),
            "home" => plain(KeyCode::Home),
            "end" => plain(KeyCode::End),
            "ctrl-u" => ctrl('u'),
            "ctrl-r" => ctrl('r'),
            "ctrl-s" => ctrl('s'),
            "ctrl-c" => ctrl('c'),
            "f1" => plain(KeyCode::F(1)),
            "comma" => plain(KeyCode::Char(',')),
            "space" => plain(KeyCode::Char(' ')),
            _ => return Err(SetupError::InvalidScriptToken(token.to_string())),
        };
        keys.push(key);
    }
    Ok(keys)
}

fn plain(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Feed keys to the app until the screen closes
pub fn run_script(app: &mut App, keys: Vec<KeyEvent>) -> Result<SetupOutcome> {
    info!("Running setup from a key script ({} keys)", keys.len());

    for key in keys {
        if app.should_quit {
            debug!("Screen closed, ignoring remaining script keys");
            break;
        }
        app.handle_key_event(key)?;
    }

    if !app.should_quit {
        return Err(SetupError::ScriptExhausted);
    }
    Ok(app.outcome())
}
