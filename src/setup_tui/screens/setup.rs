//! Credential setup screen
//!
//! The screen owns one [`SetupController`] and one [`FormField`] per
//! credential. Each edit of a field is forwarded to the controller with the
//! field's full new value; the controller decides whether Done is enabled.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::debug;

use crate::form::{FormEvent, SetupController, SetupField, SetupOutcome};
use crate::setup_tui::{
    components::{DoneButton, FormField, StatusDisplay},
    traits::{FormHandler, Screen, ScreenAction},
    ui::Styles,
};

/// Focus stops: the four fields followed by the Done control
const DONE_STOP: usize = SetupField::ALL.len();

pub struct SetupScreen {
    controller: SetupController,
    pub fields: Vec<FormField>,
    pub current_field: usize,
    pub mask_secrets: bool,
    status: Rc<RefCell<StatusDisplay>>,
}

impl SetupScreen {
    pub fn new(controller: SetupController, mask_secrets: bool) -> Self {
        let fields = SetupField::ALL
            .iter()
            .map(|field| {
                FormField::new(field.label())
                    .with_placeholder(field.placeholder())
                    .with_value(controller.state().value(*field))
                    .secret(field.is_secret())
            })
            .collect();

        let mut screen = Self {
            controller,
            fields,
            current_field: 0,
            mask_secrets,
            status: Rc::new(RefCell::new(StatusDisplay::new().with_timestamps())),
        };
        screen.subscribe_status();
        screen.update_focus();
        screen
    }

    /// Keep the status line in step with controller notifications
    fn subscribe_status(&mut self) {
        let status = Rc::clone(&self.status);
        self.controller.subscribe(move |event, state| {
            let mut status = status.borrow_mut();
            match event {
                FormEvent::FieldChanged(_) if !state.done_enabled() => {
                    status.set_info(format!(
                        "{} of {} fields filled",
                        state.filled_count(),
                        SetupField::ALL.len()
                    ));
                }
                FormEvent::DoneEnabledChanged(true) => {
                    status.set_success("All fields filled, select Done to finish".to_string());
                }
                FormEvent::Confirmed => status.set_success("Credentials captured".to_string()),
                FormEvent::Cancelled => status.set_info("Setup cancelled".to_string()),
                _ => {}
            }
        });
    }

    pub fn controller(&self) -> &SetupController {
        &self.controller
    }

    pub fn outcome(&self) -> Option<&SetupOutcome> {
        self.controller.outcome()
    }

    pub fn status(&self) -> std::cell::Ref<'_, StatusDisplay> {
        self.status.borrow()
    }

    pub fn is_done_focused(&self) -> bool {
        self.current_field == DONE_STOP
    }

    fn focused_setup_field(&self) -> Option<SetupField> {
        SetupField::from_index(self.current_field)
    }

    fn update_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focus(i == self.current_field);
        }
    }

    /// Apply an edit to the focused field and report it to the controller
    fn edit_current<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut FormField) -> bool,
    {
        let Some(setup_field) = self.focused_setup_field() else {
            return;
        };
        let field = &mut self.fields[setup_field.index()];
        if edit(field) {
            let value = field.value.clone();
            self.controller.on_field_changed(setup_field, value);
        }
    }

    fn move_cursor<F>(&mut self, movement: F)
    where
        F: FnOnce(&mut FormField),
    {
        if let Some(setup_field) = self.focused_setup_field() {
            movement(&mut self.fields[setup_field.index()]);
        }
    }

    fn confirm(&mut self) -> ScreenAction {
        match self.controller.on_confirm() {
            Some(_) => ScreenAction::Close,
            None => ScreenAction::None,
        }
    }

    fn draw_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new("Notes Sync Setup")
            .style(Styles::title())
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn draw_instructions(&self, f: &mut Frame, area: Rect) {
        let instructions = vec![
            Line::from("Tab/↓: Next | Shift+Tab/↑: Previous | Enter: Next field / Done"),
            Line::from("Ctrl+S: Done | Ctrl+U: Clear field | Ctrl+R: Show/hide secrets | F1: Help | Esc: Cancel"),
        ];

        let widget = Paragraph::new(instructions).style(Styles::info()).block(
            Block::default()
                .title("Keys")
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );
        f.render_widget(widget, area);
    }
}

impl FormHandler for SetupScreen {
    fn get_current_field(&self) -> usize {
        self.current_field
    }

    fn set_current_field(&mut self, field: usize) {
        if field < self.get_field_count() {
            self.current_field = field;
            self.update_focus();
        }
    }

    fn get_field_count(&self) -> usize {
        DONE_STOP + 1
    }

    fn handle_char_input(&mut self, c: char) {
        self.edit_current(|field| field.insert_char(c));
    }

    fn handle_backspace(&mut self) {
        self.edit_current(FormField::delete_char);
    }

    fn handle_delete(&mut self) {
        self.edit_current(FormField::delete_char_forward);
    }

    fn submit(&mut self) -> ScreenAction {
        if self.is_done_focused() {
            self.confirm()
        } else {
            // Finishing a field moves on, like ending editing on a mobile form
            self.next_field();
            ScreenAction::None
        }
    }
}

impl Screen for SetupScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let mut constraints = vec![Constraint::Length(3)];
        constraints.extend(SetupField::ALL.iter().map(|_| Constraint::Length(3)));
        constraints.extend([
            Constraint::Length(3), // Done
            Constraint::Length(3), // Status
            Constraint::Min(0),
            Constraint::Length(4), // Instructions
        ]);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.draw_title(f, chunks[0]);

        for (i, field) in self.fields.iter().enumerate() {
            field.render(f, chunks[i + 1], self.mask_secrets);
        }

        DoneButton::render(
            f,
            chunks[DONE_STOP + 1],
            self.controller.done_enabled(),
            self.is_done_focused(),
        );
        self.status.borrow().render(f, chunks[DONE_STOP + 2]);
        self.draw_instructions(f, chunks[DONE_STOP + 4]);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<ScreenAction> {
        if self.controller.is_closed() {
            return Ok(ScreenAction::Close);
        }

        // AltGr arrives as Ctrl+Alt on Windows and produces plain characters
        let alt_gr = key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT);

        if key.modifiers.contains(KeyModifiers::CONTROL) && !alt_gr {
            match key.code {
                KeyCode::Char('s') => return Ok(self.confirm()),
                KeyCode::Char('u') => self.edit_current(FormField::clear),
                KeyCode::Char('r') => {
                    self.mask_secrets = !self.mask_secrets;
                    debug!("Secret masking: {}", self.mask_secrets);
                }
                KeyCode::Char('c') => {
                    self.controller.on_cancel();
                    return Ok(ScreenAction::Close);
                }
                _ => {}
            }
            return Ok(ScreenAction::None);
        }

        match key.code {
            KeyCode::Esc => {
                self.controller.on_cancel();
                return Ok(ScreenAction::Close);
            }
            KeyCode::F(1) => return Ok(ScreenAction::ToggleHelp),
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.previous_field(),
            KeyCode::Enter => return Ok(self.submit()),
            KeyCode::Char(c) => self.handle_char_input(c),
            KeyCode::Backspace => self.handle_backspace(),
            KeyCode::Delete => self.handle_delete(),
            KeyCode::Left => self.move_cursor(FormField::move_cursor_left),
            KeyCode::Right => self.move_cursor(FormField::move_cursor_right),
            KeyCode::Home => self.move_cursor(FormField::move_cursor_to_start),
            KeyCode::End => self.move_cursor(FormField::move_cursor_to_end),
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn on_enter(&mut self) {
        let state = self.controller.state();
        if state.done_enabled() {
            self.status
                .borrow_mut()
                .set_success("All fields filled, select Done to finish".to_string());
        } else {
            self.status.borrow_mut().set_info(format!(
                "{} of {} fields filled",
                state.filled_count(),
                SetupField::ALL.len()
            ));
        }
    }
}
