//! Setup form controller
//!
//! Owns the [`SetupState`] record for the lifetime of one screen, keeps the
//! derived "Done" flag current after every edit and notifies registered
//! callbacks. Presentation layers subscribe instead of subclassing.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::field::SetupField;
use super::state::{redact, SetupState};

/// Notification delivered to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// One field received a new value
    FieldChanged(SetupField),
    /// The derived Done flag flipped
    DoneEnabledChanged(bool),
    /// The form was confirmed and the screen closed
    Confirmed,
    /// The form was dismissed without handing over values
    Cancelled,
}

/// Values handed to whoever presented the screen
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
    pub account_id: String,
    pub crypt_key: String,
}

impl Credentials {
    fn from_state(state: &SetupState) -> Self {
        Self {
            access_key: state.value(SetupField::AccessKey).to_string(),
            secret_key: state.value(SetupField::SecretKey).to_string(),
            account_id: state.value(SetupField::AccountId).to_string(),
            crypt_key: state.value(SetupField::CryptKey).to_string(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &redact(&self.secret_key))
            .field("account_id", &self.account_id)
            .field("crypt_key", &redact(&self.crypt_key))
            .finish()
    }
}

/// How the screen was closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    Confirmed(Credentials),
    Cancelled,
}

/// Handle returned by [`SetupController::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&FormEvent, &SetupState)>;

pub struct SetupController {
    state: SetupState,
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_subscription: u64,
    outcome: Option<SetupOutcome>,
}

impl Default for SetupController {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupController {
    pub fn new() -> Self {
        Self::with_state(SetupState::new())
    }

    pub fn with_state(state: SetupState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_subscription: 0,
            outcome: None,
        }
    }

    pub fn state(&self) -> &SetupState {
        &self.state
    }

    pub fn done_enabled(&self) -> bool {
        self.state.done_enabled()
    }

    pub fn is_closed(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<&SetupOutcome> {
        self.outcome.as_ref()
    }

    /// Register a callback for every subsequent [`FormEvent`]
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&FormEvent, &SetupState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Store a new value for `field` and recompute the Done flag
    pub fn on_field_changed(&mut self, field: SetupField, new_value: impl Into<String>) {
        if self.is_closed() {
            warn!("Ignoring edit of {} after the setup screen closed", field);
            return;
        }

        let new_value = new_value.into();
        let was_enabled = self.state.done_enabled();
        debug!("{} changed ({} chars)", field, new_value.chars().count());

        let now_enabled = self.state.set(field, new_value);
        self.notify(FormEvent::FieldChanged(field));

        if now_enabled != was_enabled {
            debug!("Done enabled: {}", now_enabled);
            self.notify(FormEvent::DoneEnabledChanged(now_enabled));
        }
    }

    /// Close the screen and hand over the captured values.
    ///
    /// Does nothing and returns `None` while Done is disabled or once the
    /// screen is already closed.
    pub fn on_confirm(&mut self) -> Option<Credentials> {
        if self.is_closed() {
            return None;
        }
        if !self.state.done_enabled() {
            debug!(
                "Confirm ignored, {} of {} fields filled",
                self.state.filled_count(),
                SetupField::ALL.len()
            );
            return None;
        }

        let credentials = Credentials::from_state(&self.state);
        self.outcome = Some(SetupOutcome::Confirmed(credentials.clone()));
        info!("Setup form confirmed");
        self.notify(FormEvent::Confirmed);
        Some(credentials)
    }

    /// Close the screen without handing over values
    pub fn on_cancel(&mut self) {
        if self.is_closed() {
            return;
        }
        self.outcome = Some(SetupOutcome::Cancelled);
        info!("Setup form cancelled");
        self.notify(FormEvent::Cancelled);
    }

    fn notify(&mut self, event: FormEvent) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&event, &self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn filled_controller() -> SetupController {
        let mut controller = SetupController::new();
        controller.on_field_changed(SetupField::AccessKey, "a");
        controller.on_field_changed(SetupField::SecretKey, "b");
        controller.on_field_changed(SetupField::AccountId, "c");
        controller.on_field_changed(SetupField::CryptKey, "d");
        controller
    }

    fn recorder(controller: &mut SetupController) -> Rc<RefCell<Vec<FormEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        controller.subscribe(move |event, _| sink.borrow_mut().push(*event));
        events
    }

    #[test]
    fn test_enables_after_last_field() {
        let mut controller = SetupController::new();
        controller.on_field_changed(SetupField::AccessKey, "a");
        controller.on_field_changed(SetupField::SecretKey, "b");
        controller.on_field_changed(SetupField::AccountId, "c");
        assert!(!controller.done_enabled());
        controller.on_field_changed(SetupField::CryptKey, "d");
        assert!(controller.done_enabled());
    }

    #[test]
    fn test_clearing_account_id_disables() {
        let mut controller = filled_controller();
        assert!(controller.done_enabled());
        controller.on_field_changed(SetupField::AccountId, "");
        assert!(!controller.done_enabled());
    }

    #[test]
    fn test_confirm_is_noop_while_disabled() {
        let mut controller = SetupController::new();
        controller.on_field_changed(SetupField::AccessKey, "a");
        let events = recorder(&mut controller);

        assert_eq!(controller.on_confirm(), None);
        assert!(!controller.is_closed());
        assert!(controller.outcome().is_none());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_confirm_returns_values_and_closes() {
        let mut controller = filled_controller();
        let credentials = controller.on_confirm().unwrap();

        assert_eq!(credentials.access_key, "a");
        assert_eq!(credentials.secret_key, "b");
        assert_eq!(credentials.account_id, "c");
        assert_eq!(credentials.crypt_key, "d");
        assert!(controller.is_closed());
        assert_eq!(
            controller.outcome(),
            Some(&SetupOutcome::Confirmed(credentials))
        );
        // Second confirm does nothing
        assert_eq!(controller.on_confirm(), None);
    }

    #[test]
    fn test_subscribers_see_flag_transitions() {
        let mut controller = SetupController::new();
        let events = recorder(&mut controller);

        controller.on_field_changed(SetupField::AccessKey, "a");
        controller.on_field_changed(SetupField::SecretKey, "b");
        controller.on_field_changed(SetupField::AccountId, "c");
        controller.on_field_changed(SetupField::CryptKey, "d");
        controller.on_field_changed(SetupField::CryptKey, "de");
        controller.on_field_changed(SetupField::AccessKey, "");

        assert_eq!(
            *events.borrow(),
            vec![
                FormEvent::FieldChanged(SetupField::AccessKey),
                FormEvent::FieldChanged(SetupField::SecretKey),
                FormEvent::FieldChanged(SetupField::AccountId),
                FormEvent::FieldChanged(SetupField::CryptKey),
                FormEvent::DoneEnabledChanged(true),
                FormEvent::FieldChanged(SetupField::CryptKey),
                FormEvent::FieldChanged(SetupField::AccessKey),
                FormEvent::DoneEnabledChanged(false),
            ]
        );
    }

    #[test]
    fn test_subscriber_receives_current_state() {
        let mut controller = SetupController::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.subscribe(move |_, state| sink.borrow_mut().push(state.filled_count()));

        controller.on_field_changed(SetupField::AccountId, "c");
        controller.on_field_changed(SetupField::AccessKey, "a");

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut controller = SetupController::new();
        let events = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&events);
        let id = controller.subscribe(move |_, _| *sink.borrow_mut() += 1);

        controller.on_field_changed(SetupField::AccessKey, "a");
        assert!(controller.unsubscribe(id));
        assert!(!controller.unsubscribe(id));
        controller.on_field_changed(SetupField::AccessKey, "ab");

        assert_eq!(*events.borrow(), 1);
    }

    #[test]
    fn test_cancel_closes_without_values() {
        let mut controller = filled_controller();
        let events = recorder(&mut controller);

        controller.on_cancel();
        controller.on_cancel();

        assert_eq!(controller.outcome(), Some(&SetupOutcome::Cancelled));
        assert_eq!(controller.on_confirm(), None);
        assert_eq!(*events.borrow(), vec![FormEvent::Cancelled]);
    }

    #[test]
    fn test_edits_after_close_are_ignored() {
        let mut controller = filled_controller();
        controller.on_confirm();
        controller.on_field_changed(SetupField::AccessKey, "");
        assert_eq!(controller.state().value(SetupField::AccessKey), "a");
    }

    #[test]
    fn test_prefilled_state_is_respected() {
        let controller = SetupController::with_state(SetupState::prefilled("a", "b", "c", "d"));
        assert!(controller.done_enabled());
    }

    #[test]
    fn test_credentials_debug_redacts_secrets() {
        let mut controller = SetupController::new();
        controller.on_field_changed(SetupField::AccessKey, "AKIA");
        controller.on_field_changed(SetupField::SecretKey, "topsecret");
        controller.on_field_changed(SetupField::AccountId, "me");
        controller.on_field_changed(SetupField::CryptKey, "hunter2");
        let credentials = controller.on_confirm().unwrap();

        let debug = format!("{:?}", credentials);
        assert!(debug.contains("AKIA"));
        assert!(!debug.contains("topsecret"));
        assert!(!debug.contains("hunter2"));
    }
}
