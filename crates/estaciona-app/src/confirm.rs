//! Two-step confirm gesture for the send button
//!
//! First activation arms the gesture and opens a 5-second hint window;
//! the second activation confirms. The hint hides when its window ends,
//! but the armed state stays until the user confirms or changes the
//! vehicle/duration selection. The window is a deadline value, not a
//! deferred callback, so there is nothing to cancel on teardown.

use std::time::{Duration, Instant};

/// How long the "press again to confirm" hint stays visible.
pub const HINT_WINDOW: Duration = Duration::from_secs(5);

/// Outcome of one button activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// First press: armed, nothing sent yet.
    Armed,
    /// Second press while armed: perform the send.
    Confirmed,
}

/// State of the two-step confirm gesture.
#[derive(Debug, Default)]
pub struct ConfirmGesture {
    armed: bool,
    hint_deadline: Option<Instant>,
}

impl ConfirmGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a button press at `now`.
    pub fn activate(&mut self, now: Instant) -> Activation {
        if self.armed {
            self.reset();
            Activation::Confirmed
        } else {
            self.armed = true;
            self.hint_deadline = Some(now + HINT_WINDOW);
            Activation::Armed
        }
    }

    /// Whether the gesture is waiting for its confirming press.
    pub fn armed(&self) -> bool {
        self.armed
    }

    /// Whether the confirmation hint should be shown at `now`.
    pub fn hint_visible(&self, now: Instant) -> bool {
        self.armed && self.hint_deadline.is_some_and(|deadline| now < deadline)
    }

    /// Disarm. Called when the vehicle or duration selection changes, or
    /// when the screen goes away.
    pub fn reset(&mut self) {
        self.armed = false;
        self.hint_deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_activation_arms_without_sending() {
        let mut gesture = ConfirmGesture::new();
        let now = Instant::now();

        assert_eq!(gesture.activate(now), Activation::Armed);
        assert!(gesture.armed());
        assert!(gesture.hint_visible(now));
    }

    #[test]
    fn second_activation_confirms_exactly_once() {
        let mut gesture = ConfirmGesture::new();
        let now = Instant::now();

        assert_eq!(gesture.activate(now), Activation::Armed);
        assert_eq!(gesture.activate(now), Activation::Confirmed);
        // Gesture is disarmed again: a third press re-arms instead of sending
        assert_eq!(gesture.activate(now), Activation::Armed);
    }

    #[test]
    fn selection_change_resets_the_gesture() {
        let mut gesture = ConfirmGesture::new();
        let now = Instant::now();

        gesture.activate(now);
        gesture.reset();
        assert!(!gesture.armed());
        // Two fresh activations are needed after a reset
        assert_eq!(gesture.activate(now), Activation::Armed);
        assert_eq!(gesture.activate(now), Activation::Confirmed);
    }

    #[test]
    fn hint_hides_after_its_window_but_armed_state_persists() {
        let mut gesture = ConfirmGesture::new();
        let now = Instant::now();

        gesture.activate(now);
        let after_window = now + HINT_WINDOW + Duration::from_secs(1);

        assert!(!gesture.hint_visible(after_window));
        assert!(gesture.armed());
        // The late second press still confirms
        assert_eq!(gesture.activate(after_window), Activation::Confirmed);
    }

    #[test]
    fn hint_is_not_visible_when_disarmed() {
        let gesture = ConfirmGesture::new();
        assert!(!gesture.hint_visible(Instant::now()));
    }
}
