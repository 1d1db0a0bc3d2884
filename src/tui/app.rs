//! Application state for the Purrfect Saver window
//!
//! The App struct holds the reward counters and everything the form needs
//! for rendering and handling events.

use ratatui::layout::Rect;

use crate::rewards::RewardState;

use super::widgets::TextInput;

/// Shown when a submission cannot be read as an amount
pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid number!";

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Amount,
    SaveButton,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::SaveButton,
            Self::SaveButton => Self::Amount,
        }
    }
}

/// Result of the last submission, shown under the button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Gained(u64),
    Invalid,
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::Gained(gain) => format!("You gained {} XP!", gain),
            Feedback::Invalid => INVALID_AMOUNT_MESSAGE.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Feedback::Invalid)
    }
}

/// Main application state
pub struct App {
    /// Counters; replaced wholesale after each successful submission
    pub rewards: RewardState,

    /// The amount field
    pub amount: TextInput,

    pub focus: Focus,

    pub feedback: Option<Feedback>,

    pub should_quit: bool,

    /// Where the field was last drawn, for mouse hits
    pub amount_area: Option<Rect>,

    /// Where the button was last drawn, for mouse hits
    pub button_area: Option<Rect>,
}

impl App {
    pub fn new() -> Self {
        Self {
            rewards: RewardState::new(),
            amount: TextInput::new()
                .label("Amount saved")
                .placeholder("type a whole number"),
            focus: Focus::default(),
            feedback: None,
            should_quit: false,
            amount_area: None,
            button_area: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Submit the field's content
    ///
    /// On success the counters advance and the field is cleared. On failure
    /// the counters and the field are left as they were.
    pub fn submit(&mut self) {
        match self.rewards.submit(self.amount.value()) {
            Ok(submission) => {
                self.rewards = submission.state;
                self.feedback = Some(Feedback::Gained(submission.gain));
                self.amount.clear();
            }
            Err(_) => {
                self.feedback = Some(Feedback::Invalid);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.amount.insert(c);
        }
    }

    #[test]
    fn test_submit_valid_amount() {
        let mut app = App::new();
        type_text(&mut app, "25");

        app.submit();

        assert_eq!(app.rewards.points(), 5);
        assert_eq!(app.rewards.streak(), 1);
        assert_eq!(app.feedback, Some(Feedback::Gained(5)));
        assert_eq!(app.feedback.as_ref().unwrap().message(), "You gained 5 XP!");
        assert_eq!(app.amount.value(), "");
    }

    #[test]
    fn test_submit_invalid_amount_keeps_state() {
        let mut app = App::new();
        type_text(&mut app, "abc");

        app.submit();

        assert_eq!(app.rewards, RewardState::new());
        assert!(app.feedback.as_ref().unwrap().is_error());
        assert_eq!(app.amount.value(), "abc");
    }

    #[test]
    fn test_focus_cycles() {
        let mut app = App::new();
        assert_eq!(app.focus, Focus::Amount);
        app.next_focus();
        assert_eq!(app.focus, Focus::SaveButton);
        app.next_focus();
        assert_eq!(app.focus, Focus::Amount);
    }
}
