//! Polybar formatting tags.
//!
//! See the `%{A}` and `%{u}` tags in polybar's formatting documentation.

use std::fmt;

/// Mouse button a polybar action reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left click
    Left,
    /// Right click
    Right,
    /// Scroll wheel up
    ScrollUp,
    /// Scroll wheel down
    ScrollDown,
}

impl MouseButton {
    /// Index polybar uses for this button in `%{A<n>:...}`.
    pub fn index(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 3,
            Self::ScrollUp => 4,
            Self::ScrollDown => 5,
        }
    }
}

/// Escape `command` for use inside an action tag.
///
/// Colons terminate the command in polybar's syntax.
pub fn escape_command(command: &str) -> String {
    command.replace(':', "\\:")
}

/// Escape `text` for display, so a literal `%` never opens a tag.
pub fn escape_text(text: &str) -> String {
    text.replace('%', "%%")
}

/// Content that runs `command` when clicked or scrolled with `button`.
///
/// Actions nest: wrapping one action in another binds several buttons to
/// the same content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    button: MouseButton,
    command: String,
    content: String,
}

impl Action {
    /// Bind `command` to `button` over `content`.
    pub fn new(
        button: MouseButton,
        content: impl fmt::Display,
        command: impl Into<String>,
    ) -> Self {
        Self {
            button,
            command: command.into(),
            content: content.to_string(),
        }
    }

    /// Bind another `button` to this action's content.
    pub fn and(self, button: MouseButton, command: impl Into<String>) -> Self {
        Self::new(button, self, command)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "%{{A{}:{}:}}{}%{{A}}",
            self.button.index(),
            escape_command(&self.command),
            self.content
        )
    }
}

/// Text with a colored underline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Underline<'a> {
    /// Hex color such as `#ff0000`
    pub color: &'a str,
    /// Underlined text
    pub text: &'a str,
}

impl fmt::Display for Underline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{{u{}}}%{{+u}}{}%{{-u}}", self.color, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_wraps_content() {
        let action = Action::new(MouseButton::Left, "⏭", "mediabar next");
        assert_eq!(action.to_string(), "%{A1:mediabar next:}⏭%{A}");
    }

    #[test]
    fn colons_in_commands_are_escaped() {
        let action = Action::new(MouseButton::Left, "x", "rofi -theme a:b");
        assert_eq!(action.to_string(), "%{A1:rofi -theme a\\:b:}x%{A}");
    }

    #[test]
    fn percent_signs_in_text_are_doubled() {
        assert_eq!(escape_text("100% %{F#f00}"), "100%% %%{F#f00}");
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn nested_actions_bind_two_buttons() {
        let action = Action::new(MouseButton::Left, "⏮", "mediabar prev")
            .and(MouseButton::Right, "mediabar position 0");

        assert_eq!(
            action.to_string(),
            "%{A3:mediabar position 0:}%{A1:mediabar prev:}⏮%{A}%{A}"
        );
    }

    #[test]
    fn underline_span() {
        let span = Underline {
            color: "#ff0000",
            text: "oops",
        };
        assert_eq!(span.to_string(), "%{u#ff0000}%{+u}oops%{-u}");
    }
}
