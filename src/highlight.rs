use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// Never emits escape codes.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    /// `Some(false)` disables colour, anything else defers to terminal detection.
    pub fn with_color(enabled: Option<bool>) -> Self {
        match enabled {
            Some(false) => Self::plain(),
            _ => Self::new(),
        }
    }

    fn is_plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colours the leading command token, cyan when known and red otherwise.
    /// Whitespace is kept as typed so the cursor position stays valid.
    pub fn highlight_command(&self, input: &str, known: bool) -> String {
        if self.is_plain() {
            return input.to_string();
        }

        let start = input.len() - input.trim_start().len();
        let end = input[start..]
            .find(char::is_whitespace)
            .map_or(input.len(), |pos| start + pos);
        if start == end {
            return input.to_string();
        }

        let command_style = if known {
            Style::builder().foreground(Color::Cyan).bold().build()
        } else {
            Style::builder().foreground(Color::Red).build()
        };

        format!(
            "{}{}{}",
            &input[..start],
            input[start..end].style(command_style),
            &input[end..]
        )
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if self.is_plain() {
            return error.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        error.style(error_style).to_string()
    }

    pub fn highlight_success(&self, message: &str) -> String {
        if self.is_plain() {
            return message.to_string();
        }

        let success_style = Style::builder()
            .foreground(Color::Green)
            .build();

        message.style(success_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if self.is_plain() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        hint.style(hint_style).to_string()
    }
}
