use owo_colors::OwoColorize;

/// The kinds of fragment that appear in a report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Style {
    Error,
    Filename,
    Gutter,
    LineNumber,
    Caret,
    Problem,
    Success,
}

pub trait Render {
    /// Apply styling to content of the given kind
    fn style(&self, style: Style, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _style: Style, content: &str) -> String {
        content.to_string()
    }
}

/// Embellish fragments with ANSI escapes for terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, style: Style, content: &str) -> String {
        match style {
            Style::Error => content
                .bright_red()
                .to_string(),
            Style::Filename => content
                .bold()
                .to_string(),
            Style::Gutter => content
                .bright_blue()
                .to_string(),
            Style::LineNumber => content
                .bright_blue()
                .to_string(),
            Style::Caret => content
                .bright_red()
                .to_string(),
            Style::Problem => content
                .bold()
                .to_string(),
            Style::Success => content
                .bright_green()
                .to_string(),
        }
    }
}
