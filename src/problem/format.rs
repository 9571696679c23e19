use std::path::Path;

use speclint::{language::LoadingError, linting::Finding, parsing};

use super::messages::explain;
use super::{Render, Style};

/// Format a finding as a single line, exactly the finding's own message.
pub fn concise_finding(finding: &Finding, renderer: &impl Render) -> String {
    match finding.line {
        Some(line) => format!(
            "{}: {}",
            renderer.style(Style::LineNumber, &line.to_string()),
            renderer.style(Style::Problem, &finding.problem.to_string())
        ),
        None => renderer.style(Style::Problem, &finding.problem.to_string()),
    }
}

/// Format a finding with the offending source line, if it has one, and an
/// explanation of the problem.
pub fn full_finding(finding: &Finding, filename: &Path, source: &str, renderer: &impl Render) -> String {
    let details = explain(&finding.problem);

    let Some(line) = finding.line else {
        return format!(
            "{}: {} {}\n\n{}",
            renderer.style(Style::Error, "error"),
            renderer.style(Style::Filename, &filename.to_string_lossy()),
            renderer.style(Style::Problem, &finding.problem.to_string()),
            details
        );
    };

    let code = parsing::lines(source)
        .nth(line - 1)
        .unwrap_or("?");
    let width = 3.max(
        line.to_string()
            .len(),
    );
    let number = format!("{:>width$}", line);

    format!(
        r#"
{}: {}:{} {}

{:width$} {}
{} {} {}
{:width$} {} {}

{}
        "#,
        renderer.style(Style::Error, "error"),
        renderer.style(Style::Filename, &filename.to_string_lossy()),
        line,
        renderer.style(Style::Problem, &finding.problem.to_string()),
        ' ',
        renderer.style(Style::Gutter, "|"),
        renderer.style(Style::LineNumber, &number),
        renderer.style(Style::Gutter, "|"),
        code,
        ' ',
        renderer.style(Style::Gutter, "|"),
        renderer.style(Style::Caret, &"^".repeat(code.trim_end().chars().count().max(1))),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError, renderer: &impl Render) -> String {
    format!(
        "{}: {}: {}",
        renderer.style(Style::Error, "error"),
        renderer.style(
            Style::Filename,
            &error
                .filename
                .to_string_lossy()
        ),
        error
    )
}
