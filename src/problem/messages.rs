use speclint::linting::Problem;

/// A longer explanation of a problem, for the detailed report.
pub fn explain(problem: &Problem) -> String {
    match problem {
        Problem::DuplicateBegin { id } => format!(
            "The block identifier {} was already opened earlier in this document. Each block should carry a distinct identifier.",
            id
        ),
        Problem::EndWithoutBegin { .. } => r#"
This END marker has no open BEGIN to close. Either the BEGIN is missing,
or an earlier END already closed it.
            "#
        .trim_ascii()
        .to_string(),
        Problem::MismatchedEnd { begin_line, .. } => format!(
            r#"
Blocks must nest strictly. The nearest open block is the one that began on
line {}, so this END must carry the same identifier.
            "#,
            begin_line
        )
        .trim_ascii()
        .to_string(),
        Problem::UnclosedBegin { begin } => format!(
            "The document ends without an END marker for {}.",
            begin
        ),
        Problem::UnresolvedBlock { .. } => r#"
A full reference must name a block whose BEGIN marker appears in this
document, written exactly as the identifier in that marker.
            "#
        .trim_ascii()
        .to_string(),
        Problem::UnresolvedSection { .. } => r#"
A section reference must match the major and minor numbers of at least one
block in this document.
            "#
        .trim_ascii()
        .to_string(),
        Problem::MalformedReference { .. } => r#"
References are written either @NS.MAJOR.MINOR for a section, or
@NS.MAJOR.MINOR.BLOCK.TYPE.name for one block. Numbers have exactly three
digits, TYPE is one of DEF, REQ, TABLE, FLOW, ALERT, ARCH, CTRL, EXAMPLE or
ACCEPTANCE, and the name is lower case.
            "#
        .trim_ascii()
        .to_string(),
        Problem::MissingMetadata { field } => format!(
            "The field name '{}' must appear somewhere in the document.",
            field
        ),
    }
}
