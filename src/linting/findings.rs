use std::fmt;

/// Broad classes of problem, for callers that want to group or count
/// findings. Every finding fails the document regardless of class.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Class {
    Nesting,    // BEGIN/END structure
    Resolution, // reference with nothing to point at
    Malformed,  // reference that doesn't decompose
    Metadata,   // required field absent
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem<'i> {
    DuplicateBegin {
        id: &'i str,
    },
    EndWithoutBegin {
        end: &'i str,
    },
    MismatchedEnd {
        begin_line: usize,
        begin: &'i str,
        end: &'i str,
    },
    UnclosedBegin {
        begin: &'i str,
    },
    UnresolvedBlock {
        token: &'i str,
    },
    UnresolvedSection {
        token: &'i str,
    },
    MalformedReference {
        token: &'i str,
    },
    MissingMetadata {
        field: &'static str,
    },
}

impl<'i> Problem<'i> {
    pub fn class(&self) -> Class {
        match self {
            Problem::DuplicateBegin { .. } => Class::Nesting,
            Problem::EndWithoutBegin { .. } => Class::Nesting,
            Problem::MismatchedEnd { .. } => Class::Nesting,
            Problem::UnclosedBegin { .. } => Class::Nesting,
            Problem::UnresolvedBlock { .. } => Class::Resolution,
            Problem::UnresolvedSection { .. } => Class::Resolution,
            Problem::MalformedReference { .. } => Class::Malformed,
            Problem::MissingMetadata { .. } => Class::Metadata,
        }
    }
}

impl<'i> fmt::Display for Problem<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::DuplicateBegin { id } => write!(f, "Duplicate BEGIN id: {}", id),
            Problem::EndWithoutBegin { end } => write!(f, "END without BEGIN: {}", end),
            Problem::MismatchedEnd {
                begin_line,
                begin,
                end,
            } => write!(
                f,
                "END id mismatch. BEGIN at {} was {}, END is {}",
                begin_line, begin, end
            ),
            Problem::UnclosedBegin { begin } => write!(f, "Unclosed BEGIN: {}", begin),
            Problem::UnresolvedBlock { token } => {
                write!(f, "Cross-ref {} has no matching block ID", token)
            }
            Problem::UnresolvedSection { token } => write!(
                f,
                "Cross-ref {} has no matching section prefix among block IDs",
                token
            ),
            Problem::MalformedReference { token } => write!(f, "Malformed cross-ref: {}", token),
            Problem::MissingMetadata { field } => {
                write!(f, "Missing required CSV meta field in doc: {}", field)
            }
        }
    }
}

/// One reported problem. Findings from the line pass carry the line they
/// were found on (1-origin); findings from the whole-text passes don't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding<'i> {
    pub line: Option<usize>,
    pub problem: Problem<'i>,
}

impl<'i> Finding<'i> {
    pub fn at(line: usize, problem: Problem<'i>) -> Finding<'i> {
        Finding {
            line: Some(line),
            problem,
        }
    }

    pub fn unplaced(problem: Problem<'i>) -> Finding<'i> {
        Finding {
            line: None,
            problem,
        }
    }
}

impl<'i> fmt::Display for Finding<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}: {}", line, self.problem),
            None => write!(f, "{}", self.problem),
        }
    }
}
