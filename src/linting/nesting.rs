//! The line pass: recognize markers and match each END against the
//! nearest open BEGIN.

use tracing::debug;

use super::resolver::Registry;
use super::{Finding, Options, Problem};
use crate::parsing::{self, recognize, Marker};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct OpenBlock<'i> {
    pub(crate) id: &'i str,
    pub(crate) line: usize,
}

/// Stack of blocks that have seen their BEGIN but not yet an END.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Scope<'i> {
    stack: Vec<OpenBlock<'i>>,
}

impl<'i> Scope<'i> {
    pub(crate) fn new() -> Scope<'i> {
        Scope { stack: vec![] }
    }

    pub(crate) fn push(&mut self, id: &'i str, line: usize) {
        self.stack
            .push(OpenBlock { id, line });
    }

    pub(crate) fn pop(&mut self) -> Option<OpenBlock<'i>> {
        self.stack
            .pop()
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack
            .len()
    }

    /// Whatever is still open, outermost first.
    pub(crate) fn unclosed(self) -> Vec<OpenBlock<'i>> {
        self.stack
    }
}

pub(crate) fn scan<'i>(
    text: &'i str,
    options: &Options,
    registry: &mut Registry<'i>,
    findings: &mut Vec<Finding<'i>>,
) {
    let mut scope = Scope::new();

    for (i, line) in parsing::lines(text).enumerate() {
        let line_number = i + 1;

        match recognize(line, &options.namespace) {
            Some(Marker::Begin(id)) => {
                if options.strict && registry.contains(id.text) {
                    findings.push(Finding::at(
                        line_number,
                        Problem::DuplicateBegin { id: id.text },
                    ));
                }
                scope.push(id.text, line_number);
                registry.register(id.text);
            }
            Some(Marker::End(id)) => match scope.pop() {
                None => {
                    findings.push(Finding::at(
                        line_number,
                        Problem::EndWithoutBegin { end: id.text },
                    ));
                }
                Some(open) => {
                    if open.id != id.text {
                        findings.push(Finding::at(
                            line_number,
                            Problem::MismatchedEnd {
                                begin_line: open.line,
                                begin: open.id,
                                end: id.text,
                            },
                        ));
                    }
                }
            },
            None => {}
        }
    }

    if scope.depth() > 0 {
        debug!("{} block(s) left open", scope.depth());
    }

    for open in scope.unclosed() {
        findings.push(Finding::at(
            open.line,
            Problem::UnclosedBegin { begin: open.id },
        ));
    }
}
