//! Validation of block structure, cross-references, and required metadata
//! in one annotated specification document.

use tracing::debug;

use crate::language::Namespace;

mod findings;
mod metadata;
mod nesting;
mod resolver;

pub use findings::{Class, Finding, Problem};
pub use metadata::REQUIRED_FIELDS;
pub use resolver::Registry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// The document-family tag that markers and references must carry.
    pub namespace: Namespace,
    /// Also report a BEGIN whose identifier was already seen.
    pub strict: bool,
}

/// Check one document. The line pass over markers runs first and fills
/// the registry of block identifiers; cross-references and metadata are
/// then checked against the whole text. Findings come back in that order,
/// and an empty list means the document is valid.
///
/// All state lives for the duration of this call only, so documents can
/// be validated independently and from as many threads as you like.
pub fn validate<'i>(text: &'i str, options: &Options) -> Vec<Finding<'i>> {
    let mut registry = Registry::new();
    let mut findings = Vec::new();

    nesting::scan(text, options, &mut registry, &mut findings);
    debug!(
        "Registered {} block identifier{}",
        registry.len(),
        if registry.len() == 1 { "" } else { "s" }
    );

    resolver::resolve(text, &options.namespace, &registry, &mut findings);
    metadata::check_presence(text, &mut findings);

    debug!("findings: {}", findings.len());
    findings
}
