//! Resolution of cross-reference tokens against the identifiers seen in
//! BEGIN markers.

use std::collections::HashSet;

use tracing::debug;

use super::{Finding, Problem};
use crate::language::{Namespace, Reference};
use crate::parsing::{decompose, discover};

/// Every block identifier registered by a BEGIN marker in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry<'i> {
    ids: HashSet<&'i str>,
}

impl<'i> Registry<'i> {
    pub fn new() -> Registry<'i> {
        Registry {
            ids: HashSet::new(),
        }
    }

    /// Returns false if the identifier was already present.
    pub fn register(&mut self, id: &'i str) -> bool {
        self.ids
            .insert(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids
            .contains(id)
    }

    pub fn any_with_prefix(&self, prefix: &str) -> bool {
        self.ids
            .iter()
            .any(|id| id.starts_with(prefix))
    }

    pub fn len(&self) -> usize {
        self.ids
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids
            .is_empty()
    }
}

pub(crate) fn resolve<'i>(
    text: &'i str,
    namespace: &Namespace,
    registry: &Registry<'i>,
    findings: &mut Vec<Finding<'i>>,
) {
    let tokens = discover(text, namespace);
    debug!("Found {} cross-reference token(s)", tokens.len());

    for token in tokens {
        let problem = match decompose(token) {
            Some(reference @ Reference::Full { .. }) => {
                if registry.contains(&reference.target(namespace)) {
                    continue;
                }
                Problem::UnresolvedBlock { token }
            }
            Some(reference @ Reference::Section { .. }) => {
                if registry.any_with_prefix(&reference.target(namespace)) {
                    continue;
                }
                Problem::UnresolvedSection { token }
            }
            None => Problem::MalformedReference { token },
        };

        findings.push(Finding::unplaced(problem));
    }
}
