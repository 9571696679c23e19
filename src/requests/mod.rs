//! Change requests against the specification documents, and the checks
//! which make sure each one carries what automation needs.

mod ledger;
mod types;

pub use ledger::{Ledger, LedgerError};
pub use types::{ChangeRequest, Status};

/// Field-presence checks over a list of change requests. Anything not yet
/// resolved needs an impact analysis and a tracking branch; anything in
/// review also needs reviewers.
pub fn validate(requests: &[ChangeRequest]) -> Vec<String> {
    let mut problems = Vec::new();

    for request in requests {
        if request.status != Status::Resolved {
            if request
                .impact
                .is_empty()
            {
                problems.push(format!("Request {} missing impact analysis", request.id));
            }
            if request
                .branch
                .as_deref()
                .unwrap_or("")
                .is_empty()
            {
                problems.push(format!("Request {} missing tracking branch", request.id));
            }
        }
        if request.status == Status::InReview
            && request
                .reviewers
                .is_empty()
        {
            problems.push(format!("Request {} missing reviewers", request.id));
        }
    }

    problems
}
