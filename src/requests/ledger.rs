use std::fmt;

use tracing::debug;

use super::{ChangeRequest, Status};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerError {
    pub problem: String,
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.problem)
    }
}

/// An in-memory list of change requests. Reading and writing the JSON text
/// is provided here; where that text is kept is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    requests: Vec<ChangeRequest>,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger { requests: vec![] }
    }

    pub fn from_json(text: &str) -> Result<Ledger, LedgerError> {
        let requests: Vec<ChangeRequest> =
            serde_json::from_str(text).map_err(|error| LedgerError {
                problem: format!("Invalid change request ledger: {}", error),
            })?;

        debug!("Loaded {} change request(s)", requests.len());
        Ok(Ledger { requests })
    }

    pub fn to_json(&self) -> Result<String, LedgerError> {
        let mut sorted = self
            .requests
            .clone();
        sorted.sort_by_key(|r| r.id);

        serde_json::to_string_pretty(&sorted).map_err(|error| LedgerError {
            problem: format!("Unable to serialize ledger: {}", error),
        })
    }

    pub fn requests(&self) -> &[ChangeRequest] {
        &self.requests
    }

    /// Add a new open request with the next free id.
    pub fn create(&mut self, title: &str, description: &str, branch: Option<&str>) -> &ChangeRequest {
        let id = 1 + self
            .requests
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap_or(0);

        debug!(id, "Creating change request");

        self.requests
            .push(ChangeRequest {
                id,
                title: title.to_string(),
                description: description.to_string(),
                branch: branch.map(str::to_string),
                impact: String::new(),
                status: Status::Open,
                reviewers: vec![],
            });

        &self.requests[self.requests.len() - 1]
    }

    pub fn list(&self, status: Option<Status>) -> Vec<&ChangeRequest> {
        self.requests
            .iter()
            .filter(|r| match status {
                Some(status) => r.status == status,
                None => true,
            })
            .collect()
    }

    pub fn set_impact(&mut self, id: u32, impact: &str) -> bool {
        match self.find(id) {
            Some(request) => {
                request.impact = impact.to_string();
                true
            }
            None => false,
        }
    }

    pub fn start_review<S: AsRef<str>>(&mut self, id: u32, reviewers: &[S]) -> bool {
        match self.find(id) {
            Some(request) => {
                request.status = Status::InReview;
                request.reviewers = reviewers
                    .iter()
                    .map(|s| s.as_ref().to_string())
                    .collect();
                true
            }
            None => false,
        }
    }

    pub fn resolve(&mut self, id: u32) -> bool {
        match self.find(id) {
            Some(request) => {
                request.status = Status::Resolved;
                true
            }
            None => false,
        }
    }

    fn find(&mut self, id: u32) -> Option<&mut ChangeRequest> {
        self.requests
            .iter_mut()
            .find(|r| r.id == id)
    }
}
