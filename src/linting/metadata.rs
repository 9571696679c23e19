use super::{Finding, Problem};

/// Fields every document must mention somewhere. This is a presence test
/// on the raw text, not a parse of any metadata block.
pub const REQUIRED_FIELDS: [&str; 3] = ["file_seq", "created_at_utc", "checksum_sha256"];

pub(crate) fn check_presence<'i>(text: &'i str, findings: &mut Vec<Finding<'i>>) {
    for field in REQUIRED_FIELDS {
        if !text.contains(field) {
            findings.push(Finding::unplaced(Problem::MissingMetadata { field }));
        }
    }
}
