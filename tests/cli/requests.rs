#[cfg(test)]
mod requests {
    use crate::{speclint, stdout, write};

    const LEDGER: &str = r#"
[
  {
    "id": 1,
    "title": "Add calendar feed",
    "description": "",
    "branch": "feature-feed",
    "impact": "",
    "status": "open",
    "reviewers": []
  },
  {
    "id": 2,
    "title": "Rename glossary terms",
    "description": "",
    "branch": null,
    "impact": "docs only",
    "status": "in_review",
    "reviewers": []
  },
  {
    "id": 3,
    "title": "Old fix",
    "description": "",
    "branch": null,
    "impact": "",
    "status": "resolved",
    "reviewers": []
  }
]
"#;

    #[test]
    fn problems_fail_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = write(dir.path(), "change_requests.json", LEDGER);

        let output = speclint(&["requests", ledger.to_str().unwrap()]);

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            stdout(&output),
            r#"[open] 1 (feature-feed): Add calendar feed
[in_review] 2: Rename glossary terms
[resolved] 3: Old fix
Request 1 missing impact analysis
Request 2 missing tracking branch
Request 2 missing reviewers
"#
        );
    }

    #[test]
    fn status_filter_and_valid_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = write(
            dir.path(),
            "change_requests.json",
            r#"[{"id": 4, "title": "Done", "status": "resolved"}]"#,
        );
        let path = ledger.to_str().unwrap();

        let output = speclint(&["requests", "--status", "open", path]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "All change requests valid.\n");

        let output = speclint(&["requests", "--status", "closed", path]);
        assert_eq!(output.status.code(), Some(2));
    }

    #[test]
    fn invalid_ledger_fails() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = write(dir.path(), "change_requests.json", "{not json");

        let output = speclint(&["requests", ledger.to_str().unwrap()]);
        assert_eq!(output.status.code(), Some(1));
    }
}
