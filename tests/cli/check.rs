#[cfg(test)]
mod check {
    use crate::{speclint, stderr, stdout, write};

    const CLEAN: &str = r#"
file_seq: 1
created_at_utc: 2025-09-05T21:17:35Z
checksum_sha256: dummy

<!-- BEGIN:ECON.001.002.003.DEF.sample -->
reference to @ECON.001.002
<!-- END:ECON.001.002.003.DEF.sample -->
"#;

    const BROKEN: &str = r#"file_seq: 1
created_at_utc: 2025-09-05T21:17:35Z

<!-- BEGIN:ECON.001.002.003.DEF.sample -->
reference to @ECON.001.002
<!-- END:ECON.001.002.999.DEF.sample -->
"#;

    #[test]
    fn clean_files_exit_zero() {
        let dir = tempfile::tempdir().unwrap();
        let first = write(dir.path(), "first.md", CLEAN);
        let second = write(dir.path(), "second.md", CLEAN);

        let output = speclint(&[
            "check",
            first.to_str().unwrap(),
            second.to_str().unwrap(),
        ]);

        assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
        assert_eq!(
            stdout(&output),
            format!("OK: {}\nOK: {}\n", first.display(), second.display())
        );
    }

    #[test]
    fn batch_continues_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        let broken = write(dir.path(), "broken.md", BROKEN);
        let missing = dir
            .path()
            .join("missing.md");
        let clean = write(dir.path(), "clean.md", CLEAN);

        let output = speclint(&[
            "check",
            broken.to_str().unwrap(),
            missing.to_str().unwrap(),
            clean.to_str().unwrap(),
        ]);

        assert_eq!(output.status.code(), Some(1));

        let out = stdout(&output);
        assert_eq!(
            out,
            format!(
                "{}\n  6: END id mismatch. BEGIN at 4 was ECON.001.002.003.DEF.sample, END is ECON.001.002.999.DEF.sample\n  Missing required CSV meta field in doc: checksum_sha256\nOK: {}\n",
                broken.display(),
                clean.display()
            )
        );

        let err = stderr(&output);
        assert!(err.contains("missing.md"), "stderr: {}", err);
        assert!(err.contains("File not found"), "stderr: {}", err);
    }

    #[test]
    fn unreadable_file_alone_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir
            .path()
            .join("missing.md");

        let output = speclint(&["check", missing.to_str().unwrap()]);
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout(&output), "");
    }

    #[test]
    fn strict_flag_reports_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let text = format!(
            "{}<!-- BEGIN:ECON.001.002.003.DEF.sample -->\n<!-- END:ECON.001.002.003.DEF.sample -->\n",
            CLEAN
        );
        let file = write(dir.path(), "twice.md", &text);
        let path = file.to_str().unwrap();

        let output = speclint(&["check", path]);
        assert_eq!(output.status.code(), Some(0));

        let output = speclint(&["check", "--strict", path]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stdout(&output).contains("9: Duplicate BEGIN id: ECON.001.002.003.DEF.sample"));
    }

    #[test]
    fn namespace_flag_selects_family() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "huey.md", &BROKEN.replace("ECON", "HUEY"));
        let path = file.to_str().unwrap();

        let output = speclint(&["check", "--namespace", "HUEY", path]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stdout(&output).contains("END id mismatch. BEGIN at 4 was HUEY.001.002.003.DEF.sample"));
    }

    #[test]
    fn invalid_invocations_exit_two() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "clean.md", CLEAN);
        let path = file.to_str().unwrap();

        let output = speclint(&["check", "--namespace", "econ", path]);
        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("invalid namespace 'econ'"));

        let output = speclint(&["check"]);
        assert_eq!(output.status.code(), Some(2));

        let output = speclint(&[]);
        assert_eq!(output.status.code(), Some(2));

        let output = speclint(&["check", "--no-such-flag", path]);
        assert_eq!(output.status.code(), Some(2));
    }
}
