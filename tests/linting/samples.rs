#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use speclint::linting::{self, Options};
    use speclint::parsing;

    fn markdown_files(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("md")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .md files found in {:?}", dir);
        files
    }

    #[test]
    fn ensure_samples_pass() {
        let mut failures = Vec::new();

        for file in markdown_files(Path::new("tests/samples/")) {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let findings = linting::validate(&content, &Options::default());
            if !findings.is_empty() {
                println!("File {:?} has findings: {:?}", file, findings);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should validate cleanly, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let mut unexpected_successes = Vec::new();

        for file in markdown_files(Path::new("tests/broken/")) {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let findings = linting::validate(&content, &Options::default());
            if findings.is_empty() {
                println!("File {:?} unexpectedly validated cleanly", file);
                unexpected_successes.push(file.clone());
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should not validate, but {} files passed",
                unexpected_successes.len()
            );
        }
    }

    #[test]
    fn broken_mismatch_details() {
        let file = Path::new("tests/broken/mismatch.md");
        let content = parsing::load(file).unwrap();

        let messages: Vec<String> = linting::validate(&content, &Options::default())
            .iter()
            .map(|f| f.to_string())
            .collect();

        assert_eq!(
            messages,
            vec![
                "6: END id mismatch. BEGIN at 4 was ECON.001.002.003.DEF.sample, END is ECON.001.002.999.DEF.sample",
                "Missing required CSV meta field in doc: checksum_sha256",
            ]
        );
    }
}
