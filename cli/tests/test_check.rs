#[cfg(test)]
mod tests {
    use std::io::Write;

    use pf_cli::commands::{check, load_catalog, summary};
    use portfolio_shared::catalog::BUILTIN_CONTENT;
    use tempfile::NamedTempFile;

    fn write_content(raw: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(raw.as_bytes()).expect("write content");
        file.flush().expect("flush content");
        file
    }

    #[test]
    fn builtin_content_passes_check() {
        let file = write_content(BUILTIN_CONTENT);
        let problems = check::check_file(file.path()).expect("check content");
        assert!(problems.is_empty(), "unexpected problems: {problems:?}");
        check::run(file.path()).expect("valid content should pass");
    }

    #[test]
    fn check_lists_every_rule_violation() {
        let mut doc: serde_json::Value =
            serde_json::from_str(BUILTIN_CONTENT).expect("parse builtin");
        doc["profile"]["name"] = "".into();
        doc["projects"][1]["github"] = "ftp://example.com/repo".into();
        doc["skills"][0]["title"] = "  ".into();
        let file = write_content(&doc.to_string());

        let problems = check::check_file(file.path()).expect("check content");
        assert_eq!(problems.len(), 3, "problems: {problems:?}");
        assert!(problems.iter().any(|line| line.starts_with("profile.name")));
        assert!(problems.iter().any(|line| line.contains("ftp://example.com/repo")));
        assert!(problems.iter().any(|line| line.starts_with("skills[0].title")));

        let err = check::run(file.path()).expect_err("invalid content should fail");
        assert!(err.to_string().contains("3 problem(s)"));
    }

    #[test]
    fn malformed_json_is_reported_as_a_problem() {
        let file = write_content("{ \"profile\": ");
        let problems = check::check_file(file.path()).expect("check content");
        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("invalid JSON"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("nope.json");
        let err = check::check_file(&missing).expect_err("missing file");
        assert!(err.to_string().contains("failed to read content file"));
    }

    #[test]
    fn summary_counts_each_section() {
        let file = write_content(BUILTIN_CONTENT);
        let catalog = load_catalog(file.path())
            .expect("read content")
            .expect("valid content");
        let text = summary::render(&catalog);

        assert!(text.contains("projects:   6 (1 awarded, 0 media items)"), "{text}");
        assert!(text.contains("skills:     3"));
        assert!(text.contains("experience: 3"));
        assert!(text.contains("awards:     2"));
        assert!(text.contains("contacts:   4"));
    }
}
