//! Library-level tests that run the importer against real files on disk.

use std::io::Write;
use std::path::PathBuf;

use email_domains::{ImportError, Importer, ImporterConfig};
use tempfile::NamedTempFile;

/// Helper to write a CSV fixture to a temporary file
fn create_test_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn importer_for(path: PathBuf, allow_single_label_domain: bool) -> Importer {
    Importer::new(ImporterConfig {
        path,
        email_header: "email".to_string(),
        allow_single_label_domain,
    })
}

#[test]
fn test_example_file() {
    let file = create_test_csv(
        "first_name,email,gender\n\
         Alice,Alice@Example.COM,F\n\
         Bob,bob@example.com,M\n\
         Broken,bad-row-no-at,M\n\
         Sam, user@Sub.Foo.com ,X\n",
    );

    let result = importer_for(file.path().to_path_buf(), false)
        .import_domain_data()
        .unwrap();

    assert_eq!(result.stats.total_rows, 4);
    assert_eq!(result.stats.bad_rows, 1);
    assert_eq!(result.stats.unique_domains, 2);
    assert_eq!(result.domains[0].domain, "example.com");
    assert_eq!(result.domains[0].count, 2);
    assert_eq!(result.domains[1].domain, "sub.foo.com");
    assert_eq!(result.domains[1].count, 1);
}

#[test]
fn test_row_accounting_and_ordering_invariants() {
    let mut body = String::from("email\n");
    for i in 0..500 {
        let domain = match i % 7 {
            0 => "Alpha.com",
            1 | 2 => "beta.org",
            3 => "gamma.net",
            4 => "corp",
            5 => "bad..com",
            _ => "delta.io",
        };
        body.push_str(&format!("user{i}@{domain}\n"));
    }
    body.push_str("nope\n\n@x.com\n");
    let file = create_test_csv(&body);

    let result = importer_for(file.path().to_path_buf(), false)
        .import_domain_data()
        .unwrap();

    let counted: u64 = result.domains.iter().map(|d| d.count).sum();
    assert_eq!(result.stats.total_rows, result.stats.bad_rows + counted);
    assert_eq!(result.stats.unique_domains, result.domains.len());

    for pair in result.domains.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.count > b.count || (a.count == b.count && a.domain < b.domain),
            "{a:?} must sort before {b:?}"
        );
    }
    assert_eq!(result.domains[0].domain, "beta.org");
    assert!(result.domains.iter().all(|d| d.domain != "corp"));
}

#[test]
fn test_runs_are_idempotent() {
    let file = create_test_csv("email\nb@y.com\na@x.com\nc@Y.com\nz@w.com\n");
    let importer = importer_for(file.path().to_path_buf(), true);

    let first = importer.import_domain_data().unwrap();
    let second = importer.import_domain_data().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.csv");

    let err = importer_for(missing.clone(), false)
        .import_domain_data()
        .unwrap_err();

    match err {
        ImportError::SourceUnreadable { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected SourceUnreadable, got {other}"),
    }
}

#[test]
fn test_missing_header_column() {
    let file = create_test_csv("id,name\n1,Alice\n");

    let err = importer_for(file.path().to_path_buf(), false)
        .import_domain_data()
        .unwrap_err();
    assert!(matches!(err, ImportError::HeaderNotFound { .. }));
    assert_eq!(err.to_string(), "email header 'email' not found");
}

#[test]
fn test_utf8_bom_header() {
    let file = create_test_csv("\u{feff}email,name\na@x.com,A\n");

    let result = importer_for(file.path().to_path_buf(), false)
        .import_domain_data()
        .unwrap();
    assert_eq!(result.stats.unique_domains, 1);
}
