use sa_results::*;
use std::path::PathBuf;

fn temp_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("sa_results_test_load");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_nested_document() {
    let path = temp_file(
        "nested.json",
        r#"{
            "aleatoria": {"5000": {"solucao media": [150000, 151000.5], "melhor solucao": [1]}},
            "localizada": {"5000": {"solucao media": [2], "melhor solucao": [3]}}
        }"#,
    );

    let doc = load_document(&path).unwrap();
    let strategies: Vec<&str> = doc.strategies().collect();
    assert_eq!(strategies, vec!["aleatoria", "localizada"]);

    let values = doc
        .series(Strategy::Aleatoria, IterationCount(5000), SolutionType::Mean)
        .unwrap();
    assert_eq!(values, vec![150000.0, 151000.5]);
    assert_eq!(doc.iteration_keys(Strategy::Localizada), vec!["5000"]);
}

#[test]
fn missing_file_is_not_found() {
    let path = std::env::temp_dir()
        .join("sa_results_test_load_missing")
        .join(RESULTS_FILE_NAME);
    let err = load_document(&path).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn malformed_json_is_reported_with_path() {
    let path = temp_file("malformed.json", "{\"aleatoria\": [");
    let err = load_document(&path).unwrap_err();
    assert!(!err.is_not_found());
    assert!(matches!(err, ResultsError::Json { .. }));
    assert!(format!("{err}").contains("malformed.json"));
}

#[test]
fn unread_entries_do_not_block_loading() {
    let path = temp_file(
        "sa_vpl_extra.json",
        r#"{
            "meta": {"seed": 42},
            "aleatoria": {"5000": {"solucao media": [150000, null]}}
        }"#,
    );

    let doc = load_document(&path).unwrap();
    let total = doc
        .total_vpl(Strategy::Aleatoria, IterationCount(5000), SolutionType::Mean)
        .unwrap();
    assert_eq!(total, 150000.0);
}

#[test]
fn non_numeric_leaf_fails_on_lookup() {
    let path = temp_file(
        "strings.json",
        r#"{"aleatoria": {"5000": {"solucao media": ["abc"], "melhor solucao": 7}}}"#,
    );
    let doc = load_document(&path).unwrap();
    assert!(matches!(
        doc.total_vpl(Strategy::Aleatoria, IterationCount(5000), SolutionType::Mean),
        Err(ResultsError::NotANumber { index: 0, .. })
    ));
    assert!(matches!(
        doc.series(Strategy::Aleatoria, IterationCount(5000), SolutionType::Best),
        Err(ResultsError::NotASequence { .. })
    ));
}
