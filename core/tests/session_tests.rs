use sheet_recon::{
    ConfigError, Dataset, DiffKey, ReconConfig, ReconSession, Row, SessionError, Side,
    SortCriterion, SortSpec, SortSpecError,
};

fn row(pairs: &[(&str, &str)]) -> Row {
    Row::from_pairs(pairs.iter().copied())
}

fn dataset(headers: &[&str], rows: Vec<Row>) -> Dataset {
    let mut ds = Dataset::new(headers.iter().map(|h| h.to_string()).collect());
    for r in rows {
        ds.push_row(r);
    }
    ds
}

fn session() -> ReconSession {
    ReconSession::new(ReconConfig::default()).expect("default config is valid")
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = ReconConfig {
        locale: "!!".to_string(),
        ..ReconConfig::default()
    };
    let err = ReconSession::new(config).expect_err("bad locale must fail");
    assert!(matches!(err, ConfigError::InvalidLocale { .. }));
}

#[test]
fn compare_requires_both_datasets() {
    let mut s = session();
    assert_eq!(
        s.compare().expect_err("nothing loaded"),
        SessionError::MissingDataset { side: Side::Left }
    );
    s.load_left(dataset(&["A"], vec![]));
    assert_eq!(
        s.compare().expect_err("right missing"),
        SessionError::MissingDataset { side: Side::Right }
    );
}

#[test]
fn sort_spec_errors_propagate_through_compare() {
    let mut s = session();
    s.load_left(dataset(&["A"], vec![]));
    s.load_right(dataset(&["A"], vec![]));
    s.set_sort_spec(SortSpec::new(vec![SortCriterion::ascending("")]));
    let err = s.compare().expect_err("empty column name");
    assert_eq!(
        err,
        SessionError::Sort(SortSpecError::EmptyColumn { index: 0 })
    );
}

#[test]
fn reordered_datasets_are_equal_under_a_discriminating_sort() {
    let mut s = session();
    s.load_left(dataset(&["A"], vec![row(&[("A", "b")]), row(&[("A", "a")])]));
    s.load_right(dataset(&["A"], vec![row(&[("A", "a")]), row(&[("A", "b")])]));
    s.set_sort_spec(SortSpec::new(vec![SortCriterion::ascending("A")]));
    assert!(s.datasets_equal().expect("compare succeeds"));
    assert!(s.compare().expect("compare succeeds").is_empty());
}

#[test]
fn reloading_either_side_clears_suppressions() {
    let mut s = session();
    s.load_left(dataset(&["A"], vec![row(&[("A", "1")])]));
    s.load_right(dataset(&["A"], vec![row(&[("A", "2")])]));

    let key = DiffKey::new(0, "A");
    s.toggle_suppression(key.clone());
    assert!(s.is_suppressed(&key));

    s.load_right(dataset(&["A"], vec![row(&[("A", "3")])]));
    assert!(!s.is_suppressed(&key));
    assert!(s.suppressions().is_empty());

    s.toggle_suppression(key.clone());
    s.load_left(dataset(&["A"], vec![row(&[("A", "4")])]));
    assert!(!s.is_suppressed(&key));
}

#[test]
fn full_pipeline_sort_diff_suppress() {
    let mut s = session();
    s.load_left(dataset(
        &["Name", "Qty"],
        vec![
            row(&[("Name", "screw"), ("Qty", "7")]),
            row(&[("Name", "bolt"), ("Qty", "10")]),
        ],
    ));
    s.load_right(dataset(
        &["Name", "Qty"],
        vec![
            row(&[("Name", "bolt"), ("Qty", "11")]),
            row(&[("Name", "screw"), ("Qty", "7")]),
        ],
    ));
    s.set_sort_spec(SortSpec::new(vec![SortCriterion::ascending("Name")]));

    let report = s.compare().expect("compare succeeds");
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].index, 0);

    let effective = s.effective_diffs(&report);
    assert_eq!(effective.len(), 1);
    assert_eq!(effective[0].significant_columns, vec!["Qty"]);

    s.toggle_suppression(DiffKey::new(0, "Qty"));
    assert!(s.effective_diffs(&report).is_empty());

    s.toggle_suppression(DiffKey::new(0, "Qty"));
    assert_eq!(s.effective_diffs(&report), effective);
}

#[test]
fn type_check_setting_comes_from_config() {
    let config = ReconConfig::builder()
        .type_check_enabled(true)
        .build()
        .expect("valid config");
    let mut s = ReconSession::new(config).expect("valid config");
    s.load_left(dataset(&["V"], vec![row(&[("V", "10")])]));
    s.load_right(dataset(&["V"], vec![row(&[("V", "10.0")])]));

    let report = s.compare().expect("compare succeeds");
    let effective = s.effective_diffs(&report);
    // Differs as strings regardless of both classifying as numbers.
    assert_eq!(effective.len(), 1);
    assert_eq!(effective[0].significant_columns, vec!["V"]);
}
