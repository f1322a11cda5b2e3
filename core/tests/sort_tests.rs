use sheet_recon::{
    sort_rows, ReconConfig, Row, RowComparator, SortCriterion, SortSpec, SortSpecError,
};

fn row(pairs: &[(&str, &str)]) -> Row {
    Row::from_pairs(pairs.iter().copied())
}

fn comparator(criteria: Vec<SortCriterion>) -> RowComparator {
    RowComparator::new(&SortSpec::new(criteria), &ReconConfig::default())
        .expect("valid sort spec")
}

fn column_values(rows: &[Row], column: &str) -> Vec<String> {
    rows.iter().map(|r| r.value(column).to_string()).collect()
}

#[test]
fn empty_spec_preserves_input_order() {
    let rows = vec![row(&[("A", "b")]), row(&[("A", "a")]), row(&[("A", "c")])];
    let sorted = sort_rows(&rows, &comparator(vec![]));
    assert_eq!(sorted, rows);
}

#[test]
fn single_key_ascending() {
    let rows = vec![row(&[("A", "b")]), row(&[("A", "a")])];
    let sorted = sort_rows(&rows, &comparator(vec![SortCriterion::ascending("A")]));
    assert_eq!(column_values(&sorted, "A"), vec!["a", "b"]);
}

#[test]
fn single_key_descending() {
    let rows = vec![row(&[("A", "a")]), row(&[("A", "c")]), row(&[("A", "b")])];
    let sorted = sort_rows(&rows, &comparator(vec![SortCriterion::descending("A")]));
    assert_eq!(column_values(&sorted, "A"), vec!["c", "b", "a"]);
}

#[test]
fn sorting_does_not_mutate_input() {
    let rows = vec![row(&[("A", "b")]), row(&[("A", "a")])];
    let snapshot = rows.clone();
    let _ = sort_rows(&rows, &comparator(vec![SortCriterion::ascending("A")]));
    assert_eq!(rows, snapshot);
}

#[test]
fn sort_is_idempotent() {
    let cmp = comparator(vec![SortCriterion::ascending("A")]);
    let rows = vec![
        row(&[("A", "c")]),
        row(&[("A", "a")]),
        row(&[("A", "b")]),
        row(&[("A", "a")]),
    ];
    let once = sort_rows(&rows, &cmp);
    let twice = sort_rows(&once, &cmp);
    assert_eq!(once, twice);
}

#[test]
fn ties_keep_relative_input_order() {
    let cmp = comparator(vec![SortCriterion::ascending("City")]);
    let rows = vec![
        row(&[("City", "Oslo"), ("Name", "first")]),
        row(&[("City", "Bergen"), ("Name", "x")]),
        row(&[("City", "Oslo"), ("Name", "second")]),
        row(&[("City", "Oslo"), ("Name", "third")]),
    ];
    let sorted = sort_rows(&rows, &cmp);
    assert_eq!(
        column_values(&sorted, "Name"),
        vec!["x", "first", "second", "third"]
    );
}

#[test]
fn absent_column_compares_as_empty_string() {
    let cmp = comparator(vec![SortCriterion::ascending("A")]);
    let rows = vec![row(&[("A", "a")]), row(&[("B", "zzz")])];
    let sorted = sort_rows(&rows, &cmp);
    // The row without column A reads as "", which sorts first.
    assert_eq!(column_values(&sorted, "A"), vec!["", "a"]);
}

#[test]
fn duplicate_criterion_columns_after_first_are_ignored() {
    // The second criterion names the same column with the opposite
    // direction; only the first occurrence counts.
    let cmp = comparator(vec![
        SortCriterion::ascending("A"),
        SortCriterion::descending("A"),
    ]);
    assert_eq!(cmp.criteria().len(), 1);
    let rows = vec![row(&[("A", "b")]), row(&[("A", "a")])];
    let sorted = sort_rows(&rows, &cmp);
    assert_eq!(column_values(&sorted, "A"), vec!["a", "b"]);
}

#[test]
fn secondary_criterion_breaks_ties_within_primary_groups() {
    // City ascending, Name descending: distinct cities stay grouped and
    // ordered; duplicate cities order by Name descending within the group.
    let cmp = comparator(vec![
        SortCriterion::ascending("City"),
        SortCriterion::descending("Name"),
    ]);
    let rows = vec![
        row(&[("City", "Lyon"), ("Name", "Anna")]),
        row(&[("City", "Brest"), ("Name", "Zoe")]),
        row(&[("City", "Lyon"), ("Name", "Marc")]),
        row(&[("City", "Brest"), ("Name", "Abel")]),
    ];
    let sorted = sort_rows(&rows, &cmp);
    assert_eq!(
        column_values(&sorted, "Name"),
        vec!["Zoe", "Abel", "Marc", "Anna"]
    );
    assert_eq!(
        column_values(&sorted, "City"),
        vec!["Brest", "Brest", "Lyon", "Lyon"]
    );
}

#[test]
fn collation_is_locale_aware_not_byte_order() {
    // Byte order would put "B" (0x42) before "a" (0x61); English collation
    // orders by letter first.
    let cmp = comparator(vec![SortCriterion::ascending("A")]);
    let rows = vec![row(&[("A", "B")]), row(&[("A", "a")])];
    let sorted = sort_rows(&rows, &cmp);
    assert_eq!(column_values(&sorted, "A"), vec!["a", "B"]);
}

#[test]
fn empty_column_name_is_rejected_with_its_index() {
    let spec = SortSpec::new(vec![
        SortCriterion::ascending("A"),
        SortCriterion::ascending(""),
    ]);
    let err = RowComparator::new(&spec, &ReconConfig::default())
        .expect_err("empty column name must be rejected");
    assert_eq!(err, SortSpecError::EmptyColumn { index: 1 });
}

#[test]
fn malformed_locale_is_rejected_at_construction() {
    let config = ReconConfig {
        locale: "no!tag".to_string(),
        ..ReconConfig::default()
    };
    let err = RowComparator::new(&SortSpec::default(), &config)
        .expect_err("malformed locale must be rejected");
    assert!(matches!(err, SortSpecError::UnsupportedLocale { locale } if locale == "no!tag"));
}
