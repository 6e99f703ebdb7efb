use tabmatch_map::{
    MAPPED_FIELD_WEIGHT, RowAligner, align_datasets, align_lines, align_rows, detect_field_mapping,
    explain_score, score_rows,
};
use tabmatch_model::{Dataset, FieldMapping, Row};

fn rows(lines: &[&str]) -> Vec<Row> {
    lines.iter().copied().map(Row::parse).collect()
}

#[test]
fn pairing_has_one_entry_per_left_row() {
    let left = rows(&["a,1", "b,2", "c,3"]);
    for right in [rows(&[]), rows(&["a,1"]), rows(&["x,9", "y,8", "z,7", "w,6"])] {
        assert_eq!(align_rows(&left, &right).len(), left.len());
    }
}

#[test]
fn empty_right_pairs_with_empty_row() {
    let pairing = align_rows(&rows(&["X,1"]), &[]);
    assert_eq!(pairing.len(), 1);
    assert!(pairing.pairs[0].best.is_none());
    assert_eq!(pairing.to_blocks(), ("X,1".to_string(), String::new()));
}

#[test]
fn alignment_is_deterministic() {
    let left = rows(&["A1,2024-01-02,5", "B2,2024-01-03,6", "C3,2024-01-04,5"]);
    let right = rows(&["6,B2,2024/01/03", "5,A1,2024/01/02", "5,C3,2024/01/04"]);
    let first = align_rows(&left, &right);
    let second = align_rows(&left, &right);
    assert_eq!(first, second);
    assert_eq!(
        first.right_block(),
        "5,A1,2024/01/02\n6,B2,2024/01/03\n5,C3,2024/01/04"
    );
}

#[test]
fn equal_scores_prefer_earlier_right_row() {
    let pairing = align_rows(&rows(&["K9,x"]), &rows(&["K9,a", "K9,b"]));
    let best = pairing.pairs[0].best.as_ref().expect("match");
    assert_eq!(best.index, 0);
    assert_eq!(best.row.as_line(), "K9,a");
}

#[test]
fn mapped_field_equality_adds_exactly_twenty() {
    let mapping: FieldMapping = [(0, 2)].into_iter().collect();
    let left = Row::parse("ID7,foo,bar");
    let equal = Row::parse("qux,baz,ID7");
    let unequal = Row::parse("qux,baz,ID8");
    assert_eq!(
        score_rows(&left, &equal, &mapping),
        score_rows(&left, &unequal, &mapping) + MAPPED_FIELD_WEIGHT
    );
}

#[test]
fn mapped_dates_with_different_times_score_zero() {
    let mapping: FieldMapping = [(0, 0)].into_iter().collect();
    let score = explain_score(
        &Row::parse("2024-01-02 10:00"),
        &Row::parse("2024-01-02 23:59"),
        &mapping,
    );
    assert_eq!(score.total, 0);
    assert!(score.components.is_empty());
}

#[test]
fn end_to_end_single_row() {
    let left = rows(&["Alice,2024-01-02,100"]);
    let right = rows(&["Alice,2024/01/02,100.0"]);

    let mapping = detect_field_mapping(&left[0], &right[0]);
    assert_eq!(mapping.iter().collect::<Vec<_>>(), vec![(1, 1)]);

    // The mapped date differs textually, so it earns nothing; the name is an
    // exact unmapped match and 100 == 100.0 numerically.
    let score = score_rows(&left[0], &right[0], &mapping);
    assert_eq!(score, 10 + 8);

    let pairing = align_rows(&left, &right);
    assert_eq!(pairing.pairs[0].right_line(), "Alice,2024/01/02,100.0");
    assert_eq!(pairing.pairs[0].score(), Some(18));
}

#[test]
fn zero_score_rows_are_still_paired() {
    let pairing = align_rows(&rows(&["foo"]), &rows(&["bar", "baz"]));
    assert_eq!(pairing.pairs[0].score(), Some(0));
    assert_eq!(pairing.pairs[0].right_line(), "bar");
    assert_eq!(pairing.weak_pair_count(), 1);
}

#[test]
fn datasets_align_without_headers() {
    let left = Dataset::from_lines("id,date,amount", ["A1,2024-01-02,5", "B2,2024-02-03,7"]);
    let right = Dataset::from_lines(
        "金額,番号,日付",
        ["7,B2,2024/02/03", "", "5,A1,2024/01/02"],
    );
    let pairing = align_datasets(&left, &right);
    assert_eq!(pairing.right_block(), "5,A1,2024/01/02\n7,B2,2024/02/03");
}

#[test]
fn short_rows_degrade_quietly() {
    let aligner = RowAligner::new([(2, 2)].into_iter().collect());
    let pairing = aligner.align(&rows(&["a"]), &rows(&["a,b,c", "x"]));
    assert_eq!(pairing.pairs[0].right_line(), "a,b,c");
    assert_eq!(pairing.pairs[0].score(), Some(10));
}

#[test]
fn lines_api_matches_row_api() {
    let (left, right) = align_lines(["X,1", "", "Y,2"], ["2,Y", "1,X"]);
    assert_eq!(left, "X,1\nY,2");
    assert_eq!(right, "1,X\n2,Y");
}
