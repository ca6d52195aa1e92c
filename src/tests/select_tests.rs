//! Tests for the bounded top-N selector.

use serde_json::Number;

use crate::record::ScoredRecord;
use crate::select::TopSelector;

fn rec(score: i64, id: &str) -> ScoredRecord {
    ScoredRecord {
        score: Number::from(score),
        id: id.into(),
    }
}

fn frec(score: f64, id: &str) -> ScoredRecord {
    ScoredRecord {
        score: Number::from_f64(score).unwrap(),
        id: id.into(),
    }
}

fn select(n: usize, records: Vec<ScoredRecord>) -> Vec<ScoredRecord> {
    let mut selector = TopSelector::new(n);
    for r in records {
        selector.push(r);
    }
    selector.into_sorted()
}

fn ids(list: &[ScoredRecord]) -> Vec<&str> {
    list.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn selects_the_n_largest_in_descending_order() {
    let out = select(2, vec![rec(5, "a"), rec(3, "b"), rec(9, "c")]);
    assert_eq!(ids(&out), ["c", "a"]);
    assert_eq!(out[0].score, Number::from(9));
    assert_eq!(out[1].score, Number::from(5));
}

#[test]
fn output_length_is_min_of_n_and_record_count() {
    let records = vec![rec(1, "a"), rec(2, "b"), rec(3, "c")];

    assert_eq!(select(1, records.clone()).len(), 1);
    assert_eq!(select(3, records.clone()).len(), 3);
    assert_eq!(select(10, records).len(), 3);
}

#[test]
fn zero_records_yield_an_empty_list() {
    assert!(select(5, Vec::new()).is_empty());
}

#[test]
fn adjacent_scores_never_increase() {
    let records: Vec<ScoredRecord> = (0..100i64)
        .map(|i| rec((i * 7919) % 100, &format!("r{i}")))
        .collect();

    let out = select(10, records);
    assert_eq!(out.len(), 10);
    for pair in out.windows(2) {
        let a = pair[0].score.as_f64().unwrap();
        let b = pair[1].score.as_f64().unwrap();
        assert!(a >= b, "scores must be non-increasing: {a} then {b}");
    }
}

#[test]
fn equal_scores_keep_first_seen_order() {
    let out = select(3, vec![rec(5, "first"), rec(5, "second"), rec(5, "third")]);
    assert_eq!(ids(&out), ["first", "second", "third"]);
}

#[test]
fn equal_scores_retain_the_earlier_record_at_the_boundary() {
    // Capacity 2: "late" ties with "early" but was seen later, so when
    // the 7 arrives it is "late" that gets evicted.
    let out = select(2, vec![rec(5, "early"), rec(5, "late"), rec(7, "top")]);
    assert_eq!(ids(&out), ["top", "early"]);
}

#[test]
fn counts_below_one_are_normalized_to_one() {
    let out = select(0, vec![rec(1, "a"), rec(9, "b")]);
    assert_eq!(ids(&out), ["b"]);
}

#[test]
fn negative_and_fractional_scores_order_correctly() {
    let out = select(
        3,
        vec![
            frec(-0.5, "half"),
            rec(-3, "low"),
            frec(2.25, "high"),
            rec(0, "zero"),
        ],
    );
    assert_eq!(ids(&out), ["high", "zero", "half"]);
}

#[test]
fn selection_is_deterministic_across_runs() {
    let records: Vec<ScoredRecord> = (0..50i64)
        .map(|i| rec((i * 13) % 17, &format!("r{i}")))
        .collect();

    let first = select(8, records.clone());
    let second = select(8, records);

    assert_eq!(first, second);
}

#[test]
fn seen_counts_offered_records() {
    let mut selector = TopSelector::new(1);
    assert_eq!(selector.seen(), 0);
    selector.push(rec(1, "a"));
    selector.push(rec(2, "b"));
    assert_eq!(selector.seen(), 2);
}
