use icmp::prelude::*;
use icmp::{SequenceSide, events_by};

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        id: f64,
        state: &'static str,
    }

    fn record(id: f64) -> Record {
        Record { id, state: "new" }
    }

    fn records(ids: &[f64]) -> Vec<Record> {
        ids.iter().copied().map(record).collect()
    }

    fn ids(event: CompareEvent<&Record>) -> CompareEvent<f64> {
        event.map(|r| r.id)
    }

    // --- Seed scenario ---

    #[test]
    fn test_mixed_scenario_through_free_function() {
        let current = records(&[-1.0, 1.0, 1.8, 2.0, 4.0]);
        let previous = records(&[0.0, 1.0, 1.5, 2.0, 5.0]);

        let mut actual = Vec::new();
        let summary = compare_by_key(&current, &previous, |r| r.id, |e| actual.push(ids(e)));

        assert_eq!(
            actual,
            vec![
                CompareEvent::Added(-1.0),
                CompareEvent::Removed(0.0),
                CompareEvent::Matched(1.0, 1.0),
                CompareEvent::Removed(1.5),
                CompareEvent::Added(1.8),
                CompareEvent::Matched(2.0, 2.0),
                CompareEvent::Added(4.0),
                CompareEvent::Removed(5.0),
            ]
        );
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.added, 3);
        assert_eq!(summary.removed, 3);
    }

    #[test]
    fn test_mixed_scenario_through_builder() {
        let current = records(&[-1.0, 1.0, 1.8, 2.0, 4.0]);
        let previous = records(&[0.0, 1.0, 1.5, 2.0, 5.0]);

        let mut kinds = Vec::new();
        let summary = Comparator::new(&current, &previous)
            .by_key(|r| r.id)
            .on_event(|e| kinds.push(e.kind()))
            .run()
            .unwrap();

        assert_eq!(
            kinds,
            vec![
                EventKind::Added,
                EventKind::Removed,
                EventKind::Matched,
                EventKind::Removed,
                EventKind::Added,
                EventKind::Matched,
                EventKind::Added,
                EventKind::Removed,
            ]
        );
        assert_eq!(summary.total(), 8);
    }

    #[test]
    fn test_mixed_scenario_through_iterator() {
        let current = records(&[-1.0, 1.0, 1.8, 2.0, 4.0]);
        let previous = records(&[0.0, 1.0, 1.5, 2.0, 5.0]);

        let added: Vec<f64> = events_by_key(&current, &previous, |r| r.id)
            .filter_map(|e| match e {
                CompareEvent::Added(r) => Some(r.id),
                _ => None,
            })
            .collect();

        assert_eq!(added, vec![-1.0, 1.8, 4.0]);
    }

    // --- Disjoint and empty inputs ---

    #[test]
    fn test_single_added() {
        let current = records(&[0.0]);
        let previous: Vec<Record> = Vec::new();

        let mut actual = Vec::new();
        compare_by_key(&current, &previous, |r| r.id, |e| actual.push(ids(e)));

        assert_eq!(actual, vec![CompareEvent::Added(0.0)]);
    }

    #[test]
    fn test_single_removed() {
        let current: Vec<Record> = Vec::new();
        let previous = records(&[0.0]);

        let mut actual = Vec::new();
        compare_by_key(&current, &previous, |r| r.id, |e| actual.push(ids(e)));

        assert_eq!(actual, vec![CompareEvent::Removed(0.0)]);
    }

    #[test]
    fn test_empty_inputs() {
        let summary = Comparator::new(Vec::<u64>::new(), Vec::<u64>::new())
            .on_event(|_| panic!("no events expected"))
            .run()
            .unwrap();

        assert_eq!(summary, CompareSummary::default());
    }

    // --- State tracking ---

    #[test]
    fn test_detects_state_changes() {
        let mut current = records(&[1.0, 2.0, 3.0]);
        let previous = records(&[1.0, 2.0, 3.0]);
        current[1].state = "accept";

        let mut changed = Vec::new();
        compare_by_key(&current, &previous, |r| r.id, |e| {
            if let CompareEvent::Matched(now, before) = e {
                if now.state != before.state {
                    changed.push((now.id, before.state, now.state));
                }
            }
        });

        assert_eq!(changed, vec![(2.0, "new", "accept")]);
    }

    #[test]
    fn test_builder_collects_removed_items() {
        let current = vec![(1, 'a'), (3, 'c')];
        let previous = vec![(1, 'a'), (2, 'b')];

        let mut removed: Vec<&(i32, char)> = Vec::new();
        let summary = Comparator::new(&current, &previous)
            .by_key(|item| item.0)
            .on_event(|event| {
                if event.is_removed() {
                    removed.extend(event.previous().copied());
                }
            })
            .run()
            .unwrap();

        assert_eq!(summary.matched, 1);
        assert_eq!(summary.added, 1);
        assert_eq!(removed, vec![&(2, 'b')]);
    }

    // --- Preconditions ---

    #[test]
    fn test_builder_requires_callback() {
        let current = records(&[1.0]);
        let previous = records(&[1.0]);

        let err = Comparator::new(&current, &previous)
            .by_key(|r| r.id)
            .run()
            .unwrap_err();

        assert_eq!(err, CompareError::MissingCallback);
    }

    #[test]
    fn test_builder_requires_sequences() {
        let previous = records(&[1.0]);
        let err = Comparator::try_new(None::<&Vec<Record>>, Some(&previous))
            .err()
            .unwrap();

        assert_eq!(
            err,
            CompareError::MissingSequence {
                side: SequenceSide::Current
            }
        );
    }

    // --- Custom orders ---

    #[test]
    fn test_case_insensitive_comparator() {
        let current = vec!["Apple", "banana", "Cherry"];
        let previous = vec!["apple", "Cherry", "date"];

        let kinds: Vec<&str> = events_by(current, previous, |a, b| {
            a.to_lowercase().cmp(&b.to_lowercase())
        })
        .map(|e| e.kind().as_str())
        .collect();

        assert_eq!(kinds, vec!["compare", "added", "compare", "removed"]);
    }

    #[test]
    fn test_large_identical_inputs() {
        let current: Vec<u32> = (1..=20_000).collect();
        let previous = current.clone();

        let summary = compare(&current, &previous, |_| {});

        assert_eq!(summary.matched, 20_000);
        assert!(summary.is_unchanged());
    }
}
