use result_rail::outcome::{partition_outcomes, Outcome};

#[test]
fn iterators_over_success_value_work() {
    let mut ok = Outcome::<i32, &str>::ok(3);
    if let Some(value) = ok.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(ok.iter().copied().collect::<Vec<_>>(), vec![4]);
    assert_eq!(ok.into_iter().collect::<Vec<_>>(), vec![4]);

    let err = Outcome::<i32, &str>::error("x");
    assert_eq!(err.iter().count(), 0);
    assert_eq!((&err).into_iter().count(), 0);
}

#[test]
fn for_loop_over_reference_visits_success_once() {
    let ok = Outcome::<i32, &str>::ok(10);
    let mut total = 0;
    for value in &ok {
        total += value;
    }
    assert_eq!(total, 10);
}

#[test]
fn collecting_all_successes() {
    let items = vec![Outcome::<i32, &str>::ok(1), Outcome::ok(2), Outcome::ok(3)];
    let collected: Outcome<Vec<i32>, &str> = items.into_iter().collect();
    assert_eq!(collected, Outcome::ok(vec![1, 2, 3]));
}

#[test]
fn collecting_stops_at_first_error() {
    let mut pulled = 0;
    let items = vec![
        Outcome::ok(1),
        Outcome::error("bad"),
        Outcome::error("worse"),
        Outcome::ok(4),
    ];

    let collected: Outcome<Vec<i32>, &str> = items
        .into_iter()
        .inspect(|_| pulled += 1)
        .collect();

    assert_eq!(collected, Outcome::error("bad"));
    assert_eq!(pulled, 2);
}

#[test]
fn collecting_empty_iterator_is_ok() {
    let collected: Outcome<Vec<i32>, &str> = Vec::<Outcome<i32, &str>>::new().into_iter().collect();
    assert_eq!(collected, Outcome::ok(Vec::new()));
}

#[test]
fn partition_keeps_every_item_in_order() {
    let items = vec![
        Outcome::ok(1),
        Outcome::error("a"),
        Outcome::ok(2),
        Outcome::error("b"),
        Outcome::ok(3),
        Outcome::ok(4),
        Outcome::ok(5),
    ];

    let (oks, errors) = partition_outcomes(items);
    assert_eq!(oks.as_slice(), &[1, 2, 3, 4, 5]);
    assert_eq!(errors.as_slice(), &["a", "b"]);
    assert!(oks.spilled());
    assert!(errors.spilled());
}

#[test]
fn partition_without_errors_stays_inline() {
    let (oks, errors) = partition_outcomes(vec![Outcome::<i32, &str>::ok(1), Outcome::ok(2)]);
    assert_eq!(oks.len(), 2);
    assert!(!oks.spilled());
    assert!(errors.is_empty());
}
