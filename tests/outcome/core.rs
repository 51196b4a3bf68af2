use result_rail::outcome::Outcome;
use std::cell::Cell;

#[test]
fn test_outcome_map_error_variant_keeps_payload() {
    let o: Outcome<i32, &str> = Outcome::error("error");
    let mapped = o.map(|x| x * 2);
    assert_eq!(mapped, Outcome::error("error"));
}

#[test]
fn test_outcome_map_does_not_call_closure_on_error() {
    let calls = Cell::new(0);
    let o: Outcome<i32, &str> = Outcome::error("error");
    let _ = o.map(|x| {
        calls.set(calls.get() + 1);
        x
    });
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_outcome_map_changes_success_type() {
    let o: Outcome<&str, ()> = Outcome::ok("hello");
    let mapped: Outcome<String, ()> = o.map(str::to_uppercase);
    assert_eq!(mapped, Outcome::ok("HELLO".to_string()));
}

#[test]
fn test_outcome_map_or_ok() {
    let o: Outcome<&str, &str> = Outcome::ok("foo");
    assert_eq!(o.map_or(42, |s| s.len()), 3);
}

#[test]
fn test_outcome_map_or_error_returns_default() {
    let o: Outcome<&str, &str> = Outcome::error("bar");
    assert_eq!(o.map_or(42, |s| s.len()), 42);
}

#[test]
fn test_outcome_map_or_else_ok() {
    let o: Outcome<&str, &str> = Outcome::ok("foo");
    assert_eq!(o.map_or_else(|_| 42, |s| s.len()), 3);
}

#[test]
fn test_outcome_map_or_else_error() {
    let o: Outcome<&str, &str> = Outcome::error("bar");
    assert_eq!(o.map_or_else(|_| 42, |s| s.len()), 42);
}

#[test]
fn test_outcome_map_or_else_fallback_sees_error() {
    let o: Outcome<u32, &str> = Outcome::error("abcd");
    assert_eq!(o.map_or_else(|e| e.len(), |_| 0), 4);
}

#[test]
fn test_outcome_map_error_ok_untouched() {
    let o: Outcome<i32, i32> = Outcome::ok(2);
    assert_eq!(o.map_error(|x| format!("code:{x}")), Outcome::ok(2));
}

#[test]
fn test_outcome_map_error_formats_code() {
    let o: Outcome<i32, i32> = Outcome::error(13);
    assert_eq!(o.map_error(|x| format!("code:{x}")), Outcome::error("code:13".to_string()));
}

#[test]
fn test_outcome_and_then_result_ok_then_error() {
    let o: Outcome<i32, &str> = Outcome::ok(2);
    assert_eq!(o.and_then_result(Outcome::<i32, &str>::error("late")), Outcome::error("late"));
}

#[test]
fn test_outcome_and_then_result_error_short_circuits() {
    let o: Outcome<i32, &str> = Outcome::error("early");
    assert_eq!(o.and_then_result(Outcome::<&str, &str>::ok("x")), Outcome::error("early"));
}

#[test]
fn test_outcome_and_then_result_keeps_first_error() {
    let o: Outcome<i32, &str> = Outcome::error("a");
    assert_eq!(o.and_then_result(Outcome::<i32, &str>::error("b")), Outcome::error("a"));
}

#[test]
fn test_outcome_and_then_result_ok_then_ok() {
    let o: Outcome<i32, &str> = Outcome::ok(2);
    assert_eq!(o.and_then_result(Outcome::<&str, &str>::ok("y")), Outcome::ok("y"));
}

#[test]
fn test_outcome_and_then_defers_second_step() {
    let calls = Cell::new(0);
    let o: Outcome<i32, &str> = Outcome::error("early");
    let chained = o.and_then(|x| {
        calls.set(calls.get() + 1);
        Outcome::ok(x + 1)
    });
    assert_eq!(chained, Outcome::error("early"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_outcome_or_else_ok_passes_through() {
    let o: Outcome<i32, &str> = Outcome::ok(42);
    let recovered: Outcome<i32, ()> = o.or_else(|_| Outcome::ok(0));
    assert_eq!(recovered, Outcome::ok(42));
}

#[test]
fn test_outcome_or_else_error_can_change_error_type() {
    let o: Outcome<i32, &str> = Outcome::error("12");
    let recovered: Outcome<i32, String> = o.or_else(|e| match e.parse::<i32>() {
        Ok(n) => Outcome::ok(n),
        Err(err) => Outcome::error(err.to_string()),
    });
    assert_eq!(recovered, Outcome::ok(12));
}

#[test]
fn test_outcome_as_ref_and_as_mut() {
    let mut o: Outcome<String, String> = Outcome::ok("a".to_string());
    assert_eq!(o.as_ref().map(String::len), Outcome::ok(1));

    if let Outcome::Ok(value) = o.as_mut() {
        value.push('b');
    }
    assert_eq!(o, Outcome::ok("ab".to_string()));
}

#[test]
fn test_outcome_unwrap_or_variants() {
    assert_eq!(Outcome::<i32, &str>::ok(1).unwrap_or(0), 1);
    assert_eq!(Outcome::<i32, &str>::error("e").unwrap_or(0), 0);
    assert_eq!(Outcome::<usize, &str>::error("four").unwrap_or_else(str::len), 4);
}

#[test]
fn test_outcome_inspect_only_sees_matching_variant() {
    let seen_ok = Cell::new(None);
    let seen_err = Cell::new(None);

    let ok = Outcome::<i32, i32>::ok(7)
        .inspect(|v| seen_ok.set(Some(*v)))
        .inspect_error(|e| seen_err.set(Some(*e)));
    assert_eq!(ok, Outcome::ok(7));
    assert_eq!(seen_ok.get(), Some(7));
    assert_eq!(seen_err.get(), None);
}

#[test]
fn test_outcome_result_round_trip() {
    let ok = Outcome::<i32, &str>::from_result(Ok(3));
    assert_eq!(ok.into_result(), Ok(3));

    let err = Outcome::<i32, &str>::from_result(Err("boom"));
    assert_eq!(err.into_result(), Err("boom"));
}

#[test]
fn test_outcome_flatten() {
    let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::ok(Outcome::ok(1));
    assert_eq!(nested.flatten(), Outcome::ok(1));

    let inner_err: Outcome<Outcome<i32, &str>, &str> = Outcome::ok(Outcome::error("inner"));
    assert_eq!(inner_err.flatten(), Outcome::error("inner"));
}

#[test]
#[should_panic(expected = "caller failure")]
fn test_outcome_closure_panic_propagates() {
    let o: Outcome<i32, &str> = Outcome::ok(1);
    let _ = o.map(|_| -> i32 { panic!("caller failure") });
}
