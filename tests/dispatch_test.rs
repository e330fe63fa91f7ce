//! Dispatcher behavior: case cascade, first-match-wins, the miss sentinel.

use std::cell::Cell;

use casewise::{
    instance_of, match_value, match_value_with, one_of, type_of, MatchConfig, Matcher,
    ObjectClass, Outcome, RegexFlags, Value,
};

fn describe(subject: &Value) -> Outcome<String> {
    match_value(subject, |cases| {
        cases.case_value("foo", "You got foo".to_string());
        cases.case_value("bar", "You got bar".to_string());
        cases.case(type_of("string"), |_| "You got some other string".to_string());
        cases.case(type_of("number"), |_| "You got a number".to_string());
        cases.case(instance_of(ObjectClass::Date), |_| {
            "You got a date".to_string()
        });
        cases.case_value(Matcher::Any, "You got something else".to_string());
    })
}

#[test]
fn test_matches_primitives() {
    assert_eq!(
        describe(&Value::from("foo")),
        Outcome::Hit("You got foo".to_string())
    );
}

#[test]
fn test_differentiates_between_primitives() {
    assert_eq!(
        describe(&Value::from("bar")),
        Outcome::Hit("You got bar".to_string())
    );
}

#[test]
fn test_cascades_down_the_cases() {
    assert_eq!(
        describe(&Value::from("baz")),
        Outcome::Hit("You got some other string".to_string())
    );
    assert_eq!(
        describe(&Value::from(25i64)),
        Outcome::Hit("You got a number".to_string())
    );
    assert_eq!(
        describe(&Value::date(1234.0)),
        Outcome::Hit("You got a date".to_string())
    );
}

#[test]
fn test_wildcard_catches_the_rest() {
    assert_eq!(
        describe(&Value::Null),
        Outcome::Hit("You got something else".to_string())
    );
}

#[test]
fn test_returns_miss_when_nothing_matches() {
    let outcome: Outcome<&str> = match_value(&Value::from("foo"), |cases| {
        cases.case_value("bar", "bar");
    });
    assert_eq!(outcome, Outcome::Miss);
}

#[test]
fn test_correctly_matches_null() {
    let outcome = match_value(&Value::Null, |cases| {
        cases.case_value(type_of("object"), "incorrect");
        cases.case_value(Value::Null, "correct");
    });
    assert_eq!(outcome, Outcome::Hit("correct"));
}

#[test]
fn test_matches_null_with_type_of_null() {
    let outcome = match_value(&Value::Null, |cases| {
        cases.case_value(type_of("null"), "correct");
        cases.case_value(Matcher::Any, "WRONG");
    });
    assert_eq!(outcome, Outcome::Hit("correct"));
}

#[test]
fn test_one_of_matches_listed_values() {
    let outcome = match_value(&Value::from(3i64), |cases| {
        cases.case_value(
            one_of(vec![Value::from("foo"), Value::from("bar"), Value::from(3i64)]),
            "correct",
        );
        cases.case_value(Matcher::Any, "WRONG");
    });
    assert_eq!(outcome, Outcome::Hit("correct"));
}

#[test]
fn test_one_of_rejects_unlisted_values() {
    let outcome = match_value(&Value::from("1"), |cases| {
        cases.case_value(one_of(vec![Value::from("2"), Value::from(1i64)]), "WRONG");
        cases.case_value(Matcher::Any, "correct");
    });
    assert_eq!(outcome, Outcome::Hit("correct"));
}

#[test]
fn test_any_function_as_matcher() {
    let outcome = match_value(&Value::from("foo"), |cases| {
        cases.case_value(
            Matcher::predicate(|v| matches!(v, Value::String(s) if s.contains("fo"))),
            "correct",
        );
        cases.case_value(Matcher::Any, "WRONG");
    });
    assert_eq!(outcome, Outcome::Hit("correct"));
}

#[test]
fn test_wildcard_matches_anything() {
    let outcome = match_value(&Value::from("hello"), |cases| {
        cases.case_value(Matcher::Any, "yup");
    });
    assert_eq!(outcome, Outcome::Hit("yup"));
}

#[test]
fn test_nan_literal_matches_by_default() {
    let outcome = match_value(&Value::Number(f64::NAN), |cases| {
        cases.case_value(f64::NAN, "correct");
        cases.case_value(Matcher::Any, "wrong");
    });
    assert_eq!(outcome, Outcome::Hit("correct"));
}

#[test]
fn test_nan_literal_under_strict_config() {
    let outcome = match_value_with(&Value::Number(f64::NAN), &MatchConfig::strict(), |cases| {
        cases.case_value(f64::NAN, "reflexive");
        cases.case_value(Matcher::Any, "strict");
    });
    assert_eq!(outcome, Outcome::Hit("strict"));
}

#[test]
fn test_first_match_wins() {
    let first = Cell::new(0u32);
    let second = Cell::new(0u32);

    let outcome = match_value(&Value::from("foo"), |cases| {
        cases.case("foo", |_| {
            first.set(first.get() + 1);
            "h1"
        });
        cases.case(type_of("string"), |_| {
            second.set(second.get() + 1);
            "h2"
        });
    });

    assert_eq!(outcome, Outcome::Hit("h1"));
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 0);
}

#[test]
fn test_result_is_never_overwritten() {
    let outcome = match_value(&Value::from(1i64), |cases| {
        cases.case_value(Matcher::Any, "first");
        cases.case_value(Matcher::Any, "second");
        cases.case_value(1i64, "third");
    });
    assert_eq!(outcome, Outcome::Hit("first"));
}

#[test]
fn test_handlers_may_return_none_like_values() {
    // Miss stays distinguishable from a handler that returns None
    let outcome: Outcome<Option<i32>> = match_value(&Value::from("x"), |cases| {
        cases.case_value("x", None);
    });
    assert_eq!(outcome, Outcome::Hit(None));
    assert!(outcome.is_hit());

    let missed: Outcome<Option<i32>> = match_value(&Value::from("y"), |cases| {
        cases.case_value("x", None);
    });
    assert!(missed.is_miss());
}

#[test]
fn test_outcome_hit_or() {
    let outcome = match_value(&Value::from("nope"), |cases| {
        cases.case_value("yes", 1);
    });
    assert_eq!(outcome.hit_or(0), 0);
}

#[test]
fn test_boxed_wrapper_cases() {
    let check = |subject: Value, good: Value, bad: Value| {
        let hits = Cell::new(0u32);
        match_value(&subject, |cases| {
            cases.case(good, |_| hits.set(hits.get() + 1));
        });
        assert_eq!(hits.get(), 1, "matching wrapper should fire");

        let hits = Cell::new(0u32);
        match_value(&subject, |cases| {
            cases.case(bad, |_| hits.set(hits.get() + 1));
        });
        assert_eq!(hits.get(), 0, "wrapper of a different value should not fire");
    };

    check(
        Value::boxed_number(1.0),
        Value::boxed_number(1.0),
        Value::boxed_number(2.0),
    );
    check(
        Value::boxed_string("foo"),
        Value::boxed_string("foo"),
        Value::boxed_string("bar"),
    );
    check(
        Value::boxed_bool(true),
        Value::boxed_bool(true),
        Value::boxed_bool(false),
    );
    check(
        Value::date(1234.0),
        Value::date(1234.0),
        Value::date(11234.0),
    );
}

#[test]
fn test_regex_cases() {
    let ignore_case = RegexFlags {
        ignore_case: true,
        ..RegexFlags::default()
    };
    let subject = Value::regex(r"[a-z\d]+", ignore_case).unwrap();

    let outcome = match_value(&subject, |cases| {
        cases.case_value(Value::regex(r"[a-z\d]+", ignore_case).unwrap(), "same");
        cases.case_value(Matcher::Any, "other");
    });
    assert_eq!(outcome, Outcome::Hit("same"));

    let global_too = RegexFlags {
        global: true,
        ignore_case: true,
        ..RegexFlags::default()
    };
    let outcome = match_value(&subject, |cases| {
        cases.case_value(Value::regex(r"[a-z\d]+", global_too).unwrap(), "flags differ");
        cases.case_value(Matcher::Any, "other");
    });
    assert_eq!(outcome, Outcome::Hit("other"));

    let outcome = match_value(&subject, |cases| {
        cases.case_value(
            Value::regex(r"(?:[a-f\d]{3}){1,2}", ignore_case).unwrap(),
            "source differs",
        );
        cases.case_value(Matcher::Any, "other");
    });
    assert_eq!(outcome, Outcome::Hit("other"));
}
