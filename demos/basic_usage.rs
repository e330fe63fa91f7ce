//! Tour of the casewise public API.
//!
//! Run with: cargo run --example basic_usage

use casewise::{exactly, match_value, one_of, raw, type_of, Matcher, Outcome, Value};
use serde_json::json;

fn describe(subject: &Value) -> String {
    match_value(subject, |cases| {
        cases.case_value("foo", "you got foo".to_string());
        cases.case(type_of("number"), |_| "a number".to_string());
        cases.case(Value::from(json!({"user": {"name": "$0"}})), |args| {
            format!("a user record for {:?}", args[0])
        });
        cases.case_value(Matcher::Any, "something else".to_string());
    })
    .hit_or("unreachable: wildcard case".to_string())
}

fn main() {
    println!("{}", describe(&Value::from("foo")));
    println!("{}", describe(&Value::from(25i64)));
    println!(
        "{}",
        describe(&Value::from(json!({"user": {"name": "alice", "id": 7}})))
    );
    println!("{}", describe(&Value::Null));

    // Positional extraction from arrays: $0 and $1 bind subject values.
    let subject = Value::from(json!([1, 2, 3]));
    let outcome = match_value(&subject, |cases| {
        cases.case(Value::from(json!([1, "$0", "$1"])), |args| {
            format!("tail elements: {:?}, {:?}", args[0], args[1])
        });
    });
    if let Outcome::Hit(message) = outcome {
        println!("{message}");
    }

    // raw() escapes extraction-token interpretation for one leaf.
    let subject = Value::from(json!({"price": "$15"}));
    let mut template = std::collections::BTreeMap::new();
    template.insert("price".to_string(), raw("$15"));
    let outcome = match_value(&subject, |cases| {
        cases.case_value(Value::Object(template), "literal dollar string");
    });
    println!("raw leaf: {:?}", outcome);

    // exactly() demands deep equality; one_of() checks identity.
    let outcome = match_value(&Value::from(json!([1, 2, 3])), |cases| {
        cases.case_value(exactly(Value::from(json!([1, 2]))), "prefix only");
        cases.case_value(exactly(Value::from(json!([1, 2, 3]))), "full clone");
        cases.case_value(Matcher::Any, "fallback");
    });
    println!("exactly: {:?}", outcome);

    let outcome = match_value(&Value::from(3i64), |cases| {
        cases.case_value(
            one_of(vec![Value::from("three"), Value::from(3i64)]),
            "listed",
        );
        cases.case_value(Matcher::Any, "unlisted");
    });
    println!("one_of: {:?}", outcome);
}
