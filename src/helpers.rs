//! Matcher-factory helpers.
//!
//! Small stateless factories producing predicate matchers for the
//! dispatcher, plus [`raw`], which builds the template leaf that escapes
//! extraction-token interpretation.

use crate::dispatch::Matcher;
use crate::equality::{deep_equal, identical};
use crate::value::{ObjectClass, Value};

/// Matcher on the subject's dynamic type string: `"undefined"`,
/// `"boolean"`, `"number"`, `"string"`, `"object"`, or `"null"`.
///
/// `type_of("null")` matches only `Null`, and `type_of("object")` excludes
/// `Null`: the one place the `"object"`-typed-null quirk is corrected.
/// Unknown names produce a matcher that never matches; there is no
/// ahead-of-time validation.
pub fn type_of(name: &str) -> Matcher {
    let name = name.to_string();
    Matcher::predicate(move |subject| {
        if matches!(subject, Value::Null) {
            return name == "null";
        }
        subject.type_name() == name
    })
}

/// Matcher on membership in a built-in object class.
///
/// Follows instance semantics: `instance_of(ObjectClass::Number)` matches a
/// boxed number but never a bare primitive, and `ObjectClass::Object`
/// matches every non-primitive value.
pub fn instance_of(class: ObjectClass) -> Matcher {
    Matcher::predicate(move |subject| subject.instance_of(class))
}

/// Matcher on strict identity with any of `values`.
///
/// Identity, not deep equality: primitives match by strict primitive
/// equality (NaN excluded, as in strict comparison), and non-primitive
/// listed values never match, since identity is not observable for owned
/// values.
pub fn one_of<I>(values: I) -> Matcher
where
    I: IntoIterator<Item = Value>,
{
    let values: Vec<Value> = values.into_iter().collect();
    Matcher::predicate(move |subject| values.iter().any(|candidate| identical(candidate, subject)))
}

/// Matcher wrapping [`deep_equal`]: the subject must be deeply equal to
/// `template`, not merely a partial structural match of it.
pub fn exactly(template: impl Into<Value>) -> Matcher {
    let template = template.into();
    Matcher::predicate(move |subject| deep_equal(&template, subject))
}

/// Wrap a value for literal comparison inside a template.
///
/// The resulting leaf is never interpreted as an extraction token and never
/// recursed into; most commonly used for strings that resemble tokens,
/// such as `"$15"`. Non-primitive payloads would compare by identity, which
/// is not observable for owned values, so they never match.
pub fn raw(value: impl Into<Value>) -> Value {
    Value::Raw(Box::new(value.into()))
}
