//! Deep structural equality.
//!
//! Powers [`crate::helpers::exactly`] and the value-class/regex leaf rule of
//! the structural matcher. The rule ladder, evaluated top to bottom:
//!
//! 1. both primitive: strict equality, refined so NaN equals NaN;
//! 2. exactly one primitive: not equal;
//! 3. both regex: identical source pattern and identical flags;
//! 4. either a value-class wrapper: both sides must unwrap to strictly
//!    equal primitives (wrapper kind unchecked by default, see
//!    [`crate::MatchConfig::strict_value_class_kind`]);
//! 5. both structural: same own-key count and every key of the left side
//!    present on the right with deeply equal values.
//!
//! The `Value` model is acyclic by construction, so no cycle guard is
//! needed.

use crate::config::MatchConfig;
use crate::value::Value;

/// Full structural equality with default configuration.
///
/// Unlike the derived `PartialEq` on [`Value`], this applies the engine's
/// comparison semantics: NaN is reflexive, value-class wrappers compare by
/// their unwrapped primitive, and raw wrappers compare through their
/// payloads.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    deep_equal_with(a, b, &MatchConfig::default())
}

/// [`deep_equal`] under an explicit [`MatchConfig`].
///
/// Only `strict_value_class_kind` is consulted here; the primitive rule
/// keeps NaN reflexive regardless of `reflexive_nan`.
pub fn deep_equal_with(a: &Value, b: &Value, config: &MatchConfig) -> bool {
    let a = unwrap_raw(a);
    let b = unwrap_raw(b);

    if a.is_primitive() && b.is_primitive() {
        return strict_eq(a, b, true);
    }
    if a.is_primitive() || b.is_primitive() {
        return false;
    }
    if involves_builtin(a, b) {
        return builtin_eq(a, b, config);
    }

    match (a, b) {
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(av, bv)| deep_equal_with(av, bv, config))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, av)| {
                    right
                        .get(key)
                        .is_some_and(|bv| deep_equal_with(av, bv, config))
                })
        }
        _ => false,
    }
}

/// True when either side is a value-class wrapper or a regex, i.e. the pair
/// is decided by [`builtin_eq`] rather than key-by-key recursion.
pub(crate) fn involves_builtin(a: &Value, b: &Value) -> bool {
    a.is_value_class() || b.is_value_class() || a.is_regex() || b.is_regex()
}

/// The value-class/regex comparison rule.
///
/// Assumes [`involves_builtin`] holds for non-primitive pairs; primitive
/// operands are still handled so callers may pass leaves directly.
pub(crate) fn builtin_eq(a: &Value, b: &Value, config: &MatchConfig) -> bool {
    if a.is_primitive() && b.is_primitive() {
        return literal_eq(a, b, config);
    }
    if a.is_primitive() || b.is_primitive() {
        return false;
    }

    match (a, b) {
        (Value::Regex(left), Value::Regex(right)) => left == right,
        (Value::Regex(_), _) | (_, Value::Regex(_)) => false,
        _ => {
            if config.strict_value_class_kind
                && std::mem::discriminant(a) != std::mem::discriminant(b)
            {
                return false;
            }
            match (a.value_of(), b.value_of()) {
                (Some(left), Some(right)) => strict_eq(&left, &right, false),
                _ => false,
            }
        }
    }
}

/// Literal-case equality: strict primitive equality with the NaN policy
/// taken from `config`.
pub(crate) fn literal_eq(a: &Value, b: &Value, config: &MatchConfig) -> bool {
    strict_eq(a, b, config.reflexive_nan)
}

/// Strict identity over primitives. Never true across types; `identical` is
/// the `one_of` flavor with NaN excluded.
pub(crate) fn identical(a: &Value, b: &Value) -> bool {
    strict_eq(a, b, false)
}

fn strict_eq(a: &Value, b: &Value, reflexive_nan: bool) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => {
            x == y || (reflexive_nan && x.is_nan() && y.is_nan())
        }
        (Value::String(x), Value::String(y)) => x == y,
        _ => false,
    }
}

fn unwrap_raw(value: &Value) -> &Value {
    match value {
        Value::Raw(inner) => unwrap_raw(inner),
        _ => value,
    }
}
