//! Dynamic value model and classification rules.
//!
//! Everything the engine matches (subjects, templates, extracted values)
//! is a [`Value`]. The enum is deliberately closed: it covers exactly the
//! value categories the matching rules distinguish, so classification is a
//! handful of total predicates instead of open-ended runtime probing.
//!
//! Classification drives the whole engine:
//! - **primitives** (`Undefined`, `Null`, `Bool`, `Number`, `String`)
//!   compare by strict equality and never recurse;
//! - **value-class wrappers** (`BoxedBool`, `BoxedNumber`, `BoxedString`,
//!   `Date`) compare by their underlying primitive value, never key-by-key;
//! - **regexes** compare by source pattern and flags, never key-by-key;
//! - **structural values** (`Array`, `Object`) are candidates for key-by-key
//!   recursive matching;
//! - **raw wrappers** escape extraction-token interpretation for one leaf,
//!   see [`crate::helpers::raw`].

use std::collections::BTreeMap;

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{CasewiseError, Result};

/// A dynamically typed runtime value.
///
/// Subjects and templates are both `Value` trees. `Object` keys are owned
/// strings; a key holding [`Value::Undefined`] is distinct from an absent
/// key, which matters for structural matching.
///
/// The derived `PartialEq` is plain structural equality (useful in tests and
/// collections). The engine's own comparison semantics (value-class
/// unwrapping, the NaN refinement) live in [`crate::equality::deep_equal`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Boxed boolean; compares via its wrapped value.
    BoxedBool(bool),
    /// Boxed number; compares via its wrapped value.
    BoxedNumber(f64),
    /// Boxed string; compares via its wrapped value.
    BoxedString(String),
    /// Timestamp in milliseconds; compares via its numeric value.
    Date(f64),
    Regex(RegexValue),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    /// Opaque carrier produced by [`crate::helpers::raw`]; compared by
    /// primitive equality of its payload, never recursed into.
    Raw(Box<Value>),
}

/// Flags carried by a [`RegexValue`].
///
/// `global` has no counterpart in the `regex` crate (it only affects
/// iteration semantics in the ecosystems this model interoperates with), so
/// it participates in equality but not in pattern validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexFlags {
    pub global: bool,
    pub ignore_case: bool,
    pub multiline: bool,
    pub dot_all: bool,
}

/// A regular-expression value: source pattern plus flags.
///
/// Two regex values are equal iff their source patterns are identical and
/// every flag matches exactly. Construction validates the pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct RegexValue {
    pattern: String,
    flags: RegexFlags,
}

impl RegexValue {
    /// Validate `pattern` and build a regex value.
    ///
    /// # Errors
    /// Returns [`CasewiseError::InvalidRegex`] if the pattern does not
    /// compile under the given flags.
    pub fn new(pattern: impl Into<String>, flags: RegexFlags) -> Result<Self> {
        let pattern = pattern.into();
        RegexBuilder::new(&pattern)
            .case_insensitive(flags.ignore_case)
            .multi_line(flags.multiline)
            .dot_matches_new_line(flags.dot_all)
            .build()
            .map_err(|err| CasewiseError::InvalidRegex(err.to_string()))?;
        Ok(Self { pattern, flags })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> RegexFlags {
        self.flags
    }
}

/// Built-in object classes usable with [`crate::helpers::instance_of`].
///
/// `Number`, `String`, and `Boolean` name the boxed wrapper classes; bare
/// primitives are not instances of anything. `Object` is the root class:
/// every non-primitive value is an instance of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectClass {
    Number,
    String,
    Boolean,
    Date,
    Regex,
    Array,
    Object,
}

impl Value {
    /// True for `Undefined`, `Null`, booleans, numbers (including NaN), and
    /// strings. Boxed wrappers are not primitives.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    /// True for the boxed wrappers and dates: values that compare via their
    /// underlying primitive, never key-by-key.
    pub fn is_value_class(&self) -> bool {
        matches!(
            self,
            Value::BoxedBool(_) | Value::BoxedNumber(_) | Value::BoxedString(_) | Value::Date(_)
        )
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, Value::Regex(_))
    }

    /// True for arrays and objects: candidates for key-by-key recursive
    /// matching.
    pub fn is_structural(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Value::Raw(_))
    }

    /// The dynamic-typing type string used by [`crate::helpers::type_of`].
    ///
    /// `Null` reports `"object"` here; `type_of` special-cases it so that
    /// `type_of("null")` matches only `Null` and `type_of("object")`
    /// excludes it.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            _ => "object",
        }
    }

    /// Class-membership test backing [`crate::helpers::instance_of`].
    pub fn instance_of(&self, class: ObjectClass) -> bool {
        match class {
            ObjectClass::Number => matches!(self, Value::BoxedNumber(_)),
            ObjectClass::String => matches!(self, Value::BoxedString(_)),
            ObjectClass::Boolean => matches!(self, Value::BoxedBool(_)),
            ObjectClass::Date => matches!(self, Value::Date(_)),
            ObjectClass::Regex => matches!(self, Value::Regex(_)),
            ObjectClass::Array => matches!(self, Value::Array(_)),
            ObjectClass::Object => !self.is_primitive(),
        }
    }

    /// Unwrap a value-class wrapper to its underlying primitive. Dates
    /// unwrap to their numeric timestamp.
    pub(crate) fn value_of(&self) -> Option<Value> {
        match self {
            Value::BoxedBool(b) => Some(Value::Bool(*b)),
            Value::BoxedNumber(n) => Some(Value::Number(*n)),
            Value::BoxedString(s) => Some(Value::String(s.clone())),
            Value::Date(millis) => Some(Value::Number(*millis)),
            _ => None,
        }
    }

    /// A date value from a millisecond timestamp.
    pub fn date(millis: f64) -> Value {
        Value::Date(millis)
    }

    /// A validated regex value.
    ///
    /// # Errors
    /// Returns [`CasewiseError::InvalidRegex`] if the pattern does not
    /// compile.
    pub fn regex(pattern: impl Into<String>, flags: RegexFlags) -> Result<Value> {
        Ok(Value::Regex(RegexValue::new(pattern, flags)?))
    }

    pub fn boxed_bool(value: bool) -> Value {
        Value::BoxedBool(value)
    }

    pub fn boxed_number(value: f64) -> Value {
        Value::BoxedNumber(value)
    }

    pub fn boxed_string(value: impl Into<String>) -> Value {
        Value::BoxedString(value.into())
    }

    /// Parse a JSON document into a value tree.
    ///
    /// # Errors
    /// Returns [`CasewiseError::InvalidJson`] on malformed input.
    pub fn from_json(json: &str) -> Result<Value> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        Ok(Value::from(parsed))
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, item)| (key, Value::from(item)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
