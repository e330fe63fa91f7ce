//! Partial structural matching with positional extraction.
//!
//! A template constrains only the keys it mentions: subject keys absent from
//! the template are ignored, and a template array of length N constrains
//! only indices `0..N-1`, so shorter templates can extract trailing
//! elements. Template leaves are interpreted in order:
//!
//! 1. a string of the form `$<digits>` is an extraction token; the subject
//!    value at that position is recorded instead of compared;
//! 2. a raw wrapper unwraps to its payload and compares by primitive
//!    equality, suppressing both token interpretation and recursion;
//! 3. primitive pairs compare literally; a primitive never matches a
//!    non-primitive;
//! 4. value-class wrappers and regexes compare by the built-in equality
//!    rule;
//! 5. anything else recurses, threading one shared extraction vector.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::MatchConfig;
use crate::equality::{builtin_eq, involves_builtin, literal_eq};
use crate::value::Value;

static EXTRACT_TOKEN: OnceLock<Regex> = OnceLock::new();

/// The `$<digits>` extraction-token pattern.
fn extract_token() -> &'static Regex {
    EXTRACT_TOKEN.get_or_init(|| Regex::new(r"^\$(\d+)$").expect("extraction token pattern"))
}

/// Parse an extraction token into its position.
///
/// Returns `None` for ordinary strings. A digit string that overflows
/// `usize` is treated as an ordinary string, not a token.
pub(crate) fn extraction_index(text: &str) -> Option<usize> {
    let captures = extract_token().captures(text)?;
    captures[1].parse().ok()
}

/// Ordered, sparse mapping from extraction position to extracted value.
///
/// Built incrementally during one match attempt; positions are written by
/// `$<digits>` tokens and may leave gaps. [`Extractions::into_args`]
/// resolves the vector positionally for handler invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extractions {
    slots: BTreeMap<usize, Value>,
}

impl Extractions {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, position: usize, value: Value) {
        self.slots.insert(position, value);
    }

    /// True when no token wrote a position.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The value recorded at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&Value> {
        self.slots.get(&position)
    }

    /// Resolve positionally: one argument per position up to the maximum
    /// recorded index, in ascending order, with never-written gaps filled by
    /// [`Value::Undefined`]. Empty when nothing was recorded.
    pub fn into_args(self) -> Vec<Value> {
        let Some((&max_position, _)) = self.slots.iter().next_back() else {
            return Vec::new();
        };
        let mut args = vec![Value::Undefined; max_position + 1];
        for (position, value) in self.slots {
            args[position] = value;
        }
        args
    }
}

/// Partially match `subject` against `template` with default configuration.
///
/// Returns the extraction vector (possibly empty) on success, `None` on
/// mismatch. Extracted values are cloned out of the subject.
pub fn structural_match(subject: &Value, template: &Value) -> Option<Extractions> {
    structural_match_with(subject, template, &MatchConfig::default())
}

/// [`structural_match`] under an explicit [`MatchConfig`].
pub fn structural_match_with(
    subject: &Value,
    template: &Value,
    config: &MatchConfig,
) -> Option<Extractions> {
    let mut extractions = Extractions::new();
    if matches_template(subject, template, &mut extractions, config) {
        Some(extractions)
    } else {
        None
    }
}

fn matches_template(
    subject: &Value,
    template: &Value,
    extractions: &mut Extractions,
    config: &MatchConfig,
) -> bool {
    // Templates that are not key-by-key candidates resolve directly.
    if let Value::Raw(payload) = template {
        return raw_eq(payload, subject, config);
    }
    if involves_builtin(subject, template) {
        return builtin_eq(subject, template, config);
    }

    match (subject, template) {
        (Value::Array(subject_items), Value::Array(template_items)) => {
            if subject_items.len() < template_items.len() {
                return false;
            }
            for (subject_item, template_item) in subject_items.iter().zip(template_items) {
                if !matches_entry(subject_item, template_item, extractions, config) {
                    return false;
                }
            }
            true
        }
        (Value::Object(subject_entries), Value::Object(template_entries)) => {
            for (key, template_item) in template_entries {
                let Some(subject_item) = subject_entries.get(key) else {
                    return false;
                };
                if !matches_entry(subject_item, template_item, extractions, config) {
                    return false;
                }
            }
            true
        }
        _ => false,
    }
}

fn matches_entry(
    subject: &Value,
    template: &Value,
    extractions: &mut Extractions,
    config: &MatchConfig,
) -> bool {
    if let Value::String(text) = template {
        if let Some(position) = extraction_index(text) {
            extractions.record(position, subject.clone());
            return true;
        }
    }
    if let Value::Raw(payload) = template {
        return raw_eq(payload, subject, config);
    }

    match (template.is_primitive(), subject.is_primitive()) {
        (true, true) => literal_eq(template, subject, config),
        (false, false) => matches_template(subject, template, extractions, config),
        _ => false,
    }
}

/// Raw-wrapper comparison: primitive equality of the payload. Identity of
/// non-primitive payloads is not observable for owned values, so those never
/// match.
fn raw_eq(payload: &Value, subject: &Value, config: &MatchConfig) -> bool {
    payload.is_primitive() && subject.is_primitive() && literal_eq(payload, subject, config)
}
