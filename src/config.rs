//! Configuration for match evaluation.
//!
//! The matching rules have two deliberately configurable corners, both
//! documented here rather than decided silently. The defaults reproduce the
//! reference behavior; [`MatchConfig::strict`] opts into the stricter
//! alternatives.

use serde::{Deserialize, Serialize};

/// Behavior knobs for one dispatch, passed to
/// [`crate::match_value_with`], [`crate::structural_match_with`], and
/// [`crate::deep_equal_with`].
///
/// # Examples
///
/// ```rust,ignore
/// use casewise::{match_value_with, MatchConfig, Value};
///
/// let config = MatchConfig::strict();
/// let outcome = match_value_with(&Value::Number(f64::NAN), &config, |cases| {
///     cases.case_value(f64::NAN, "reflexive");
/// });
/// assert!(outcome.is_miss()); // strict IEEE semantics: NaN never matches
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Whether a literal `NaN` case (or a `NaN` leaf inside a structural
    /// template) matches a `NaN` subject.
    ///
    /// Default `true`: literal matching mirrors the deep-equality NaN rule,
    /// so `case(f64::NAN, ...)` fires on a `NaN` subject. Set to `false` for
    /// strict IEEE inequality, under which no literal `NaN` case can ever
    /// match. Deep equality itself is unaffected; there NaN is always
    /// reflexive, which is what distinguishes `exactly` from literal cases.
    pub reflexive_nan: bool,

    /// Whether value-class comparison requires the same wrapper kind.
    ///
    /// Default `false`: wrappers compare purely by their unwrapped primitive
    /// value, so a `Date` equals a `BoxedNumber` holding the same timestamp.
    /// Set to `true` to additionally require that both sides are the same
    /// kind of wrapper.
    pub strict_value_class_kind: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            reflexive_nan: true,
            strict_value_class_kind: false,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict preset: IEEE NaN inequality and kind-checked value-class
    /// comparison.
    pub fn strict() -> Self {
        Self {
            reflexive_nan: false,
            strict_value_class_kind: true,
        }
    }
}
