//! The match dispatcher.
//!
//! [`match_value`] evaluates an ordered list of matcher/handler pairs
//! against a subject and returns the result of the first pair whose matcher
//! succeeds. Registration and evaluation are interleaved: each
//! [`Cases::case`] call evaluates its matcher immediately, and once a case
//! has resolved, every later registration is a no-op whose matcher and
//! handler are never run; the short-circuit is observable.

use std::fmt;
use std::sync::Arc;

use crate::config::MatchConfig;
use crate::equality::literal_eq;
use crate::structural::{structural_match_with, Extractions};
use crate::value::Value;

/// Predicate matcher signature: inspects the subject, answers yes or no.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A registered matcher.
///
/// `Value` matchers are classified at case-evaluation time: primitives
/// compare literally, everything else is a structural template. The
/// wildcard and the predicate variants are their own cases, so a sentinel
/// can never collide with legitimate data.
#[derive(Clone)]
pub enum Matcher {
    /// Wildcard: matches any subject. Conventionally the last case.
    Any,
    /// A literal (primitive) or structural template (non-primitive) value.
    Value(Value),
    /// An arbitrary predicate over the subject.
    Predicate(Predicate),
}

impl Matcher {
    /// Wrap a closure as a predicate matcher.
    pub fn predicate<F>(predicate: F) -> Matcher
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Matcher::Predicate(Arc::new(predicate))
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Any => f.write_str("Any"),
            Matcher::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Matcher::Predicate(_) => f.write_str("Predicate"),
        }
    }
}

impl From<Value> for Matcher {
    fn from(value: Value) -> Self {
        Matcher::Value(value)
    }
}

impl From<bool> for Matcher {
    fn from(value: bool) -> Self {
        Matcher::Value(Value::from(value))
    }
}

impl From<f64> for Matcher {
    fn from(value: f64) -> Self {
        Matcher::Value(Value::from(value))
    }
}

impl From<i64> for Matcher {
    fn from(value: i64) -> Self {
        Matcher::Value(Value::from(value))
    }
}

impl From<i32> for Matcher {
    fn from(value: i32) -> Self {
        Matcher::Value(Value::from(value))
    }
}

impl From<&str> for Matcher {
    fn from(value: &str) -> Self {
        Matcher::Value(Value::from(value))
    }
}

impl From<String> for Matcher {
    fn from(value: String) -> Self {
        Matcher::Value(Value::from(value))
    }
}

/// The result of a dispatch: the first successful case's result, or the
/// no-match sentinel.
///
/// `Miss` is a dedicated variant rather than `Option::None` so that a
/// handler may legitimately return any value, including `Option<_>` or
/// `()`, without colliding with "no case matched".
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<R> {
    Hit(R),
    Miss,
}

impl<R> Outcome<R> {
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit(_))
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, Outcome::Miss)
    }

    /// The matched result, if any.
    pub fn hit(self) -> Option<R> {
        match self {
            Outcome::Hit(result) => Some(result),
            Outcome::Miss => None,
        }
    }

    /// The matched result, or `default` on a miss.
    pub fn hit_or(self, default: R) -> R {
        match self {
            Outcome::Hit(result) => result,
            Outcome::Miss => default,
        }
    }
}

/// How a registered matcher is interpreted against the subject, decided
/// once per case evaluation.
enum CaseKind<'m> {
    Wildcard,
    Literal(&'m Value),
    Template(&'m Value),
    Predicate(&'m Predicate),
}

fn classify(matcher: &Matcher) -> CaseKind<'_> {
    match matcher {
        Matcher::Any => CaseKind::Wildcard,
        Matcher::Predicate(predicate) => CaseKind::Predicate(predicate),
        Matcher::Value(value) if value.is_primitive() => CaseKind::Literal(value),
        Matcher::Value(value) => CaseKind::Template(value),
    }
}

/// Case-registration handle passed to the closure given to [`match_value`].
///
/// Two states: pending, or resolved with the first successful case's
/// result. Resolution is final; later cases are skipped entirely.
pub struct Cases<'s, R> {
    subject: &'s Value,
    config: MatchConfig,
    outcome: Outcome<R>,
}

impl<R> Cases<'_, R> {
    /// Register a case whose handler computes the result.
    ///
    /// On a structural match, the handler receives the resolved extraction
    /// arguments in positional order (gaps filled with
    /// [`Value::Undefined`]); for every other matcher kind it receives an
    /// empty slice.
    pub fn case<M, F>(&mut self, matcher: M, handler: F)
    where
        M: Into<Matcher>,
        F: FnOnce(&[Value]) -> R,
    {
        if self.outcome.is_hit() {
            return;
        }
        if let Some(args) = self.evaluate(&matcher.into()) {
            self.outcome = Outcome::Hit(handler(&args));
        }
    }

    /// Register a case whose result is a plain value instead of a handler.
    pub fn case_value<M>(&mut self, matcher: M, result: R)
    where
        M: Into<Matcher>,
    {
        self.case(matcher, |_| result);
    }

    /// The subject under dispatch.
    pub fn subject(&self) -> &Value {
        self.subject
    }

    fn evaluate(&self, matcher: &Matcher) -> Option<Vec<Value>> {
        match classify(matcher) {
            CaseKind::Wildcard => Some(Vec::new()),
            CaseKind::Literal(value) => {
                literal_eq(value, self.subject, &self.config).then(Vec::new)
            }
            CaseKind::Predicate(predicate) => predicate(self.subject).then(Vec::new),
            CaseKind::Template(template) => {
                structural_match_with(self.subject, template, &self.config)
                    .map(Extractions::into_args)
            }
        }
    }
}

/// Dispatch `subject` against the cases registered by `register`.
///
/// `register` is invoked exactly once, synchronously; every handler runs to
/// completion before `match_value` returns. Case order is priority order,
/// at most one handler fires, and [`Outcome::Miss`] is returned when no
/// case succeeds.
///
/// # Examples
///
/// ```rust,ignore
/// use casewise::{match_value, type_of, Matcher, Value};
///
/// let subject = Value::from("foo");
/// let outcome = match_value(&subject, |cases| {
///     cases.case_value("foo", "you got foo");
///     cases.case(type_of("string"), |_| "some other string");
///     cases.case_value(Matcher::Any, "something else");
/// });
/// assert_eq!(outcome.hit(), Some("you got foo"));
/// ```
pub fn match_value<R, F>(subject: &Value, register: F) -> Outcome<R>
where
    F: FnOnce(&mut Cases<'_, R>),
{
    match_value_with(subject, &MatchConfig::default(), register)
}

/// [`match_value`] under an explicit [`MatchConfig`].
pub fn match_value_with<R, F>(subject: &Value, config: &MatchConfig, register: F) -> Outcome<R>
where
    F: FnOnce(&mut Cases<'_, R>),
{
    let mut cases = Cases {
        subject,
        config: *config,
        outcome: Outcome::Miss,
    };
    register(&mut cases);
    cases.outcome
}
