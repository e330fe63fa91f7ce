//! # Casewise
//!
//! Scala-style structural pattern matching over dynamic values: a dispatcher
//! evaluates an ordered list of matcher/handler pairs against a subject and
//! returns the result of the first pair whose matcher succeeds, optionally
//! extracting sub-values positionally.
//!
//! ## Quick Start
//!
//! ### Simple dispatch
//!
//! ```rust,ignore
//! use casewise::{match_value, type_of, Matcher, Value};
//!
//! let subject = Value::from("baz");
//! let outcome = match_value(&subject, |cases| {
//!     cases.case_value("foo", "you got foo".to_string());
//!     cases.case_value("bar", "you got bar".to_string());
//!     cases.case(type_of("string"), |_| "some other string".to_string());
//!     cases.case(type_of("number"), |_| "a number".to_string());
//!     cases.case_value(Matcher::Any, "something else".to_string());
//! });
//! assert_eq!(outcome.hit(), Some("some other string".to_string()));
//! ```
//!
//! ### Structural templates with extraction
//!
//! Templates match partially, constraining only the keys they mention,
//! and `$<digits>` leaves extract the subject value at that position into
//! the handler's argument slice:
//!
//! ```rust,ignore
//! use casewise::{match_value, Value};
//! use serde_json::json;
//!
//! let subject = Value::from(json!([1, 2, 3]));
//! let outcome = match_value(&subject, |cases| {
//!     cases.case(Value::from(json!([1, "$0", "$1"])), |args| {
//!         format!("{:?} then {:?}", args[0], args[1])
//!     });
//! });
//! # let _ = outcome;
//! ```
//!
//! ### Exact matching
//!
//! ```rust,ignore
//! use casewise::{exactly, match_value, Matcher, Value};
//! use serde_json::json;
//!
//! let subject = Value::from(json!([1, 2, 3]));
//! let outcome = match_value(&subject, |cases| {
//!     cases.case_value(exactly(Value::from(json!([1, 2, 3]))), "works");
//!     cases.case_value(Matcher::Any, "wrong");
//! });
//! assert_eq!(outcome.hit(), Some("works"));
//! ```

pub mod config;
pub mod dispatch;
pub mod equality;
pub mod error;
pub mod helpers;
pub mod structural;
pub mod value;

// Dispatcher, the public entry point
pub use dispatch::{match_value, match_value_with, Cases, Matcher, Outcome, Predicate};

// Matcher-factory helpers
pub use helpers::{exactly, instance_of, one_of, raw, type_of};

// The two engines underneath the dispatcher
pub use equality::{deep_equal, deep_equal_with};
pub use structural::{structural_match, structural_match_with, Extractions};

// Value model and configuration
pub use config::MatchConfig;
pub use error::{CasewiseError, Result};
pub use value::{ObjectClass, RegexFlags, RegexValue, Value};
