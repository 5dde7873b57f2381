//! Intent classification for coach-nlu.
//!
//! An ordered, immutable rule table maps normalized text to exactly one
//! [`crate::core::Intent`]. Matching is first-rule-wins substring search;
//! overlap between rules is resolved purely by declaration order.

pub mod rules;

pub use rules::{IntentRule, RuleTable};
