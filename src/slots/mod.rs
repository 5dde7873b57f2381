//! Slot extraction for coach-nlu.
//!
//! Pulls numbers, units, and named entities (technique, difficulty) out of
//! normalized input, keyed by the matched intent. An absent slot is a
//! missing key in the slot map, never a sentinel value.

pub mod extract;
pub mod keywords;

pub use extract::extract_slots;
pub use keywords::KeywordTable;
