//! # Coach NLU
//!
//! Rule-based multilingual NLU core for a training assistant.
//!
//! Coach NLU interprets free-form user utterances (English, Korean, or
//! mixed) into structured commands and drives a short multi-turn dialogue.
//! It is consumed as an embedded library: one synchronous call per turn,
//! no network or storage I/O inside the core.
//!
//! ## Features
//!
//! - **Normalization**: case folding, particle stripping, punctuation removal
//! - **Language Detection**: Korean / English / mixed classification
//! - **Numeral Conversion**: Arabic, Sino-Korean, native-Korean, and English numerals
//! - **Intent Matching**: ordered, immutable rule table with first-match-wins semantics
//! - **Bounded Dialogue**: per-conversation FIFO history and a pure state machine
//! - **Reply Composition**: deterministic bilingual templates with slot fallbacks

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod core;
pub mod dialogue;
pub mod engine;
pub mod error;
pub mod intent;
pub mod reply;
pub mod slots;
pub mod text;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{
    Command, Intent, Language, NormalizedInput, ReplyLocale, SLOT_DIFFICULTY, SLOT_TECHNIQUE,
    SLOT_UNIT, SLOT_VALUE, Unit, Utterance,
};

// Re-export text pipeline types
pub use text::{NumeralLexicon, detect_language, normalize};

// Re-export intent matching types
pub use intent::{IntentRule, RuleTable};

// Re-export slot extraction types
pub use slots::{KeywordTable, extract_slots};

// Re-export dialogue types
pub use dialogue::{
    ConversationContext, ConversationState, DEFAULT_HISTORY_CAPACITY, DEFAULT_SESSION_TIMEOUT_MS,
};

// Re-export reply composition types
pub use reply::{GoalEstimate, ProfileSource, ReplyComposer, StaticProfile};

// Re-export engine types
pub use engine::{DEFAULT_MIXED_FALLBACK, Engine, EngineConfig, Turn};
