//! Core domain models for coach-nlu.
//!
//! This module contains the fundamental data structures used throughout the
//! NLU core: utterances, normalized input, intents, and commands. These are
//! pure domain models with no I/O dependencies.

pub mod command;
pub mod utterance;

pub use command::{
    Command, Intent, SLOT_DIFFICULTY, SLOT_TECHNIQUE, SLOT_UNIT, SLOT_VALUE, Unit,
};
pub use utterance::{Language, NormalizedInput, ReplyLocale, Utterance};
