//! Dialogue state for coach-nlu.
//!
//! A bounded, per-conversation context (FIFO history, current state, last
//! intent, last-interaction timestamp) and the pure intent-to-state
//! transition. Contexts live for one conversation and are never persisted
//! by this core.

pub mod context;
pub mod state;

pub use context::{
    ConversationContext, DEFAULT_HISTORY_CAPACITY, DEFAULT_SESSION_TIMEOUT_MS,
};
pub use state::ConversationState;
