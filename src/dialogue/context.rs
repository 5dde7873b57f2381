//! Per-conversation dialogue context.
//!
//! Holds the bounded message history, current state, last intent, and
//! last-interaction timestamp for one active conversation. One instance is
//! created per conversation, mutated every turn, and discarded when the
//! conversation ends — this core owns no durable storage.

use crate::core::Intent;
use crate::dialogue::ConversationState;
use std::collections::VecDeque;

/// Default bound on each history queue.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Default session timeout in milliseconds (5 minutes).
pub const DEFAULT_SESSION_TIMEOUT_MS: i64 = 300_000;

/// Bounded dialogue state for one active conversation.
///
/// Both history queues are FIFO with a fixed capacity: appending past
/// capacity evicts the oldest entry, so the queues always hold the last C
/// appended items in append order.
///
/// Not safe to share across simultaneous conversations — a host serving
/// several users allocates one context per conversation.
///
/// # Examples
///
/// ```
/// use coach_nlu::dialogue::ConversationContext;
///
/// let mut ctx = ConversationContext::new();
/// ctx.record_user_message("3세트 기록해줘");
/// assert_eq!(ctx.user_messages().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ConversationContext {
    user_messages: VecDeque<String>,
    replies: VecDeque<String>,
    state: ConversationState,
    last_intent: Option<Intent>,
    last_interaction_ms: i64,
    capacity: usize,
    session_timeout_ms: i64,
}

impl ConversationContext {
    /// Creates a context with the default capacity and session timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity_and_timeout(DEFAULT_HISTORY_CAPACITY, DEFAULT_SESSION_TIMEOUT_MS)
    }

    /// Creates a context with a custom history capacity and timeout.
    ///
    /// A zero capacity is clamped to one so the invariant "history holds
    /// the last C items" stays meaningful.
    #[must_use]
    pub fn with_capacity_and_timeout(capacity: usize, session_timeout_ms: i64) -> Self {
        let capacity = capacity.max(1);
        Self {
            user_messages: VecDeque::with_capacity(capacity),
            replies: VecDeque::with_capacity(capacity),
            state: ConversationState::General,
            last_intent: None,
            last_interaction_ms: current_millis(),
            capacity,
            session_timeout_ms,
        }
    }

    /// Appends a user message, evicting the oldest past capacity.
    pub fn record_user_message(&mut self, message: impl Into<String>) {
        push_bounded(&mut self.user_messages, self.capacity, message.into());
        self.touch();
    }

    /// Appends an AI reply, evicting the oldest past capacity.
    pub fn record_reply(&mut self, reply: impl Into<String>) {
        push_bounded(&mut self.replies, self.capacity, reply.into());
        self.touch();
    }

    /// Returns the stored user messages, oldest first.
    #[must_use]
    pub const fn user_messages(&self) -> &VecDeque<String> {
        &self.user_messages
    }

    /// Returns the stored replies, oldest first.
    #[must_use]
    pub const fn replies(&self) -> &VecDeque<String> {
        &self.replies
    }

    /// Returns the current conversation state.
    #[must_use]
    pub const fn state(&self) -> ConversationState {
        self.state
    }

    /// Sets the current conversation state.
    pub const fn set_state(&mut self, state: ConversationState) {
        self.state = state;
    }

    /// Returns the most recently recognized intent.
    #[must_use]
    pub const fn last_intent(&self) -> Option<Intent> {
        self.last_intent
    }

    /// Records the most recently recognized intent.
    pub const fn set_last_intent(&mut self, intent: Intent) {
        self.last_intent = Some(intent);
    }

    /// Returns the history capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the last-interaction timestamp in unix milliseconds.
    #[must_use]
    pub const fn last_interaction_ms(&self) -> i64 {
        self.last_interaction_ms
    }

    /// Refreshes the last-interaction timestamp to now.
    pub fn touch(&mut self) {
        self.last_interaction_ms = current_millis();
    }

    /// Sets the last-interaction timestamp explicitly.
    pub const fn touch_at(&mut self, now_ms: i64) {
        self.last_interaction_ms = now_ms;
    }

    /// Pure session predicate: has more time than the timeout elapsed
    /// between the last interaction and `now_ms`?
    ///
    /// The core performs no background timer and no auto-reset; the host
    /// queries this and decides whether to start a fresh conversation.
    ///
    /// # Examples
    ///
    /// ```
    /// use coach_nlu::dialogue::ConversationContext;
    ///
    /// let mut ctx = ConversationContext::new();
    /// ctx.touch_at(1_000_000);
    /// assert!(ctx.is_new_conversation_at(1_000_000 + 301_000));
    /// assert!(!ctx.is_new_conversation_at(1_000_000 + 299_000));
    /// ```
    #[must_use]
    pub const fn is_new_conversation_at(&self, now_ms: i64) -> bool {
        now_ms - self.last_interaction_ms > self.session_timeout_ms
    }

    /// Wall-clock convenience wrapper for [`Self::is_new_conversation_at`].
    #[must_use]
    pub fn is_new_conversation(&self) -> bool {
        self.is_new_conversation_at(current_millis())
    }
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends to a bounded queue, evicting the oldest entry past capacity.
fn push_bounded(queue: &mut VecDeque<String>, capacity: usize, item: String) {
    if queue.len() == capacity {
        queue.pop_front();
    }
    queue.push_back(item);
}

/// Returns the current unix timestamp in milliseconds.
#[allow(clippy::cast_possible_truncation)]
fn current_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context() {
        let ctx = ConversationContext::new();
        assert!(ctx.user_messages().is_empty());
        assert!(ctx.replies().is_empty());
        assert_eq!(ctx.state(), ConversationState::General);
        assert!(ctx.last_intent().is_none());
        assert_eq!(ctx.capacity(), DEFAULT_HISTORY_CAPACITY);
        assert!(ctx.last_interaction_ms() > 0);
    }

    #[test]
    fn test_fifo_bound() {
        let mut ctx = ConversationContext::new();
        let total = DEFAULT_HISTORY_CAPACITY + 5;
        for i in 0..total {
            ctx.record_user_message(format!("message {i}"));
        }

        assert_eq!(ctx.user_messages().len(), DEFAULT_HISTORY_CAPACITY);
        let expected: Vec<String> = (5..total).map(|i| format!("message {i}")).collect();
        let stored: Vec<String> = ctx.user_messages().iter().cloned().collect();
        assert_eq!(stored, expected);
    }

    #[test]
    fn test_replies_bounded_independently() {
        let mut ctx = ConversationContext::with_capacity_and_timeout(2, 1000);
        ctx.record_reply("a");
        ctx.record_reply("b");
        ctx.record_reply("c");
        ctx.record_user_message("only one");

        assert_eq!(ctx.replies().len(), 2);
        assert_eq!(ctx.replies().front().map(String::as_str), Some("b"));
        assert_eq!(ctx.user_messages().len(), 1);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let ctx = ConversationContext::with_capacity_and_timeout(0, 1000);
        assert_eq!(ctx.capacity(), 1);
    }

    #[test]
    fn test_session_predicate() {
        let mut ctx = ConversationContext::new();
        ctx.touch_at(1_000_000);

        assert!(!ctx.is_new_conversation_at(1_000_000 + 299_000));
        assert!(!ctx.is_new_conversation_at(1_000_000 + 300_000));
        assert!(ctx.is_new_conversation_at(1_000_000 + 301_000));
    }

    #[test]
    fn test_custom_timeout() {
        let mut ctx = ConversationContext::with_capacity_and_timeout(10, 1_000);
        ctx.touch_at(0);
        assert!(!ctx.is_new_conversation_at(1_000));
        assert!(ctx.is_new_conversation_at(1_001));
    }

    #[test]
    fn test_recording_touches_timestamp() {
        let mut ctx = ConversationContext::new();
        ctx.touch_at(0);
        ctx.record_user_message("hello");
        assert!(ctx.last_interaction_ms() > 0);
    }

    #[test]
    fn test_state_and_intent_updates() {
        let mut ctx = ConversationContext::new();
        ctx.set_state(ConversationState::WorkoutPlanning);
        ctx.set_last_intent(Intent::LogSets);

        assert_eq!(ctx.state(), ConversationState::WorkoutPlanning);
        assert_eq!(ctx.last_intent(), Some(Intent::LogSets));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn history_never_exceeds_capacity(
                capacity in 1usize..8,
                messages in proptest::collection::vec("[a-z]{0,8}", 0..30),
            ) {
                let mut ctx = ConversationContext::with_capacity_and_timeout(capacity, 1000);
                for message in &messages {
                    ctx.record_user_message(message.clone());
                }

                prop_assert!(ctx.user_messages().len() <= capacity);
                let tail: Vec<String> = messages
                    .iter()
                    .rev()
                    .take(capacity)
                    .rev()
                    .cloned()
                    .collect();
                let stored: Vec<String> = ctx.user_messages().iter().cloned().collect();
                prop_assert_eq!(stored, tail);
            }
        }
    }
}
