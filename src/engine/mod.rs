//! The orchestrator tying the interpretation chain together.
//!
//! One synchronous call per turn: normalize → detect language → extract
//! numbers and unit → match intent → extract slots → transition state →
//! compose reply. No step performs I/O; the engine is immutable after
//! construction and may be shared across conversations, each of which owns
//! its own [`ConversationContext`].

use crate::core::{Command, Intent, Language, NormalizedInput, ReplyLocale, Utterance};
use crate::dialogue::{
    ConversationContext, ConversationState, DEFAULT_HISTORY_CAPACITY, DEFAULT_SESSION_TIMEOUT_MS,
};
use crate::error::{Error, Result};
use crate::intent::RuleTable;
use crate::reply::{ProfileSource, ReplyComposer};
use crate::slots::{KeywordTable, extract_slots};
use crate::text::{NumeralLexicon, detect_language, normalize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Default reply locale when neither language dominates and the utterance
/// carries no hint.
pub const DEFAULT_MIXED_FALLBACK: ReplyLocale = ReplyLocale::Korean;

/// Configuration for the engine.
///
/// Built by the caller and handed to [`Engine::new`]; "system locale" is
/// never consulted — the mixed-language fallback is always explicit here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Capacity of each per-conversation history queue.
    pub history_capacity: usize,

    /// Session timeout in milliseconds for the new-conversation predicate.
    pub session_timeout_ms: i64,

    /// Reply locale used when the detected language is mixed or unknown and
    /// the utterance has no locale hint.
    pub mixed_language_fallback: ReplyLocale,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            session_timeout_ms: DEFAULT_SESSION_TIMEOUT_MS,
            mixed_language_fallback: DEFAULT_MIXED_FALLBACK,
        }
    }
}

impl EngineConfig {
    /// Creates a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the history queue capacity.
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Sets the session timeout in milliseconds.
    #[must_use]
    pub const fn with_session_timeout_ms(mut self, timeout_ms: i64) -> Self {
        self.session_timeout_ms = timeout_ms;
        self
    }

    /// Sets the mixed-language fallback locale.
    #[must_use]
    pub const fn with_mixed_language_fallback(mut self, locale: ReplyLocale) -> Self {
        self.mixed_language_fallback = locale;
        self
    }

    /// Validates the configuration.
    fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(Error::config("history capacity must be > 0"));
        }
        if self.session_timeout_ms <= 0 {
            return Err(Error::config("session timeout must be > 0 ms"));
        }
        Ok(())
    }
}

/// The result of interpreting one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The structured command: intent, raw text, slots.
    pub command: Command,

    /// The composed reply text.
    pub reply: String,

    /// Conversation state after this turn.
    pub state: ConversationState,

    /// Signal that the host may escalate to its open-domain chat
    /// collaborator: the input was non-blank but no rule matched.
    pub escalate: bool,
}

/// The NLU engine.
///
/// Composes the normalizer, language detector, numeral lexicon, rule table,
/// keyword tables, state transition, and reply composer into one
/// synchronous call per turn. Construction validates the configuration and
/// compiles the lexicon; everything afterwards is infallible.
///
/// # Examples
///
/// ```
/// use coach_nlu::core::Intent;
/// use coach_nlu::engine::{Engine, EngineConfig};
/// use coach_nlu::reply::StaticProfile;
///
/// let engine = Engine::new(EngineConfig::default()).unwrap();
/// let mut ctx = engine.new_context();
///
/// let turn = engine.process(&"3세트 기록해줘".into(), &mut ctx, &StaticProfile::default());
/// assert_eq!(turn.command.intent, Intent::LogSets);
/// assert_eq!(turn.command.slot("value"), Some("3"));
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    rules: RuleTable,
    keywords: KeywordTable,
    lexicon: NumeralLexicon,
    composer: ReplyComposer,
}

impl Engine {
    /// Creates an engine with the default rule table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an invalid configuration or
    /// [`Error::Pattern`] if the numeral scanner fails to compile.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_rule_table(config, RuleTable::with_defaults())
    }

    /// Creates an engine with a caller-supplied rule table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an invalid configuration or
    /// [`Error::Pattern`] if the numeral scanner fails to compile.
    pub fn with_rule_table(config: EngineConfig, rules: RuleTable) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rules,
            keywords: KeywordTable::new(),
            lexicon: NumeralLexicon::new()?,
            composer: ReplyComposer::new(),
        })
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the rule table.
    #[must_use]
    pub const fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Creates a conversation context sized by this engine's configuration.
    #[must_use]
    pub fn new_context(&self) -> ConversationContext {
        ConversationContext::with_capacity_and_timeout(
            self.config.history_capacity,
            self.config.session_timeout_ms,
        )
    }

    /// Interprets one utterance and advances the conversation.
    ///
    /// Blank input short-circuits: the turn carries [`Intent::Unknown`], an
    /// empty slot map, and the clarification reply; the timestamp and state
    /// are refreshed but nothing is appended to the history queues and the
    /// turn never escalates.
    pub fn process(
        &self,
        utterance: &Utterance,
        context: &mut ConversationContext,
        profile: &dyn ProfileSource,
    ) -> Turn {
        if utterance.is_blank() {
            let locale = self.reply_locale(Language::Unknown, utterance.locale_hint());
            let reply = self.composer.fallback_reply(locale).to_string();
            context.set_state(ConversationState::General);
            context.set_last_intent(Intent::Unknown);
            context.touch();
            return Turn {
                command: Command::new(Intent::Unknown, utterance.text(), HashMap::new()),
                reply,
                state: ConversationState::General,
                escalate: false,
            };
        }

        let text = normalize(utterance.text());
        let language = detect_language(utterance.text());
        let numbers = self.lexicon.extract(&text);
        let unit = self.keywords.detect_unit(&text);
        let input = NormalizedInput::new(text, language, numbers, unit);

        let intent = self.rules.match_intent(&input.text);
        let slots = extract_slots(intent, &input, &self.keywords);
        let state = ConversationState::for_intent(intent);
        let locale = self.reply_locale(language, utterance.locale_hint());

        let command = Command::new(intent, utterance.text(), slots);
        let reply = self.composer.compose(&command, locale, profile);

        debug!(
            intent = ?intent,
            language = ?language,
            state = ?state,
            locale = ?locale,
            slots = command.slots.len(),
            "utterance interpreted"
        );

        context.record_user_message(utterance.text());
        context.record_reply(reply.clone());
        context.set_state(state);
        context.set_last_intent(intent);

        Turn {
            escalate: intent.is_unknown(),
            command,
            reply,
            state,
        }
    }

    /// Picks the reply locale: the detected language when one dominates,
    /// otherwise the utterance's hint, otherwise the configured fallback.
    const fn reply_locale(&self, language: Language, hint: Option<ReplyLocale>) -> ReplyLocale {
        match language {
            Language::Korean => ReplyLocale::Korean,
            Language::English => ReplyLocale::English,
            Language::Mixed | Language::Unknown => match hint {
                Some(locale) => locale,
                None => self.config.mixed_language_fallback,
            },
        }
    }
}
