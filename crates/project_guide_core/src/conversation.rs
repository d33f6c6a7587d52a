//! crates/project_guide_core/src/conversation.rs
//!
//! The conversation store and the controller that drives one submission cycle:
//! user message appended, bot composing, bot message appended.

use crate::dispatcher::IntentDispatcher;
use crate::domain::{BotResponse, Message, MessageContent};
use crate::quick_action::QuickAction;

pub const GREETING_TEXT: &str = "Hello! I'm your AI Student Project Support Guide. I'm here to help you with project ideas, development guidance, and learning resources across IoT, AI/ML, Embedded Systems, and Web Development. What would you like to explore today?";

//=========================================================================================
// Events and Errors
//=========================================================================================

/// A change the presentation layer has to reflect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationEvent {
    MessageAppended(Message),
    ComposingChanged(bool),
    /// Emitted last by every successful transition.
    ScrollToLatest,
}

/// Why a submission was ignored. Callers treat both as a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("input is empty after trimming")]
    Empty,
    #[error("a reply is still being composed")]
    Composing,
}

/// The outcome of one store mutation.
#[derive(Debug, Clone)]
pub struct Transition {
    pub message: Message,
    pub events: Vec<ConversationEvent>,
}

//=========================================================================================
// ConversationStore
//=========================================================================================

/// Append-only, ordered message list plus the composing flag.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    messages: Vec<Message>,
    composing: bool,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStore {
    /// Creates a store holding only the bot's greeting.
    pub fn new() -> Self {
        let greeting = Message::bot(BotResponse {
            text: GREETING_TEXT.to_string(),
            content: MessageContent::Plain,
        });
        Self {
            messages: vec![greeting],
            composing: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Appends the user's message and starts composing the reply.
    ///
    /// The message keeps the text exactly as submitted; only the emptiness
    /// check trims it.
    pub fn append_user(&mut self, raw: &str) -> Result<Transition, SubmitRejected> {
        if raw.trim().is_empty() {
            return Err(SubmitRejected::Empty);
        }
        if self.composing {
            return Err(SubmitRejected::Composing);
        }

        let message = Message::user(raw);
        self.messages.push(message.clone());
        self.composing = true;

        Ok(Transition {
            events: vec![
                ConversationEvent::MessageAppended(message.clone()),
                ConversationEvent::ComposingChanged(true),
                ConversationEvent::ScrollToLatest,
            ],
            message,
        })
    }

    /// Appends the bot's reply and clears the composing flag.
    pub fn append_bot(&mut self, response: BotResponse) -> Transition {
        let message = Message::bot(response);
        self.messages.push(message.clone());
        self.composing = false;

        Transition {
            events: vec![
                ConversationEvent::MessageAppended(message.clone()),
                ConversationEvent::ComposingChanged(false),
                ConversationEvent::ScrollToLatest,
            ],
            message,
        }
    }
}

//=========================================================================================
// ChatController
//=========================================================================================

/// An accepted submission whose reply has not been appended yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    text: String,
}

impl PendingReply {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Owns one conversation and the dispatcher that answers it.
pub struct ChatController {
    store: ConversationStore,
    dispatcher: IntentDispatcher,
}

impl ChatController {
    pub fn new(dispatcher: IntentDispatcher) -> Self {
        Self {
            store: ConversationStore::new(),
            dispatcher,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Starts a submission cycle. The reply must be delivered with [`Self::deliver`].
    pub fn submit(&mut self, raw: &str) -> Result<(PendingReply, Transition), SubmitRejected> {
        let transition = self.store.append_user(raw)?;
        let pending = PendingReply {
            text: raw.to_string(),
        };
        Ok((pending, transition))
    }

    /// Submits the action's fixed query.
    pub fn trigger(
        &mut self,
        action: QuickAction,
    ) -> Result<(PendingReply, Transition), SubmitRejected> {
        self.submit(action.query())
    }

    /// Classifies the pending text and appends the bot's reply.
    pub fn deliver(&mut self, pending: PendingReply) -> Transition {
        let response = self.dispatcher.classify(&pending.text);
        self.store.append_bot(response)
    }
}
