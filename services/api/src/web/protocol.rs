//! services/api/src/web/protocol.rs
//!
//! Defines the WebSocket message protocol between the chat client and the API server.

use project_guide_core::{ConversationEvent, Message, QuickAction};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

//=========================================================================================
// Messages Sent FROM the Client TO the Server
//=========================================================================================

/// Represents the structured text messages a client can send to the server.
#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Text typed into the input field.
    Submit { text: String },

    /// One of the shortcut buttons, equivalent to submitting its query.
    QuickAction { action: QuickAction },
}

//=========================================================================================
// Messages Sent FROM the Server TO the Client
//=========================================================================================

/// A shortcut button as the client should render it.
///
/// Sent in `session_initialized` and returned by `GET /quick-actions`.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct QuickActionView {
    /// Identifier to send back in a `quick_action` frame.
    #[schema(value_type = String, example = "project_ideas")]
    pub action: QuickAction,
    pub label: String,
    /// The phrase submitted on the user's behalf.
    pub query: String,
}

impl From<QuickAction> for QuickActionView {
    fn from(action: QuickAction) -> Self {
        Self {
            action,
            label: action.label().to_string(),
            query: action.query().to_string(),
        }
    }
}

impl QuickActionView {
    /// All quick actions in display order.
    pub fn all() -> Vec<Self> {
        QuickAction::ALL.into_iter().map(Self::from).collect()
    }
}

/// Represents the structured text messages the server can send to the client.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Sent once when the connection opens, with the full conversation so far.
    SessionInitialized {
        conversation_id: Uuid,
        messages: Vec<Message>,
        quick_actions: Vec<QuickActionView>,
    },

    /// A new message was appended to the conversation.
    MessageAppended { message: Message },

    /// The bot started or finished composing; the submit control follows this flag.
    ComposingChanged { composing: bool },

    /// The client should scroll to the newest message.
    ScrollToLatest,

    /// A client frame could not be understood.
    Error { message: String },
}

impl From<ConversationEvent> for ServerMessage {
    fn from(event: ConversationEvent) -> Self {
        match event {
            ConversationEvent::MessageAppended(message) => ServerMessage::MessageAppended { message },
            ConversationEvent::ComposingChanged(composing) => {
                ServerMessage::ComposingChanged { composing }
            }
            ConversationEvent::ScrollToLatest => ServerMessage::ScrollToLatest,
        }
    }
}
