//! services/api/src/web/state.rs
//!
//! Defines the application's shared and session-specific states.

use crate::config::Config;
use crate::web::compose_task::schedule_reply;
use crate::web::protocol::{ClientMessage, QuickActionView, ServerMessage};
use project_guide_core::{
    Catalog, ChatController, IntentDispatcher, PendingReply, QuickAction, RandomSource, Transition,
};
use std::sync::Arc;
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

//=========================================================================================
// AppState (Shared Across All Connections)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    /// A dispatcher over the shared catalog and random source.
    pub fn dispatcher(&self) -> IntentDispatcher {
        IntentDispatcher::new(self.catalog.clone(), self.random.clone())
    }
}

//=========================================================================================
// SessionState (Specific to One WebSocket Connection)
//=========================================================================================

/// The state for a single, active WebSocket connection: one conversation.
///
/// Only the connection's own task touches this, so it needs no locking. Replies
/// come back from the compose task over `replies_tx` and are applied with
/// [`SessionState::complete_reply`].
pub struct SessionState {
    pub conversation_id: Uuid,
    controller: ChatController,
    replies_tx: mpsc::UnboundedSender<PendingReply>,
    app_state: Arc<AppState>,
    /// Cancels the in-flight compose task when the connection goes away.
    pub cancellation_token: CancellationToken,
    compose_handle: Option<JoinHandle<()>>,
}

impl SessionState {
    pub fn new(app_state: Arc<AppState>, replies_tx: mpsc::UnboundedSender<PendingReply>) -> Self {
        Self {
            conversation_id: Uuid::new_v4(),
            controller: ChatController::new(app_state.dispatcher()),
            replies_tx,
            app_state,
            cancellation_token: CancellationToken::new(),
            compose_handle: None,
        }
    }

    pub fn controller(&self) -> &ChatController {
        &self.controller
    }

    /// The first frame sent on a new connection.
    pub fn initial_message(&self) -> ServerMessage {
        ServerMessage::SessionInitialized {
            conversation_id: self.conversation_id,
            messages: self.controller.store().messages().to_vec(),
            quick_actions: QuickActionView::all(),
        }
    }

    /// Applies a client frame, returning the frames to send back.
    ///
    /// Rejected submissions return nothing.
    pub fn handle_client_message(&mut self, message: ClientMessage) -> Vec<ServerMessage> {
        let submitted = match message {
            ClientMessage::Submit { text } => self.controller.submit(&text),
            ClientMessage::QuickAction { action } => self.controller.trigger(action),
        };

        match submitted {
            Ok((pending, transition)) => {
                debug!(
                    conversation_id = %self.conversation_id,
                    "Accepted submission, composing reply."
                );
                self.compose_handle = Some(schedule_reply(
                    pending,
                    self.app_state.config.response_delay,
                    self.cancellation_token.clone(),
                    self.replies_tx.clone(),
                ));
                into_frames(transition)
            }
            Err(reason) => {
                debug!(conversation_id = %self.conversation_id, "Ignored submission: {}", reason);
                Vec::new()
            }
        }
    }

    /// Appends the bot's reply for a pending submission whose delay has elapsed.
    pub fn complete_reply(&mut self, pending: PendingReply) -> Vec<ServerMessage> {
        self.compose_handle = None;
        let transition = self.controller.deliver(pending);
        debug!(
            conversation_id = %self.conversation_id,
            category = ?transition.message.category(),
            "Reply delivered."
        );
        into_frames(transition)
    }

    /// Stops any in-flight compose task.
    pub fn shutdown(&mut self) {
        self.cancellation_token.cancel();
        if let Some(handle) = self.compose_handle.take() {
            handle.abort();
        }
    }
}

fn into_frames(transition: Transition) -> Vec<ServerMessage> {
    transition.events.into_iter().map(ServerMessage::from).collect()
}
