//! services/api/src/web/ws_handler.rs
//!
//! This is the main entry point and control loop for a WebSocket connection.
//! Each connection is one conversation, driven entirely from this task.

use crate::{
    error::ApiError,
    web::{
        protocol::{ClientMessage, ServerMessage},
        state::{AppState, SessionState},
    },
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{
    stream::{SplitSink, StreamExt},
    SinkExt,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// The handler for upgrading HTTP requests to WebSocket connections.
pub async fn ws_handler(ws: WebSocketUpgrade, State(app_state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, app_state))
}

async fn handle_socket(socket: WebSocket, app_state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (replies_tx, mut replies_rx) = mpsc::unbounded_channel();
    let mut session = SessionState::new(app_state, replies_tx);
    info!(conversation_id = %session.conversation_id, "New WebSocket connection established.");

    // --- 1. Initialization Phase ---
    if let Err(e) = send_frame(&mut sender, &session.initial_message()).await {
        error!("Failed to send session initialized message: {}", e);
        return;
    }

    // --- 2. Main Message Loop ---
    loop {
        let frames = tokio::select! {
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Text(text))) => handle_text_message(&text, &mut session),
                Some(Ok(Message::Close(_))) => {
                    info!("Client sent close message.");
                    break;
                }
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    warn!("WebSocket receive failed: {}", e);
                    break;
                }
                None => {
                    info!("Client disconnected.");
                    break;
                }
            },
            Some(pending) = replies_rx.recv() => session.complete_reply(pending),
        };

        if let Err(e) = send_frames(&mut sender, &frames).await {
            error!("Failed to send frames to client: {}", e);
            break;
        }
    }

    // --- 3. Cleanup ---
    session.shutdown();
    info!(conversation_id = %session.conversation_id, "WebSocket connection closed.");
}

/// Decodes one text frame and applies it to the session.
fn handle_text_message(text: &str, session: &mut SessionState) -> Vec<ServerMessage> {
    match serde_json::from_str::<ClientMessage>(text) {
        Ok(client_msg) => session.handle_client_message(client_msg),
        Err(e) => {
            warn!("Failed to deserialize client message: {}", e);
            vec![ServerMessage::Error {
                message: format!("Unrecognized message: {}", e),
            }]
        }
    }
}

async fn send_frame(
    sender: &mut SplitSink<WebSocket, Message>,
    frame: &ServerMessage,
) -> Result<(), ApiError> {
    let json = serde_json::to_string(frame)?;
    sender.send(Message::Text(json.into())).await?;
    Ok(())
}

async fn send_frames(
    sender: &mut SplitSink<WebSocket, Message>,
    frames: &[ServerMessage],
) -> Result<(), ApiError> {
    for frame in frames {
        send_frame(sender, frame).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use project_guide_core::{Catalog, SeededRandom};

    fn session() -> SessionState {
        let app_state = Arc::new(AppState {
            config: Arc::new(Config::default()),
            catalog: Arc::new(Catalog::builtin()),
            random: Arc::new(SeededRandom::new(3)),
        });
        let (tx, _rx) = mpsc::unbounded_channel();
        SessionState::new(app_state, tx)
    }

    #[test]
    fn malformed_json_yields_one_error_frame() {
        let mut session = session();
        let frames = handle_text_message("{not json", &mut session);
        assert_eq!(frames.len(), 1);
        assert!(matches!(frames[0], ServerMessage::Error { .. }));
        assert_eq!(session.controller().store().messages().len(), 1);
    }

    #[test]
    fn unknown_message_type_yields_one_error_frame() {
        let mut session = session();
        let frames = handle_text_message(r#"{"type":"cancel"}"#, &mut session);
        assert_eq!(frames.len(), 1);
        assert!(matches!(frames[0], ServerMessage::Error { .. }));
    }

    #[test]
    fn blank_submission_yields_no_frames() {
        let mut session = session();
        let frames = handle_text_message(r#"{"type":"submit","text":"   "}"#, &mut session);
        assert!(frames.is_empty());
        assert!(!session.controller().store().is_composing());
        assert_eq!(session.controller().store().messages().len(), 1);
    }
}
