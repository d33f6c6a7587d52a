//! services/api/src/web/compose_task.rs
//!
//! This module contains the asynchronous "worker" that simulates the bot
//! thinking before it answers.

use project_guide_core::PendingReply;
use std::time::Duration;
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Spawns the compose task for one accepted submission.
///
/// After `delay` the pending reply is handed back to the connection task through
/// `replies_tx`. The delay cannot be cut short by the user; `cancellation_token`
/// is only cancelled when the connection closes.
pub fn schedule_reply(
    pending: PendingReply,
    delay: Duration,
    cancellation_token: CancellationToken,
    replies_tx: mpsc::UnboundedSender<PendingReply>,
) -> JoinHandle<()> {
    tokio::spawn(compose_process(pending, delay, cancellation_token, replies_tx))
}

async fn compose_process(
    pending: PendingReply,
    delay: Duration,
    cancellation_token: CancellationToken,
    replies_tx: mpsc::UnboundedSender<PendingReply>,
) {
    tokio::select! {
        _ = cancellation_token.cancelled() => {
            info!("Compose task cancelled before the reply was ready.");
        }
        _ = tokio::time::sleep(delay) => {
            if replies_tx.send(pending).is_err() {
                warn!("Connection closed before the reply could be delivered.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use project_guide_core::{Catalog, ChatController, IntentDispatcher, ThreadRandom};
    use std::sync::Arc;

    fn pending_for(text: &str) -> PendingReply {
        let dispatcher =
            IntentDispatcher::new(Arc::new(Catalog::builtin()), Arc::new(ThreadRandom));
        let mut controller = ChatController::new(dispatcher);
        let (pending, _) = controller.submit(text).unwrap();
        pending
    }

    #[tokio::test(start_paused = true)]
    async fn reply_arrives_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = tokio::time::Instant::now();
        let handle = schedule_reply(
            pending_for("hello"),
            Duration::from_secs(1),
            CancellationToken::new(),
            tx,
        );

        let pending = rx.recv().await.unwrap();
        assert_eq!(pending.text(), "hello");
        assert!(start.elapsed() >= Duration::from_secs(1));
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_task_sends_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();
        let handle = schedule_reply(pending_for("hello"), Duration::from_secs(1), token.clone(), tx);

        token.cancel();
        handle.await.unwrap();
        assert!(rx.recv().await.is_none());
    }
}
