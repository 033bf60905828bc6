//! Delayed bot replies ("the bot is typing").
//!
//! Each send schedules one reply task. A new send aborts the previous task,
//! and the generation check in [`Assistant::deliver`] drops a reply whose
//! task had already woken up, so only the reply to the latest send is ever
//! appended.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::assistant::Assistant;
use crate::error::AssistantError;

pub struct ReplyScheduler {
    assistant: Arc<Mutex<Assistant>>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl ReplyScheduler {
    pub fn new(assistant: Arc<Mutex<Assistant>>, delay: Duration) -> Self {
        Self {
            assistant,
            delay,
            pending: None,
        }
    }

    pub fn assistant(&self) -> &Arc<Mutex<Assistant>> {
        &self.assistant
    }

    /// Append the user's message now and the bot's reply after the delay.
    pub async fn send(&mut self, text: &str) -> Result<(), AssistantError> {
        let reply = self.assistant.lock().await.send(text)?;

        if let Some(previous) = self.pending.take() {
            previous.abort();
            tracing::debug!("superseded pending reply");
        }

        let assistant = Arc::clone(&self.assistant);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            assistant.lock().await.deliver(reply);
        }));
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the pending reply, if any, and clear the typing flag.
    pub async fn cancel(&mut self) -> bool {
        let Some(handle) = self.pending.take() else {
            return false;
        };
        handle.abort();
        self.assistant.lock().await.cancel_pending_reply();
        true
    }

    /// Wait for the pending reply to be delivered.
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take()
            && let Err(e) = handle.await
            && !e.is_cancelled()
        {
            tracing::warn!(error = %e, "reply task failed");
        }
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
