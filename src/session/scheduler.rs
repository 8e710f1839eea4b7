use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::task::JoinHandle;
use tracing::debug;

use super::{Clock, MessageIds, MessageStore};
use crate::types::{Message, MessageOrigin};

/// Fixed response set the simulated designer picks from.
pub const CANNED_REPLIES: &[&str] = &[
    "That sounds perfect! Let me work on that for you.",
    "I understand exactly what you're looking for. I can definitely make that happen!",
    "Great idea! I think that will look amazing with the overall design.",
    "I love your vision! Let me prepare some options for you to choose from.",
    "Absolutely! I have some similar pieces in my portfolio that you might like to see.",
    "That's a wonderful choice! When would you need this completed by?",
];

const REPLY_DELAY_MIN_MS: u64 = 1000;
const REPLY_DELAY_MAX_MS: u64 = 3000;

/// Schedules one simulated counterpart reply per committed user message.
///
/// Each reply is a single-shot tokio timer task; all outstanding tasks are
/// aborted when the session closes, so no append is observable after
/// teardown. Delay and reply text are drawn from the injected generator so
/// tests can pin deterministic outputs.
pub struct ReplyScheduler<R: Rng> {
    rng: R,
    pending: Vec<JoinHandle<()>>,
}

impl<R: Rng> ReplyScheduler<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            pending: Vec::new(),
        }
    }

    /// Arms a reply timer: after a uniform delay in
    /// [`REPLY_DELAY_MIN_MS`, `REPLY_DELAY_MAX_MS`) a counterpart message
    /// with canned text is appended to `store`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule_reply(&mut self, store: MessageStore, ids: MessageIds, clock: Arc<dyn Clock>) {
        let delay =
            Duration::from_millis(self.rng.gen_range(REPLY_DELAY_MIN_MS..REPLY_DELAY_MAX_MS));
        let text = CANNED_REPLIES[self.rng.gen_range(0..CANNED_REPLIES.len())];

        self.pending.retain(|task| !task.is_finished());
        debug!(delay_ms = delay.as_millis() as u64, "reply scheduled");

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            store.append(Message::new(
                ids.next(),
                MessageOrigin::Counterpart,
                text,
                clock.now(),
            ));
        });
        self.pending.push(task);
    }

    /// Number of reply timers that have not fired yet.
    pub fn pending_replies(&self) -> usize {
        self.pending.iter().filter(|task| !task.is_finished()).count()
    }

    /// Aborts every outstanding reply timer. Called on session teardown.
    pub fn cancel_all(&mut self) {
        let outstanding = self.pending_replies();
        if outstanding > 0 {
            debug!(outstanding, "cancelling pending replies");
        }
        for task in self.pending.drain(..) {
            task.abort();
        }
    }
}
