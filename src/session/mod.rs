//! Chat session simulator.
//!
//! One [`ChatSession`] backs one open designer conversation: an append-only
//! [`MessageStore`], a [`Composer`] holding the draft, and a
//! [`ReplyScheduler`] that appends a simulated designer reply after a
//! randomized delay. Everything is in-memory and dies with the session.
//!
//! The clock and the random generator are injected so tests can run the
//! whole send/reply cycle on paused time with pinned randomness.

mod composer;
mod scheduler;
mod store;

pub use composer::{Composer, EmptyDraftError};
pub use scheduler::{CANNED_REPLIES, ReplyScheduler};
pub use store::MessageStore;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::{Rng, SeedableRng, rngs::StdRng};
use time::{Duration, OffsetDateTime};
use tokio::sync::watch;
use tracing::info;

use crate::types::{Message, MessageId, MessageOrigin, MessageStatus};

/// Time source for message timestamps. Injected instead of reading an
/// ambient global so ordering stays testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Wall-clock UTC time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Allocates session-unique message ids from a shared monotonic counter.
/// Handles are cheap clones; reply tasks draw ids from the background.
#[derive(Clone, Debug, Default)]
pub struct MessageIds(Arc<AtomicU64>);

impl MessageIds {
    pub fn next(&self) -> MessageId {
        MessageId(self.0.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

/// One open chat conversation, scoped to a single designer and item context.
///
/// Created when the chat screen opens, seeded with a short prior transcript,
/// and discarded on close. Closing (or dropping) the session cancels every
/// pending reply timer.
pub struct ChatSession<C: Clock = SystemClock, R: Rng = StdRng> {
    counterpart_name: String,
    context_item_name: String,
    clock: Arc<C>,
    ids: MessageIds,
    store: MessageStore,
    composer: Composer,
    scheduler: ReplyScheduler<R>,
}

impl ChatSession {
    /// Session with the wall clock and entropy-seeded randomness.
    pub fn new(
        counterpart_name: impl Into<String>,
        context_item_name: impl Into<String>,
    ) -> Self {
        Self::with_capabilities(
            counterpart_name,
            context_item_name,
            SystemClock,
            StdRng::from_entropy(),
        )
    }
}

impl<C, R> ChatSession<C, R>
where
    C: Clock + 'static,
    R: Rng,
{
    pub fn with_capabilities(
        counterpart_name: impl Into<String>,
        context_item_name: impl Into<String>,
        clock: C,
        rng: R,
    ) -> Self {
        let session = Self {
            counterpart_name: counterpart_name.into(),
            context_item_name: context_item_name.into(),
            clock: Arc::new(clock),
            ids: MessageIds::default(),
            store: MessageStore::new(),
            composer: Composer::default(),
            scheduler: ReplyScheduler::new(rng),
        };
        session.seed_transcript();
        info!(
            counterpart = %session.counterpart_name,
            item = %session.context_item_name,
            "chat session opened"
        );
        session
    }

    /// Pre-populates the log with the fixed prior conversation about the
    /// context item. Statuses other than `Sent` exist only here; live
    /// messages never transition after creation.
    fn seed_transcript(&self) {
        let now = self.clock.now();
        let seeds: [(MessageOrigin, String, MessageStatus, i64); 5] = [
            (
                MessageOrigin::Counterpart,
                format!(
                    "Hi! I saw you're interested in \"{}\". I'd love to help you with this piece!",
                    self.context_item_name
                ),
                MessageStatus::Read,
                5,
            ),
            (
                MessageOrigin::User,
                "Hello! Yes, I love the design. Can we discuss customization options?".into(),
                MessageStatus::Read,
                4,
            ),
            (
                MessageOrigin::Counterpart,
                "Absolutely! I can customize the colors, size, and even add personal touches. \
                 What did you have in mind?"
                    .into(),
                MessageStatus::Read,
                3,
            ),
            (
                MessageOrigin::User,
                "I was thinking of a navy blue color instead, and maybe add some gold accents?"
                    .into(),
                MessageStatus::Delivered,
                2,
            ),
            (
                MessageOrigin::Counterpart,
                "Perfect choice! Navy blue with gold accents will look stunning. I can create \
                 a mockup for you to review first."
                    .into(),
                MessageStatus::Read,
                1,
            ),
        ];
        for (origin, text, status, minutes_ago) in seeds {
            let mut message =
                Message::new(self.ids.next(), origin, text, now - Duration::minutes(minutes_ago));
            message.status = status;
            self.store.append(message);
        }
    }

    pub fn counterpart_name(&self) -> &str {
        &self.counterpart_name
    }

    pub fn context_item_name(&self) -> &str {
        &self.context_item_name
    }

    pub fn draft(&self) -> &str {
        self.composer.draft()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.composer.set_draft(text);
    }

    pub fn can_send(&self) -> bool {
        self.composer.can_send()
    }

    /// Commits the draft, appends the user message, and arms exactly one
    /// reply timer for it. The user append always completes before the
    /// timer is armed, so a reply can never precede its trigger.
    ///
    /// Must be called from within a tokio runtime.
    pub fn send(&mut self) -> Result<MessageId, EmptyDraftError> {
        if !self.composer.can_send() {
            return Err(EmptyDraftError);
        }
        let message = self.composer.commit(self.ids.next(), self.clock.now())?;
        let id = message.id;
        self.store.append(message);
        self.scheduler
            .schedule_reply(self.store.clone(), self.ids.clone(), self.clock.clone());
        Ok(id)
    }

    /// Chronological snapshot of the conversation.
    pub fn messages(&self) -> Vec<Message> {
        self.store.all()
    }

    /// Observes store revisions; bumps on every append, including replies
    /// appended from the background.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.store.subscribe()
    }

    pub fn pending_replies(&self) -> usize {
        self.scheduler.pending_replies()
    }

    /// Tears the session down: every outstanding reply timer is cancelled
    /// and no further append will be observed. Also runs on drop.
    pub fn close(&mut self) {
        self.scheduler.cancel_all();
    }
}

impl<C: Clock, R: Rng> Drop for ChatSession<C, R> {
    fn drop(&mut self) {
        self.scheduler.cancel_all();
    }
}
