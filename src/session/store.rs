use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tracing::debug;

use crate::types::Message;

/// Append-only message log for one chat session.
///
/// Handles are cheap clones sharing the same log, so scheduled reply tasks
/// can append from the background. Observers subscribe to a revision channel
/// that bumps on every append (the UI uses it for scroll-to-end).
#[derive(Clone, Debug)]
pub struct MessageStore {
    log: Arc<Mutex<Vec<Message>>>,
    revision: Arc<watch::Sender<u64>>,
}

impl MessageStore {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
            revision: Arc::new(revision),
        }
    }

    /// Appends `message` at the tail. Timestamps are clamped to the tail's
    /// timestamp so the log stays monotonic non-decreasing even if the
    /// injected clock steps backwards.
    pub fn append(&self, mut message: Message) {
        let mut log = self.log.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(tail) = log.last()
            && message.sent_at < tail.sent_at
        {
            message.sent_at = tail.sent_at;
        }
        debug!(id = message.id.0, origin = ?message.origin, "message appended");
        log.push(message);
        self.revision.send_replace(log.len() as u64);
    }

    /// Snapshot of the full log in chronological order.
    pub fn all(&self) -> Vec<Message> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Receiver that observes the store revision (message count).
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MessageId, MessageOrigin};
    use time::macros::datetime;

    fn msg(id: u64, at: time::OffsetDateTime) -> Message {
        Message::new(MessageId(id), MessageOrigin::User, format!("m{id}"), at)
    }

    #[test]
    fn append_preserves_order() {
        let store = MessageStore::new();
        store.append(msg(1, datetime!(2025-06-01 12:00 UTC)));
        store.append(msg(2, datetime!(2025-06-01 12:01 UTC)));
        let all = store.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, MessageId(1));
        assert_eq!(all[1].id, MessageId(2));
    }

    #[test]
    fn backwards_timestamp_is_clamped_to_tail() {
        let store = MessageStore::new();
        store.append(msg(1, datetime!(2025-06-01 12:05 UTC)));
        store.append(msg(2, datetime!(2025-06-01 12:00 UTC)));
        let all = store.all();
        assert_eq!(all[1].sent_at, all[0].sent_at);
    }

    #[test]
    fn clones_share_the_same_log() {
        let store = MessageStore::new();
        let handle = store.clone();
        handle.append(msg(1, datetime!(2025-06-01 12:00 UTC)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn revision_tracks_message_count() {
        let store = MessageStore::new();
        let rx = store.subscribe();
        assert_eq!(*rx.borrow(), 0);
        store.append(msg(1, datetime!(2025-06-01 12:00 UTC)));
        store.append(msg(2, datetime!(2025-06-01 12:01 UTC)));
        assert_eq!(*rx.borrow(), 2);
    }
}
