//! Integration tests for the chat session simulator: seeded transcript,
//! composer validation, reply scheduling and teardown.
//!
//! Timers run on paused tokio time, so no test waits on the wall clock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use time::{Duration as TimeDuration, OffsetDateTime, macros::datetime};

use stylecraft::session::{CANNED_REPLIES, ChatSession, Clock};
use stylecraft::types::{MessageOrigin, MessageStatus};

const SESSION_START: OffsetDateTime = datetime!(2025-06-01 12:00 UTC);
const SEED_LEN: usize = 5;

/// Test clock that only moves when told to.
#[derive(Clone)]
struct ManualClock(Arc<Mutex<OffsetDateTime>>);

impl ManualClock {
    fn at(start: OffsetDateTime) -> Self {
        Self(Arc::new(Mutex::new(start)))
    }

    fn advance(&self, by: TimeDuration) {
        let mut now = self.0.lock().expect("clock lock");
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        *self.0.lock().expect("clock lock")
    }
}

fn test_session() -> (ChatSession<ManualClock, StdRng>, ManualClock) {
    let clock = ManualClock::at(SESSION_START);
    let session = ChatSession::with_capabilities(
        "Adaora Okafor",
        "Custom Wedding Dress",
        clock.clone(),
        StdRng::seed_from_u64(42),
    );
    (session, clock)
}

/// Past the [1000ms, 3000ms) delay window, every armed reply has fired.
async fn let_all_replies_fire() {
    tokio::time::sleep(Duration::from_millis(3100)).await;
}

mod seeded_transcript {
    use super::*;

    #[test]
    fn seeds_five_alternating_messages() {
        let (session, _clock) = test_session();
        let messages = session.messages();

        assert_eq!(messages.len(), SEED_LEN);
        let origins: Vec<MessageOrigin> = messages.iter().map(|m| m.origin).collect();
        assert_eq!(
            origins,
            vec![
                MessageOrigin::Counterpart,
                MessageOrigin::User,
                MessageOrigin::Counterpart,
                MessageOrigin::User,
                MessageOrigin::Counterpart,
            ]
        );
        assert!(messages[0].text.contains("Custom Wedding Dress"));
    }

    #[test]
    fn seed_timestamps_are_non_decreasing() {
        let (session, _clock) = test_session();
        let messages = session.messages();
        for pair in messages.windows(2) {
            assert!(pair[0].sent_at <= pair[1].sent_at);
        }
    }

    #[test]
    fn seed_carries_historic_statuses() {
        let (session, _clock) = test_session();
        let messages = session.messages();
        assert_eq!(messages[1].status, MessageStatus::Read);
        assert_eq!(messages[3].status, MessageStatus::Delivered);
    }

    #[test]
    fn seed_ids_are_unique() {
        let (session, _clock) = test_session();
        let mut ids: Vec<_> = session.messages().iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SEED_LEN);
    }
}

mod composing {
    use super::*;

    #[test]
    fn empty_and_whitespace_drafts_are_rejected() {
        let (mut session, _clock) = test_session();

        assert!(session.send().is_err());
        session.set_draft("   ");
        assert!(!session.can_send());
        assert!(session.send().is_err());

        // The store must be untouched by failed sends.
        assert_eq!(session.messages().len(), SEED_LEN);
        assert_eq!(session.pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn committed_text_is_trimmed_and_draft_cleared() {
        let (mut session, _clock) = test_session();

        session.set_draft("  hello  ");
        assert!(session.can_send());
        let id = session.send().expect("send");

        assert_eq!(session.draft(), "");
        let messages = session.messages();
        let sent = messages.last().expect("user message");
        assert_eq!(sent.id, id);
        assert_eq!(sent.text, "hello");
        assert_eq!(sent.origin, MessageOrigin::User);
        assert_eq!(sent.status, MessageStatus::Sent);
    }
}

mod replies {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn one_reply_per_send() {
        let (mut session, _clock) = test_session();

        session.set_draft("Can you add pockets?");
        session.send().expect("send");
        assert_eq!(session.pending_replies(), 1);

        let_all_replies_fire().await;

        let messages = session.messages();
        assert_eq!(messages.len(), SEED_LEN + 2);
        let reply = messages.last().expect("reply");
        assert_eq!(reply.origin, MessageOrigin::Counterpart);
        assert_eq!(session.pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reply_text_comes_from_the_canned_set() {
        let (mut session, _clock) = test_session();

        for round in 0..4 {
            session.set_draft(format!("message {round}"));
            session.send().expect("send");
            let_all_replies_fire().await;
        }

        let messages = session.messages();
        let replies: Vec<_> = messages[SEED_LEN..]
            .iter()
            .filter(|m| m.origin == MessageOrigin::Counterpart)
            .collect();
        assert_eq!(replies.len(), 4);
        for reply in replies {
            assert!(
                CANNED_REPLIES.contains(&reply.text.as_str()),
                "unexpected reply text: {}",
                reply.text
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_sends_keep_commit_order_and_get_one_reply_each() {
        let (mut session, _clock) = test_session();

        session.set_draft("A");
        session.send().expect("send A");
        session.set_draft("B");
        session.send().expect("send B");
        assert_eq!(session.pending_replies(), 2);

        let_all_replies_fire().await;

        let messages = session.messages();
        assert_eq!(messages.len(), SEED_LEN + 4);

        let pos_a = messages.iter().position(|m| m.text == "A").expect("A");
        let pos_b = messages.iter().position(|m| m.text == "B").expect("B");
        assert!(pos_a < pos_b);

        // Both replies fire after both commits (delays are >= 1s).
        for reply in &messages[SEED_LEN + 2..] {
            assert_eq!(reply.origin, MessageOrigin::Counterpart);
        }
        for pair in messages.windows(2) {
            assert!(pair[0].sent_at <= pair[1].sent_at);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ids_stay_unique_across_seed_sends_and_replies() {
        let (mut session, _clock) = test_session();

        for round in 0..3 {
            session.set_draft(format!("round {round}"));
            session.send().expect("send");
        }
        let_all_replies_fire().await;

        let messages = session.messages();
        assert_eq!(messages.len(), SEED_LEN + 6);
        let mut ids: Vec<_> = messages.iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), messages.len());
    }

    #[tokio::test(start_paused = true)]
    async fn ordering_holds_while_the_clock_advances() {
        let (mut session, clock) = test_session();

        for round in 0..3 {
            session.set_draft(format!("round {round}"));
            session.send().expect("send");
            clock.advance(TimeDuration::seconds(10));
            let_all_replies_fire().await;
        }

        let messages = session.messages();
        for pair in messages.windows(2) {
            assert!(pair[0].sent_at <= pair[1].sent_at);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn backwards_clock_cannot_reorder_the_log() {
        let (mut session, clock) = test_session();

        session.set_draft("first");
        session.send().expect("send");
        let_all_replies_fire().await;

        clock.advance(TimeDuration::minutes(-30));
        session.set_draft("second");
        session.send().expect("send");

        let messages = session.messages();
        let tail = &messages[messages.len() - 2..];
        assert_eq!(tail[1].text, "second");
        assert!(tail[0].sent_at <= tail[1].sent_at);
    }
}

mod teardown {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn closing_the_session_cancels_pending_replies() {
        let (mut session, _clock) = test_session();

        session.set_draft("anyone there?");
        session.send().expect("send");
        assert_eq!(session.pending_replies(), 1);

        session.close();
        let_all_replies_fire().await;

        // The user message is the last thing the log ever sees.
        let messages = session.messages();
        assert_eq!(messages.len(), SEED_LEN + 1);
        assert_eq!(messages.last().map(|m| m.origin), Some(MessageOrigin::User));
        assert_eq!(session.pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_session_cancels_pending_replies() {
        let (mut session, _clock) = test_session();

        session.set_draft("hello?");
        session.send().expect("send");
        let store_view = session.subscribe();
        drop(session);

        let_all_replies_fire().await;

        // No append can be observed after the session is gone.
        assert_eq!(*store_view.borrow(), (SEED_LEN + 1) as u64);
    }
}

mod notifications {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn observers_see_a_revision_per_append() {
        let (mut session, _clock) = test_session();
        let revisions = session.subscribe();
        assert_eq!(*revisions.borrow(), SEED_LEN as u64);

        session.set_draft("ping");
        session.send().expect("send");
        assert_eq!(*revisions.borrow(), (SEED_LEN + 1) as u64);

        let_all_replies_fire().await;
        assert_eq!(*revisions.borrow(), (SEED_LEN + 2) as u64);
    }
}
