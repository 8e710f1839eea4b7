use thiserror::Error;
use time::OffsetDateTime;

use crate::types::{Message, MessageId, MessageOrigin};

/// `commit` was called while the draft trims to nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("cannot send an empty draft")]
pub struct EmptyDraftError;

/// Holds the user's uncommitted message text. Committing is the only way a
/// user-authored message enters the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Composer {
    draft: String,
}

impl Composer {
    /// Replaces the draft. Any string is accepted as an intermediate state;
    /// validation happens at commit time.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Finalizes the draft into a user text message with the given id and
    /// timestamp, clearing the draft. Fails if the trimmed draft is empty,
    /// leaving the draft untouched.
    pub fn commit(
        &mut self,
        id: MessageId,
        sent_at: OffsetDateTime,
    ) -> Result<Message, EmptyDraftError> {
        let text = self.draft.trim();
        if text.is_empty() {
            return Err(EmptyDraftError);
        }
        let message = Message::new(id, MessageOrigin::User, text, sent_at);
        self.draft.clear();
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageStatus;
    use time::macros::datetime;

    const AT: OffsetDateTime = datetime!(2025-06-01 12:00 UTC);

    #[test]
    fn can_send_requires_non_whitespace_draft() {
        let mut composer = Composer::default();
        assert!(!composer.can_send());
        composer.set_draft("   ");
        assert!(!composer.can_send());
        composer.set_draft("  hi  ");
        assert!(composer.can_send());
    }

    #[test]
    fn commit_trims_and_clears_the_draft() {
        let mut composer = Composer::default();
        composer.set_draft("  hello  ");
        let msg = composer.commit(MessageId(1), AT).unwrap();
        assert_eq!(msg.text, "hello");
        assert_eq!(msg.origin, MessageOrigin::User);
        assert_eq!(msg.status, MessageStatus::Sent);
        assert_eq!(composer.draft(), "");
    }

    #[test]
    fn commit_rejects_empty_and_whitespace_drafts() {
        let mut composer = Composer::default();
        assert_eq!(composer.commit(MessageId(1), AT), Err(EmptyDraftError));
        composer.set_draft("   ");
        assert_eq!(composer.commit(MessageId(1), AT), Err(EmptyDraftError));
        // The failed commit must not clobber the intermediate draft.
        assert_eq!(composer.draft(), "   ");
    }

    #[test]
    fn set_draft_replaces_previous_text() {
        let mut composer = Composer::default();
        composer.set_draft("first");
        composer.set_draft("second");
        assert_eq!(composer.draft(), "second");
    }
}
