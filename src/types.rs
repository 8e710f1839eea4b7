use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Session-unique message identifier, allocated from a monotonic counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageOrigin {
    User,
    Counterpart,
}

/// Payload type. Only `Text` is produced by current flows; `Image` and
/// `File` are reserved for attachment support.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    File,
}

/// Delivery state, meaningful only for user-authored messages. Live-sent
/// messages stay `Sent`; `Delivered` and `Read` appear in the seeded
/// transcript only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sent,
    Delivered,
    Read,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sent_at: OffsetDateTime,
    pub origin: MessageOrigin,
    pub kind: MessageKind,
    pub status: MessageStatus,
}

impl Message {
    /// Builds a plain text message with status `Sent`.
    pub fn new(
        id: MessageId,
        origin: MessageOrigin,
        text: impl Into<String>,
        sent_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            sent_at,
            origin,
            kind: MessageKind::Text,
            status: MessageStatus::Sent,
        }
    }
}
